#![allow(dead_code)]

use setlaws_core::{FiniteSet, NamedSet};
use setlaws_verify::SetSystem;

pub fn named(label: &str, values: &[i64]) -> NamedSet {
    NamedSet::labelled(label, FiniteSet::from_ints(values.iter().copied())).unwrap()
}

pub fn universe(start: i64, end: i64) -> NamedSet {
    NamedSet::labelled("U", FiniteSet::range_inclusive(start, end).unwrap()).unwrap()
}

/// U = {1..9}, A = {2,3,4}, B = {2,3,4,8}, C = {1,8}.
pub fn euler_system() -> SetSystem {
    SetSystem::new(
        universe(1, 9),
        vec![
            named("A", &[2, 3, 4]),
            named("B", &[2, 3, 4, 8]),
            named("C", &[1, 8]),
        ],
    )
    .unwrap()
}

/// U = {1..12}, A = {1,2,3,6}, B = {2,4,6,8}, C = {1,5,6,9,10}.
pub fn textbook_system() -> SetSystem {
    SetSystem::new(
        universe(1, 12),
        vec![
            named("A", &[1, 2, 3, 6]),
            named("B", &[2, 4, 6, 8]),
            named("C", &[1, 5, 6, 9, 10]),
        ],
    )
    .unwrap()
}
