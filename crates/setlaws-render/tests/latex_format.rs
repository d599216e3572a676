mod common;

use setlaws_core::{Element, FiniteSet, SetLabel, SetLawError};
use setlaws_render::{
    latex_escape, latex_label, latex_set, LatexRenderer, Renderer, BLOCK_SEPARATOR,
};
use setlaws_verify::{
    associative_intersection, de_morgan_union, distributive_union_over_intersection,
    IdentityResult, Law, SetSystem,
};

use common::{named, report_for, textbook_system, universe};

#[test]
fn de_morgan_block_matches_layout() -> Result<(), SetLawError> {
    let result = de_morgan_union(
        &universe(1, 12),
        &named("A", &[1, 2, 3, 6]),
        &named("B", &[2, 4, 6, 8]),
    )?;
    let expected = r"\[
\begin{aligned}
U \setminus (A \cup B)
&= (U \setminus A) \cap (U \setminus B) && \text{by De Morgan}\\[2pt]
&= \{5, 7, 9, 10, 11, 12\} \quad\text{and}\quad \{5, 7, 9, 10, 11, 12\} && \text{compute both sides}\\
&\text{so the sets are equal.}
\end{aligned}
\]
";
    assert_eq!(LatexRenderer::new().render_identity(&result), expected);
    Ok(())
}

#[test]
fn associativity_statement_is_one_line() -> Result<(), SetLawError> {
    let result = associative_intersection(
        &named("A", &[1, 2, 3, 6]),
        &named("B", &[2, 4, 6, 8]),
        &named("C", &[1, 5, 6, 9, 10]),
    )?;
    let rendered = LatexRenderer::new().render_identity(&result);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines[2],
        r"(A \cap B) \cap C &= A \cap (B \cap C) && \text{associativity}\\[2pt]"
    );
    assert_eq!(
        lines[3],
        r"&= \{6\} \quad\text{and}\quad \{6\} && \text{compute both sides}\\"
    );
    Ok(())
}

#[test]
fn distributive_cites_the_law() -> Result<(), SetLawError> {
    let result = distributive_union_over_intersection(
        &named("A", &[1, 2, 3, 6]),
        &named("B", &[2, 4, 6, 8]),
        &named("C", &[1, 5, 6, 9, 10]),
    )?;
    let rendered = LatexRenderer::new().render_identity(&result);
    assert!(rendered.contains("A \\cup (B \\cap C)\n"));
    assert!(rendered.contains(
        "&= (A \\cup B) \\cap (A \\cup C) && \\text{distributive law}\\\\[2pt]"
    ));
    Ok(())
}

#[test]
fn failing_identity_says_not_equal() -> Result<(), SetLawError> {
    let result = IdentityResult {
        law: Law::AssociativeUnion,
        universe: None,
        operands: vec![SetLabel::new("A")?, SetLabel::new("B")?, SetLabel::new("C")?],
        lhs: FiniteSet::from_ints([1, 2]),
        rhs: FiniteSet::empty(),
        holds: false,
    };
    let rendered = LatexRenderer::new().render_identity(&result);
    assert!(rendered.contains(r"&= \{1, 2\} \quad\text{and}\quad \emptyset"));
    assert!(rendered.contains(r"&\text{so the sets are not equal.}"));
    assert!(!rendered.contains(r"so the sets are equal."));
    Ok(())
}

#[test]
fn report_blocks_are_separated() -> Result<(), SetLawError> {
    let report = report_for(&textbook_system())?;
    let rendered = LatexRenderer::new().render_report(&report);
    assert_eq!(rendered.matches(BLOCK_SEPARATOR).count(), 9);
    assert_eq!(rendered.matches(r"\begin{aligned}").count(), 10);
    Ok(())
}

#[test]
fn specials_are_escaped() {
    assert_eq!(
        latex_escape(r"\{}#$%&_~^"),
        r"\textbackslash{}\{\}\#\$\%\&\_\textasciitilde{}\textasciicircum{}"
    );
    assert_eq!(latex_escape("plain text"), "plain text");
    assert_eq!(latex_escape("a\nb"), "a b");
}

#[test]
fn labels_and_text_elements_use_text_mode() -> Result<(), SetLawError> {
    assert_eq!(latex_label("A"), "A");
    assert_eq!(latex_label("set_1"), r"\text{set\_1}");
    assert_eq!(latex_label("Ω"), r"\text{Ω}");

    let set: FiniteSet = ["50%", "x"].into_iter().collect();
    assert_eq!(latex_set(&set), r"\{\text{50\%}, \text{x}\}");
    let mixed: FiniteSet = vec![Element::Int(3), Element::Text("a".into())]
        .into_iter()
        .collect();
    assert_eq!(latex_set(&mixed), r"\{3, \text{a}\}");
    assert_eq!(latex_set(&FiniteSet::empty()), r"\emptyset");

    let result = de_morgan_union(
        &universe(1, 3),
        &named("left_set", &[1]),
        &named("B", &[2]),
    )?;
    let rendered = LatexRenderer::new().render_identity(&result);
    assert!(rendered.contains(r"U \setminus (\text{left\_set} \cup B)"));
    Ok(())
}

#[test]
fn rendering_is_deterministic() -> Result<(), SetLawError> {
    let report = report_for(&textbook_system())?;
    let renderer = LatexRenderer::new();
    assert_eq!(renderer.render_report(&report), renderer.render_report(&report));
    Ok(())
}

#[test]
fn every_law_on_empty_sets_computes_empty_sides() -> Result<(), SetLawError> {
    let system = SetSystem::new(
        universe(1, 0),
        vec![named("A", &[]), named("B", &[]), named("C", &[])],
    )?;
    let report = report_for(&system)?;
    assert!(report.all_hold());
    let rendered = LatexRenderer::new().render_report(&report);
    let computed: Vec<&str> = rendered
        .lines()
        .filter(|line| line.ends_with(r"\text{compute both sides}\\"))
        .collect();
    assert_eq!(computed.len(), 10);
    for line in computed {
        assert_eq!(
            line,
            r"&= \emptyset \quad\text{and}\quad \emptyset && \text{compute both sides}\\"
        );
    }
    assert_eq!(rendered.matches(r"&\text{so the sets are equal.}").count(), 10);
    Ok(())
}
