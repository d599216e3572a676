use setlaws_verify::SetExpr;

/// Operator spellings for one output format.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Symbols {
    pub union: &'static str,
    pub intersection: &'static str,
    pub minus: &'static str,
}

pub(crate) const UNICODE: Symbols = Symbols {
    union: "∪",
    intersection: "∩",
    minus: "\\",
};

pub(crate) const ASCII: Symbols = Symbols {
    union: "union",
    intersection: "intersect",
    minus: "\\",
};

pub(crate) const LATEX: Symbols = Symbols {
    union: "\\cup",
    intersection: "\\cap",
    minus: "\\setminus",
};

/// Prints `expr` with operand `i` shown as `labels[i]`.
///
/// Non-atomic children are parenthesised; the top level never is.
pub(crate) fn render_expr(
    expr: &SetExpr,
    symbols: &Symbols,
    universe: &str,
    labels: &[String],
) -> String {
    match expr {
        SetExpr::Operand(idx) => labels.get(*idx).cloned().unwrap_or_else(|| "?".to_string()),
        SetExpr::Complement(inner) => format!(
            "{universe} {} {}",
            symbols.minus,
            child(inner, symbols, universe, labels)
        ),
        SetExpr::Union(left, right) => format!(
            "{} {} {}",
            child(left, symbols, universe, labels),
            symbols.union,
            child(right, symbols, universe, labels)
        ),
        SetExpr::Intersection(left, right) => format!(
            "{} {} {}",
            child(left, symbols, universe, labels),
            symbols.intersection,
            child(right, symbols, universe, labels)
        ),
    }
}

fn child(expr: &SetExpr, symbols: &Symbols, universe: &str, labels: &[String]) -> String {
    let inner = render_expr(expr, symbols, universe, labels);
    if expr.is_atom() {
        inner
    } else {
        format!("({inner})")
    }
}
