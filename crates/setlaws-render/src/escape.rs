/// Escapes the LaTeX specials `\ { } # $ % & _ ~ ^` in free-form text.
pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '#' => out.push_str("\\#"),
            '$' => out.push_str("\\$"),
            '%' => out.push_str("\\%"),
            '&' => out.push_str("\\&"),
            '_' => out.push_str("\\_"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            ch if ch.is_control() => out.push(' '),
            ch => out.push(ch),
        }
    }
    out
}

/// Makes a label safe for single-line plain-text output.
///
/// Control characters are always escaped; other non-ASCII characters are
/// escaped only in ASCII-only mode.
pub fn sanitize_label(label: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_control() || (ascii_only && !ch.is_ascii()) {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}
