//! LIKE pattern helpers for name search.

/// ## Summary
/// Escapes special SQL LIKE/ILIKE pattern characters.
///
/// Escapes `%`, `_`, and `\` so they match literally.
#[must_use]
pub fn escape_like_pattern(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' | '_' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// ## Summary
/// Builds a LIKE pattern matching values that begin with `value`.
#[must_use]
pub fn build_prefix_pattern(value: &str) -> String {
    format!("{}%", escape_like_pattern(value))
}
