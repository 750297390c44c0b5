/// Escape characters that are meaningful in HTML markup.
///
/// `&`, `<`, `>`, `"` and `'` become entity references, so the result can be
/// placed in element content or a quoted attribute value without being
/// interpreted as markup. `&` is replaced first so existing entities are
/// escaped rather than preserved.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
