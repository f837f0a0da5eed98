// src/shared/api/encode.rs

/// HTML-escapes serialized JSON so it survives being written into an iframe
/// document. Quotes are left alone so the text stays valid JSON once the
/// browser decodes the entities.
pub fn encode_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
