// RFC 5987 style escaping for the Content-Disposition filename.

/// Escapes a filename byte by byte so it can be embedded in a header value.
///
/// `0-9 a-z A-Z - _ .` pass through, C0 controls and DEL become `_`,
/// every other byte (including each byte of a multi-byte UTF-8 sequence)
/// becomes an uppercase `%XX` escape.
pub fn escape_utf8_file_name(original_name: &str) -> String {
    let mut escaped = String::with_capacity(original_name.len());
    for &b in original_name.as_bytes() {
        match b {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_' | b'.' => escaped.push(b as char),
            0x00..=0x1F | 0x7F => escaped.push('_'),
            _ => escaped.push_str(&format!("%{:02X}", b)),
        }
    }
    escaped
}

/// Builds the attachment header value. The extended `filename*` value stays
/// quoted because existing clients were tested against that form.
pub fn content_disposition(original_name: &str) -> String {
    let escaped = escape_utf8_file_name(original_name);
    format!(
        "attachment; filename=\"{}\"; filename*=utf-8''\"{}\"",
        escaped, escaped
    )
}
