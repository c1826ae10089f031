//! Shebang and byte-order mark handling.

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Offset at which a header comment may begin.
///
/// A leading byte-order mark is stepped over so an inserted header never
/// lands in front of it. For text starting with `#!` this is the start of
/// the line after the shebang, so the violation marker attaches to that
/// line. A file holding nothing but an unterminated shebang yields the text
/// length.
pub fn header_offset(text: &str) -> usize {
    let start = if text.starts_with(BYTE_ORDER_MARK) {
        BYTE_ORDER_MARK.len_utf8()
    } else {
        0
    };

    let rest = &text[start..];
    if !rest.starts_with("#!") {
        return start;
    }

    match rest[2..].find('\n') {
        Some(pos) => start + pos + 2 + 1,
        None => text.len(),
    }
}

/// Whether `prefix` (the text before the header offset) ends mid-line.
pub(crate) fn ends_mid_line(prefix: &str) -> bool {
    let prefix = prefix.strip_prefix(BYTE_ORDER_MARK).unwrap_or(prefix);
    !prefix.is_empty() && !prefix.ends_with('\n')
}
