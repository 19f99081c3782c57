/// Reads the leading integer of a form field.
///
/// Leading whitespace is skipped, an optional sign is accepted and a `0x`
/// prefix switches to hexadecimal. Digits are consumed up to the first
/// character that is not one, so `"170cm"` and `"170.9"` both read as 170.
/// Returns `None` when there are no digits at all.
///
/// The value is kept as `f64`: long digit strings overflow to infinity
/// instead of failing, and it is up to the caller to reject them.
pub fn parse_int(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(is_form_whitespace);
    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = match text.get(..2) {
        Some("0x") | Some("0X") => parse_hex(&text[2..]),
        _ => parse_decimal(text),
    }?;

    Some(if negative { -magnitude } else { magnitude })
}

/// Whitespace as browsers skip it before a number: Unicode spaces and line
/// terminators plus U+FEFF, but not U+0085.
fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn parse_decimal(text: &str) -> Option<f64> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    // A run of ASCII digits always parses; this only rounds very long inputs.
    text[..end].parse().ok()
}

fn parse_hex(text: &str) -> Option<f64> {
    let mut digits = text.chars().map_while(|c| c.to_digit(16)).peekable();
    digits.peek()?;
    Some(digits.fold(0.0, |acc, digit| acc * 16.0 + digit as f64))
}
