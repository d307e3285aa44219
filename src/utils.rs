/// Clamps a requested volume into Spotify's accepted `0..=100` range.
///
/// Out-of-range input is corrected rather than rejected.
pub fn clamp_volume(volume: i64) -> u8 {
    volume.clamp(0, 100) as u8
}

/// Parses a requested volume as a signed whole number.
///
/// Values too large for `i64` saturate instead of failing, so that clamping
/// can still correct them. Anything that isn't an optional sign followed by
/// digits yields `None`.
pub fn parse_volume(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match raw.parse::<i64>() {
        Ok(volume) => Some(volume),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Shortens a token to something safe to print.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if visible.is_empty() {
        return "<empty>".to_string();
    }
    format!("{}…", visible)
}

/// Escapes text for embedding in the callback's HTML page.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
