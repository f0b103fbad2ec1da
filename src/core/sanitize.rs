// src/core/sanitize.rs

/// Collapse runs of whitespace to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Terminal input as the session compares it: whitespace-normalized.
pub fn normalize_input(s: &str) -> String {
    normalize_ws(s)
}

/// Case-insensitive key for state names.
pub fn state_key(name: &str) -> String {
    normalize_ws(name).to_lowercase()
}

/// A 1-based menu pick. Digits only; no sign, no whitespace inside.
pub fn parse_menu_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
