/// Parse a declared mask size the way a lenient host attribute parser does.
///
/// Leading whitespace is skipped and the longest leading decimal literal is used, so `"700px"`
/// reads as `700`. Returns `None` when no number can be read.
pub fn parse_declared_size(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Declared size for a hover target, falling back to `base_size` for empty or unparseable values.
pub fn resolve_declared_size(raw: &str, base_size: f64) -> f64 {
    if raw.trim().is_empty() {
        return base_size;
    }
    match parse_declared_size(raw) {
        Some(size) => size,
        None => {
            tracing::warn!(raw, base_size, "unparseable mask size, using base size");
            base_size
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/size.rs"]
mod tests;
