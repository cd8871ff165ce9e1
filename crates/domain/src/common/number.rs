//! Numeric parsing with form-input semantics.

/// Parses a raw form value the way a numeric form input reads it.
///
/// Surrounding whitespace is ignored and a blank value reads as `0`.
/// `NaN` never parses; `Infinity` does. Unsigned `0x`, `0o` and `0b`
/// literals are read in their radix; a sign in front of them is refused.
///
/// # Examples
///
/// ```
/// use cochar_domain::common::parse_form_number;
///
/// assert_eq!(parse_form_number(" 42 "), Some(42.0));
/// assert_eq!(parse_form_number(""), Some(0.0));
/// assert_eq!(parse_form_number("1e2"), Some(100.0));
/// assert_eq!(parse_form_number("0x1E"), Some(30.0));
/// assert_eq!(parse_form_number("-0x10"), None);
/// assert_eq!(parse_form_number("forty"), None);
/// ```
pub fn parse_form_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(trimmed) {
        return Some(n);
    }

    // `str::parse::<f64>` also takes "inf" and "nan" spellings
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// `0x1E`, `0o36`, `0b11110`. `None` when there is no radix prefix or the
/// digits do not belong to the radix.
fn parse_radix_literal(text: &str) -> Option<f64> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    let digits = chars.as_str();
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
