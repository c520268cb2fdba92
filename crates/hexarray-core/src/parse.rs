use crate::error::RangeError;

/// Parse a hexadecimal integer argument.
///
/// Accepts what the usual host parsers accept for base 16:
/// - surrounding ASCII whitespace
/// - an optional leading `-` or `+`
/// - an optional `0x` / `0X` prefix
///
/// The digits themselves are case-insensitive.
pub fn parse_hex(text: &str) -> Result<i64, RangeError> {
    let trimmed = text.trim();

    let (negative, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
        .unwrap_or(magnitude);

    // from_str_radix accepts its own sign; the one we stripped was it.
    if digits.starts_with(['+', '-']) {
        return Err(RangeError::InvalidHex(text.to_string()));
    }

    let value = i64::from_str_radix(digits, 16)
        .map_err(|_| RangeError::InvalidHex(text.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Parse a decimal integer argument (sign allowed).
pub fn parse_decimal(text: &str) -> Result<i64, RangeError> {
    text.trim()
        .parse()
        .map_err(|_| RangeError::InvalidDecimal(text.to_string()))
}
