use crate::error::RangeError;

/// Render a value as a fixed-width 32-bit hex literal, e.g. `0xE000_9000`.
///
/// The field is exactly 8 uppercase digits split into two 4-digit groups.
/// Values outside `0 ..= u32::MAX` are rejected rather than truncated or
/// widened; a line of the wrong width would corrupt the register tables
/// the output is pasted into.
pub fn hex_word(value: i64) -> Result<String, RangeError> {
    let word = u32::try_from(value).map_err(|_| RangeError::Unrepresentable(value))?;
    let digits = format!("{word:08X}");
    Ok(format!("0x{}_{}", &digits[..4], &digits[4..]))
}
