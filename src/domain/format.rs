//! Input masking for postal codes and phone numbers.
//!
//! These are pure, total functions: malformed input degrades to a shorter
//! masked string, never an error.

/// Strip everything but ASCII digits from the input.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Mask a Brazilian postal code (CEP) as `NNNNN-NNN`.
///
/// Five or fewer digits are returned unmasked; longer input is truncated
/// to eight significant digits.
#[must_use]
pub fn format_postal_code(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() <= 5 {
        return digits;
    }
    let tail_end = digits.len().min(8);
    format!("{}-{}", &digits[..5], &digits[5..tail_end])
}

/// Mask a Brazilian phone number as `(NN) NNNNN-NNNN`.
///
/// Two or fewer digits are returned unmasked; three to seven digits get
/// the area-code mask only; longer input is truncated to eleven
/// significant digits.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() <= 2 {
        return digits;
    }
    if digits.len() <= 7 {
        return format!("({}) {}", &digits[..2], &digits[2..]);
    }
    let tail_end = digits.len().min(11);
    format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..tail_end])
}
