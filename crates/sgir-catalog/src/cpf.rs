//! Brazilian CPF checksum validation and display formatting.
//!
//! A CPF is an 11-digit taxpayer number whose last two digits are
//! mod-11 check digits over the preceding nine and ten digits
//! respectively. Validation here is advisory: seed records may carry
//! numbers that fail the checksum.

/// Returns `true` if `input` is a structurally valid CPF.
///
/// Non-digit characters are stripped before checking, so both
/// `"529.982.247-25"` and `"52998224725"` are accepted. Strings with
/// all eleven digits equal (`"111.111.111-11"`) are rejected even
/// though their checksum happens to pass.
///
/// # Example
///
/// ```
/// assert!(sgir_catalog::cpf::is_valid("529.982.247-25"));
/// assert!(!sgir_catalog::cpf::is_valid("529.982.247-26"));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Formats an 11-digit string as `XXX.XXX.XXX-XX`.
///
/// Returns `None` when the input does not contain exactly 11 digits.
#[must_use]
pub fn format(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return None;
    }
    Some(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..],
    ))
}

/// Mod-11 check digit over a digit prefix: weights descend from
/// `len + 1` down to 2, remainders 0 and 1 map to digit 0.
fn check_digit(prefix: &[u32]) -> u32 {
    let weight_start = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=weight_start).rev())
        .map(|(&d, w)| d * w)
        .sum();
    let rem = (sum * 10) % 11;
    if rem == 10 {
        0
    } else {
        rem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_valid_numbers() {
        assert!(is_valid("529.982.247-25"));
        assert!(is_valid("52998224725"));
        assert!(is_valid("987.654.321-00"));
    }

    #[test]
    fn rejects_bad_check_digits() {
        assert!(!is_valid("529.982.247-24"));
        assert!(!is_valid("123.456.789-00"));
        assert!(!is_valid("111.222.333-44"));
    }

    #[test]
    fn rejects_repeated_digit_strings() {
        assert!(!is_valid("000.000.000-00"));
        assert!(!is_valid("11111111111"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid(""));
        assert!(!is_valid("1234567890"));
        assert!(!is_valid("123456789012"));
    }

    #[test]
    fn formats_digit_strings() {
        assert_eq!(format("52998224725").as_deref(), Some("529.982.247-25"));
        assert_eq!(format("529.982.247-25").as_deref(), Some("529.982.247-25"));
        assert_eq!(format("1234"), None);
    }
}
