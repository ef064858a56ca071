//! Phone normalization for the delivery platform
//!
//! Spreadsheet phone cells arrive in whatever shape the operator typed:
//! formatted national numbers ("55 1234-5678"), already-prefixed numbers,
//! or numeric cells that picked up a ".0" suffix on export. The platform
//! wants E.164-style "+52..." strings for 10-digit national numbers and
//! everything else passed through untouched.

/// Country prefix applied to bare 10-digit national numbers.
const COUNTRY_PREFIX: &str = "+52";

/// Normalize a phone value for submission.
///
/// Strips spaces, hyphens, underscores and the ".0" numeric-export
/// artifact, then prepends "+52" when the remainder is exactly 10
/// characters and not already prefixed with "52" or "+52". Anything else
/// is returned as-is; this function never fails and performs no further
/// validation.
pub fn normalize(phone: &str) -> String {
    let stripped = phone
        .replace(' ', "")
        .replace('-', "")
        .replace('_', "")
        .replace(".0", "");

    if stripped.len() == 10 && !stripped.starts_with("52") && !stripped.starts_with("+52") {
        return format!("{}{}", COUNTRY_PREFIX, stripped);
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_national_number_gets_prefix() {
        assert_eq!(normalize("5512345678"), "+525512345678");
    }

    #[test]
    fn test_already_prefixed_is_unchanged() {
        assert_eq!(normalize("+525512345678"), "+525512345678");
        assert_eq!(normalize("525512345678"), "525512345678");
    }

    #[test]
    fn test_spaces_are_stripped_before_length_check() {
        // 12 chars after stripping, so no prefix is added.
        assert_eq!(normalize("52 5512345678"), "525512345678");
        // Stripping the space brings this down to exactly 10 digits.
        assert_eq!(normalize("55 12345678"), "+525512345678");
    }

    #[test]
    fn test_numeric_export_artifact_is_stripped() {
        assert_eq!(normalize("5512345678.0"), "+525512345678");
    }

    #[test]
    fn test_hyphens_and_underscores_are_stripped() {
        assert_eq!(normalize("55-1234_5678"), "+525512345678");
    }

    #[test]
    fn test_ten_digits_starting_with_52_not_prefixed() {
        // Looks like it already carries the country code, left alone.
        assert_eq!(normalize("5212345678"), "5212345678");
    }

    #[test]
    fn test_malformed_values_pass_through() {
        assert_eq!(normalize("no phone"), "nophone");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("12345"), "12345");
    }
}
