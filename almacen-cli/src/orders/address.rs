//! Address sanitization for the delivery platform
//!
//! The platform's geocoder chokes on a few characters that show up in
//! operator-entered Mexican addresses: "#" (house-number marker), the
//! masculine ordinal "º" (as in "1º piso"), and doubled commas left behind
//! by copy-paste. Those are removed before the address goes on the wire;
//! the report and comment fields keep the original text.

/// Sanitize an address for the creation payload.
///
/// Removes every "#" and "º" and collapses ",," into ",". Applying it a
/// second time is a no-op for already-sanitized text.
pub fn sanitize_address(address: &str) -> String {
    address
        .replace('#', "")
        .replace('º', "")
        .replace(",,", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hash_and_ordinal_and_double_commas() {
        assert_eq!(
            sanitize_address("Calle #5, ,, CP 00000º"),
            "Calle 5, , CP 00000"
        );
    }

    #[test]
    fn test_idempotent_on_second_application() {
        let once = sanitize_address("Calle #5, ,, CP 00000º");
        assert_eq!(sanitize_address(&once), once);
    }

    #[test]
    fn test_clean_address_is_unchanged() {
        assert_eq!(
            sanitize_address("Av. Insurgentes Sur 1457, Col. Mixcoac"),
            "Av. Insurgentes Sur 1457, Col. Mixcoac"
        );
    }

    #[test]
    fn test_multiple_hashes_removed() {
        assert_eq!(sanitize_address("##12 int #3"), "12 int 3");
    }
}
