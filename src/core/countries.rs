//! Country sets used for identity and address disambiguation.

/// Italy.
pub const COUNTRY_IT: &str = "IT";

/// EU member state country codes (ISO 3166-1 alpha-2), sorted for binary search.
///
/// Greece appears as "EL" in VAT numbers, so both spellings are listed.
static EU_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

/// Check whether `country` is an EU member state. Case-insensitive.
pub fn is_eu_country(country: &str) -> bool {
    EU_COUNTRIES
        .binary_search(&country.to_ascii_uppercase().as_str())
        .is_ok()
}

/// Check whether `country` is Italy. Case-insensitive.
pub fn is_italy(country: &str) -> bool {
    country.eq_ignore_ascii_case(COUNTRY_IT)
}
