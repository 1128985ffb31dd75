//! Country code to flag emoji conversion
//!
//! A flag emoji is a pair of Unicode regional indicator symbols, one per letter
//! of the ISO 3166 alpha-2 country code. `A` maps to U+1F1E6, `Z` to U+1F1FF.

/// Offset between an ASCII uppercase letter and its regional indicator symbol
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1A5;

/// Convert a country code such as `"US"` into its flag emoji
///
/// The code is upper-cased first. Characters outside `A..=Z` have no regional
/// indicator and are dropped, so an empty or non-alphabetic code yields an
/// empty string.
pub fn country_flag(country: &str) -> String {
    country
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_OFFSET + c as u32))
        .collect()
}
