// src/domain/naics.rs

/// Bucket for businesses that carry no NAICS code at all.
pub const UNKNOWN_SECTOR: &str = "Unknown";
/// Bucket for codes whose two-digit prefix is not a recognised sector.
pub const OTHER_SECTOR: &str = "Other";

/// Two-digit NAICS prefix -> sector name. Several prefixes share a sector.
pub const NAICS_SECTORS: &[(&str, &str)] = &[
    ("11", "Agriculture, Forestry, Fishing, and Hunting"),
    ("21", "Mining, Quarrying, and Oil and Gas Extraction"),
    ("22", "Utilities"),
    ("23", "Construction"),
    ("31", "Manufacturing"),
    ("32", "Manufacturing"),
    ("33", "Manufacturing"),
    ("42", "Wholesale Trade"),
    ("44", "Retail Trade"),
    ("45", "Retail Trade"),
    ("48", "Transportation and Warehousing"),
    ("49", "Transportation and Warehousing"),
    ("51", "Information"),
    ("52", "Finance and Insurance"),
    ("53", "Real Estate and Rental and Leasing"),
    ("54", "Professional, Scientific, and Technical Services"),
    ("55", "Management of Companies and Enterprises"),
    (
        "56",
        "Administrative and Support and Waste Management and Remediation Services",
    ),
    ("61", "Educational Services"),
    ("62", "Health Care and Social Assistance"),
    ("71", "Arts, Entertainment, and Recreation"),
    ("72", "Accommodation and Food Services"),
    ("81", "Other Services (except Public Administration)"),
    ("92", "Public Administration"),
    ("99", "Unclassified Establishments"),
];

pub fn sector_name(prefix: &str) -> Option<&'static str> {
    NAICS_SECTORS
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, name)| *name)
}

/// First two characters of a code. Shorter codes are their own prefix.
pub fn sector_prefix(code: &str) -> &str {
    match code.char_indices().nth(2) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

/// Display name for a code: its sector, or [`OTHER_SECTOR`] when unmapped.
pub fn sector_for_code(code: &str) -> &'static str {
    sector_name(sector_prefix(code)).unwrap_or(OTHER_SECTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_first_two_chars() {
        assert_eq!(sector_prefix("722511"), "72");
        assert_eq!(sector_prefix("52"), "52");
        assert_eq!(sector_prefix("5"), "5");
        assert_eq!(sector_prefix(""), "");
    }

    #[test]
    fn shared_prefixes_resolve_to_same_sector() {
        assert_eq!(sector_for_code("3111"), "Manufacturing");
        assert_eq!(sector_for_code("3399"), "Manufacturing");
        assert_eq!(sector_for_code("4411"), sector_for_code("4539"));
    }

    #[test]
    fn unmapped_and_short_codes_are_other() {
        assert_eq!(sector_for_code("0000"), OTHER_SECTOR);
        assert_eq!(sector_for_code("5"), OTHER_SECTOR);
    }
}
