/// Country names the API is known to send, mapped to their ISO 3166-1 code.
const COUNTRY_CODES: &[(&str, &str)] = &[("USA", "US"), ("Spain", "ES"), ("Ecuador", "EC")];

/// Region codes that have a flag icon.
const FLAG_CODES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFlag {
    Icon {
        code: String,
        emoji: String,
        country: String,
    },
    TextOnly {
        country: String,
    },
}

impl CountryFlag {
    pub fn country(&self) -> &str {
        match self {
            CountryFlag::Icon { country, .. } | CountryFlag::TextOnly { country } => country,
        }
    }

    pub fn emoji(&self) -> Option<&str> {
        match self {
            CountryFlag::Icon { emoji, .. } => Some(emoji),
            CountryFlag::TextOnly { .. } => None,
        }
    }
}

/// Lookup key for a country's flag icon: the mapped region code when the
/// country is in the table, otherwise the country string itself.
pub fn resolve_code(country: &str) -> &str {
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
        .unwrap_or(country)
}

pub fn country_flag(country: &str) -> CountryFlag {
    let code = resolve_code(country);
    match flag_emoji(code) {
        Some(emoji) => CountryFlag::Icon {
            code: code.to_string(),
            emoji,
            country: country.to_string(),
        },
        None => CountryFlag::TextOnly {
            country: country.to_string(),
        },
    }
}

fn flag_emoji(code: &str) -> Option<String> {
    if !FLAG_CODES.contains(&code) {
        return None;
    }
    code.chars()
        .map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code_from_table() {
        assert_eq!(resolve_code("USA"), "US");
        assert_eq!(resolve_code("Spain"), "ES");
        assert_eq!(resolve_code("Ecuador"), "EC");
    }

    #[test]
    fn test_resolve_code_passes_unknown_through() {
        assert_eq!(resolve_code("France"), "France");
        assert_eq!(resolve_code(""), "");
    }

    #[test]
    fn test_known_country_gets_icon() {
        let flag = country_flag("USA");
        assert_eq!(
            flag,
            CountryFlag::Icon {
                code: "US".to_string(),
                emoji: "🇺🇸".to_string(),
                country: "USA".to_string(),
            }
        );
        assert_eq!(flag.country(), "USA");
    }

    #[test]
    fn test_unmapped_country_falls_back_to_text() {
        let flag = country_flag("France");
        assert_eq!(
            flag,
            CountryFlag::TextOnly {
                country: "France".to_string()
            }
        );
        assert_eq!(flag.emoji(), None);
    }

    #[test]
    fn test_raw_region_code_is_used_as_key() {
        assert_eq!(country_flag("NZ").emoji(), Some("🇳🇿"));
        // lookup is exact, lower case is not a code
        assert_eq!(country_flag("nz").emoji(), None);
    }

    #[test]
    fn test_flag_codes_are_sorted_and_well_formed() {
        assert!(FLAG_CODES.windows(2).all(|w| w[0] < w[1]));
        assert!(
            FLAG_CODES
                .iter()
                .all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase()))
        );
    }
}
