//! English display names and aliases for country codes.
//!
//! Boundary datasets disagree on naming ("Czechia" vs "Czech Republic",
//! "United States" vs "United States of America"), so each code carries the
//! list of names seen across providers. The first alias is the preferred
//! display name.

use crate::types::CountryCode;

/// Format: (alpha-3 code, aliases). `XKX` and `XNC` are project pseudo-codes
/// for Kosovo and Northern Cyprus, which have no ISO assignment.
const COUNTRY_ALIASES: &[(&str, &[&str])] = &[
    ("AFG", &["Afghanistan"]),
    ("ALB", &["Albania"]),
    ("DZA", &["Algeria"]),
    ("AND", &["Andorra"]),
    ("AGO", &["Angola"]),
    ("ATG", &["Antigua and Barbuda"]),
    ("ARG", &["Argentina"]),
    ("ARM", &["Armenia"]),
    ("AUS", &["Australia"]),
    ("AUT", &["Austria"]),
    ("AZE", &["Azerbaijan"]),
    ("BHS", &["Bahamas", "The Bahamas"]),
    ("BHR", &["Bahrain"]),
    ("BGD", &["Bangladesh"]),
    ("BRB", &["Barbados"]),
    ("BLR", &["Belarus"]),
    ("BEL", &["Belgium"]),
    ("BLZ", &["Belize"]),
    ("BEN", &["Benin"]),
    ("BTN", &["Bhutan"]),
    ("BOL", &["Bolivia"]),
    ("BIH", &["Bosnia and Herzegovina", "Bosnia and Herz."]),
    ("BWA", &["Botswana"]),
    ("BRA", &["Brazil"]),
    ("BRN", &["Brunei", "Brunei Darussalam"]),
    ("BGR", &["Bulgaria"]),
    ("BFA", &["Burkina Faso"]),
    ("BDI", &["Burundi"]),
    ("KHM", &["Cambodia"]),
    ("CMR", &["Cameroon"]),
    ("CAN", &["Canada"]),
    ("CPV", &["Cape Verde", "Cabo Verde"]),
    ("CAF", &["Central African Republic", "Central African Rep."]),
    ("TCD", &["Chad"]),
    ("CHL", &["Chile"]),
    ("CHN", &["China", "People's Republic of China"]),
    ("COL", &["Colombia"]),
    ("COM", &["Comoros"]),
    ("COG", &["Republic of the Congo", "Congo-Brazzaville"]),
    ("COD", &["Democratic Republic of the Congo", "Dem. Rep. Congo", "Congo-Kinshasa"]),
    ("CRI", &["Costa Rica"]),
    ("CIV", &["Ivory Coast", "Cote d'Ivoire", "Côte d'Ivoire"]),
    ("HRV", &["Croatia"]),
    ("CUB", &["Cuba"]),
    ("CYP", &["Cyprus"]),
    ("CZE", &["Czechia", "Czech Republic"]),
    ("DNK", &["Denmark"]),
    ("DJI", &["Djibouti"]),
    ("DMA", &["Dominica"]),
    ("DOM", &["Dominican Republic", "Dominican Rep."]),
    ("ECU", &["Ecuador"]),
    ("EGY", &["Egypt"]),
    ("SLV", &["El Salvador"]),
    ("GNQ", &["Equatorial Guinea", "Eq. Guinea"]),
    ("ERI", &["Eritrea"]),
    ("EST", &["Estonia"]),
    ("SWZ", &["Eswatini", "Swaziland"]),
    ("ETH", &["Ethiopia"]),
    ("FJI", &["Fiji"]),
    ("FIN", &["Finland"]),
    ("FRA", &["France"]),
    ("GAB", &["Gabon"]),
    ("GMB", &["Gambia", "The Gambia"]),
    ("GEO", &["Georgia"]),
    ("DEU", &["Germany"]),
    ("GHA", &["Ghana"]),
    ("GRC", &["Greece"]),
    ("GRD", &["Grenada"]),
    ("GTM", &["Guatemala"]),
    ("GIN", &["Guinea"]),
    ("GNB", &["Guinea-Bissau"]),
    ("GUY", &["Guyana"]),
    ("HTI", &["Haiti"]),
    ("HND", &["Honduras"]),
    ("HUN", &["Hungary"]),
    ("ISL", &["Iceland"]),
    ("IND", &["India"]),
    ("IDN", &["Indonesia"]),
    ("IRN", &["Iran", "Islamic Republic of Iran"]),
    ("IRQ", &["Iraq"]),
    ("IRL", &["Ireland"]),
    ("ISR", &["Israel"]),
    ("ITA", &["Italy"]),
    ("JAM", &["Jamaica"]),
    ("JPN", &["Japan"]),
    ("JOR", &["Jordan"]),
    ("KAZ", &["Kazakhstan"]),
    ("KEN", &["Kenya"]),
    ("KIR", &["Kiribati"]),
    ("PRK", &["North Korea", "Dem. Rep. Korea"]),
    ("KOR", &["South Korea", "Republic of Korea"]),
    ("XKX", &["Kosovo", "Republic of Kosovo"]),
    ("KWT", &["Kuwait"]),
    ("KGZ", &["Kyrgyzstan"]),
    ("LAO", &["Laos", "Lao PDR"]),
    ("LVA", &["Latvia"]),
    ("LBN", &["Lebanon"]),
    ("LSO", &["Lesotho"]),
    ("LBR", &["Liberia"]),
    ("LBY", &["Libya"]),
    ("LIE", &["Liechtenstein"]),
    ("LTU", &["Lithuania"]),
    ("LUX", &["Luxembourg"]),
    ("MDG", &["Madagascar"]),
    ("MWI", &["Malawi"]),
    ("MYS", &["Malaysia"]),
    ("MDV", &["Maldives"]),
    ("MLI", &["Mali"]),
    ("MLT", &["Malta"]),
    ("MHL", &["Marshall Islands"]),
    ("MRT", &["Mauritania"]),
    ("MUS", &["Mauritius"]),
    ("MEX", &["Mexico"]),
    ("FSM", &["Micronesia", "Federated States of Micronesia"]),
    ("MDA", &["Moldova", "Republic of Moldova"]),
    ("MCO", &["Monaco"]),
    ("MNG", &["Mongolia"]),
    ("MNE", &["Montenegro"]),
    ("MAR", &["Morocco"]),
    ("MOZ", &["Mozambique"]),
    ("MMR", &["Myanmar", "Burma"]),
    ("NAM", &["Namibia"]),
    ("NRU", &["Nauru"]),
    ("NPL", &["Nepal"]),
    ("NLD", &["Netherlands", "The Netherlands"]),
    ("NZL", &["New Zealand"]),
    ("NIC", &["Nicaragua"]),
    ("NER", &["Niger"]),
    ("NGA", &["Nigeria"]),
    ("MKD", &["North Macedonia", "Macedonia"]),
    ("XNC", &["Northern Cyprus", "N. Cyprus"]),
    ("NOR", &["Norway"]),
    ("OMN", &["Oman"]),
    ("PAK", &["Pakistan"]),
    ("PLW", &["Palau"]),
    ("PSE", &["Palestine", "State of Palestine"]),
    ("PAN", &["Panama"]),
    ("PNG", &["Papua New Guinea"]),
    ("PRY", &["Paraguay"]),
    ("PER", &["Peru"]),
    ("PHL", &["Philippines", "The Philippines"]),
    ("POL", &["Poland"]),
    ("PRT", &["Portugal"]),
    ("QAT", &["Qatar"]),
    ("ROU", &["Romania"]),
    ("RUS", &["Russia", "Russian Federation"]),
    ("RWA", &["Rwanda"]),
    ("KNA", &["Saint Kitts and Nevis", "St. Kitts and Nevis"]),
    ("LCA", &["Saint Lucia", "St. Lucia"]),
    ("VCT", &["Saint Vincent and the Grenadines", "St. Vin. and Gren."]),
    ("WSM", &["Samoa"]),
    ("SMR", &["San Marino"]),
    ("STP", &["Sao Tome and Principe", "São Tomé and Príncipe"]),
    ("SAU", &["Saudi Arabia"]),
    ("SEN", &["Senegal"]),
    ("SRB", &["Serbia", "Republic of Serbia"]),
    ("SYC", &["Seychelles"]),
    ("SLE", &["Sierra Leone"]),
    ("SGP", &["Singapore"]),
    ("SVK", &["Slovakia"]),
    ("SVN", &["Slovenia"]),
    ("SLB", &["Solomon Islands", "Solomon Is."]),
    ("SOM", &["Somalia"]),
    ("ZAF", &["South Africa"]),
    ("SSD", &["South Sudan", "S. Sudan"]),
    ("ESP", &["Spain"]),
    ("LKA", &["Sri Lanka"]),
    ("SDN", &["Sudan"]),
    ("SUR", &["Suriname"]),
    ("SWE", &["Sweden"]),
    ("CHE", &["Switzerland"]),
    ("SYR", &["Syria", "Syrian Arab Republic"]),
    ("TWN", &["Taiwan"]),
    ("TJK", &["Tajikistan"]),
    ("TZA", &["Tanzania", "United Republic of Tanzania"]),
    ("THA", &["Thailand"]),
    ("TLS", &["Timor-Leste", "East Timor"]),
    ("TGO", &["Togo"]),
    ("TON", &["Tonga"]),
    ("TTO", &["Trinidad and Tobago"]),
    ("TUN", &["Tunisia"]),
    ("TUR", &["Turkey", "Türkiye", "Turkiye"]),
    ("TKM", &["Turkmenistan"]),
    ("TUV", &["Tuvalu"]),
    ("UGA", &["Uganda"]),
    ("UKR", &["Ukraine"]),
    ("ARE", &["United Arab Emirates"]),
    ("GBR", &["United Kingdom", "Great Britain"]),
    ("USA", &["United States of America", "United States"]),
    ("URY", &["Uruguay"]),
    ("UZB", &["Uzbekistan"]),
    ("VUT", &["Vanuatu"]),
    ("VEN", &["Venezuela"]),
    ("VNM", &["Vietnam", "Viet Nam"]),
    ("YEM", &["Yemen"]),
    ("ZMB", &["Zambia"]),
    ("ZWE", &["Zimbabwe"]),
];

/// Exact (case-insensitive) name lookup, used as the resolver's second tier.
pub fn code_for_name(name: &str) -> Option<CountryCode> {
    let target = name.trim().to_lowercase();
    if target.is_empty() {
        return None;
    }
    for (code, aliases) in COUNTRY_ALIASES {
        if aliases.iter().any(|alias| alias.to_lowercase() == target) {
            return CountryCode::parse(code);
        }
    }
    None
}

/// Resolves an arbitrary display name: exact case-insensitive equality over
/// the whole table first, then a substring-containment pass in table order.
///
/// Containment tolerates provider suffixes ("United States of America" vs
/// "United States") at the cost of fuzziness; trying equality over every
/// entry before any containment keeps names like "South Sudan" from being
/// captured by the shorter "Sudan" alias.
pub fn code_for_display_name(name: &str) -> Option<CountryCode> {
    if let Some(code) = code_for_name(name) {
        return Some(code);
    }
    let target = name.trim().to_lowercase();
    if target.is_empty() {
        return None;
    }
    for (code, aliases) in COUNTRY_ALIASES {
        if aliases
            .iter()
            .any(|alias| target.contains(&alias.to_lowercase()))
        {
            return CountryCode::parse(code);
        }
    }
    None
}

/// Checks whether a candidate display name belongs to a given code, by
/// case-insensitive equality or containment of any of the code's aliases.
pub fn name_matches(code: &CountryCode, candidate: &str) -> bool {
    let target = candidate.trim().to_lowercase();
    if target.is_empty() {
        return false;
    }
    aliases_for(code).iter().any(|alias| {
        let alias = alias.to_lowercase();
        alias == target || target.contains(&alias)
    })
}

/// All known aliases for a code; empty for codes outside the table.
pub fn aliases_for(code: &CountryCode) -> &'static [&'static str] {
    COUNTRY_ALIASES
        .iter()
        .find(|(c, _)| *c == code.as_str())
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

/// Preferred English display name for a code.
pub fn display_name_for(code: &CountryCode) -> Option<&'static str> {
    aliases_for(code).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        let code = code_for_name("cZeCh RePuBlIc").expect("known alias");
        assert_eq!(code.as_str(), "CZE");
    }

    #[test]
    fn test_historic_aliases() {
        assert_eq!(code_for_name("Czechia").expect("known").as_str(), "CZE");
        assert_eq!(code_for_name("Czech Republic").expect("known").as_str(), "CZE");
        assert_eq!(code_for_name("Burma").expect("known").as_str(), "MMR");
        assert_eq!(code_for_name("Ivory Coast").expect("known").as_str(), "CIV");
        assert_eq!(code_for_name("Kosovo").expect("known").as_str(), "XKX");
    }

    #[test]
    fn test_containment_tolerates_suffixes() {
        let code = code_for_display_name("United States of America (contiguous)")
            .expect("containment match");
        assert_eq!(code.as_str(), "USA");
    }

    #[test]
    fn test_unknown_name() {
        assert!(code_for_name("Atlantis").is_none());
        assert!(code_for_display_name("Atlantis").is_none());
        assert!(code_for_name("").is_none());
    }

    #[test]
    fn test_name_matches() {
        let usa = CountryCode::parse("USA").expect("code");
        assert!(name_matches(&usa, "United States"));
        assert!(name_matches(&usa, "United States of America"));
        assert!(!name_matches(&usa, "Mexico"));
        assert!(!name_matches(&usa, ""));
    }

    // Every alias must resolve back to its own code. Because equality over
    // the full table wins before any containment, this enumeration catches
    // alias collisions (one country's alias being a substring of another's
    // name) as soon as a new table entry introduces one.
    #[test]
    fn test_every_alias_resolves_to_its_own_code() {
        for (code, aliases) in COUNTRY_ALIASES {
            for alias in *aliases {
                let resolved = code_for_display_name(alias)
                    .unwrap_or_else(|| panic!("alias {alias} did not resolve"));
                assert_eq!(
                    resolved.as_str(),
                    *code,
                    "alias {alias:?} resolved to {resolved} instead of {code}"
                );
            }
        }
    }

    #[test]
    fn test_codes_are_unique_and_valid() {
        let mut seen = std::collections::HashSet::new();
        for (code, aliases) in COUNTRY_ALIASES {
            assert!(CountryCode::parse(code).is_some(), "bad code {code}");
            assert!(seen.insert(*code), "duplicate code {code}");
            assert!(!aliases.is_empty(), "no aliases for {code}");
        }
    }
}
