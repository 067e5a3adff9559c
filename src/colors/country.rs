//! Country name → ISO 3166-1 alpha-3 conversion.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code returned for names that cannot be resolved.
pub const NOT_FOUND: &str = "not found";

/// Converts country names to three-letter codes.
///
/// Implementations must return exactly one code per input, in input order,
/// using [`NOT_FOUND`] (or another sentinel) for names they cannot resolve.
pub trait CountryNameResolver {
    fn convert(&self, names: &[&str]) -> Vec<String>;
}

// ISO 3166-1 alpha-3 code followed by the names and aliases it is known by.
const COUNTRIES: &[(&str, &[&str])] = &[
    ("ABW", &["aruba"]),
    ("AFG", &["afghanistan"]),
    ("AGO", &["angola"]),
    ("AIA", &["anguilla"]),
    ("ALA", &["åland islands", "aland islands"]),
    ("ALB", &["albania"]),
    ("AND", &["andorra"]),
    ("ARE", &["united arab emirates", "uae"]),
    ("ARG", &["argentina"]),
    ("ARM", &["armenia"]),
    ("ASM", &["american samoa"]),
    ("ATA", &["antarctica"]),
    ("ATF", &["french southern territories"]),
    ("ATG", &["antigua and barbuda"]),
    ("AUS", &["australia"]),
    ("AUT", &["austria"]),
    ("AZE", &["azerbaijan"]),
    ("BDI", &["burundi"]),
    ("BEL", &["belgium"]),
    ("BEN", &["benin"]),
    ("BES", &["bonaire, sint eustatius and saba", "caribbean netherlands"]),
    ("BFA", &["burkina faso"]),
    ("BGD", &["bangladesh"]),
    ("BGR", &["bulgaria"]),
    ("BHR", &["bahrain"]),
    ("BHS", &["bahamas", "the bahamas"]),
    ("BIH", &["bosnia and herzegovina"]),
    ("BLM", &["saint barthélemy", "saint barthelemy"]),
    ("BLR", &["belarus"]),
    ("BLZ", &["belize"]),
    ("BMU", &["bermuda"]),
    ("BOL", &["bolivia", "plurinational state of bolivia"]),
    ("BRA", &["brazil"]),
    ("BRB", &["barbados"]),
    ("BRN", &["brunei", "brunei darussalam"]),
    ("BTN", &["bhutan"]),
    ("BVT", &["bouvet island"]),
    ("BWA", &["botswana"]),
    ("CAF", &["central african republic"]),
    ("CAN", &["canada"]),
    ("CCK", &["cocos (keeling) islands", "cocos islands"]),
    ("CHE", &["switzerland"]),
    ("CHL", &["chile"]),
    ("CHN", &["china", "people's republic of china", "prc"]),
    ("CIV", &["côte d'ivoire", "cote d'ivoire", "ivory coast"]),
    ("CMR", &["cameroon"]),
    ("COD", &["democratic republic of the congo", "dr congo", "drc", "congo, dem. rep."]),
    ("COG", &["congo", "republic of the congo", "congo, rep."]),
    ("COK", &["cook islands"]),
    ("COL", &["colombia"]),
    ("COM", &["comoros"]),
    ("CPV", &["cabo verde", "cape verde"]),
    ("CRI", &["costa rica"]),
    ("CUB", &["cuba"]),
    ("CUW", &["curaçao", "curacao"]),
    ("CXR", &["christmas island"]),
    ("CYM", &["cayman islands"]),
    ("CYP", &["cyprus"]),
    ("CZE", &["czechia", "czech republic"]),
    ("DEU", &["germany", "federal republic of germany"]),
    ("DJI", &["djibouti"]),
    ("DMA", &["dominica"]),
    ("DNK", &["denmark"]),
    ("DOM", &["dominican republic"]),
    ("DZA", &["algeria"]),
    ("ECU", &["ecuador"]),
    ("EGY", &["egypt", "egypt, arab rep."]),
    ("ERI", &["eritrea"]),
    ("ESH", &["western sahara"]),
    ("ESP", &["spain"]),
    ("EST", &["estonia"]),
    ("ETH", &["ethiopia"]),
    ("FIN", &["finland"]),
    ("FJI", &["fiji"]),
    ("FLK", &["falkland islands", "falkland islands (malvinas)"]),
    ("FRA", &["france", "french republic"]),
    ("FRO", &["faroe islands"]),
    ("FSM", &["micronesia", "federated states of micronesia"]),
    ("GAB", &["gabon"]),
    ("GBR", &["united kingdom", "uk", "u.k.", "great britain", "britain"]),
    ("GEO", &["georgia"]),
    ("GGY", &["guernsey"]),
    ("GHA", &["ghana"]),
    ("GIB", &["gibraltar"]),
    ("GIN", &["guinea"]),
    ("GLP", &["guadeloupe"]),
    ("GMB", &["gambia", "the gambia"]),
    ("GNB", &["guinea-bissau"]),
    ("GNQ", &["equatorial guinea"]),
    ("GRC", &["greece"]),
    ("GRD", &["grenada"]),
    ("GRL", &["greenland"]),
    ("GTM", &["guatemala"]),
    ("GUF", &["french guiana"]),
    ("GUM", &["guam"]),
    ("GUY", &["guyana"]),
    ("HKG", &["hong kong", "hong kong sar, china"]),
    ("HMD", &["heard island and mcdonald islands"]),
    ("HND", &["honduras"]),
    ("HRV", &["croatia"]),
    ("HTI", &["haiti"]),
    ("HUN", &["hungary"]),
    ("IDN", &["indonesia"]),
    ("IMN", &["isle of man"]),
    ("IND", &["india"]),
    ("IOT", &["british indian ocean territory"]),
    ("IRL", &["ireland", "republic of ireland"]),
    ("IRN", &["iran", "islamic republic of iran", "iran, islamic rep."]),
    ("IRQ", &["iraq"]),
    ("ISL", &["iceland"]),
    ("ISR", &["israel"]),
    ("ITA", &["italy"]),
    ("JAM", &["jamaica"]),
    ("JEY", &["jersey"]),
    ("JOR", &["jordan"]),
    ("JPN", &["japan"]),
    ("KAZ", &["kazakhstan"]),
    ("KEN", &["kenya"]),
    ("KGZ", &["kyrgyzstan", "kyrgyz republic"]),
    ("KHM", &["cambodia"]),
    ("KIR", &["kiribati"]),
    ("KNA", &["saint kitts and nevis", "st. kitts and nevis"]),
    ("KOR", &["south korea", "korea", "republic of korea", "korea, rep."]),
    ("KWT", &["kuwait"]),
    ("LAO", &["laos", "lao pdr", "lao people's democratic republic"]),
    ("LBN", &["lebanon"]),
    ("LBR", &["liberia"]),
    ("LBY", &["libya"]),
    ("LCA", &["saint lucia", "st. lucia"]),
    ("LIE", &["liechtenstein"]),
    ("LKA", &["sri lanka"]),
    ("LSO", &["lesotho"]),
    ("LTU", &["lithuania"]),
    ("LUX", &["luxembourg"]),
    ("LVA", &["latvia"]),
    ("MAC", &["macao", "macau", "macao sar, china"]),
    ("MAF", &["saint martin", "saint martin (french part)"]),
    ("MAR", &["morocco"]),
    ("MCO", &["monaco"]),
    ("MDA", &["moldova", "republic of moldova"]),
    ("MDG", &["madagascar"]),
    ("MDV", &["maldives"]),
    ("MEX", &["mexico"]),
    ("MHL", &["marshall islands"]),
    ("MKD", &["north macedonia", "macedonia"]),
    ("MLI", &["mali"]),
    ("MLT", &["malta"]),
    ("MMR", &["myanmar", "burma"]),
    ("MNE", &["montenegro"]),
    ("MNG", &["mongolia"]),
    ("MNP", &["northern mariana islands"]),
    ("MOZ", &["mozambique"]),
    ("MRT", &["mauritania"]),
    ("MSR", &["montserrat"]),
    ("MTQ", &["martinique"]),
    ("MUS", &["mauritius"]),
    ("MWI", &["malawi"]),
    ("MYS", &["malaysia"]),
    ("MYT", &["mayotte"]),
    ("NAM", &["namibia"]),
    ("NCL", &["new caledonia"]),
    ("NER", &["niger"]),
    ("NFK", &["norfolk island"]),
    ("NGA", &["nigeria"]),
    ("NIC", &["nicaragua"]),
    ("NIU", &["niue"]),
    ("NLD", &["netherlands", "the netherlands", "holland"]),
    ("NOR", &["norway"]),
    ("NPL", &["nepal"]),
    ("NRU", &["nauru"]),
    ("NZL", &["new zealand"]),
    ("OMN", &["oman"]),
    ("PAK", &["pakistan"]),
    ("PAN", &["panama"]),
    ("PCN", &["pitcairn", "pitcairn islands"]),
    ("PER", &["peru"]),
    ("PHL", &["philippines", "the philippines"]),
    ("PLW", &["palau"]),
    ("PNG", &["papua new guinea"]),
    ("POL", &["poland"]),
    ("PRI", &["puerto rico"]),
    ("PRK", &["north korea", "democratic people's republic of korea", "korea, dem. people's rep."]),
    ("PRT", &["portugal"]),
    ("PRY", &["paraguay"]),
    ("PSE", &["palestine", "state of palestine", "west bank and gaza"]),
    ("PYF", &["french polynesia"]),
    ("QAT", &["qatar"]),
    ("REU", &["réunion", "reunion"]),
    ("ROU", &["romania"]),
    ("RUS", &["russia", "russian federation"]),
    ("RWA", &["rwanda"]),
    ("SAU", &["saudi arabia"]),
    ("SDN", &["sudan"]),
    ("SEN", &["senegal"]),
    ("SGP", &["singapore"]),
    ("SGS", &["south georgia and the south sandwich islands"]),
    ("SHN", &["saint helena", "saint helena, ascension and tristan da cunha"]),
    ("SJM", &["svalbard and jan mayen"]),
    ("SLB", &["solomon islands"]),
    ("SLE", &["sierra leone"]),
    ("SLV", &["el salvador"]),
    ("SMR", &["san marino"]),
    ("SOM", &["somalia"]),
    ("SPM", &["saint pierre and miquelon"]),
    ("SRB", &["serbia"]),
    ("SSD", &["south sudan"]),
    ("STP", &["sao tome and principe", "são tomé and príncipe"]),
    ("SUR", &["suriname"]),
    ("SVK", &["slovakia", "slovak republic"]),
    ("SVN", &["slovenia"]),
    ("SWE", &["sweden"]),
    ("SWZ", &["eswatini", "swaziland"]),
    ("SXM", &["sint maarten", "sint maarten (dutch part)"]),
    ("SYC", &["seychelles"]),
    ("SYR", &["syria", "syrian arab republic"]),
    ("TCA", &["turks and caicos islands"]),
    ("TCD", &["chad"]),
    ("TGO", &["togo"]),
    ("THA", &["thailand"]),
    ("TJK", &["tajikistan"]),
    ("TKL", &["tokelau"]),
    ("TKM", &["turkmenistan"]),
    ("TLS", &["timor-leste", "east timor"]),
    ("TON", &["tonga"]),
    ("TTO", &["trinidad and tobago"]),
    ("TUN", &["tunisia"]),
    ("TUR", &["turkey", "türkiye", "turkiye"]),
    ("TUV", &["tuvalu"]),
    ("TWN", &["taiwan", "taiwan, province of china", "chinese taipei"]),
    ("TZA", &["tanzania", "united republic of tanzania"]),
    ("UGA", &["uganda"]),
    ("UKR", &["ukraine"]),
    ("UMI", &["united states minor outlying islands"]),
    ("URY", &["uruguay"]),
    ("USA", &["united states", "united states of america", "usa", "us", "u.s.", "america"]),
    ("UZB", &["uzbekistan"]),
    ("VAT", &["holy see", "vatican", "vatican city"]),
    ("VCT", &["saint vincent and the grenadines", "st. vincent and the grenadines"]),
    ("VEN", &["venezuela", "bolivarian republic of venezuela", "venezuela, rb"]),
    ("VGB", &["british virgin islands", "virgin islands (british)"]),
    ("VIR", &["us virgin islands", "united states virgin islands", "virgin islands (u.s.)"]),
    ("VNM", &["vietnam", "viet nam"]),
    ("VUT", &["vanuatu"]),
    ("WLF", &["wallis and futuna"]),
    ("WSM", &["samoa"]),
    ("YEM", &["yemen", "yemen, rep."]),
    ("ZAF", &["south africa"]),
    ("ZMB", &["zambia"]),
    ("ZWE", &["zimbabwe"]),
];

static NAME_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (code, names) in COUNTRIES {
        index.insert(code.to_lowercase(), *code);
        for name in *names {
            index.insert(name.to_string(), *code);
        }
    }
    index
});

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lookup-table resolver for common country names, aliases and codes.
///
/// Matching ignores case and repeated whitespace. Extra aliases can be
/// registered for house spellings.
#[derive(Clone, Debug, Default)]
pub struct StaticCountryResolver {
    aliases: HashMap<String, String>,
}

impl StaticCountryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an additional spelling to a code.
    pub fn with_alias(mut self, name: &str, code: impl Into<String>) -> Self {
        self.aliases.insert(normalize(name), code.into());
        self
    }

    /// Resolve a single name.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let key = normalize(name);
        self.aliases
            .get(&key)
            .cloned()
            .or_else(|| NAME_INDEX.get(&key).map(|code| code.to_string()))
    }
}

impl CountryNameResolver for StaticCountryResolver {
    fn convert(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|name| self.resolve(name).unwrap_or_else(|| NOT_FOUND.to_string()))
            .collect()
    }
}
