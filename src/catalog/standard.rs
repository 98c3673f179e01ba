//! The standard rule catalog.
//!
//! The full rule set of the game, in reveal order. The engine never
//! assumes this particular catalog - any non-empty `RuleCatalog` works -
//! but this is the one players see. Word lists are fixed English lists;
//! membership is plain substring containment, no token boundaries.

use super::predicate::Predicate;
use super::registry::RuleCatalog;
use super::rule::RuleSpec;

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white",
    "gray", "cyan", "magenta", "teal", "violet", "indigo", "turquoise",
];

const ANIMALS: &[&str] = &[
    "dog", "cat", "bird", "fish", "lion", "tiger", "bear", "wolf", "fox", "deer", "snake",
    "eagle", "shark", "whale", "dolphin", "elephant", "giraffe",
];

const CAPITAL_CITIES: &[&str] = &[
    "paris", "tokyo", "london", "berlin", "rome", "madrid", "moscow", "beijing", "cairo",
    "delhi", "ottawa", "canberra", "washington", "brasilia",
];

const COUNTRIES: &[&str] = &[
    "usa", "canada", "mexico", "france", "germany", "japan", "china", "india", "brazil",
    "australia", "italy", "spain", "russia", "uk",
];

const FRUITS: &[&str] = &[
    "apple", "banana", "orange", "grape", "strawberry", "kiwi", "mango", "peach", "pear",
    "cherry", "pineapple", "watermelon", "lemon",
];

const DAYS_OF_WEEK: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

const PLANETS: &[&str] = &[
    "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
];

const SPORTS: &[&str] = &[
    "soccer", "football", "basketball", "tennis", "golf", "hockey", "baseball", "volleyball",
    "cricket", "rugby", "swimming", "boxing",
];

const INSTRUMENTS: &[&str] = &[
    "piano", "guitar", "violin", "drums", "flute", "trumpet", "saxophone", "harp", "cello",
    "clarinet", "accordion",
];

const SEASONS: &[&str] = &["spring", "summer", "autumn", "fall", "winter"];

const COMPASS_DIRECTIONS: &[&str] = &["north", "south", "east", "west"];

const PROGRAMMING_LANGUAGES: &[&str] = &[
    "java", "python", "javascript", "ruby", "php", "go", "swift", "kotlin", "rust", "c",
    "typescript", "perl",
];

/// Chemical element symbols, matched case-sensitively.
const ELEMENT_SYMBOLS: &[&str] = &[
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Fe", "Au", "Ag", "Cu", "Zn", "Hg", "Pb",
];

/// Build the standard catalog.
///
/// Catalog order defines reveal order; the first rule is the only one
/// active at game start.
#[must_use]
pub fn standard_catalog() -> RuleCatalog {
    let mut catalog = RuleCatalog::new();
    for rule in standard_rules() {
        catalog.register(rule);
    }
    catalog
}

fn standard_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(
            "length",
            "Your password must be at least 5 characters.",
            Predicate::MinLength(5),
        ),
        RuleSpec::new(
            "number",
            "Your password must include a number.",
            Predicate::pattern("[0-9]"),
        ),
        RuleSpec::new(
            "uppercase",
            "Your password must include an uppercase letter.",
            Predicate::pattern("[A-Z]"),
        ),
        RuleSpec::new(
            "special",
            "Your password must include a special character (!@#$%^&*?).",
            Predicate::pattern("[!@#$%^&*?]"),
        ),
        RuleSpec::new(
            "roman",
            "Your password must include a Roman numeral.",
            Predicate::pattern("[IVXLCDM]"),
        ),
        RuleSpec::new(
            "month",
            "Your password must include a month of the year (e.g., January).",
            Predicate::any_word(MONTHS),
        ),
        RuleSpec::new(
            "consecutive",
            "Your password must not contain three consecutive characters (e.g., abc, 123).",
            Predicate::NoAscendingRun,
        ),
        RuleSpec::new(
            "palindrome",
            "Your password must contain a palindrome that is at least 3 characters long.",
            Predicate::PalindromeSubstring { min_len: 3 },
        ),
        RuleSpec::new(
            "prime",
            "Your password must contain a prime number.",
            Predicate::PrimeDigitRun,
        ),
        RuleSpec::new(
            "sum25",
            "The sum of all numbers in your password must equal 25.",
            Predicate::DigitSum(25),
        ),
        RuleSpec::new(
            "color",
            "Your password must include a color (e.g., red, blue, green).",
            Predicate::any_word(COLORS),
        ),
        RuleSpec::new(
            "animal",
            "Your password must include an animal name.",
            Predicate::any_word(ANIMALS),
        ),
        RuleSpec::new(
            "capitalCity",
            "Your password must include a capital city (e.g., Paris, Tokyo, London).",
            Predicate::any_word(CAPITAL_CITIES),
        ),
        RuleSpec::new(
            "fibonacci",
            "Your password must include a Fibonacci number (1, 1, 2, 3, 5, 8, 13, 21...).",
            Predicate::FibonacciDigitRun,
        ),
        RuleSpec::new(
            "emoji",
            "Your password must include at least one emoji.",
            Predicate::pattern(r"\p{Emoji}"),
        ),
        RuleSpec::new(
            "length20",
            "Your password must be at least 20 characters long.",
            Predicate::MinLength(20),
        ),
        RuleSpec::new(
            "country",
            "Your password must include a country name.",
            Predicate::any_word(COUNTRIES),
        ),
        RuleSpec::new(
            "fruit",
            "Your password must include a fruit name.",
            Predicate::any_word(FRUITS),
        ),
        RuleSpec::new(
            "vowels",
            "Your password must contain at least 5 vowels (a, e, i, o, u).",
            Predicate::min_count("(?i)[aeiou]", 5),
        ),
        RuleSpec::new(
            "consonants",
            "Your password must contain at least 8 consonants.",
            Predicate::min_count("(?i)[bcdfghjklmnpqrstvwxyz]", 8),
        ),
        RuleSpec::new(
            "alternating",
            "Your password must contain a sequence of at least 4 alternating letters and numbers (e.g., a1b2, 7k8l).",
            Predicate::AlternatingRun { min_len: 4 },
        ),
        RuleSpec::new(
            "ascending",
            "Your password must include 3 consecutive ascending numbers (e.g., 123, 456).",
            Predicate::AscendingDigitRun,
        ),
        RuleSpec::new(
            "element",
            "Your password must include the symbol of a chemical element (e.g., H, Fe, Au).",
            Predicate::any_symbol(ELEMENT_SYMBOLS),
        ),
        RuleSpec::new(
            "dayofweek",
            "Your password must include a day of the week (e.g., Monday, Friday).",
            Predicate::any_word(DAYS_OF_WEEK),
        ),
        RuleSpec::new(
            "mathematical",
            "Your password must include a mathematical operator (+, -, *, /, =, %).",
            Predicate::pattern(r"[+\-*/=%]"),
        ),
        RuleSpec::new(
            "brackets",
            "Your password must include a matched pair of brackets ((), [], {}).",
            Predicate::pattern(r"\(\)|\[\]|\{\}"),
        ),
        RuleSpec::new(
            "planet",
            "Your password must include the name of a planet in our solar system.",
            Predicate::any_word(PLANETS),
        ),
        RuleSpec::new(
            "sport",
            "Your password must include the name of a sport.",
            Predicate::any_word(SPORTS),
        ),
        RuleSpec::new(
            "instrument",
            "Your password must include a musical instrument.",
            Predicate::any_word(INSTRUMENTS),
        ),
        RuleSpec::new(
            "season",
            "Your password must include a season (spring, summer, autumn/fall, winter).",
            Predicate::any_word(SEASONS),
        ),
        RuleSpec::new(
            "currency",
            "Your password must include a currency symbol (€, $, £, ¥).",
            Predicate::pattern("[€$£¥]"),
        ),
        RuleSpec::new(
            "compass",
            "Your password must include a compass direction (north, south, east, west).",
            Predicate::any_word(COMPASS_DIRECTIONS),
        ),
        RuleSpec::new(
            "repeating",
            "Your password must include a character that repeats at least 3 times consecutively.",
            Predicate::RepeatedChar { min_run: 3 },
        ),
        RuleSpec::new(
            "programmingLanguage",
            "Your password must include the name of a programming language.",
            Predicate::any_word(PROGRAMMING_LANGUAGES),
        ),
        RuleSpec::new(
            "length50",
            "Your password must be at least 50 characters long.",
            Predicate::MinLength(50),
        ),
        RuleSpec::new(
            "timestamp",
            "Your password must include a timestamp in the format HH:MM (e.g., 14:30).",
            Predicate::pattern("([01]?[0-9]|2[0-3]):[0-5][0-9]"),
        ),
        RuleSpec::new(
            "quote",
            "Your password must include text inside quotation marks (e.g., \"hello\").",
            Predicate::pattern("\"[^\"]*\""),
        ),
        RuleSpec::new(
            "temperature",
            "Your password must include a temperature with °C or °F (e.g., 32°F).",
            Predicate::pattern(r"-?[0-9]+\s*[°℃℉CF]"),
        ),
        RuleSpec::new(
            "twoPairs",
            "Your password must include at least two different pairs of identical characters (e.g., \"aa\" and \"bb\").",
            Predicate::DistinctRepeatedPairs { min: 2 },
        ),
        RuleSpec::new(
            "evenLength",
            "Your password must have an even number of characters.",
            Predicate::EvenLength,
        ),
        RuleSpec::new(
            "domain",
            "Your password must include a web domain (e.g., example.com).",
            Predicate::pattern("[a-zA-Z0-9-]+\\.[a-zA-Z]{2,}"),
        ),
        RuleSpec::new(
            "tripleVowel",
            "Your password must include 3 consecutive vowels.",
            Predicate::pattern("(?i)[aeiou]{3}"),
        ),
        RuleSpec::new(
            "hashtag",
            "Your password must include a hashtag (e.g., #password).",
            Predicate::pattern("#[a-zA-Z0-9_]+"),
        ),
        RuleSpec::new(
            "currencyAmount",
            "Your password must include a currency amount (e.g., $10.99, €50).",
            Predicate::pattern(r"[$€£¥]\s*[0-9]+(\.[0-9]{1,2})?"),
        ),
        RuleSpec::new(
            "ipAddress",
            "Your password must include an IP address pattern (e.g., 192.168.1.1).",
            Predicate::pattern(r"\b[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\b"),
        ),
        RuleSpec::new(
            "coordinate",
            "Your password must include a coordinate pair (e.g., (42, -73)).",
            Predicate::pattern(r"\(\s*-?[0-9]+(\.[0-9]+)?\s*,\s*-?[0-9]+(\.[0-9]+)?\s*\)"),
        ),
        RuleSpec::new(
            "threeDigits",
            "Your password must include exactly 3 consecutive digits that multiply to give 42.",
            Predicate::DigitWindowProduct { len: 3, product: 42 },
        ),
        RuleSpec::new(
            "website",
            "Your password must include a website URL (e.g., http://example.com).",
            Predicate::pattern("https?://[a-zA-Z0-9-]+\\.[a-zA-Z]{2,}"),
        ),
        RuleSpec::new(
            "email",
            "Your password must include an email address format (e.g., user@example.com).",
            Predicate::pattern("[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}"),
        ),
        RuleSpec::new(
            "chess",
            "Your password must include a chess coordinate (e.g., e4, a1, h8).",
            Predicate::pattern("[a-h][1-8]"),
        ),
        RuleSpec::new(
            "percentage",
            "Your password must include a percentage (e.g., 50%, 100%).",
            Predicate::pattern("[0-9]+%"),
        ),
        RuleSpec::new(
            "piDigits",
            "Your password must include the first 5 digits of pi (3.1415).",
            Predicate::Literal("3.1415".to_string()),
        ),
        RuleSpec::new(
            "equation",
            "Your password must include a mathematical equation with = sign (e.g., 2+2=4).",
            Predicate::pattern(r"[0-9+\-*/^]+\s*=\s*[0-9]+"),
        ),
        RuleSpec::new(
            "hexCode",
            "Your password must include a hexadecimal color code (e.g., #FF0000).",
            Predicate::pattern("#[0-9A-Fa-f]{6}"),
        ),
        RuleSpec::new(
            "phoneNumber",
            "Your password must include a phone number format (e.g., 123-456-7890).",
            Predicate::pattern(r"[0-9]{3}[-\s]?[0-9]{3}[-\s]?[0-9]{4}"),
        ),
        RuleSpec::new(
            "socialmedia",
            "Your password must include a social media handle (e.g., @username).",
            Predicate::pattern("@[a-zA-Z0-9_]+"),
        ),
        RuleSpec::new(
            "card",
            "Your password must include a playing card notation (e.g., K♠, 10♥, A♦, Q♣).",
            Predicate::pattern("([AKQJ]|10|[2-9])[♠♥♦♣]"),
        ),
        RuleSpec::new(
            "year",
            "Your password must include a year between 1900 and 2099.",
            Predicate::pattern(r"\b(19|20)[0-9]{2}\b"),
        ),
        RuleSpec::new(
            "metric",
            "Your password must include a metric measurement (e.g., 5cm, 10kg, 2L).",
            Predicate::pattern(r"[0-9]+\s*(cm|m|km|g|kg|ml|L)"),
        ),
        RuleSpec::new(
            "binary",
            "Your password must include a sequence of at least 8 binary digits (0s and 1s).",
            Predicate::pattern("[01]{8,}"),
        ),
        RuleSpec::new(
            "uuid",
            "Your password must include a UUID-like pattern (e.g., 123e4567-e89b-12d3-a456-426614174000).",
            Predicate::pattern(
                "(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
            ),
        ),
        RuleSpec::new(
            "emoji2",
            "Your password must include at least 2 different emojis.",
            Predicate::min_distinct(r"\p{Emoji}", 2),
        ),
        RuleSpec::new(
            "length100",
            "Your password must be at least 100 characters long.",
            Predicate::MinLength(100),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_catalog_loads() {
        let catalog = standard_catalog();
        assert_eq!(catalog.len(), 63);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let rules = standard_rules();
        let ids: FxHashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn test_first_rule_is_min_length() {
        let catalog = standard_catalog();
        let first = catalog.get_at(0).unwrap();
        assert_eq!(first.id.as_str(), "length");
        assert_eq!(first.predicate, Predicate::MinLength(5));
    }

    #[test]
    fn test_catalog_positions() {
        let catalog = standard_catalog();
        assert_eq!(catalog.position(&"number".into()), Some(1));
        assert_eq!(catalog.position(&"consecutive".into()), Some(6));
        assert_eq!(catalog.position(&"element".into()), Some(22));
        assert_eq!(catalog.position(&"length100".into()), Some(62));
    }

    #[test]
    fn test_timestamp_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"timestamp".into()).unwrap();
        assert!(catalog.check(i, "meet at 14:30"));
        assert!(catalog.check(i, "9:05"));
        assert!(!catalog.check(i, "99:99"));
        assert!(!catalog.check(i, "14-30"));
    }

    #[test]
    fn test_card_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"card".into()).unwrap();
        assert!(catalog.check(i, "K♠"));
        assert!(catalog.check(i, "10♥"));
        assert!(!catalog.check(i, "K♡"));
        assert!(!catalog.check(i, "1♠"));
    }

    #[test]
    fn test_ip_address_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"ipAddress".into()).unwrap();
        assert!(catalog.check(i, "x 192.168.1.1 x"));
        assert!(!catalog.check(i, "192.168.1"));
    }

    #[test]
    fn test_element_rule_is_case_sensitive() {
        let catalog = standard_catalog();
        let i = catalog.position(&"element".into()).unwrap();
        assert!(catalog.check(i, "xCox"));
        assert!(!catalog.check(i, "xcox"));
        assert!(catalog.check(i, "Au revoir"));
    }

    #[test]
    fn test_season_accepts_fall_or_autumn() {
        let catalog = standard_catalog();
        let i = catalog.position(&"season".into()).unwrap();
        assert!(catalog.check(i, "waterfall"));
        assert!(catalog.check(i, "AUTUMN"));
        assert!(!catalog.check(i, "solstice"));
    }

    #[test]
    fn test_uuid_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"uuid".into()).unwrap();
        assert!(catalog.check(i, "123e4567-e89b-12d3-a456-426614174000"));
        assert!(catalog.check(i, "123E4567-E89B-12D3-A456-426614174000"));
        assert!(!catalog.check(i, "123e4567-e89b-12d3-a456"));
    }

    #[test]
    fn test_year_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"year".into()).unwrap();
        assert!(catalog.check(i, "born 1984"));
        assert!(catalog.check(i, "2099"));
        assert!(!catalog.check(i, "2100"));
        assert!(!catalog.check(i, "21984x"));
    }

    #[test]
    fn test_brackets_rule_requires_matched_pair() {
        let catalog = standard_catalog();
        let i = catalog.position(&"brackets".into()).unwrap();
        assert!(catalog.check(i, "x()x"));
        assert!(catalog.check(i, "[]"));
        assert!(!catalog.check(i, "(x)"));
    }

    #[test]
    fn test_quote_rule() {
        let catalog = standard_catalog();
        let i = catalog.position(&"quote".into()).unwrap();
        assert!(catalog.check(i, "say \"hi\" now"));
        assert!(catalog.check(i, "\"\""));
        assert!(!catalog.check(i, "say \"hi"));
    }
}
