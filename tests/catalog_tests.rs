//! Standard catalog integration tests.
//!
//! Spot-checks the quirkier rules of the shipped catalog through the
//! compiled `RuleCatalog`, exactly as the engine evaluates them.

use password_gauntlet::standard_catalog;
use password_gauntlet::RuleCatalog;

fn check(catalog: &RuleCatalog, id: &str, password: &str) -> bool {
    let position = catalog
        .position(&id.into())
        .unwrap_or_else(|| panic!("rule '{id}' not in catalog"));
    catalog.check(position, password)
}

#[test]
fn test_prime_rule_uses_whole_digit_runs() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "prime", "a7b"));
    assert!(!check(&catalog, "prime", "a8b"));
    // 49 = 7 x 7; the run is the candidate, not its digits.
    assert!(!check(&catalog, "prime", "a49b"));
    assert!(!check(&catalog, "prime", "1"));
    assert!(check(&catalog, "prime", "x23x"));
}

#[test]
fn test_prime_rule_survives_twenty_digit_runs() {
    let catalog = standard_catalog();

    // Largest prime below 2^64; the whole run is one candidate integer
    // and primality testing it must not overflow.
    assert!(check(&catalog, "prime", "x18446744073709551557x"));
    // Runs too large for u64 never match but stay total.
    assert!(!check(&catalog, "prime", "x184467440737095515570x"));
}

#[test]
fn test_sum25_sums_digits_of_runs() {
    let catalog = standard_catalog();

    // Runs "12" and "13" contribute 1+2+1+3 = 7, not 25.
    assert!(!check(&catalog, "sum25", "12 13"));
    assert!(check(&catalog, "sum25", "9 9 7"));
    assert!(check(&catalog, "sum25", "997"));
    assert!(!check(&catalog, "sum25", "19"));
}

#[test]
fn test_consecutive_rule_operates_on_char_codes() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "consecutive", "xqzt"));
    assert!(!check(&catalog, "consecutive", "abc"));
    assert!(!check(&catalog, "consecutive", "x123"));
    // Sequential code points across categories also disqualify.
    assert!(!check(&catalog, "consecutive", "YZ["));
}

#[test]
fn test_element_rule_effective_behavior_is_case_sensitive() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "element", "Fe2O3"));
    assert!(check(&catalog, "element", "xAux"));
    assert!(!check(&catalog, "element", "xaux"));
    assert!(!check(&catalog, "element", "hg")); // symbol is "Hg"
}

#[test]
fn test_month_rule_is_case_insensitive_substring() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "month", "xxMARCHxx"));
    assert!(check(&catalog, "month", "dismayed")); // contains "may"
    assert!(!check(&catalog, "month", "janruary"));
}

#[test]
fn test_emoji_rules() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "emoji", "pw\u{1F600}"));
    assert!(!check(&catalog, "emoji", "plain"));

    assert!(!check(&catalog, "emoji2", "\u{1F600}\u{1F600}"));
    assert!(check(&catalog, "emoji2", "\u{1F600}\u{1F680}"));
}

#[test]
fn test_fibonacci_rule() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "fibonacci", "x21x"));
    assert!(check(&catalog, "fibonacci", "x144x"));
    assert!(!check(&catalog, "fibonacci", "x22x"));
}

#[test]
fn test_alternating_rule() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "alternating", "xx7k8lxx"));
    assert!(!check(&catalog, "alternating", "ab12cd"));
}

#[test]
fn test_ascending_digits_rule() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "ascending", "x456x"));
    assert!(!check(&catalog, "ascending", "x465x"));
}

#[test]
fn test_three_digit_product_rule() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "threeDigits", "x237x")); // 2*3*7
    assert!(check(&catalog, "threeDigits", "x167x")); // 1*6*7
    assert!(!check(&catalog, "threeDigits", "x236x"));
}

#[test]
fn test_two_pairs_rule() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "twoPairs", "xaaybbz"));
    assert!(!check(&catalog, "twoPairs", "xaayaaz"));
}

#[test]
fn test_pattern_rules() {
    let catalog = standard_catalog();

    assert!(check(&catalog, "hexCode", "bg #FF0000"));
    assert!(!check(&catalog, "hexCode", "#FF00"));

    assert!(check(&catalog, "percentage", "50%"));
    assert!(!check(&catalog, "percentage", "%50"));

    assert!(check(&catalog, "website", "see http://example.com"));
    assert!(check(&catalog, "website", "https://a-b.org"));
    assert!(!check(&catalog, "website", "example.com"));

    assert!(check(&catalog, "email", "user@example.com"));
    assert!(!check(&catalog, "email", "user@host"));

    assert!(check(&catalog, "chess", "play e4!"));
    assert!(!check(&catalog, "chess", "play i9!"));

    assert!(check(&catalog, "binary", "xx01101001xx"));
    assert!(!check(&catalog, "binary", "0110100"));

    assert!(check(&catalog, "phoneNumber", "call 123-456-7890"));
    assert!(check(&catalog, "phoneNumber", "1234567890"));

    assert!(check(&catalog, "currencyAmount", "$10.99"));
    assert!(check(&catalog, "currencyAmount", "€ 50"));
    assert!(!check(&catalog, "currencyAmount", "10.99"));

    assert!(check(&catalog, "coordinate", "(42, -73)"));
    assert!(check(&catalog, "coordinate", "( 1.5 , 2 )"));
    assert!(!check(&catalog, "coordinate", "(42 -73)"));

    assert!(check(&catalog, "temperature", "32°F"));
    assert!(check(&catalog, "temperature", "-5 ℃"));

    assert!(check(&catalog, "equation", "2+2=4"));
    assert!(!check(&catalog, "equation", "x = y"));

    assert!(check(&catalog, "metric", "5cm"));
    assert!(check(&catalog, "metric", "10 kg"));
}

#[test]
fn test_empty_input_fails_content_rules() {
    let catalog = standard_catalog();

    for id in ["length", "number", "month", "prime", "emoji", "piDigits"] {
        assert!(!check(&catalog, id, ""), "rule '{id}' matched empty input");
    }
    // Structural rules may hold vacuously on the empty string.
    assert!(check(&catalog, "consecutive", ""));
    assert!(check(&catalog, "evenLength", ""));
}

#[test]
fn test_every_rule_is_total_on_hostile_input() {
    let catalog = standard_catalog();
    let inputs = [
        "",
        "\u{0}\u{1}\u{2}\t\n",
        "\u{1F600}\u{0301}e\u{0301}\u{FFFD}",
        "𝔘𝔫𝔦𝔠𝔬𝔡𝔢",
    ];
    let long = "a1!".repeat(5000);
    let long_digit_run = "1234567890".repeat(40);

    for position in 0..catalog.len() {
        for input in inputs {
            let _ = catalog.check(position, input);
        }
        let _ = catalog.check(position, &long);
        let _ = catalog.check(position, &long_digit_run);
    }
}

#[test]
fn test_predicate_evaluation_is_deterministic() {
    let catalog = standard_catalog();
    let input = "Fe 9 9 7 May a1b2 (42, -73) \u{1F600}";

    for position in 0..catalog.len() {
        let first = catalog.check(position, input);
        let second = catalog.check(position, input);
        assert_eq!(first, second);
    }
}
