//! Rule predicates.
//!
//! Every catalog rule carries a `Predicate`: a pure, total check over the
//! candidate password. Predicates are data (a tagged enum), not closures,
//! so a catalog can be serialized, inspected, and tested independent of
//! executable code.
//!
//! ## Totality
//!
//! Every variant is defined for every `&str` - empty, control characters,
//! arbitrary Unicode, arbitrarily long. A predicate that needs content the
//! input lacks evaluates to `false`; no variant panics.
//!
//! ## Patterns
//!
//! Regex-based variants store their pattern source. The catalog compiles
//! each source exactly once into a `PatternCache` at load time, so
//! per-keystroke evaluation never recompiles. An invalid pattern is a
//! catalog configuration error surfaced at load.
//!
//! Character classes are written as explicit ASCII ranges (`[0-9]`,
//! `[a-zA-Z]`): digits and letters outside ASCII never satisfy the
//! digit and letter rules.

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Fibonacci numbers recognized by `FibonacciDigitRun`.
///
/// Recognition is by fixed list: digit runs parsing to anything outside
/// 1..=987 never match, no matter how Fibonacci they are.
const FIBONACCI: [u64; 15] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987];

/// A pure predicate over a candidate password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    // === Length ===

    /// At least N characters (Unicode scalar values).
    MinLength(usize),

    /// Character count is even (the empty string qualifies).
    EvenLength,

    // === Patterns ===

    /// Input matches the regex pattern somewhere.
    Pattern(String),

    /// At least `min` non-overlapping matches of the pattern.
    MinPatternCount { pattern: String, min: usize },

    /// At least `min` *distinct* matched strings of the pattern.
    MinDistinctPatternCount { pattern: String, min: usize },

    // === Substring membership ===

    /// Case-insensitive containment of any word in the list.
    AnyWord(Vec<String>),

    /// Case-sensitive containment of any symbol in the list.
    ///
    /// Used for chemical element symbols, where casing is meaningful
    /// ("Co" matches, "co" does not).
    AnySymbol(Vec<String>),

    /// Literal substring, case-sensitive.
    Literal(String),

    // === Combinatorial checks ===

    /// No three consecutive characters with unit-step ascending codes.
    ///
    /// Operates on raw character codes, not just digits: "abc", "123",
    /// and cross-category runs whose code points happen to be sequential
    /// all disqualify.
    NoAscendingRun,

    /// Contains a palindrome substring of at least `min_len` characters.
    PalindromeSubstring { min_len: usize },

    /// Some maximal run of consecutive digits parses to a prime.
    ///
    /// Each digit run is one candidate integer; values <= 1 are never
    /// prime.
    PrimeDigitRun,

    /// The digits of all digit runs sum to exactly N.
    ///
    /// "19" contributes 1+9=10, not 19. At least one digit is required.
    DigitSum(u32),

    /// Some maximal digit run parses to a Fibonacci number (1..987).
    FibonacciDigitRun,

    /// A run of at least `min_len` strictly alternating ASCII letters and
    /// digits ("a1b2", "7k8l").
    AlternatingRun { min_len: usize },

    /// Three consecutive digit characters ascending by one ("123", "456").
    AscendingDigitRun,

    /// A window of `len` consecutive digit characters whose digit product
    /// equals `product`.
    DigitWindowProduct { len: usize, product: u32 },

    /// A character repeated at least `min_run` times consecutively.
    RepeatedChar { min_run: usize },

    /// At least `min` distinct characters each appearing as a consecutive
    /// pair ("aa" and "bb").
    DistinctRepeatedPairs { min: usize },
}

impl Predicate {
    /// Create a pattern predicate.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Create a minimum-match-count predicate.
    pub fn min_count(pattern: impl Into<String>, min: usize) -> Self {
        Self::MinPatternCount {
            pattern: pattern.into(),
            min,
        }
    }

    /// Create a minimum-distinct-match predicate.
    pub fn min_distinct(pattern: impl Into<String>, min: usize) -> Self {
        Self::MinDistinctPatternCount {
            pattern: pattern.into(),
            min,
        }
    }

    /// Create a case-insensitive word-list predicate.
    pub fn any_word(words: &[&str]) -> Self {
        Self::AnyWord(words.iter().map(|w| (*w).to_string()).collect())
    }

    /// Create a case-sensitive symbol-list predicate.
    pub fn any_symbol(symbols: &[&str]) -> Self {
        Self::AnySymbol(symbols.iter().map(|s| (*s).to_string()).collect())
    }

    /// The regex source this predicate needs compiled, if any.
    #[must_use]
    pub fn pattern_source(&self) -> Option<&str> {
        match self {
            Self::Pattern(pattern)
            | Self::MinPatternCount { pattern, .. }
            | Self::MinDistinctPatternCount { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    /// Evaluate this predicate against a candidate password.
    ///
    /// Pattern variants look their compiled regex up in `patterns`; a
    /// pattern missing from the cache evaluates to `false` (the catalog
    /// compiles every pattern at load, so this only happens for a
    /// predicate evaluated outside any catalog).
    #[must_use]
    pub fn matches(&self, password: &str, patterns: &PatternCache) -> bool {
        match self {
            Self::MinLength(min) => password.chars().count() >= *min,

            Self::EvenLength => password.chars().count() % 2 == 0,

            Self::Pattern(pattern) => patterns
                .get(pattern)
                .is_some_and(|re| re.is_match(password)),

            Self::MinPatternCount { pattern, min } => patterns
                .get(pattern)
                .is_some_and(|re| re.find_iter(password).count() >= *min),

            Self::MinDistinctPatternCount { pattern, min } => {
                patterns.get(pattern).is_some_and(|re| {
                    let distinct: FxHashSet<&str> =
                        re.find_iter(password).map(|m| m.as_str()).collect();
                    distinct.len() >= *min
                })
            }

            Self::AnyWord(words) => {
                let lower = password.to_lowercase();
                words.iter().any(|word| lower.contains(word.as_str()))
            }

            Self::AnySymbol(symbols) => {
                symbols.iter().any(|symbol| password.contains(symbol.as_str()))
            }

            Self::Literal(literal) => password.contains(literal.as_str()),

            Self::NoAscendingRun => no_ascending_run(password),

            Self::PalindromeSubstring { min_len } => has_palindrome(password, *min_len),

            Self::PrimeDigitRun => digit_runs(password)
                .filter_map(|run| run.parse::<u64>().ok())
                .any(is_prime),

            Self::DigitSum(target) => digit_sum_equals(password, *target),

            Self::FibonacciDigitRun => digit_runs(password)
                .filter_map(|run| run.parse::<u64>().ok())
                .any(|n| FIBONACCI.contains(&n)),

            Self::AlternatingRun { min_len } => has_alternating_run(password, *min_len),

            Self::AscendingDigitRun => has_ascending_digit_run(password),

            Self::DigitWindowProduct { len, product } => {
                has_digit_window_product(password, *len, *product)
            }

            Self::RepeatedChar { min_run } => longest_char_run(password) >= *min_run,

            Self::DistinctRepeatedPairs { min } => distinct_paired_chars(password) >= *min,
        }
    }
}

/// Cache of compiled regex patterns, keyed by pattern source.
///
/// Built once by the catalog at load time and shared by every evaluation.
#[derive(Clone, Debug, Default)]
pub struct PatternCache {
    patterns: FxHashMap<String, Regex>,
}

impl PatternCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and insert a pattern if not already present.
    pub fn compile(&mut self, source: &str) -> Result<(), regex::Error> {
        if !self.patterns.contains_key(source) {
            let re = Regex::new(source)?;
            self.patterns.insert(source.to_string(), re);
        }
        Ok(())
    }

    /// Look up a compiled pattern by source.
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&Regex> {
        self.patterns.get(source)
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

// === Scan helpers ===

/// Maximal runs of consecutive ASCII digit characters.
fn digit_runs(password: &str) -> impl Iterator<Item = &str> {
    password
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}

fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    // `i * i` would overflow for n close to u64::MAX; once the square
    // overflows it exceeds any u64 n, so the trial is over.
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

fn digit_sum_equals(password: &str, target: u32) -> bool {
    let mut any_digit = false;
    let mut sum: u64 = 0;
    for c in password.chars().filter(char::is_ascii_digit) {
        any_digit = true;
        sum += u64::from(c as u32 - '0' as u32);
    }
    any_digit && sum == u64::from(target)
}

fn no_ascending_run(password: &str) -> bool {
    let chars: Vec<u32> = password.chars().map(|c| c as u32).collect();
    !chars
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1)
}

/// Any palindrome of length >= `min_len` contains a centered palindrome
/// of length `min_len` or `min_len + 1`, so checking those two window
/// sizes is sufficient.
fn has_palindrome(password: &str, min_len: usize) -> bool {
    if min_len == 0 {
        return true;
    }
    let chars: Vec<char> = password.chars().collect();
    let is_palindrome = |w: &[char]| w.iter().eq(w.iter().rev());
    chars.windows(min_len).any(|w| is_palindrome(w))
        || chars.windows(min_len + 1).any(|w| is_palindrome(w))
}

fn has_alternating_run(password: &str, min_len: usize) -> bool {
    if min_len == 0 {
        return true;
    }
    let chars: Vec<char> = password.chars().collect();
    chars.windows(min_len).any(|w| {
        let letter_first = w
            .iter()
            .enumerate()
            .all(|(i, c)| if i % 2 == 0 { c.is_ascii_alphabetic() } else { c.is_ascii_digit() });
        let digit_first = w
            .iter()
            .enumerate()
            .all(|(i, c)| if i % 2 == 0 { c.is_ascii_digit() } else { c.is_ascii_alphabetic() });
        letter_first || digit_first
    })
}

fn has_ascending_digit_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| {
        w.iter().all(char::is_ascii_digit) && {
            let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
            b == a + 1 && c == b + 1
        }
    })
}

fn has_digit_window_product(password: &str, len: usize, product: u32) -> bool {
    if len == 0 {
        return false;
    }
    let chars: Vec<char> = password.chars().collect();
    chars.windows(len).any(|w| {
        w.iter().all(char::is_ascii_digit)
            && w.iter()
                .map(|c| u64::from(*c as u32 - '0' as u32))
                .try_fold(1u64, u64::checked_mul)
                == Some(u64::from(product))
    })
}

fn longest_char_run(password: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        run = if prev == Some(c) { run + 1 } else { 1 };
        longest = longest.max(run);
        prev = Some(c);
    }
    longest
}

fn distinct_paired_chars(password: &str) -> usize {
    let mut paired: FxHashSet<char> = FxHashSet::default();
    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in password.chars() {
        run = if prev == Some(c) { run + 1 } else { 1 };
        if run >= 2 {
            paired.insert(c);
        }
        prev = Some(c);
    }
    paired.len()
}
