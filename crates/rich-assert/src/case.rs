//! String case splitting and conversion helpers for naming-convention tests.
//!
//! [`split_words`] divides identifiers on separators and capitalisation
//! boundaries while keeping acronym runs together, and [`convert`] recombines
//! the words under a target [`StringCase`]. The rules match what camel and
//! Pascal identifiers look like in practice: `endpointURLOfService` splits
//! into `endpoint`, `URL`, `Of`, `Service`.

use std::fmt;

/// Target case for [`convert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringCase {
    /// `camelCaseString`; acronyms after the first word stay uppercase.
    Camel,
    /// `PascalCaseString`; acronyms stay uppercase.
    Pascal,
    /// `snake_case_string`, all lowercase.
    Snake,
    /// `kebab-case-string`, all lowercase.
    Kebab,
}

impl fmt::Display for StringCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Camel => "Camel",
            Self::Pascal => "Pascal",
            Self::Snake => "Snake",
            Self::Kebab => "Kebab",
        };
        f.write_str(name)
    }
}

/// Split a string into its component words.
///
/// The string is first divided on `_`, `-`, and spaces, then on
/// capitalisation boundaries. A run of capitals followed by a lowercase
/// letter is treated as an acronym, keeping its last capital with the next
/// word. Word case is preserved.
///
/// # Examples
///
/// ```
/// use rich_assert::case::split_words;
///
/// assert_eq!(split_words("someRandomWords"), ["some", "Random", "Words"]);
/// assert_eq!(
///     split_words("endpointURLOfService"),
///     ["endpoint", "URL", "Of", "Service"]
/// );
/// ```
#[must_use]
pub fn split_words(input: &str) -> Vec<String> {
    input
        .split(['_', '-', ' '])
        .filter(|chunk| !chunk.is_empty())
        .flat_map(split_on_case_boundaries)
        .collect()
}

fn split_on_case_boundaries(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut words = Vec::new();
    let mut rest = chars.as_slice();
    while !rest.is_empty() {
        let (word, tail) = rest.split_at(next_boundary(rest));
        words.push(word.iter().collect());
        rest = tail;
    }
    words
}

// Returns how many characters of `rest` form the next word. With no
// lowercase letter at all the remainder is one word (e.g. "HTML").
fn next_boundary(rest: &[char]) -> usize {
    rest.iter()
        .position(|c| c.is_lowercase())
        .map_or(rest.len(), |first_lower| {
            let leading_capitals = first_lower.saturating_sub(1);
            if leading_capitals > 0 {
                // Acronym run; its final capital starts the next word.
                leading_capitals
            } else {
                rest.iter()
                    .enumerate()
                    .skip(1)
                    .find(|(_, c)| c.is_uppercase())
                    .map_or(rest.len(), |(index, _)| index)
            }
        })
}

/// Convert a string to the given [`StringCase`].
///
/// The input is split with [`split_words`] and recombined under the target
/// case's rules, so mixed inputs such as `some_words-andMore` normalise
/// cleanly.
///
/// # Examples
///
/// ```
/// use rich_assert::case::{StringCase, convert};
///
/// assert_eq!(
///     convert("endpoint_url_of_service", StringCase::Pascal),
///     "EndpointUrlOfService"
/// );
/// assert_eq!(
///     convert("EndpointURLOfService", StringCase::Snake),
///     "endpoint_url_of_service"
/// );
/// ```
#[must_use]
pub fn convert(input: &str, case: StringCase) -> String {
    let words = split_words(input);
    match case {
        StringCase::Camel => {
            let mut iter = words.iter();
            let first = iter
                .next()
                .map_or_else(String::new, |word| word.to_lowercase());
            iter.map(|word| capitalise(word)).fold(first, |mut acc, word| {
                acc.push_str(&word);
                acc
            })
        }
        StringCase::Pascal => words.iter().map(|word| capitalise(word)).collect(),
        StringCase::Snake => join_lowercased(&words, "_"),
        StringCase::Kebab => join_lowercased(&words, "-"),
    }
}

fn join_lowercased(words: &[String], separator: &str) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join(separator)
}

// Single-letter and all-uppercase words stay fully uppercase (acronym rule);
// everything else gets a leading capital with the remainder lowercased.
fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.clone().next().is_none() || word.chars().all(char::is_uppercase) {
        return word.to_uppercase();
    }
    first
        .to_uppercase()
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

/// Remove the first occurrence of `search` from `text`.
///
/// Returns `false`, leaving `text` untouched, when `search` is absent. The
/// [`assert_find_and_replace!`](crate::assert_find_and_replace) macro reports
/// the absent case as a test failure.
pub fn find_and_replace(search: &str, text: &mut String) -> bool {
    text.find(search).is_some_and(|at| {
        text.replace_range(at..at.saturating_add(search.len()), "");
        true
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{StringCase, convert, find_and_replace, split_words};

    #[rstest]
    #[case::camel("camelCaseString", &["camel", "Case", "String"])]
    #[case::pascal("PascalCaseString", &["Pascal", "Case", "String"])]
    #[case::snake("snake_case_string", &["snake", "case", "string"])]
    #[case::kebab("kebab-case-string", &["kebab", "case", "string"])]
    #[case::spaces("some random words", &["some", "random", "words"])]
    #[case::acronym_mid("endpointURLOfService", &["endpoint", "URL", "Of", "Service"])]
    #[case::acronym_tail("parseHTML", &["parse", "HTML"])]
    #[case::acronym_only("HTML", &["HTML"])]
    #[case::mixed_separators("some_words-andMore", &["some", "words", "and", "More"])]
    #[case::empty("", &[])]
    #[case::separators_only("_-_", &[])]
    fn splits_into_expected_words(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_words(input), expected);
    }

    #[rstest]
    #[case(StringCase::Camel, "someRandomStringOfWords")]
    #[case(StringCase::Pascal, "SomeRandomStringOfWords")]
    #[case(StringCase::Snake, "some_random_string_of_words")]
    #[case(StringCase::Kebab, "some-random-string-of-words")]
    fn converts_between_cases(#[case] case: StringCase, #[case] expected: &str) {
        assert_eq!(convert("Some random string of words", case), expected);
    }

    #[test]
    fn acronyms_stay_uppercase_when_capitalised() {
        assert_eq!(
            convert("endpoint URL of service", StringCase::Pascal),
            "EndpointURLOfService"
        );
        assert_eq!(
            convert("endpoint URL of service", StringCase::Camel),
            "endpointURLOfService"
        );
    }

    #[test]
    fn case_names_render_for_diagnostics() {
        assert_eq!(StringCase::Camel.to_string(), "Camel");
        assert_eq!(StringCase::Kebab.to_string(), "Kebab");
    }

    #[test]
    fn find_and_replace_removes_first_occurrence() {
        let mut text = "one two two three".to_owned();
        assert!(find_and_replace("two ", &mut text));
        assert_eq!(text, "one two three");
    }

    #[test]
    fn find_and_replace_leaves_text_when_absent() {
        let mut text = "one two three".to_owned();
        assert!(!find_and_replace("four", &mut text));
        assert_eq!(text, "one two three");
    }
}
