//! Case conversions that turn a free-form name into the eight canonical variants.
//!
//! Every conversion first splits its input into words: runs of non-alphanumeric
//! characters separate words, and so does a lowercase letter followed by an
//! uppercase one (`myComponent` and `my-component` both become `my`, `component`).
//! Digits never start a new word on their own, so `test-component-123` keeps `123`
//! as a separate word only because of the hyphen.

use serde::{Deserialize, Serialize};

/// The fixed set of case conventions a name is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseVariant {
    Pascal,
    Camel,
    Kebab,
    Snake,
    Constant,
    Title,
    LowerNoSpaces,
    LowerWithSpaces,
}

impl CaseVariant {
    pub const ALL: [CaseVariant; 8] = [
        CaseVariant::Pascal,
        CaseVariant::Camel,
        CaseVariant::Kebab,
        CaseVariant::Snake,
        CaseVariant::Constant,
        CaseVariant::Title,
        CaseVariant::LowerNoSpaces,
        CaseVariant::LowerWithSpaces,
    ];

    /// Renders `input` in this case convention.
    pub fn apply(self, input: &str) -> String {
        match self {
            CaseVariant::Pascal => pascal_case(input),
            CaseVariant::Camel => camel_case(input),
            CaseVariant::Kebab => kebab_case(input),
            CaseVariant::Snake => snake_case(input),
            CaseVariant::Constant => constant_case(input),
            CaseVariant::Title => title_case(input),
            CaseVariant::LowerNoSpaces => lower_no_spaces(input),
            CaseVariant::LowerWithSpaces => lower_with_spaces(input),
        }
    }

    /// Human-readable label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            CaseVariant::Pascal => "PascalCase",
            CaseVariant::Camel => "camelCase",
            CaseVariant::Kebab => "kebab-case",
            CaseVariant::Snake => "snake_case",
            CaseVariant::Constant => "CONSTANT_CASE",
            CaseVariant::Title => "Title Case",
            CaseVariant::LowerNoSpaces => "lowercasenospaces",
            CaseVariant::LowerWithSpaces => "lowercase with spaces",
        }
    }
}

/// Splits `input` into words on non-alphanumeric runs and lower→upper transitions.
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lowercase = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lowercase = false;
            continue;
        }

        if ch.is_uppercase() && prev_lowercase && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev_lowercase = ch.is_lowercase();
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_mapped(input: &str, separator: &str, map: impl Fn(&str) -> String) -> String {
    split_words(input)
        .iter()
        .map(|word| map(word.as_str()))
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn pascal_case(input: &str) -> String {
    join_mapped(input, "", capitalize)
}

pub fn camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            if idx == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

pub fn kebab_case(input: &str) -> String {
    join_mapped(input, "-", str::to_lowercase)
}

pub fn snake_case(input: &str) -> String {
    join_mapped(input, "_", str::to_lowercase)
}

pub fn constant_case(input: &str) -> String {
    join_mapped(input, "_", str::to_uppercase)
}

pub fn title_case(input: &str) -> String {
    join_mapped(input, " ", capitalize)
}

/// Pure character filter: no word splitting, every non-alphanumeric character dropped.
pub fn lower_no_spaces(input: &str) -> String {
    input
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn lower_with_spaces(input: &str) -> String {
    join_mapped(input, " ", str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_handles_separators_and_camel_boundaries() {
        assert_eq!(split_words("my-component"), vec!["my", "component"]);
        assert_eq!(split_words("myComponent"), vec!["my", "Component"]);
        assert_eq!(split_words("  __user   profile!! "), vec!["user", "profile"]);
        assert!(split_words("").is_empty());
        assert!(split_words("--- ___").is_empty());
    }

    #[test]
    fn digits_do_not_trigger_word_boundaries() {
        assert_eq!(split_words("version2Beta"), vec!["version2Beta"]);
        assert_eq!(split_words("test-component-123"), vec!["test", "component", "123"]);
        assert_eq!(pascal_case("test-component-123"), "TestComponent123");
    }

    #[test]
    fn user_profile_renders_every_variant() {
        let name = "user profile";
        assert_eq!(pascal_case(name), "UserProfile");
        assert_eq!(camel_case(name), "userProfile");
        assert_eq!(kebab_case(name), "user-profile");
        assert_eq!(snake_case(name), "user_profile");
        assert_eq!(constant_case(name), "USER_PROFILE");
        assert_eq!(title_case(name), "User Profile");
        assert_eq!(lower_no_spaces(name), "userprofile");
        assert_eq!(lower_with_spaces(name), "user profile");
    }

    #[test]
    fn mixed_case_input_is_normalized() {
        assert_eq!(pascal_case("myComponent"), "MyComponent");
        assert_eq!(kebab_case("MyComponent"), "my-component");
        assert_eq!(constant_case("fetch userData"), "FETCH_USER_DATA");
        assert_eq!(title_case("HELLO world"), "Hello World");
        assert_eq!(lower_with_spaces("Hello   __World"), "hello world");
        assert_eq!(lower_no_spaces("My-Widget 2"), "mywidget2");
    }

    #[test]
    fn empty_input_yields_empty_output_for_every_variant() {
        for variant in CaseVariant::ALL {
            assert_eq!(variant.apply(""), "", "{}", variant.label());
        }
    }

    #[test]
    fn single_character_is_one_word() {
        assert_eq!(pascal_case("a"), "A");
        assert_eq!(camel_case("A"), "a");
        assert_eq!(constant_case("x"), "X");
    }

    #[test]
    fn camel_case_is_pascal_case_with_lowered_first_character() {
        let inputs = [
            "user profile",
            "my-component",
            "fetchUserData",
            "API endpoint_v2",
            "a b c",
            "test-component-123",
        ];
        for input in inputs {
            let pascal = pascal_case(input);
            let mut chars = pascal.chars();
            let expected: String = match chars.next() {
                Some(first) => first.to_lowercase().chain(chars).collect(),
                None => String::new(),
            };
            assert_eq!(camel_case(input), expected, "input: {input}");
        }
    }
}
