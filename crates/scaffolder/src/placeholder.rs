//! The closed placeholder vocabulary and literal substitution.

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::case::CaseVariant;
use crate::variables::VariableSet;

/// Prefix shared by every placeholder token, including malformed ones.
pub const TOKEN_PREFIX: &str = "__templateName";

/// One of the eight recognized placeholder tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Placeholder {
    PascalCase,
    CamelCase,
    KebabCase,
    SnakeCase,
    ConstantCase,
    TitleCase,
    LowerCase,
    LowerCaseWithSpaces,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::PascalCase,
        Placeholder::CamelCase,
        Placeholder::KebabCase,
        Placeholder::SnakeCase,
        Placeholder::ConstantCase,
        Placeholder::TitleCase,
        Placeholder::LowerCase,
        Placeholder::LowerCaseWithSpaces,
    ];

    /// The literal marker embedded in templates.
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::PascalCase => "__templateNameToPascalCase__",
            Placeholder::CamelCase => "__templateNameToCamelCase__",
            Placeholder::KebabCase => "__templateNameToKebabCase__",
            Placeholder::SnakeCase => "__templateNameToSnakeCase__",
            Placeholder::ConstantCase => "__templateNameToConstantCase__",
            Placeholder::TitleCase => "__templateNameToTitleCase__",
            Placeholder::LowerCase => "__templateNameToLowerCase__",
            Placeholder::LowerCaseWithSpaces => "__templateNameToLowerCaseWithSpaces__",
        }
    }

    pub fn variant(self) -> CaseVariant {
        match self {
            Placeholder::PascalCase => CaseVariant::Pascal,
            Placeholder::CamelCase => CaseVariant::Camel,
            Placeholder::KebabCase => CaseVariant::Kebab,
            Placeholder::SnakeCase => CaseVariant::Snake,
            Placeholder::ConstantCase => CaseVariant::Constant,
            Placeholder::TitleCase => CaseVariant::Title,
            Placeholder::LowerCase => CaseVariant::LowerNoSpaces,
            Placeholder::LowerCaseWithSpaces => CaseVariant::LowerWithSpaces,
        }
    }

    /// Looks up a full token literal such as `__templateNameToKebabCase__`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|placeholder| placeholder.token() == token)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Matches anything shaped like a token: the prefix, a run without `_` or
/// whitespace, and the closing `__`. Recognized or not.
pub(crate) fn token_pattern() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(r"__templateName[^_\s]*__").expect("Invalid regex"))
}

/// Replaces every recognized token in `text` with its value from `variables`.
///
/// Unrecognized tokens are left untouched; the validator reports them. Values
/// never contain a token, so one pass per token is enough.
pub fn substitute<'a>(text: &'a str, variables: &VariableSet) -> Cow<'a, str> {
    if !text.contains(TOKEN_PREFIX) {
        return Cow::Borrowed(text);
    }

    let mut output = text.to_string();
    for placeholder in Placeholder::ALL {
        let token = placeholder.token();
        if output.contains(token) {
            output = output.replace(token, variables.get(placeholder));
        }
    }
    Cow::Owned(output)
}
