use serde::Serialize;

use crate::case;
use crate::placeholder::Placeholder;

/// Every case variant of a single name, keyed by placeholder.
///
/// All eight fields are always populated; an empty name yields empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VariableSet {
    pub pascal_case: String,
    pub camel_case: String,
    pub kebab_case: String,
    pub snake_case: String,
    pub constant_case: String,
    pub title_case: String,
    pub lower_case: String,
    pub lower_case_with_spaces: String,
}

impl VariableSet {
    pub fn build(name: &str) -> Self {
        Self {
            pascal_case: case::pascal_case(name),
            camel_case: case::camel_case(name),
            kebab_case: case::kebab_case(name),
            snake_case: case::snake_case(name),
            constant_case: case::constant_case(name),
            title_case: case::title_case(name),
            lower_case: case::lower_no_spaces(name),
            lower_case_with_spaces: case::lower_with_spaces(name),
        }
    }

    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::PascalCase => &self.pascal_case,
            Placeholder::CamelCase => &self.camel_case,
            Placeholder::KebabCase => &self.kebab_case,
            Placeholder::SnakeCase => &self.snake_case,
            Placeholder::ConstantCase => &self.constant_case,
            Placeholder::TitleCase => &self.title_case,
            Placeholder::LowerCase => &self.lower_case,
            Placeholder::LowerCaseWithSpaces => &self.lower_case_with_spaces,
        }
    }

    /// Iterates `(placeholder, value)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> + '_ {
        Placeholder::ALL
            .into_iter()
            .map(move |placeholder| (placeholder, self.get(placeholder)))
    }
}
