//! Case style registry.
//!
//! Maps the command-line tags (`camel`, `ucamel`, `kebab`, `ukebab`, `snake`,
//! `usnake`) to a [`Style`], and each [`Style`] to its display name and the
//! conversion rule applied to a line.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use convert_case::{Case, Casing};
use log::trace;

use crate::error::{Error, Result};

/// A letter-case convention a line can be rewritten into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// `helloWorld`
    #[default]
    LowerCamel,
    /// `HelloWorld`
    UpperCamel,
    /// `hello-world`
    Kebab,
    /// `Hello-World`
    UpperKebab,
    /// `hello_world`
    Snake,
    /// `HELLO_WORLD`
    UpperSnake,
}

struct StyleEntry {
    style: Style,
    tag: &'static str,
    name: &'static str,
    case: Case,
}

static STYLE_TABLE: [StyleEntry; 6] = [
    StyleEntry {
        style: Style::LowerCamel,
        tag: "camel",
        name: "CamelCase",
        case: Case::Camel,
    },
    StyleEntry {
        style: Style::UpperCamel,
        tag: "ucamel",
        name: "UpperCamelCase",
        case: Case::Pascal,
    },
    StyleEntry {
        style: Style::Kebab,
        tag: "kebab",
        name: "KebabCase",
        case: Case::Kebab,
    },
    StyleEntry {
        style: Style::UpperKebab,
        tag: "ukebab",
        name: "UpperKebabCase",
        case: Case::Train,
    },
    StyleEntry {
        style: Style::Snake,
        tag: "snake",
        name: "SnakeCase",
        case: Case::Snake,
    },
    StyleEntry {
        style: Style::UpperSnake,
        tag: "usnake",
        name: "UpperSnakeCase",
        case: Case::UpperSnake,
    },
];

impl Style {
    /// Every style, in the order the tags are documented.
    pub const ALL: [Style; 6] = [
        Style::LowerCamel,
        Style::UpperCamel,
        Style::Kebab,
        Style::UpperKebab,
        Style::Snake,
        Style::UpperSnake,
    ];

    /// Resolves a command-line tag to a style, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedStyle`] when `token` is none of the six tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use lettercase_core::style::Style;
    ///
    /// assert_eq!(Style::resolve("UKebab").unwrap(), Style::UpperKebab);
    /// assert!(Style::resolve("pascal").is_err());
    /// ```
    pub fn resolve(token: &str) -> Result<Self> {
        STYLE_TABLE
            .iter()
            .find(|entry| entry.tag.eq_ignore_ascii_case(token))
            .map(|entry| entry.style)
            .ok_or_else(|| Error::UnrecognizedStyle(token.to_string()))
    }

    /// Human-readable label, e.g. `UpperKebabCase`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.entry().map_or("UnknownCase", |entry| entry.name)
    }

    /// The tag accepted by `--case` for this style.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.entry().map_or("", |entry| entry.tag)
    }

    /// Rewrites `text` into this style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConversionFailed`] if no conversion rule is registered
    /// for the style.
    ///
    /// # Examples
    ///
    /// ```
    /// use lettercase_core::style::Style;
    ///
    /// assert_eq!(Style::Snake.convert("foo bar").unwrap(), "foo_bar");
    /// ```
    pub fn convert(self, text: &str) -> Result<String> {
        let Some(entry) = self.entry() else {
            return Err(Error::conversion_failed(
                format!("{self:?}"),
                text.to_string(),
            ));
        };

        let converted = text.to_case(entry.case);
        trace!("{}: `{}` -> `{}`", entry.name, text, converted);
        Ok(converted)
    }

    fn entry(self) -> Option<&'static StyleEntry> {
        STYLE_TABLE.iter().find(|entry| entry.style == self)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}
