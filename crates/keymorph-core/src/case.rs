//! Word case conversion
//!
//! Each converter is a single left-to-right scan over the word that only
//! remembers the class of the previous character. Case folding is ASCII-only;
//! every other character is copied through untouched.
//!
//! | style         | input              | output              |
//! |---------------|--------------------|---------------------|
//! | `snake`       | `thisCase`         | `this_case`         |
//! | `camel`       | `this_case`        | `thisCase`          |
//! | `pascal`      | `this_case`        | `ThisCase`          |
//! | `path`        | `ModuleName.Here`  | `module_name/here`  |
//! | `module_path` | `module_name/here` | `ModuleName.Here`   |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualifier some module names carry. Stripped on input, never re-added.
const MODULE_QUALIFIER: &str = "Elixir.";

/// Naming convention a word is rewritten into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// Leave the word as it is
    #[default]
    None,
    /// `snake_case`
    Snake,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `path/notation` to `Module.Notation`
    ModulePath,
    /// `Module.Notation` to `path/notation`
    Path,
}

impl CaseStyle {
    /// Spellings accepted by [`FromStr`] and the configuration loader
    pub const NAMES: &'static [&'static str] =
        &["none", "snake", "camel", "pascal", "module_path", "path"];

    /// Configuration spelling of this style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Snake => "snake",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::ModulePath => "module_path",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "snake" => Ok(Self::Snake),
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "module_path" => Ok(Self::ModulePath),
            "path" => Ok(Self::Path),
            other => Err(format!(
                "unknown case style '{}', expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Rewrite `word` into `style`
pub fn convert(word: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::None => word.to_string(),
        CaseStyle::Snake => to_snake(word),
        CaseStyle::Camel => to_camel(word),
        CaseStyle::Pascal => to_pascal(word),
        CaseStyle::ModulePath => to_module_path(word),
        CaseStyle::Path => to_path(word),
    }
}

/// Class of the previously scanned character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    /// Start of the word or of a path segment
    Start,
    Upper,
    Delimiter,
    Other,
}

fn is_delimiter(c: char) -> bool {
    c == '_' || c == '-'
}

/// Convert a word to `snake_case`.
///
/// `-` is treated as `_`, delimiter runs collapse, and contiguous uppercase
/// runs stay together: `"VALUE"` becomes `"value"` but `"vaLUE"` becomes
/// `"va_lue"`.
pub fn to_snake(word: &str) -> String {
    let word = word.trim_start_matches(is_delimiter);
    let mut out = String::with_capacity(word.len() + 4);
    let mut prev = Prev::Start;

    for c in word.chars() {
        prev = match c {
            '_' | '-' => {
                if prev != Prev::Delimiter {
                    out.push('_');
                }
                Prev::Delimiter
            }
            c if c.is_ascii_uppercase() => {
                if prev == Prev::Other {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                Prev::Upper
            }
            c => {
                out.push(c);
                Prev::Other
            }
        };
    }

    out
}

/// Convert a word to `camelCase`.
///
/// Underscores are dropped and the character after them is uppercased. Nothing
/// is lowered, so `"HTTP_server"` becomes `"HTTPServer"`.
pub fn to_camel(word: &str) -> String {
    join_words(word, false)
}

/// Convert a word to `PascalCase`
pub fn to_pascal(word: &str) -> String {
    join_words(word, true)
}

fn join_words(word: &str, capitalize_first: bool) -> String {
    let word = word.trim_start_matches(is_delimiter);
    let mut out = String::with_capacity(word.len());
    let mut upcase_next = capitalize_first;

    for c in word.chars() {
        if c == '_' {
            upcase_next = true;
            continue;
        }
        if upcase_next {
            out.push(c.to_ascii_uppercase());
            upcase_next = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Convert module notation to path notation: `"ModuleName.Here"` becomes
/// `"module_name/here"`.
///
/// Works like [`to_snake`] with two additions: `.` becomes `/` and opens a new
/// segment, and the last letter of an uppercase run is split off when a
/// lowercase letter follows (`"HTTPServer"` becomes `"http_server"`).
pub fn to_path(module: &str) -> String {
    let module = module.strip_prefix(MODULE_QUALIFIER).unwrap_or(module);
    let mut out = String::with_capacity(module.len() + 4);
    let mut prev = Prev::Start;
    let mut chars = module.chars().peekable();

    while let Some(c) = chars.next() {
        prev = match c {
            '.' => {
                out.push('/');
                Prev::Start
            }
            '_' | '-' => match prev {
                Prev::Start => Prev::Start,
                Prev::Delimiter => Prev::Delimiter,
                Prev::Upper | Prev::Other => {
                    out.push('_');
                    Prev::Delimiter
                }
            },
            c if c.is_ascii_uppercase() => {
                let ends_acronym = prev == Prev::Upper
                    && chars.peek().is_some_and(|&next| {
                        !(next.is_ascii_uppercase()
                            || next.is_ascii_digit()
                            || next == '.'
                            || is_delimiter(next))
                    });
                if prev == Prev::Other || ends_acronym {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                Prev::Upper
            }
            c => {
                out.push(c);
                Prev::Other
            }
        };
    }

    out
}

/// Convert path notation to module notation: `"module_name/here"` becomes
/// `"ModuleName.Here"`.
///
/// Works like [`to_pascal`] per segment; `/` becomes `.` and the first
/// character of every segment is uppercased.
pub fn to_module_path(path: &str) -> String {
    let path = path.strip_prefix(MODULE_QUALIFIER).unwrap_or(path);
    let mut out = String::with_capacity(path.len());
    let mut segment_start = true;
    let mut upcase_next = true;

    for c in path.chars() {
        match c {
            '/' => {
                out.push('.');
                segment_start = true;
                upcase_next = true;
            }
            '_' | '-' if segment_start => {}
            '_' => upcase_next = true,
            c => {
                if upcase_next {
                    out.push(c.to_ascii_uppercase());
                } else {
                    out.push(c);
                }
                upcase_next = false;
                segment_start = false;
            }
        }
    }

    out
}
