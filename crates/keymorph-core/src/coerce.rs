//! Word coercion
//!
//! Combines a [`CaseStyle`] and a [`RepresentationMode`] to decide the final
//! form of a single key or scalar value. Case conversion always runs first;
//! the representation is resolved afterwards.
//!
//! | mode               | text `":x"`        | text `"x"`        | symbol            |
//! |--------------------|--------------------|-------------------|-------------------|
//! | `symbol`           | strip, convert, symbol | convert, symbol | convert, symbol |
//! | `symbol_if_marked` | strip, convert, symbol | convert, text   | unchanged       |
//! | `string`           | convert, text      | convert, text     | convert, text     |
//! | `none`             | convert, text      | convert, text     | convert, symbol   |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::case::{CaseStyle, convert};
use crate::error::Result;
use crate::symbol::{SYMBOL_MARKER, Symbol, SymbolTable};

/// How a coerced word is represented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepresentationMode {
    /// Keep whatever representation the word already has
    #[default]
    None,
    /// Always produce a symbol
    Symbol,
    /// Produce a symbol only for `:`-prefixed text
    SymbolIfMarked,
    /// Always produce text
    String,
}

impl RepresentationMode {
    /// Spellings accepted by [`FromStr`] and the configuration loader
    pub const NAMES: &'static [&'static str] = &["none", "symbol", "symbol_if_marked", "string"];

    /// Configuration spelling of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Symbol => "symbol",
            Self::SymbolIfMarked => "symbol_if_marked",
            Self::String => "string",
        }
    }
}

impl fmt::Display for RepresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepresentationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "symbol" => Ok(Self::Symbol),
            "symbol_if_marked" => Ok(Self::SymbolIfMarked),
            "string" => Ok(Self::String),
            other => Err(format!(
                "unknown representation '{}', expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// A word in either of its two representations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text
    Text(String),
    /// Interned symbol
    Symbol(Symbol),
}

fn restyle(word: String, case: CaseStyle) -> String {
    match case {
        CaseStyle::None => word,
        style => convert(&word, style),
    }
}

/// Apply `case` and then `mode` to a single token.
///
/// Only fails when a new symbol is needed and `symbols` is full.
pub fn coerce_word(
    case: CaseStyle,
    mode: RepresentationMode,
    token: Token,
    symbols: &mut SymbolTable,
) -> Result<Token> {
    let coerced = match (token, mode) {
        (Token::Symbol(symbol), RepresentationMode::SymbolIfMarked) => Token::Symbol(symbol),
        (Token::Symbol(symbol), RepresentationMode::String) => {
            Token::Text(convert(symbol.as_str(), case))
        }
        (Token::Symbol(symbol), RepresentationMode::Symbol | RepresentationMode::None) => {
            match case {
                CaseStyle::None => Token::Symbol(symbol),
                style => Token::Symbol(symbols.intern(&convert(symbol.as_str(), style))?),
            }
        }
        (Token::Text(text), RepresentationMode::Symbol) => {
            let name = text.strip_prefix(SYMBOL_MARKER).unwrap_or(text.as_str());
            Token::Symbol(symbols.intern(&convert(name, case))?)
        }
        (Token::Text(text), RepresentationMode::SymbolIfMarked) => {
            match text.strip_prefix(SYMBOL_MARKER) {
                Some(name) => Token::Symbol(symbols.intern(&convert(name, case))?),
                None => Token::Text(restyle(text, case)),
            }
        }
        (Token::Text(text), RepresentationMode::String | RepresentationMode::None) => {
            Token::Text(restyle(text, case))
        }
    };
    Ok(coerced)
}
