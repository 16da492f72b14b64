//! Tree model
//!
//! A [`Node`] is a map, a list, a scalar, or an opaque byte payload. Maps are
//! keyed by [`Key`], the subset of scalars that can be hashed.
//!
//! JSON documents convert into trees losslessly. Converting back renders
//! symbols as `":name"` strings so the representation stays visible.
//!
//! Trees are released iteratively, so nesting depth is bounded by memory
//! rather than by the call stack.

use indexmap::IndexMap;
use std::fmt;

use crate::coerce::Token;
use crate::symbol::{SYMBOL_MARKER, Symbol};

/// Insertion-ordered mapping. Order is kept for readable output only.
pub type Map = IndexMap<Key, Node>;

/// A node in a data tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Absent value
    Nil,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Text
    Str(String),
    /// Interned symbol
    Sym(Symbol),
    /// Ordered sequence
    List(Vec<Node>),
    /// Key/value mapping
    Map(Map),
    /// Opaque payload, never inspected
    Bytes(Vec<u8>),
}

/// A map key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Text key
    Str(String),
    /// Symbol key
    Sym(Symbol),
    /// Integer key
    Int(i64),
    /// Boolean key
    Bool(bool),
}

impl Node {
    /// Whether this is `Nil`
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Whether this is the empty string
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }

    /// Whether this is a list without elements
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Whether this is a map without entries
    pub fn is_empty_map(&self) -> bool {
        matches!(self, Self::Map(map) if map.is_empty())
    }

    /// Text content, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Symbol, if this is one
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Sym(s) => Some(s),
            _ => None,
        }
    }

    /// Entries, if this is a map
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Elements, if this is a list
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a map entry by key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Node> {
        self.as_map()?.get(&key.into())
    }

    /// Convert into JSON
    ///
    /// Symbols become `":name"` strings, bytes become arrays of numbers and
    /// non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Nil => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(n) => Value::from(*n),
            Self::UInt(n) => Value::from(*n),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Str(s) => Value::String(s.clone()),
            Self::Sym(s) => Value::String(s.to_string()),
            Self::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Self::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
            Self::Bytes(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
        }
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Node::from).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::Str(k), Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::List(items) if !items.is_empty() => std::mem::take(items),
            Self::Map(map) if !map.is_empty() => std::mem::take(map).into_values().collect(),
            _ => return,
        };

        // Children are emptied before they drop, so each drop is shallow.
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Self::List(items) => pending.append(items),
                Self::Map(map) => pending.extend(std::mem::take(map).into_values()),
                _ => {}
            }
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::UInt(n), Self::Int)
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Symbol> for Node {
    fn from(s: Symbol) -> Self {
        Self::Sym(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::List(items)
    }
}

impl From<Map> for Node {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(s) => Self::Str(s),
            Token::Symbol(s) => Self::Sym(s),
        }
    }
}

impl From<Token> for Key {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(s) => Self::Str(s),
            Token::Symbol(s) => Self::Sym(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Symbol> for Key {
    fn from(s: Symbol) -> Self {
        Self::Sym(s)
    }
}

impl From<&Symbol> for Key {
    fn from(s: &Symbol) -> Self {
        Self::Sym(s.clone())
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Sym(s) => write!(f, "{}{}", SYMBOL_MARKER, s.as_str()),
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}
