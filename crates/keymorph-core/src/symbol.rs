//! Bounded symbol interning
//!
//! Symbols are the "interned token" representation of a key or value. There is
//! no process-wide table: every [`Symbol`] comes from a caller-owned
//! [`SymbolTable`] with a fixed capacity, so turning untrusted text into
//! symbols cannot grow memory without bound.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Marker that flags text as symbolic, as in `":name"`
pub const SYMBOL_MARKER: char = ':';

/// Default number of distinct symbols a table accepts
pub const DEFAULT_SYMBOL_CAPACITY: usize = 65_536;

/// An interned token
///
/// Cloning is a reference count bump. Two symbols compare equal when they name
/// the same text, regardless of which table produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Symbol name without the marker
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two symbols share the same interned allocation
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SYMBOL_MARKER, self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Caller-owned, bounded intern pool
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols: HashSet<Arc<str>>,
    capacity: usize,
}

impl SymbolTable {
    /// Create a table that holds at most `capacity` distinct symbols
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: HashSet::new(),
            capacity,
        }
    }

    /// Create a table without a practical limit
    ///
    /// Only use this for trusted input.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Intern `name`, reusing the existing symbol when it is already known
    pub fn intern(&mut self, name: &str) -> Result<Symbol> {
        if let Some(existing) = self.symbols.get(name) {
            return Ok(Symbol(Arc::clone(existing)));
        }
        if self.symbols.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "symbol table exhausted");
            return Err(Error::SymbolTableFull {
                capacity: self.capacity,
            });
        }
        let symbol: Arc<str> = Arc::from(name);
        self.symbols.insert(Arc::clone(&symbol));
        Ok(Symbol(symbol))
    }

    /// Look up an already interned symbol without allocating a new one
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).map(|s| Symbol(Arc::clone(s)))
    }

    /// Number of interned symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table holds no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Maximum number of distinct symbols
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL_CAPACITY)
    }
}
