//! Tree transformer
//!
//! Walks maps and lists, pruning entries and coercing keys and scalar values
//! as the [`TransformConfig`] asks. The input tree is consumed and a new tree
//! is returned; a lone top-level scalar comes back untouched.
//!
//! Per map entry:
//!
//! 1. Drop the entry if its value matches an enabled value-pruning flag.
//! 2. Recurse into map/list values when `deep`, otherwise coerce text and
//!    symbol values with `value_case`/`value_representation`.
//! 3. Coerce text and symbol keys with `key_case`/`key_representation`.
//!
//! List elements follow the same steps with the element-pruning flags.

use crate::case::CaseStyle;
use crate::coerce::{RepresentationMode, Token, coerce_word};
use crate::config::{PruneFlags, TransformConfig};
use crate::error::{Error, Result};
use crate::node::{Key, Map, Node};
use crate::symbol::SymbolTable;

/// Transform `node` using a fresh default-capacity symbol table
pub fn transform(node: Node, config: &TransformConfig) -> Result<Node> {
    let mut symbols = SymbolTable::default();
    transform_with(node, config, &mut symbols)
}

/// Transform `node`, interning symbols into a caller-owned table
pub fn transform_with(
    mut node: Node,
    config: &TransformConfig,
    symbols: &mut SymbolTable,
) -> Result<Node> {
    tracing::debug!(
        key_case = %config.key_case,
        key_representation = %config.key_representation,
        value_case = %config.value_case,
        value_representation = %config.value_representation,
        deep = config.deep,
        "transforming tree"
    );

    let mut walker = Walker {
        config,
        symbols,
        value_pruning: config.value_pruning(),
        elem_pruning: config.elem_pruning(),
    };

    if let Node::Map(map) = &mut node {
        return walker.map(std::mem::take(map), 1).map(Node::Map);
    }
    if let Node::List(items) = &mut node {
        return walker.list(std::mem::take(items), 1).map(Node::List);
    }
    Ok(node)
}

/// Deeply drop nil, empty-list and empty-map values from maps
pub fn prune(node: Node) -> Result<Node> {
    transform(node, &TransformConfig::pruning())
}

/// Turn every text key into a symbol, at any depth
pub fn symbolize_keys(node: Node, symbols: &mut SymbolTable) -> Result<Node> {
    let config = TransformConfig {
        key_representation: RepresentationMode::Symbol,
        ..TransformConfig::default()
    };
    transform_with(node, &config, symbols)
}

/// Turn every symbol key into text, at any depth
pub fn stringify_keys(node: Node) -> Result<Node> {
    let config = TransformConfig {
        key_representation: RepresentationMode::String,
        ..TransformConfig::default()
    };
    transform(node, &config)
}

/// Rewrite every key into `case`, keeping its representation
pub fn rekey(node: Node, case: CaseStyle) -> Result<Node> {
    let config = TransformConfig {
        key_case: case,
        ..TransformConfig::default()
    };
    transform(node, &config)
}

struct Walker<'a> {
    config: &'a TransformConfig,
    symbols: &'a mut SymbolTable,
    value_pruning: PruneFlags,
    elem_pruning: PruneFlags,
}

impl Walker<'_> {
    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn map(&mut self, map: Map, depth: usize) -> Result<Map> {
        self.enter(depth)?;

        let mut out = Map::with_capacity(map.len());
        for (key, value) in map {
            if self.value_pruning.drops(&value) {
                tracing::trace!(%key, depth, "pruned map entry");
                continue;
            }
            let value = self.value(value, depth)?;
            let key = self.key(key)?;
            if let Some(replaced) = out.insert(key, value) {
                tracing::trace!(?replaced, depth, "coerced key collided, later entry kept");
            }
        }
        Ok(out)
    }

    fn list(&mut self, items: Vec<Node>, depth: usize) -> Result<Vec<Node>> {
        self.enter(depth)?;

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if self.elem_pruning.drops(&item) {
                tracing::trace!(depth, "pruned list element");
                continue;
            }
            out.push(self.value(item, depth)?);
        }
        Ok(out)
    }

    fn value(&mut self, mut node: Node, depth: usize) -> Result<Node> {
        if self.config.deep {
            if let Node::Map(map) = &mut node {
                return self.map(std::mem::take(map), depth + 1).map(Node::Map);
            }
            if let Node::List(items) = &mut node {
                return self.list(std::mem::take(items), depth + 1).map(Node::List);
            }
        }
        let token = match &mut node {
            Node::Str(text) => Token::Text(std::mem::take(text)),
            Node::Sym(symbol) => Token::Symbol(symbol.clone()),
            _ => return Ok(node),
        };
        self.value_word(token)
    }

    fn value_word(&mut self, token: Token) -> Result<Node> {
        coerce_word(
            self.config.value_case,
            self.config.value_representation,
            token,
            self.symbols,
        )
        .map(Node::from)
    }

    fn key(&mut self, key: Key) -> Result<Key> {
        let token = match key {
            Key::Str(text) => Token::Text(text),
            Key::Sym(symbol) => Token::Symbol(symbol),
            other => return Ok(other),
        };
        coerce_word(
            self.config.key_case,
            self.config.key_representation,
            token,
            self.symbols,
        )
        .map(Key::from)
    }
}
