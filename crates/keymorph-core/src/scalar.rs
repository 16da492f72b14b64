//! Scalar coercion helpers
//!
//! Read a number or symbol out of a loosely typed scalar. A value that cannot
//! be read gives `None` so the caller can pick a default.

use crate::node::Node;
use crate::symbol::{SYMBOL_MARKER, Symbol, SymbolTable};

/// Read an integer from an int, an integral float, or numeric text/symbol
pub fn to_integer(node: &Node) -> Option<i64> {
    match node {
        Node::Int(n) => Some(*n),
        Node::UInt(n) => i64::try_from(*n).ok(),
        // `i64::MAX as f64` rounds up to 2^63, which is out of range.
        Node::Float(f) if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 => {
            Some(*f as i64)
        }
        Node::Str(s) => parse_integer(s),
        Node::Sym(s) => parse_integer(s.as_str()),
        _ => None,
    }
}

fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>().ok().or_else(|| {
        let f = text.parse::<f64>().ok()?;
        to_integer(&Node::Float(f))
    })
}

/// Read a float from a number or numeric text/symbol
pub fn to_float(node: &Node) -> Option<f64> {
    match node {
        Node::Int(n) => Some(*n as f64),
        Node::UInt(n) => Some(*n as f64),
        Node::Float(f) => Some(*f),
        Node::Str(s) => s.trim().parse().ok(),
        Node::Sym(s) => s.as_str().trim().parse().ok(),
        _ => None,
    }
}

/// Intern text as a symbol; symbols are returned as they are
///
/// A leading `:` marker is stripped. Empty text, non-text scalars and a full
/// table all give `None`.
pub fn to_symbol(node: &Node, symbols: &mut SymbolTable) -> Option<Symbol> {
    match node {
        Node::Sym(s) => Some(s.clone()),
        Node::Str(s) => {
            let name = s.strip_prefix(SYMBOL_MARKER).unwrap_or(s.as_str());
            if name.is_empty() {
                return None;
            }
            symbols.intern(name).ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(&Node::Int(7)), Some(7));
        assert_eq!(to_integer(&Node::Float(3.0)), Some(3));
        assert_eq!(to_integer(&Node::Float(3.5)), None);
        assert_eq!(to_integer(&Node::from(" 42 ")), Some(42));
        assert_eq!(to_integer(&Node::from("1e3")), Some(1000));
        assert_eq!(to_integer(&Node::from("forty")), None);
        assert_eq!(to_integer(&Node::Bool(true)), None);
        assert_eq!(to_integer(&Node::Float(f64::NAN)), None);
        assert_eq!(to_integer(&Node::UInt(u64::MAX)), None);
    }

    #[test]
    fn test_to_integer_rejects_out_of_range_floats() {
        let two_pow_63 = 9_223_372_036_854_775_808.0_f64;
        assert_eq!(to_integer(&Node::Float(two_pow_63)), None);
        assert_eq!(to_integer(&Node::Float(-two_pow_63)), Some(i64::MIN));
        assert_eq!(to_integer(&Node::Float(f64::INFINITY)), None);
        assert_eq!(to_integer(&Node::from("9223372036854775808")), None);
        assert_eq!(to_integer(&Node::Float(9_007_199_254_740_992.0)), Some(1 << 53));
    }

    #[test]
    fn test_to_float() {
        assert_eq!(to_float(&Node::Int(2)), Some(2.0));
        assert_eq!(to_float(&Node::UInt(1 << 63)), Some(9_223_372_036_854_775_808.0));
        assert_eq!(to_float(&Node::from("2.25")), Some(2.25));
        assert_eq!(to_float(&Node::from("")), None);
        assert_eq!(to_float(&Node::Nil), None);
    }

    #[test]
    fn test_to_symbol() {
        let mut symbols = SymbolTable::default();
        let a = to_symbol(&Node::from(":name"), &mut symbols).unwrap();
        let b = to_symbol(&Node::from("name"), &mut symbols).unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(to_symbol(&Node::from(":"), &mut symbols), None);
        assert_eq!(to_symbol(&Node::Int(1), &mut symbols), None);

        let mut full = SymbolTable::new(0);
        assert_eq!(to_symbol(&Node::from("x"), &mut full), None);
    }
}
