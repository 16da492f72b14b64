//! keymorph Core Library
//!
//! This crate reshapes nested data trees:
//! - Case conversion of single words (snake, camel, pascal, module/path)
//! - Key and value representation coercion (text vs. symbol)
//! - Pruning of nil and empty entries
//! - Recursive or shallow tree transformation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Config    │────▶│    Tree     │────▶│    Word     │
//! │  (options)  │     │ Transformer │     │  Coercion   │
//! └─────────────┘     └─────────────┘     └──────┬──────┘
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    Case     │
//!                                         │  Converter  │
//!                                         └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use keymorph_core::{CaseStyle, Node, TransformConfig, transform};
//!
//! let input = Node::from(serde_json::json!([{"thisCase": 1, "thatCase": 2}]));
//! let config = TransformConfig {
//!     key_case: CaseStyle::Snake,
//!     ..TransformConfig::default()
//! };
//! let output = transform(input, &config)?;
//! assert_eq!(
//!     output,
//!     Node::from(serde_json::json!([{"this_case": 1, "that_case": 2}]))
//! );
//! # Ok::<(), keymorph_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod coerce;
pub mod config;
pub mod error;
pub mod node;
pub mod scalar;
pub mod symbol;
pub mod transform;

pub use case::{CaseStyle, to_camel, to_module_path, to_pascal, to_path, to_snake};
pub use coerce::{RepresentationMode, Token, coerce_word};
pub use config::{PruneFlags, TransformConfig};
pub use error::{Error, Result};
pub use node::{Key, Map, Node};
pub use symbol::{Symbol, SymbolTable};
pub use transform::{prune, rekey, stringify_keys, symbolize_keys, transform, transform_with};
