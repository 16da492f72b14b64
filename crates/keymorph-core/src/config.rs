//! Transform configuration
//!
//! A [`TransformConfig`] is resolved once per top-level call and stays
//! read-only for the whole walk. Every option has a default; naming an option
//! that does not exist is an error rather than a silent no-op.
//!
//! # Example
//!
//! ```yaml
//! key_case: snake
//! key_representation: symbol_if_marked
//! deep: true
//! prune_nil_value: true
//! prune_empty_string_elem: true
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::case::CaseStyle;
use crate::coerce::RepresentationMode;
use crate::error::{Error, Result};
use crate::node::Node;

/// Default limit on collection nesting
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Resolved configuration for one transform call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
    /// Representation of map keys
    pub key_representation: RepresentationMode,

    /// Representation of text/symbol values and list elements
    pub value_representation: RepresentationMode,

    /// Case style applied to map keys
    pub key_case: CaseStyle,

    /// Case style applied to text/symbol values and list elements
    pub value_case: CaseStyle,

    /// Recurse into nested maps and lists
    pub deep: bool,

    /// Drop map entries whose value is nil
    pub prune_nil_value: bool,

    /// Drop map entries whose value is an empty list
    pub prune_empty_list_value: bool,

    /// Drop map entries whose value is an empty map
    pub prune_empty_map_value: bool,

    /// Drop map entries whose value is the empty string
    pub prune_empty_string_value: bool,

    /// Drop nil list elements
    pub prune_nil_elem: bool,

    /// Drop empty-list list elements
    pub prune_empty_list_elem: bool,

    /// Drop empty-map list elements
    pub prune_empty_map_elem: bool,

    /// Drop empty-string list elements
    pub prune_empty_string_elem: bool,

    /// Deepest collection nesting accepted before the walk fails
    pub max_depth: usize,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            key_representation: RepresentationMode::None,
            value_representation: RepresentationMode::None,
            key_case: CaseStyle::None,
            value_case: CaseStyle::None,
            deep: true,
            prune_nil_value: false,
            prune_empty_list_value: false,
            prune_empty_map_value: false,
            prune_empty_string_value: false,
            prune_nil_elem: false,
            prune_empty_list_elem: false,
            prune_empty_map_elem: false,
            prune_empty_string_elem: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Which empty values a container drops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneFlags {
    /// Drop `""`
    pub empty_string: bool,
    /// Drop `[]`
    pub empty_list: bool,
    /// Drop nil
    pub nil: bool,
    /// Drop `{}`
    pub empty_map: bool,
}

impl PruneFlags {
    /// Whether `node` should be dropped
    pub fn drops(&self, node: &Node) -> bool {
        (self.empty_string && node.is_empty_string())
            || (self.empty_list && node.is_empty_list())
            || (self.nil && node.is_nil())
            || (self.empty_map && node.is_empty_map())
    }

    /// Whether any flag is set
    pub fn any(&self) -> bool {
        self.empty_string || self.empty_list || self.nil || self.empty_map
    }
}

impl TransformConfig {
    /// Every option name accepted by [`TransformConfig::set`]
    pub const OPTIONS: &'static [&'static str] = &[
        "key_representation",
        "value_representation",
        "key_case",
        "value_case",
        "deep",
        "prune_nil_value",
        "prune_empty_list_value",
        "prune_empty_map_value",
        "prune_empty_string_value",
        "prune_nil_elem",
        "prune_empty_list_elem",
        "prune_empty_map_elem",
        "prune_empty_string_elem",
        "max_depth",
    ];

    /// Deep pruning of nil, empty-list and empty-map values, nothing else
    pub fn pruning() -> Self {
        Self {
            prune_nil_value: true,
            prune_empty_list_value: true,
            prune_empty_map_value: true,
            ..Self::default()
        }
    }

    /// Flags applied to values reached through a map key
    pub fn value_pruning(&self) -> PruneFlags {
        PruneFlags {
            empty_string: self.prune_empty_string_value,
            empty_list: self.prune_empty_list_value,
            nil: self.prune_nil_value,
            empty_map: self.prune_empty_map_value,
        }
    }

    /// Flags applied to list elements
    pub fn elem_pruning(&self) -> PruneFlags {
        PruneFlags {
            empty_string: self.prune_empty_string_elem,
            empty_list: self.prune_empty_list_elem,
            nil: self.prune_nil_elem,
            empty_map: self.prune_empty_map_elem,
        }
    }

    /// Set a single option by name
    pub fn set(&mut self, name: &str, value: serde_yaml::Value) -> Result<()> {
        fn parse<T: DeserializeOwned>(name: &str, value: serde_yaml::Value) -> Result<T> {
            serde_yaml::from_value(value).map_err(|e| Error::InvalidOption {
                name: name.to_string(),
                message: e.to_string(),
            })
        }

        match name {
            "key_representation" => self.key_representation = parse(name, value)?,
            "value_representation" => self.value_representation = parse(name, value)?,
            "key_case" => self.key_case = parse(name, value)?,
            "value_case" => self.value_case = parse(name, value)?,
            "deep" => self.deep = parse(name, value)?,
            "prune_nil_value" => self.prune_nil_value = parse(name, value)?,
            "prune_empty_list_value" => self.prune_empty_list_value = parse(name, value)?,
            "prune_empty_map_value" => self.prune_empty_map_value = parse(name, value)?,
            "prune_empty_string_value" => self.prune_empty_string_value = parse(name, value)?,
            "prune_nil_elem" => self.prune_nil_elem = parse(name, value)?,
            "prune_empty_list_elem" => self.prune_empty_list_elem = parse(name, value)?,
            "prune_empty_map_elem" => self.prune_empty_map_elem = parse(name, value)?,
            "prune_empty_string_elem" => self.prune_empty_string_elem = parse(name, value)?,
            "max_depth" => self.max_depth = parse(name, value)?,
            _ => {
                return Err(Error::UnknownOption {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply options from a YAML mapping on top of the current values
    pub fn merge_yaml(&mut self, value: serde_yaml::Value) -> Result<()> {
        let mapping = match value {
            serde_yaml::Value::Null => return Ok(()),
            serde_yaml::Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::InvalidOption {
                    name: "<root>".to_string(),
                    message: format!("expected a mapping of options, got {:?}", other),
                });
            }
        };

        for (name, value) in mapping {
            let name = match name {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(Error::UnknownOption {
                        name: format!("{:?}", other),
                    });
                }
            };
            self.set(&name, value)?;
        }
        Ok(())
    }

    /// Resolve a configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mut config = Self::default();
        config.merge_yaml(value)?;
        Ok(config)
    }

    /// Resolve a configuration from a JSON object of the same shape
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let value = serde_yaml::to_value(value)?;
        let mut config = Self::default();
        config.merge_yaml(value)?;
        Ok(config)
    }

    /// Resolve a configuration from `name = value` pairs
    ///
    /// Values are read as YAML scalars, so `"true"`, `"64"` and `"snake"` all
    /// work.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        config.merge_pairs(pairs)?;
        Ok(config)
    }

    /// Apply `name = value` pairs on top of the current values
    pub fn merge_pairs<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            let name = name.as_ref();
            if !Self::OPTIONS.contains(&name) {
                return Err(Error::UnknownOption {
                    name: name.to_string(),
                });
            }
            let value: serde_yaml::Value =
                serde_yaml::from_str(value.as_ref()).map_err(|e| Error::InvalidOption {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
            self.set(name, value)?;
        }
        Ok(())
    }
}
