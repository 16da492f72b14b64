//! End-to-end tests for tree transformation
//!
//! Covers the documented scenarios:
//! - Symbol keys, including keys that are not identifier-safe
//! - Case conversion through nested lists and maps
//! - Shallow (`deep: false`) walks
//! - Pruning, and the independence of value and element flags
//! - Configuration resolution feeding the transformer

use keymorph_core::{
    CaseStyle, Error, Key, Map, Node, RepresentationMode, SymbolTable, TransformConfig, to_camel,
    to_pascal, to_path, to_snake, transform, transform_with,
};
use rstest::rstest;
use serde_json::json;

fn tree(value: serde_json::Value) -> Node {
    Node::from(value)
}

/// Whether any map value or list element equals `""`, at any depth
fn contains_empty_string(node: &Node) -> bool {
    match node {
        Node::Str(s) => s.is_empty(),
        Node::List(items) => items.iter().any(contains_empty_string),
        Node::Map(map) => map.values().any(contains_empty_string),
        _ => false,
    }
}

// =============================================================================
// Case conversion table
// =============================================================================

#[test]
fn test_literal_case_table() {
    assert_eq!(to_snake("value-dashed"), "value_dashed");
    assert_eq!(to_snake("vaLUE"), "va_lue");
    assert_eq!(to_camel("camel_case"), "camelCase");
    assert_eq!(to_pascal("pascal_case"), "PascalCase");
    assert_eq!(to_path("ModuleName.Here"), "module_name/here");
}

// =============================================================================
// Representation scenarios
// =============================================================================

#[test]
fn test_symbol_keys_keep_non_identifier_text() {
    let input = tree(json!({"Tardis": {"Key1": 10}, "is": 2, "The.Color": "blue"}));
    let config = TransformConfig {
        key_representation: RepresentationMode::Symbol,
        ..TransformConfig::default()
    };
    let mut symbols = SymbolTable::default();
    let result = transform_with(input, &config, &mut symbols).unwrap();

    let map = result.as_map().unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.keys().all(|k| matches!(k, Key::Sym(_))));

    let tardis = symbols.get("Tardis").unwrap();
    let key1 = symbols.get("Key1").unwrap();
    let is = symbols.get("is").unwrap();
    let color = symbols.get("The.Color").unwrap();

    assert_eq!(result.get(&tardis).and_then(|n| n.get(&key1)), Some(&Node::Int(10)));
    assert_eq!(result.get(&is), Some(&Node::Int(2)));
    // Values keep their representation.
    assert_eq!(result.get(&color), Some(&Node::from("blue")));
    assert_eq!(color.to_string(), ":The.Color");
}

#[test]
fn test_symbol_if_marked_values() {
    let input = tree(json!({"status": ":active", "label": "active", "tags": [":a", "b"]}));
    let config = TransformConfig {
        value_representation: RepresentationMode::SymbolIfMarked,
        ..TransformConfig::default()
    };
    let result = transform(input, &config).unwrap();
    assert_eq!(
        result.to_json(),
        json!({"status": ":active", "label": "active", "tags": [":a", "b"]})
    );
    assert!(result.get("status").and_then(Node::as_symbol).is_some());
    assert!(result.get("label").and_then(Node::as_str).is_some());
}

// =============================================================================
// Case scenarios
// =============================================================================

#[test]
fn test_snake_keys_inside_list() {
    let input = tree(json!([{"thisCase": 1, "thatCase": 2}]));
    let config = TransformConfig {
        key_case: CaseStyle::Snake,
        ..TransformConfig::default()
    };
    let result = transform(input, &config).unwrap();
    assert_eq!(result, tree(json!([{"this_case": 1, "that_case": 2}])));

    let first = &result.as_list().unwrap()[0];
    assert!(first.as_map().unwrap().keys().all(|k| matches!(k, Key::Str(_))));
}

#[test]
fn test_shallow_walk_leaves_nested_keys() {
    let config = TransformConfig {
        key_case: CaseStyle::Snake,
        value_case: CaseStyle::Snake,
        deep: false,
        ..TransformConfig::default()
    };

    let input = tree(json!([{"thisCase": 1, "thatCase": 2}]));
    assert_eq!(transform(input.clone(), &config).unwrap(), input);

    let input = tree(json!({"outerKey": {"innerKey": "innerValue"}, "topKey": "topValue"}));
    let result = transform(input, &config).unwrap();
    assert_eq!(
        result,
        tree(json!({"outer_key": {"innerKey": "innerValue"}, "top_key": "top_value"}))
    );
}

#[test]
fn test_module_path_values() {
    let input = tree(json!({"handler": "my_app/user_controller", "raw": "Plain.Module"}));
    let config = TransformConfig {
        value_case: CaseStyle::ModulePath,
        ..TransformConfig::default()
    };
    let result = transform(input, &config).unwrap();
    assert_eq!(
        result,
        tree(json!({"handler": "MyApp.UserController", "raw": "Plain.Module"}))
    );

    let config = TransformConfig {
        value_case: CaseStyle::Path,
        ..TransformConfig::default()
    };
    let result = transform(result, &config).unwrap();
    assert_eq!(
        result,
        tree(json!({"handler": "my_app/user_controller", "raw": "plain/module"}))
    );
}

// =============================================================================
// Pruning
// =============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_prune_empty_string_values(#[case] deep: bool) {
    let input = tree(json!({
        "a": "",
        "b": "kept",
        "c": {"d": "", "e": {"f": ""}},
        "g": [{"h": ""}]
    }));
    let config = TransformConfig {
        prune_empty_string_value: true,
        deep,
        ..TransformConfig::default()
    };
    let result = transform(input, &config).unwrap();

    let top = result.as_map().unwrap();
    assert!(top.values().all(|v| !v.is_empty_string()));
    assert_eq!(contains_empty_string(&result), !deep);
    if deep {
        assert_eq!(
            result,
            tree(json!({"b": "kept", "c": {"e": {}}, "g": [{}]}))
        );
    }
}

#[test]
fn test_value_and_elem_flags_are_independent() {
    let input = tree(json!({"empty": "", "items": ["", "x", null], "nested": {"list": [""]}}));

    let values_only = TransformConfig {
        prune_empty_string_value: true,
        prune_nil_value: true,
        ..TransformConfig::default()
    };
    assert_eq!(
        transform(input.clone(), &values_only).unwrap(),
        tree(json!({"items": ["", "x", null], "nested": {"list": [""]}}))
    );

    let elems_only = TransformConfig {
        prune_empty_string_elem: true,
        prune_nil_elem: true,
        ..TransformConfig::default()
    };
    assert_eq!(
        transform(input, &elems_only).unwrap(),
        tree(json!({"empty": "", "items": ["x"], "nested": {"list": []}}))
    );
}

#[test]
fn test_prune_all_kinds_in_lists() {
    let input = tree(json!([null, [], {}, "", 0, false, [null]]));
    let config = TransformConfig::from_pairs([
        ("prune_nil_elem", "true"),
        ("prune_empty_list_elem", "true"),
        ("prune_empty_map_elem", "true"),
        ("prune_empty_string_elem", "true"),
    ])
    .unwrap();
    let result = transform(input, &config).unwrap();
    assert_eq!(result, tree(json!([0, false, []])));
}

// =============================================================================
// Configuration and limits
// =============================================================================

#[test]
fn test_yaml_configuration_drives_transform() {
    let config = TransformConfig::from_yaml_str(
        r#"
key_case: camel
value_representation: symbol_if_marked
prune_nil_value: true
"#,
    )
    .unwrap();
    let input = tree(json!({"first_name": ":ada", "last_name": null, "order_items": [{"unit_price": 3}]}));
    let result = transform(input, &config).unwrap();
    assert_eq!(
        result.to_json(),
        json!({"firstName": ":ada", "orderItems": [{"unitPrice": 3}]})
    );
}

#[test]
fn test_misspelled_option_is_a_configuration_error() {
    let err = TransformConfig::from_yaml_str("prune_empty_strings_value: true\n").unwrap_err();
    assert!(matches!(err, Error::UnknownOption { .. }));
    assert!(err.to_string().contains("prune_empty_strings_value"));
}

#[test]
fn test_pathological_nesting_fails_cleanly() {
    let err = transform(nested(1_000_000), &TransformConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { limit: 128 }));
}

#[test]
fn test_pathological_nesting_passes_shallow_walk() {
    let config = TransformConfig {
        key_case: CaseStyle::Snake,
        deep: false,
        ..TransformConfig::default()
    };
    let result = transform(nested(1_000_000), &config).unwrap();
    assert!(result.get("levelKey").is_none());
    assert!(result.get("level_key").is_some());
}

/// Alternating maps and lists, `levels` deep, built without recursion
fn nested(levels: usize) -> Node {
    let mut node = Node::Int(0);
    for i in 0..levels {
        node = if i % 2 == 0 {
            Node::List(vec![node])
        } else {
            let mut map = Map::new();
            map.insert(Key::from("levelKey"), node);
            Node::Map(map)
        };
    }
    node
}

#[test]
fn test_concurrent_calls_on_disjoint_inputs() {
    let config = TransformConfig {
        key_case: CaseStyle::Pascal,
        key_representation: RepresentationMode::Symbol,
        ..TransformConfig::default()
    };

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let config = &config;
                scope.spawn(move || {
                    let input = tree(json!({"some_key": i, "other_key": [i]}));
                    transform(input, config).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().unwrap();
            assert_eq!(
                result.to_json(),
                json!({":SomeKey": i, ":OtherKey": [i]})
            );
        }
    });
}
