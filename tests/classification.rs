//! End-to-end classification scenarios over the pure core.

use std::collections::BTreeMap;

use intent_router::config::RoutingConfig;
use intent_router::routing::{ArgKind, EntityId, Route, RoutingTable};

fn table() -> RoutingTable {
    RoutingTable::compile(&RoutingConfig {
        collections: vec!["contacts".into(), "deals".into(), "tasks".into()],
        entity_types: None,
        min_entity_id_len: 3,
    })
}

#[test]
fn collection_list() {
    assert_eq!(
        table().classify("contacts"),
        Route::Collection {
            collection: "contacts".into()
        }
    );
}

#[test]
fn entity_lookup() {
    assert_eq!(
        table().classify("contact_abc"),
        Route::Entity {
            entity: EntityId {
                entity_type: "contact".into(),
                id: "abc".into()
            }
        }
    );
}

#[test]
fn entity_action() {
    assert_eq!(
        table().classify("contact_abc/qualify"),
        Route::EntityAction {
            entity: EntityId {
                entity_type: "contact".into(),
                id: "abc".into()
            },
            action: "qualify".into()
        }
    );
}

#[test]
fn collection_schema_introspection() {
    assert_eq!(
        table().classify("contacts/$schema"),
        Route::Meta {
            resource: "schema".into(),
            entity: None,
            collection: Some("contacts".into()),
        }
    );
}

#[test]
fn call_with_entity_argument() {
    match table().classify("score(contact_abc)") {
        Route::FunctionCall { call } => {
            assert_eq!(call.name, "score");
            assert_eq!(call.args.len(), 1);
            assert_eq!(call.args[0].value, "contact_abc");
            assert_eq!(call.args[0].kind, ArgKind::Entity);
            assert!(call.kwargs.is_empty());
        }
        other => panic!("unexpected route: {:?}", other),
    }
}

#[test]
fn call_with_url_argument_and_kwarg() {
    match table().classify("papa.parse(https://example.com/data.csv,header=true)") {
        Route::FunctionCall { call } => {
            assert_eq!(call.name, "papa.parse");
            assert_eq!(call.args.len(), 1);
            assert_eq!(call.args[0].value, "https://example.com/data.csv");
            assert_eq!(call.args[0].kind, ArgKind::Url);
            let expected: BTreeMap<String, String> =
                [("header".to_string(), "true".to_string())].into();
            assert_eq!(call.kwargs, expected);
        }
        other => panic!("unexpected route: {:?}", other),
    }
}

#[test]
fn empty_path_is_root_unknown() {
    assert_eq!(
        table().classify(""),
        Route::Unknown {
            segments: Vec::new()
        }
    );
}

#[test]
fn every_grammar_row_classifies() {
    let t = table();
    let cases: Vec<(&str, &str)> = vec![
        ("", "unknown"),
        ("fetch(https://a.b/c)", "function_call"),
        ("search", "search"),
        ("contact_abc", "entity"),
        ("contact_abc/qualify", "entity_action"),
        ("contact_abc/$history", "meta"),
        ("contacts", "collection"),
        ("contacts/archive", "collection_action"),
        ("contacts/$schema", "meta"),
        ("$schema", "meta"),
        ("a/b/c", "unknown"),
    ];
    for (path, kind) in cases {
        assert_eq!(t.classify(path).kind_label(), kind, "path: {:?}", path);
    }
}

#[test]
fn entity_round_trip_property() {
    for segment in ["contact_abc", "deal_x9Kq2z", "task_ab_cd", "q_000"] {
        match table().classify(segment) {
            Route::Entity { entity } => assert_eq!(entity.to_segment(), segment),
            other => panic!("expected entity for {:?}, got {:?}", segment, other),
        }
    }
}

#[test]
fn url_argument_with_slashes_is_not_fragmented() {
    match table().classify("import(https://example.com/exports/2026/contacts.csv)") {
        Route::FunctionCall { call } => {
            assert_eq!(
                call.args[0].value,
                "https://example.com/exports/2026/contacts.csv"
            );
        }
        other => panic!("unexpected route: {:?}", other),
    }
}

#[test]
fn entity_shape_wins_over_collection_membership() {
    let t = RoutingTable::compile(&RoutingConfig {
        collections: vec!["note_001".into()],
        entity_types: None,
        min_entity_id_len: 3,
    });
    assert!(matches!(t.classify("note_001"), Route::Entity { .. }));
}
