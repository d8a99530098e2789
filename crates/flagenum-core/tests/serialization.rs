use flagenum_core::{create_enum, Definition};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn enum_serializes_as_numeric_projection() {
    let e = create_enum("Color", Definition::mapping([("RED", 1), ("GREEN", 2), ("BLUE", 4)]))
        .unwrap();
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(
        v,
        json!({
            "name": "Color",
            "enums": [1, 2, 4],
            "RED": 1,
            "GREEN": 2,
            "BLUE": 4
        })
    );
}

#[test]
fn enum_json_keys_keep_definition_order() {
    let e = create_enum("Order", ["Z", "A", "M"]).unwrap();
    let s = serde_json::to_string(&e).unwrap();
    assert_eq!(
        s,
        r#"{"name":"Order","enums":[1,2,4],"Z":1,"A":2,"M":4}"#
    );
}

#[test]
fn empty_enum_serializes_name_and_empty_list() {
    let e = create_enum("Empty", Vec::<&str>::new()).unwrap();
    assert_eq!(
        serde_json::to_value(&e).unwrap(),
        json!({"name": "Empty", "enums": []})
    );
}

#[test]
fn items_in_containers_serialize_as_values() {
    let e = create_enum("Perm", ["READ", "WRITE"]).unwrap();
    let selected = vec![e.item("WRITE").unwrap(), e.item("READ").unwrap()];
    assert_eq!(serde_json::to_value(&selected).unwrap(), json!([2, 1]));

    let record = json!({ "mode": e.item("WRITE").unwrap() });
    assert_eq!(record, json!({ "mode": 2 }));
}
