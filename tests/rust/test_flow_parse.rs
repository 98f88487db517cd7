use super::*;

#[test]
fn test_parse_minimal_flow() {
    let src = r#"{
        "datasets": [
            {"name": "raw", "role": "input"},
            {"name": "clean", "role": "intermediate"}
        ],
        "recipes": [
            {"name": "prep", "kind": "prepare", "inputs": ["raw"], "outputs": ["clean"]}
        ]
    }"#;
    let flow = parse_flow(src).unwrap();
    assert_eq!(flow.datasets.len(), 2);
    assert_eq!(flow.recipes.len(), 1);
    assert_eq!(flow.recipes[0].inputs[0].name(), "raw");
    assert_eq!(flow.recipes[0].outputs[0].name(), "clean");
}

#[test]
fn test_parse_aliased_refs() {
    let src = r#"{
        "datasets": [{"name": "a"}, {"name": "b"}],
        "recipes": [
            {"name": "r", "kind": "sync", "inputs": [{"ref": "a"}], "outputs": [{"ref": "b"}]}
        ]
    }"#;
    let flow = parse_flow(src).unwrap();
    let recipe = &flow.recipes[0];
    assert_eq!(
        recipe.inputs[0],
        DatasetRef::Aliased {
            target: "a".to_string()
        }
    );
    assert_eq!(recipe.outputs[0].name(), "b");
}

#[test]
fn test_parse_mixed_ref_shapes() {
    let src = r#"{
        "datasets": [{"name": "a"}, {"name": "b"}],
        "recipes": [
            {"name": "r", "kind": "join", "inputs": ["a", {"ref": "b"}], "outputs": []}
        ]
    }"#;
    let flow = parse_flow(src).unwrap();
    assert_eq!(flow.recipes[0].inputs[0], DatasetRef::Plain("a".to_string()));
    assert_eq!(flow.recipes[0].inputs[1].name(), "b");
}

#[test]
fn test_parse_role_defaults_to_intermediate() {
    let src = r#"{"datasets": [{"name": "a"}]}"#;
    let flow = parse_flow(src).unwrap();
    assert_eq!(flow.datasets[0].role, DatasetRole::Intermediate);
}

#[test]
fn test_parse_type_alias_for_kind() {
    let src = r#"{
        "recipes": [{"name": "r", "type": "grouping"}]
    }"#;
    let flow = parse_flow(src).unwrap();
    assert_eq!(flow.recipes[0].kind, "grouping");
}

#[test]
fn test_parse_recipe_payload_fields() {
    let src = r#"{
        "recipes": [{
            "name": "r",
            "kind": "join",
            "join_type": "inner",
            "steps": [{"op": "trim"}],
            "aggregations": [{}, {}]
        }]
    }"#;
    let flow = parse_flow(src).unwrap();
    let recipe = &flow.recipes[0];
    assert_eq!(recipe.join_type.as_deref(), Some("inner"));
    assert_eq!(recipe.steps.len(), 1);
    assert_eq!(recipe.aggregations.len(), 2);
}

#[test]
fn test_parse_empty_object_is_empty_flow() {
    let flow = parse_flow("{}").unwrap();
    assert!(flow.datasets.is_empty());
    assert!(flow.recipes.is_empty());
}

#[test]
fn test_parse_invalid_json_errors() {
    assert!(parse_flow("not json").is_err());
    assert!(parse_flow(r#"{"datasets": 7}"#).is_err());
}
