use prompt_chain::codec;
use prompt_chain::host::{NodeRequest, NodeResponse};
use prompt_chain::plugin::NodeEvaluatorRegistry;
use prompt_chain::template::ScriptedChoices;

use serde_json::json;

fn registry() -> NodeEvaluatorRegistry {
    NodeEvaluatorRegistry::with_builtin_nodes()
}

#[test]
fn test_chain_node_from_host_json() {
    let request = NodeRequest::from_json(
        &json!({
            "mode": "Combine",
            "text": "masterpiece, red hair | blue hair",
            "neg_text": "lowres",
            "input_1": "smile, hat",
            "input_2": codec::encode("outdoors", "blurry"),
        })
        .to_string(),
    )
    .unwrap();

    let mut rng = ScriptedChoices::always(1);
    let response = registry().evaluate("prompt_chain", request, &mut rng).unwrap();

    assert_eq!(response.positive, "masterpiece, smile, outdoors, blue hair, hat");
    assert_eq!(response.negative, "lowres, blurry");
    assert_eq!(
        codec::decode(&response.output).into_bundle().positive,
        response.positive
    );
}

#[test]
fn test_chain_node_disabled_from_host_json() {
    let request = NodeRequest::from_json(r#"{"disabled": true, "text": "a|b", "input_1": "x"}"#).unwrap();
    let mut rng = ScriptedChoices::always(0);
    let response = registry().evaluate("prompt_chain", request, &mut rng).unwrap();
    assert_eq!(response.output, "");
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_chain_node_rejects_unknown_mode() {
    let request = NodeRequest::from_json(r#"{"mode": "Shuffle"}"#).unwrap();
    let mut rng = ScriptedChoices::always(0);
    assert!(registry().evaluate("prompt_chain", request, &mut rng).is_err());
}

#[test]
fn test_simple_node() {
    let request = NodeRequest {
        text: "red\nblue,\nsmiling\nfrowning".to_string(),
        ..NodeRequest::default()
    };
    let mut rng = ScriptedChoices::new(vec![0, 1]);
    let response = registry()
        .evaluate("prompt_chain_simple", request, &mut rng)
        .unwrap();
    assert_eq!(
        response,
        NodeResponse {
            output: "red, frowning".to_string(),
            positive: "red, frowning".to_string(),
            negative: String::new(),
            display: "red, frowning".to_string(),
        }
    );
}

#[test]
fn test_preview_node_passes_bundle_through() {
    let wire = codec::encode("cat, hat", "blurry");
    let request = NodeRequest::default().with_input(1, &wire);
    let mut rng = ScriptedChoices::always(0);
    let response = registry()
        .evaluate("prompt_chain_preview", request, &mut rng)
        .unwrap();

    assert_eq!(response.output, wire);
    assert_eq!(response.positive, "cat, hat");
    assert_eq!(response.negative, "blurry");
    assert_eq!(response.display, "cat, hat\nNegative: blurry");
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_preview_node_without_input() {
    let mut rng = ScriptedChoices::always(0);
    let response = registry()
        .evaluate("prompt_chain_preview", NodeRequest::default(), &mut rng)
        .unwrap();
    assert_eq!(response, NodeResponse::default());
}

#[test]
fn test_response_serializes_for_host() {
    let response = NodeResponse {
        output: "a".to_string(),
        positive: "a".to_string(),
        negative: String::new(),
        display: "a".to_string(),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value, json!({"output": "a", "positive": "a", "negative": "", "display": "a"}));
}

#[test]
fn test_chain_node_with_custom_controller() {
    use prompt_chain::evaluation::{ChainController, NullObserver};
    use prompt_chain::plugin::{ChainNode, NodeEvaluator};
    use std::sync::Arc;

    let node = ChainNode::with_controller(ChainController::with_observer(Arc::new(NullObserver)));
    let request = NodeRequest {
        mode: "Switch".to_string(),
        switch_index: 2,
        ..NodeRequest::default()
    }
    .with_input(1, "x")
    .with_input(2, "y");

    let mut rng = ScriptedChoices::always(0);
    let response = node.evaluate(request, &mut rng).unwrap();
    assert_eq!(response.positive, "y");
    assert_eq!(node.type_id(), "prompt_chain");
}
