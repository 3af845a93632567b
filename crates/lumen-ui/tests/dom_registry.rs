#![cfg(target_arch = "wasm32")]
//! Browser checks for the document-head style registry.

use lumen_ui::core::css::scope_class;
use lumen_ui::core::identity::InstanceIdentity;
use lumen_ui::core::labels::LabelPair;
use lumen_ui::core::scoped_style::{ScopedStyleManager, StyleLifecycle};
use lumen_ui::dom::{DocumentHeadRegistry, SCOPE_ATTRIBUTE};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn head_nodes_for(identity: &InstanceIdentity) -> u32 {
    let selector = format!("style[{SCOPE_ATTRIBUTE}=\"{}\"]", scope_class(identity));
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector_all(&selector).ok())
        .map_or(0, |nodes| nodes.length())
}

#[wasm_bindgen_test]
fn label_updates_keep_a_single_head_node() {
    let identity = InstanceIdentity::allocate();
    let mut styles = ScopedStyleManager::new(identity, DocumentHeadRegistry);

    styles.on_mount(&LabelPair::new("Hello", "Bye")).expect("mount");
    assert_eq!(head_nodes_for(&identity), 1);

    for round in 0..50 {
        let label = round.to_string();
        styles.sync(&LabelPair::new(&label, &label)).expect("update");
    }
    assert_eq!(head_nodes_for(&identity), 1);

    styles.on_unmount();
    styles.on_unmount();
    assert_eq!(head_nodes_for(&identity), 0);
}

#[wasm_bindgen_test]
fn inserted_node_carries_escaped_fragment() {
    let identity = InstanceIdentity::allocate();
    let mut styles = ScopedStyleManager::new(identity, DocumentHeadRegistry);
    styles.on_mount(&LabelPair::new("On", "a\"b")).expect("mount");

    let selector = format!("style[{SCOPE_ATTRIBUTE}=\"{}\"]", scope_class(&identity));
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(&selector).ok().flatten())
        .and_then(|node| node.text_content())
        .unwrap_or_default();
    assert!(text.contains(r#"content: "a\"b";"#));
}
