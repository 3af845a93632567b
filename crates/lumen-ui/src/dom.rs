//! Document-head backed style registry.

use crate::core::css::StyleFragment;
use crate::core::error::StyleError;
use crate::core::identity::InstanceIdentity;
use crate::core::registry::StyleRegistry;
use web_sys::Element;

/// Attribute written on every injected `<style>` node, holding its scope class.
pub const SCOPE_ATTRIBUTE: &str = "data-style-scope";

/// Appends `<style>` nodes to `document.head` and removes them by element handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHeadRegistry;

impl StyleRegistry for DocumentHeadRegistry {
    type Handle = Element;

    fn insert(
        &mut self,
        _identity: &InstanceIdentity,
        fragment: &StyleFragment,
    ) -> Result<Element, StyleError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(StyleError::ContainerUnavailable("document"))?;
        let head = document
            .head()
            .ok_or(StyleError::ContainerUnavailable("document head"))?;
        let node = document
            .create_element("style")
            .map_err(|err| rejected(&err))?;
        node.set_attribute(SCOPE_ATTRIBUTE, fragment.scope_class())
            .map_err(|err| rejected(&err))?;
        node.set_text_content(Some(fragment.css()));
        head.append_child(&node).map_err(|err| rejected(&err))?;
        Ok(node)
    }

    fn remove(&mut self, handle: Element) {
        handle.remove();
    }
}

fn rejected(err: &wasm_bindgen::JsValue) -> StyleError {
    StyleError::Rejected {
        detail: format!("{err:?}"),
    }
}
