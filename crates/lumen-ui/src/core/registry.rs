//! Shared style registry abstraction and an in-memory recording implementation.
//!
//! # Design
//! - The document-level style container is injected as a [`StyleRegistry`] rather than
//!   reached through a global, so the lifecycle can be exercised without a browser.
//! - `insert` hands back the handle of exactly the node it created; `remove` takes that
//!   handle back, so retraction never depends on querying the container.
//! - [`MemoryRegistry`] clones share one node list, mirroring many widgets writing to
//!   one document head.

use crate::core::css::StyleFragment;
use crate::core::error::StyleError;
use crate::core::identity::InstanceIdentity;
use std::cell::RefCell;
use std::rc::Rc;

/// Container that style fragments are appended to and removed from.
pub trait StyleRegistry {
    /// Reference to one inserted style node.
    type Handle;

    /// Append `fragment` as a new node attributed to `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] when the container is unavailable or rejects the node.
    fn insert(
        &mut self,
        identity: &InstanceIdentity,
        fragment: &StyleFragment,
    ) -> Result<Self::Handle, StyleError>;

    /// Remove the node behind `handle`. Removing an already-detached node is a no-op.
    fn remove(&mut self, handle: Self::Handle);
}

/// Handle to a node held by [`MemoryRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(u64);

/// Style node as stored by [`MemoryRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleNode {
    /// Handle assigned at insertion.
    pub handle: NodeHandle,
    /// Instance the node was inserted for.
    pub identity: InstanceIdentity,
    /// Stylesheet text carried by the node.
    pub css: String,
}

/// Mutation observed by [`MemoryRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A node was appended.
    Inserted(NodeHandle, InstanceIdentity),
    /// A node was removed.
    Removed(NodeHandle, InstanceIdentity),
}

#[derive(Debug, Default)]
struct MemoryState {
    next_handle: u64,
    nodes: Vec<StyleNode>,
    events: Vec<RegistryEvent>,
    reject_next: Option<String>,
}

/// Recording registry backed by a shared in-memory node list.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every live node in insertion order.
    #[must_use]
    pub fn nodes(&self) -> Vec<StyleNode> {
        self.state.borrow().nodes.clone()
    }

    /// Live nodes attributed to `identity`.
    #[must_use]
    pub fn nodes_for(&self, identity: &InstanceIdentity) -> Vec<StyleNode> {
        self.state
            .borrow()
            .nodes
            .iter()
            .filter(|node| node.identity == *identity)
            .cloned()
            .collect()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().nodes.len()
    }

    /// True when no nodes are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every insert/remove observed so far.
    #[must_use]
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.state.borrow().events.clone()
    }

    /// Make the next `insert` fail with [`StyleError::Rejected`].
    pub fn reject_next_insert(&self, detail: impl Into<String>) {
        self.state.borrow_mut().reject_next = Some(detail.into());
    }
}

impl StyleRegistry for MemoryRegistry {
    type Handle = NodeHandle;

    fn insert(
        &mut self,
        identity: &InstanceIdentity,
        fragment: &StyleFragment,
    ) -> Result<NodeHandle, StyleError> {
        let mut state = self.state.borrow_mut();
        if let Some(detail) = state.reject_next.take() {
            return Err(StyleError::Rejected { detail });
        }
        state.next_handle += 1;
        let handle = NodeHandle(state.next_handle);
        state.nodes.push(StyleNode {
            handle,
            identity: *identity,
            css: fragment.css().to_string(),
        });
        state.events.push(RegistryEvent::Inserted(handle, *identity));
        Ok(handle)
    }

    fn remove(&mut self, handle: NodeHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(index) = state.nodes.iter().position(|node| node.handle == handle) {
            let node = state.nodes.remove(index);
            state
                .events
                .push(RegistryEvent::Removed(handle, node.identity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels::LabelPair;

    #[test]
    fn clones_share_one_node_list() {
        let registry = MemoryRegistry::new();
        let mut writer = registry.clone();
        let id = InstanceIdentity::allocate();
        let fragment = StyleFragment::synthesize(&id, &LabelPair::new("On", "Off"));

        let handle = writer.insert(&id, &fragment).expect("insert");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.nodes_for(&id)[0].css, fragment.css());

        writer.remove(handle);
        assert!(registry.is_empty());
        assert_eq!(
            registry.events(),
            vec![
                RegistryEvent::Inserted(handle, id),
                RegistryEvent::Removed(handle, id)
            ]
        );
    }

    #[test]
    fn removing_a_detached_handle_is_ignored() {
        let mut registry = MemoryRegistry::new();
        let id = InstanceIdentity::allocate();
        let handle = registry
            .insert(&id, &StyleFragment::synthesize(&id, &LabelPair::default()))
            .expect("insert");
        registry.remove(handle);
        registry.remove(handle);
        assert!(registry.is_empty());
        assert_eq!(registry.events().len(), 2);
    }

    #[test]
    fn rejection_applies_to_a_single_insert() {
        let mut registry = MemoryRegistry::new();
        let id = InstanceIdentity::allocate();
        let fragment = StyleFragment::synthesize(&id, &LabelPair::default());
        registry.reject_next_insert("quota");
        assert_eq!(
            registry.insert(&id, &fragment),
            Err(StyleError::Rejected {
                detail: "quota".into()
            })
        );
        assert!(registry.insert(&id, &fragment).is_ok());
        assert_eq!(registry.len(), 1);
    }
}
