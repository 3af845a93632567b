//! Registration lifecycle for one toggle instance's label stylesheet.
//!
//! # Design
//! - A manager owns one identity and one registry slot; at most one node is live for it.
//! - Label changes retract the live node before inserting its replacement.
//! - Unmount is terminal: later mounts or label changes are ignored, and a second
//!   unmount finds nothing to retract.
//! - Insert failures are reported to the caller but leave the manager consistent; the
//!   next sync tries again, with or without new labels.
//! - Whether a label change is a no-op is decided against the registered labels, never
//!   against what the caller believes was there before.

use crate::core::css::{StyleFragment, scope_class};
use crate::core::error::StyleError;
use crate::core::identity::InstanceIdentity;
use crate::core::labels::LabelPair;
use crate::core::registry::StyleRegistry;

/// Mount/update/unmount callbacks driven by the host component lifecycle.
pub trait StyleLifecycle {
    /// First render with labels available.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] when the fragment could not be inserted.
    fn on_mount(&mut self, labels: &LabelPair) -> Result<(), StyleError>;

    /// Labels changed while the identity stayed the same.
    ///
    /// `previous` is what the host last rendered; implementations decide against the
    /// labels they actually registered, so a stale `previous` cannot drop an update.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] when the replacement fragment could not be inserted.
    fn on_labels_changed(&mut self, previous: &LabelPair, next: &LabelPair)
    -> Result<(), StyleError>;

    /// Instance removed; nothing attributable to it may stay registered.
    fn on_unmount(&mut self);
}

enum Phase<H> {
    Unmounted,
    Mounted {
        labels: LabelPair,
        handle: Option<H>,
    },
    Retired,
}

/// Owns the style registration of one toggle instance.
pub struct ScopedStyleManager<R: StyleRegistry> {
    identity: InstanceIdentity,
    registry: R,
    phase: Phase<R::Handle>,
}

impl<R: StyleRegistry> ScopedStyleManager<R> {
    /// Manager for `identity`, writing into `registry`. Nothing is inserted until mount.
    #[must_use]
    pub fn new(identity: InstanceIdentity, registry: R) -> Self {
        Self {
            identity,
            registry,
            phase: Phase::Unmounted,
        }
    }

    /// Identity this manager scopes its rules to.
    #[must_use]
    pub const fn identity(&self) -> InstanceIdentity {
        self.identity
    }

    /// Class to put on the instance's root element.
    #[must_use]
    pub fn scope_class(&self) -> String {
        scope_class(&self.identity)
    }

    /// Labels currently applied, if mounted.
    #[must_use]
    pub const fn labels(&self) -> Option<&LabelPair> {
        match &self.phase {
            Phase::Mounted { labels, .. } => Some(labels),
            Phase::Unmounted | Phase::Retired => None,
        }
    }

    /// True while a node is live in the registry for this instance.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        matches!(
            self.phase,
            Phase::Mounted {
                handle: Some(_),
                ..
            }
        )
    }

    /// True once the instance has been unmounted.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        matches!(self.phase, Phase::Retired)
    }

    /// Dispatch to mount or label-change depending on the current phase.
    ///
    /// Unchanged labels are a no-op once a fragment is live; a mounted instance whose
    /// last insert failed retries. Anything after unmount is ignored.
    ///
    /// # Errors
    ///
    /// Propagates insert failures from the underlying callback.
    pub fn sync(&mut self, labels: &LabelPair) -> Result<(), StyleError> {
        match &self.phase {
            Phase::Unmounted => self.on_mount(labels),
            Phase::Mounted {
                labels: current,
                handle,
            } if current != labels || handle.is_none() => {
                let previous = current.clone();
                self.on_labels_changed(&previous, labels)
            }
            Phase::Mounted { .. } | Phase::Retired => Ok(()),
        }
    }

    fn retract(&mut self) {
        if let Phase::Mounted { handle, .. } = &mut self.phase {
            if let Some(handle) = handle.take() {
                self.registry.remove(handle);
            }
        }
    }

    fn install(&mut self, labels: &LabelPair) -> Result<(), StyleError> {
        let fragment = StyleFragment::synthesize(&self.identity, labels);
        let (handle, outcome) = match self.registry.insert(&self.identity, &fragment) {
            Ok(handle) => (Some(handle), Ok(())),
            Err(err) => (None, Err(err)),
        };
        self.phase = Phase::Mounted {
            labels: labels.clone(),
            handle,
        };
        outcome
    }
}

impl<R: StyleRegistry> StyleLifecycle for ScopedStyleManager<R> {
    fn on_mount(&mut self, labels: &LabelPair) -> Result<(), StyleError> {
        match &self.phase {
            Phase::Unmounted => self.install(labels),
            Phase::Mounted {
                labels: current, ..
            } => {
                let previous = current.clone();
                self.on_labels_changed(&previous, labels)
            }
            Phase::Retired => Ok(()),
        }
    }

    fn on_labels_changed(
        &mut self,
        _previous: &LabelPair,
        next: &LabelPair,
    ) -> Result<(), StyleError> {
        match &self.phase {
            Phase::Retired => Ok(()),
            Phase::Unmounted => self.install(next),
            Phase::Mounted { labels, handle } => {
                if labels == next && handle.is_some() {
                    return Ok(());
                }
                self.retract();
                self.install(next)
            }
        }
    }

    fn on_unmount(&mut self) {
        self.retract();
        self.phase = Phase::Retired;
    }
}

impl<R: StyleRegistry> Drop for ScopedStyleManager<R> {
    fn drop(&mut self) {
        self.on_unmount();
    }
}
