//! Error types for style registration.

use thiserror::Error;

/// Failures raised while inserting a style fragment into a registry.
///
/// These are local to one widget instance; callers log them and keep rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StyleError {
    /// The shared style container (document or its head) is not reachable.
    #[error("style container unavailable: {0}")]
    ContainerUnavailable(&'static str),
    /// The container refused the new style node.
    #[error("style node rejected: {detail}")]
    Rejected {
        /// Host-provided failure description.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::StyleError;

    #[test]
    fn messages_include_context() {
        assert_eq!(
            StyleError::ContainerUnavailable("document head").to_string(),
            "style container unavailable: document head"
        );
        assert_eq!(
            StyleError::Rejected {
                detail: "HierarchyRequestError".into()
            }
            .to_string(),
            "style node rejected: HierarchyRequestError"
        );
    }
}
