use thiserror::Error;

use crate::domain::ResourceKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The launch entity is neither a task nor a workflow. `Unspecified`
    /// lands here too, which is how a record missing `resourceType`
    /// surfaces instead of panicking.
    #[error("unsupported launch kind: {0}")]
    UnsupportedLaunchKind(ResourceKind),
}
