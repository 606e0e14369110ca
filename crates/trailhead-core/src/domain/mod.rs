//! Domain model (kinds, identifiers, execution records).

pub mod execution;
pub mod ids;
pub mod kind;

pub use execution::{Execution, ExecutionClosure, ExecutionPhase, ExecutionSpec};
pub use ids::{Identifier, WorkflowExecutionIdentifier};
pub use kind::ResourceKind;
