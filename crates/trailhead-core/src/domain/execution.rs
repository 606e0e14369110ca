//! Execution record: one run of a task or workflow.
//!
//! These mirror the admin-service JSON shape (camelCase fields) and are
//! read-only inputs to this crate: fetched and populated upstream, never
//! mutated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{Identifier, WorkflowExecutionIdentifier};

/// One run of a task or workflow: the launch specification plus the runtime
/// closure the admin service accumulated for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: WorkflowExecutionIdentifier,
    pub spec: ExecutionSpec,
    pub closure: ExecutionClosure,
}

/// What was asked to run, and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSpec {
    /// The entity that launched the execution. Despite the field name this
    /// may be a task, a workflow (via a launch plan), or another kind — its
    /// `resource_type` says which.
    pub launch_plan: Identifier,

    /// Open-ended spec metadata (principal, nesting, references). Kept
    /// flexible as JSON; nothing in this crate reads into it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// What happened at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionClosure {
    /// The workflow underlying this execution, regardless of how it was
    /// launched. For workflow launches this is the canonical identity.
    pub workflow_id: Identifier,

    #[serde(default)]
    pub phase: ExecutionPhase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Runtime phase of an execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionPhase {
    #[default]
    Undefined,
    Queued,
    Running,
    Succeeding,
    Succeeded,
    Failing,
    Failed,
    Aborted,
    Aborting,
    TimedOut,
}

impl ExecutionPhase {
    /// Terminal phases will not change again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionPhase::Succeeded
                | ExecutionPhase::Failed
                | ExecutionPhase::Aborted
                | ExecutionPhase::TimedOut
        )
    }
}
