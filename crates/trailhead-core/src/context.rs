//! Launch-entity classification for execution breadcrumbs.
//!
//! An execution is launched either directly by a task or as a workflow via a
//! launch plan. The breadcrumb trail wants the identity a human would
//! recognize: for task launches that is the task itself (the launch plan
//! record *is* the task identifier), for workflow launches it is the
//! underlying workflow from the closure — the launch plan is only an
//! indirection layer over it.
//!
//! 判定は `spec.launchPlan.resourceType` の一点のみ。それ以外の種別は
//! このモジュールの契約外なので、黙ってフォールバックせずエラーにする。

use crate::domain::{Execution, Identifier, ResourceKind};
use crate::error::ContextError;

/// The entity an execution was launched from, resolved to the identifier the
/// breadcrumb should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchEntity<'a> {
    /// Launched directly by a task; identity is the task's own.
    Task(&'a Identifier),

    /// Launched as a workflow; identity is the workflow underlying the
    /// launch plan, taken from the closure.
    Workflow(&'a Identifier),
}

impl<'a> LaunchEntity<'a> {
    pub fn kind(&self) -> ResourceKind {
        match self {
            LaunchEntity::Task(_) => ResourceKind::Task,
            LaunchEntity::Workflow(_) => ResourceKind::Workflow,
        }
    }

    pub fn id(&self) -> &'a Identifier {
        match *self {
            LaunchEntity::Task(id) | LaunchEntity::Workflow(id) => id,
        }
    }

    pub fn name(&self) -> &'a str {
        &self.id().name
    }

    pub fn version(&self) -> &'a str {
        &self.id().version
    }
}

/// Classify an execution's launch entity.
///
/// Task → borrows `spec.launch_plan`; Workflow → borrows
/// `closure.workflow_id`. Every other kind (including `Unspecified`, the
/// decoded form of a missing `resourceType`) is unsupported.
pub fn launch_entity(execution: &Execution) -> Result<LaunchEntity<'_>, ContextError> {
    match execution.spec.launch_plan.resource_type {
        ResourceKind::Task => Ok(LaunchEntity::Task(&execution.spec.launch_plan)),
        ResourceKind::Workflow => Ok(LaunchEntity::Workflow(&execution.closure.workflow_id)),
        other => Err(ContextError::UnsupportedLaunchKind(other)),
    }
}

/// Kind of the launch entity (TASK or WORKFLOW), verbatim from the spec.
pub fn launch_kind(execution: &Execution) -> Result<ResourceKind, ContextError> {
    launch_entity(execution).map(|entity| entity.kind())
}

/// Display name for the breadcrumb: the task's name for task launches, the
/// underlying workflow's name for workflow launches.
pub fn display_name(execution: &Execution) -> Result<&str, ContextError> {
    launch_entity(execution).map(|entity| entity.name())
}

/// Display version, sourced the same way as the name.
pub fn display_version(execution: &Execution) -> Result<&str, ContextError> {
    launch_entity(execution).map(|entity| entity.version())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExecutionClosure, ExecutionPhase, ExecutionSpec, WorkflowExecutionIdentifier};
    use rstest::rstest;

    fn make_execution(
        kind: ResourceKind,
        launch_name: &str,
        launch_version: &str,
        workflow_name: &str,
        workflow_version: &str,
    ) -> Execution {
        Execution {
            id: WorkflowExecutionIdentifier {
                project: "flytesnacks".into(),
                domain: "development".into(),
                name: "run-1".into(),
            },
            spec: ExecutionSpec {
                launch_plan: Identifier::new(kind, launch_name, launch_version),
                metadata: None,
            },
            closure: ExecutionClosure {
                workflow_id: Identifier::new(
                    ResourceKind::Workflow,
                    workflow_name,
                    workflow_version,
                ),
                phase: ExecutionPhase::Succeeded,
                created_at: None,
                updated_at: None,
            },
        }
    }

    fn task_execution() -> Execution {
        make_execution(ResourceKind::Task, "my-task", "task-v1", "my-workflow", "wf-v1")
    }

    fn workflow_execution() -> Execution {
        make_execution(
            ResourceKind::Workflow,
            "my-launch-plan",
            "lp-v1",
            "my-workflow",
            "wf-v1",
        )
    }

    #[test]
    fn task_launch_uses_the_launch_plan_identifier() {
        let exec = task_execution();

        assert_eq!(launch_kind(&exec), Ok(ResourceKind::Task));
        assert_eq!(display_name(&exec), Ok("my-task"));
        assert_eq!(display_version(&exec), Ok("task-v1"));
    }

    #[test]
    fn workflow_launch_uses_the_closure_workflow_id() {
        let exec = workflow_execution();

        assert_eq!(launch_kind(&exec), Ok(ResourceKind::Workflow));
        // not "my-launch-plan" / "lp-v1": the launch plan is indirection
        assert_eq!(display_name(&exec), Ok("my-workflow"));
        assert_eq!(display_version(&exec), Ok("wf-v1"));
    }

    #[test]
    fn entity_borrows_the_right_identifier() {
        let exec = task_execution();
        let entity = launch_entity(&exec).expect("task is supported");
        assert!(std::ptr::eq(entity.id(), &exec.spec.launch_plan));

        let exec = workflow_execution();
        let entity = launch_entity(&exec).expect("workflow is supported");
        assert!(std::ptr::eq(entity.id(), &exec.closure.workflow_id));
    }

    #[rstest]
    #[case::launch_plan(ResourceKind::LaunchPlan)]
    #[case::dataset(ResourceKind::Dataset)]
    #[case::unspecified(ResourceKind::Unspecified)]
    fn other_kinds_are_unsupported(#[case] kind: ResourceKind) {
        let exec = make_execution(kind, "x", "v1", "my-workflow", "wf-v1");
        let err = ContextError::UnsupportedLaunchKind(kind);

        assert_eq!(launch_entity(&exec).unwrap_err(), err);
        assert_eq!(launch_kind(&exec), Err(err.clone()));
        assert_eq!(display_name(&exec), Err(err.clone()));
        assert_eq!(display_version(&exec), Err(err));
    }

    #[test]
    fn accessors_are_idempotent() {
        let exec = workflow_execution();
        assert_eq!(display_name(&exec), display_name(&exec));
        assert_eq!(display_version(&exec), display_version(&exec));
        assert_eq!(launch_kind(&exec), launch_kind(&exec));
    }

    #[test]
    fn unsupported_kind_error_names_the_kind() {
        let err = ContextError::UnsupportedLaunchKind(ResourceKind::LaunchPlan);
        assert_eq!(err.to_string(), "unsupported launch kind: LAUNCH_PLAN");
    }
}
