//! Domain identifiers (versioned entities and executions).
//!
//! Identifiers here are caller-supplied records coming off the admin API, not
//! generated IDs: an entity is addressed by project/domain scoping plus a
//! name and a version string.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::ResourceKind;

/// Identifier of a versioned entity (task, workflow, launch plan, ...).
///
/// The admin service omits fields it considers implied (e.g. `resourceType`
/// on a closure's workflowId), so everything except name/version defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(default)]
    pub resource_type: ResourceKind,

    #[serde(default)]
    pub project: String,

    #[serde(default)]
    pub domain: String,

    pub name: String,
    pub version: String,
}

impl Identifier {
    pub fn new(
        resource_type: ResourceKind,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            resource_type,
            project: String::new(),
            domain: String::new(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Scope the identifier to a project/domain pair.
    pub fn scoped(mut self, project: impl Into<String>, domain: impl Into<String>) -> Self {
        self.project = project.into();
        self.domain = domain.into();
        self
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.project, self.domain, self.name, self.version
        )
    }
}

/// Identifier of one execution (an execution has no version of its own).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionIdentifier {
    #[serde(default)]
    pub project: String,

    #[serde(default)]
    pub domain: String,

    pub name: String,
}

impl fmt::Display for WorkflowExecutionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.domain, self.name)
    }
}
