//! ResourceKind - エンティティ分類
//!
//! Admin サービス上のエンティティ種別です。ワイヤ表現は
//! SCREAMING_SNAKE_CASE の文字列（例: `"LAUNCH_PLAN"`）。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an admin entity.
///
/// The admin service may omit the field entirely, in which case we decode to
/// `Unspecified` rather than failing the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    #[default]
    Unspecified,
    Task,
    Workflow,
    LaunchPlan,
    Dataset,
}

impl ResourceKind {
    /// Wire-format name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Unspecified => "UNSPECIFIED",
            ResourceKind::Task => "TASK",
            ResourceKind::Workflow => "WORKFLOW",
            ResourceKind::LaunchPlan => "LAUNCH_PLAN",
            ResourceKind::Dataset => "DATASET",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
