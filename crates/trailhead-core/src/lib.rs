//! trailhead-core
//!
//! Execution breadcrumb context for the orchestration console.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（kind, ids, execution）— admin API の JSON 形
//! - **context**: 起動エンティティの分類と表示名/バージョンの解決
//! - **error**: エラー型
//!
//! The console shows a breadcrumb trail for where an execution came from.
//! This crate answers the one question that trail needs: was this execution
//! launched by a task or as a workflow, and which name/version should the
//! trail display for it. Everything is a pure, synchronous read over an
//! [`domain::Execution`] record fetched upstream.

pub mod context;
pub mod domain;
pub mod error;

pub use context::{LaunchEntity, display_name, display_version, launch_entity, launch_kind};
pub use domain::{Execution, ExecutionClosure, ExecutionPhase, ExecutionSpec, Identifier,
    ResourceKind, WorkflowExecutionIdentifier};
pub use error::ContextError;
