//! Operational task records.

use crate::labels::Priority;
use crate::resource::{contains_ci, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sgir_types::Regional;

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Concluída")]
    Concluida,
}

impl TaskStatus {
    /// Returns `true` once the task is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Concluida)
    }
}

/// An operational task assigned to an analyst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Directory name of the assignee.
    pub assigned_to: String,
    pub status: TaskStatus,
    pub regional: Regional,
    pub priority: Priority,
    pub description: String,
    pub due_date: NaiveDate,
    pub created_at: NaiveDate,
    /// Set when the task reaches [`TaskStatus::Concluida`].
    #[serde(default)]
    pub completed_at: Option<NaiveDate>,
}

impl Resource for Task {
    fn regional(&self) -> Regional {
        self.regional
    }

    /// Searches title and description.
    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle) || contains_ci(&self.description, needle)
    }
}
