//! Per-user session context.
//!
//! Tracks which project a user is viewing, whether they are in the "new
//! design" form or replaying history, and the record currently on screen.
//! Each session owns its own context; nothing here is shared between users.

use serde::Serialize;

use crate::design::DesignRecord;
use crate::types::DbId;

/// What the session is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// The design form, optionally with a freshly generated record.
    #[default]
    New,
    /// A stored project replayed from history.
    History,
}

/// State scoped to one user session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionContext {
    pub mode: SessionMode,
    pub active_project_id: Option<DbId>,
    pub record: Option<DesignRecord>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the design form, dropping whatever was displayed.
    pub fn start_new(&mut self) {
        self.mode = SessionMode::New;
        self.active_project_id = None;
        self.record = None;
    }

    /// Switch to history mode for `project_id`. The record is cleared so the
    /// next view reconstructs it.
    pub fn load_project(&mut self, project_id: DbId) {
        self.mode = SessionMode::History;
        self.active_project_id = Some(project_id);
        self.record = None;
    }

    /// The project whose history still has to be reconstructed, if any.
    pub fn needs_history(&self) -> Option<DbId> {
        match (self.mode, self.record.as_ref()) {
            (SessionMode::History, None) => self.active_project_id,
            _ => None,
        }
    }

    /// Display a record. A freshly generated design also becomes the active
    /// project, so switching to history later replays the same project.
    pub fn show_record(&mut self, project_id: DbId, record: DesignRecord) {
        self.active_project_id = Some(project_id);
        self.record = Some(record);
    }
}
