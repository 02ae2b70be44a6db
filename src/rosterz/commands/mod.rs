//! # Command Layer
//!
//! The core business logic, one intent per submodule. Each command is a
//! `run` function over the pieces of screen state it needs: it validates,
//! mutates the roster, and forwards the resulting [`Delta`] to the
//! expanded-row tracker and the undo buffer. The delta an operation emits
//! is the only way dependent state learns of the change, so a command
//! must forward it before returning.
//!
//! Commands return structured [`CmdResult`] values and never print,
//! prompt, or touch a terminal; the client layer decides how to render
//! messages, route field errors, and surface the undo affordance.
//!
//! This is where the lion's share of testing lives: each submodule
//! exercises its own logic branches against directly constructed state.
//!
//! - [`add`]: validate and append a record
//! - [`edit`]: replace a record in place
//! - [`delete`]: remove a record, arming the undo buffer
//! - [`undo`]: restore the last deletion
//! - [`toggle`]: show or hide a row's action panel
//! - [`reset`]: whole-list replacement with nothing

use serde::Serialize;

use crate::model::Record;
use crate::roster::Delta;

pub mod add;
pub mod delete;
pub mod edit;
pub mod reset;
pub mod toggle;
pub mod undo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A renderable notification with a severity level.
#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record paired with its current position and expansion state, as a
/// renderer needs it.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    pub record: Record,
    pub index: usize,
    pub expanded: bool,
}

/// Structured outcome of a successful intent.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Structural change the operation produced, if any.
    pub delta: Option<Delta>,
    /// Records the operation touched, with their post-operation indices.
    pub affected: Vec<DisplayRecord>,
    /// Notifications to render, in order.
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_delta(mut self, delta: Delta) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn with_affected(mut self, affected: Vec<DisplayRecord>) -> Self {
        self.affected = affected;
        self
    }
}
