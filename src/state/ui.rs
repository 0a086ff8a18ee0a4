//! Transient view state: theme, search query, open modal, and drag gesture.
//!
//! SYSTEM CONTEXT
//! ==============
//! None of this is part of the Board State blob. Only the theme is persisted,
//! under its own key. The drag fields drive visual feedback only and always
//! return to idle when a gesture ends, whether or not the drop landed.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

use crate::state::board::{ColumnId, TaskId};

/// Colour scheme, persisted as `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored flag. Anything other than `"dark"` reads as light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle button: the mode a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{1F319}",
            Self::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Drag gesture state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { task_id: TaskId, from: ColumnId },
}

/// Which modal, if any, is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    /// Task creation form scoped to one column.
    CreateTask { column: ColumnId },
    /// Detail view with the task's checklist.
    TaskDetail { task_id: TaskId },
}

impl Modal {
    #[must_use]
    pub fn create_column(&self) -> Option<ColumnId> {
        match self {
            Self::CreateTask { column } => Some(*column),
            _ => None,
        }
    }

    #[must_use]
    pub fn detail_task(&self) -> Option<&TaskId> {
        match self {
            Self::TaskDetail { task_id } => Some(task_id),
            _ => None,
        }
    }
}

/// View-local state shared with components through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Live title filter. Empty shows every card.
    pub search: String,
    pub modal: Modal,
    pub drag: DragState,
    /// Column currently highlighted as the drop destination.
    pub drop_target: Option<ColumnId>,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    /// Task currently being dragged.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&TaskId> {
        match &self.drag {
            DragState::Dragging { task_id, .. } => Some(task_id),
            DragState::Idle => None,
        }
    }

    pub fn begin_drag(&mut self, task_id: TaskId, from: ColumnId) {
        self.drag = DragState::Dragging { task_id, from };
        self.drop_target = None;
    }

    /// Highlight `column`. Returns whether anything changed.
    pub fn mark_drop_target(&mut self, column: ColumnId) -> bool {
        if self.drop_target == Some(column) {
            return false;
        }
        self.drop_target = Some(column);
        true
    }

    /// Clear the highlight if it is on `column`. Returns whether anything changed.
    pub fn clear_drop_target(&mut self, column: ColumnId) -> bool {
        if self.drop_target != Some(column) {
            return false;
        }
        self.drop_target = None;
        true
    }

    /// Return to idle and hand back the gesture that was in flight, if any.
    pub fn finish_drag(&mut self) -> Option<(TaskId, ColumnId)> {
        self.drop_target = None;
        match std::mem::take(&mut self.drag) {
            DragState::Dragging { task_id, from } => Some((task_id, from)),
            DragState::Idle => None,
        }
    }

    /// Close any open modal. Returns whether one was open.
    pub fn close_modal(&mut self) -> bool {
        if self.modal == Modal::Closed {
            return false;
        }
        self.modal = Modal::Closed;
        true
    }
}
