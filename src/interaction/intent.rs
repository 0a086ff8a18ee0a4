//! Event-to-intent resolution.
//!
//! Pure mapping from a [`DomEvent`] to what the user meant. Events that do
//! not correspond to any action (a click on a card title inside the detail
//! view, a drag over the toolbar) resolve to `None`.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use crate::interaction::event::{ActionKind, DomEvent, EventKind};
use crate::state::board::{ColumnId, Priority, TaskFields, TaskId};

/// Form field names of the creation and subtask forms.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESC: &str = "desc";
pub const FIELD_PRIORITY: &str = "priority";
pub const FIELD_DUE_DATE: &str = "dueDate";
pub const FIELD_SUBTASK: &str = "subtask";

/// A user intent, ready to apply to state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    OpenCreate(ColumnId),
    DeleteTask(TaskId),
    OpenDetail(TaskId),
    CloseModal,
    DragStart { task_id: TaskId, from: Option<ColumnId> },
    DragOver(ColumnId),
    DragLeave(ColumnId),
    /// Drop inside a column, or `None` when released outside any column.
    Drop(Option<ColumnId>),
    DragEnd,
    CreateTask { column: ColumnId, fields: TaskFields },
    AddSubtask { task_id: TaskId, text: String },
    ToggleSubtask { task_id: TaskId, index: usize },
    Search(String),
    ToggleTheme,
}

/// Resolve an event to an intent.
#[must_use]
pub fn resolve(event: &DomEvent) -> Option<Intent> {
    let target = &event.target;
    match event.kind {
        EventKind::Click => match target.action? {
            ActionKind::AddTask => target.column.map(Intent::OpenCreate),
            ActionKind::DeleteTask => target.task_id.clone().map(Intent::DeleteTask),
            ActionKind::OpenTask => target.task_id.clone().map(Intent::OpenDetail),
            ActionKind::CloseModal => Some(Intent::CloseModal),
            ActionKind::ToggleTheme => Some(Intent::ToggleTheme),
            _ => None,
        },
        EventKind::DragStart => target.task_id.clone().map(|task_id| Intent::DragStart {
            task_id,
            from: target.column,
        }),
        EventKind::DragOver => target.column.map(Intent::DragOver),
        EventKind::DragLeave => target.column.map(Intent::DragLeave),
        EventKind::Drop => Some(Intent::Drop(target.column)),
        EventKind::DragEnd => Some(Intent::DragEnd),
        EventKind::Submit => match target.action? {
            ActionKind::CreateTask => target.column.map(|column| Intent::CreateTask {
                column,
                fields: task_fields(event),
            }),
            ActionKind::AddSubtask => target.task_id.clone().map(|task_id| Intent::AddSubtask {
                task_id,
                text: event.field(FIELD_SUBTASK).to_owned(),
            }),
            _ => None,
        },
        EventKind::Change => match target.action? {
            ActionKind::ToggleSubtask => Some(Intent::ToggleSubtask {
                task_id: target.task_id.clone()?,
                index: target.index?,
            }),
            _ => None,
        },
        EventKind::Input => match target.action? {
            ActionKind::Search => Some(Intent::Search(event.value.clone().unwrap_or_default())),
            _ => None,
        },
        EventKind::KeyDown => (event.key.as_deref() == Some("Escape")).then_some(Intent::CloseModal),
    }
}

fn task_fields(event: &DomEvent) -> TaskFields {
    TaskFields {
        title: event.field(FIELD_TITLE).to_owned(),
        desc: event.field(FIELD_DESC).to_owned(),
        priority: event.field(FIELD_PRIORITY).parse::<Priority>().unwrap_or_default(),
        due_date: event.field(FIELD_DUE_DATE).to_owned(),
    }
}
