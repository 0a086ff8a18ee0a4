//! DOM-free description of a user event.
//!
//! Markup tags interactive elements with `data-*` attributes. The browser
//! glue walks up from the event target, reads the nearest of each attribute,
//! and hands a [`DomEvent`] to the controller. Tests build the same values
//! directly.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::state::board::{ColumnId, TaskId};

pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_TASK_ID: &str = "data-task-id";
pub const ATTR_COLUMN_ID: &str = "data-column-id";
pub const ATTR_INDEX: &str = "data-index";

/// Event types bound on the app root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DragStart,
    DragOver,
    DragLeave,
    Drop,
    DragEnd,
    Submit,
    Change,
    Input,
    KeyDown,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::Click,
        EventKind::DragStart,
        EventKind::DragOver,
        EventKind::DragLeave,
        EventKind::Drop,
        EventKind::DragEnd,
        EventKind::Submit,
        EventKind::Change,
        EventKind::Input,
        EventKind::KeyDown,
    ];

    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DragStart => "dragstart",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
            Self::DragEnd => "dragend",
            Self::Submit => "submit",
            Self::Change => "change",
            Self::Input => "input",
            Self::KeyDown => "keydown",
        }
    }
}

/// Values of `data-action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// "+ Add Task" button of a column.
    AddTask,
    /// Card delete button.
    DeleteTask,
    /// Task card body.
    OpenTask,
    /// Cancel/close buttons of modals.
    CloseModal,
    /// Task creation form.
    CreateTask,
    /// Add-subtask form of the detail view.
    AddSubtask,
    /// Checklist checkbox.
    ToggleSubtask,
    /// Search box.
    Search,
    /// Theme toggle button.
    ToggleTheme,
}

impl ActionKind {
    const ALL: [ActionKind; 9] = [
        ActionKind::AddTask,
        ActionKind::DeleteTask,
        ActionKind::OpenTask,
        ActionKind::CloseModal,
        ActionKind::CreateTask,
        ActionKind::AddSubtask,
        ActionKind::ToggleSubtask,
        ActionKind::Search,
        ActionKind::ToggleTheme,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddTask => "add-task",
            Self::DeleteTask => "delete-task",
            Self::OpenTask => "open-task",
            Self::CloseModal => "close-modal",
            Self::CreateTask => "create-task",
            Self::AddSubtask => "add-subtask",
            Self::ToggleSubtask => "toggle-subtask",
            Self::Search => "search",
            Self::ToggleTheme => "toggle-theme",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// Nearest tagged ancestors of the event target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Target {
    pub action: Option<ActionKind>,
    pub task_id: Option<TaskId>,
    pub column: Option<ColumnId>,
    pub index: Option<usize>,
}

impl Target {
    /// Build a target from raw attribute values, dropping unparseable ones.
    #[must_use]
    pub fn from_attributes(
        action: Option<&str>,
        task_id: Option<&str>,
        column: Option<&str>,
        index: Option<&str>,
    ) -> Self {
        Self {
            action: action.and_then(|v| v.parse().ok()),
            task_id: task_id.filter(|v| !v.is_empty()).map(TaskId::from),
            column: column.and_then(|v| v.parse().ok()),
            index: index.and_then(|v| v.parse().ok()),
        }
    }

    #[must_use]
    pub fn action(action: ActionKind) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_task(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: ColumnId) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// One event as seen by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: Target,
    /// Value of the target `<input>` for `input`/`change` events.
    pub value: Option<String>,
    /// Checked state of a checkbox target.
    pub checked: Option<bool>,
    /// Named fields of a submitted form.
    pub fields: BTreeMap<String, String>,
    /// `KeyboardEvent.key` for `keydown`.
    pub key: Option<String>,
}

impl DomEvent {
    #[must_use]
    pub fn new(kind: EventKind, target: Target) -> Self {
        Self {
            kind,
            target,
            value: None,
            checked: None,
            fields: BTreeMap::new(),
            key: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Submitted field `name`, or empty.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}
