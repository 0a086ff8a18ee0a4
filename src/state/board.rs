//! Board State: tasks, columns, and column order.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single source of truth for the board. The Interaction Layer
//! mutates it only through the named operations below, then persists it and
//! lets the views re-project it. Nothing here touches the DOM or storage.
//!
//! DESIGN
//! ======
//! Tasks are owned by `tasks`; columns only reference them by id. Every
//! operation either applies completely or returns an error and leaves the
//! state untouched, so a render never observes a half-applied change.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to tasks created with a blank title.
pub const UNTITLED_TASK: &str = "Untitled Task";

/// Errors returned by board mutations and by persisted-state validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The column id is not part of this board.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// No task with this id exists.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// The subtask index is past the end of the task's checklist.
    #[error("subtask index {index} out of range for task {task_id}")]
    SubtaskOutOfRange { task_id: String, index: usize },

    /// Subtask text was empty or whitespace only.
    #[error("subtask text is empty")]
    EmptySubtask,

    /// A persisted blob could not be decoded or breaks a board invariant.
    #[error("corrupt board state: {0}")]
    Corrupt(String),
}

/// Identifier of one of the three fixed board columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl ColumnId {
    /// All columns in default display order.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Wire and `data-column-id` representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Heading shown above the column.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_owned()))
    }
}

/// Unique task identifier, `task-<uuid>` for tasks created here.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id from a random v4 UUID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("task-{}", Uuid::new_v4().simple()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalized label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// One checklist line of a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub text: String,
    pub completed: bool,
}

/// A unit of work on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Column whose `task_ids` lists this task.
    pub column: ColumnId,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub priority: Priority,
    /// `YYYY-MM-DD`, or empty when the task has no due date.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Number of completed subtasks and total subtasks.
    #[must_use]
    pub fn subtask_counts(&self) -> (usize, usize) {
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        (completed, self.subtasks.len())
    }
}

/// A named bucket holding an ordered list of task ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            task_ids: Vec::new(),
        }
    }
}

/// User-supplied fields of the task creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    pub due_date: String,
}

/// The complete board: tasks, columns, and the order columns are shown in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: BTreeMap<TaskId, Task>,
    pub columns: BTreeMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            columns: ColumnId::ALL
                .into_iter()
                .map(|id| (id, Column::empty(id)))
                .collect(),
            column_order: ColumnId::ALL.to_vec(),
        }
    }
}

impl BoardState {
    // --- Queries ---

    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// Tasks of `column` in display order.
    pub fn tasks_in(&self, column: ColumnId) -> impl Iterator<Item = &Task> {
        self.columns
            .get(&column)
            .into_iter()
            .flat_map(|c| c.task_ids.iter())
            .filter_map(|id| self.tasks.get(id))
    }

    // --- Mutations ---

    /// Create a task at the end of `column` and return its id.
    ///
    /// Title and description are trimmed; a blank title becomes
    /// [`UNTITLED_TASK`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] if `column` is not on this board;
    /// the state is left unchanged.
    pub fn create_task(&mut self, column: ColumnId, fields: TaskFields) -> Result<TaskId, BoardError> {
        let mut id = TaskId::generate();
        while self.tasks.contains_key(&id) {
            id = TaskId::generate();
        }
        self.insert_task(id, column, fields)
    }

    /// Create a task with a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownColumn`] for a missing column and
    /// [`BoardError::Corrupt`] if `id` is already taken.
    pub fn insert_task(&mut self, id: TaskId, column: ColumnId, fields: TaskFields) -> Result<TaskId, BoardError> {
        if self.tasks.contains_key(&id) {
            return Err(BoardError::Corrupt(format!("duplicate task id {id}")));
        }
        let Some(target) = self.columns.get_mut(&column) else {
            return Err(BoardError::UnknownColumn(column.to_string()));
        };

        let title = fields.title.trim();
        let task = Task {
            id: id.clone(),
            column,
            title: if title.is_empty() { UNTITLED_TASK.to_owned() } else { title.to_owned() },
            desc: fields.desc.trim().to_owned(),
            priority: fields.priority,
            due_date: fields.due_date.trim().to_owned(),
            subtasks: Vec::new(),
        };
        target.task_ids.push(id.clone());
        self.tasks.insert(id.clone(), task);
        Ok(id)
    }

    /// Remove a task from the task map and from its column.
    ///
    /// Returns the removed task, or `None` if the id was already absent.
    pub fn delete_task(&mut self, id: &TaskId) -> Option<Task> {
        let task = self.tasks.remove(id)?;
        if let Some(column) = self.columns.get_mut(&task.column) {
            column.task_ids.retain(|other| other != id);
        }
        Some(task)
    }

    /// Move a task to the end of `to`.
    ///
    /// Returns `Ok(false)` without touching anything when the task already
    /// lives in `to`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] or [`BoardError::UnknownColumn`]
    /// when either side of the move does not exist.
    pub fn move_task(&mut self, id: &TaskId, to: ColumnId) -> Result<bool, BoardError> {
        let Some(from) = self.tasks.get(id).map(|task| task.column) else {
            return Err(BoardError::UnknownTask(id.to_string()));
        };
        if !self.columns.contains_key(&to) {
            return Err(BoardError::UnknownColumn(to.to_string()));
        }
        if from == to {
            return Ok(false);
        }

        if let Some(source) = self.columns.get_mut(&from) {
            source.task_ids.retain(|other| other != id);
        }
        if let Some(destination) = self.columns.get_mut(&to) {
            destination.task_ids.push(id.clone());
        }
        if let Some(task) = self.tasks.get_mut(id) {
            task.column = to;
        }
        Ok(true)
    }

    /// Flip the completed flag of one subtask and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] or
    /// [`BoardError::SubtaskOutOfRange`].
    pub fn toggle_subtask(&mut self, id: &TaskId, index: usize) -> Result<bool, BoardError> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownTask(id.to_string()))?;
        let subtask = task
            .subtasks
            .get_mut(index)
            .ok_or_else(|| BoardError::SubtaskOutOfRange { task_id: id.to_string(), index })?;
        subtask.completed = !subtask.completed;
        Ok(subtask.completed)
    }

    /// Append an open subtask and return the new checklist length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySubtask`] for blank text and
    /// [`BoardError::UnknownTask`] for a missing task.
    pub fn add_subtask(&mut self, id: &TaskId, text: &str) -> Result<usize, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::EmptySubtask);
        }
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownTask(id.to_string()))?;
        task.subtasks.push(Subtask {
            text: text.to_owned(),
            completed: false,
        });
        Ok(task.subtasks.len())
    }

    // --- Persistence shape ---

    /// Decode a persisted blob, falling back to the default board when it is
    /// missing, unreadable, or inconsistent.
    #[must_use]
    pub fn load_or_default(persisted: Option<&str>) -> Self {
        let Some(raw) = persisted else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(board) => board,
            Err(err) => {
                log::warn!("discarding persisted board: {err}");
                Self::default()
            }
        }
    }

    /// Decode and validate a persisted blob.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Corrupt`] when the JSON does not parse or the
    /// decoded board fails [`BoardState::validate`].
    pub fn from_json(raw: &str) -> Result<Self, BoardError> {
        let board: Self = serde_json::from_str(raw).map_err(|e| BoardError::Corrupt(e.to_string()))?;
        board.validate()?;
        Ok(board)
    }

    /// Encode for persistence.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` encoding failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Check the board invariants.
    ///
    /// Column order must list every column exactly once, each listed task
    /// must exist and point back at its column, and each task must appear in
    /// exactly one column list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Corrupt`] describing the first violation found.
    pub fn validate(&self) -> Result<(), BoardError> {
        let corrupt = |msg: String| -> Result<(), BoardError> { Err(BoardError::Corrupt(msg)) };

        let mut order = self.column_order.clone();
        order.sort();
        let mut keys: Vec<ColumnId> = self.columns.keys().copied().collect();
        keys.sort();
        if order != keys || keys != ColumnId::ALL.to_vec() {
            return corrupt("column order does not match columns".to_owned());
        }

        let mut seen = HashSet::new();
        for (column_id, column) in &self.columns {
            if column.id != *column_id {
                return corrupt(format!("column {column_id} carries id {}", column.id));
            }
            for task_id in &column.task_ids {
                let Some(task) = self.tasks.get(task_id) else {
                    return corrupt(format!("column {column_id} lists missing task {task_id}"));
                };
                if task.column != *column_id {
                    return corrupt(format!("task {task_id} listed in {column_id} but belongs to {}", task.column));
                }
                if !seen.insert(task_id) {
                    return corrupt(format!("task {task_id} listed more than once"));
                }
            }
        }

        for (task_id, task) in &self.tasks {
            if task.id != *task_id {
                return corrupt(format!("task {task_id} carries id {}", task.id));
            }
            if !seen.contains(task_id) {
                return corrupt(format!("task {task_id} is not listed in any column"));
            }
        }
        Ok(())
    }
}
