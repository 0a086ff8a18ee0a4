//! Render model: a pure projection of the Board State.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never read `BoardState` field by field. They render a
//! [`BoardView`] (or [`DetailView`]) built here, so everything a card shows
//! (due label, overdue flag, subtask count, progress, search visibility) is
//! decided in plain Rust and unit tested without a DOM.
//!
//! TRADE-OFFS
//! ==========
//! The board is re-projected and re-rendered in full on every change. At a
//! few dozen tasks this is cheaper to reason about than keyed diffing.

#[cfg(test)]
#[path = "board_view_test.rs"]
mod board_view_test;

use time::Date;
use time::macros::format_description;

use crate::state::board::{BoardState, ColumnId, Priority, Task, TaskId};

/// Placeholder due label for tasks without a date.
pub const NO_DUE_DATE: &str = "No due date";

/// Placeholder description in the detail view.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// One rendered board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
}

/// One rendered column, cards in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<CardView>,
}

/// One rendered task card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: TaskId,
    pub title: String,
    pub priority: Priority,
    pub due_label: String,
    pub overdue: bool,
    pub completed: usize,
    pub total: usize,
    /// Percentage for the progress bar; `None` hides the bar.
    pub progress: Option<f64>,
    /// Filtered out by the current search query.
    pub hidden: bool,
}

impl CardView {
    /// `completed/total` subtask counter.
    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

/// Rendered detail view of one task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub task_id: TaskId,
    pub title: String,
    pub description: String,
    pub priority_label: String,
    pub due_label: String,
    pub subtasks: Vec<SubtaskView>,
}

/// One checklist row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtaskView {
    pub index: usize,
    pub text: String,
    pub completed: bool,
}

/// Project the whole board in column order.
#[must_use]
pub fn project(board: &BoardState, query: &str, today: Date) -> BoardView {
    let columns = board
        .column_order
        .iter()
        .filter_map(|id| board.column(*id))
        .map(|column| ColumnView {
            id: column.id,
            title: column.title.clone(),
            cards: board
                .tasks_in(column.id)
                .map(|task| project_card(task, query, today))
                .collect(),
        })
        .collect();
    BoardView { columns }
}

/// Project one task card.
#[must_use]
pub fn project_card(task: &Task, query: &str, today: Date) -> CardView {
    let due = parse_due(&task.due_date);
    let (completed, total) = task.subtask_counts();
    CardView {
        id: task.id.clone(),
        title: task.title.clone(),
        priority: task.priority,
        due_label: due_label(&task.due_date),
        overdue: is_overdue(due, task.column, today),
        completed,
        total,
        progress: progress_percent(completed, total),
        hidden: !matches_query(&task.title, query),
    }
}

/// Project the detail view of `task_id`, if it still exists.
#[must_use]
pub fn project_detail(board: &BoardState, task_id: &TaskId) -> Option<DetailView> {
    let task = board.task(task_id)?;
    let description = if task.desc.is_empty() {
        NO_DESCRIPTION.to_owned()
    } else {
        task.desc.clone()
    };
    let due = if task.due_date.is_empty() {
        "N/A".to_owned()
    } else {
        due_label(&task.due_date)
    };
    Some(DetailView {
        task_id: task.id.clone(),
        title: task.title.clone(),
        description,
        priority_label: format!("Priority: {}", task.priority.label()),
        due_label: format!("Due: {due}"),
        subtasks: task
            .subtasks
            .iter()
            .enumerate()
            .map(|(index, subtask)| SubtaskView {
                index,
                text: subtask.text.clone(),
                completed: subtask.completed,
            })
            .collect(),
    })
}

/// Case-insensitive title substring match. An empty query matches all.
#[must_use]
pub fn matches_query(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// `completed / total * 100`, or `None` when there are no subtasks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(completed: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(completed as f64 / total as f64 * 100.0)
}

/// Overdue means dated before today and not yet done.
#[must_use]
pub fn is_overdue(due: Option<Date>, column: ColumnId, today: Date) -> bool {
    column != ColumnId::Done && due.is_some_and(|date| date < today)
}

/// Parse a stored `YYYY-MM-DD` due date.
#[must_use]
pub fn parse_due(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Display label for a stored due date. Unparseable values are shown as-is.
#[must_use]
pub fn due_label(raw: &str) -> String {
    match parse_due(raw) {
        Some(date) => date
            .format(format_description!("[month repr:short] [day padding:none], [year]"))
            .unwrap_or_else(|_| date.to_string()),
        None if raw.trim().is_empty() => NO_DUE_DATE.to_owned(),
        None => raw.trim().to_owned(),
    }
}
