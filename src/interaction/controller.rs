//! Interaction controller: applies intents to state and persists the result.
//!
//! ARCHITECTURE
//! ============
//! `DomEvent -> resolve -> Intent -> Interaction::apply -> Response`.
//! The controller owns the storage and confirmation capabilities but not the
//! state; the host passes `&mut BoardState` and `&mut UiState` in for the
//! duration of one event. The returned [`Response`] tells the host what to
//! do next (cancel the browser default, reset a form, re-render).
//!
//! Every mutation goes through a `BoardState` operation. A rejected
//! operation is logged and leaves both state and storage untouched.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::BoardConfig;
use crate::interaction::event::{DomEvent, EventKind};
use crate::interaction::intent::{Intent, resolve};
use crate::state::board::{BoardState, ColumnId, TaskFields, TaskId};
use crate::state::ui::{Modal, UiState};
use crate::util::persistence;
use crate::util::storage::KeyValueStore;

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// Call `preventDefault()` on the DOM event.
    pub prevent_default: bool,
    /// Board State changed; re-render the board.
    pub board_changed: bool,
    /// UI state changed; re-render dependent views.
    pub ui_changed: bool,
    /// Reset the submitted form.
    pub reset_form: bool,
    /// Undo the browser's own change to the target input (a checkbox the
    /// model refused to toggle).
    pub revert_input: bool,
}

/// Applies user intents to board and UI state.
pub struct Interaction {
    storage: Box<dyn KeyValueStore>,
    confirm: Box<dyn Confirm>,
    config: BoardConfig,
}

impl Interaction {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>, confirm: Box<dyn Confirm>, config: BoardConfig) -> Self {
        Self { storage, confirm, config }
    }

    /// Load persisted board and theme for startup.
    #[must_use]
    pub fn load(&self) -> (BoardState, UiState) {
        let board = persistence::load_board(self.storage.as_ref(), &self.config.board_key);
        let theme = persistence::load_theme(self.storage.as_ref(), &self.config.theme_key);
        (board, UiState::with_theme(theme))
    }

    /// Handle one DOM event.
    pub fn handle(&mut self, board: &mut BoardState, ui: &mut UiState, event: &DomEvent) -> Response {
        let mut response = match resolve(event) {
            Some(intent) => self.apply(board, ui, intent),
            None => Response::default(),
        };
        // Forms never navigate.
        if event.kind == EventKind::Submit {
            response.prevent_default = true;
        }
        response
    }

    /// Apply one resolved intent.
    pub fn apply(&mut self, board: &mut BoardState, ui: &mut UiState, intent: Intent) -> Response {
        match intent {
            Intent::OpenCreate(column) => open_modal(ui, Modal::CreateTask { column }),
            Intent::OpenDetail(task_id) => {
                if board.task(&task_id).is_none() {
                    log::debug!("ignoring open of missing task {task_id}");
                    return Response::default();
                }
                open_modal(ui, Modal::TaskDetail { task_id })
            }
            Intent::CloseModal => Response {
                ui_changed: ui.close_modal(),
                ..Response::default()
            },
            Intent::DeleteTask(task_id) => self.delete_task(board, ui, &task_id),
            Intent::DragStart { task_id, from } => {
                let Some(from) = from.or_else(|| board.task(&task_id).map(|t| t.column)) else {
                    log::debug!("ignoring drag of missing task {task_id}");
                    return Response::default();
                };
                ui.begin_drag(task_id, from);
                Response {
                    ui_changed: true,
                    ..Response::default()
                }
            }
            Intent::DragOver(column) => {
                if ui.dragged_task().is_none() {
                    return Response::default();
                }
                Response {
                    prevent_default: true,
                    ui_changed: ui.mark_drop_target(column),
                    ..Response::default()
                }
            }
            Intent::DragLeave(column) => Response {
                ui_changed: ui.clear_drop_target(column),
                ..Response::default()
            },
            Intent::Drop(column) => self.drop(board, ui, column),
            Intent::DragEnd => {
                let had_target = ui.drop_target.is_some();
                let was_dragging = ui.finish_drag().is_some();
                Response {
                    ui_changed: had_target || was_dragging,
                    ..Response::default()
                }
            }
            Intent::CreateTask { column, fields } => self.create_task(board, ui, column, fields),
            Intent::AddSubtask { task_id, text } => match board.add_subtask(&task_id, &text) {
                Ok(_) => {
                    self.persist_board(board);
                    Response {
                        prevent_default: true,
                        board_changed: true,
                        reset_form: true,
                        ..Response::default()
                    }
                }
                Err(err) => {
                    log::debug!("subtask rejected: {err}");
                    Response {
                        prevent_default: true,
                        ..Response::default()
                    }
                }
            },
            Intent::ToggleSubtask { task_id, index } => match board.toggle_subtask(&task_id, index) {
                Ok(_) => {
                    self.persist_board(board);
                    Response {
                        board_changed: true,
                        ..Response::default()
                    }
                }
                Err(err) => {
                    log::debug!("toggle rejected: {err}");
                    Response {
                        ui_changed: true,
                        revert_input: true,
                        ..Response::default()
                    }
                }
            },
            Intent::Search(query) => {
                if ui.search == query {
                    return Response::default();
                }
                ui.search = query;
                Response {
                    ui_changed: true,
                    ..Response::default()
                }
            }
            Intent::ToggleTheme => {
                ui.theme = ui.theme.toggled();
                if let Err(err) = persistence::save_theme(self.storage.as_mut(), &self.config.theme_key, ui.theme) {
                    log::warn!("theme not saved: {err}");
                }
                Response {
                    ui_changed: true,
                    ..Response::default()
                }
            }
        }
    }

    fn delete_task(&mut self, board: &mut BoardState, ui: &mut UiState, task_id: &TaskId) -> Response {
        let Some(task) = board.task(task_id) else {
            log::debug!("ignoring delete of missing task {task_id}");
            return Response::default();
        };
        let message = format!("Delete task \"{}\"?", task.title);
        if !self.confirm.confirm(&message) {
            return Response::default();
        }
        if board.delete_task(task_id).is_none() {
            return Response::default();
        }
        self.persist_board(board);

        let detail_closed = ui.modal.detail_task() == Some(task_id) && ui.close_modal();
        Response {
            board_changed: true,
            ui_changed: detail_closed,
            ..Response::default()
        }
    }

    fn drop(&mut self, board: &mut BoardState, ui: &mut UiState, column: Option<ColumnId>) -> Response {
        let had_target = ui.drop_target.is_some();
        let dragged = ui.finish_drag();
        let mut response = Response {
            prevent_default: column.is_some(),
            ui_changed: had_target || dragged.is_some(),
            ..Response::default()
        };

        let (Some((task_id, from)), Some(to)) = (dragged, column) else {
            return response;
        };
        if from == to {
            return response;
        }
        match board.move_task(&task_id, to) {
            Ok(true) => {
                self.persist_board(board);
                response.board_changed = true;
            }
            Ok(false) => {}
            Err(err) => log::debug!("move rejected: {err}"),
        }
        response
    }

    fn create_task(&mut self, board: &mut BoardState, ui: &mut UiState, column: ColumnId, fields: TaskFields) -> Response {
        match board.create_task(column, fields) {
            Ok(task_id) => {
                log::debug!("created {task_id} in {column}");
                self.persist_board(board);
                ui.close_modal();
                Response {
                    prevent_default: true,
                    board_changed: true,
                    ui_changed: true,
                    reset_form: true,
                    ..Response::default()
                }
            }
            Err(err) => {
                log::debug!("create rejected: {err}");
                Response {
                    prevent_default: true,
                    ..Response::default()
                }
            }
        }
    }

    fn persist_board(&mut self, board: &BoardState) {
        if let Err(err) = persistence::save_board(self.storage.as_mut(), &self.config.board_key, board) {
            log::warn!("board not saved: {err}");
        }
    }
}

fn open_modal(ui: &mut UiState, modal: Modal) -> Response {
    if ui.modal == modal {
        return Response::default();
    }
    ui.modal = modal;
    Response {
        ui_changed: true,
        ..Response::default()
    }
}
