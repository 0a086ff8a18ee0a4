//! Board UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board projection and the two modals from the shared
//! `RwSignal<BoardState>` / `RwSignal<UiState>` contexts. They attach no event
//! handlers: interactive elements are tagged with `data-*` attributes and the
//! delegated listeners on the app root do the rest.

pub mod board_column;
pub mod create_task_modal;
pub mod kanban_board;
pub mod task_card;
pub mod task_detail_modal;
pub mod toolbar;
