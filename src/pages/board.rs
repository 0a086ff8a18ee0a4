//! Board page: the whole app shell.
//!
//! ARCHITECTURE
//! ============
//! `BoardPage` loads persisted state through the Interaction Layer, provides
//! `RwSignal<BoardState>` and `RwSignal<UiState>` as context, and renders the
//! toolbar, board, and modals inside one root `<div class="app">`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root div is created once and never re-rendered. After it mounts, the
//! delegated listeners are bound to it exactly once; everything below it is
//! free to re-render.

use leptos::prelude::*;

use crate::components::create_task_modal::CreateTaskModal;
use crate::components::kanban_board::KanbanBoard;
use crate::components::task_detail_modal::TaskDetailModal;
use crate::components::toolbar::Toolbar;
use crate::config::BoardConfig;
use crate::interaction::controller::Interaction;
use crate::util::dark_mode;
use crate::util::storage::open_browser_store;

#[cfg(feature = "csr")]
fn browser_interaction(config: BoardConfig) -> Interaction {
    Interaction::new(
        open_browser_store(),
        Box::new(crate::interaction::dom::browser_confirm),
        config,
    )
}

#[cfg(not(feature = "csr"))]
fn browser_interaction(config: BoardConfig) -> Interaction {
    Interaction::new(open_browser_store(), Box::new(|_: &str| false), config)
}

/// Root page component.
#[component]
pub fn BoardPage() -> impl IntoView {
    let interaction = browser_interaction(BoardConfig::default());
    let (initial_board, initial_ui) = interaction.load();
    log::info!(
        "board loaded: {} tasks, {} theme",
        initial_board.tasks.len(),
        initial_ui.theme.as_str()
    );

    let board = RwSignal::new(initial_board);
    let ui = RwSignal::new(initial_ui);
    provide_context(board);
    provide_context(ui);

    let theme = Memo::new(move |_| ui.with(|u| u.theme));
    Effect::new(move || dark_mode::apply(theme.get()));

    let root_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let pending = Rc::new(RefCell::new(Some(interaction)));
        Effect::new(move || {
            let Some(root) = root_ref.get() else {
                return;
            };
            if let Some(interaction) = pending.borrow_mut().take() {
                crate::interaction::dom::bind_root(&root, interaction, board, ui);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = interaction;
    }

    view! {
        <div class="app" node_ref=root_ref>
            <Toolbar />
            <KanbanBoard />
            <CreateTaskModal />
            <TaskDetailModal />
        </div>
    }
}
