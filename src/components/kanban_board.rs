//! The three-column board.
//!
//! The board is rebuilt from a fresh [`BoardView`](crate::util::board_view::BoardView)
//! whenever the projection changes. Drag feedback does not change the
//! projection, so hovering never rebuilds cards.

use leptos::prelude::*;

use crate::components::board_column::BoardColumn;
use crate::state::board::BoardState;
use crate::state::ui::UiState;
use crate::util::board_view::project;
use crate::util::clock;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = Memo::new(move |_| ui.with(|u| u.search.clone()));
    let projection = Memo::new(move |_| {
        let query = query.get();
        board.with(|b| project(b, &query, clock::today()))
    });

    view! {
        <main class="kanban-board">
            {move || {
                projection
                    .get()
                    .columns
                    .into_iter()
                    .map(|column| view! { <BoardColumn column=column /> })
                    .collect_view()
            }}
        </main>
    }
}
