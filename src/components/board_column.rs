//! One board column: title, cards, and the add-task button.

use leptos::prelude::*;

use crate::components::task_card::TaskCard;
use crate::interaction::event::ActionKind;
use crate::state::ui::UiState;
use crate::util::board_view::ColumnView;

/// Column section. The whole section is the drop zone; the cards container
/// highlights while a card hovers over it.
#[component]
pub fn BoardColumn(column: ColumnView) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = column.id;
    let drag_over = move || ui.with(|u| u.drop_target == Some(id));

    view! {
        <section class="kanban-column" data-column-id=id.as_str()>
            <h2 class="column-title">{column.title}</h2>
            <div class="tasks-container" class:drag-over=drag_over>
                {column
                    .cards
                    .into_iter()
                    .map(|card| view! { <TaskCard card=card /> })
                    .collect_view()}
            </div>
            <button class="add-task-btn" data-action=ActionKind::AddTask.as_str()>
                "+ Add Task"
            </button>
        </section>
    }
}
