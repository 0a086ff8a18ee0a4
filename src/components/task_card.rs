//! Task card inside a column.

use leptos::prelude::*;

use crate::interaction::event::ActionKind;
use crate::state::ui::UiState;
use crate::util::board_view::CardView;

/// Draggable card. Clicking the body opens the detail view; the `×` button
/// deletes after confirmation.
#[component]
pub fn TaskCard(card: CardView) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dragging = {
        let id = card.id.clone();
        move || ui.with(|u| u.dragged_task() == Some(&id))
    };
    let count = card.count_label();
    let progress = card.progress.map(|percent| {
        view! {
            <div class="progress-bar">
                <div class="progress-bar-inner" style:width=format!("{percent}%")></div>
            </div>
        }
    });

    view! {
        <article
            class="task-card"
            class:overdue=card.overdue
            class:hidden=card.hidden
            class:dragging=dragging
            draggable="true"
            data-action=ActionKind::OpenTask.as_str()
            data-task-id=card.id.as_str().to_owned()
            data-priority=card.priority.as_str()
        >
            <div class="task-card__header">
                <h4>{card.title}</h4>
                <button
                    class="task-card__delete"
                    data-action=ActionKind::DeleteTask.as_str()
                    title="Delete task"
                >
                    "×"
                </button>
            </div>
            <div class="task-meta">
                <span class="due-date" class:overdue-text=card.overdue>
                    {card.due_label}
                </span>
                <span class="subtask-count">{count}</span>
            </div>
            {progress}
        </article>
    }
}
