//! Task detail modal: description, metadata, and the subtask checklist.

use leptos::prelude::*;

use crate::interaction::event::ActionKind;
use crate::interaction::intent::FIELD_SUBTASK;
use crate::state::board::BoardState;
use crate::state::ui::UiState;
use crate::util::board_view::{DetailView, SubtaskView, project_detail};

/// Detail view of the task selected in [`UiState::modal`]. Re-renders when
/// the task changes and disappears when it is deleted.
#[component]
pub fn TaskDetailModal() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let task_id = Memo::new(move |_| ui.with(|u| u.modal.detail_task().cloned()));
    let detail = Memo::new(move |_| {
        let task_id = task_id.get()?;
        board.with(|b| project_detail(b, &task_id))
    });

    move || detail.get().map(|detail| view! { <TaskDetail detail=detail /> })
}

#[component]
fn TaskDetail(detail: DetailView) -> impl IntoView {
    let task_id = detail.task_id.as_str().to_owned();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Keeps focus inside the app root so Escape reaches the delegated
    // keydown listener.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(modal) = modal_ref.get() {
                let _ = modal.focus();
            }
        }
    });

    view! {
        <div class="modal-overlay" id="task-details-modal">
            <div class="modal modal--details" data-task-id=task_id tabindex="0" node_ref=modal_ref>
                <div class="modal__header">
                    <h3 id="details-title">{detail.title}</h3>
                    <button
                        type="button"
                        class="btn cancel-btn"
                        data-action=ActionKind::CloseModal.as_str()
                        title="Close"
                    >
                        "×"
                    </button>
                </div>
                <p id="details-desc">{detail.description}</p>
                <div class="modal__meta">
                    <span id="details-priority">{detail.priority_label}</span>
                    <span id="details-due-date">{detail.due_label}</span>
                </div>
                <h4>"Checklist"</h4>
                <div id="checklist-container">
                    {detail.subtasks.into_iter().map(subtask_row).collect_view()}
                </div>
                <form id="add-subtask-form" data-action=ActionKind::AddSubtask.as_str()>
                    <input
                        id="subtask-input"
                        name=FIELD_SUBTASK
                        type="text"
                        placeholder="Add a subtask"
                        autocomplete="off"
                    />
                    <button type="submit" class="btn">
                        "Add"
                    </button>
                </form>
            </div>
        </div>
    }
}

fn subtask_row(subtask: SubtaskView) -> impl IntoView {
    let input_id = format!("subtask-{}", subtask.index);
    view! {
        <div class="subtask" class:completed=subtask.completed>
            <input
                type="checkbox"
                id=input_id.clone()
                checked=subtask.completed
                data-action=ActionKind::ToggleSubtask.as_str()
                data-index=subtask.index.to_string()
            />
            <label for=input_id>{subtask.text}</label>
        </div>
    }
}
