//! Task creation modal.

use leptos::prelude::*;

use crate::interaction::event::ActionKind;
use crate::interaction::intent::{FIELD_DESC, FIELD_DUE_DATE, FIELD_PRIORITY, FIELD_TITLE};
use crate::state::board::{ColumnId, Priority};
use crate::state::ui::UiState;

/// Modal form for a new task. Mounted only while the create modal is open,
/// so every opening starts from an empty form.
#[component]
pub fn CreateTaskModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let column = Memo::new(move |_| ui.with(|u| u.modal.create_column()));

    move || column.get().map(|column| view! { <CreateTaskForm column=column /> })
}

#[component]
fn CreateTaskForm(column: ColumnId) -> impl IntoView {
    let title_ref = NodeRef::<leptos::html::Input>::new();

    // `autofocus` is ignored on inserted elements once the page has focus.
    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = title_ref.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <div class="modal-overlay" id="add-task-modal">
            <div class="modal">
                <h3 class="modal__title">"Add Task to " {column.title()}</h3>
                <form
                    class="modal__form"
                    data-action=ActionKind::CreateTask.as_str()
                    data-column-id=column.as_str()
                >
                    <input
                        id="task-title-input"
                        name=FIELD_TITLE
                        type="text"
                        placeholder="Task title"
                        autofocus=true
                        node_ref=title_ref
                    />
                    <textarea id="task-desc-input" name=FIELD_DESC placeholder="Description"></textarea>
                    <label for="task-priority">"Priority"</label>
                    <select id="task-priority" name=FIELD_PRIORITY>
                        {[Priority::Low, Priority::Medium, Priority::High]
                            .into_iter()
                            .map(|priority| {
                                view! {
                                    <option
                                        value=priority.as_str()
                                        selected=priority == Priority::default()
                                    >
                                        {priority.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <label for="task-due-date">"Due date"</label>
                    <input id="task-due-date" name=FIELD_DUE_DATE type="date" />
                    <div class="modal__actions">
                        <button
                            type="button"
                            class="btn cancel-btn"
                            data-action=ActionKind::CloseModal.as_str()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary">
                            "Add Task"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
