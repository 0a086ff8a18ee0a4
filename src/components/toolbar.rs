//! Top bar with the board title, search box, and theme toggle.

use leptos::prelude::*;

use crate::interaction::event::ActionKind;
use crate::state::ui::UiState;

/// Top toolbar. Rendered once; the search input keeps its own value.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme = Memo::new(move |_| ui.with(|u| u.theme));

    view! {
        <header class="toolbar">
            <h1 class="toolbar__title">"Task Board"</h1>
            <span class="toolbar__spacer"></span>
            <input
                class="toolbar__search"
                type="search"
                placeholder="Search tasks..."
                data-action=ActionKind::Search.as_str()
            />
            <button
                class="btn toolbar__theme-toggle"
                data-action=ActionKind::ToggleTheme.as_str()
                title="Toggle dark mode"
            >
                {move || theme.get().toggle_icon()}
            </button>
        </header>
    }
}
