//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::board::BoardPage;

/// Application root. Sets the document title and mounts the board page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Task Board" />
        <BoardPage />
    }
}
