//! Browser glue for delegated interaction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root `<div>` is the only element that receives listeners. Each
//! listener turns the raw `web_sys::Event` into a [`DomEvent`] by walking up
//! from the event target to the nearest `data-*` attributes, runs the shared
//! handler, then applies the returned [`Response`] to the event.
//!
//! TRADE-OFFS
//! ==========
//! Closures are leaked with `forget()`. The root lives for the whole page, so
//! there is nothing to detach them from.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{Notify, RwSignal, UpdateUntracked};
use wasm_bindgen::{JsCast, closure::Closure};

use crate::interaction::controller::{Interaction, Response};
use crate::interaction::delegate::{BindError, Bindings, Handler, ListenerHost};
use crate::interaction::event::{ATTR_ACTION, ATTR_COLUMN_ID, ATTR_INDEX, ATTR_TASK_ID, DomEvent, EventKind, Target};
use crate::state::board::BoardState;
use crate::state::ui::UiState;

/// Marker attribute set on the root once listeners are attached.
const ATTR_BOUND: &str = "data-interaction-bound";

/// A DOM element used as the delegation root.
pub struct ElementHost {
    element: web_sys::Element,
}

impl ElementHost {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl ListenerHost for ElementHost {
    fn is_bound(&self) -> bool {
        self.element.has_attribute(ATTR_BOUND)
    }

    fn mark_bound(&mut self) {
        if let Err(err) = self.element.set_attribute(ATTR_BOUND, "true") {
            log::warn!("bound marker not set on root: {err:?}");
        }
    }

    fn listen(&mut self, kind: EventKind, handler: Handler) -> Result<(), BindError> {
        let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(dom_event) = describe(kind, &event) else {
                return;
            };
            if kind == EventKind::DragStart {
                set_drag_payload(&event, &dom_event);
            }
            let response = handler(&dom_event);
            apply_response(&event, response);
        }) as Box<dyn FnMut(web_sys::Event)>);

        self.element
            .add_event_listener_with_callback(kind.as_str(), cb.as_ref().unchecked_ref())
            .map_err(|e| BindError::Attach {
                kind: kind.as_str(),
                reason: format!("{e:?}"),
            })?;
        cb.forget();
        Ok(())
    }
}

/// Ask the user through `window.confirm`. A missing window counts as "no".
pub fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Bind the interaction listeners to `root` once.
///
/// State changes are written without tracking and announced only when the
/// controller reports a change, so drag hover does not rebuild the board.
pub fn bind_root(root: &web_sys::Element, interaction: Interaction, board: RwSignal<BoardState>, ui: RwSignal<UiState>) {
    let interaction = Rc::new(RefCell::new(interaction));
    let handler: Handler = Rc::new(move |event: &DomEvent| {
        let mut controller = interaction.borrow_mut();
        let response = board
            .try_update_untracked(|board_state| {
                ui.try_update_untracked(|ui_state| controller.handle(board_state, ui_state, event))
            })
            .flatten()
            .unwrap_or_default();
        drop(controller);

        if response.board_changed {
            board.notify();
        }
        if response.ui_changed {
            ui.notify();
        }
        response
    });

    let mut host = ElementHost::new(root.clone());
    match Bindings::install(&mut host, handler) {
        Ok(bindings) => log::info!("interaction bound ({} event kinds)", bindings.kinds().len()),
        Err(BindError::AlreadyBound) => log::warn!("interaction already bound; skipping"),
        Err(err) => log::error!("interaction binding failed: {err}"),
    }
}

fn describe(kind: EventKind, event: &web_sys::Event) -> Option<DomEvent> {
    let element = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let nearest = |attr: &str| {
        element
            .closest(&format!("[{attr}]"))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(attr))
    };

    let column = nearest(ATTR_COLUMN_ID);
    if kind == EventKind::DragLeave && still_inside_column(event, column.as_deref()) {
        return None;
    }

    let target = Target::from_attributes(
        nearest(ATTR_ACTION).as_deref(),
        nearest(ATTR_TASK_ID).as_deref(),
        column.as_deref(),
        nearest(ATTR_INDEX).as_deref(),
    );
    let mut dom_event = DomEvent::new(kind, target);

    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        dom_event.value = Some(input.value());
        dom_event.checked = Some(input.checked());
    }
    if kind == EventKind::Submit {
        if let Some(form) = element.dyn_ref::<web_sys::HtmlFormElement>() {
            dom_event.fields = form_fields(form);
        }
    }
    if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
        dom_event.key = Some(key_event.key());
    }
    Some(dom_event)
}

/// `dragleave` also fires when the pointer moves onto a child of the same
/// column. Those are not leaves.
fn still_inside_column(event: &web_sys::Event, column: Option<&str>) -> bool {
    let Some(column) = column else {
        return false;
    };
    event
        .dyn_ref::<web_sys::MouseEvent>()
        .and_then(web_sys::MouseEvent::related_target)
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!("[{ATTR_COLUMN_ID}]")).ok().flatten())
        .and_then(|el| el.get_attribute(ATTR_COLUMN_ID))
        .is_some_and(|related| related == column)
}

fn form_fields(form: &web_sys::HtmlFormElement) -> std::collections::BTreeMap<String, String> {
    let mut fields = std::collections::BTreeMap::new();
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return fields;
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return fields;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    fields
}

fn set_drag_payload(event: &web_sys::Event, dom_event: &DomEvent) {
    let Some(task_id) = dom_event.target.task_id.as_ref() else {
        return;
    };
    if let Some(transfer) = event
        .dyn_ref::<web_sys::DragEvent>()
        .and_then(web_sys::DragEvent::data_transfer)
    {
        let _ = transfer.set_data("text/plain", task_id.as_str());
        transfer.set_effect_allowed("move");
    }
}

fn apply_response(event: &web_sys::Event, response: Response) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.revert_input {
        if let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(!input.checked());
        }
    }
    if response.reset_form {
        if let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            form.reset();
        }
    }
}
