//! Control elements and how a [`ControlsView`] is written onto them.

use thiserror::Error;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlOptionElement, HtmlSelectElement};

use wars_view::{ControlsView, SelectorModel};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    Missing(String),
    #[error("element #{id} is not a {expected}")]
    WrongType { id: String, expected: &'static str },
    #[error("2D context not available")]
    NoContext,
}

impl From<DomError> for JsValue {
    fn from(e: DomError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

const MODAL_SHOWN: &str = "9999";
const MODAL_HIDDEN: &str = "-1";

fn lookup<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Result<T, DomError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongType {
            id: id.to_string(),
            expected,
        })
}

/// Missing controls are reported here, once, and then simply skipped.
fn optional<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Option<T> {
    lookup(doc, id, expected)
        .map_err(|err| warn!(%err, "control disabled"))
        .ok()
}

/// Every control the page may provide, looked up once at start-up.
#[derive(Clone, Default)]
pub struct Controls {
    pub clear_placement: Option<HtmlElement>,
    pub apply_placement: Option<HtmlElement>,
    pub placement_button: Option<HtmlElement>,
    pub troops_to_place: Option<HtmlSelectElement>,
    pub placement_counter: Option<HtmlElement>,
    pub attack_button: Option<HtmlElement>,
    pub fortify_button: Option<HtmlElement>,
    pub end_turn_button: Option<HtmlElement>,
    pub attack_modal: Option<HtmlElement>,
    pub attack_selector: Option<HtmlSelectElement>,
    pub attack_tail: Option<HtmlElement>,
    pub attack_all: Option<HtmlElement>,
    pub attack_cancel: Option<HtmlElement>,
    pub fortify_modal: Option<HtmlElement>,
    pub fortify_selector: Option<HtmlSelectElement>,
    pub fortify_all: Option<HtmlElement>,
    pub fortify_cancel: Option<HtmlElement>,
}

impl Controls {
    pub fn find(doc: &Document) -> Self {
        let el = |id| optional::<HtmlElement>(doc, id, "html element");
        let select = |id| optional::<HtmlSelectElement>(doc, id, "select");
        Controls {
            clear_placement: el("clear-placement"),
            apply_placement: el("apply-placement"),
            placement_button: el("placement-button"),
            troops_to_place: select("troops-to-place-selector"),
            placement_counter: el("troop-placement-counter"),
            attack_button: el("attack-button"),
            fortify_button: el("fortify-button"),
            end_turn_button: el("end-turn-button"),
            attack_modal: el("attack-modal"),
            attack_selector: select("troop-attack-selector"),
            attack_tail: el("attack-modal-button-tail"),
            attack_all: el("attack-modal-button-all"),
            attack_cancel: el("attack-modal-button-cancel"),
            fortify_modal: el("fortify-modal"),
            fortify_selector: select("troop-fortify-selector"),
            fortify_all: el("fortify-modal-button-all"),
            fortify_cancel: el("fortify-modal-button-cancel"),
        }
    }

    /// Writes the whole view; nothing is toggled relative to the last frame.
    pub fn apply(&self, view: &ControlsView) {
        let placement = &view.placement;
        for el in [
            &self.clear_placement,
            &self.apply_placement,
            &self.placement_counter,
        ]
        .into_iter()
        .flatten()
        {
            el.set_hidden(!placement.visible);
        }
        if let Some(sel) = &self.troops_to_place {
            sel.set_hidden(!placement.visible);
            fill_selector(sel, &placement.selector, None);
        }
        if let Some(counter) = &self.placement_counter {
            counter.set_text_content(Some(&placement.counter));
        }

        set_disabled(&self.placement_button, !view.place_enabled);
        set_disabled(&self.attack_button, !view.attack_enabled);
        set_disabled(&self.fortify_button, !view.fortify_enabled);
        set_disabled(&self.end_turn_button, !view.end_turn_enabled);

        show_modal(&self.attack_modal, &self.attack_selector, view.attack_modal.as_ref());
        show_modal(&self.fortify_modal, &self.fortify_selector, view.fortify_modal.as_ref());
    }
}

/// Reads the chosen troop count of a selector.
pub fn selected_troops(sel: &HtmlSelectElement) -> Option<u32> {
    sel.value().parse().ok()
}

fn set_disabled(el: &Option<HtmlElement>, disabled: bool) {
    if let Some(el) = el {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }
}

fn show_modal(
    modal: &Option<HtmlElement>,
    selector: &Option<HtmlSelectElement>,
    model: Option<&SelectorModel>,
) {
    if let Some(modal) = modal {
        let z = if model.is_some() { MODAL_SHOWN } else { MODAL_HIDDEN };
        let _ = modal.style().set_property("z-index", z);
    }
    if let (Some(sel), Some(model)) = (selector, model) {
        // A leading blank entry lets the first count fire a change event.
        fill_selector(sel, model, Some("-"));
    }
}

/// Clears and repopulates a `<select>` from its model.
fn fill_selector(sel: &HtmlSelectElement, model: &SelectorModel, placeholder: Option<&str>) {
    sel.set_length(0);
    let options = sel.options();
    if let Some(label) = placeholder
        && let Ok(opt) = HtmlOptionElement::new_with_text_and_value(label, "")
    {
        let _ = options.add_with_html_option_element(&opt);
    }
    for n in &model.options {
        let text = n.to_string();
        if let Ok(opt) = HtmlOptionElement::new_with_text_and_value(&text, &text) {
            let _ = options.add_with_html_option_element(&opt);
        }
    }
    let selected = if placeholder.is_some() { 0 } else { model.selected };
    if sel.length() > 0 {
        sel.set_selected_index(selected as i32);
    }
}
