use crate::constants::{CLICK_EVENT, CONTENT_LOADED_EVENT};
use crate::error::ToggleError;
use crate::toggle::{
    self, CheckedState, Display, DisplayTarget, Installed, ToggleConfig, VisibilityToggle,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type DomToggle = VisibilityToggle<web::HtmlInputElement, web::HtmlElement>;

#[inline]
fn js_err(e: JsValue) -> ToggleError {
    ToggleError::Dom(format!("{:?}", e))
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

impl CheckedState for web::HtmlInputElement {
    #[inline]
    fn is_checked(&self) -> bool {
        self.checked()
    }
}

impl DisplayTarget for web::HtmlElement {
    fn set_display(&self, display: Display) -> Result<(), ToggleError> {
        self.style()
            .set_property("display", display.as_css())
            .map_err(js_err)
    }
}

/// Run `callback` once the document is parsed.
///
/// Module scripts may start after `DOMContentLoaded` has already fired, so a
/// document that is no longer loading runs the callback immediately.
pub fn on_content_loaded(
    document: &web::Document,
    callback: impl FnOnce() + 'static,
) -> Result<(), ToggleError> {
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }
    let closure = Closure::once(callback);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            CONTENT_LOADED_EVENT,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn listen_for_clicks(toggle: DomToggle) -> Result<(), ToggleError> {
    let target = toggle.control().clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Err(e) = toggle.on_click() {
            log::warn!("[toggle] click: {}", e);
        }
    }) as Box<dyn FnMut()>);
    target
        .add_event_listener_with_callback(CLICK_EVENT, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    // listener lives as long as the page
    closure.forget();
    Ok(())
}

/// Look up the control and content rows in `document` and wire the toggle.
///
/// The content row is resolved first; without one nothing else is looked at.
pub fn install_on(
    document: &web::Document,
    config: &ToggleConfig,
) -> Result<Installed, ToggleError> {
    let rows = document.get_elements_by_class_name(&config.content_class);
    let Some(first) = rows.item(0) else {
        log::debug!("[toggle] no .{} on page", config.content_class);
        return Ok(Installed::NoContent);
    };
    let panel = first
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| ToggleError::NotStylable {
            class: config.content_class.clone(),
        })?;
    let control = match document.get_element_by_id(&config.control_id) {
        Some(el) => Some(el.dyn_into::<web::HtmlInputElement>().map_err(|_| {
            ToggleError::NotACheckbox {
                id: config.control_id.clone(),
            }
        })?),
        None => None,
    };
    toggle::install(config, control, Some(panel), listen_for_clicks)
}
