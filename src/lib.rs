//! Shows the epidemic admin form's `content` row only while `active` is ticked.

pub mod constants;
pub mod error;
pub mod toggle;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use error::ToggleError;
pub use toggle::{
    install, CheckedState, Display, DisplayTarget, Installed, ToggleConfig, VisibilityToggle,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("epidemic-toggle starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ready_doc = document.clone();
    dom::on_content_loaded(&document, move || {
        match dom::install_on(&ready_doc, &ToggleConfig::default()) {
            Ok(Installed::Listening) => {}
            Ok(Installed::NoContent) => log::info!("[toggle] no content row, toggle disabled"),
            Err(e) => log::error!("[toggle] setup failed: {}", e),
        }
    })?;
    Ok(())
}
