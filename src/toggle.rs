//! Browser-independent core of the content-row toggle.
//!
//! The handler only sees two capabilities: something with a checked state and
//! something whose `display` can be set. The wasm adapters in `dom.rs` implement
//! them for `HtmlInputElement` and `HtmlElement`; tests use plain cells.

use crate::constants::{ACTIVE_CHECKBOX_ID, CONTENT_FIELD_CLASS, DISPLAY_BLOCK, DISPLAY_NONE};
use crate::error::ToggleError;

/// Inline `display` value of the content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    #[inline]
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Display::Block
        } else {
            Display::None
        }
    }

    #[inline]
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => DISPLAY_BLOCK,
            Display::None => DISPLAY_NONE,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Display::Block
    }
}

pub trait CheckedState {
    fn is_checked(&self) -> bool;
}

pub trait DisplayTarget {
    fn set_display(&self, display: Display) -> Result<(), ToggleError>;
}

/// Where to find the control and the panel on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleConfig {
    pub control_id: String,
    pub content_class: String,
    /// Apply the control's current state once while installing, instead of
    /// leaving the panel at its page default until the first click.
    pub sync_on_install: bool,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            control_id: ACTIVE_CHECKBOX_ID.to_string(),
            content_class: CONTENT_FIELD_CLASS.to_string(),
            sync_on_install: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installed {
    /// No content element on the page; nothing was wired.
    NoContent,
    /// A click listener is attached to the control.
    Listening,
}

/// Keeps one panel's visibility equal to one control's checked state.
pub struct VisibilityToggle<C, P> {
    control: C,
    panel: P,
}

impl<C: CheckedState, P: DisplayTarget> VisibilityToggle<C, P> {
    pub fn new(control: C, panel: P) -> Self {
        Self { control, panel }
    }

    #[inline]
    pub fn control(&self) -> &C {
        &self.control
    }

    #[inline]
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Read the control once and write the matching display to the panel.
    pub fn sync(&self) -> Result<Display, ToggleError> {
        let display = Display::from_checked(self.control.is_checked());
        self.panel.set_display(display)?;
        Ok(display)
    }

    pub fn on_click(&self) -> Result<Display, ToggleError> {
        let display = self.sync()?;
        log::debug!("[toggle] click -> display:{}", display.as_css());
        Ok(display)
    }
}

/// Wire the toggle for the first panel in `panels`.
///
/// Panels are checked before the control: with no panel the call is a silent
/// no-op even if the control is absent. `listen` receives the handler and is
/// responsible for routing click events to [`VisibilityToggle::on_click`].
pub fn install<C, P, I, L>(
    config: &ToggleConfig,
    control: Option<C>,
    panels: I,
    listen: L,
) -> Result<Installed, ToggleError>
where
    C: CheckedState,
    P: DisplayTarget,
    I: IntoIterator<Item = P>,
    L: FnOnce(VisibilityToggle<C, P>) -> Result<(), ToggleError>,
{
    let Some(panel) = panels.into_iter().next() else {
        log::debug!("[toggle] no .{} on page", config.content_class);
        return Ok(Installed::NoContent);
    };
    let control = control.ok_or_else(|| ToggleError::MissingControl {
        id: config.control_id.clone(),
    })?;

    let toggle = VisibilityToggle::new(control, panel);
    if config.sync_on_install {
        toggle.sync()?;
    }
    listen(toggle)?;
    log::info!(
        "[toggle] #{} controls .{}",
        config.control_id,
        config.content_class
    );
    Ok(Installed::Listening)
}
