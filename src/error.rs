use thiserror::Error;

/// Failures while wiring or running the visibility toggle.
///
/// A page without any content row is not an error; see [`crate::Installed::NoContent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("missing #{id}")]
    MissingControl { id: String },
    #[error("#{id} is not an <input> element")]
    NotACheckbox { id: String },
    #[error("first .{class} is not an HTML element")]
    NotStylable { class: String },
    #[error("dom call failed: {0}")]
    Dom(String),
}
