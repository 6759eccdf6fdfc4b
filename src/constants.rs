// Page contract of the epidemic admin change form.

// Django renders the `active` BooleanField as `<input id="id_active">`
pub const ACTIVE_CHECKBOX_ID: &str = "id_active";
// Admin wraps each field row in `form-row field-<name>`
pub const CONTENT_FIELD_CLASS: &str = "field-content";

// Inline `display` values written to the content row
pub const DISPLAY_BLOCK: &str = "block";
pub const DISPLAY_NONE: &str = "none";

pub const CLICK_EVENT: &str = "click";
pub const CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";
