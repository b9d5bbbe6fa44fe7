//! Page-level configuration constants for the auto-reload behavior.

// UI behavior
pub const DEBOUNCE_MS: u32 = 500;
pub const ERROR_TOAST_MS: u32 = 5_000;

// Structural selectors the controller recognizes on the page
pub const TRIGGER_SELECTOR: &str =
    r#"input[type="date"], input[type="month"], select[name="time"]"#;
pub const FORM_SELECTOR: &str = ".review-form";
pub const RESULTS_CONTAINER_SELECTOR: &str = ".tables-flex";

// Shared indicator / toast elements
pub const LOADING_INDICATOR_CLASS: &str = "loading-indicator";
pub const ERROR_TOAST_CLASS: &str = "auto-reload-error";
pub const RELOAD_ERROR_MESSAGE: &str = "Failed to reload data. Please refresh the page.";

// Header that marks the POST as a background refresh so the server can
// answer with a partial fragment instead of a full page render.
pub const BACKGROUND_REQUEST_HEADER: &str = "X-Requested-With";
pub const BACKGROUND_REQUEST_VALUE: &str = "XMLHttpRequest";

// Report pages that opt into auto-reload by default
pub const ENABLED_ROUTE_SUFFIXES: &[&str] = &[
    "/hourly-review",
    "/daily-review",
    "/mor-energy",
    "/mor-eht-tf-interruptions",
    "/mor-ht-interruptions",
    "/abc-details",
];
