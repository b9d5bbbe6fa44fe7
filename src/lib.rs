//! Debounced auto-reload for server-rendered report pages.
//!
//! When a date, month, or time control changes, the controller coalesces
//! the burst, resubmits the enclosing form as a background POST, and
//! splices the returned fragment into the page's results container. A
//! loading indicator covers the round trip and failures surface as a
//! transient toast; the page itself is never broken and there are no
//! automatic retries.

pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod routes;
pub mod ui;

pub use controller::ReloadController;
pub use error::ReloadError;
pub use routes::RouteRegistry;
