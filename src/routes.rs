//! Explicit route-to-behavior registration.
//!
//! Pages opt into auto-reload by route fragment. The registry is built and
//! consulted once at page init, so enabling a new report page means adding
//! one entry here instead of editing path checks inside the controller.

use crate::config::ENABLED_ROUTE_SUFFIXES;

/// The set of route fragments whose pages get the reload behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRegistry {
    fragments: Vec<String>,
}

impl RouteRegistry {
    /// An empty registry; no page activates until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the known report pages.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for fragment in ENABLED_ROUTE_SUFFIXES {
            registry.register(fragment);
        }
        registry
    }

    /// Opt an additional route into the reload behavior.
    pub fn register(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    /// Whether the given path belongs to a page that opted in.
    /// Matches by substring, so `/plant-a/hourly-review` qualifies.
    pub fn is_enabled(&self, path: &str) -> bool {
        self.fragments.iter().any(|f| path.contains(f.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_known_report_page() {
        let registry = RouteRegistry::with_defaults();
        for fragment in ENABLED_ROUTE_SUFFIXES {
            assert!(registry.is_enabled(fragment), "expected {fragment} enabled");
        }
    }

    #[test]
    fn unrelated_pages_stay_disabled() {
        let registry = RouteRegistry::with_defaults();
        assert!(!registry.is_enabled("/"));
        assert!(!registry.is_enabled("/dashboard"));
        assert!(!registry.is_enabled("/hourly"));
    }

    #[test]
    fn matching_is_by_substring() {
        let registry = RouteRegistry::with_defaults();
        assert!(registry.is_enabled("/plant-a/hourly-review"));
        assert!(registry.is_enabled("/daily-review/2024-05-01"));
    }

    #[test]
    fn empty_registry_disables_everything() {
        let registry = RouteRegistry::new();
        assert!(!registry.is_enabled("/hourly-review"));
    }

    #[test]
    fn registered_routes_become_enabled() {
        let mut registry = RouteRegistry::new();
        registry.register("/shift-report");
        assert!(registry.is_enabled("/shift-report"));
        assert!(!registry.is_enabled("/hourly-review"));
    }
}
