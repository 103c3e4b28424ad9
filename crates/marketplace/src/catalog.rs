use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use soar_core::{ActionDescriptor, normalize_integration_name, to_snake_case};
use tracing::{info, warn};

use crate::integrations;

/// A vendor integration and the actions it offers.
#[derive(Debug)]
pub struct Integration {
    /// Name as registered in the backend (e.g. `CheckPointFirewall`).
    pub name: &'static str,
    pub category: &'static str,
    pub actions: &'static [ActionDescriptor],
}

impl Integration {
    /// Normalized name used by the enabled-integrations filter.
    pub fn key(&self) -> String {
        to_snake_case(self.name)
    }
}

/// Listing entry for one enabled integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationSummary {
    pub name: &'static str,
    pub key: String,
    pub category: &'static str,
    pub actions: usize,
}

/// Maps tool names to action descriptors for the enabled integrations.
///
/// Built once at startup and then shared immutably.
#[derive(Debug, Default)]
pub struct ActionCatalog {
    integrations: Vec<&'static Integration>,
    actions: BTreeMap<String, &'static ActionDescriptor>,
}

impl ActionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in integration.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for integration in integrations::BUILTIN {
            catalog.register(integration);
        }
        catalog
    }

    /// Only the built-in integrations named in `enabled`.
    ///
    /// Names are normalized, so `CiscoAMP`, `cisco_amp` and ` CiscoAMP ` all
    /// match. Unknown names are logged and skipped. An empty filter enables
    /// nothing.
    pub fn with_enabled<I, S>(enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: BTreeSet<String> = enabled
            .into_iter()
            .map(|name| normalize_integration_name(name.as_ref()))
            .filter(|name| name != "_unnamed_parameter")
            .collect();

        let mut catalog = Self::new();
        for integration in integrations::BUILTIN {
            if wanted.contains(&integration.key()) {
                catalog.register(integration);
            }
        }

        for name in &wanted {
            if !catalog.integrations.iter().any(|i| i.key() == *name) {
                warn!(integration = %name, "unknown integration requested; skipping");
            }
        }

        if catalog.integrations.is_empty() {
            info!("no marketplace integrations enabled");
        } else {
            info!(
                integrations = catalog.integrations.len(),
                tools = catalog.len(),
                "marketplace integrations enabled"
            );
        }
        catalog
    }

    /// Register an integration. Tools with the same name are replaced.
    pub fn register(&mut self, integration: &'static Integration) {
        for action in integration.actions {
            self.actions.insert(action.tool_name(), action);
        }
        if !self.integrations.iter().any(|i| i.name == integration.name) {
            self.integrations.push(integration);
        }
    }

    /// Look up an action by tool name.
    pub fn get(&self, tool_name: &str) -> Option<&'static ActionDescriptor> {
        self.actions.get(tool_name).copied()
    }

    /// Sorted tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Tool name and descriptor pairs, sorted by tool name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static ActionDescriptor)> {
        self.actions.iter().map(|(name, action)| (name.as_str(), *action))
    }

    /// Enabled integrations in registration order.
    pub fn integrations(&self) -> &[&'static Integration] {
        &self.integrations
    }

    pub fn summaries(&self) -> Vec<IntegrationSummary> {
        self.integrations
            .iter()
            .map(|i| IntegrationSummary {
                name: i.name,
                key: i.key(),
                category: i.category,
                actions: i.actions.len(),
            })
            .collect()
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use soar_core::ParamSpec;

    use super::*;

    static STUB: Integration = Integration {
        name: "StubVendor",
        category: "Testing",
        actions: &[
            ActionDescriptor {
                integration: "StubVendor",
                name: "Ping",
                description: "Test connectivity.",
                params: &[],
            },
            ActionDescriptor {
                integration: "StubVendor",
                name: "Do Thing",
                description: "Do a thing.",
                params: &[ParamSpec::string("Target", "What to do it to.").required()],
            },
        ],
    };

    #[test]
    fn empty_catalog() {
        let catalog = ActionCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.tool_names().is_empty());
    }

    #[test]
    fn register_and_get() {
        let mut catalog = ActionCatalog::new();
        catalog.register(&STUB);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tool_names(), vec!["stub_vendor_do_thing", "stub_vendor_ping"]);
        let action = catalog.get("stub_vendor_do_thing").unwrap();
        assert_eq!(action.name, "Do Thing");
        assert!(catalog.get("stub_vendor_missing").is_none());
    }

    #[test]
    fn register_twice_keeps_one_copy() {
        let mut catalog = ActionCatalog::new();
        catalog.register(&STUB);
        catalog.register(&STUB);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.integrations().len(), 1);
    }

    #[test]
    fn builtin_tool_names_are_unique() {
        let catalog = ActionCatalog::builtin();
        let declared: usize = integrations::BUILTIN.iter().map(|i| i.actions.len()).sum();
        assert_eq!(catalog.len(), declared);
        assert_eq!(catalog.integrations().len(), integrations::BUILTIN.len());
    }

    #[test]
    fn builtin_descriptors_name_their_integration() {
        for integration in integrations::BUILTIN {
            for action in integration.actions {
                assert_eq!(action.integration, integration.name);
                assert!(!action.description.is_empty(), "{} has no description", action.name);
            }
        }
    }

    #[test]
    fn enabled_filter_normalizes_names() {
        let catalog = ActionCatalog::with_enabled(["CiscoAMP", " slack ", "nonexistent"]);
        let names: Vec<&str> = catalog.integrations().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Slack", "CiscoAMP"]);
        assert!(catalog.get("slack_wait_for_reply").is_some());
        assert!(catalog.get("cisco_amp_unisolate_machine").is_some());
        assert!(catalog.get("shodan_ping").is_none());
    }

    #[test]
    fn enabled_filter_needs_word_boundaries() {
        for name in ["CiscoAMP", "cisco_amp", " CiscoAMP "] {
            let catalog = ActionCatalog::with_enabled([name]);
            assert_eq!(catalog.integrations().len(), 1, "{name:?} should match");
        }
        assert!(ActionCatalog::with_enabled([" ciscoamp"]).is_empty());
    }

    #[test]
    fn empty_filter_enables_nothing() {
        let catalog = ActionCatalog::with_enabled(Vec::<String>::new());
        assert!(catalog.is_empty());
        let catalog = ActionCatalog::with_enabled([""]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn summaries_count_actions() {
        let mut catalog = ActionCatalog::new();
        catalog.register(&STUB);
        assert_eq!(
            catalog.summaries(),
            vec![IntegrationSummary {
                name: "StubVendor",
                key: "stub_vendor".into(),
                category: "Testing",
                actions: 2,
            }]
        );
    }
}
