use std::collections::BTreeSet;

use crate::entity::TargetEntity;
use crate::outcome::ActionFailure;

/// Scope used when the caller does not name one.
pub const DEFAULT_SCOPE: &str = "All entities";

/// The scopes the backend accepts, fetched once when the bindings are built.
///
/// Iteration is sorted so the "allowed values" message is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet {
    scopes: BTreeSet<String>,
}

impl ScopeSet {
    pub fn new<I, S>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Sorted scope names.
    pub fn sorted(&self) -> Vec<String> {
        self.scopes.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// How an action selects the entities it runs on.
///
/// Exactly one of explicit entities or a predefined scope is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub target_entities: Vec<TargetEntity>,
    pub scope: Option<String>,
    pub is_predefined_scope: bool,
}

impl TargetSelection {
    /// Decide between explicit entities and a named scope.
    ///
    /// A non-empty entity list always wins and the scope is dropped without
    /// being validated. Otherwise the scope must belong to `valid`.
    pub fn resolve(
        target_entities: Vec<TargetEntity>,
        scope: &str,
        valid: &ScopeSet,
    ) -> Result<Self, ActionFailure> {
        if !target_entities.is_empty() {
            return Ok(Self {
                target_entities,
                scope: None,
                is_predefined_scope: false,
            });
        }

        if !valid.contains(scope) {
            return Err(ActionFailure::InvalidScope {
                scope: scope.to_owned(),
                allowed: valid.sorted(),
            });
        }

        Ok(Self {
            target_entities: Vec::new(),
            scope: Some(scope.to_owned()),
            is_predefined_scope: true,
        })
    }
}
