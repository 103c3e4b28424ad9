use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Status literal the backend and the orchestrator use for failed calls.
pub const STATUS_FAILED: &str = "Failed";

/// Result of invoking a marketplace action.
///
/// Every invocation produces one of these; no failure is allowed to escape
/// the tool boundary as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The backend accepted the request. Carries its response verbatim.
    Completed(Value),
    /// The invocation failed before or while talking to the backend.
    Failed(ActionFailure),
}

impl ActionOutcome {
    /// Returns `true` if the backend accepted the request.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Returns the failure, if any.
    pub fn failure(&self) -> Option<&ActionFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Completed(_) => None,
        }
    }

    /// Render the outcome in the backend envelope format.
    ///
    /// Successful responses are returned unchanged; failures become
    /// `{"Status": "Failed", "Message": ...}`.
    #[must_use]
    pub fn into_envelope(self) -> Value {
        match self {
            Self::Completed(response) => response,
            Self::Failed(failure) => failure.to_envelope(),
        }
    }

    /// Render the outcome for tool callers. Failures also carry the stable
    /// failure code under `"Code"`.
    #[must_use]
    pub fn into_tool_payload(self) -> Value {
        match self {
            Self::Completed(response) => response,
            Self::Failed(failure) => {
                let mut envelope = failure.to_envelope();
                if let Value::Object(ref mut map) = envelope {
                    map.insert("Code".to_owned(), Value::from(failure.kind().code()));
                }
                envelope
            }
        }
    }
}

impl From<ActionFailure> for ActionOutcome {
    fn from(failure: ActionFailure) -> Self {
        Self::Failed(failure)
    }
}

/// The ways an action invocation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionFailure {
    /// The requested scope is not one of the backend's valid scopes.
    #[error("Invalid scope '{scope}'. Allowed values are: {}", .allowed.join(", "))]
    InvalidScope {
        scope: String,
        /// Valid scopes, sorted.
        allowed: Vec<String>,
    },

    /// Listing the integration's instances failed.
    #[error("Error fetching instance: {0}")]
    InstanceLookupFailed(String),

    /// The integration has no configured instance.
    #[error("No active instance found.")]
    NoActiveInstance,

    /// The first instance returned carries no identifier.
    #[error("Instance found but identifier is missing.")]
    InstanceIdentifierMissing,

    /// The execute-manual-action call failed.
    #[error("Error executing action: {0}")]
    ActionExecutionFailed(String),
}

impl ActionFailure {
    /// The failure kind, for callers that branch on it.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidScope { .. } => FailureKind::InvalidScope,
            Self::InstanceLookupFailed(_) => FailureKind::InstanceLookupFailed,
            Self::NoActiveInstance => FailureKind::NoActiveInstance,
            Self::InstanceIdentifierMissing => FailureKind::InstanceIdentifierMissing,
            Self::ActionExecutionFailed(_) => FailureKind::ActionExecutionFailed,
        }
    }

    /// `{"Status": "Failed", "Message": <display message>}`.
    #[must_use]
    pub fn to_envelope(&self) -> Value {
        let mut map = Map::new();
        map.insert("Status".to_owned(), Value::from(STATUS_FAILED));
        map.insert("Message".to_owned(), Value::from(self.to_string()));
        Value::Object(map)
    }
}

/// Stable, message-independent classification of an [`ActionFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    InvalidScope,
    InstanceLookupFailed,
    NoActiveInstance,
    InstanceIdentifierMissing,
    ActionExecutionFailed,
}

impl FailureKind {
    /// Stable code string for this kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidScope => "INVALID_SCOPE",
            Self::InstanceLookupFailed => "INSTANCE_LOOKUP_FAILED",
            Self::NoActiveInstance => "NO_ACTIVE_INSTANCE",
            Self::InstanceIdentifierMissing => "INSTANCE_IDENTIFIER_MISSING",
            Self::ActionExecutionFailed => "ACTION_EXECUTION_FAILED",
        }
    }
}
