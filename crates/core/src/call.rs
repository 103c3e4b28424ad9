use serde_json::{Map, Value};
use thiserror::Error;

use crate::descriptor::{ActionDescriptor, ParamKind};
use crate::email::EmailContent;
use crate::entity::TargetEntity;
use crate::scope::DEFAULT_SCOPE;
use crate::types::CaseId;

/// Errors raised while turning raw tool arguments into an [`ActionCall`].
///
/// These are caller mistakes and are reported before the invocation starts,
/// so they are not action failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("missing required argument '{0}'")]
    Missing(String),

    #[error("argument '{name}' must be {expected}")]
    InvalidType {
        name: String,
        expected: &'static str,
    },
}

/// Validated arguments of one action invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCall {
    pub case_id: CaseId,
    pub alert_group_identifiers: Vec<String>,
    /// Explicit entities; when non-empty the scope is ignored.
    pub target_entities: Vec<TargetEntity>,
    pub scope: String,
    /// Action-specific values keyed by tool argument name.
    pub arguments: Map<String, Value>,
}

impl ActionCall {
    /// A call on the default scope with no action-specific arguments.
    pub fn new(case_id: impl Into<CaseId>, alert_group_identifiers: Vec<String>) -> Self {
        Self {
            case_id: case_id.into(),
            alert_group_identifiers,
            target_entities: Vec::new(),
            scope: DEFAULT_SCOPE.to_owned(),
            arguments: Map::new(),
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    #[must_use]
    pub fn with_target_entities(mut self, entities: Vec<TargetEntity>) -> Self {
        self.target_entities = entities;
        self
    }

    /// Set an action-specific argument by tool argument name.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Set a nested email content argument, flattened to plain JSON.
    #[must_use]
    pub fn with_email_content(self, name: impl Into<String>, content: &EmailContent) -> Self {
        let value = serde_json::to_value(content).unwrap_or(Value::Null);
        self.with_argument(name, value)
    }
}

impl ActionDescriptor {
    /// Validate raw tool arguments against this descriptor.
    ///
    /// Unknown keys are ignored. `null` counts as unset.
    pub fn bind_arguments(&self, args: &Map<String, Value>) -> Result<ActionCall, ArgumentError> {
        let case_id = match present(args, "case_id") {
            Some(Value::String(s)) => CaseId::new(s.clone()),
            Some(Value::Number(n)) => CaseId::new(n.to_string()),
            Some(_) => return Err(invalid("case_id", "a string")),
            None => return Err(ArgumentError::Missing("case_id".to_owned())),
        };

        let alert_group_identifiers = match present(args, "alert_group_identifiers") {
            Some(value) => serde_json::from_value::<Vec<String>>(value.clone())
                .map_err(|_| invalid("alert_group_identifiers", "a list of strings"))?,
            None => {
                return Err(ArgumentError::Missing(
                    "alert_group_identifiers".to_owned(),
                ));
            }
        };

        let target_entities = match present(args, "target_entities") {
            Some(value) => serde_json::from_value::<Vec<TargetEntity>>(value.clone()).map_err(
                |_| {
                    invalid(
                        "target_entities",
                        "a list of {Identifier, EntityType} objects",
                    )
                },
            )?,
            None => Vec::new(),
        };

        let scope = match present(args, "scope") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(invalid("scope", "a string")),
            None => DEFAULT_SCOPE.to_owned(),
        };

        let mut arguments = Map::new();
        for param in self.params {
            let name = param.argument_name();
            let Some(value) = present(args, &name) else {
                if param.required {
                    return Err(ArgumentError::Missing(name));
                }
                continue;
            };

            let value = match (param.kind, value) {
                (ParamKind::String, Value::String(_))
                | (ParamKind::Bool, Value::Bool(_))
                | (ParamKind::Choices, Value::Array(_)) => value.clone(),
                (ParamKind::EmailContent, Value::Object(_)) => {
                    let content = serde_json::from_value::<EmailContent>(value.clone())
                        .map_err(|_| invalid(&name, param.kind.expected()))?;
                    serde_json::to_value(content)
                        .map_err(|_| invalid(&name, param.kind.expected()))?
                }
                _ => return Err(invalid(&name, param.kind.expected())),
            };
            arguments.insert(name, value);
        }

        Ok(ActionCall {
            case_id,
            alert_group_identifiers,
            target_entities,
            scope,
            arguments,
        })
    }
}

fn present<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|v| !v.is_null())
}

fn invalid(name: &str, expected: &'static str) -> ArgumentError {
    ArgumentError::InvalidType {
        name: name.to_owned(),
        expected,
    }
}
