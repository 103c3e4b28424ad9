use serde_json::{Map, Value, json};

use crate::naming::to_snake_case;
use crate::scope::DEFAULT_SCOPE;

/// Shape of an action-specific parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form string.
    String,
    /// Boolean flag.
    Bool,
    /// Enumerated-choice list, passed to the backend as a JSON array.
    Choices,
    /// Nested [`EmailContent`](crate::EmailContent) object.
    EmailContent,
}

impl ParamKind {
    /// Human-readable expectation used in argument errors.
    pub fn expected(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Bool => "a boolean",
            Self::Choices => "a list",
            Self::EmailContent => "an email content object with a 'body' string",
        }
    }

    fn schema(self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Bool => json!({ "type": "boolean" }),
            Self::Choices => json!({ "type": "array", "items": {} }),
            Self::EmailContent => json!({
                "type": "object",
                "properties": {
                    "body": { "type": "string" },
                    "content_type": {
                        "type": "string",
                        "enum": ["text", "html"],
                        "default": "text"
                    }
                },
                "required": ["body"]
            }),
        }
    }
}

/// One action-specific parameter.
///
/// `label` is the name the vendor UI uses and the key the backend expects in
/// the script parameters; the tool argument name is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub label: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn string(label: &'static str, description: &'static str) -> Self {
        Self::optional(label, ParamKind::String, description)
    }

    pub const fn boolean(label: &'static str, description: &'static str) -> Self {
        Self::optional(label, ParamKind::Bool, description)
    }

    pub const fn choices(label: &'static str, description: &'static str) -> Self {
        Self::optional(label, ParamKind::Choices, description)
    }

    pub const fn email_content(label: &'static str, description: &'static str) -> Self {
        Self::optional(label, ParamKind::EmailContent, description)
    }

    const fn optional(label: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            label,
            kind,
            required: false,
            description,
        }
    }

    /// Mark the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Tool argument name (`snake_case` of the label).
    pub fn argument_name(&self) -> String {
        to_snake_case(self.label)
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        if let Value::Object(ref mut map) = schema {
            map.insert("description".to_owned(), Value::from(self.description));
        }
        schema
    }
}

/// Declarative description of one vendor action.
///
/// Adding a vendor action is a new descriptor, never new control flow: the
/// generic invoker does the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Integration name as registered in the backend (e.g. `CiscoAMP`).
    pub integration: &'static str,
    /// Action display name (e.g. `Wait For Reply`).
    pub name: &'static str,
    /// Natural-language description used for tool discovery.
    pub description: &'static str,
    /// Action-specific parameters in the order the backend receives them.
    pub params: &'static [ParamSpec],
}

impl ActionDescriptor {
    /// Backend action name, also used as the script name:
    /// `<Integration>_<Action Display Name>`.
    pub fn action_name(&self) -> String {
        format!("{}_{}", self.integration, self.name)
    }

    /// Tool name exposed to callers, e.g. `slack_wait_for_reply`.
    pub fn tool_name(&self) -> String {
        format!(
            "{}_{}",
            to_snake_case(self.integration),
            to_snake_case(self.name)
        )
    }

    /// Look up a parameter by its tool argument name.
    pub fn param(&self, argument_name: &str) -> Option<&ParamSpec> {
        self.params
            .iter()
            .find(|p| p.argument_name() == argument_name)
    }

    /// JSON Schema of the tool's arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = vec![
            Value::from("case_id"),
            Value::from("alert_group_identifiers"),
        ];

        properties.insert(
            "case_id".to_owned(),
            json!({ "type": "string", "description": "The ID of the case." }),
        );
        properties.insert(
            "alert_group_identifiers".to_owned(),
            json!({
                "type": "array",
                "items": { "type": "string" },
                "description": "Identifiers for the alert groups."
            }),
        );

        for param in self.params {
            let name = param.argument_name();
            if param.required {
                required.push(Value::from(name.clone()));
            }
            properties.insert(name, param.schema());
        }

        properties.insert(
            "target_entities".to_owned(),
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "Identifier": { "type": "string" },
                        "EntityType": { "type": "string" }
                    },
                    "required": ["Identifier", "EntityType"]
                },
                "default": [],
                "description": "Optional list of specific target entities (Identifier, EntityType) to run the action on."
            }),
        );
        properties.insert(
            "scope".to_owned(),
            json!({
                "type": "string",
                "default": DEFAULT_SCOPE,
                "description": "Defines the scope for the action."
            }),
        );

        let mut schema = Map::new();
        schema.insert("type".to_owned(), Value::from("object"));
        schema.insert("properties".to_owned(), Value::Object(properties));
        schema.insert("required".to_owned(), Value::Array(required));
        schema
    }
}
