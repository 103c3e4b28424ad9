use serde_json::{Map, Value};

use crate::descriptor::ActionDescriptor;

/// Action-specific parameters keyed by UI label, in descriptor order.
///
/// Unset optional parameters are absent. Explicit falsy values (`false`,
/// `""`) are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptParameters {
    values: Map<String, Value>,
}

impl ScriptParameters {
    /// Collect the values of `arguments` (keyed by tool argument name) for
    /// every parameter the descriptor declares.
    pub fn collect(descriptor: &ActionDescriptor, arguments: &Map<String, Value>) -> Self {
        let mut values = Map::new();
        for param in descriptor.params {
            match arguments.get(&param.argument_name()) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    values.insert(param.label.to_owned(), value.clone());
                }
            }
        }
        Self { values }
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        self.values.get(label)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Labels in packaging order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Encode as the JSON text the backend expects inside the request body.
    pub fn encode(self) -> String {
        encode_script_parameters(self.values)
    }
}

/// Serialize script parameters to a JSON string.
///
/// The result is embedded as a string value in the outer request, so it is
/// JSON-encoded twice on the wire. This is the only place that happens.
///
/// Output is compact (no space after `:` or `,`) and keeps non-ASCII
/// characters as raw UTF-8 instead of `\uXXXX` escapes.
pub fn encode_script_parameters(values: Map<String, Value>) -> String {
    Value::Object(values).to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::descriptor::ParamSpec;

    const BLOCK_IP: ActionDescriptor = ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Add IP to Group",
        description: "Add an IP address to a group.",
        params: &[
            ParamSpec::string("Blacklist Group Name", "Group.").required(),
            ParamSpec::string("Policy Name", "Policy."),
            ParamSpec::boolean("Publish", "Publish changes."),
            ParamSpec::choices("Targets", "Targets."),
        ],
    };

    fn arguments(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn unset_optionals_are_omitted() {
        let params = ScriptParameters::collect(
            &BLOCK_IP,
            &arguments(json!({"blacklist_group_name": "blocked", "policy_name": null})),
        );
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("Blacklist Group Name"), Some(&json!("blocked")));
        assert!(params.get("Policy Name").is_none());
        assert_eq!(params.encode(), r#"{"Blacklist Group Name":"blocked"}"#);
    }

    #[test]
    fn falsy_values_are_kept() {
        let params = ScriptParameters::collect(
            &BLOCK_IP,
            &arguments(json!({
                "blacklist_group_name": "",
                "publish": false,
                "targets": []
            })),
        );
        assert_eq!(params.get("Blacklist Group Name"), Some(&json!("")));
        assert_eq!(params.get("Publish"), Some(&json!(false)));
        assert_eq!(params.get("Targets"), Some(&json!([])));
    }

    #[test]
    fn descriptor_order_is_preserved() {
        let params = ScriptParameters::collect(
            &BLOCK_IP,
            &arguments(json!({
                "targets": ["gw-1"],
                "publish": true,
                "blacklist_group_name": "g"
            })),
        );
        assert_eq!(
            params.labels().collect::<Vec<_>>(),
            vec!["Blacklist Group Name", "Publish", "Targets"]
        );
    }

    #[test]
    fn empty_parameters_encode_to_empty_object() {
        let params = ScriptParameters::collect(&BLOCK_IP, &Map::new());
        assert!(params.is_empty());
        assert_eq!(params.encode(), "{}");
    }

    #[test]
    fn nested_values_survive_decoding() {
        let mut values = Map::new();
        values.insert(
            "Mail Content".into(),
            json!({"body": "hi", "content_type": "html"}),
        );
        let encoded = encode_script_parameters(values);
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["Mail Content"]["content_type"], "html");
    }

    #[test]
    fn encoding_is_compact_utf8() {
        let mut values = Map::new();
        values.insert("Message".into(), json!("Grüße \"team\""));
        values.insert("Publish".into(), json!(true));
        assert_eq!(
            encode_script_parameters(values),
            r#"{"Message":"Grüße \"team\"","Publish":true}"#
        );
    }
}
