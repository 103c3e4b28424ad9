use anyhow::Context;
use clap::Args;
use serde_json::{Map, Value, json};
use soar_ops::soar_core::{ActionDescriptor, ParamKind};
use soar_ops::soar_marketplace::ActionCatalog;
use soar_ops::{OpsError, SoarConfig, SoarOps};

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Tool name (e.g. `slack_wait_for_reply`).
    pub tool: String,

    /// Case ID.
    #[arg(long)]
    pub case_id: String,

    /// Alert group identifier (repeatable).
    #[arg(long = "alert-group")]
    pub alert_groups: Vec<String>,

    /// Predefined scope to run the action on.
    #[arg(long)]
    pub scope: Option<String>,

    /// Target entity as `IDENTIFIER:ENTITY_TYPE` (repeatable). Overrides the scope.
    #[arg(long = "entity")]
    pub entities: Vec<String>,

    /// Action parameters as a JSON object.
    #[arg(long)]
    pub args: Option<String>,

    /// Action parameters as `name=value` pairs. String parameters take the
    /// value verbatim; other values are read as JSON when they parse.
    pub params: Vec<String>,
}

pub async fn run(config: &SoarConfig, args: &InvokeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let arguments = build_arguments(args)?;
    let ops = SoarOps::connect(config).await?;

    let outcome = match ops.invoke_tool(&args.tool, &arguments).await {
        Ok(outcome) => outcome,
        Err(OpsError::UnknownTool(name)) => anyhow::bail!(
            "unknown tool '{name}'; enable its integration with --integrations or SOAR_INTEGRATIONS"
        ),
        Err(e) => return Err(e.into()),
    };

    let completed = outcome.is_completed();
    let payload = outcome.into_tool_payload();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            if completed {
                println!("Action '{}' submitted.", args.tool);
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                eprintln!(
                    "Action '{}' failed [{}]: {}",
                    args.tool,
                    payload["Code"].as_str().unwrap_or_default(),
                    payload["Message"].as_str().unwrap_or_default(),
                );
            }
        }
    }

    if !completed {
        std::process::exit(1);
    }
    Ok(())
}

/// Merge the command-line flags into one tool argument object.
fn build_arguments(args: &InvokeArgs) -> anyhow::Result<Map<String, Value>> {
    let mut arguments = match args.args {
        Some(ref raw) => match serde_json::from_str(raw).context("--args is not valid JSON")? {
            Value::Object(map) => map,
            _ => anyhow::bail!("--args must be a JSON object"),
        },
        None => Map::new(),
    };

    let catalog = ActionCatalog::builtin();
    let descriptor = catalog.get(&args.tool);
    for pair in &args.params {
        let (name, value) = parse_param(descriptor, pair)?;
        arguments.insert(name, value);
    }

    arguments.insert("case_id".into(), Value::from(args.case_id.clone()));
    arguments.insert("alert_group_identifiers".into(), json!(args.alert_groups));
    if let Some(ref scope) = args.scope {
        arguments.insert("scope".into(), Value::from(scope.clone()));
    }
    if !args.entities.is_empty() {
        let entities = args
            .entities
            .iter()
            .map(String::as_str)
            .map(parse_entity)
            .collect::<anyhow::Result<Vec<_>>>()?;
        arguments.insert("target_entities".into(), Value::Array(entities));
    }

    Ok(arguments)
}

fn parse_param(
    descriptor: Option<&ActionDescriptor>,
    pair: &str,
) -> anyhow::Result<(String, Value)> {
    let (name, raw) = pair
        .split_once('=')
        .with_context(|| format!("expected name=value, got '{pair}'"))?;
    let name = name.trim();
    let kind = descriptor.and_then(|d| d.param(name)).map(|p| p.kind);
    let value = match kind {
        Some(ParamKind::String) => Value::from(raw),
        _ => serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw)),
    };
    Ok((name.to_owned(), value))
}

fn parse_entity(raw: &str) -> anyhow::Result<Value> {
    let (identifier, entity_type) = raw
        .rsplit_once(':')
        .with_context(|| format!("expected IDENTIFIER:ENTITY_TYPE, got '{raw}'"))?;
    Ok(json!({ "Identifier": identifier, "EntityType": entity_type }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> InvokeArgs {
        InvokeArgs {
            tool: "slack_wait_for_reply".into(),
            case_id: "42".into(),
            alert_groups: vec!["g1".into()],
            scope: None,
            entities: Vec::new(),
            args: None,
            params: Vec::new(),
        }
    }

    fn wait_for_reply() -> Option<&'static ActionDescriptor> {
        ActionCatalog::builtin().get("slack_wait_for_reply")
    }

    #[test]
    fn params_follow_descriptor_kinds() {
        let descriptor = wait_for_reply();
        assert!(descriptor.is_some());
        assert_eq!(
            parse_param(descriptor, "wait_for_multiple_replies=true").unwrap(),
            ("wait_for_multiple_replies".into(), Value::Bool(true))
        );
        assert_eq!(
            parse_param(descriptor, "channel=#soc").unwrap(),
            ("channel".into(), Value::from("#soc"))
        );
        assert_eq!(
            parse_param(descriptor, "channel_id=123").unwrap(),
            ("channel_id".into(), Value::from("123"))
        );
        assert_eq!(
            parse_param(descriptor, "message_timestamp=1712345678.000100").unwrap(),
            ("message_timestamp".into(), Value::from("1712345678.000100"))
        );
        assert!(parse_param(descriptor, "channel").is_err());
    }

    #[test]
    fn unknown_params_fall_back_to_json() {
        assert_eq!(
            parse_param(wait_for_reply(), "extra=42").unwrap(),
            ("extra".into(), Value::from(42))
        );
        assert_eq!(
            parse_param(None, "channel_id=123").unwrap(),
            ("channel_id".into(), Value::from(123))
        );
        assert_eq!(
            parse_param(None, "query=a=b").unwrap(),
            ("query".into(), Value::from("a=b"))
        );
    }

    #[test]
    fn entities_split_on_last_colon() {
        assert_eq!(
            parse_entity("fe80::1:ADDRESS").unwrap(),
            json!({"Identifier": "fe80::1", "EntityType": "ADDRESS"})
        );
        assert!(parse_entity("host").is_err());
    }

    #[test]
    fn flags_override_json_arguments() {
        let mut invoke = args();
        invoke.args = Some(r#"{"case_id": "1", "message": "hi"}"#.into());
        invoke.params = vec!["channel=soc".into(), "channel_id=00123".into()];
        invoke.entities = vec!["host-1:HOSTNAME".into()];

        let arguments = build_arguments(&invoke).unwrap();
        assert_eq!(arguments["case_id"], "42");
        assert_eq!(arguments["message"], "hi");
        assert_eq!(arguments["channel"], "soc");
        assert_eq!(arguments["channel_id"], "00123");
        assert_eq!(arguments["alert_group_identifiers"], json!(["g1"]));
        assert_eq!(
            arguments["target_entities"],
            json!([{"Identifier": "host-1", "EntityType": "HOSTNAME"}])
        );
        assert!(!arguments.contains_key("scope"));
    }

    #[test]
    fn args_must_be_an_object() {
        let mut invoke = args();
        invoke.args = Some("[1, 2]".into());
        assert!(build_arguments(&invoke).is_err());
    }
}
