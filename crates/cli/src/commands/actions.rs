use clap::{Args, Subcommand};
use serde_json::{Value, json};
use soar_ops::SoarConfig;
use soar_ops::soar_core::normalize_integration_name;
use soar_ops::soar_marketplace::ActionCatalog;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct ActionsArgs {
    #[command(subcommand)]
    pub command: ActionsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ActionsCommand {
    /// List action tools.
    List {
        /// Only this integration. Defaults to the enabled integrations, or
        /// all of them when none are enabled.
        #[arg(long)]
        integration: Option<String>,
    },
    /// Show one action's description and argument schema.
    Describe {
        /// Tool name (e.g. `slack_wait_for_reply`).
        tool: String,
    },
}

pub fn run(config: &SoarConfig, args: &ActionsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        ActionsCommand::List { integration } => {
            let catalog = match integration {
                Some(name) => ActionCatalog::with_enabled([name]),
                None if config.integrations.is_empty() => ActionCatalog::builtin(),
                None => ActionCatalog::with_enabled(&config.integrations),
            };
            if let Some(name) = integration
                && catalog.is_empty()
            {
                anyhow::bail!(
                    "unknown integration '{name}' (normalized '{}')",
                    normalize_integration_name(name)
                );
            }

            match format {
                OutputFormat::Json => {
                    let tools: Vec<Value> = catalog
                        .iter()
                        .map(|(name, action)| {
                            json!({
                                "tool": name,
                                "integration": action.integration,
                                "action": action.name,
                                "description": action.description,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&tools)?);
                }
                OutputFormat::Text => {
                    println!("{} actions:", catalog.len());
                    for (name, action) in catalog.iter() {
                        println!("  {name:<48} {}", action.action_name());
                    }
                }
            }
        }
        ActionsCommand::Describe { tool } => {
            let catalog = ActionCatalog::builtin();
            let action = catalog
                .get(tool)
                .ok_or_else(|| anyhow::anyhow!("unknown tool '{tool}'"))?;
            let schema = Value::Object(action.input_schema());

            match format {
                OutputFormat::Json => {
                    let body = json!({
                        "tool": tool,
                        "integration": action.integration,
                        "action": action.name,
                        "description": action.description,
                        "input_schema": schema,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Text => {
                    println!("{tool} ({})", action.action_name());
                    println!("  {}", action.description);
                    println!("Parameters:");
                    for param in action.params {
                        let required = if param.required { "required" } else { "optional" };
                        println!(
                            "  {name} ({kind}, {required}) {desc}",
                            name = param.argument_name(),
                            kind = param.kind.expected(),
                            desc = param.description,
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
