use soar_ops::SoarConfig;
use soar_ops::soar_core::normalize_integration_name;
use soar_ops::soar_marketplace::ActionCatalog;

use crate::OutputFormat;

pub fn run(config: &SoarConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let enabled: Vec<String> = config
        .integrations
        .iter()
        .map(|name| normalize_integration_name(name))
        .collect();
    let summaries = ActionCatalog::builtin().summaries();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Text => {
            println!("{} integrations available:", summaries.len());
            for summary in &summaries {
                let status = if enabled.contains(&summary.key) {
                    "ON "
                } else {
                    "OFF"
                };
                println!(
                    "  [{status}] {name} ({category}, {actions} actions)",
                    name = summary.name,
                    category = summary.category,
                    actions = summary.actions,
                );
            }
        }
    }
    Ok(())
}
