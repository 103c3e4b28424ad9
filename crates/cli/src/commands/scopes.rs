use soar_ops::{SoarConfig, build_client};

use crate::OutputFormat;

pub async fn run(config: &SoarConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let mut scopes = client.get_scopes().await?;
    scopes.sort();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scopes)?);
        }
        OutputFormat::Text => {
            println!("{} scopes:", scopes.len());
            for scope in &scopes {
                println!("  {scope}");
            }
        }
    }
    Ok(())
}
