use clap::{Args, Subcommand};
use soar_ops::soar_client::EntitySearch;
use soar_ops::{SoarConfig, build_client};

use crate::OutputFormat;
use crate::commands::cases::print_value;

#[derive(Args, Debug)]
pub struct EntitiesArgs {
    #[command(subcommand)]
    pub command: EntitiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum EntitiesCommand {
    /// Show what the platform knows about one entity.
    Show {
        /// Entity identifier (e.g. an IP address).
        identifier: String,
        /// Entity type (e.g. `ADDRESS`).
        #[arg(long = "type")]
        entity_type: String,
        #[arg(long)]
        environment: String,
    },
    /// Search entities. Every filter is optional.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free text matched against identifiers.
    term: Option<String>,
    /// Entity type (repeatable).
    #[arg(long = "type")]
    types: Vec<String>,
    #[arg(long)]
    suspicious: Option<bool>,
    #[arg(long)]
    internal: Option<bool>,
    #[arg(long)]
    enriched: Option<bool>,
    /// Network name (repeatable).
    #[arg(long = "network")]
    networks: Vec<String>,
    /// Environment name (repeatable).
    #[arg(long = "environment")]
    environments: Vec<String>,
}

impl From<&SearchArgs> for EntitySearch {
    fn from(args: &SearchArgs) -> Self {
        let non_empty = |values: &[String]| (!values.is_empty()).then(|| values.to_vec());
        EntitySearch {
            term: args.term.clone(),
            entity_types: non_empty(&args.types),
            is_suspicious: args.suspicious,
            is_internal_asset: args.internal,
            is_enriched: args.enriched,
            network_names: non_empty(&args.networks),
            environment_names: non_empty(&args.environments),
        }
    }
}

pub async fn run(
    config: &SoarConfig,
    args: &EntitiesArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let client = build_client(config)?;

    let response = match &args.command {
        EntitiesCommand::Show {
            identifier,
            entity_type,
            environment,
        } => {
            client
                .get_entity_details(identifier, entity_type, environment)
                .await?
        }
        EntitiesCommand::Search(search) => client.search_entity(&search.into()).await?,
    };

    print_value(&response, format)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: EntitiesCommand,
    }

    fn search(args: &[&str]) -> EntitySearch {
        let harness =
            Harness::try_parse_from(["entities", "search"].into_iter().chain(args.iter().copied()))
                .unwrap();
        match harness.command {
            EntitiesCommand::Search(ref search) => search.into(),
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn search_without_filters_sends_none() {
        assert_eq!(search(&[]), EntitySearch::default());
    }

    #[test]
    fn search_collects_repeated_filters() {
        let filters = search(&[
            "evil",
            "--type",
            "DOMAIN",
            "--type",
            "URL",
            "--suspicious",
            "true",
            "--environment",
            "Prod",
        ]);
        assert_eq!(
            filters,
            EntitySearch {
                term: Some("evil".into()),
                entity_types: Some(vec!["DOMAIN".into(), "URL".into()]),
                is_suspicious: Some(true),
                environment_names: Some(vec!["Prod".into()]),
                ..EntitySearch::default()
            }
        );
    }
}
