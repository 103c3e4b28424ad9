use clap::{Args, Subcommand};
use serde_json::Value;
use soar_ops::soar_client::{CaseClosure, NewCase};
use soar_ops::soar_core::{AlertId, CaseId, CasePriority, CloseReason};
use soar_ops::{SoarConfig, build_client};

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct CasesArgs {
    #[command(subcommand)]
    pub command: CasesCommand,
}

#[derive(Subcommand, Debug)]
pub enum CasesCommand {
    /// List cases.
    List {
        /// Token from a previous page.
        #[arg(long)]
        page_token: Option<String>,
    },
    /// Show a case with its alerts and comments.
    Show {
        /// Case ID.
        case_id: String,
    },
    /// List the alerts of a case.
    Alerts {
        /// Case ID.
        case_id: String,
        /// Token from a previous page.
        #[arg(long)]
        page_token: Option<String>,
        /// Only print alert group identifiers.
        #[arg(long)]
        groups: bool,
    },
    /// Add a comment to a case.
    Comment {
        /// Case ID.
        case_id: String,
        /// Comment text.
        comment: String,
    },
    /// Change the priority of a case.
    Priority {
        /// Case ID.
        case_id: String,
        /// New priority (e.g. `high` or `PriorityHigh`).
        priority: CasePriority,
    },
    /// Create a case.
    Create {
        /// Case title.
        name: String,
        #[arg(long)]
        priority: Option<CasePriority>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        environment: Option<String>,
    },
    /// Replace the description of a case.
    Describe {
        /// Case ID.
        case_id: String,
        description: String,
    },
    /// Close a case.
    Close {
        /// Case ID.
        case_id: String,
        /// Malicious, NotMalicious, Maintenance or Inconclusive.
        #[arg(long)]
        reason: CloseReason,
        #[arg(long)]
        root_cause: String,
        #[arg(long)]
        comment: String,
        /// Tag to apply on close (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Assign a user to a case.
    Assign {
        /// Case ID.
        case_id: String,
        /// User name or email.
        user: String,
    },
    /// Move a case to another stage.
    Stage {
        /// Case ID.
        case_id: String,
        stage: String,
    },
    /// Add or remove a case tag.
    Tag {
        /// Case ID.
        case_id: String,
        tag: String,
        /// Remove the tag instead of adding it.
        #[arg(long)]
        remove: bool,
    },
    /// List the events behind one alert.
    Events {
        /// Case ID.
        case_id: String,
        /// Alert ID.
        alert_id: String,
        /// Token from a previous page.
        #[arg(long)]
        page_token: Option<String>,
    },
    /// List the entities of the given alert groups.
    Entities {
        /// Case ID.
        case_id: String,
        /// Alert group identifier (repeatable).
        #[arg(long = "alert-group", required = true)]
        alert_groups: Vec<String>,
    },
}

pub async fn run(config: &SoarConfig, args: &CasesArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let client = build_client(config)?;

    let response = match &args.command {
        CasesCommand::List { page_token } => client.list_cases(page_token.as_deref()).await?,
        CasesCommand::Show { case_id } => {
            let details = client.get_case_full_details(&CaseId::new(case_id)).await?;
            serde_json::to_value(details)?
        }
        CasesCommand::Alerts {
            case_id,
            page_token,
            groups,
        } => {
            let case_id = CaseId::new(case_id);
            if *groups {
                client
                    .list_alert_group_identifiers_by_case(&case_id, page_token.as_deref())
                    .await?
            } else {
                client
                    .list_alerts_by_case(&case_id, page_token.as_deref())
                    .await?
            }
        }
        CasesCommand::Comment { case_id, comment } => {
            let response = client
                .post_case_comment(&CaseId::new(case_id), comment)
                .await?;
            if let OutputFormat::Text = format {
                println!("Comment added to case {case_id}.");
                return Ok(());
            }
            response
        }
        CasesCommand::Priority { case_id, priority } => {
            let response = client
                .change_case_priority(&CaseId::new(case_id), *priority)
                .await?;
            if let OutputFormat::Text = format {
                println!("Case {case_id} priority set to {priority}.");
                return Ok(());
            }
            response
        }
        CasesCommand::Create {
            name,
            priority,
            description,
            environment,
        } => {
            let case = new_case(
                name,
                *priority,
                description.as_deref(),
                environment.as_deref(),
            );
            client.create_case(&case).await?
        }
        CasesCommand::Describe {
            case_id,
            description,
        } => {
            client
                .update_case_description(&CaseId::new(case_id), description)
                .await?
        }
        CasesCommand::Close {
            case_id,
            reason,
            root_cause,
            comment,
            tags,
        } => {
            let closure = CaseClosure {
                root_cause: root_cause.clone(),
                comment: comment.clone(),
                reason: *reason,
                tags: (!tags.is_empty()).then(|| tags.join(",")),
            };
            client.close_case(&CaseId::new(case_id), &closure).await?
        }
        CasesCommand::Assign { case_id, user } => {
            client.assign_case(&CaseId::new(case_id), user).await?
        }
        CasesCommand::Stage { case_id, stage } => {
            client.change_case_stage(&CaseId::new(case_id), stage).await?
        }
        CasesCommand::Tag {
            case_id,
            tag,
            remove,
        } => {
            let case_id = CaseId::new(case_id);
            if *remove {
                client.remove_case_tag(&case_id, tag).await?
            } else {
                client.add_case_tag(&case_id, tag).await?
            }
        }
        CasesCommand::Events {
            case_id,
            alert_id,
            page_token,
        } => {
            client
                .list_events_by_alert(
                    &CaseId::new(case_id),
                    &AlertId::new(alert_id),
                    page_token.as_deref(),
                )
                .await?
        }
        CasesCommand::Entities {
            case_id,
            alert_groups,
        } => {
            client
                .get_entities_by_alert_group_identifiers(&CaseId::new(case_id), alert_groups)
                .await?
        }
    };

    print_value(&response, format)
}

fn new_case(
    name: &str,
    priority: Option<CasePriority>,
    description: Option<&str>,
    environment: Option<&str>,
) -> NewCase {
    let mut case = NewCase::new(name);
    if let Some(priority) = priority {
        case = case.with_priority(priority);
    }
    if let Some(description) = description {
        case = case.with_description(description);
    }
    if let Some(environment) = environment {
        case = case.with_environment(environment);
    }
    case
}

pub(crate) fn print_value(value: &Value, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: CasesCommand,
    }

    fn parse(args: &[&str]) -> Result<CasesCommand, clap::Error> {
        Harness::try_parse_from(std::iter::once("cases").chain(args.iter().copied()))
            .map(|h| h.command)
    }

    #[test]
    fn close_reason_parses_loosely() {
        let command = parse(&[
            "close",
            "12",
            "--reason",
            "not-malicious",
            "--root-cause",
            "Scanner",
            "--comment",
            "Internal scan.",
            "--tag",
            "scanner",
            "--tag",
            "internal",
        ])
        .unwrap();
        match command {
            CasesCommand::Close { reason, tags, .. } => {
                assert_eq!(reason, CloseReason::NotMalicious);
                assert_eq!(tags, ["scanner", "internal"]);
            }
            other => panic!("expected close, got {other:?}"),
        }
        assert!(
            parse(&[
                "close",
                "12",
                "--reason",
                "resolved",
                "--root-cause",
                "x",
                "--comment",
                "y",
            ])
            .is_err()
        );
    }

    #[test]
    fn entities_need_an_alert_group() {
        assert!(parse(&["entities", "12"]).is_err());
        assert!(parse(&["entities", "12", "--alert-group", "g1"]).is_ok());
    }

    #[test]
    fn new_case_keeps_only_given_fields() {
        let case = new_case("Beaconing", Some(CasePriority::PriorityLow), None, Some("Prod"));
        assert_eq!(
            case,
            NewCase::new("Beaconing")
                .with_priority(CasePriority::PriorityLow)
                .with_environment("Prod")
        );
    }
}
