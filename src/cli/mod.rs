pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "casedesk")]
#[command(about = "Casedesk CLI - query the capability matrix and case workflow offline")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check whether a role may perform an action on a resource")]
    Can {
        #[arg(help = "Role (VIEWER, OPERATOR, MANAGER, ADMIN)")]
        role: String,
        #[arg(help = "Resource (cases, documents, tasks, ...)")]
        resource: String,
        #[arg(help = "Action (read, create, update, delete, approve, ...)")]
        action: String,
    },

    #[command(about = "Print the capability matrix")]
    Matrix {
        #[arg(long, help = "Only this role")]
        role: Option<String>,
    },

    #[command(about = "List the statuses a role may move a case to")]
    Next {
        #[arg(help = "Role")]
        role: String,
        #[arg(help = "Current case status")]
        status: String,
    },

    #[command(about = "Check a single status transition (exits non-zero when forbidden)")]
    Check {
        #[arg(help = "Role")]
        role: String,
        #[arg(help = "Current case status")]
        from: String,
        #[arg(help = "Desired case status")]
        to: String,
    },

    #[command(about = "Print the case status graph with edge tiers")]
    Graph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Can {
            role,
            resource,
            action,
        } => commands::policy::can(&role, &resource, &action, &output_format),
        Commands::Matrix { role } => commands::policy::matrix(role.as_deref(), &output_format),
        Commands::Next { role, status } => commands::workflow::next(&role, &status, &output_format),
        Commands::Check { role, from, to } => {
            commands::workflow::check(&role, &from, &to, &output_format)
        }
        Commands::Graph => commands::workflow::graph(&output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from(["casedesk", "--json", "check", "OPERATOR", "ASSIGNED", "IN_PROGRESS"])
            .unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Check { role, from, to } => {
                assert_eq!(role, "OPERATOR");
                assert_eq!(from, "ASSIGNED");
                assert_eq!(to, "IN_PROGRESS");
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_run_rejects_unknown_role() {
        let cli = Cli::try_parse_from(["casedesk", "can", "ROOT", "cases", "read"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "Unknown role: ROOT");
    }
}
