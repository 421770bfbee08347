//! Console for the workflow approval service.
//!
//! Terminal counterpart of the original browser dashboard: create workflows,
//! inspect stats and recent activity, and decide pending approvals. Every
//! backend call runs through the lifecycle controller, so the cold-start
//! disclosure applies to all commands uniformly.

use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, Subcommand};

use approval_console::api::types::{
    ApprovalDecision, NewWorkflow, RiskLevel, Workflow, WorkflowStatus, WorkflowType,
};
use approval_console::api::{ApiClient, ApiError};
use approval_console::config::{load_or_default, ConsoleConfig};
use approval_console::dashboard::{recent_activity, DashboardStats, RECENT_LIMIT};
use approval_console::lifecycle::LifecycleController;
use approval_console::observability::init_logging;

#[derive(Parser)]
#[command(name = "approval-console")]
#[command(about = "Console for the workflow approval service", long_about = None)]
struct Cli {
    /// Override the API base URL from the config file.
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show workflow stats and recent activity
    Dashboard,
    /// Create a new workflow
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// deployment, email_campaign, financial_transaction, code_review or other
        #[arg(long = "type", default_value = "other")]
        kind: String,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        risk: String,
    },
    /// List all workflows
    List,
    /// Show a single workflow
    Show { id: String },
    /// Change a workflow's status
    SetStatus { id: String, status: String },
    /// Delete a workflow
    Delete { id: String },
    /// List approvals awaiting a decision
    Pending,
    /// Approve a pending item
    Approve {
        id: String,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Reject a pending item
    Reject {
        id: String,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = cli.url {
        config.api.base_url = url;
    }

    init_logging(&config.observability);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The message is already classified and user-safe.
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &ConsoleConfig) -> Result<(), ApiError> {
    let client = ApiClient::new(&config.api)?;
    let mut lifecycle =
        LifecycleController::new(Duration::from_secs(config.api.slow_warning_secs));

    match command {
        Commands::Dashboard => {
            let workflows = call(&mut lifecycle, client.list_workflows()).await?;
            let stats = DashboardStats::from_workflows(&workflows);

            println!("Workflows");
            println!("  total:    {}", stats.total);
            println!("  pending:  {}", stats.pending);
            println!("  approved: {}", stats.approved);
            println!("  rejected: {}", stats.rejected);

            let recent = recent_activity(&workflows, RECENT_LIMIT, Utc::now());
            println!();
            println!("Recent activity");
            if recent.is_empty() {
                println!("  (none yet)");
            }
            for entry in recent {
                println!("  {:<30} {:<10} {}", entry.name, entry.status, entry.time);
            }
        }
        Commands::Create {
            name,
            description,
            kind,
            risk,
        } => {
            let kind: WorkflowType = kind.parse().map_err(ApiError::Unknown)?;
            let risk: RiskLevel = risk.parse().map_err(ApiError::Unknown)?;
            let new = NewWorkflow {
                name,
                description,
                kind,
                risk_level: risk,
            };
            let workflow = call(&mut lifecycle, client.create_workflow(&new)).await?;
            println!("Workflow created:");
            print_workflow(&workflow);
        }
        Commands::List => {
            let workflows = call(&mut lifecycle, client.list_workflows()).await?;
            for workflow in &workflows {
                println!(
                    "{}  {:<30} {:<10} {:<6} {}",
                    workflow.id,
                    workflow.name,
                    workflow.status.display_label(),
                    workflow.risk_level,
                    workflow.kind
                );
            }
        }
        Commands::Show { id } => {
            let workflow = call(&mut lifecycle, client.get_workflow(&id)).await?;
            print_workflow(&workflow);
        }
        Commands::SetStatus { id, status } => {
            let status: WorkflowStatus = status.parse().map_err(ApiError::Unknown)?;
            let workflow = call(&mut lifecycle, client.update_status(&id, status)).await?;
            println!("Status updated:");
            print_workflow(&workflow);
        }
        Commands::Delete { id } => {
            call(&mut lifecycle, client.delete_workflow(&id)).await?;
            println!("Workflow {} deleted", id);
        }
        Commands::Pending => {
            let approvals = call(&mut lifecycle, client.pending_approvals()).await?;
            if approvals.is_empty() {
                println!("No pending approvals");
            }
            for approval in &approvals {
                println!(
                    "{}  workflow {}  {}",
                    approval.id,
                    approval.workflow_id,
                    approval.status.display_label()
                );
            }
        }
        Commands::Approve { id, comment } => {
            let decision = ApprovalDecision {
                comment,
                ..ApprovalDecision::default()
            };
            let approval = call(&mut lifecycle, client.approve(&id, &decision)).await?;
            println!(
                "Approved {} (workflow {})",
                approval.id, approval.workflow_id
            );
        }
        Commands::Reject { id, comment } => {
            let decision = ApprovalDecision {
                comment,
                ..ApprovalDecision::default()
            };
            let approval = call(&mut lifecycle, client.reject(&id, &decision)).await?;
            println!(
                "Rejected {} (workflow {})",
                approval.id, approval.workflow_id
            );
        }
    }

    Ok(())
}

/// Run one API call through the lifecycle controller with the console's
/// slow-backend disclosure.
async fn call<T>(
    lifecycle: &mut LifecycleController,
    operation: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    lifecycle
        .run(
            operation,
            || {
                eprintln!(
                    "Still waiting... the server may be waking up from sleep. \
                     This can take 30-50 seconds on the first request."
                );
            },
            || {},
        )
        .await
}

fn print_workflow(workflow: &Workflow) {
    println!("  id:          {}", workflow.id);
    println!("  name:        {}", workflow.name);
    println!("  description: {}", workflow.description);
    println!("  type:        {}", workflow.kind);
    println!("  risk:        {}", workflow.risk_level);
    println!("  status:      {}", workflow.status.display_label());
    println!("  created:     {}", workflow.created_at.to_rfc3339());
    if let Some(updated_at) = workflow.updated_at {
        println!("  updated:     {}", updated_at.to_rfc3339());
    }
}
