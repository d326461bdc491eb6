use anyhow::Result;
use clap::Parser;

use ampdesk::cli::commands::{
    actions::ActionsCommand, check::CheckCommand, simulate::SimulateCommand,
    statuses::StatusesCommand, workorders::WorkordersCommand,
};
use ampdesk::cli::{Cli, Commands};
use ampdesk::config::SessionContext;
use ampdesk::telemetry::{init_telemetry, shutdown_telemetry};
use ampdesk::workorder::WorkOrderPolicy;

fn main() -> Result<()> {
    let session = SessionContext::bootstrap()?;
    init_telemetry(
        &session.config.observability.level,
        session.config.observability.json,
    )?;
    tracing::debug!(session.id = %session.session_id, "Session started");

    let cli = Cli::parse();
    let result = match cli.command {
        None => show_how_to_use(),
        Some(Commands::Statuses { json }) => StatusesCommand::new(json).execute(),
        Some(Commands::Actions { status, action }) => {
            ActionsCommand::new(status, action).execute()
        }
        Some(Commands::Check { from, to }) => CheckCommand::new(from, to).execute(),
        Some(Commands::Workorders { from, to }) => WorkordersCommand::new(
            from,
            to,
            WorkOrderPolicy::new(session.config.workorders.enforce),
        )
        .execute(),
        Some(Commands::Simulate) => tokio::runtime::Runtime::new()?
            .block_on(async { SimulateCommand::new().execute().await }),
    };

    session.shutdown();
    shutdown_telemetry();
    result
}

fn show_how_to_use() -> Result<()> {
    println!("🚗 Ampdesk - EV Service-Center Status Engine");
    println!();
    println!("To get started:");
    println!("  📋 ampdesk statuses    # See the intake status table");
    println!("  🎛️  ampdesk actions     # List actions legal from a status");
    println!("  ✅ ampdesk check       # Validate a status transition");
    println!("  🔧 ampdesk workorders  # See work-order statuses");
    println!("  🧪 ampdesk simulate    # Dry-run a full intake lifecycle");
    println!();
    println!("💡 Try 'ampdesk statuses' first!");
    Ok(())
}
