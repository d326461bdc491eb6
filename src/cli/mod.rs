use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "ampdesk")]
#[command(about = "Status policy engine for EV service-center intakes and work orders")]
#[command(long_about = "Ampdesk gates intake and work-order actions against the service-center \
                       status workflow. Inspect the status tables, check transitions, and dry-run \
                       a full intake lifecycle with 'ampdesk simulate'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the intake status table: labels, icons, actions, and next statuses
    Statuses {
        /// Emit the table as JSON for tooling
        #[arg(long, help = "Print machine-readable JSON instead of the table")]
        json: bool,
    },
    /// List or check the actions available from an intake status
    Actions {
        /// Intake status to inspect (e.g. CHECKED_IN, inspecting)
        #[arg(long, help = "Status whose action set to show")]
        status: String,
        /// Single action to check instead of listing all of them
        #[arg(long, help = "Action to test: update, verify, finalize, or cancel")]
        action: Option<String>,
    },
    /// Validate an intake status transition
    Check {
        /// Current status
        #[arg(long, help = "Status the record holds now")]
        from: String,
        /// Proposed next status
        #[arg(long, help = "Status the record would move to")]
        to: String,
    },
    /// Show work-order statuses, optionally checking a transition
    Workorders {
        /// Current work-order status
        #[arg(long, requires = "to", help = "Status the work order holds now")]
        from: Option<String>,
        /// Proposed next status
        #[arg(long, requires = "from", help = "Status the work order would move to")]
        to: Option<String>,
    },
    /// Walk a full intake lifecycle through the dispatcher (no backend needed)
    Simulate,
}
