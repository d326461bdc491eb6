use anyhow::{bail, Result};

use crate::intake::{IntakeAction, IntakeStatus};

pub mod actions;
pub mod check;
pub mod simulate;
pub mod statuses;
pub mod workorders;

/// Parse CLI status input, keeping the typed error's message.
pub fn parse_intake_status(input: &str) -> Result<IntakeStatus> {
    input.parse::<IntakeStatus>().map_err(Into::into)
}

pub fn parse_intake_action(input: &str) -> Result<IntakeAction> {
    match input.trim().to_lowercase().as_str() {
        "update" => Ok(IntakeAction::Update),
        "verify" => Ok(IntakeAction::Verify),
        "finalize" => Ok(IntakeAction::Finalize),
        "cancel" => Ok(IntakeAction::Cancel),
        other => bail!("Unknown intake action: {other} (expected update, verify, finalize, or cancel)"),
    }
}
