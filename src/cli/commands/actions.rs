use anyhow::Result;

use super::{parse_intake_action, parse_intake_status};
use crate::intake::ActionOutcome;

pub struct ActionsCommand {
    pub status: String,
    pub action: Option<String>,
}

impl ActionsCommand {
    pub fn new(status: String, action: Option<String>) -> Self {
        Self { status, action }
    }

    pub fn execute(&self) -> Result<()> {
        let status = parse_intake_status(&self.status)?;
        let config = status.config();

        if let Some(raw) = &self.action {
            let action = parse_intake_action(raw)?;
            match action.outcome(status) {
                Ok(ActionOutcome::Unchanged(_)) => {
                    println!("✅ {action} is allowed from {} (status unchanged)", config.label);
                }
                Ok(ActionOutcome::Transition(next)) => {
                    println!(
                        "✅ {action} is allowed from {} -> {}",
                        config.label,
                        next.config().label
                    );
                }
                Err(refusal) => {
                    println!("❌ {refusal}");
                }
            }
            return Ok(());
        }

        println!(
            "{} {} {} ({})",
            config.tone.glyph(),
            config.icon,
            config.label,
            status.as_str()
        );
        if config.actions.is_empty() {
            println!("   No actions available - terminal status");
        } else {
            for action in config.actions {
                match action.outcome(status) {
                    Ok(ActionOutcome::Unchanged(_)) => println!("   {action} (edits in place)"),
                    Ok(ActionOutcome::Transition(next)) => {
                        println!("   {action} -> {}", next.as_str())
                    }
                    // Listed actions always resolve; kept for exhaustiveness.
                    Err(refusal) => println!("   {action}: {refusal}"),
                }
            }
        }
        Ok(())
    }
}
