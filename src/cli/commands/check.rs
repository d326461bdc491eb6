use anyhow::Result;

use super::parse_intake_status;
use crate::intake::validate_transition;

pub struct CheckCommand {
    pub from: String,
    pub to: String,
}

impl CheckCommand {
    pub fn new(from: String, to: String) -> Self {
        Self { from, to }
    }

    /// Errors (and exits nonzero) on an illegal transition so the command
    /// works in scripts.
    pub fn execute(&self) -> Result<()> {
        let from = parse_intake_status(&self.from)?;
        let to = parse_intake_status(&self.to)?;

        validate_transition(from, to)?;
        println!(
            "✅ {} -> {} is a valid intake transition",
            from.as_str(),
            to.as_str()
        );
        Ok(())
    }
}
