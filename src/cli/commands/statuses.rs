use anyhow::Result;
use serde::Serialize;

use crate::intake::{IntakeStatus, StatusConfig};

pub struct StatusesCommand {
    pub json: bool,
}

#[derive(Serialize)]
struct StatusRow {
    status: &'static str,
    #[serde(flatten)]
    config: &'static StatusConfig,
    next_statuses: Vec<&'static str>,
    terminal: bool,
}

impl StatusesCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn execute(&self) -> Result<()> {
        if self.json {
            let rows: Vec<StatusRow> = IntakeStatus::ALL
                .iter()
                .map(|status| StatusRow {
                    status: status.as_str(),
                    config: status.config(),
                    next_statuses: status.next_statuses().iter().map(|s| s.as_str()).collect(),
                    terminal: status.is_terminal(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        println!("🚗 INTAKE STATUS TABLE");
        println!("======================");
        println!();
        for status in IntakeStatus::ALL {
            let config = status.config();
            println!(
                "{} {} {} ({})",
                config.tone.glyph(),
                config.icon,
                config.label,
                status.as_str()
            );
            println!("   {}", config.description);

            if config.actions.is_empty() {
                println!("   Actions: none (terminal)");
            } else {
                let actions: Vec<&str> = config.actions.iter().map(|a| a.as_str()).collect();
                println!("   Actions: {}", actions.join(", "));
            }

            if !status.next_statuses().is_empty() {
                let next: Vec<&str> = status.next_statuses().iter().map(|s| s.as_str()).collect();
                println!("   Next: {}", next.join(", "));
            }
            println!();
        }
        Ok(())
    }
}
