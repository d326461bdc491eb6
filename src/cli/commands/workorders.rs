use anyhow::Result;

use crate::workorder::{WorkOrderPolicy, WorkOrderStatus};

pub struct WorkordersCommand {
    pub from: Option<String>,
    pub to: Option<String>,
    pub policy: WorkOrderPolicy,
}

impl WorkordersCommand {
    pub fn new(from: Option<String>, to: Option<String>, policy: WorkOrderPolicy) -> Self {
        Self { from, to, policy }
    }

    pub fn execute(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            let from: WorkOrderStatus = from.parse()?;
            let to: WorkOrderStatus = to.parse()?;
            self.policy.validate(from, to)?;
            if self.policy.enforce_transitions {
                println!("✅ {} -> {} is a valid work order transition", from, to);
            } else {
                println!(
                    "✅ {} -> {} accepted (transition enforcement is off; \
                     set workorders.enforce = true to apply the workflow table)",
                    from, to
                );
            }
            return Ok(());
        }

        println!("🔧 WORK ORDER STATUSES");
        println!("======================");
        println!(
            "   Transition enforcement: {}",
            if self.policy.enforce_transitions {
                "on"
            } else {
                "off (any status may be set)"
            }
        );
        println!();
        for status in WorkOrderStatus::ALL {
            println!(
                "{} {} {} ({})",
                status.tone().glyph(),
                status.icon(),
                status.label(),
                status.as_str()
            );
            if self.policy.enforce_transitions {
                let next = status.inferred_next_statuses();
                if next.is_empty() {
                    println!("   Next: none (terminal)");
                } else {
                    let names: Vec<&str> = next.iter().map(|s| s.as_str()).collect();
                    println!("   Next: {}", names.join(", "));
                }
            }
        }
        Ok(())
    }
}
