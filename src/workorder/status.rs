use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::intake::StatusTone;

/// Lifecycle status of a technician work order.
///
/// Unlike intakes, the backend does not enforce a transition table for work
/// orders today - any status may be written. `WorkOrderPolicy` mirrors that
/// default and carries an opt-in table inferred from the shop's repair
/// workflow for deployments that want it enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    Draft,
    AwaitingApproval,
    Approved,
    InProgress,
    Paused,
    WaitingParts,
    #[serde(rename = "QA")]
    Qa,
    Revised,
    Rejected,
    Completed,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 10] = [
        WorkOrderStatus::Draft,
        WorkOrderStatus::AwaitingApproval,
        WorkOrderStatus::Approved,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Paused,
        WorkOrderStatus::WaitingParts,
        WorkOrderStatus::Qa,
        WorkOrderStatus::Revised,
        WorkOrderStatus::Rejected,
        WorkOrderStatus::Completed,
    ];

    /// Wire-format name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "Draft",
            WorkOrderStatus::AwaitingApproval => "AwaitingApproval",
            WorkOrderStatus::Approved => "Approved",
            WorkOrderStatus::InProgress => "InProgress",
            WorkOrderStatus::Paused => "Paused",
            WorkOrderStatus::WaitingParts => "WaitingParts",
            WorkOrderStatus::Qa => "QA",
            WorkOrderStatus::Revised => "Revised",
            WorkOrderStatus::Rejected => "Rejected",
            WorkOrderStatus::Completed => "Completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "Draft",
            WorkOrderStatus::AwaitingApproval => "Awaiting Approval",
            WorkOrderStatus::Approved => "Approved",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Paused => "Paused",
            WorkOrderStatus::WaitingParts => "Waiting for Parts",
            WorkOrderStatus::Qa => "Quality Check",
            WorkOrderStatus::Revised => "Revised",
            WorkOrderStatus::Rejected => "Rejected",
            WorkOrderStatus::Completed => "Completed",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            WorkOrderStatus::Draft | WorkOrderStatus::Revised => StatusTone::Slate,
            WorkOrderStatus::AwaitingApproval
            | WorkOrderStatus::Paused
            | WorkOrderStatus::WaitingParts => StatusTone::Amber,
            WorkOrderStatus::Approved | WorkOrderStatus::InProgress | WorkOrderStatus::Qa => {
                StatusTone::Blue
            }
            WorkOrderStatus::Rejected => StatusTone::Red,
            WorkOrderStatus::Completed => StatusTone::Green,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WorkOrderStatus::Draft => "📝",
            WorkOrderStatus::AwaitingApproval => "⏳",
            WorkOrderStatus::Approved => "👍",
            WorkOrderStatus::InProgress => "🔧",
            WorkOrderStatus::Paused => "⏸️",
            WorkOrderStatus::WaitingParts => "📦",
            WorkOrderStatus::Qa => "🔬",
            WorkOrderStatus::Revised => "♻️",
            WorkOrderStatus::Rejected => "❌",
            WorkOrderStatus::Completed => "🏁",
        }
    }

    /// Only completed work orders are closed for good; a rejected one can be
    /// redrafted.
    pub fn is_terminal(self) -> bool {
        matches!(self, WorkOrderStatus::Completed)
    }

    /// Transition targets inferred from the shop's repair workflow. Only
    /// consulted when enforcement is switched on.
    pub fn inferred_next_statuses(self) -> &'static [WorkOrderStatus] {
        match self {
            WorkOrderStatus::Draft => &[WorkOrderStatus::AwaitingApproval],
            WorkOrderStatus::AwaitingApproval => {
                &[WorkOrderStatus::Approved, WorkOrderStatus::Rejected]
            }
            WorkOrderStatus::Approved => &[WorkOrderStatus::InProgress],
            WorkOrderStatus::InProgress => &[
                WorkOrderStatus::Paused,
                WorkOrderStatus::WaitingParts,
                WorkOrderStatus::Qa,
            ],
            WorkOrderStatus::Paused => &[WorkOrderStatus::InProgress],
            WorkOrderStatus::WaitingParts => &[WorkOrderStatus::InProgress],
            WorkOrderStatus::Qa => &[WorkOrderStatus::Completed, WorkOrderStatus::Revised],
            WorkOrderStatus::Revised => &[WorkOrderStatus::InProgress],
            WorkOrderStatus::Rejected => &[WorkOrderStatus::Draft],
            WorkOrderStatus::Completed => &[],
        }
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkOrderStatus {
    type Err = WorkOrderPolicyError;

    /// Case-insensitive; separators and spaces are ignored so both
    /// `waiting-parts` and `WaitingParts` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|&c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        WorkOrderStatus::ALL
            .iter()
            .find(|status| status.as_str().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| WorkOrderPolicyError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum WorkOrderPolicyError {
    #[error("Invalid work order transition: {from} -> {to}")]
    InvalidTransition {
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    },

    #[error("Unknown work order status: {0}")]
    UnknownStatus(String),
}

/// Transition policy for work orders.
///
/// With `enforce_transitions` off (the default, matching the backend's
/// current behavior) every move is permitted and merely logged. Switching it
/// on applies the inferred table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkOrderPolicy {
    pub enforce_transitions: bool,
}

impl WorkOrderPolicy {
    pub fn new(enforce_transitions: bool) -> Self {
        Self {
            enforce_transitions,
        }
    }

    pub fn validate(
        &self,
        from: WorkOrderStatus,
        to: WorkOrderStatus,
    ) -> Result<(), WorkOrderPolicyError> {
        if !self.enforce_transitions {
            debug!(%from, %to, "Work order transition accepted (enforcement off)");
            return Ok(());
        }
        if from.inferred_next_statuses().contains(&to) {
            Ok(())
        } else {
            Err(WorkOrderPolicyError::InvalidTransition { from, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_policy_accepts_any_move() {
        let policy = WorkOrderPolicy::default();
        for from in WorkOrderStatus::ALL {
            for to in WorkOrderStatus::ALL {
                assert!(policy.validate(from, to).is_ok());
            }
        }
    }

    #[test]
    fn enforced_policy_follows_the_inferred_table() {
        let policy = WorkOrderPolicy::new(true);
        assert!(policy
            .validate(WorkOrderStatus::Qa, WorkOrderStatus::Completed)
            .is_ok());
        assert!(policy
            .validate(WorkOrderStatus::Paused, WorkOrderStatus::InProgress)
            .is_ok());
        assert!(matches!(
            policy.validate(WorkOrderStatus::Draft, WorkOrderStatus::Completed),
            Err(WorkOrderPolicyError::InvalidTransition { .. })
        ));
        // Completed is terminal under enforcement.
        for to in WorkOrderStatus::ALL {
            assert!(policy.validate(WorkOrderStatus::Completed, to).is_err());
        }
    }

    #[test]
    fn qa_uses_the_legacy_wire_name() {
        assert_eq!(
            serde_json::to_string(&WorkOrderStatus::Qa).unwrap(),
            "\"QA\""
        );
        assert_eq!("qa".parse::<WorkOrderStatus>().unwrap(), WorkOrderStatus::Qa);
        assert_eq!(
            "waiting-parts".parse::<WorkOrderStatus>().unwrap(),
            WorkOrderStatus::WaitingParts
        );
        assert!("Shipped".parse::<WorkOrderStatus>().is_err());
    }
}
