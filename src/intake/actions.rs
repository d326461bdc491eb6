use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::IntakeStatus;

/// The four operations the UI can request against an intake record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeAction {
    /// Edit the record in place (checklist, notes, odometer). Never moves
    /// the status.
    Update,
    /// Advance the inspection: starts it from check-in, confirms it once
    /// inspection is underway.
    Verify,
    /// Close the paperwork on a verified intake.
    Finalize,
    /// Abandon the intake before verification.
    Cancel,
}

impl IntakeAction {
    pub const ALL: [IntakeAction; 4] = [
        IntakeAction::Update,
        IntakeAction::Verify,
        IntakeAction::Finalize,
        IntakeAction::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntakeAction::Update => "update",
            IntakeAction::Verify => "verify",
            IntakeAction::Finalize => "finalize",
            IntakeAction::Cancel => "cancel",
        }
    }

    /// Resolve what this action does from the given status, or refuse.
    ///
    /// This is the single source of truth for action legality; the
    /// per-status action lists in the config table are checked against it
    /// in tests.
    pub fn outcome(self, from: IntakeStatus) -> Result<ActionOutcome, IntakePolicyError> {
        let outcome = match (self, from) {
            (IntakeAction::Update, IntakeStatus::CheckedIn | IntakeStatus::Inspecting) => {
                ActionOutcome::Unchanged(from)
            }
            (IntakeAction::Verify, IntakeStatus::CheckedIn) => {
                ActionOutcome::Transition(IntakeStatus::Inspecting)
            }
            (IntakeAction::Verify, IntakeStatus::Inspecting) => {
                ActionOutcome::Transition(IntakeStatus::Verified)
            }
            (IntakeAction::Finalize, IntakeStatus::Verified) => {
                ActionOutcome::Transition(IntakeStatus::Finalized)
            }
            (IntakeAction::Cancel, IntakeStatus::CheckedIn | IntakeStatus::Inspecting) => {
                ActionOutcome::Transition(IntakeStatus::Cancelled)
            }
            _ => {
                return Err(IntakePolicyError::ActionNotAllowed {
                    action: self,
                    status: from,
                })
            }
        };
        Ok(outcome)
    }
}

impl std::fmt::Display for IntakeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect of a successfully dispatched action on the record's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The record is edited in place; the status does not move.
    Unchanged(IntakeStatus),
    /// The record advances to a new status.
    Transition(IntakeStatus),
}

impl ActionOutcome {
    /// The status the record holds after the action lands.
    pub fn status(self) -> IntakeStatus {
        match self {
            ActionOutcome::Unchanged(status) | ActionOutcome::Transition(status) => status,
        }
    }
}

/// Refusals produced by the status policy. These are resolved locally and
/// never cause a network call.
#[derive(Debug, Error)]
pub enum IntakePolicyError {
    /// The requested action is not in the status's allowed set.
    #[error("Cannot {} intake with status: {}", .action, .status.config().label)]
    ActionNotAllowed {
        action: IntakeAction,
        status: IntakeStatus,
    },

    /// A proposed next status is not reachable from the current one.
    #[error("Invalid intake transition: {from} -> {to}")]
    InvalidTransition { from: IntakeStatus, to: IntakeStatus },

    /// A status string from outside the typed core did not match any known
    /// value. Upstream data corruption, not a user error.
    #[error("Unknown intake status: {0}")]
    UnknownStatus(String),
}

/// Validate a raw status-to-status move, independent of any action name.
pub fn validate_transition(
    from: IntakeStatus,
    to: IntakeStatus,
) -> Result<(), IntakePolicyError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(IntakePolicyError::InvalidTransition { from, to })
    }
}
