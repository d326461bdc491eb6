use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::actions::IntakePolicyError;

/// Lifecycle status of a service intake, from vehicle arrival to closed
/// paperwork. The flow is linear with a single cancel branch: once an intake
/// is verified it can only be finalized, and a finalized or cancelled record
/// is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntakeStatus {
    /// Vehicle received at the service bay; intake record just created.
    CheckedIn,
    /// Technician is walking the inspection checklist.
    Inspecting,
    /// Inspection results confirmed by staff; ready for paperwork.
    Verified,
    /// Paperwork closed; eligible for work-order and billing creation.
    Finalized,
    /// Abandoned before verification.
    Cancelled,
}

impl IntakeStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [IntakeStatus; 5] = [
        IntakeStatus::CheckedIn,
        IntakeStatus::Inspecting,
        IntakeStatus::Verified,
        IntakeStatus::Finalized,
        IntakeStatus::Cancelled,
    ];

    /// Statuses legally reachable from this one.
    ///
    /// Skipping steps or reopening a finalized/cancelled record is never
    /// legal; downstream work-order and billing creation depends on a
    /// finalized intake staying finalized.
    pub fn next_statuses(self) -> &'static [IntakeStatus] {
        match self {
            IntakeStatus::CheckedIn => &[IntakeStatus::Inspecting, IntakeStatus::Cancelled],
            IntakeStatus::Inspecting => &[IntakeStatus::Verified, IntakeStatus::Cancelled],
            IntakeStatus::Verified => &[IntakeStatus::Finalized],
            IntakeStatus::Finalized | IntakeStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, to: IntakeStatus) -> bool {
        self.next_statuses().contains(&to)
    }

    /// True for statuses with no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Wire-format name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            IntakeStatus::CheckedIn => "CHECKED_IN",
            IntakeStatus::Inspecting => "INSPECTING",
            IntakeStatus::Verified => "VERIFIED",
            IntakeStatus::Finalized => "FINALIZED",
            IntakeStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for IntakeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntakeStatus {
    type Err = IntakePolicyError;

    /// Parses the wire format. Accepts lowercase and dashed spellings so CLI
    /// input like `checked-in` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        match normalized.as_str() {
            "CHECKED_IN" => Ok(IntakeStatus::CheckedIn),
            "INSPECTING" => Ok(IntakeStatus::Inspecting),
            "VERIFIED" => Ok(IntakeStatus::Verified),
            "FINALIZED" => Ok(IntakeStatus::Finalized),
            "CANCELLED" => Ok(IntakeStatus::Cancelled),
            _ => Err(IntakePolicyError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_is_exhaustive() {
        // Every (from, to) pair is decided by membership in next_statuses.
        for from in IntakeStatus::ALL {
            for to in IntakeStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    from.next_statuses().contains(&to),
                    "disagreement for {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn checked_in_branches_to_inspection_or_cancel() {
        assert_eq!(
            IntakeStatus::CheckedIn.next_statuses(),
            &[IntakeStatus::Inspecting, IntakeStatus::Cancelled]
        );
    }

    #[test]
    fn verified_only_finalizes() {
        assert!(IntakeStatus::Verified.can_transition_to(IntakeStatus::Finalized));
        assert!(!IntakeStatus::Verified.can_transition_to(IntakeStatus::CheckedIn));
        assert!(!IntakeStatus::Verified.can_transition_to(IntakeStatus::Cancelled));
    }

    #[test]
    fn terminal_statuses_have_no_exits() {
        for status in IntakeStatus::ALL {
            assert_eq!(status.is_terminal(), status.next_statuses().is_empty());
        }
        assert!(IntakeStatus::Finalized.is_terminal());
        assert!(IntakeStatus::Cancelled.is_terminal());
        assert!(!IntakeStatus::CheckedIn.is_terminal());
    }

    #[test]
    fn parses_wire_and_cli_spellings() {
        assert_eq!(
            "CHECKED_IN".parse::<IntakeStatus>().unwrap(),
            IntakeStatus::CheckedIn
        );
        assert_eq!(
            "checked-in".parse::<IntakeStatus>().unwrap(),
            IntakeStatus::CheckedIn
        );
        assert_eq!(
            " inspecting ".parse::<IntakeStatus>().unwrap(),
            IntakeStatus::Inspecting
        );
        assert!(matches!(
            "REOPENED".parse::<IntakeStatus>(),
            Err(IntakePolicyError::UnknownStatus(_))
        ));
    }
}
