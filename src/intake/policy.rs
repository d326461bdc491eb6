use serde::Serialize;

use super::actions::IntakeAction;
use super::status::IntakeStatus;

/// Presentation metadata and allowed actions for one intake status.
///
/// The table is total: every status has exactly one entry, and the action
/// lists stay consistent with the transition table (checked in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusConfig {
    pub label: &'static str,
    pub tone: StatusTone,
    pub icon: &'static str,
    pub description: &'static str,
    /// Actions legal from this status, in display order.
    pub actions: &'static [IntakeAction],
}

/// Color token for badge rendering. Consumers map this to their own
/// palette; `badge_classes` carries the stock utility-class pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Blue,
    Amber,
    Green,
    Slate,
    Red,
}

impl StatusTone {
    pub fn badge_classes(self) -> &'static str {
        match self {
            StatusTone::Blue => "bg-blue-100 text-blue-800",
            StatusTone::Amber => "bg-amber-100 text-amber-800",
            StatusTone::Green => "bg-green-100 text-green-800",
            StatusTone::Slate => "bg-slate-100 text-slate-800",
            StatusTone::Red => "bg-red-100 text-red-800",
        }
    }

    /// Terminal glyph used by the CLI renderers.
    pub fn glyph(self) -> &'static str {
        match self {
            StatusTone::Blue => "🔵",
            StatusTone::Amber => "🟡",
            StatusTone::Green => "🟢",
            StatusTone::Slate => "⚪",
            StatusTone::Red => "🔴",
        }
    }
}

const CHECKED_IN: StatusConfig = StatusConfig {
    label: "Checked In",
    tone: StatusTone::Blue,
    icon: "📥",
    description: "Vehicle received at the service bay, awaiting inspection.",
    actions: &[IntakeAction::Update, IntakeAction::Verify, IntakeAction::Cancel],
};

const INSPECTING: StatusConfig = StatusConfig {
    label: "Inspecting",
    tone: StatusTone::Amber,
    icon: "🔍",
    description: "Technician is recording the inspection checklist.",
    actions: &[IntakeAction::Update, IntakeAction::Verify, IntakeAction::Cancel],
};

const VERIFIED: StatusConfig = StatusConfig {
    label: "Verified",
    tone: StatusTone::Green,
    icon: "✅",
    description: "Inspection confirmed by staff, ready to finalize.",
    actions: &[IntakeAction::Finalize],
};

const FINALIZED: StatusConfig = StatusConfig {
    label: "Finalized",
    tone: StatusTone::Slate,
    icon: "🧾",
    description: "Paperwork closed. Work orders and billing may be created.",
    actions: &[],
};

const CANCELLED: StatusConfig = StatusConfig {
    label: "Cancelled",
    tone: StatusTone::Red,
    icon: "🚫",
    description: "Intake abandoned before verification.",
    actions: &[],
};

impl IntakeStatus {
    /// Total lookup, one entry per status. No error path.
    pub fn config(self) -> &'static StatusConfig {
        match self {
            IntakeStatus::CheckedIn => &CHECKED_IN,
            IntakeStatus::Inspecting => &INSPECTING,
            IntakeStatus::Verified => &VERIFIED,
            IntakeStatus::Finalized => &FINALIZED,
            IntakeStatus::Cancelled => &CANCELLED,
        }
    }

    /// Actions legal from this status, in display order. Empty for terminal
    /// statuses.
    pub fn available_actions(self) -> &'static [IntakeAction] {
        self.config().actions
    }

    pub fn allows(self, action: IntakeAction) -> bool {
        self.available_actions().contains(&action)
    }
}
