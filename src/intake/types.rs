use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::IntakeStatus;

/// The vehicle an intake was opened for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRef {
    pub vin: String,
    pub plate: String,
    pub model: String,
}

/// Inspection areas walked during intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistArea {
    Exterior,
    Tires,
    Battery,
    Electrical,
    Safety,
}

impl ChecklistArea {
    pub const ALL: [ChecklistArea; 5] = [
        ChecklistArea::Exterior,
        ChecklistArea::Tires,
        ChecklistArea::Battery,
        ChecklistArea::Electrical,
        ChecklistArea::Safety,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChecklistArea::Exterior => "Exterior",
            ChecklistArea::Tires => "Tires",
            ChecklistArea::Battery => "Battery",
            ChecklistArea::Electrical => "Electrical",
            ChecklistArea::Safety => "Safety",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    Good,
    Attention,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub area: ChecklistArea,
    pub label: String,
    pub condition: ItemCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The recorded inspection results for one intake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionChecklist {
    pub items: Vec<ChecklistItem>,
}

impl InspectionChecklist {
    /// Empty template with one pending entry per inspection area.
    pub fn standard() -> Self {
        Self {
            items: ChecklistArea::ALL
                .iter()
                .map(|area| ChecklistItem {
                    area: *area,
                    label: format!("{} walkaround", area.label()),
                    condition: ItemCondition::Good,
                    note: None,
                })
                .collect(),
        }
    }

    /// Replaces any existing item with the same area and label, otherwise
    /// appends.
    pub fn record(&mut self, item: ChecklistItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.area == item.area && i.label == item.label)
        {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Items needing follow-up work.
    pub fn flagged(&self) -> Vec<&ChecklistItem> {
        self.items
            .iter()
            .filter(|i| i.condition != ItemCondition::Good)
            .collect()
    }

    /// True once every inspection area has at least one recorded item.
    pub fn is_complete(&self) -> bool {
        ChecklistArea::ALL
            .iter()
            .all(|area| self.items.iter().any(|i| i.area == *area))
    }
}

/// An intake record as the server returns it. The server owns persisted
/// state; clients hold read-through copies and never mutate status locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceIntake {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub customer_name: String,
    pub vehicle: VehicleRef,
    pub status: IntakeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<u32>,
    pub checklist: InspectionChecklist,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    pub checked_in_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceIntake {
    /// Open a fresh intake from an approved booking. New records always
    /// start checked-in with the standard checklist template.
    pub fn check_in(booking_id: Uuid, customer_name: &str, vehicle: VehicleRef) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            booking_id,
            customer_name: customer_name.to_string(),
            vehicle,
            status: IntakeStatus::CheckedIn,
            odometer_km: None,
            checklist: InspectionChecklist::standard(),
            notes: Vec::new(),
            cancel_reason: None,
            checked_in_at: now,
            updated_at: now,
        }
    }
}

/// Partial edit payload for the `update` action. Applied server-side;
/// updates never change the status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist_items: Vec<ChecklistItem>,
}
