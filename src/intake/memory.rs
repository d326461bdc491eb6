use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::actions::{ActionOutcome, IntakeAction};
use super::dispatcher::IntakeMutations;
use super::types::{IntakeUpdate, ServiceIntake};

/// In-memory stand-in for the service-center API.
///
/// Enforces the same status rules the real backend does, so dispatcher
/// behavior against it matches production. Used by the `simulate` command
/// and the test suites.
#[derive(Default)]
pub struct InMemoryIntakeService {
    intakes: Mutex<HashMap<Uuid, ServiceIntake>>,
}

impl InMemoryIntakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, intake: ServiceIntake) {
        self.intakes
            .lock()
            .expect("intake store poisoned")
            .insert(intake.id, intake);
    }

    pub fn get(&self, id: Uuid) -> Option<ServiceIntake> {
        self.intakes
            .lock()
            .expect("intake store poisoned")
            .get(&id)
            .cloned()
    }

    /// Server-side application of one action: the backend re-validates the
    /// status rules even though well-behaved clients pre-check them.
    fn apply<F>(&self, id: Uuid, action: IntakeAction, edit: F) -> Result<ServiceIntake>
    where
        F: FnOnce(&mut ServiceIntake),
    {
        let mut intakes = self.intakes.lock().expect("intake store poisoned");
        let intake = intakes
            .get_mut(&id)
            .ok_or_else(|| anyhow!("intake {id} not found"))?;

        let outcome = action
            .outcome(intake.status)
            .map_err(|e| anyhow!("server rejected {action}: {e}"))?;

        edit(intake);
        if let ActionOutcome::Transition(next) = outcome {
            intake.status = next;
        }
        intake.updated_at = Utc::now();

        Ok(intake.clone())
    }
}

#[async_trait]
impl IntakeMutations for InMemoryIntakeService {
    async fn update_intake(&self, id: Uuid, changes: IntakeUpdate) -> Result<ServiceIntake> {
        self.apply(id, IntakeAction::Update, |intake| {
            if let Some(km) = changes.odometer_km {
                intake.odometer_km = Some(km);
            }
            if let Some(note) = changes.note {
                intake.notes.push(note);
            }
            for item in changes.checklist_items {
                intake.checklist.record(item);
            }
        })
    }

    async fn verify_intake(&self, id: Uuid) -> Result<ServiceIntake> {
        self.apply(id, IntakeAction::Verify, |_| {})
    }

    async fn finalize_intake(&self, id: Uuid) -> Result<ServiceIntake> {
        self.apply(id, IntakeAction::Finalize, |_| {})
    }

    async fn cancel_intake(&self, id: Uuid, reason: Option<String>) -> Result<ServiceIntake> {
        self.apply(id, IntakeAction::Cancel, |intake| {
            intake.cancel_reason = reason;
        })
    }
}
