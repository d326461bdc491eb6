use anyhow::Result;
use uuid::Uuid;

use crate::intake::{
    ActionRequest, ChecklistArea, ChecklistItem, DispatchError, InMemoryIntakeService,
    IntakeDispatcher, IntakeUpdate, ItemCondition, ServiceIntake, VehicleRef,
};

/// Walks one intake from check-in to finalized through the dispatcher,
/// against the in-memory service. Shows the gating behavior without needing
/// a backend.
pub struct SimulateCommand;

impl SimulateCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        println!("🚗 INTAKE LIFECYCLE SIMULATION");
        println!("==============================");
        println!();

        let service = InMemoryIntakeService::new();
        let intake = ServiceIntake::check_in(
            Uuid::new_v4(),
            "Dana Reyes",
            VehicleRef {
                vin: "5YJ3E1EA7KF317000".to_string(),
                plate: "EV-204".to_string(),
                model: "Model 3".to_string(),
            },
        );
        println!(
            "📥 Checked in {} ({}) for {}",
            intake.vehicle.model, intake.vehicle.plate, intake.customer_name
        );
        service.seed(intake.clone());

        let mut dispatcher = IntakeDispatcher::new(service);

        // Record mileage at the bay, then start the inspection.
        let intake = dispatcher
            .dispatch(
                &intake,
                ActionRequest::Update(IntakeUpdate {
                    odometer_km: Some(48_211),
                    note: Some("Customer reports reduced range".to_string()),
                    checklist_items: vec![],
                }),
            )
            .await?;
        Self::report("update", &intake);

        let intake = dispatcher.dispatch(&intake, ActionRequest::Verify).await?;
        Self::report("verify", &intake);

        // Inspection findings land as updates while INSPECTING.
        let intake = dispatcher
            .dispatch(
                &intake,
                ActionRequest::Update(IntakeUpdate {
                    odometer_km: None,
                    note: None,
                    checklist_items: vec![ChecklistItem {
                        area: ChecklistArea::Battery,
                        label: "Pack coolant level".to_string(),
                        condition: ItemCondition::Attention,
                        note: Some("Below min line".to_string()),
                    }],
                }),
            )
            .await?;
        Self::report("update", &intake);

        let intake = dispatcher.dispatch(&intake, ActionRequest::Verify).await?;
        Self::report("verify", &intake);

        let intake = dispatcher.dispatch(&intake, ActionRequest::Finalize).await?;
        Self::report("finalize", &intake);

        // A finalized record refuses further edits - locally, no call made.
        match dispatcher
            .dispatch(&intake, ActionRequest::Update(IntakeUpdate::default()))
            .await
        {
            Err(DispatchError::Refused(refusal)) => {
                println!("🚫 Refused locally: {refusal}");
            }
            other => {
                println!("⚠️  Expected a local refusal, got: {other:?}");
            }
        }

        println!();
        println!("📜 DISPATCH HISTORY:");
        for record in dispatcher.history() {
            println!(
                "   {} {} -> {}",
                record.action, record.from, record.to
            );
        }

        let flagged = intake.checklist.flagged().len();
        println!();
        println!(
            "🏁 Intake {} finalized with {} flagged checklist item(s)",
            intake.id, flagged
        );
        Ok(())
    }

    fn report(action: &str, intake: &ServiceIntake) {
        let config = intake.status.config();
        println!("{} {action} -> {}", config.tone.glyph(), config.label);
    }
}
