//! Full lifecycle runs through the dispatcher against the in-memory
//! service: the happy path, the cancel branch, and immutability of closed
//! records.

use ampdesk::intake::VehicleRef;
use ampdesk::{
    ActionRequest, DispatchError, InMemoryIntakeService, IntakeAction, IntakeDispatcher,
    IntakeStatus, IntakeUpdate, ServiceIntake,
};
use uuid::Uuid;

fn checked_in_intake() -> ServiceIntake {
    ServiceIntake::check_in(
        Uuid::new_v4(),
        "Priya Natarajan",
        VehicleRef {
            vin: "1N4AZ1CP8KC300500".to_string(),
            plate: "EV-309".to_string(),
            model: "Leaf".to_string(),
        },
    )
}

#[tokio::test]
async fn happy_path_reaches_finalized_in_order() {
    let service = InMemoryIntakeService::new();
    let intake = checked_in_intake();
    service.seed(intake.clone());
    let mut dispatcher = IntakeDispatcher::new(service);

    let intake = dispatcher
        .dispatch(
            &intake,
            ActionRequest::Update(IntakeUpdate {
                odometer_km: Some(61_042),
                note: Some("12V battery warning on dash".to_string()),
                checklist_items: vec![],
            }),
        )
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::CheckedIn);
    assert_eq!(intake.odometer_km, Some(61_042));

    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Verify)
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Inspecting);

    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Verify)
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Verified);

    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Finalize)
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Finalized);

    let actions: Vec<IntakeAction> = dispatcher.history().iter().map(|r| r.action).collect();
    assert_eq!(
        actions,
        vec![
            IntakeAction::Update,
            IntakeAction::Verify,
            IntakeAction::Verify,
            IntakeAction::Finalize,
        ]
    );
}

#[tokio::test]
async fn cancel_branch_closes_the_record() {
    let service = InMemoryIntakeService::new();
    let intake = checked_in_intake();
    service.seed(intake.clone());
    let mut dispatcher = IntakeDispatcher::new(service);

    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Verify)
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Inspecting);

    let intake = dispatcher
        .dispatch(
            &intake,
            ActionRequest::Cancel {
                reason: Some("Vehicle towed elsewhere".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Cancelled);
    assert_eq!(intake.cancel_reason.as_deref(), Some("Vehicle towed elsewhere"));

    // Every follow-up action is refused locally.
    for request in [
        ActionRequest::Update(IntakeUpdate::default()),
        ActionRequest::Verify,
        ActionRequest::Finalize,
        ActionRequest::Cancel { reason: None },
    ] {
        let err = dispatcher.dispatch(&intake, request).await.unwrap_err();
        assert!(matches!(err, DispatchError::Refused(_)));
    }
}

#[tokio::test]
async fn cancel_after_verification_is_refused() {
    let service = InMemoryIntakeService::new();
    let intake = checked_in_intake();
    service.seed(intake.clone());
    let mut dispatcher = IntakeDispatcher::new(service);

    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Verify)
        .await
        .unwrap();
    let intake = dispatcher
        .dispatch(&intake, ActionRequest::Verify)
        .await
        .unwrap();
    assert_eq!(intake.status, IntakeStatus::Verified);

    let err = dispatcher
        .dispatch(&intake, ActionRequest::Cancel { reason: None })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot cancel intake with status: Verified"
    );
}
