// Intake Module - status policy for the service intake lifecycle
//
// Pure lookup/validation core (status table, action gating) plus the
// dispatcher that fronts the remote mutation collaborators. The server owns
// persisted state; nothing here mutates a status locally.

pub mod actions;
pub mod dispatcher;
pub mod memory;
pub mod policy;
pub mod status;
pub mod types;


pub use actions::{validate_transition, ActionOutcome, IntakeAction, IntakePolicyError};
pub use dispatcher::{
    ActionRequest, DispatchError, DispatchRecord, IntakeDispatcher, IntakeMutations,
};
pub use memory::InMemoryIntakeService;
pub use policy::{StatusConfig, StatusTone};
pub use status::IntakeStatus;
pub use types::{
    ChecklistArea, ChecklistItem, InspectionChecklist, IntakeUpdate, ItemCondition, ServiceIntake,
    VehicleRef,
};
