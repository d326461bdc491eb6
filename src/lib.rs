// Ampdesk Library - EV Service-Center Status Policy Engine
// Exposes the intake/work-order status core for testing and integration

pub mod cli;
pub mod config;
pub mod intake;
pub mod telemetry;
pub mod workorder;

// Re-export key types for easy access
pub use config::{AmpdeskConfig, SessionContext};
pub use intake::{
    validate_transition, ActionOutcome, ActionRequest, DispatchError, DispatchRecord,
    InMemoryIntakeService, IntakeAction, IntakeDispatcher, IntakeMutations, IntakePolicyError,
    IntakeStatus, IntakeUpdate, ServiceIntake, StatusConfig, StatusTone,
};
pub use telemetry::{generate_correlation_id, init_telemetry, shutdown_telemetry};
pub use workorder::{WorkOrderPolicy, WorkOrderPolicyError, WorkOrderStatus};
