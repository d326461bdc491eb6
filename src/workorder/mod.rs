// Work Order Module - status metadata and optional transition enforcement

pub mod status;

pub use status::{WorkOrderPolicy, WorkOrderPolicyError, WorkOrderStatus};
