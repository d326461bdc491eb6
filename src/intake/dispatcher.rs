use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::telemetry::{create_intake_span, generate_correlation_id};

use super::actions::{IntakeAction, IntakePolicyError};
use super::status::IntakeStatus;
use super::types::{IntakeUpdate, ServiceIntake};

/// Remote mutation surface for intakes. The server performs the actual
/// status change and returns the updated record; implementations must not
/// interpret failures beyond transporting them.
#[async_trait]
pub trait IntakeMutations {
    async fn update_intake(&self, id: Uuid, changes: IntakeUpdate) -> Result<ServiceIntake>;
    async fn verify_intake(&self, id: Uuid) -> Result<ServiceIntake>;
    async fn finalize_intake(&self, id: Uuid) -> Result<ServiceIntake>;
    async fn cancel_intake(&self, id: Uuid, reason: Option<String>) -> Result<ServiceIntake>;
}

/// A requested action together with its payload.
#[derive(Debug, Clone)]
pub enum ActionRequest {
    Update(IntakeUpdate),
    Verify,
    Finalize,
    Cancel { reason: Option<String> },
}

impl ActionRequest {
    /// The action name used for gating.
    pub fn action(&self) -> IntakeAction {
        match self {
            ActionRequest::Update(_) => IntakeAction::Update,
            ActionRequest::Verify => IntakeAction::Verify,
            ActionRequest::Finalize => IntakeAction::Finalize,
            ActionRequest::Cancel { .. } => IntakeAction::Cancel,
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Refused by the local policy check; the collaborator was never called.
    #[error(transparent)]
    Refused(#[from] IntakePolicyError),

    /// The remote mutation failed. Surfaced uninterpreted.
    #[error("Intake mutation failed: {0}")]
    Remote(#[source] anyhow::Error),
}

/// Audit-trail entry for one dispatched action.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchRecord {
    pub intake_id: Uuid,
    pub action: IntakeAction,
    pub from: IntakeStatus,
    /// Status reported back by the server, which is authoritative.
    pub to: IntakeStatus,
    pub correlation_id: String,
    pub dispatched_at: DateTime<Utc>,
}

/// Gates UI action requests against the status policy before delegating to
/// the remote mutation collaborator.
///
/// The dispatcher never mutates status locally. Its only job is deciding
/// whether the call is attempted; callers re-render from the record the
/// server returns.
pub struct IntakeDispatcher<M> {
    mutations: M,
    history: Vec<DispatchRecord>,
}

impl<M: IntakeMutations> IntakeDispatcher<M> {
    pub fn new(mutations: M) -> Self {
        Self {
            mutations,
            history: Vec::new(),
        }
    }

    /// Dispatch one action for the given intake.
    ///
    /// Illegal requests are rejected locally with a typed refusal and no
    /// network call. Legal requests delegate to the collaborator and return
    /// the server's record verbatim.
    pub async fn dispatch(
        &mut self,
        intake: &ServiceIntake,
        request: ActionRequest,
    ) -> Result<ServiceIntake, DispatchError> {
        let action = request.action();
        let correlation_id = generate_correlation_id();
        let span = create_intake_span(action.as_str(), Some(intake.id), Some(&correlation_id));

        // The legality pre-check is synchronous; the span is not held across
        // the remote call.
        let outcome = span.in_scope(|| {
            action.outcome(intake.status).map_err(|refusal| {
                warn!(
                    intake.id = %intake.id,
                    intake.status = %intake.status,
                    action = %action,
                    correlation.id = %correlation_id,
                    "Refused intake action"
                );
                refusal
            })
        })?;

        let updated = match request {
            ActionRequest::Update(changes) => {
                self.mutations.update_intake(intake.id, changes).await
            }
            ActionRequest::Verify => self.mutations.verify_intake(intake.id).await,
            ActionRequest::Finalize => self.mutations.finalize_intake(intake.id).await,
            ActionRequest::Cancel { reason } => {
                self.mutations.cancel_intake(intake.id, reason).await
            }
        }
        .map_err(DispatchError::Remote)?;

        if updated.status != outcome.status() {
            // The server's answer wins; note the divergence for operators.
            warn!(
                intake.id = %intake.id,
                expected = %outcome.status(),
                actual = %updated.status,
                correlation.id = %correlation_id,
                "Server reported a different status than the policy expected"
            );
        }

        info!(
            intake.id = %intake.id,
            action = %action,
            from = %intake.status,
            to = %updated.status,
            correlation.id = %correlation_id,
            "Dispatched intake action"
        );

        self.history.push(DispatchRecord {
            intake_id: intake.id,
            action,
            from: intake.status,
            to: updated.status,
            correlation_id,
            dispatched_at: Utc::now(),
        });

        Ok(updated)
    }

    /// Audit trail of every action that reached the collaborator.
    pub fn history(&self) -> &[DispatchRecord] {
        &self.history
    }

    pub fn into_inner(self) -> M {
        self.mutations
    }
}
