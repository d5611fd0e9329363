use std::fmt::{Display, Formatter};
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio_util::sync::CancellationToken;

use crate::voyage_control::draft::{DraftField, ValidationError, VoyageDraft};
use crate::voyage_control::gateway::{SubmissionError, VoyageGateway};
use crate::voyage_control::reference::{LoadState, ReferenceData};
use crate::voyage_control::signal::VoyagesChanged;
use crate::{info, log, warn};

/// The [`CreationWorkflow`] owns one voyage draft from first keystroke to
/// confirmed creation.
///
/// It supports:
/// - Loading the vessel and unit type reference lists concurrently, each
///   failing or arriving on its own
/// - Field-by-field draft edits and unit type toggling
/// - Guarded submission: validation, UTC canonicalization, one create
///   request, at most one in flight
/// - Abandoning cleanly when closed, even mid-submission
pub struct CreationWorkflow {
    /// Backend access, dyn-dispatched for testability.
    gateway: Arc<dyn VoyageGateway>,
    /// The draft being composed.
    draft: RwLock<VoyageDraft>,
    /// Reference lists the operator selects from.
    reference: RwLock<ReferenceData>,
    /// Current phase, readable by the owning surface.
    phase: RwLock<WorkflowPhase>,
    /// Held for the whole of one submission; a second caller finding it
    /// taken is turned away instead of queued.
    submit_gate: Mutex<()>,
    /// Set once the owning surface closes; late responses are dropped.
    closed: CancellationToken,
    /// Broadcasts [`VoyagesChanged`] after every confirmed creation.
    changes: broadcast::Sender<VoyagesChanged>,
}

/// Observable phase of the workflow. Failures of any kind return the
/// workflow to `Editing` with the draft untouched; `Succeeded` is terminal.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkflowPhase {
    Editing,
    Validating,
    Submitting,
    Succeeded,
}

/// How a [`CreationWorkflow::submit`] call ended when nothing went wrong.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend confirmed the voyage; [`VoyagesChanged`] was broadcast.
    Created,
    /// Another submission held the gate; this call did nothing.
    RejectedInFlight,
    /// The workflow was closed or already done; this call did nothing.
    Abandoned,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The draft failed a local check; no request was sent.
    Validation(ValidationError),
    /// The create request was sent and failed; the draft is preserved for
    /// a retry.
    Submission(SubmissionError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "{err}"),
            SubmitError::Submission(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl CreationWorkflow {
    /// Creates a workflow with an empty draft and unloaded reference lists.
    ///
    /// # Arguments
    /// * `gateway` - Backend access shared with the other controllers.
    /// * `changes` - The sender side of the voyages-changed broadcast.
    pub fn new(
        gateway: Arc<dyn VoyageGateway>,
        changes: broadcast::Sender<VoyagesChanged>,
    ) -> Self {
        Self {
            gateway,
            draft: RwLock::new(VoyageDraft::default()),
            reference: RwLock::new(ReferenceData::default()),
            phase: RwLock::new(WorkflowPhase::Editing),
            submit_gate: Mutex::new(()),
            closed: CancellationToken::new(),
            changes,
        }
    }

    /// Loads both reference lists concurrently. Neither fetch blocks the
    /// other and a failure only marks its own list as failed, so the
    /// operator can work with whatever did arrive.
    pub async fn initialize(&self) {
        tokio::join!(self.refresh_vessels(), self.refresh_unit_types());
    }

    /// Fetches the vessel list again, replacing its previous load state.
    pub async fn refresh_vessels(&self) {
        let state = match self.gateway.list_vessels().await {
            Ok(list) => {
                info!("Loaded {} selectable vessels", list.len());
                LoadState::Loaded(list)
            }
            Err(err) => {
                warn!("{err}");
                LoadState::Failed(err)
            }
        };
        self.reference.write().await.set_vessels(state);
    }

    /// Fetches the unit type list again, replacing its previous load state.
    pub async fn refresh_unit_types(&self) {
        let state = match self.gateway.list_unit_types().await {
            Ok(list) => {
                info!("Loaded {} selectable unit types", list.len());
                LoadState::Loaded(list)
            }
            Err(err) => {
                warn!("{err}");
                LoadState::Failed(err)
            }
        };
        self.reference.write().await.set_unit_types(state);
    }

    /// Overwrites one scalar draft field. Never validates and never fails.
    pub async fn update_field(&self, field: DraftField, value: impl Into<String>) {
        self.draft.write().await.update_field(field, value);
    }

    /// Toggles one unit type id in the draft selection.
    pub async fn toggle_unit_type(&self, id: impl Into<String>) {
        self.draft.write().await.toggle_unit_type(id);
    }

    /// Validates the draft and, if it passes, sends exactly one create
    /// request.
    ///
    /// A call is turned away without side effects when the workflow is
    /// closed, has already succeeded, or another submission is in flight.
    /// Validation failures never reach the network; submission failures
    /// leave the draft untouched so the operator can retry.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        if self.closed.is_cancelled() || *self.phase.read().await == WorkflowPhase::Succeeded {
            return Ok(SubmitOutcome::Abandoned);
        }
        let Ok(_gate) = self.submit_gate.try_lock() else {
            log!("Submission already in flight, turning this one away");
            return Ok(SubmitOutcome::RejectedInFlight);
        };

        self.set_phase(WorkflowPhase::Validating).await;
        let plan = match self.draft.read().await.validate() {
            Ok(plan) => plan,
            Err(err) => {
                self.set_phase(WorkflowPhase::Editing).await;
                return Err(SubmitError::Validation(err));
            }
        };

        self.set_phase(WorkflowPhase::Submitting).await;
        let result = tokio::select! {
            () = self.closed.cancelled() => {
                log!("Workflow closed mid-submission, dropping the response");
                self.set_phase(WorkflowPhase::Editing).await;
                return Ok(SubmitOutcome::Abandoned);
            }
            res = self.gateway.create_voyage(&plan) => res,
        };

        match result {
            Ok(()) => {
                self.set_phase(WorkflowPhase::Succeeded).await;
                self.draft.write().await.clear();
                let _ = self.changes.send(VoyagesChanged);
                info!(
                    "Voyage {} -> {} confirmed by backend",
                    plan.port_of_loading(),
                    plan.port_of_discharge()
                );
                Ok(SubmitOutcome::Created)
            }
            Err(err) => {
                self.set_phase(WorkflowPhase::Editing).await;
                warn!("{err}");
                Err(SubmitError::Submission(err))
            }
        }
    }

    /// Closes the workflow: the draft is discarded and any in-flight
    /// submission resolves to [`SubmitOutcome::Abandoned`]. The request
    /// itself may still reach the backend; its response is ignored.
    pub async fn close(&self) {
        self.closed.cancel();
        self.draft.write().await.clear();
        log!("Creation workflow closed, draft discarded");
    }

    pub fn is_closed(&self) -> bool { self.closed.is_cancelled() }

    /// Snapshot of the current draft.
    pub async fn draft(&self) -> VoyageDraft { self.draft.read().await.clone() }

    /// Snapshot of the reference lists and their load states.
    pub async fn reference(&self) -> ReferenceData { self.reference.read().await.clone() }

    pub async fn phase(&self) -> WorkflowPhase { *self.phase.read().await }

    /// New receiver on the voyages-changed broadcast.
    pub fn subscribe(&self) -> broadcast::Receiver<VoyagesChanged> { self.changes.subscribe() }

    async fn set_phase(&self, phase: WorkflowPhase) { *self.phase.write().await = phase; }
}
