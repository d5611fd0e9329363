use super::*;
use super::draft::{ValidationError, VoyageDraft, VoyagePlan};
use super::gateway::SubmissionError;
use super::workflow::WorkflowPhase;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::http_response::unit_type_list::UnitType;
use crate::http_handler::http_response::vessel_list::VesselOption;
use crate::http_handler::http_response::voyage_list::Voyage;
use crate::{info, log};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rand::Rng;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use strum::IntoEnumIterator;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{Mutex, Notify, broadcast};

/// Scripted [`VoyageGateway`] stand-in. Each queue holds the results the
/// next calls pop; an empty queue falls back to a benign default. Counters
/// record how often the backend was actually hit.
#[derive(Default)]
struct StubGateway {
    vessel_results: Mutex<VecDeque<Result<Vec<VesselOption>, FetchError>>>,
    unit_type_results: Mutex<VecDeque<Result<Vec<UnitType>, FetchError>>>,
    voyage_results: Mutex<VecDeque<Result<Vec<Voyage>, FetchError>>>,
    create_results: Mutex<VecDeque<Result<(), SubmissionError>>>,
    delete_results: Mutex<VecDeque<Result<(), DeleteError>>>,
    created_plans: Mutex<Vec<VoyagePlan>>,
    deleted_ids: Mutex<Vec<String>>,
    create_calls: AtomicUsize,
    /// When set, `create_voyage` parks on this after counting the call
    /// until the test releases it.
    create_barrier: Option<Arc<Notify>>,
}

#[async_trait]
impl VoyageGateway for StubGateway {
    async fn list_vessels(&self) -> Result<Vec<VesselOption>, FetchError> {
        self.vessel_results.lock().await.pop_front().unwrap_or_else(|| Ok(sample_vessels()))
    }

    async fn list_unit_types(&self) -> Result<Vec<UnitType>, FetchError> {
        self.unit_type_results.lock().await.pop_front().unwrap_or_else(|| Ok(sample_unit_types()))
    }

    async fn list_voyages(&self) -> Result<Vec<Voyage>, FetchError> {
        self.voyage_results.lock().await.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_voyage(&self, plan: &VoyagePlan) -> Result<(), SubmissionError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_plans.lock().await.push(plan.clone());
        if let Some(barrier) = &self.create_barrier {
            barrier.notified().await;
        }
        self.create_results.lock().await.pop_front().unwrap_or(Ok(()))
    }

    async fn delete_voyage(&self, id: &str) -> Result<(), DeleteError> {
        self.deleted_ids.lock().await.push(String::from(id));
        self.delete_results.lock().await.pop_front().unwrap_or(Ok(()))
    }
}

fn sample_vessels() -> Vec<VesselOption> {
    serde_json::from_str(
        r#"[{"value":"cvs1","label":"MV Aurora"},{"value":"cvs2","label":"MV Borealis"}]"#,
    )
    .unwrap()
}

fn sample_unit_types() -> Vec<UnitType> {
    serde_json::from_str(
        r#"[{"id":"ut1","name":"13.6m Trailer","defaultLength":13.6},
            {"id":"ut2","name":"20ft Container","defaultLength":6.06},
            {"id":"ut3","name":"40ft Container","defaultLength":12.19},
            {"id":"ut4","name":"Double Deck","defaultLength":13.6},
            {"id":"ut5","name":"Reefer","defaultLength":13.6},
            {"id":"ut6","name":"Low Loader","defaultLength":10.0}]"#,
    )
    .unwrap()
}

fn sample_voyage(id: &str) -> Voyage {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "portOfLoading": "Rotterdam",
        "portOfDischarge": "Singapore",
        "scheduledDeparture": "2024-01-01T10:00:00Z",
        "scheduledArrival": "2024-01-20T08:30:00Z",
        "vessel": {"id": "cvs1", "name": "MV Aurora"},
        "unitTypes": [{"id": "ut1", "name": "13.6m Trailer", "defaultLength": 13.6}]
    }))
    .unwrap()
}

fn workflow_with(gateway: Arc<StubGateway>) -> CreationWorkflow {
    let (tx, _) = broadcast::channel(8);
    CreationWorkflow::new(gateway, tx)
}

async fn fill_valid_draft(workflow: &CreationWorkflow) {
    workflow.update_field(DraftField::Departure, "2024-01-01T10:00").await;
    workflow.update_field(DraftField::Arrival, "2024-01-20T08:30").await;
    workflow.update_field(DraftField::PortOfLoading, "Rotterdam").await;
    workflow.update_field(DraftField::PortOfDischarge, "Singapore").await;
    workflow.update_field(DraftField::Vessel, "cvs1").await;
    for id in ["ut1", "ut2", "ut3", "ut4", "ut5"] {
        workflow.toggle_unit_type(id).await;
    }
}

async fn wait_for_create_call(stub: &StubGateway) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while stub.create_calls.load(Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_submit_rejects_incomplete_drafts_without_network() {
    for missing in DraftField::iter() {
        let stub = Arc::new(StubGateway::default());
        let workflow = workflow_with(Arc::clone(&stub));
        fill_valid_draft(&workflow).await;
        workflow.update_field(missing, "").await;
        assert_eq!(workflow.draft().await.field(missing), "");
        let res = workflow.submit().await;
        log!("Submit without {missing}: {res:?}");
        assert_eq!(res, Err(SubmitError::Validation(ValidationError::Incomplete)));
        assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(workflow.phase().await, WorkflowPhase::Editing);
    }

    // Whitespace counts as missing too.
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    workflow.update_field(DraftField::Vessel, "   ").await;
    assert_eq!(
        workflow.submit().await,
        Err(SubmitError::Validation(ValidationError::Incomplete))
    );
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_rejects_four_unit_types() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    workflow.toggle_unit_type("ut5").await;
    assert_eq!(workflow.draft().await.unit_types().len(), 4);
    let err = workflow.submit().await.unwrap_err();
    assert_eq!(err, SubmitError::Validation(ValidationError::Incomplete));
    assert_eq!(err.to_string(), "missing fields or insufficient unit types");
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_rejects_departure_not_before_arrival() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    workflow.update_field(DraftField::Departure, "2024-01-01T10:00").await;
    workflow.update_field(DraftField::Arrival, "2024-01-01T09:00").await;
    let err = workflow.submit().await.unwrap_err();
    assert_eq!(err, SubmitError::Validation(ValidationError::DepartureNotBeforeArrival));
    assert_eq!(err.to_string(), "departure must precede arrival");
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);

    // Equality is rejected as well, the ordering is strict.
    workflow.update_field(DraftField::Arrival, "2024-01-01T10:00").await;
    assert_eq!(
        workflow.submit().await,
        Err(SubmitError::Validation(ValidationError::DepartureNotBeforeArrival))
    );
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_rejects_unparsable_timestamps() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    workflow.update_field(DraftField::Departure, "next tuesday").await;
    assert_eq!(
        workflow.submit().await,
        Err(SubmitError::Validation(ValidationError::UnparsableTimestamp(
            DraftField::Departure
        )))
    );
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(workflow.phase().await, WorkflowPhase::Editing);
}

#[tokio::test]
async fn test_toggle_unit_type_is_self_inverse() {
    let mut rng = rand::rng();
    let mut draft = VoyageDraft::default();
    for n in 0..rng.random_range(3..8) {
        draft.toggle_unit_type(format!("ut{n}"));
    }
    let before = draft.clone();
    let id = format!("ut{}", rng.random_range(0..100));
    draft.toggle_unit_type(id.clone());
    draft.toggle_unit_type(id.clone());
    info!("Toggled {id} twice on a selection of {}", before.unit_types().len());
    assert_eq!(draft, before);
}

#[tokio::test]
async fn test_timestamp_formats_canonicalize_to_utc() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 20, 8, 30, 0).unwrap();
    let arrivals = [
        "2024-01-20T08:30",
        "2024-01-20T08:30:00",
        "2024-01-20T08:30:00Z",
        "2024-01-20T10:30:00+02:00",
    ];
    for arrival in arrivals {
        let workflow = workflow_with(Arc::new(StubGateway::default()));
        fill_valid_draft(&workflow).await;
        workflow.update_field(DraftField::Arrival, arrival).await;
        let plan = workflow.draft().await.validate().unwrap();
        assert_eq!(plan.arrival(), expected, "arrival input {arrival}");
    }
}

#[tokio::test]
async fn test_successful_submit_sends_one_canonicalized_create() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    let mut rx = workflow.subscribe();
    fill_valid_draft(&workflow).await;

    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Created));
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(workflow.phase().await, WorkflowPhase::Succeeded);
    assert_eq!(rx.try_recv(), Ok(VoyagesChanged));

    let plans = stub.created_plans.lock().await;
    let plan = &plans[0];
    assert_eq!(plan.departure(), Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert_eq!(plan.arrival(), Utc.with_ymd_and_hms(2024, 1, 20, 8, 30, 0).unwrap());
    assert_eq!(plan.vessel(), "cvs1");
    assert_eq!(plan.unit_types(), ["ut1", "ut2", "ut3", "ut4", "ut5"]);

    // Success discards the draft.
    assert_eq!(workflow.draft().await, VoyageDraft::default());
}

#[tokio::test]
async fn test_failed_submit_preserves_draft_and_retries_identically() {
    let stub = Arc::new(StubGateway::default());
    stub.create_results
        .lock()
        .await
        .push_back(Err(SubmissionError(ResponseError::NoConnection)));
    let workflow = workflow_with(Arc::clone(&stub));
    let mut rx = workflow.subscribe();
    fill_valid_draft(&workflow).await;
    let before = workflow.draft().await;

    let err = workflow.submit().await.unwrap_err();
    assert_eq!(err.to_string(), "voyage submission failed: no connection to server");
    let SubmitError::Submission(rejection) = &err else {
        panic!("unexpected validation failure: {err:?}")
    };
    assert_eq!(*rejection.cause(), ResponseError::NoConnection);
    assert_eq!(workflow.phase().await, WorkflowPhase::Editing);
    assert_eq!(workflow.draft().await, before);
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

    // Unchanged draft resubmits the identical plan.
    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Created));
    let plans = stub.created_plans.lock().await;
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0], plans[1]);
    assert_eq!(rx.try_recv(), Ok(VoyagesChanged));
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
    let barrier = Arc::new(Notify::new());
    let stub = Arc::new(StubGateway {
        create_barrier: Some(Arc::clone(&barrier)),
        ..StubGateway::default()
    });
    let workflow = Arc::new(workflow_with(Arc::clone(&stub)));
    fill_valid_draft(&workflow).await;

    let first = {
        let workflow = Arc::clone(&workflow);
        tokio::spawn(async move { workflow.submit().await })
    };
    wait_for_create_call(&stub).await;
    assert_eq!(workflow.phase().await, WorkflowPhase::Submitting);

    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::RejectedInFlight));
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 1);

    barrier.notify_one();
    assert_eq!(first.await.unwrap(), Ok(SubmitOutcome::Created));
}

#[tokio::test]
async fn test_close_mid_submission_abandons_without_event() {
    let barrier = Arc::new(Notify::new());
    let stub = Arc::new(StubGateway {
        create_barrier: Some(Arc::clone(&barrier)),
        ..StubGateway::default()
    });
    let workflow = Arc::new(workflow_with(Arc::clone(&stub)));
    let mut rx = workflow.subscribe();
    fill_valid_draft(&workflow).await;

    let pending = {
        let workflow = Arc::clone(&workflow);
        tokio::spawn(async move { workflow.submit().await })
    };
    wait_for_create_call(&stub).await;

    workflow.close().await;
    assert_eq!(pending.await.unwrap(), Ok(SubmitOutcome::Abandoned));
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(workflow.draft().await, VoyageDraft::default());
}

#[tokio::test]
async fn test_submit_after_close_is_abandoned() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    workflow.close().await;
    assert!(workflow.is_closed());
    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Abandoned));
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_after_success_is_abandoned() {
    let stub = Arc::new(StubGateway::default());
    let workflow = workflow_with(Arc::clone(&stub));
    fill_valid_draft(&workflow).await;
    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Created));

    fill_valid_draft(&workflow).await;
    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Abandoned));
    assert_eq!(stub.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_initialize_tolerates_partial_failure_and_refresh_recovers() {
    let stub = Arc::new(StubGateway::default());
    stub.vessel_results.lock().await.push_back(Err(FetchError {
        resource: "vessels",
        cause: ResponseError::NoConnection,
    }));
    let workflow = workflow_with(Arc::clone(&stub));

    let reference = workflow.reference().await;
    assert!(!reference.vessel_state().is_loaded());
    assert!(reference.vessels().is_empty());

    workflow.initialize().await;
    let reference = workflow.reference().await;
    let vessel_err = reference.vessel_state().error().unwrap();
    assert_eq!(vessel_err.resource(), "vessels");
    assert_eq!(*vessel_err.cause(), ResponseError::NoConnection);
    // The other list arrived regardless.
    assert_eq!(reference.unit_types().len(), 6);

    workflow.refresh_vessels().await;
    let reference = workflow.reference().await;
    assert!(reference.vessel_state().is_loaded());
    assert_eq!(reference.vessels().len(), 2);
}

#[tokio::test]
async fn test_board_delete_broadcasts_only_on_confirmation() {
    let stub = Arc::new(StubGateway::default());
    let (tx, _) = broadcast::channel(8);
    let board = VoyageBoard::new(Arc::clone(&stub) as Arc<dyn VoyageGateway>, tx);
    let mut rx = board.subscribe();

    board.delete("v1").await.unwrap();
    assert_eq!(rx.try_recv(), Ok(VoyagesChanged));
    assert_eq!(*stub.deleted_ids.lock().await, ["v1"]);

    stub.delete_results
        .lock()
        .await
        .push_back(Err(DeleteError(ResponseError::InternalServer)));
    let err = board.delete("v2").await.unwrap_err();
    assert_eq!(*err.cause(), ResponseError::InternalServer);
    assert_eq!(err.to_string(), "voyage deletion failed: server error");
    assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
}

#[tokio::test]
async fn test_board_lists_voyages_with_unit_types() {
    let stub = Arc::new(StubGateway::default());
    stub.voyage_results
        .lock()
        .await
        .push_back(Ok(vec![sample_voyage("v1"), sample_voyage("v2")]));
    let (tx, _) = broadcast::channel(8);
    let board = VoyageBoard::new(Arc::clone(&stub) as Arc<dyn VoyageGateway>, tx);

    let voyages = board.voyages().await.unwrap();
    assert_eq!(voyages.len(), 2);
    assert_eq!(voyages[0].id(), "v1");
    assert_eq!(voyages[0].vessel().id(), "cvs1");
    assert_eq!(voyages[0].vessel().name(), "MV Aurora");
    assert_eq!(voyages[0].unit_types()[0].name(), "13.6m Trailer");
}

#[tokio::test]
async fn test_creation_event_reaches_board_subscriber() {
    let stub = Arc::new(StubGateway::default());
    let (tx, _) = broadcast::channel(8);
    let workflow =
        CreationWorkflow::new(Arc::clone(&stub) as Arc<dyn VoyageGateway>, tx.clone());
    let board = VoyageBoard::new(Arc::clone(&stub) as Arc<dyn VoyageGateway>, tx);
    let mut board_rx = board.subscribe();

    fill_valid_draft(&workflow).await;
    assert_eq!(workflow.submit().await, Ok(SubmitOutcome::Created));
    assert_eq!(board_rx.try_recv(), Ok(VoyagesChanged));
}
