use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_handler::http_request::unit_type_list_get::UnitTypeListRequest;
use crate::http_handler::http_request::vessel_list_get::VesselListRequest;
use crate::http_handler::http_request::voyage_create_post::VoyageCreateRequest;
use crate::http_handler::http_request::voyage_delete_delete::VoyageDeleteRequest;
use crate::http_handler::http_request::voyage_list_get::VoyageListRequest;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::http_response::unit_type_list::UnitType;
use crate::http_handler::http_response::vessel_list::VesselOption;
use crate::http_handler::http_response::voyage_list::Voyage;
use crate::voyage_control::draft::VoyagePlan;

/// Backend operations the voyage controllers depend on. Dyn-dispatched so
/// controller logic can run against a scripted stand-in in tests.
#[async_trait]
pub trait VoyageGateway: Send + Sync {
    async fn list_vessels(&self) -> Result<Vec<VesselOption>, FetchError>;
    async fn list_unit_types(&self) -> Result<Vec<UnitType>, FetchError>;
    async fn list_voyages(&self) -> Result<Vec<Voyage>, FetchError>;
    async fn create_voyage(&self, plan: &VoyagePlan) -> Result<(), SubmissionError>;
    async fn delete_voyage(&self, id: &str) -> Result<(), DeleteError>;
}

/// The production [`VoyageGateway`], speaking to the REST backend through
/// the typed request layer.
pub struct RestGateway {
    client: Arc<HTTPClient>,
}

impl RestGateway {
    pub fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl VoyageGateway for RestGateway {
    async fn list_vessels(&self) -> Result<Vec<VesselOption>, FetchError> {
        VesselListRequest {}
            .send_request(&self.client)
            .await
            .map_err(|cause| FetchError { resource: "vessels", cause })
    }

    async fn list_unit_types(&self) -> Result<Vec<UnitType>, FetchError> {
        UnitTypeListRequest {}
            .send_request(&self.client)
            .await
            .map_err(|cause| FetchError { resource: "unit types", cause })
    }

    async fn list_voyages(&self) -> Result<Vec<Voyage>, FetchError> {
        VoyageListRequest {}
            .send_request(&self.client)
            .await
            .map_err(|cause| FetchError { resource: "voyages", cause })
    }

    async fn create_voyage(&self, plan: &VoyagePlan) -> Result<(), SubmissionError> {
        let req = VoyageCreateRequest {
            departure: plan.departure(),
            arrival: plan.arrival(),
            port_of_loading: String::from(plan.port_of_loading()),
            port_of_discharge: String::from(plan.port_of_discharge()),
            vessel: String::from(plan.vessel()),
            unit_types: plan.unit_types().to_vec(),
        };
        req.send_request(&self.client).await.map_err(SubmissionError)
    }

    async fn delete_voyage(&self, id: &str) -> Result<(), DeleteError> {
        VoyageDeleteRequest { id: String::from(id) }
            .send_request(&self.client)
            .await
            .map_err(DeleteError)
    }
}

/// A reference or voyage list could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    pub(crate) resource: &'static str,
    pub(crate) cause: ResponseError,
}

impl FetchError {
    pub fn resource(&self) -> &'static str { self.resource }
    pub fn cause(&self) -> &ResponseError { &self.cause }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to fetch {}: {}", self.resource, self.cause)
    }
}

impl std::error::Error for FetchError {}

/// A validated plan was rejected or lost in transit.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionError(pub(crate) ResponseError);

impl SubmissionError {
    pub fn cause(&self) -> &ResponseError { &self.0 }
}

impl Display for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "voyage submission failed: {}", self.0)
    }
}

impl std::error::Error for SubmissionError {}

/// A voyage deletion was rejected or lost in transit.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteError(pub(crate) ResponseError);

impl DeleteError {
    pub fn cause(&self) -> &ResponseError { &self.0 }
}

impl Display for DeleteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "voyage deletion failed: {}", self.0)
    }
}

impl std::error::Error for DeleteError {}
