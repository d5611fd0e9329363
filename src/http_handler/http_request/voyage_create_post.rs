use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::http_handler::http_response::voyage_create::VoyageCreateResponse;

/// Request type for the /voyage/create endpoint. Field names are serialized
/// in the camelCase form the backend expects.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VoyageCreateRequest {
    /// Scheduled departure, already canonicalized to UTC.
    pub(crate) departure: chrono::DateTime<chrono::Utc>,
    /// Scheduled arrival, already canonicalized to UTC.
    pub(crate) arrival: chrono::DateTime<chrono::Utc>,
    pub(crate) port_of_loading: String,
    pub(crate) port_of_discharge: String,
    /// Backend id of the assigned vessel.
    pub(crate) vessel: String,
    /// Backend ids of the permitted unit types.
    pub(crate) unit_types: Vec<String>,
}

impl JSONBodyHTTPRequestType for VoyageCreateRequest {
    type Body = VoyageCreateRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for VoyageCreateRequest {
    type Response = VoyageCreateResponse;
    fn endpoint(&self) -> &'static str { "/voyage/create" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
