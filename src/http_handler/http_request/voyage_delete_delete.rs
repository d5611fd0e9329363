use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::voyage_delete::VoyageDeleteResponse;

/// Deletes one voyage by id, passed as a query parameter.
#[derive(Debug)]
pub struct VoyageDeleteRequest {
    pub(crate) id: String,
}

impl NoBodyHTTPRequestType for VoyageDeleteRequest {}

impl HTTPRequestType for VoyageDeleteRequest {
    type Response = VoyageDeleteResponse;
    fn endpoint(&self) -> &'static str {
        "/voyage/delete"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Delete
    }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone())]
    }
}
