use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::vessel_list::VesselOption;

#[derive(Debug)]
pub struct VesselListRequest {}

impl NoBodyHTTPRequestType for VesselListRequest {}

impl HTTPRequestType for VesselListRequest {
    type Response = Vec<VesselOption>;
    fn endpoint(&self) -> &'static str {
        "/vessel/getAll"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
