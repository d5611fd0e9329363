use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::voyage_list::Voyage;

/// Lists every scheduled voyage, with the permitted unit types expanded.
#[derive(Debug)]
pub struct VoyageListRequest {}

impl NoBodyHTTPRequestType for VoyageListRequest {}

impl HTTPRequestType for VoyageListRequest {
    type Response = Vec<Voyage>;
    fn endpoint(&self) -> &'static str {
        "/voyage/getAll"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("include", String::from("unitTypes"))]
    }
}
