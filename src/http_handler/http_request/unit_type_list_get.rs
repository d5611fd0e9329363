use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::unit_type_list::UnitType;

#[derive(Debug)]
pub struct UnitTypeListRequest {}

impl NoBodyHTTPRequestType for UnitTypeListRequest {}

impl HTTPRequestType for UnitTypeListRequest {
    type Response = Vec<UnitType>;
    fn endpoint(&self) -> &'static str {
        "/unitType/getAll"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
}
