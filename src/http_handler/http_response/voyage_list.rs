use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::http_response::unit_type_list::UnitType;

/// A scheduled voyage as served by the backend, with its vessel and the
/// unit types it is permitted to carry.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    id: String,
    port_of_loading: String,
    port_of_discharge: String,
    scheduled_departure: chrono::DateTime<chrono::Utc>,
    scheduled_arrival: chrono::DateTime<chrono::Utc>,
    vessel: VesselSummary,
    /// Only present when the listing was requested with unit types included.
    #[serde(default)]
    unit_types: Vec<UnitType>,
}

impl SerdeJSONBodyHTTPResponseType for Vec<Voyage> {}

impl Voyage {
    pub fn id(&self) -> &str { self.id.as_str() }
    pub fn port_of_loading(&self) -> &str { self.port_of_loading.as_str() }
    pub fn port_of_discharge(&self) -> &str { self.port_of_discharge.as_str() }
    pub fn scheduled_departure(&self) -> chrono::DateTime<chrono::Utc> { self.scheduled_departure }
    pub fn scheduled_arrival(&self) -> chrono::DateTime<chrono::Utc> { self.scheduled_arrival }
    pub fn vessel(&self) -> &VesselSummary { &self.vessel }
    pub fn unit_types(&self) -> &[UnitType] { &self.unit_types }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct VesselSummary {
    id: String,
    name: String,
}

impl VesselSummary {
    pub fn id(&self) -> &str { self.id.as_str() }
    pub fn name(&self) -> &str { self.name.as_str() }
}
