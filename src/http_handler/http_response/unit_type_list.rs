use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// A cargo unit type a voyage may carry.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    id: String,
    name: String,
    /// Nominal unit length in metres.
    default_length: f64,
}

impl SerdeJSONBodyHTTPResponseType for Vec<UnitType> {}

impl UnitType {
    pub fn id(&self) -> &str { self.id.as_str() }
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn default_length(&self) -> f64 { self.default_length }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_parses_camel_case_length_and_ignores_unknown_fields() {
        let parsed: Vec<UnitType> = serde_json::from_str(
            r#"[{"id":"ut1","name":"20ft Container","defaultLength":6.06,"stackable":true}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0].name(), "20ft Container");
        assert!((parsed[0].default_length() - 6.06).abs() < f64::EPSILON);
    }
}
