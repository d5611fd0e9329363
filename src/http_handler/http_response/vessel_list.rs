use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// One selectable vessel as served by the backend: `value` is the vessel id,
/// `label` the display name.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct VesselOption {
    value: String,
    label: String,
}

impl SerdeJSONBodyHTTPResponseType for Vec<VesselOption> {}

impl VesselOption {
    pub fn value(&self) -> &str { self.value.as_str() }
    pub fn label(&self) -> &str { self.label.as_str() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vessel_option_parses_backend_shape() {
        let parsed: Vec<VesselOption> = serde_json::from_str(
            r#"[{"value":"cvs1","label":"MV Aurora"},{"value":"cvs2","label":"MV Borealis"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].value(), "cvs1");
        assert_eq!(parsed[1].label(), "MV Borealis");
    }
}
