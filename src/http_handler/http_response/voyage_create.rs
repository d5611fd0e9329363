use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// The backend echoes the stored voyage on creation; the console only cares
/// that the request was accepted.
pub struct VoyageCreateResponse {}

impl HTTPResponseType for VoyageCreateResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
