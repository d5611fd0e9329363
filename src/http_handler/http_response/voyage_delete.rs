use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

pub struct VoyageDeleteResponse {}

impl HTTPResponseType for VoyageDeleteResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response).await?;
        Ok(())
    }
}
