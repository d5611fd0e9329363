use crate::event;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Delete,
}

/// Common surface of every typed request: its endpoint path, HTTP method and
/// the response type used to parse what comes back.
pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

fn base_request<T: HTTPRequestType + ?Sized>(
    client: &HTTPClient,
    req: &T,
) -> reqwest::RequestBuilder {
    let url = format!("{}{}", client.url(), req.endpoint());
    let builder = match req.request_method() {
        HTTPRequestMethod::Get => client.client().get(url),
        HTTPRequestMethod::Post => client.client().post(url),
        HTTPRequestMethod::Delete => client.client().delete(url),
    };
    builder.query(&req.query_params()).headers(req.header_params())
}

/// Requests without a payload, e.g. plain GETs and query-string DELETEs.
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        event!("{:?} {}", self.request_method(), self.endpoint());
        let response = base_request(client, self).send().await?;
        Self::Response::read_response(response).await
    }
}

/// Requests carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        event!("{:?} {}", self.request_method(), self.endpoint());
        let response = base_request(client, self).json(self.body()).send().await?;
        Self::Response::read_response(response).await
    }
}
