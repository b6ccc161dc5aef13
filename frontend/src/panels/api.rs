use crate::env_variable_utils::BACKEND_URL;
use crate::models::ApiResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub const VIDEO_ENDPOINT: &str = "/video";
pub const COMMENTS_ENDPOINT: &str = "/comments";
pub const CHANNEL_ENDPOINT: &str = "/channel";
pub const SEARCH_ENDPOINT: &str = "/search";
pub const SHORTS_ENDPOINT: &str = "/shorts";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Backend(String),
    #[error("{0}")]
    Network(#[from] gloo_net::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Field values of a submitted form, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.0.push((name.to_string(), value.to_string()));
        self
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn endpoint_url(endpoint: &str) -> String {
    format!("{}{}", BACKEND_URL.trim_end_matches('/'), endpoint)
}

/// Unwraps the `{success, data, error}` envelope.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    let response: ApiResponse<T> = serde_json::from_str(body)?;
    match (response.success, response.data) {
        (true, Some(data)) => Ok(data),
        (true, None) => Err(FetchError::Backend("No data received".to_string())),
        (false, _) => Err(FetchError::Backend(
            response
                .error
                .unwrap_or_else(|| "Request failed".to_string()),
        )),
    }
}

/// Posts `fields` to `endpoint` and decodes the payload of the response.
/// Exactly one request is made; there is no retry and no timeout.
pub async fn post_form<T: DeserializeOwned>(
    endpoint: &str,
    fields: &FormFields,
) -> Result<T, FetchError> {
    let result = send_form(endpoint, fields).await;
    if let Err(e) = &result {
        handle_error(&format!("{endpoint} failed: {e}"));
    }
    result
}

async fn send_form<T: DeserializeOwned>(
    endpoint: &str,
    fields: &FormFields,
) -> Result<T, FetchError> {
    let url = endpoint_url(endpoint);
    log::debug!("POST {url} {}", fields.encode());

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(fields.encode())?
        .send()
        .await?;
    let body = response.text().await?;
    decode_envelope(&body)
}

pub fn handle_error(error: &str) {
    web_sys::console::error_1(&error.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{escape_html, render_to_string};
    use crate::models::VideoDetails;
    use crate::panels::state::PanelState;

    #[test]
    fn successful_envelope_yields_payload() {
        let video: VideoDetails =
            decode_envelope(r#"{"success": true, "data": {"title": "Hello"}}"#).unwrap();
        assert_eq!(video.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn backend_failure_carries_its_message() {
        let err = decode_envelope::<VideoDetails>(r#"{"success": false, "error": "X"}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Backend(ref msg) if msg == "X"));

        let state = PanelState::<()>::from_result(Err(err));
        assert_eq!(state.container_class(), "results error");
        assert_eq!(
            state.status_html().map(|html| render_to_string(&html)).as_deref(),
            Some("<div class=\"error\">X</div>")
        );
    }

    #[test]
    fn envelope_without_success_flag_is_a_failure() {
        let err = decode_envelope::<VideoDetails>(r#"{"error": "No URL provided"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No URL provided");

        let err = decode_envelope::<VideoDetails>(r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn success_without_data_is_reported() {
        let err = decode_envelope::<VideoDetails>(r#"{"success": true, "data": null}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "No data received");
    }

    #[test]
    fn malformed_body_surfaces_parser_message_escaped() {
        let err = decode_envelope::<VideoDetails>("<html>502 Bad Gateway</html>").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, FetchError::Decode(_)));

        let state = PanelState::<()>::from_result(Err(err));
        let html = render_to_string(&state.status_html().unwrap());
        assert_eq!(html, format!("<div class=\"error\">{}</div>", escape_html(&message)));
        assert_eq!(state.container_class(), "results error");
    }

    #[test]
    fn network_failure_renders_like_backend_failure() {
        let err = FetchError::from(gloo_net::Error::GlooError("<offline>".to_string()));
        let state = PanelState::<()>::from_result(Err(err));
        assert_eq!(state.container_class(), "results error");
        assert_eq!(
            state.status_html().map(|html| render_to_string(&html)).as_deref(),
            Some("<div class=\"error\">&lt;offline&gt;</div>")
        );
    }

    #[test]
    fn form_fields_are_url_encoded() {
        let fields = FormFields::new()
            .with("query", "rust & wasm")
            .with("max_results", 10);
        assert_eq!(fields.encode(), "query=rust%20%26%20wasm&max_results=10");
    }
}
