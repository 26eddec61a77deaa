use serde_json::Value;

use crate::error::SubmitError;
use crate::form::RestaurantPayload;

/// Path of the restaurant-creation endpoint, relative to the API base URL
pub const CREATE_RESTAURANT_PATH: &str = "/api/restaurant/create-restaurant";

/// Reported when a failed response carries no usable message
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create restaurant";

/// Remote side of a submission
pub trait RestaurantApi {
    /// Create the restaurant described by `payload`
    ///
    /// Any success status means the restaurant was created; the response
    /// body is not inspected.
    fn create_restaurant(&self, payload: &RestaurantPayload) -> Result<(), SubmitError>;
}

/// Join a base URL and the creation path without doubling slashes
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CREATE_RESTAURANT_PATH)
}

/// Pick the user-facing message out of a failed response body
///
/// Prefers a non-empty `error` string, then `message`, then the generic
/// failure text. `None` (a body that was not JSON) gets the generic text.
pub fn rejection_message(body: Option<&Value>) -> String {
    let pick = |key: &str| {
        body.and_then(|json| json.get(key))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    };

    pick("error")
        .or_else(|| pick("message"))
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}

/// Restaurant API over HTTP
///
/// Sends one POST per submission. No timeout is configured and nothing is
/// retried.
pub struct HttpRestaurantApi {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpRestaurantApi {
    pub fn new(base_url: &str) -> Self {
        let user_agent = format!("restaurant-onboarding/{}", env!("CARGO_PKG_VERSION"));
        let agent = ureq::AgentBuilder::new().user_agent(&user_agent).build();

        Self {
            agent,
            endpoint: endpoint_url(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RestaurantApi for HttpRestaurantApi {
    fn create_restaurant(&self, payload: &RestaurantPayload) -> Result<(), SubmitError> {
        let body = serde_json::to_value(payload).map_err(|e| {
            tracing::error!("[api] Failed to serialize payload: {}", e);
            SubmitError::Unexpected(Box::new(e))
        })?;

        tracing::info!("[api] POST {}", self.endpoint);

        let result = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_json(body);

        match result {
            Ok(response) => {
                tracing::info!("[api] Restaurant created (status {})", response.status());
                Ok(())
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_json::<Value>().ok();
                let message = rejection_message(body.as_ref());
                tracing::warn!("[api] Server rejected submission ({}): {}", status, message);
                Err(SubmitError::Rejected { status, message })
            }
            Err(err) => {
                tracing::error!("[api] Network error: {}", err);
                Err(SubmitError::Transport(Box::new(err)))
            }
        }
    }
}
