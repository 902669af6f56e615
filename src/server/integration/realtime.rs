use serde_json::json;

use crate::server::error::integration::IntegrationError;

static PROVIDER: &str = "realtime";

/// Client for the realtime fan-out provider.
///
/// Publishes events to named topics; connected clients subscribed to a topic
/// receive the event over their websocket. Delivery is fire-and-forget from
/// this process's point of view.
#[derive(Clone)]
pub struct RealtimeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RealtimeClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Publish an event to a topic.
    ///
    /// # Errors
    /// Returns [`IntegrationError::Unreachable`] if the provider cannot be
    /// reached and [`IntegrationError::RequestFailed`] on a non-success status.
    pub async fn publish(
        &self,
        topic: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<(), IntegrationError> {
        let url = format!("{}/v1/topics/{}/publish", self.base_url, topic);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "event": event,
                "payload": payload,
            }))
            .send()
            .await
            .map_err(|source| IntegrationError::Unreachable {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            return Err(IntegrationError::RequestFailed {
                provider: PROVIDER,
                status: response.status(),
            });
        }

        Ok(())
    }
}
