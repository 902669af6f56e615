use serde_json::json;

use crate::server::error::integration::IntegrationError;
use crate::server::model::db::PushSubscriptionModel;

static PROVIDER: &str = "push";

/// Client for the web push delivery provider.
///
/// The provider holds the VAPID keys and talks to the browser push services;
/// this process only forwards the stored subscription along with the
/// notification content. A dead subscription is the provider's problem to
/// report, not ours to track.
#[derive(Clone)]
pub struct PushClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PushClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Send one notification to one stored subscription.
    ///
    /// # Arguments
    /// - `subscription` - The browser push subscription to deliver to
    /// - `title` - Notification title shown by the browser
    /// - `body` - Notification body text
    ///
    /// # Errors
    /// Returns [`IntegrationError::Unreachable`] if the provider cannot be
    /// reached and [`IntegrationError::RequestFailed`] on a non-success status.
    pub async fn send(
        &self,
        subscription: &PushSubscriptionModel,
        title: &str,
        body: &str,
    ) -> Result<(), IntegrationError> {
        let url = format!("{}/v1/send", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "subscription": {
                    "endpoint": subscription.endpoint,
                    "keys": {
                        "p256dh": subscription.p256dh,
                        "auth": subscription.auth,
                    },
                },
                "notification": {
                    "title": title,
                    "body": body,
                },
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
