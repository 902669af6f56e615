use serde::Deserialize;
use serde_json::json;

use crate::server::error::integration::IntegrationError;

static PROVIDER: &str = "sfu";

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Client for the media SFU provider.
///
/// The SFU hosts the actual audio and video rooms; this process only manages
/// room lifecycle and mints short-lived join tokens. No media bytes ever flow
/// through here.
#[derive(Clone)]
pub struct SfuClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SfuClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a media room on the SFU.
    ///
    /// # Errors
    /// Returns [`IntegrationError::Unreachable`] if the provider cannot be
    /// reached and [`IntegrationError::RequestFailed`] on a non-success status.
    pub async fn create_room(&self, room_name: &str) -> Result<(), IntegrationError> {
        let url = format!("{}/v1/rooms", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "name": room_name }))
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

    /// Tear down a media room, disconnecting any remaining participants.
    pub async fn delete_room(&self, room_name: &str) -> Result<(), IntegrationError> {
        let url = format!("{}/v1/rooms/{}", self.base_url, room_name);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.api_key)
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

    /// Mint a join token for an identity in an existing room.
    ///
    /// `role` is the provider's publish-permission label, `"host"` or
    /// `"viewer"`. The token is opaque to this process; clients hand it to
    /// the SFU directly when connecting.
    pub async fn issue_token(
        &self,
        room_name: &str,
        identity: i32,
        role: &str,
    ) -> Result<String, IntegrationError> {
        let url = format!("{}/v1/rooms/{}/tokens", self.base_url, room_name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "identity": identity.to_string(),
                "role": role,
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

        let body: TokenResponse =
            response
                .json()
                .await
                .map_err(|source| IntegrationError::Unreachable {
                    provider: PROVIDER,
                    source,
                })?;

        Ok(body.token)
    }
}
