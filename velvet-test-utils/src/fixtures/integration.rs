//! Provider HTTP mock endpoint creation utilities.
//!
//! This module provides methods for creating mock HTTP endpoints that stand in
//! for the realtime, SFU and push providers. Each mock verifies it was called
//! the expected number of times.

use mockito::{Matcher, Mock};

use crate::TestSetup;

impl TestSetup {
    pub fn integrations<'a>(&'a mut self) -> IntegrationFixtures<'a> {
        IntegrationFixtures { setup: self }
    }
}

pub struct IntegrationFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> IntegrationFixtures<'a> {
    /// Mock the SFU room creation endpoint.
    pub fn create_room_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/v1/rooms")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }

    /// Mock the SFU token endpoint for any room.
    ///
    /// Room names are generated when a stream starts, so the path is matched
    /// by pattern rather than by a fixed name.
    pub fn issue_token_endpoint(&mut self, token: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock(
                "POST",
                Matcher::Regex(r"^/v1/rooms/[^/]+/tokens$".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "token": token }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock the realtime publish endpoint for a topic.
    pub fn publish_endpoint(&mut self, topic: &str, expected_requests: usize) -> Mock {
        let url = format!("/v1/topics/{}/publish", topic);

        self.setup
            .server
            .mock("POST", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }
}
