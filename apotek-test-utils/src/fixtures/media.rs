//! Media store HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::{constant::TEST_MEDIA_API_KEY, error::TestError, TestContext};

impl TestContext {
    pub fn media<'a>(&'a mut self) -> MediaFixtures<'a> {
        MediaFixtures { setup: self }
    }
}

pub struct MediaFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> MediaFixtures<'a> {
    /// Create a mock `POST /upload` endpoint answering with `url`.
    ///
    /// Requires the test API key as bearer token. The mock verifies it was called
    /// exactly `expected_requests` times.
    pub fn create_upload_endpoint(
        &mut self,
        url: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&serde_json::json!({ "secure_url": url }))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/upload")
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_MEDIA_API_KEY).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create a mock `POST /destroy` endpoint, failing with a 500 unless `succeeds`.
    pub fn create_destroy_endpoint(&mut self, expected_requests: usize, succeeds: bool) -> Mock {
        let status = if succeeds { 200 } else { 500 };

        self.setup
            .server
            .mock("POST", "/destroy")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }
}
