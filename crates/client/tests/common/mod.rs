//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use scanidcard_client::{CardSide, ClientError, IdentifyResult, OcrClient};
#[allow(unused_imports)]
pub use scanidcard_config::Credentials;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SECRET_ID: &str = "AKIDEXAMPLE";
pub const TEST_SECRET_KEY: &str = "SECRETEXAMPLE";

/// Credentials used by every mock-backed test.
pub fn test_credentials(region: &str) -> Credentials {
    Credentials::new(
        TEST_SECRET_ID,
        SecretString::new(TEST_SECRET_KEY.to_string().into()),
        region,
    )
}

/// A client pointed at `server` with test credentials.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, region: &str) -> OcrClient {
    OcrClient::builder()
        .credentials(test_credentials(region))
        .endpoint(server.uri())
        .build()
        .expect("test client should build")
}
