//! `IDCardOCR` request/response tests against a mock server.
//!
//! # Invariants
//! - The request body is exactly the signed payload.
//! - `X-TC-Region` is only sent for a non-blank region.
//! - API errors come back in the result, not as transport errors.

mod common;

use std::time::Duration;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};

const TIMESTAMP: i64 = 1700000000;

#[tokio::test]
async fn test_id_card_ocr_front_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-TC-Action", "IDCardOCR"))
        .and(header("X-TC-Version", "2018-11-19"))
        .and(header("X-TC-Timestamp", "1700000000"))
        .and(header("X-TC-Region", "ap-guangzhou"))
        .and(header("X-TC-Language", "zh-CN"))
        .and(body_string(r#"{"ImageBase64":"aGVsbG8=","CardSide":"FRONT"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": {
                "Name": "李明",
                "Sex": "男",
                "Nation": "汉",
                "Birth": "1987/1/1",
                "Address": "北京市石景山区高新技术园腾讯大楼",
                "IdNum": "440524198701010014",
                "AdvancedInfo": "{}",
                "RequestId": "req-front"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "ap-guangzhou");
    let result = client
        .id_card_ocr_at("aGVsbG8=", CardSide::Front, TIMESTAMP)
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.name, "李明");
    assert_eq!(result.id_num, "440524198701010014");
    assert_eq!(result.request_id, "req-front");
    assert!(result.raw_json.contains("req-front"));

    let requests = mock_server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert_eq!(
        authorization,
        "TC3-HMAC-SHA256 Credential=AKIDEXAMPLE/2023-11-14/ocr/tc3_request, SignedHeaders=content-type;host;x-tc-action, Signature=791683c7b8adc7e368a2f1372bf2c587149075e27195b9023ba1653e7785c23e"
    );
}

#[tokio::test]
async fn test_id_card_ocr_back_side_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string(r#"{"ImageBase64":"aGVsbG8=","CardSide":"BACK"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": {
                "Authority": "某市公安局",
                "ValidDate": "2010.07.21-2020.07.21",
                "RequestId": "req-back"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "ap-guangzhou");
    let result = client
        .id_card_ocr("aGVsbG8=", CardSide::Back)
        .await
        .unwrap();

    assert!(result.is_success());
    assert_eq!(result.authority, "某市公安局");
    assert_eq!(result.valid_date, "2010.07.21-2020.07.21");
    assert_eq!(result.name, "");
}

#[tokio::test]
async fn test_auto_side_omits_card_side_and_blank_region_omits_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string(r#"{"ImageBase64":"aGVsbG8="}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": { "Name": "A", "RequestId": "req-auto" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "   ");
    let result = client
        .id_card_ocr("aGVsbG8=", CardSide::Auto)
        .await
        .unwrap();
    assert!(result.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("X-TC-Region"));
}

#[tokio::test]
async fn test_api_error_in_error_status_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "Response": {
                "Error": {
                    "Code": "AuthFailure.SecretIdNotFound",
                    "Message": "The SecretId is not found."
                },
                "RequestId": "req-err"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "ap-guangzhou");
    let result = client
        .id_card_ocr("aGVsbG8=", CardSide::Auto)
        .await
        .unwrap();

    assert_eq!(result.error_code, 1);
    assert_eq!(
        result.error_message,
        "AuthFailure.SecretIdNotFound: The SecretId is not found."
    );
    assert_eq!(result.request_id, "req-err");

    let err = result.into_result().unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "ap-guangzhou");
    let result = client
        .id_card_ocr("aGVsbG8=", CardSide::Auto)
        .await
        .unwrap();

    assert_eq!(result.error_code, 1);
    assert!(result.error_message.starts_with("failed to parse response JSON"));
    assert_eq!(result.raw_json, "Bad Gateway");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "Response": {} }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = OcrClient::builder()
        .credentials(test_credentials("ap-guangzhou"))
        .endpoint(mock_server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client
        .id_card_ocr("aGVsbG8=", CardSide::Auto)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Timeout(_)), "got {:?}", err);
    assert!(err.is_retryable());
}
