//! Request and response models for the `IDCardOCR` action.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, Result};

/// Which side of the ID card the image shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSide {
    /// Let the service detect the side.
    #[default]
    Auto,
    /// Portrait side: name, sex, nation, birth, address, ID number.
    Front,
    /// Emblem side: issuing authority and validity period.
    Back,
}

impl CardSide {
    /// Value of the `CardSide` request field, `None` for automatic detection.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            CardSide::Auto => None,
            CardSide::Front => Some("FRONT"),
            CardSide::Back => Some("BACK"),
        }
    }
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardSide::Auto => "auto",
            CardSide::Front => "front",
            CardSide::Back => "back",
        };
        f.write_str(name)
    }
}

impl FromStr for CardSide {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(CardSide::Auto),
            "front" => Ok(CardSide::Front),
            "back" => Ok(CardSide::Back),
            _ => Err(ClientError::InvalidCardSide(s.to_string())),
        }
    }
}

/// JSON body of an `IDCardOCR` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdCardOcrRequest<'a> {
    pub image_base64: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_side: Option<&'static str>,
}

impl<'a> IdCardOcrRequest<'a> {
    pub fn new(image_base64: &'a str, side: CardSide) -> Self {
        Self {
            image_base64,
            card_side: side.as_wire(),
        }
    }
}

/// Recognition result extracted from the `Response` node.
///
/// `error_code` is 0 on success and 1 on any failure; `error_message`
/// describes the failure. Absent string fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentifyResult {
    pub error_code: i32,
    pub error_message: String,

    // Front side
    pub name: String,
    pub sex: String,
    pub nation: String,
    pub birth: String,
    pub address: String,
    pub id_num: String,

    // Back side
    pub authority: String,
    pub valid_date: String,

    pub request_id: String,
    pub advanced_info: String,
    #[serde(skip)]
    pub raw_json: String,
}

impl IdentifyResult {
    /// Parse a response body. Never fails; problems become `error_code = 1`.
    pub fn from_response_text(text: &str) -> Self {
        let mut result = match serde_json::from_str::<Value>(text) {
            Ok(root) => Self::from_root(&root),
            Err(e) => Self::failure(format!("failed to parse response JSON: {}", e)),
        };
        result.raw_json = text.to_string();
        result
    }

    fn from_root(root: &Value) -> Self {
        let Some(response) = root.get("Response").and_then(Value::as_object) else {
            return Self::failure("response is missing the Response field".to_string());
        };

        let request_id = opt_string(response, "RequestId");

        if response.contains_key("Error") {
            let error = response.get("Error").and_then(Value::as_object);
            let code = error.map(|e| opt_string(e, "Code")).unwrap_or_default();
            let message = error.map(|e| opt_string(e, "Message")).unwrap_or_default();
            let error_message = if message.is_empty() {
                code
            } else {
                format!("{}: {}", code, message)
            };
            return Self {
                request_id,
                ..Self::failure(error_message)
            };
        }

        Self {
            error_code: 0,
            error_message: String::new(),
            name: opt_string(response, "Name"),
            sex: opt_string(response, "Sex"),
            nation: opt_string(response, "Nation"),
            birth: opt_string(response, "Birth"),
            address: opt_string(response, "Address"),
            id_num: opt_string(response, "IdNum"),
            authority: opt_string(response, "Authority"),
            valid_date: opt_string(response, "ValidDate"),
            request_id,
            advanced_info: opt_string(response, "AdvancedInfo"),
            raw_json: String::new(),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            error_code: 1,
            error_message: message,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Convert a failed result into [`ClientError::Api`].
    ///
    /// Parse failures have no error code and become [`ClientError::InvalidResponse`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let Some((code, message)) = api_error_parts(&self.raw_json) else {
            return Err(ClientError::InvalidResponse(self.error_message));
        };
        Err(ClientError::Api {
            code,
            message,
            request_id: Some(self.request_id).filter(|id| !id.is_empty()),
        })
    }
}

/// Extract `Response.Error.{Code,Message}` when the body is an API error.
fn api_error_parts(text: &str) -> Option<(String, String)> {
    let root: Value = serde_json::from_str(text).ok()?;
    let error = root.get("Response")?.get("Error")?.as_object()?;
    Some((opt_string(error, "Code"), opt_string(error, "Message")))
}

/// String value of `key`, stringifying non-string scalars and defaulting to "".
fn opt_string(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
