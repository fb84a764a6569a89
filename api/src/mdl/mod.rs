//! Models

use salvo::prelude::ToSchema;
use serde::{Deserialize, Serialize};

/// Notice shown when live mode is requested without production approval
pub const DISABLED_NOTICE: &str = "Live mode requested but not approved. Contact the administrator to enable production after compliance is complete.";

/// New sandbox user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewSandboxUser {
    /// Email
    pub email: String,
    /// Name
    pub name: String,
}

/// New sandbox card
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewSandboxCard {
    /// Account ID
    pub account_id: String,
    /// Card type
    pub card_type: CardType,
}

/// Card type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Virtual card
    #[default]
    Virtual,
    /// Physical card
    Physical,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            CardType::Virtual => "virtual".to_string(),
            CardType::Physical => "physical".to_string(),
        };
        write!(f, "{}", value)
    }
}

/// New sandbox transfer
///
/// The amount is passed verbatim as entered by the operator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewSandboxTransfer {
    /// Source account
    pub from: String,
    /// Destination account
    pub to: String,
    /// Amount
    pub amount: String,
}

/// Action outcome
///
/// The displayable envelope for a demo action. The upstream response is
/// never interpreted, only carried through for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Whether the upstream answered with a success status
    pub ok: bool,
    /// HTTP status returned by the upstream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Response payload (parsed JSON, or the raw body text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Failure or notice description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionOutcome {
    /// Builds the outcome for a settled upstream response
    ///
    /// A body that does not parse as JSON is carried through as raw text.
    pub fn received(ok: bool, status: u16, body: &str) -> Self {
        let data = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(_) => serde_json::Value::String(body.to_string()),
        };
        Self {
            ok,
            status: Some(status),
            data: Some(data),
            error: None,
        }
    }

    /// Builds the outcome for a request that failed in transport
    pub fn failure(cause: String) -> Self {
        Self {
            ok: false,
            status: None,
            data: None,
            error: Some(cause),
        }
    }

    /// Builds the no-op outcome for a disabled action
    pub fn disabled() -> Self {
        Self {
            ok: false,
            status: None,
            data: None,
            error: Some(DISABLED_NOTICE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_outcome_json_body() {
        let outcome = ActionOutcome::received(true, 201, r#"{"id":"u_1"}"#);
        assert!(outcome.ok);
        assert_eq!(outcome.status, Some(201));
        assert_eq!(outcome.data, Some(json!({"id": "u_1"})));
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn test_outcome_raw_body() {
        let outcome = ActionOutcome::received(true, 200, "OK");
        assert_eq!(outcome.data, Some(json!("OK")));

        let outcome = ActionOutcome::received(false, 502, "");
        assert!(!outcome.ok);
        assert_eq!(outcome.data, Some(json!("")));
    }

    #[test]
    fn test_outcome_failure() {
        let outcome = ActionOutcome::failure("connection refused".to_string());
        assert!(!outcome.ok);
        assert_eq!(outcome.status, None);
        assert_eq!(outcome.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_outcome_skips_absent_fields() {
        let value = serde_json::to_value(ActionOutcome::disabled()).unwrap();
        assert_eq!(value.get("status"), None);
        assert_eq!(value.get("data"), None);
        assert_eq!(value["error"], json!(DISABLED_NOTICE));
    }

    #[test]
    fn test_card_wire_form() {
        let card = NewSandboxCard {
            account_id: "acct_sandbox_123".to_string(),
            card_type: CardType::Virtual,
        };
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value,
            json!({"accountId": "acct_sandbox_123", "cardType": "virtual"})
        );
        assert_eq!(CardType::Physical.to_string(), "physical");
    }
}
