use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct GenericResponse {
    pub status: String,
    pub message: String,
}

/// Body of a successful breach check.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BreachResult {
    pub breached: bool,
    pub details: Option<Value>,
}

impl BreachResult {
    pub fn breached(details: Value) -> Self {
        BreachResult {
            breached: true,
            details: Some(details),
        }
    }

    pub fn clear() -> Self {
        BreachResult {
            breached: false,
            details: None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clear_result_serializes_null_details() {
        let body = serde_json::to_value(BreachResult::clear()).unwrap();
        assert_eq!(body, json!({"breached": false, "details": null}));
    }

    #[test]
    fn breached_result_carries_details_verbatim() {
        let details = json!({"success": true, "found": 2, "fields": ["email"]});
        let body = serde_json::to_value(BreachResult::breached(details.clone())).unwrap();
        assert_eq!(body, json!({"breached": true, "details": details}));
    }
}
