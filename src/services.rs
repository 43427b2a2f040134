use crate::{
    config::IndeterminatePolicy,
    error::{BreachError, UpstreamError},
    models::{BreachQuery, ProviderResponse},
    provider::BreachProvider,
    response::BreachResult,
    state::AppState,
};
use serde_json::{Number, Value};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Error text the public provider uses for "zero records", sent with
/// `success: false`.
pub const PROVIDER_NOT_FOUND: &str = "Not found";

/// What a provider answer means for the identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// At least one record matched; carries the raw provider payload.
    Breached(Value),
    Clear,
    /// The provider answered but could not complete the lookup.
    Indeterminate(String),
}

pub fn interpret(response: ProviderResponse) -> Result<Verdict, UpstreamError> {
    let ProviderResponse { raw, payload } = response;

    if !payload.success {
        return Ok(match payload.error {
            Some(error) if error == PROVIDER_NOT_FOUND => Verdict::Clear,
            Some(error) => Verdict::Indeterminate(error),
            None => Verdict::Indeterminate("provider reported failure".to_string()),
        });
    }

    let found = payload.found.ok_or_else(|| {
        UpstreamError::Malformed("successful response without `found`".to_string())
    })?;

    if has_matches(&found) {
        Ok(Verdict::Breached(raw))
    } else {
        Ok(Verdict::Clear)
    }
}

fn has_matches(found: &Number) -> bool {
    found.as_f64().is_some_and(|count| count > 0.0)
}

pub fn render(verdict: Verdict, policy: IndeterminatePolicy) -> Result<BreachResult, BreachError> {
    match verdict {
        Verdict::Breached(details) => Ok(BreachResult::breached(details)),
        Verdict::Clear => Ok(BreachResult::clear()),
        Verdict::Indeterminate(reason) => match policy {
            IndeterminatePolicy::Clear => Ok(BreachResult::clear()),
            IndeterminatePolicy::Error => Err(BreachError::Indeterminate(reason)),
        },
    }
}

pub struct BreachService {
    provider: Arc<dyn BreachProvider>,
    policy: IndeterminatePolicy,
}

impl BreachService {
    pub fn new(state: &AppState) -> Self {
        Self {
            provider: state.provider.clone(),
            policy: state.config.indeterminate,
        }
    }

    /// Look up one validated query and turn the provider's answer into a
    /// caller-facing result.
    pub async fn check(&self, query: &BreachQuery) -> Result<BreachResult, BreachError> {
        let span = tracing::info_span!(
            "breach_check",
            lookup_id = %Uuid::new_v4(),
            kind = %query.kind,
        );

        async {
            let response = match self.provider.lookup(&query.value).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(error = %err, "Error checking breach");
                    return Err(err.into());
                }
            };

            let sources = response.details().map(|d| d.sources.len());

            let verdict = match interpret(response) {
                Ok(verdict) => verdict,
                Err(err) => {
                    tracing::error!(error = %err, "Error checking breach");
                    return Err(err.into());
                }
            };

            match &verdict {
                Verdict::Breached(_) => tracing::info!(?sources, "Breach found"),
                Verdict::Clear => tracing::info!("No breach found"),
                Verdict::Indeterminate(reason) => tracing::warn!(
                    reason = reason.as_str(),
                    policy = ?self.policy,
                    "Provider could not determine breach status"
                ),
            }

            render(verdict, self.policy)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(raw: Value) -> ProviderResponse {
        ProviderResponse::from_raw(raw).unwrap()
    }

    #[test]
    fn positive_count_is_breached_with_raw_payload() {
        let raw = json!({
            "success": true,
            "found": 1,
            "fields": ["password"],
            "sources": [{"name": "ExampleBreach", "date": "2020-01-01"}]
        });
        assert_eq!(interpret(response(raw.clone())).unwrap(), Verdict::Breached(raw));
    }

    #[test]
    fn zero_count_is_clear() {
        let verdict = interpret(response(json!({"success": true, "found": 0}))).unwrap();
        assert_eq!(verdict, Verdict::Clear);
    }

    #[test]
    fn provider_not_found_is_clear() {
        let verdict = interpret(response(json!({"success": false, "error": "Not found"}))).unwrap();
        assert_eq!(verdict, Verdict::Clear);
    }

    #[test]
    fn other_provider_failures_are_indeterminate() {
        let verdict = interpret(response(json!({"success": false, "error": "Invalid characters in query"})))
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::Indeterminate("Invalid characters in query".to_string())
        );

        let verdict = interpret(response(json!({"success": false}))).unwrap();
        assert!(matches!(verdict, Verdict::Indeterminate(_)));
    }

    #[test]
    fn count_is_read_as_any_json_number() {
        for (found, breached) in [
            (json!(1.0), true),
            (json!(2.0), true),
            (json!(0.5), true),
            (json!(0.0), false),
            (json!(-1), false),
        ] {
            let raw = json!({"success": true, "found": found});
            let verdict = interpret(response(raw.clone())).unwrap();
            if breached {
                assert_eq!(verdict, Verdict::Breached(raw));
            } else {
                assert_eq!(verdict, Verdict::Clear);
            }
        }
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = ProviderResponse::from_raw(json!({"success": true, "found": "many"}));
        assert!(err.is_err());
    }

    #[test]
    fn success_without_count_is_malformed() {
        let err = interpret(response(json!({"success": true}))).unwrap_err();
        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[test]
    fn indeterminate_follows_policy() {
        let verdict = Verdict::Indeterminate("limit reached".to_string());

        let folded = render(verdict.clone(), IndeterminatePolicy::Clear).unwrap();
        assert_eq!(folded, BreachResult::clear());

        let err = render(verdict, IndeterminatePolicy::Error).unwrap_err();
        assert!(matches!(err, BreachError::Indeterminate(_)));
    }
}
