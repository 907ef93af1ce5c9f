use serde::{Deserialize, Serialize};

/// Result of one answered question.
///
/// Either a success tuple with all four fields populated, or a failure tuple
/// carrying only the engine's error message. Serialized untagged so callers
/// see exactly `{sql_query, results, insight, tables_used}` or `{error}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum QueryOutcome {
    Success(QuerySuccess),
    Failure(QueryFailure),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuerySuccess {
    pub sql_query: String,
    pub results: String,
    pub insight: String,
    pub tables_used: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryFailure {
    pub error: String,
}

impl QueryOutcome {
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(QueryFailure { error: error.into() })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_exactly_four_fields() {
        let outcome = QueryOutcome::Success(QuerySuccess {
            sql_query: "SELECT * FROM customers".to_owned(),
            results: "1 | Alice Chen".to_owned(),
            insight: "One customer matched.".to_owned(),
            tables_used: vec!["customers".to_owned()],
        });

        let value = serde_json::to_value(&outcome).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["insight", "results", "sql_query", "tables_used"]);
    }

    #[test]
    fn failure_serializes_only_the_error_field() {
        let outcome = QueryOutcome::failure("no such table: missing");

        let value = serde_json::to_value(&outcome).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], "no such table: missing");
    }

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let success: QueryOutcome = serde_json::from_str(
            r#"{"sql_query":"SELECT 1","results":"1","insight":"ok","tables_used":[]}"#,
        )
        .unwrap();
        assert!(success.is_success());

        let failure: QueryOutcome = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert!(!failure.is_success());
    }
}
