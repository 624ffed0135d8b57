//! Defensive extraction of an analysis object from free-form model output.

use smartflow_core::AnalysisResult;
use tracing::warn;

/// Parse raw model output into an [`AnalysisResult`].
///
/// The model usually wraps its JSON in prose, so the candidate substring runs
/// from the first `{` to the last `}`. Absent fields take their zero values;
/// unknown fields are ignored. Anything that fails to parse yields
/// [`AnalysisResult::fallback`] instead of an error. Model output is never
/// trusted to be well-formed, and it is never evaluated as anything other
/// than JSON. Negative numbers are passed through unclamped.
pub fn parse_analysis(raw: &str) -> AnalysisResult {
    let Some(start) = raw.find('{') else {
        warn!("model output contained no JSON object, using fallback");
        return AnalysisResult::fallback();
    };
    let Some(end) = raw.rfind('}') else {
        warn!("model output had an unclosed JSON object, using fallback");
        return AnalysisResult::fallback();
    };
    if end < start {
        warn!("model output braces out of order, using fallback");
        return AnalysisResult::fallback();
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "model output was not a valid analysis object, using fallback");
            AnalysisResult::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartflow_core::{Recommendation, Savings};

    #[test]
    fn no_json_yields_fallback() {
        assert_eq!(parse_analysis("no json here"), AnalysisResult::fallback());
    }

    #[test]
    fn empty_input_yields_fallback() {
        assert_eq!(parse_analysis(""), AnalysisResult::fallback());
    }

    #[test]
    fn braces_out_of_order_yield_fallback() {
        assert_eq!(parse_analysis("} oops {"), AnalysisResult::fallback());
    }

    #[test]
    fn invalid_object_yields_fallback() {
        assert_eq!(
            parse_analysis("{\"potential_score\": \"not a number\"}"),
            AnalysisResult::fallback()
        );
        assert_eq!(parse_analysis("{ broken"), AnalysisResult::fallback());
    }

    #[test]
    fn wrapped_object_is_extracted() {
        let raw = r#"prefix {"potential_score": 9, "savings": {"monthly_hours": 5, "monthly_currency": 100}, "recommendations": [], "rollout_plan": [], "notes": []} suffix"#;
        let result = parse_analysis(raw);
        assert_eq!(result.potential_score, 9);
        assert_eq!(result.savings.monthly_hours, 5.0);
        assert_eq!(result.savings.monthly_currency, 100.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn missing_fields_become_zero_values() {
        let result = parse_analysis(r#"{"potential_score": 6}"#);
        assert_eq!(result.potential_score, 6);
        assert_eq!(result.savings, Savings::default());
        assert!(result.rollout_plan.is_empty());
        assert!(result.notes.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let result = parse_analysis(r#"{"potential_score": 3, "confidence": 0.9}"#);
        assert_eq!(result.potential_score, 3);
    }

    #[test]
    fn negative_savings_pass_through() {
        let result =
            parse_analysis(r#"{"potential_score": 2, "savings": {"monthly_hours": -4.0}}"#);
        assert_eq!(result.savings.monthly_hours, -4.0);
    }

    #[test]
    fn parse_is_idempotent_over_canonical_serialization() {
        let original = AnalysisResult {
            potential_score: 8,
            savings: Savings {
                monthly_hours: 16.0,
                monthly_currency: 2400.0,
            },
            recommendations: vec![Recommendation {
                tool_name: "Airtable".into(),
                description: "Replace the order spreadsheet with a shared base".into(),
                rollout_time: "2 weeks".into(),
                monthly_cost: 120.0,
            }],
            rollout_plan: vec!["Week 1: model the base".into()],
            notes: vec!["Team already uses spreadsheets daily".into()],
        };
        let canonical = serde_json::to_string(&original).unwrap();
        assert_eq!(parse_analysis(&canonical), original);
        // And once more through the parser's own output.
        let again = serde_json::to_string(&parse_analysis(&canonical)).unwrap();
        assert_eq!(parse_analysis(&again), original);
    }
}
