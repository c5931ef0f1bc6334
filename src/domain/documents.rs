// Dashboard document models
//
// Every field is optional. A field that is missing or has an unexpected JSON
// type deserializes to its default so renderers never see a hard failure.
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Accepts a JSON number or a numeric string.
fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Decode a fetched document, falling back to an empty one when the top level
/// is not an object.
pub fn decode<T: DeserializeOwned + Default>(value: &Value) -> T {
    match T::deserialize(value) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Document has unexpected shape, rendering defaults: {}", e);
            T::default()
        }
    }
}

/// The optional freshness marker every document may carry.
pub fn generated_at(value: &Value) -> Option<&str> {
    value
        .get("generated_at")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemHealth {
    #[serde(deserialize_with = "lenient")]
    pub openclaw: Gateway,
    #[serde(deserialize_with = "lenient")]
    pub model_routing: ModelRouting,
    #[serde(deserialize_with = "lenient")]
    pub token_spend: TokenSpend,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Gateway {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub mode: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelRouting {
    #[serde(deserialize_with = "lenient")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub fallbacks: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub heartbeat_model: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subagent_model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenSpend {
    #[serde(deserialize_with = "number")]
    pub total_tokens_sum: Option<f64>,
    #[serde(deserialize_with = "number")]
    pub max_percent_used: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub opportunities: Vec<Opportunity>,
    #[serde(deserialize_with = "lenient")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Opportunity {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub stage: Option<String>,
    #[serde(deserialize_with = "number")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub close_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VentureSet {
    #[serde(deserialize_with = "lenient")]
    pub ventures: Vec<Venture>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Venture {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "number")]
    pub priority_tier: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub stage: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ninety_day_goal: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub current_priority: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActivityFeed {
    #[serde(deserialize_with = "lenient")]
    pub events: Vec<ActivityEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActivityEvent {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub detail: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressList {
    #[serde(deserialize_with = "lenient")]
    pub items: Vec<ProgressItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressItem {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinanceSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub budgets: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub insights: FinanceInsights,
    #[serde(deserialize_with = "lenient")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FinanceInsights {
    #[serde(deserialize_with = "number")]
    pub total_accounts: Option<f64>,
    #[serde(deserialize_with = "number")]
    pub net_worth: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub top_categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BudgetCategory {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "number")]
    pub activity: Option<f64>,
    #[serde(deserialize_with = "number")]
    pub budgeted: Option<f64>,
    #[serde(deserialize_with = "number")]
    pub balance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let doc: PipelineSnapshot = decode(&json!({}));
        assert!(doc.status.is_none());
        assert!(doc.opportunities.is_empty());
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let doc: PipelineSnapshot = decode(&json!({
            "status": 42,
            "opportunities": "not a list",
            "reason": "CRM offline"
        }));
        assert!(doc.status.is_none());
        assert!(doc.opportunities.is_empty());
        assert_eq!(doc.reason.as_deref(), Some("CRM offline"));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let doc: PipelineSnapshot = decode(&json!({
            "opportunities": [
                {"name": "Acme", "amount": "1500.5"},
                {"name": "Globex", "amount": "n/a"},
                {"name": "Initech", "amount": 200}
            ]
        }));
        let amounts: Vec<_> = doc.opportunities.iter().map(|o| o.amount).collect();
        assert_eq!(amounts, vec![Some(1500.5), None, Some(200.0)]);
    }

    #[test]
    fn test_non_object_document_decodes_to_default() {
        let doc: VentureSet = decode(&json!([1, 2, 3]));
        assert!(doc.ventures.is_empty());
    }

    #[test]
    fn test_generated_at() {
        assert_eq!(
            generated_at(&json!({"generated_at": "2024-03-01T00:00:00Z"})),
            Some("2024-03-01T00:00:00Z")
        );
        assert_eq!(generated_at(&json!({"generated_at": ""})), None);
        assert_eq!(generated_at(&json!({"generated_at": 7})), None);
        assert_eq!(generated_at(&json!({})), None);
    }
}
