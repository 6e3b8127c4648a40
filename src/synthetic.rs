//! Synthetic data generator
//!
//! Deterministic in shape, non-deterministic in value. Numeric fields draw
//! uniformly from fixed per-field ranges, identifiers use a 6-character code
//! over an alphabet without visually confusable characters. No seed is kept;
//! every call is independent.

use chrono::{Duration, Local};
use rand::{rngs::ThreadRng, Rng};
use serde_json::{json, Value};

use crate::models::{ErrorPoint, ErrorTableRow};

/// Identifier alphabet: excludes 0/O and 1/I
const ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Identifier length
const ID_LEN: usize = 6;

/// Recognized business unit codes
pub const VALID_UNITS: [&str; 2] = ["CCS", "JMSL"];

/// Unit listing served when the store is unreachable
pub const MOCK_UNITS: [&str; 4] = [
    "Retail Banking",
    "Wealth Management",
    "Commercial Banking",
    "Investment Banking",
];

/// Unrestricted status pool
pub const STATUS_POOL: &[&str] = &["Normal", "Warning", "Error"];

/// Predicted/actual class labels
pub const CLASS_POOL: &[&str] = &["Class A", "Class B"];

/// Per-unit flavoring applied to synthetic payloads
pub struct UnitContext {
    pub alert_keeper: &'static str,
    pub status_pool: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub explanations: &'static [&'static str],
}

/// Closed map from unit code to its context; never persisted
pub static UNIT_CONTEXTS: [(&str, UnitContext); 2] = [
    (
        "CCS",
        UnitContext {
            alert_keeper: "CCS Admin",
            status_pool: &["Normal", "Warning"],
            use_cases: &["CC-Di", "CC-MT"],
            explanations: &[
                "CCS: Significant drift detected in transaction amount distributions (p<0.01)",
                "CCS: Top drifting features: 1) TXN_AMT (38%), 2) CUST_AGE (22%), 3) GEO_REGION (15%)",
                "CCS: Model maintains 85% precision for fraud detection despite drift",
                "CCS: Recommendation: Retrain if drift score >0.2 for 3+ days",
            ],
        },
    ),
    (
        "JMSL",
        UnitContext {
            alert_keeper: "JMSL Admin",
            status_pool: &["Normal", "Error"],
            use_cases: &["JM-Ch"],
            explanations: &[
                "JMSL: Moderate drift in customer segmentation features (p<0.05)",
                "JMSL: Key drifting dimensions: 1) INCOME_BRACKET (41%), 2) CREDIT_SCORE (19%)",
                "JMSL: Model recall dropped 5% for premium segment",
                "JMSL: Recommendation: Monitor closely, retrain if precision drops below 80%",
            ],
        },
    ),
];

/// Explanations used when no recognized unit is supplied
pub const DEFAULT_EXPLANATIONS: &[&str] = &[
    "The model shows moderate drift in feature distributions",
    "Feature importance analysis indicates top drifting features",
    "Drift detection alerts triggered due to distribution changes",
    "Recommendation: Consider retraining if drift persists",
];

pub fn is_valid_unit(unit: &str) -> bool {
    VALID_UNITS.contains(&unit)
}

fn find_context(code: &str) -> Option<(&'static str, &'static UnitContext)> {
    UNIT_CONTEXTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|entry| (entry.0, &entry.1))
}

/// Resolve the context used to flavor a synthetic payload.
///
/// A recognized code selects its own context; an absent one picks a
/// recognized unit at random.
pub fn unit_context(unit: Option<&str>) -> (&'static str, &'static UnitContext) {
    if let Some(found) = unit.and_then(find_context) {
        return found;
    }
    let mut rng = rand::thread_rng();
    let entry = &UNIT_CONTEXTS[rng.gen_range(0..UNIT_CONTEXTS.len())];
    (entry.0, &entry.1)
}

/// Explanation pool for the XAI endpoint
pub fn xai_pool(unit: Option<&str>) -> &'static [&'static str] {
    match unit.and_then(find_context) {
        Some((_, ctx)) => ctx.explanations,
        None => DEFAULT_EXPLANATIONS,
    }
}

/// 6-character identifier over the unambiguous alphabet
pub fn alphanum_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Prefixed record identifier, e.g. `KPI-A7N2QX`
pub fn tagged_id(prefix: &str) -> String {
    format!("{prefix}-{}", alphanum_id())
}

/// Uniform draw from a fixed pool
pub fn choose<'a>(rng: &mut ThreadRng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Round to two decimals, the wire precision for metric values
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `|error / mean| * 100` rounded to two decimals; a zero mean yields zero
pub fn percentage_error(error: f64, mean_prediction: f64) -> f64 {
    if mean_prediction == 0.0 {
        0.0
    } else {
        round2((error / mean_prediction).abs() * 100.0)
    }
}

/// Current timestamp in the dashboard's alert-time format
pub fn alert_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// 30-day synthetic error series ending today. Errors above 15 are flagged.
pub fn error_series() -> (Vec<ErrorPoint>, Vec<ErrorTableRow>) {
    let mut rng = rand::thread_rng();
    let base_date = Local::now() - Duration::days(30);

    let mut plot = Vec::with_capacity(30);
    let mut table = Vec::with_capacity(30);
    for day in 0..30 {
        let date = (base_date + Duration::days(day))
            .format("%Y-%m-%d")
            .to_string();
        let error = round2(rng.gen_range(5.0..20.0));
        let mean_prediction = round2(rng.gen_range(800.0..1200.0));
        let exceeds_threshold = error > 15.0;

        plot.push(ErrorPoint {
            x: date.clone(),
            y: error,
            exceeds_threshold,
        });
        table.push(ErrorTableRow {
            predicted: choose(&mut rng, CLASS_POOL).to_string(),
            actual: choose(&mut rng, CLASS_POOL).to_string(),
            time_period: date,
            mean_prediction,
            error,
            exceeds_threshold,
            percentage_error: percentage_error(error, mean_prediction),
        });
    }
    (plot, table)
}

/// Display-only tuning values shown next to the unit listing
pub fn business_units_hyperparameters() -> String {
    let mut rng = rand::thread_rng();
    let refresh = [5, 10, 15][rng.gen_range(0..3)];
    let max_units = [50, 100, 200][rng.gen_range(0..3)];
    format!("Refresh Interval: {refresh} minutes, Max Units: {max_units} minutes")
}

/// Display-only tuning values shown next to the error table
pub fn errors_hyperparameters() -> String {
    let mut rng = rand::thread_rng();
    let threshold = [10, 15, 20][rng.gen_range(0..3)];
    let learning_rate = (rng.gen_range(0.001f64..0.01) * 10_000.0).round() / 10_000.0;
    let batch_size = [32, 64, 128][rng.gen_range(0..3)];
    format!("Error Threshold: {threshold}, Learning Rate: {learning_rate}, Batch Size: {batch_size}")
}

/// Distribution-drift tuning bag attached to mode 1 responses
pub fn mode1_hyperparameters() -> Value {
    let mut rng = rand::thread_rng();
    json!({
        "ksThreshold": round2(rng.gen_range(0.05..0.15)),
        "wassersteinThreshold": round2(rng.gen_range(0.5..1.5)),
        "mseThreshold": round2(rng.gen_range(0.1..0.3)),
        "monitoringWindow": ([7, 14, 30][rng.gen_range(0..3)]),
        "confidenceLevel": round2(rng.gen_range(0.9..0.99)),
    })
}

/// Drift-alerting tuning bag attached to mode 2 responses
pub fn mode2_hyperparameters() -> Value {
    let mut rng = rand::thread_rng();
    json!({
        "driftThreshold": round2(rng.gen_range(0.1..0.2)),
        "windowSize": ([7, 14, 30][rng.gen_range(0..3)]),
        "confidenceLevel": round2(rng.gen_range(0.9..0.99)),
        "minSamples": ([1000, 5000, 10_000][rng.gen_range(0..3)]),
        "alertThreshold": ([3, 5, 7][rng.gen_range(0..3)]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanum_id_shape() {
        for _ in 0..50 {
            let id = alphanum_id();
            assert_eq!(id.len(), 6);
            assert!(id
                .bytes()
                .all(|b| ID_ALPHABET.contains(&b)), "unexpected char in {id}");
        }
    }

    #[test]
    fn test_tagged_id_prefix() {
        let id = tagged_id("KPI");
        assert!(id.starts_with("KPI-"));
        assert_eq!(id.len(), 10);
    }

    #[test]
    fn test_percentage_error() {
        assert_eq!(percentage_error(15.0, 1000.0), 1.5);
        assert_eq!(percentage_error(-15.0, 1000.0), 1.5);
        assert_eq!(percentage_error(1.0, 3.0), 33.33);
        assert_eq!(percentage_error(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_unit_context_selection() {
        let (code, ctx) = unit_context(Some("JMSL"));
        assert_eq!(code, "JMSL");
        assert_eq!(ctx.alert_keeper, "JMSL Admin");

        // Absent unit still resolves to a recognized one
        let (code, _) = unit_context(None);
        assert!(VALID_UNITS.contains(&code));
    }

    #[test]
    fn test_xai_pool_fallback() {
        assert_eq!(xai_pool(Some("CCS")).len(), 4);
        assert!(xai_pool(Some("CCS"))[0].starts_with("CCS:"));
        assert_eq!(xai_pool(None), DEFAULT_EXPLANATIONS);
    }

    #[test]
    fn test_error_series_shape() {
        let (plot, table) = error_series();
        assert_eq!(plot.len(), 30);
        assert_eq!(table.len(), 30);
        for (point, row) in plot.iter().zip(&table) {
            assert!((5.0..=20.0).contains(&point.y));
            assert_eq!(point.exceeds_threshold, point.y > 15.0);
            assert_eq!(point.x, row.time_period);
            assert_eq!(
                row.percentage_error,
                percentage_error(row.error, row.mean_prediction)
            );
        }
        // Consecutive daily buckets
        assert!(plot.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_hyperparameter_strings() {
        assert!(business_units_hyperparameters().starts_with("Refresh Interval: "));
        assert!(errors_hyperparameters().starts_with("Error Threshold: "));
    }
}
