//! Mode descriptor table
//!
//! One declarative table maps each monitoring mode to its KPI field list,
//! a synthetic rule per field, and whether the metadata store is consulted.
//! Every metrics endpoint assembles its payload through this table.

use std::collections::HashMap;

use rand::{rngs::ThreadRng, Rng};

use crate::models::KpiRow;
use crate::synthetic::{self, UnitContext};

/// Synthetic value rule for one KPI field
pub enum FieldRule {
    /// Current time in alert-time format
    AlertTimestamp,
    /// Uniform integer, inclusive bounds
    IntRange(i64, i64),
    /// Uniform float with fixed display precision
    FloatRange { lo: f64, hi: f64, precision: usize },
    /// Uniform draw from a fixed pool
    Choice(&'static [&'static str]),
    /// Literal value
    Fixed(&'static str),
    /// Alert keeper from the unit context
    UnitKeeper,
    /// Status from the unit context's restricted pool
    UnitStatus,
}

impl FieldRule {
    fn render(&self, rng: &mut ThreadRng, ctx: &UnitContext) -> String {
        match self {
            FieldRule::AlertTimestamp => synthetic::alert_timestamp(),
            FieldRule::IntRange(lo, hi) => rng.gen_range(*lo..=*hi).to_string(),
            FieldRule::FloatRange { lo, hi, precision } => {
                format!("{:.*}", *precision, rng.gen_range(*lo..*hi))
            }
            FieldRule::Choice(pool) => synthetic::choose(rng, pool).to_string(),
            FieldRule::Fixed(value) => (*value).to_string(),
            FieldRule::UnitKeeper => ctx.alert_keeper.to_string(),
            FieldRule::UnitStatus => synthetic::choose(rng, ctx.status_pool).to_string(),
        }
    }
}

/// One KPI field in a mode's payload
pub struct FieldSpec {
    pub row_key: &'static str,
    pub rule: FieldRule,
}

/// Declarative description of one monitoring mode
pub struct ModeDescriptor {
    pub mode: i64,
    /// Store rows override the synthetic defaults when available
    pub store_backed: bool,
    /// Id prefix on emitted rows, for the modes that carry ids
    pub id_prefix: Option<&'static str>,
    /// Rows carry businessUnit/useCase fields from the unit context
    pub unit_flavored: bool,
    pub fields: &'static [FieldSpec],
}

/// Distribution-drift KPIs with per-field store overrides
const MODE1_FIELDS: &[FieldSpec] = &[
    FieldSpec { row_key: "alertTime", rule: FieldRule::AlertTimestamp },
    FieldSpec { row_key: "runtimeCount", rule: FieldRule::IntRange(100, 200) },
    FieldSpec { row_key: "alertKeeper", rule: FieldRule::Fixed("System Admin") },
    FieldSpec { row_key: "kstest", rule: FieldRule::FloatRange { lo: 0.1, hi: 0.5, precision: 2 } },
    FieldSpec { row_key: "wasserstein", rule: FieldRule::FloatRange { lo: 0.5, hi: 2.0, precision: 2 } },
    FieldSpec { row_key: "mseRef", rule: FieldRule::FloatRange { lo: 0.1, hi: 0.2, precision: 2 } },
    FieldSpec { row_key: "mseCurrent", rule: FieldRule::FloatRange { lo: 0.15, hi: 0.3, precision: 2 } },
    FieldSpec { row_key: "status", rule: FieldRule::Choice(synthetic::STATUS_POOL) },
];

/// Unit-flavored drift alerting KPIs
const MODE2_FIELDS: &[FieldSpec] = &[
    FieldSpec { row_key: "alertTime", rule: FieldRule::AlertTimestamp },
    FieldSpec { row_key: "runtimeCount", rule: FieldRule::IntRange(100, 200) },
    FieldSpec { row_key: "alertKeeper", rule: FieldRule::UnitKeeper },
    FieldSpec { row_key: "driftScore", rule: FieldRule::FloatRange { lo: 0.1, hi: 0.5, precision: 2 } },
    FieldSpec { row_key: "driftTrend", rule: FieldRule::Choice(&["increasing", "decreasing", "stable"]) },
    FieldSpec { row_key: "status", rule: FieldRule::UnitStatus },
];

/// Divergence scores plus reference/current confusion blocks; no store
const MODE3_FIELDS: &[FieldSpec] = &[
    FieldSpec { row_key: "alertTime", rule: FieldRule::AlertTimestamp },
    FieldSpec { row_key: "alertKeeper", rule: FieldRule::Fixed("System Admin") },
    FieldSpec { row_key: "jensenShannon", rule: FieldRule::FloatRange { lo: 0.1, hi: 0.3, precision: 3 } },
    FieldSpec { row_key: "psi", rule: FieldRule::FloatRange { lo: 0.05, hi: 0.2, precision: 3 } },
    FieldSpec { row_key: "status", rule: FieldRule::Choice(synthetic::STATUS_POOL) },
    FieldSpec { row_key: "refTrueA", rule: FieldRule::IntRange(800, 1200) },
    FieldSpec { row_key: "refFalseB", rule: FieldRule::IntRange(30, 100) },
    FieldSpec { row_key: "refTrueB", rule: FieldRule::IntRange(800, 1200) },
    FieldSpec { row_key: "refFalseA", rule: FieldRule::IntRange(30, 100) },
    FieldSpec { row_key: "refPrecision", rule: FieldRule::FloatRange { lo: 0.85, hi: 0.95, precision: 3 } },
    FieldSpec { row_key: "refRecall", rule: FieldRule::FloatRange { lo: 0.8, hi: 0.9, precision: 3 } },
    FieldSpec { row_key: "refF1", rule: FieldRule::FloatRange { lo: 0.8, hi: 0.9, precision: 3 } },
    FieldSpec { row_key: "refAccuracy", rule: FieldRule::FloatRange { lo: 0.85, hi: 0.95, precision: 3 } },
    FieldSpec { row_key: "currTrueA", rule: FieldRule::IntRange(800, 1200) },
    FieldSpec { row_key: "currFalseB", rule: FieldRule::IntRange(30, 100) },
    FieldSpec { row_key: "currTrueB", rule: FieldRule::IntRange(800, 1200) },
    FieldSpec { row_key: "currFalseA", rule: FieldRule::IntRange(30, 100) },
    FieldSpec { row_key: "currPrecision", rule: FieldRule::FloatRange { lo: 0.85, hi: 0.95, precision: 3 } },
    FieldSpec { row_key: "currRecall", rule: FieldRule::FloatRange { lo: 0.8, hi: 0.9, precision: 3 } },
    FieldSpec { row_key: "currF1", rule: FieldRule::FloatRange { lo: 0.8, hi: 0.9, precision: 3 } },
    FieldSpec { row_key: "currAccuracy", rule: FieldRule::FloatRange { lo: 0.85, hi: 0.95, precision: 3 } },
];

/// Static performance-degradation snapshot; no store
const MODE4_FIELDS: &[FieldSpec] = &[
    FieldSpec { row_key: "runtime", rule: FieldRule::Fixed("00:12:34") },
    FieldSpec { row_key: "currTrueA", rule: FieldRule::Fixed("95") },
    FieldSpec { row_key: "currFalseB", rule: FieldRule::Fixed("22") },
    FieldSpec { row_key: "currFalseA", rule: FieldRule::Fixed("15") },
    FieldSpec { row_key: "currTrueB", rule: FieldRule::Fixed("78") },
    FieldSpec { row_key: "currPrecision", rule: FieldRule::Fixed("0.79") },
    FieldSpec { row_key: "currRecall", rule: FieldRule::Fixed("0.80") },
    FieldSpec { row_key: "currF1", rule: FieldRule::Fixed("0.79") },
    FieldSpec { row_key: "currAccuracy", rule: FieldRule::Fixed("0.85") },
    FieldSpec { row_key: "refTrueA", rule: FieldRule::Fixed("105") },
    FieldSpec { row_key: "refFalseB", rule: FieldRule::Fixed("18") },
    FieldSpec { row_key: "refFalseA", rule: FieldRule::Fixed("10") },
    FieldSpec { row_key: "refTrueB", rule: FieldRule::Fixed("85") },
    FieldSpec { row_key: "refPrecision", rule: FieldRule::Fixed("0.85") },
    FieldSpec { row_key: "refRecall", rule: FieldRule::Fixed("0.86") },
    FieldSpec { row_key: "refF1", rule: FieldRule::Fixed("0.85") },
    FieldSpec { row_key: "refAccuracy", rule: FieldRule::Fixed("0.90") },
    FieldSpec { row_key: "confusionMatrixRef", rule: FieldRule::Fixed("[[105,18],[10,85]]") },
    FieldSpec { row_key: "confusionMatrixCurr", rule: FieldRule::Fixed("[[95,22],[15,78]]") },
    FieldSpec { row_key: "hyperparameter", rule: FieldRule::Fixed("Auto") },
    FieldSpec { row_key: "psi", rule: FieldRule::Fixed("0.72") },
    FieldSpec {
        row_key: "xaiAnalysis",
        rule: FieldRule::Fixed("Moderate performance degradation detected in precision and recall"),
    },
    FieldSpec { row_key: "errorRate", rule: FieldRule::Fixed("0.18") },
    FieldSpec { row_key: "misclassificationRate", rule: FieldRule::Fixed("0.14") },
    FieldSpec {
        row_key: "worstCases",
        rule: FieldRule::Fixed("2023-02-01:20%,2023-02-02:16%,2023-02-03:14%"),
    },
    FieldSpec {
        row_key: "recommendation",
        rule: FieldRule::Fixed("Monitor closely and consider retraining if trend continues"),
    },
    FieldSpec { row_key: "alertTime", rule: FieldRule::Fixed("2023-07-10 10:45:00") },
    FieldSpec { row_key: "runtimeCount", rule: FieldRule::Fixed("45") },
    FieldSpec { row_key: "alertKeeper", rule: FieldRule::Fixed("AI Monitoring System") },
];

pub static MODES: [ModeDescriptor; 4] = [
    ModeDescriptor {
        mode: 1,
        store_backed: true,
        id_prefix: Some("KPI"),
        unit_flavored: false,
        fields: MODE1_FIELDS,
    },
    ModeDescriptor {
        mode: 2,
        store_backed: true,
        id_prefix: Some("KPI"),
        unit_flavored: true,
        fields: MODE2_FIELDS,
    },
    ModeDescriptor {
        mode: 3,
        store_backed: false,
        id_prefix: None,
        unit_flavored: false,
        fields: MODE3_FIELDS,
    },
    ModeDescriptor {
        mode: 4,
        store_backed: false,
        id_prefix: None,
        unit_flavored: false,
        fields: MODE4_FIELDS,
    },
];

/// Look up the descriptor for a mode number
pub fn descriptor(mode: i64) -> Option<&'static ModeDescriptor> {
    MODES.iter().find(|d| d.mode == mode)
}

/// Assemble the KPI list for one mode.
///
/// Store rows, when present, override the synthetic default field by field;
/// the declared field list is always emitted in full, so a partially
/// populated store never shrinks the payload.
pub fn assemble_kpis(
    desc: &ModeDescriptor,
    unit: Option<&str>,
    store_rows: Option<&HashMap<String, String>>,
) -> Vec<KpiRow> {
    let mut rng = rand::thread_rng();
    let (unit_code, ctx) = synthetic::unit_context(unit);

    desc.fields
        .iter()
        .map(|field| {
            let value = store_rows
                .and_then(|rows| rows.get(field.row_key).cloned())
                .unwrap_or_else(|| field.rule.render(&mut rng, ctx));
            let use_case = desc
                .unit_flavored
                .then(|| synthetic::choose(&mut rng, ctx.use_cases).to_string());
            KpiRow {
                id: desc.id_prefix.map(synthetic::tagged_id),
                row_key: field.row_key.to_string(),
                value,
                status: desc.unit_flavored.then(|| "Normal".to_string()),
                business_unit: desc.unit_flavored.then(|| unit_code.to_string()),
                use_case,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_lookup() {
        assert!(descriptor(1).is_some());
        assert!(descriptor(4).is_some());
        assert!(descriptor(0).is_none());
        assert!(descriptor(9).is_none());
    }

    #[test]
    fn test_mode3_field_set_is_fixed() {
        let desc = descriptor(3).unwrap();
        assert_eq!(desc.fields.len(), 21);
        assert!(!desc.store_backed);
        assert_eq!(desc.fields[0].row_key, "alertTime");
        assert_eq!(desc.fields[20].row_key, "currAccuracy");
    }

    #[test]
    fn test_assemble_emits_every_field() {
        let desc = descriptor(1).unwrap();
        let kpis = assemble_kpis(desc, None, None);
        assert_eq!(kpis.len(), desc.fields.len());
        for (kpi, field) in kpis.iter().zip(desc.fields) {
            assert_eq!(kpi.row_key, field.row_key);
            assert!(!kpi.value.is_empty());
            assert!(kpi.id.as_deref().unwrap().starts_with("KPI-"));
        }
    }

    #[test]
    fn test_store_rows_override_field_values() {
        let desc = descriptor(1).unwrap();
        let mut rows = HashMap::new();
        rows.insert("kstest".to_string(), "0.42".to_string());
        let kpis = assemble_kpis(desc, None, Some(&rows));

        let kstest = kpis.iter().find(|k| k.row_key == "kstest").unwrap();
        assert_eq!(kstest.value, "0.42");
        // Fields without overrides still get synthetic values
        assert_eq!(kpis.len(), desc.fields.len());
    }

    #[test]
    fn test_unit_flavoring_on_mode2() {
        let desc = descriptor(2).unwrap();
        let kpis = assemble_kpis(desc, Some("CCS"), None);
        for kpi in &kpis {
            assert_eq!(kpi.business_unit.as_deref(), Some("CCS"));
            assert!(["CC-Di", "CC-MT"].contains(&kpi.use_case.as_deref().unwrap()));
        }
        let keeper = kpis.iter().find(|k| k.row_key == "alertKeeper").unwrap();
        assert_eq!(keeper.value, "CCS Admin");
    }

    #[test]
    fn test_mode4_values_are_static() {
        let desc = descriptor(4).unwrap();
        let first = assemble_kpis(desc, None, None);
        let second = assemble_kpis(desc, None, None);
        let values = |kpis: &[KpiRow]| kpis.iter().map(|k| k.value.clone()).collect::<Vec<_>>();
        assert_eq!(values(&first), values(&second));
    }
}
