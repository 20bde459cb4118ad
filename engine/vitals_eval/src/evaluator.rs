use serde::Serialize;
use vitals_fuzzy::{catalog, Catalog, LinguisticVariable, VariableKey};
use vitals_record::Record;

use crate::error::{ExplainError, ExplainResult};

/// Degree of one linguistic set for the evaluated reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Membership {
    pub label: &'static str,
    pub degree: f64,
}

/// Memberships of one reading across every set of its variable.
///
/// Degrees are independent per set and are not normalized; neighbouring
/// sets may both report `1.0` on a shared breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipResult {
    pub variable_key: VariableKey,
    pub display_name: &'static str,
    pub raw_value: f64,
    pub memberships: Vec<Membership>,
}

impl MembershipResult {
    pub fn degree_of(&self, label: &str) -> Option<f64> {
        self.memberships
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.degree)
    }

    /// Set with the highest non-zero degree; the earliest one wins ties.
    pub fn dominant(&self) -> Option<&Membership> {
        self.memberships
            .iter()
            .filter(|m| m.degree > 0.0)
            .fold(None, |best: Option<&Membership>, m| match best {
                Some(b) if b.degree >= m.degree => Some(b),
                _ => Some(m),
            })
    }
}

/// Applies a catalog to records. Holds no state besides the catalog
/// reference, so one evaluator can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c Catalog,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self {
            catalog: catalog(),
        }
    }
}

impl<'c> Evaluator<'c> {
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// One result per catalog variable, in catalog order.
    pub fn evaluate(&self, record: &Record) -> Vec<MembershipResult> {
        self.catalog
            .iter()
            .map(|var| {
                let raw = record.reading(var.key);
                if !var.contains(raw) {
                    log::warn!(
                        "{} reading {raw} lies outside [{}, {}]; memberships may all be zero",
                        var.key,
                        var.domain_min,
                        var.domain_max
                    );
                }
                fuzzify(var, raw)
            })
            .collect()
    }

    /// Variables whose reading falls outside the catalog domain.
    pub fn out_of_domain(&self, record: &Record) -> Vec<VariableKey> {
        self.catalog
            .iter()
            .filter(|var| !var.contains(record.reading(var.key)))
            .map(|var| var.key)
            .collect()
    }
}

/// Evaluate a single reading against every set of `var`.
pub fn fuzzify(var: &LinguisticVariable, raw: f64) -> MembershipResult {
    let memberships: Vec<Membership> = var
        .sets
        .iter()
        .map(|set| Membership {
            label: set.label,
            degree: set.degree(raw),
        })
        .collect();
    log::debug!(
        "fuzzify {}={raw}: {:?}",
        var.key,
        memberships
            .iter()
            .map(|m| (m.label, m.degree))
            .collect::<Vec<_>>()
    );
    MembershipResult {
        variable_key: var.key,
        display_name: var.display_name,
        raw_value: raw,
        memberships,
    }
}

/// Evaluate `record` against the global catalog.
pub fn evaluate(record: &Record) -> Vec<MembershipResult> {
    Evaluator::default().evaluate(record)
}

/// Like [`evaluate`], but rejects an absent record instead of producing
/// partial output.
pub fn try_evaluate(record: Option<&Record>) -> ExplainResult<Vec<MembershipResult>> {
    match record {
        Some(record) => Ok(evaluate(record)),
        None => {
            log::debug!("evaluation requested without a record");
            Err(ExplainError::MissingRecord)
        }
    }
}

pub fn out_of_domain(record: &Record) -> Vec<VariableKey> {
    Evaluator::default().out_of_domain(record)
}
