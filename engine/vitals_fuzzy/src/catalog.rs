//! Static linguistic variable catalog for the four physiological readings.
//!
//! The catalog is built once on first access and handed out as
//! `&'static Catalog`; there is no way to mutate the shared instance.

use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::membership::FuzzySetShape;

lazy_static! {
    static ref CATALOG: Catalog = Catalog::builtin();
}

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Identifies one physiological reading of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKey {
    Bmi,
    HeartRate,
    SleepHours,
    ExerciseLevel,
}

impl VariableKey {
    /// All keys in display order.
    pub const ALL: [VariableKey; 4] = [
        VariableKey::Bmi,
        VariableKey::HeartRate,
        VariableKey::SleepHours,
        VariableKey::ExerciseLevel,
    ];

    /// Field name used by the prediction service for this reading.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKey::Bmi => "bmi",
            VariableKey::HeartRate => "heart_rate",
            VariableKey::SleepHours => "sleep_hours",
            VariableKey::ExerciseLevel => "exercise_level",
        }
    }
}

impl fmt::Display for VariableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named category of a variable, e.g. "Underweight".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinguisticSet {
    pub label: &'static str,
    pub shape: FuzzySetShape,
}

impl LinguisticSet {
    pub fn degree(&self, x: f64) -> f64 {
        self.shape.degree(x)
    }
}

/// A physiological reading modeled as an ordered family of fuzzy sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinguisticVariable {
    pub key: VariableKey,
    pub display_name: &'static str,
    pub domain_min: f64,
    pub domain_max: f64,
    /// Display order, preserved in evaluation output.
    pub sets: Vec<LinguisticSet>,
}

impl LinguisticVariable {
    pub fn new(key: VariableKey, display_name: &'static str, domain: (f64, f64)) -> Self {
        Self {
            key,
            display_name,
            domain_min: domain.0,
            domain_max: domain.1,
            sets: Vec::new(),
        }
    }

    pub fn with_set(mut self, label: &'static str, shape: FuzzySetShape) -> Self {
        self.sets.push(LinguisticSet { label, shape });
        self
    }

    /// Whether `x` lies inside the accepted input domain (inclusive).
    pub fn contains(&self, x: f64) -> bool {
        x >= self.domain_min && x <= self.domain_max
    }

    pub fn set(&self, label: &str) -> Option<&LinguisticSet> {
        self.sets.iter().find(|s| s.label == label)
    }
}

/// Ordered collection of linguistic variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    variables: Vec<LinguisticVariable>,
}

impl Catalog {
    /// The fixed BMI / heart rate / sleep / exercise parameterization.
    pub fn builtin() -> Self {
        use FuzzySetShape as S;

        let bmi = LinguisticVariable::new(VariableKey::Bmi, "BMI", (10.0, 40.0))
            .with_set("Underweight", S::trapezoid(10.0, 10.0, 15.0, 18.0))
            .with_set("Normal", S::triangle(18.0, 22.0, 25.0))
            .with_set("Overweight", S::triangle(25.0, 27.0, 30.0))
            .with_set("Obese", S::trapezoid(30.0, 35.0, 40.0, 40.0));

        let heart_rate = LinguisticVariable::new(VariableKey::HeartRate, "Heart Rate", (40.0, 180.0))
            .with_set("Low", S::trapezoid(40.0, 40.0, 50.0, 60.0))
            .with_set("Normal", S::triangle(60.0, 80.0, 100.0))
            .with_set("High", S::triangle(100.0, 120.0, 140.0))
            .with_set("Dangerous", S::trapezoid(140.0, 160.0, 180.0, 180.0));

        let sleep_hours = LinguisticVariable::new(VariableKey::SleepHours, "Sleep Hours", (0.0, 12.0))
            .with_set("Poor", S::trapezoid(0.0, 0.0, 2.0, 4.0))
            .with_set("Moderate", S::triangle(4.0, 5.0, 6.0))
            .with_set("Good", S::triangle(6.0, 7.0, 8.0))
            .with_set("Excellent", S::trapezoid(8.0, 10.0, 12.0, 12.0));

        let exercise_level =
            LinguisticVariable::new(VariableKey::ExerciseLevel, "Exercise Level", (0.0, 7.0))
                .with_set("None", S::triangle(0.0, 0.0, 0.5))
                .with_set("Low", S::triangle(0.5, 1.5, 2.5))
                .with_set("Medium", S::triangle(2.5, 4.0, 5.5))
                .with_set("High", S::trapezoid(5.5, 6.5, 7.0, 7.0));

        Self {
            variables: vec![bmi, heart_rate, sleep_hours, exercise_level],
        }
    }

    /// A catalog over caller-supplied variables, kept in the given order.
    pub fn from_variables(variables: Vec<LinguisticVariable>) -> Self {
        Self { variables }
    }

    pub fn variables(&self) -> &[LinguisticVariable] {
        &self.variables
    }

    pub fn variable(&self, key: VariableKey) -> Option<&LinguisticVariable> {
        self.variables.iter().find(|v| v.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinguisticVariable> {
        self.variables.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LinguisticVariable;
    type IntoIter = std::slice::Iter<'a, LinguisticVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}
