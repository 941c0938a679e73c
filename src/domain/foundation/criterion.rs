//! Criterion definitions: the ordered columns every alternative is judged on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw values are more desirable.
    Benefit,
    /// Lower raw values are more desirable.
    Cost,
}

impl CriterionType {
    /// Returns the configuration label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "benefit",
            CriterionType::Cost => "cost",
        }
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CriterionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            other => Err(format!("unknown criterion type '{}'", other)),
        }
    }
}

/// A named criterion with its preference direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CriterionType,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(name: impl Into<String>, kind: CriterionType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, CriterionType::Cost)
    }
}

/// Ordered, non-empty list of uniquely named criteria.
///
/// The position of a criterion here is its column index in the decision
/// matrix, its row/column in the comparison matrix, and its slot in the
/// weight vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaSet(Vec<Criterion>);

impl CriteriaSet {
    /// Creates a criteria set, rejecting empty lists and duplicate names.
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ConfigurationError> {
        if criteria.is_empty() {
            return Err(ConfigurationError::EmptyCriteria);
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.name.as_str()) {
                return Err(ConfigurationError::DuplicateCriterion(
                    criterion.name.clone(),
                ));
            }
        }

        Ok(Self(criteria))
    }

    /// Builds criteria from parallel name and type lists.
    pub fn from_parts(
        names: &[impl AsRef<str>],
        kinds: &[CriterionType],
    ) -> Result<Self, ConfigurationError> {
        if names.len() != kinds.len() {
            return Err(ConfigurationError::CriterionCountMismatch {
                expected: names.len(),
                actual: kinds.len(),
            });
        }

        Self::new(
            names
                .iter()
                .zip(kinds)
                .map(|(name, kind)| Criterion::new(name.as_ref(), *kind))
                .collect(),
        )
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates criteria in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.0.iter()
    }

    /// Returns the criterion at a column index.
    pub fn get(&self, index: usize) -> Option<&Criterion> {
        self.0.get(index)
    }

    /// Returns the preference directions in column order.
    pub fn kinds(&self) -> Vec<CriterionType> {
        self.0.iter().map(|c| c.kind).collect()
    }

    /// Returns the criterion names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the name of the criterion at `index`, or a positional label.
    pub fn name_of(&self, index: usize) -> String {
        self.0
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("C{}", index + 1))
    }
}

impl<'de> Deserialize<'de> for CriteriaSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let criteria = Vec::<Criterion>::deserialize(deserializer)?;
        CriteriaSet::new(criteria).map_err(serde::de::Error::custom)
    }
}
