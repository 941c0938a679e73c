//! Decision Matrix - Core data structure for multi-criteria scoring.

use serde::Serialize;

use crate::domain::foundation::{
    Alternative, CriteriaSet, Criterion, CriterionType, RankingError, ValidationError,
};

/// Alternatives x criteria table of raw values.
///
/// Every alternative carries exactly one finite value per criterion, in
/// criterion order. Construction enforces this so scorers can index freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria: CriteriaSet,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a decision matrix after checking row widths and values.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAlternatives` if no alternatives are given
    /// - `ValidationError::RowWidthMismatch` if a row has the wrong number of values
    /// - `ValidationError::NonFiniteValue` for NaN or infinite values
    pub fn new(criteria: CriteriaSet, alternatives: Vec<Alternative>) -> Result<Self, RankingError> {
        if alternatives.is_empty() {
            return Err(ValidationError::EmptyAlternatives.into());
        }

        for alternative in &alternatives {
            if alternative.width() != criteria.len() {
                return Err(ValidationError::RowWidthMismatch {
                    alternative: alternative.id.clone(),
                    expected: criteria.len(),
                    actual: alternative.width(),
                }
                .into());
            }
            if let Some(j) = alternative.values.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::NonFiniteValue {
                    alternative: alternative.id.clone(),
                    criterion: criteria.name_of(j),
                }
                .into());
            }
        }

        Ok(Self {
            criteria,
            alternatives,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the criteria.
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Returns the alternatives in input order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the preference direction of every criterion.
    pub fn kinds(&self) -> Vec<CriterionType> {
        self.criteria.kinds()
    }

    /// Returns all values of one criterion, in alternative order.
    pub fn column(&self, criterion: usize) -> Vec<f64> {
        self.alternatives
            .iter()
            .map(|alt| alt.values[criterion])
            .collect()
    }

    /// Returns the name of a criterion column.
    pub fn criterion_name(&self, criterion: usize) -> String {
        self.criteria.name_of(criterion)
    }

    /// Consumes the matrix, returning its alternatives.
    pub fn into_alternatives(self) -> Vec<Alternative> {
        self.alternatives
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<Criterion>,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion.
    pub fn criterion(mut self, name: impl Into<String>, kind: CriterionType) -> Self {
        self.criteria.push(Criterion::new(name, kind));
        self
    }

    /// Adds a benefit criterion.
    pub fn benefit(self, name: impl Into<String>) -> Self {
        self.criterion(name, CriterionType::Benefit)
    }

    /// Adds a cost criterion.
    pub fn cost(self, name: impl Into<String>) -> Self {
        self.criterion(name, CriterionType::Cost)
    }

    /// Adds an alternative.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.alternatives.push(alternative);
        self
    }

    /// Adds an alternative with only an identifier and values.
    pub fn row(self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.alternative(Alternative::anonymous(id, values))
    }

    /// Builds the decision matrix.
    pub fn build(self) -> Result<DecisionMatrix, RankingError> {
        let criteria = CriteriaSet::new(self.criteria).map_err(RankingError::from)?;
        DecisionMatrix::new(criteria, self.alternatives)
    }
}
