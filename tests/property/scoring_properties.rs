use mcdm_ranker::application::RankingPipeline;
use mcdm_ranker::domain::analysis::{
    ComparisonMatrix, DecisionMatrix, SawScorer, Scorer, TopsisScorer, WeightDeriver,
    WeightVector, WpScorer,
};
use mcdm_ranker::domain::foundation::{Alternative, CriteriaSet, Criterion, CriterionType};
use proptest::prelude::*;

const SAATY_SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

/// Reciprocal comparison matrix of size `n` on the Saaty scale.
fn comparison_of_size(n: usize) -> impl Strategy<Value = ComparisonMatrix> {
    prop::collection::vec(prop::sample::select(SAATY_SCALE.to_vec()), n * (n - 1) / 2).prop_map(
        move |upper| {
            let mut rows = vec![vec![1.0; n]; n];
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    rows[i][j] = upper[k];
                    rows[j][i] = 1.0 / upper[k];
                    k += 1;
                }
            }
            ComparisonMatrix::new(rows).unwrap()
        },
    )
}

fn comparison_matrix() -> impl Strategy<Value = ComparisonMatrix> {
    (1usize..=10).prop_flat_map(comparison_of_size)
}

/// Strictly positive decision matrices with 2..8 alternatives and 1..5
/// criteria. The first criterion is always a cost criterion.
fn decision_matrix(
    alternatives: std::ops::Range<usize>,
) -> impl Strategy<Value = DecisionMatrix> {
    (alternatives, 1usize..5).prop_flat_map(|(m, n)| {
        (
            prop::collection::vec(any::<bool>(), n - 1),
            prop::collection::vec(prop::collection::vec(1.0f64..1000.0, n), m),
        )
            .prop_map(|(benefit_flags, rows)| {
                let mut criteria = vec![Criterion::cost("C1")];
                for (j, benefit) in benefit_flags.into_iter().enumerate() {
                    let kind = if benefit {
                        CriterionType::Benefit
                    } else {
                        CriterionType::Cost
                    };
                    criteria.push(Criterion::new(format!("C{}", j + 2), kind));
                }
                let alternatives = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, values)| Alternative::anonymous(format!("A{}", i + 1), values))
                    .collect();
                DecisionMatrix::new(CriteriaSet::new(criteria).unwrap(), alternatives).unwrap()
            })
    })
}

fn weights_for(matrix: &DecisionMatrix, raw: &[f64]) -> WeightVector {
    let slice = &raw[..matrix.criterion_count()];
    let total: f64 = slice.iter().sum();
    let mut normalized: Vec<f64> = slice.iter().map(|w| w / total).collect();
    let drift = 1.0 - normalized.iter().sum::<f64>();
    normalized[0] += drift;
    WeightVector::new(normalized).unwrap()
}

fn scorers() -> Vec<Box<dyn Scorer>> {
    vec![
        Box::new(SawScorer::new()),
        Box::new(WpScorer::new()),
        Box::new(TopsisScorer::new()),
    ]
}

fn with_cost_improved(matrix: &DecisionMatrix, factor: f64) -> DecisionMatrix {
    let mut alternatives = matrix.alternatives().to_vec();
    alternatives[0].values[0] *= factor;
    DecisionMatrix::new(matrix.criteria().clone(), alternatives).unwrap()
}

fn reversed(matrix: &DecisionMatrix) -> DecisionMatrix {
    let mut alternatives = matrix.alternatives().to_vec();
    alternatives.reverse();
    DecisionMatrix::new(matrix.criteria().clone(), alternatives).unwrap()
}

proptest! {
    #[test]
    fn derived_weights_sum_to_one_and_are_non_negative(matrix in comparison_matrix()) {
        let derived = WeightDeriver::new().derive(&matrix).unwrap();
        let weights = derived.weights.as_slice();

        prop_assert_eq!(weights.len(), matrix.size());
        prop_assert!((derived.weights.sum() - 1.0).abs() < 1e-9);
        prop_assert!(weights.iter().all(|w| *w >= 0.0));
        prop_assert!(derived.consistency.consistency_ratio.is_finite());
    }

    #[test]
    fn every_scorer_returns_one_score_per_alternative_in_order(
        matrix in decision_matrix(2..8),
        raw in prop::collection::vec(0.05f64..1.0, 5),
    ) {
        let weights = weights_for(&matrix, &raw);
        let flipped = reversed(&matrix);

        for scorer in scorers() {
            let scores = scorer.score(&matrix, &weights).unwrap();
            let mut flipped_scores = scorer.score(&flipped, &weights).unwrap();
            flipped_scores.reverse();

            prop_assert_eq!(scores.len(), matrix.alternative_count());
            for (a, b) in scores.iter().zip(&flipped_scores) {
                prop_assert!((a - b).abs() < 1e-9, "{} {} vs {}", scorer.method(), a, b);
            }
        }
    }

    #[test]
    fn topsis_scores_stay_in_unit_interval(
        matrix in decision_matrix(2..8),
        raw in prop::collection::vec(0.05f64..1.0, 5),
    ) {
        let weights = weights_for(&matrix, &raw);
        let scores = TopsisScorer::new().score(&matrix, &weights).unwrap();
        prop_assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn wp_preferences_sum_to_one(
        matrix in decision_matrix(2..8),
        raw in prop::collection::vec(0.05f64..1.0, 5),
    ) {
        let weights = weights_for(&matrix, &raw);
        let scores = WpScorer::new().score(&matrix, &weights).unwrap();
        prop_assert!((scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lowering_a_cost_never_lowers_saw_or_wp_score(
        matrix in decision_matrix(2..8),
        raw in prop::collection::vec(0.05f64..1.0, 5),
        factor in 0.1f64..1.0,
    ) {
        let weights = weights_for(&matrix, &raw);
        let improved = with_cost_improved(&matrix, factor);

        for scorer in [&SawScorer::new() as &dyn Scorer, &WpScorer::new()] {
            let before = scorer.score(&matrix, &weights).unwrap()[0];
            let after = scorer.score(&improved, &weights).unwrap()[0];
            prop_assert!(after >= before - 1e-12, "{}: {} -> {}", scorer.method(), before, after);
        }
    }

    #[test]
    fn lowering_a_cost_never_lowers_topsis_score(
        matrix in decision_matrix(2..8),
        raw in prop::collection::vec(0.05f64..1.0, 5),
        factor in 0.1f64..1.0,
    ) {
        let weights = weights_for(&matrix, &raw);
        let improved = with_cost_improved(&matrix, factor);

        let before = TopsisScorer::new().score(&matrix, &weights).unwrap()[0];
        let after = TopsisScorer::new().score(&improved, &weights).unwrap()[0];
        prop_assert!(after >= before - 1e-9, "{} -> {}", before, after);
    }

    #[test]
    fn pipeline_runs_are_idempotent(
        (matrix, comparison) in decision_matrix(2..8).prop_flat_map(|matrix| {
            let n = matrix.criterion_count();
            (Just(matrix), comparison_of_size(n))
        }),
    ) {
        let pipeline = RankingPipeline::new();

        let first = pipeline.run(&matrix, &comparison).unwrap();
        let second = pipeline.run(&matrix, &comparison).unwrap();

        prop_assert_eq!(&first.weights, &second.weights);
        prop_assert_eq!(&first.table, &second.table);
    }
}
