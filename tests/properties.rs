//! Property tests for the optimizer operators and the orchestrator bounds.

use probeforge::engines::generation::operators::{crossover, mutate, recombine, select_population, word_count};
use probeforge::similarity::null_model;
use probeforge::types::StrategyId;
use probeforge::{AppConfig, FilterStrength, FitnessEvaluator, GenerationRequest, Orchestrator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,8}",
            Just("help".to_string()),
            Just("Explain,".to_string()),
            Just("provide".to_string()),
            Just("need!".to_string()),
        ],
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

fn arb_strategies() -> impl Strategy<Value = Vec<StrategyId>> {
    prop::sample::subsequence(StrategyId::ALL.to_vec(), 0..=StrategyId::ALL.len())
}

fn arb_filter() -> impl Strategy<Value = FilterStrength> {
    prop_oneof![
        Just(FilterStrength::Weak),
        Just(FilterStrength::Medium),
        Just(FilterStrength::Strong),
    ]
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mutation_preserves_word_count(text in arb_sentence(), rate in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = mutate(&text, rate, &mut rng);
        prop_assert_eq!(word_count(&mutated), word_count(&text));
    }

    #[test]
    fn crossover_preserves_total_word_count(
        a in arb_sentence(),
        b in arb_sentence(),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (c1, c2) = crossover(&a, &b, rate, &mut rng);
        prop_assert_eq!(word_count(&c1) + word_count(&c2), word_count(&a) + word_count(&b));
    }

    #[test]
    fn recombine_preserves_population_size(
        population in prop::collection::vec(arb_sentence(), 0..25),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(recombine(&population, 0.7, &mut rng).len(), population.len());
    }

    #[test]
    fn selection_only_returns_members(
        population in prop::collection::vec(arb_sentence(), 1..25),
        seed in any::<u64>(),
    ) {
        let evaluator = FitnessEvaluator::new();
        let fitness: Vec<f64> = population.iter().map(|t| evaluator.score(t, "help me")).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let selected = select_population(&population, &fitness, 3, population.len(), &mut rng);

        prop_assert_eq!(selected.len(), population.len());
        for text in &selected {
            prop_assert!(population.contains(text));
        }
    }

    #[test]
    fn fitness_is_finite_and_non_negative(text in arb_sentence(), target in arb_sentence()) {
        let score = FitnessEvaluator::new().score(&text, &target);
        prop_assert!(score.is_finite());
        prop_assert!(score >= 0.0);
        if text.trim().is_empty() {
            prop_assert_eq!(score, 0.0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generation_respects_bounds(
        target in "[a-z]{1,10}( [a-z]{1,10}){0,3}",
        strategies in arb_strategies(),
        creativity in 0.0f64..=1.0,
        max_results in 1i64..12,
        filter in arb_filter(),
        seed in any::<u64>(),
    ) {
        let orchestrator = Orchestrator::new(AppConfig::default(), null_model()).unwrap();
        let request = GenerationRequest::new(target)
            .with_strategies(strategies)
            .with_creativity(creativity)
            .with_max_results(max_results)
            .with_filter_strength(filter)
            .with_seed(seed);

        let result = orchestrator.generate(&request).unwrap();

        prop_assert!(result.candidates.len() as i64 <= max_results);
        prop_assert!((0.0..=0.95).contains(&result.success_probability));
        for candidate in &result.candidates {
            prop_assert!((0.0..=1.0).contains(&candidate.confidence));
        }
    }
}
