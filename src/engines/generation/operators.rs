use crate::data::synonyms_for;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Tournament selection: sample up to `tournament_size` distinct indices and
/// return the fittest. Ties go to the lowest index. A size of zero is treated
/// as one. `None` only on an empty population.
pub fn tournament_selection<R: Rng + ?Sized>(
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut R,
) -> Option<usize> {
    if fitness.is_empty() {
        return None;
    }
    let size = tournament_size.max(1).min(fitness.len());

    let mut best: Option<usize> = None;
    for idx in index::sample(rng, fitness.len(), size).into_iter() {
        best = match best {
            Some(current)
                if fitness[current] > fitness[idx]
                    || (fitness[current] == fitness[idx] && current < idx) =>
            {
                Some(current)
            }
            _ => Some(idx),
        };
    }
    best
}

/// Run `count` tournaments with replacement and collect the winners' texts.
pub fn select_population<R: Rng + ?Sized>(
    population: &[String],
    fitness: &[f64],
    tournament_size: usize,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count)
        .filter_map(|_| tournament_selection(fitness, tournament_size, rng))
        .map(|idx| population[idx].clone())
        .collect()
}

/// Single-point word-level crossover with independent split points.
///
/// Parents pass through unchanged when the draw misses `crossover_rate` or
/// when either has fewer than two words.
pub fn crossover<R: Rng + ?Sized>(
    parent1: &str,
    parent2: &str,
    crossover_rate: f64,
    rng: &mut R,
) -> (String, String) {
    if rng.gen::<f64>() >= crossover_rate {
        return (parent1.to_string(), parent2.to_string());
    }

    let words1: Vec<&str> = parent1.split_whitespace().collect();
    let words2: Vec<&str> = parent2.split_whitespace().collect();
    if words1.len() < 2 || words2.len() < 2 {
        return (parent1.to_string(), parent2.to_string());
    }

    let point1 = rng.gen_range(1..words1.len());
    let point2 = rng.gen_range(1..words2.len());

    let child1 = words1[..point1]
        .iter()
        .chain(&words2[point2..])
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let child2 = words2[..point2]
        .iter()
        .chain(&words1[point1..])
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    (child1, child2)
}

/// Pairwise crossover over the selected list, in order. A trailing unpaired
/// member passes through untouched.
pub fn recombine<R: Rng + ?Sized>(selected: &[String], crossover_rate: f64, rng: &mut R) -> Vec<String> {
    let mut offspring = Vec::with_capacity(selected.len());
    for pair in selected.chunks(2) {
        match pair {
            [a, b] => {
                let (c1, c2) = crossover(a, b, crossover_rate, rng);
                offspring.push(c1);
                offspring.push(c2);
            }
            [single] => offspring.push(single.clone()),
            _ => {}
        }
    }
    offspring
}

/// Synonym mutation: each word with a table entry is replaced with
/// probability `word_rate`. Word count is preserved.
pub fn mutate<R: Rng + ?Sized>(text: &str, word_rate: f64, rng: &mut R) -> String {
    text.split_whitespace()
        .map(|word| match synonyms_for(word) {
            Some(alternatives) if rng.gen::<f64>() < word_rate => {
                alternatives.choose(rng).copied().unwrap_or(word)
            }
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tournament_over_whole_population_picks_best() {
        let mut rng = StdRng::seed_from_u64(0);
        let fitness = [1.0, 5.0, 3.0];
        for _ in 0..20 {
            assert_eq!(tournament_selection(&fitness, 3, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_tournament_ties_go_to_lowest_index() {
        let mut rng = StdRng::seed_from_u64(0);
        let fitness = [2.0, 2.0, 2.0];
        for _ in 0..20 {
            assert_eq!(tournament_selection(&fitness, 3, &mut rng), Some(0));
        }
    }

    #[test]
    fn test_tournament_on_empty_population() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(tournament_selection(&[], 3, &mut rng), None);
    }

    #[test]
    fn test_zero_tournament_size_still_fills_selection() {
        let mut rng = StdRng::seed_from_u64(2);
        let population: Vec<String> = (0..6).map(|i| format!("text {i}")).collect();
        let fitness = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let selected = select_population(&population, &fitness, 0, population.len(), &mut rng);

        assert_eq!(selected.len(), population.len());
        assert!(tournament_selection(&fitness, 0, &mut rng).is_some());
    }

    #[test]
    fn test_crossover_always_when_rate_is_one() {
        let mut rng = StdRng::seed_from_u64(9);
        let (c1, c2) = crossover("a b c d", "w x y z", 1.0, &mut rng);
        assert_eq!(word_count(&c1) + word_count(&c2), 8);
        assert!(c1.starts_with('a'));
        assert!(c2.starts_with('w'));
        assert_ne!(c1, "a b c d");
    }

    #[test]
    fn test_crossover_skipped_for_short_parents() {
        let mut rng = StdRng::seed_from_u64(9);
        let (c1, c2) = crossover("solo", "w x y z", 1.0, &mut rng);
        assert_eq!((c1.as_str(), c2.as_str()), ("solo", "w x y z"));
    }

    #[test]
    fn test_crossover_never_when_rate_is_zero() {
        let mut rng = StdRng::seed_from_u64(9);
        let (c1, c2) = crossover("a b c", "x y z", 0.0, &mut rng);
        assert_eq!((c1.as_str(), c2.as_str()), ("a b c", "x y z"));
    }

    #[test]
    fn test_recombine_passes_trailing_member_through() {
        let mut rng = StdRng::seed_from_u64(2);
        let selected: Vec<String> = ["a b", "c d", "tail end"].iter().map(|s| s.to_string()).collect();
        let offspring = recombine(&selected, 1.0, &mut rng);
        assert_eq!(offspring.len(), 3);
        assert_eq!(offspring[2], "tail end");
    }

    #[test]
    fn test_mutate_with_full_rate_replaces_known_words() {
        let mut rng = StdRng::seed_from_u64(4);
        let mutated = mutate("Please help me, explain.", 1.0, &mut rng);
        let words: Vec<&str> = mutated.split_whitespace().collect();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], "Please");
        assert!(synonyms_for("help").unwrap().contains(&words[1]));
        assert_eq!(words[2], "me,");
        assert!(synonyms_for("explain").unwrap().contains(&words[3]));
    }

    #[test]
    fn test_mutate_with_zero_rate_is_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(mutate("help explain provide", 0.0, &mut rng), "help explain provide");
    }
}
