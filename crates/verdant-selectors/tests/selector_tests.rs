use verdant_core::{
    Chromosome, Gene, IntChromosome, Optimize, Phenotype, Population, Score, Select,
    random_provider,
};
use verdant_selectors::*;

fn scored_population(scores: &[f32]) -> Population<IntChromosome<i32>> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let mut phenotype = Phenotype::from((vec![IntChromosome::from(vec![i as i32])], 0));
            phenotype.set_score(Some(Score::from(*score)));
            phenotype
        })
        .collect()
}

fn selectors() -> Vec<Box<dyn Select<IntChromosome<i32>>>> {
    vec![
        Box::new(TournamentSelector::new(3)),
        Box::new(RouletteSelector::new()),
        Box::new(RouletteSelector::sorted()),
        Box::new(RandomSelector::new()),
        Box::new(EliteSelector::new()),
    ]
}

#[test]
fn every_selector_honors_the_count_contract() {
    let population = scored_population(&[5.0, 1.0, 3.0, 8.0, 2.0, 9.0]);

    for selector in selectors() {
        for count in [0, 1, 3, 6, 17] {
            let selected = selector
                .select(&population, &Optimize::Maximize, count)
                .unwrap();
            assert_eq!(
                selected.len(),
                count,
                "{} broke the size contract",
                selector.name()
            );
        }
    }
}

#[test]
fn every_selector_rejects_an_empty_population() {
    let empty = Population::<IntChromosome<i32>>::default();

    for selector in selectors() {
        assert!(
            selector.select(&empty, &Optimize::Maximize, 3).is_err(),
            "{} accepted an empty population",
            selector.name()
        );
    }
}

#[test]
fn selection_does_not_mutate_the_source_population() {
    let population = scored_population(&[5.0, 1.0, 3.0]);
    let before = population
        .iter()
        .map(|phenotype| phenotype.genotype().clone())
        .collect::<Vec<_>>();

    for selector in selectors() {
        let _ = selector
            .select(&population, &Optimize::Minimize, 5)
            .unwrap();
    }

    for (phenotype, genotype) in population.iter().zip(before) {
        assert_eq!(phenotype.genotype(), &genotype);
    }
}

#[test]
fn tournament_pressure_favors_better_individuals() {
    random_provider::set_seed(17);

    let population = scored_population(&[1.0, 2.0, 3.0, 4.0, 50.0]);
    let selector = TournamentSelector::new(4);

    let selected = selector
        .select(&population, &Optimize::Maximize, 400)
        .unwrap();

    let winners = selected
        .iter()
        .filter(|phenotype| phenotype.score().unwrap().as_f32() == 50.0)
        .count();

    // P(best in a 4-draw tournament) = 1 - (4/5)^4 ~ 0.59
    assert!(winners > 150, "best won only {} of 400", winners);
}

#[test]
fn roulette_uniform_fallback_when_all_fitnesses_are_equal() {
    random_provider::set_seed(23);

    let population = scored_population(&[4.0; 8]);
    let selector = RouletteSelector::new();

    let selected = selector
        .select(&population, &Optimize::Minimize, 800)
        .unwrap();

    let mut counts = vec![0usize; 8];
    for phenotype in selected.iter() {
        counts[*phenotype.genotype()[0].get(0).allele() as usize] += 1;
    }

    for count in counts {
        assert!(count > 40, "uniform fallback is badly skewed: {:?}", count);
    }
}
