use verdant_core::*;

#[test]
fn gene_validity_tracks_range_and_filter() {
    let gene = IntGene::new(0..100, Filter::new(|v: &i32| v % 5 == 0));

    assert!(gene.is_valid());
    assert!(gene.with_allele(&25).is_valid());
    assert!(!gene.with_allele(&26).is_valid());
    assert!(!gene.with_allele(&105).is_valid());
}

#[test]
fn chromosome_is_valid_iff_every_gene_is() {
    let mut chromosome = IntChromosome::from((10, 0..10));
    assert!(chromosome.is_valid());

    let rogue = chromosome.get(0).with_allele(&99);
    chromosome.set(0, rogue);
    assert!(!chromosome.is_valid());
}

#[test]
fn genotype_shape_is_preserved_by_cloning() {
    let genotype = Genotype::new(vec![
        IntChromosome::<i32>::from((3, 0..10)),
        IntChromosome::<i32>::from((7, 0..10)),
    ]);

    let copy = genotype.clone();
    assert_eq!(copy.len(), 2);
    assert_eq!(copy[0].len(), 3);
    assert_eq!(copy[1].len(), 7);
    assert_eq!(genotype, copy);
}

#[test]
fn phenotype_verifies_only_when_evaluated() {
    let mut phenotype = Phenotype::from((vec![BitChromosome::new(4)], 0));
    assert!(phenotype.is_valid());
    assert!(!phenotype.is_evaluated());

    phenotype.set_score(Some(Score::from(2.0)));
    assert!(phenotype.is_evaluated());
}

#[test]
fn population_keeps_insertion_order() {
    let population = (0..5)
        .map(|i| Phenotype::from((vec![IntChromosome::from(vec![i])], 0)))
        .collect::<Population<IntChromosome<i32>>>();

    for (i, phenotype) in population.iter().enumerate() {
        assert_eq!(*phenotype.genotype()[0].get(0).allele(), i as i32);
    }
}

#[test]
fn population_sort_is_stable_under_ties() {
    let mut population = (0..6)
        .map(|i| {
            let mut phenotype = Phenotype::from((vec![IntChromosome::from(vec![i])], 0));
            // three pairs of tied scores
            phenotype.set_score(Some(Score::from((i / 2) as f32)));
            phenotype
        })
        .collect::<Population<IntChromosome<i32>>>();

    population.sort_by(&Optimize::Minimize);

    let order = population
        .iter()
        .map(|phenotype| *phenotype.genotype()[0].get(0).allele())
        .collect::<Vec<_>>();

    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn factories_never_partially_construct() {
    // the second range is empty, so the factory must fail as a whole
    let result = IntFactory::new(2, vec![0..10, 5..5], Vec::new());
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().code(), ErrorCode::InvalidConfig);
}

#[test]
fn genotype_factory_produces_verified_material() {
    let factory = GenotypeFactory::single(BitFactory::new(8, 0.25).unwrap());

    for _ in 0..20 {
        let genotype = factory.make();
        assert!(genotype.is_valid());
        assert_eq!(genotype.len(), 1);
        assert_eq!(genotype[0].len(), 8);
    }
}

#[test]
fn permutation_material_is_always_a_permutation() {
    let factory = PermutationFactory::new((0..20).collect::<Vec<usize>>()).unwrap();

    for _ in 0..20 {
        let chromosome = factory.make();
        let mut seen = vec![false; 20];
        for gene in chromosome.iter() {
            assert!(!seen[gene.index()]);
            seen[gene.index()] = true;
        }
        assert!(seen.iter().all(|present| *present));
    }
}
