// src/data_input/synthetic.rs

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg64Mcg;

use crate::data_input::dataset::{
    FormulationDataset, FORMULATION_TYPE_LEVELS, STORAGE_CONDITION_LEVELS,
};

// Excipient concentration is a design factor, so it is drawn from the
// study's discrete levels rather than a continuum.
const EXCIPIENT_LEVELS: [f64; 5] = [0.1, 0.2, 0.3, 0.4, 0.5];

// Distribution parameters for the simulated formulation study.
const DRUG_RELEASE_MEAN: f64 = 50.0;
const DRUG_RELEASE_SD: f64 = 10.0;
const PARTICLE_SIZE_MEAN: f64 = 150.0;
const PARTICLE_SIZE_SD: f64 = 20.0;
const VISCOSITY_MEAN: f64 = 1200.0;
const VISCOSITY_SD: f64 = 150.0;
const DRUG_CONTENT_MEAN: f64 = 98.0;
const DRUG_CONTENT_SD: f64 = 1.5;

/// Generates a simulated formulation dataset with `rows` observations.
///
/// The generator is deterministic for a fixed seed, so demonstration runs
/// and tests are reproducible.
pub fn generate_dataset(rows: usize, seed: u64) -> FormulationDataset {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    let drug_release = normal(DRUG_RELEASE_MEAN, DRUG_RELEASE_SD);
    let particle_size = normal(PARTICLE_SIZE_MEAN, PARTICLE_SIZE_SD);
    let viscosity = normal(VISCOSITY_MEAN, VISCOSITY_SD);
    let drug_content = normal(DRUG_CONTENT_MEAN, DRUG_CONTENT_SD);

    let mut dataset = FormulationDataset::default();
    for row in 0..rows {
        dataset.time.push(row as i64 + 1);
        dataset
            .excipient_concentration
            .push(EXCIPIENT_LEVELS[rng.random_range(0..EXCIPIENT_LEVELS.len())]);
        dataset.drug_release.push(drug_release.sample(&mut rng));
        dataset.particle_size.push(particle_size.sample(&mut rng));
        dataset
            .formulation_type
            .push(pick(&mut rng, &FORMULATION_TYPE_LEVELS));
        dataset.viscosity.push(viscosity.sample(&mut rng));
        dataset.stability_index.push(rng.random_range(85.0..99.0));
        dataset
            .storage_condition
            .push(pick(&mut rng, &STORAGE_CONDITION_LEVELS));
        dataset.ph.push(rng.random_range(6.5..7.5));
        dataset.drug_content.push(drug_content.sample(&mut rng));
    }
    dataset
}

fn normal(mean: f64, sd: f64) -> Normal<f64> {
    // Parameters above are compile-time constants with positive sd.
    Normal::new(mean, sd).expect("valid normal parameters")
}

fn pick<R: Rng>(rng: &mut R, levels: &[&str]) -> String {
    levels[rng.random_range(0..levels.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_deterministic_for_a_fixed_seed() {
        let a = generate_dataset(50, 42);
        let b = generate_dataset(50, 42);
        assert_eq!(a.time, b.time);
        assert_eq!(a.drug_release, b.drug_release);
        assert_eq!(a.formulation_type, b.formulation_type);
        assert_eq!(a.storage_condition, b.storage_condition);
    }

    #[test]
    fn generated_columns_satisfy_schema_invariants() {
        let dataset = generate_dataset(200, 1);
        assert!(dataset.is_well_formed());
        assert_eq!(dataset.rows(), 200);
        assert!(dataset
            .excipient_concentration
            .iter()
            .all(|&c| (0.0..=1.0).contains(&c)));
        assert!(dataset
            .formulation_type
            .iter()
            .all(|t| FORMULATION_TYPE_LEVELS.contains(&t.as_str())));
        assert!(dataset
            .storage_condition
            .iter()
            .all(|s| STORAGE_CONDITION_LEVELS.contains(&s.as_str())));
    }
}

// src/data_input/synthetic.rs
