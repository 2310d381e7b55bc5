//! WOD assembly engine.
//!
//! Patterns are drawn until their accumulated minutes exceed the time
//! limit:
//! - Pattern kind is chosen uniformly at random on every step
//! - The muscle-group cursor advances once per pattern, so successive
//!   patterns rotate Core -> Upper body -> Legs regardless of kind
//! - The last pattern may overshoot the limit; nothing is trimmed

use crate::{get_default_catalog, patterns, Catalog, PatternKind, Wod, WodRequest, MAX_TIME_LIMIT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a WOD for `request` using the given random source
///
/// Because the loop test is `accumulated <= time_limit`, a time limit of
/// zero still yields one pattern. Limits above [`MAX_TIME_LIMIT`] are
/// clamped to it.
pub fn create_wod<R: Rng + ?Sized>(catalog: &Catalog, request: &WodRequest, rng: &mut R) -> Wod {
    let mut wod = Wod::default();
    let mut accumulated: u32 = 0;
    let mut cursor: usize = 0;

    let time_limit = request.time_limit.min(MAX_TIME_LIMIT);
    if time_limit < request.time_limit {
        tracing::warn!(
            "Time limit {} min clamped to {} min",
            request.time_limit,
            MAX_TIME_LIMIT
        );
    }

    while accumulated <= time_limit {
        let kind = PatternKind::ALL[rng.gen_range(0..PatternKind::ALL.len())];
        let pattern = patterns::generate(kind, catalog, cursor, request.intensity, rng);

        tracing::debug!(
            "Pattern {}: {:?} {} ({} min)",
            cursor,
            kind,
            pattern.exercise,
            pattern.minutes
        );

        accumulated = accumulated.saturating_add(pattern.minutes);
        wod.patterns.push(pattern);
        cursor += 1;
    }

    tracing::info!(
        "Generated WOD with {} patterns, {} min for a {} min limit at {}",
        wod.len(),
        accumulated,
        request.time_limit,
        request.intensity.label()
    );

    wod
}

/// Generator bound to a catalog, optionally seeded for reproducible output
#[derive(Clone, Debug)]
pub struct WodGenerator<'a> {
    catalog: &'a Catalog,
    seed: Option<u64>,
}

impl WodGenerator<'static> {
    /// Generator over the built-in catalog with an unseeded random source
    pub fn with_default_catalog() -> Self {
        Self::new(get_default_catalog())
    }
}

impl<'a> WodGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            seed: None,
        }
    }

    /// Fix the random seed; every `generate` call then repeats the same WOD
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn generate(&self, request: &WodRequest) -> Wod {
        match self.seed {
            Some(seed) => {
                tracing::debug!("Using seeded RNG ({})", seed);
                let mut rng = StdRng::seed_from_u64(seed);
                create_wod(self.catalog, request, &mut rng)
            }
            None => create_wod(self.catalog, request, &mut rand::thread_rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, Intensity, MuscleGroup};
    use proptest::prelude::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_zero_limit_yields_one_pattern() {
        crate::logging::init_test();
        let catalog = build_default_catalog();
        let request = WodRequest::new(0, Intensity::Intermediate);

        for seed in 0..50 {
            let wod = create_wod(&catalog, &request, &mut seeded(seed));
            // Every pattern lasts at least 2 minutes, so one pattern crosses 0
            assert_eq!(wod.len(), 1);
            assert!(wod.total_minutes() > 0);
        }
    }

    #[test]
    fn test_beginner_emom_uses_lowest_count() {
        let catalog = build_default_catalog();
        let request = WodRequest::new(20, Intensity::Beginner);

        for seed in 0..50 {
            let wod = create_wod(&catalog, &request, &mut seeded(seed));
            for pattern in wod.patterns.iter().filter(|p| p.kind == PatternKind::Emom) {
                let exercise = catalog
                    .exercises(pattern.muscle_group)
                    .iter()
                    .find(|e| e.name == pattern.exercise)
                    .unwrap();
                assert_eq!(pattern.count, Some(exercise.counts[0]));
                assert!(pattern
                    .to_string()
                    .starts_with(&format!("EMOM: perform {} ", exercise.counts[0])));
            }
        }
    }

    #[test]
    fn test_overshoot_is_bounded_by_last_pattern() {
        let catalog = build_default_catalog();
        let request = WodRequest::new(45, Intensity::Advanced);
        let wod = create_wod(&catalog, &request, &mut seeded(11));

        let before_last: u32 = wod.patterns[..wod.len() - 1].iter().map(|p| p.minutes).sum();
        assert!(before_last <= request.time_limit);
        assert!(wod.total_minutes() > request.time_limit);
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let catalog = build_default_catalog();
        let request = WodRequest::new(u32::MAX, Intensity::Intermediate);
        let wod = create_wod(&catalog, &request, &mut seeded(8));

        assert!(wod.total_minutes() > MAX_TIME_LIMIT);
        // Shortest pattern is 2 minutes
        assert!(wod.len() as u32 <= MAX_TIME_LIMIT / 2 + 1);
    }

    #[test]
    fn test_all_pattern_kinds_are_drawn() {
        let catalog = build_default_catalog();
        let request = WodRequest::new(MAX_TIME_LIMIT, Intensity::Intermediate);

        let mut counts = std::collections::HashMap::new();
        for seed in 0..20 {
            let wod = create_wod(&catalog, &request, &mut seeded(seed));
            for pattern in &wod.patterns {
                *counts.entry(pattern.kind).or_insert(0usize) += 1;
            }
        }

        let total: usize = counts.values().sum();
        for kind in PatternKind::ALL {
            let share = counts.get(&kind).copied().unwrap_or(0) as f64 / total as f64;
            assert!(
                (0.28..0.39).contains(&share),
                "{:?} drawn {:.3} of the time",
                kind,
                share
            );
        }
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let catalog = build_default_catalog();
        let generator = WodGenerator::new(&catalog).with_seed(Some(42));
        let request = WodRequest::default();

        assert_eq!(generator.generate(&request), generator.generate(&request));
    }

    #[test]
    fn test_unseeded_generator_satisfies_invariant_twice() {
        let generator = WodGenerator::with_default_catalog();
        let request = WodRequest::new(25, Intensity::Intermediate);

        let first = generator.generate(&request);
        let second = generator.generate(&request);
        assert!(first.total_minutes() >= 25);
        assert!(second.total_minutes() >= 25);
    }

    fn any_intensity() -> impl Strategy<Value = Intensity> {
        prop::sample::select(Intensity::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_total_reaches_limit(limit in 1u32..240, intensity in any_intensity(), seed in any::<u64>()) {
            let catalog = get_default_catalog();
            let request = WodRequest::new(limit, intensity);
            let wod = create_wod(catalog, &request, &mut seeded(seed));

            prop_assert!(!wod.is_empty());
            prop_assert!(wod.total_minutes() >= limit);
            prop_assert_eq!(wod.descriptions().len(), wod.len());
        }

        #[test]
        fn prop_cursor_rotates_groups(limit in 0u32..120, seed in any::<u64>()) {
            let catalog = get_default_catalog();
            let request = WodRequest::new(limit, Intensity::Intermediate);
            let wod = create_wod(catalog, &request, &mut seeded(seed));

            for (n, pattern) in wod.patterns.iter().enumerate() {
                prop_assert_eq!(pattern.muscle_group, MuscleGroup::from_cursor(n));
                prop_assert!(catalog
                    .exercises(pattern.muscle_group)
                    .iter()
                    .any(|e| e.name == pattern.exercise));
            }
        }

        #[test]
        fn prop_amrap_excludes_holds(limit in 0u32..120, seed in any::<u64>()) {
            let catalog = get_default_catalog();
            let request = WodRequest::new(limit, Intensity::Advanced);
            let wod = create_wod(catalog, &request, &mut seeded(seed));

            for pattern in wod.patterns.iter().filter(|p| p.kind == PatternKind::Amrap) {
                prop_assert!(pattern.exercise != "Plank" && pattern.exercise != "Hollow-hold");
            }
        }
    }
}
