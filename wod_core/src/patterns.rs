//! Pattern generators.
//!
//! Each generator draws an exercise for the current rotation cursor and
//! returns a [`Pattern`] carrying its description and estimated minutes:
//! - EMOM: 4-10 minutes at the requested tier count
//! - AMRAP: fixed 2 minute estimate, never a held position
//! - TABATA: 4-8 minutes of 20/10 intervals

use crate::{Catalog, Intensity, MuscleGroup, Pattern, PatternKind};
use rand::Rng;
use std::ops::RangeInclusive;

/// EMOM duration range in minutes
pub const EMOM_MINUTES: RangeInclusive<u32> = 4..=10;

/// TABATA duration range in minutes
pub const TABATA_MINUTES: RangeInclusive<u32> = 4..=8;

/// Estimated duration of an AMRAP; reps are unbounded so time is fixed
pub const AMRAP_MINUTES: u32 = 2;

/// Every minute on the minute: perform the tier count, rest the remainder
pub fn emom<R: Rng + ?Sized>(
    catalog: &Catalog,
    cursor: usize,
    intensity: Intensity,
    rng: &mut R,
) -> Pattern {
    let minutes = rng.gen_range(EMOM_MINUTES);
    let exercise = catalog.select_exercise(cursor, rng);

    Pattern {
        kind: PatternKind::Emom,
        muscle_group: MuscleGroup::from_cursor(cursor),
        exercise: exercise.name.clone(),
        measure: exercise.measure,
        count: Some(exercise.count_for(intensity)),
        minutes,
    }
}

/// As many reps as possible; held positions are redrawn
pub fn amrap<R: Rng + ?Sized>(catalog: &Catalog, cursor: usize, rng: &mut R) -> Pattern {
    let mut exercise = catalog.select_exercise(cursor, rng);
    while exercise.is_hold() {
        tracing::trace!("Redrawing held position '{}' for AMRAP", exercise.name);
        exercise = catalog.select_exercise(cursor, rng);
    }

    Pattern {
        kind: PatternKind::Amrap,
        muscle_group: MuscleGroup::from_cursor(cursor),
        exercise: exercise.name.clone(),
        measure: exercise.measure,
        count: None,
        minutes: AMRAP_MINUTES,
    }
}

/// 20 seconds of work, 10 seconds of rest, repeated
pub fn tabata<R: Rng + ?Sized>(catalog: &Catalog, cursor: usize, rng: &mut R) -> Pattern {
    let minutes = rng.gen_range(TABATA_MINUTES);
    let exercise = catalog.select_exercise(cursor, rng);

    Pattern {
        kind: PatternKind::Tabata,
        muscle_group: MuscleGroup::from_cursor(cursor),
        exercise: exercise.name.clone(),
        measure: exercise.measure,
        count: None,
        minutes,
    }
}

/// Run the generator for `kind`
pub fn generate<R: Rng + ?Sized>(
    kind: PatternKind,
    catalog: &Catalog,
    cursor: usize,
    intensity: Intensity,
    rng: &mut R,
) -> Pattern {
    match kind {
        PatternKind::Emom => emom(catalog, cursor, intensity, rng),
        PatternKind::Amrap => amrap(catalog, cursor, rng),
        PatternKind::Tabata => tabata(catalog, cursor, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, Measure};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_emom_duration_and_count() {
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(1);

        for cursor in 0..200 {
            let pattern = emom(&catalog, cursor, Intensity::Advanced, &mut rng);
            assert!(EMOM_MINUTES.contains(&pattern.minutes));

            let exercise = catalog
                .exercises(pattern.muscle_group)
                .iter()
                .find(|e| e.name == pattern.exercise)
                .unwrap();
            assert_eq!(pattern.count, Some(exercise.counts[2]));
            assert_eq!(pattern.measure, exercise.measure);
        }
    }

    #[test]
    fn test_emom_uses_seconds_for_holds() {
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(2);

        let mut saw_hold = false;
        for _ in 0..200 {
            let pattern = emom(&catalog, 0, Intensity::Beginner, &mut rng);
            let description = pattern.to_string();
            if pattern.exercise == "Plank" || pattern.exercise == "Hollow-hold" {
                saw_hold = true;
                assert_eq!(pattern.measure, Measure::Seconds);
                assert!(description.contains(" seconds of "), "{}", description);
            } else {
                assert!(description.contains(" reps of "), "{}", description);
            }
        }
        assert!(saw_hold, "200 core draws should include a held position");
    }

    #[test]
    fn test_amrap_never_selects_hold() {
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(3);

        for cursor in 0..300 {
            let pattern = amrap(&catalog, cursor, &mut rng);
            assert_eq!(pattern.minutes, AMRAP_MINUTES);
            assert_ne!(pattern.exercise, "Plank");
            assert_ne!(pattern.exercise, "Hollow-hold");
            assert_eq!(pattern.measure, Measure::Reps);
        }
    }

    #[test]
    fn test_tabata_duration() {
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(4);

        let mut seen = std::collections::HashSet::new();
        for cursor in 0..300 {
            let pattern = tabata(&catalog, cursor, &mut rng);
            assert!(TABATA_MINUTES.contains(&pattern.minutes));
            assert_eq!(pattern.count, None);
            seen.insert(pattern.minutes);
        }
        assert_eq!(seen.len(), 5, "every minute count in 4..=8 should appear");
    }

    #[test]
    fn test_generate_dispatches_by_kind() {
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(5);

        for kind in PatternKind::ALL {
            let pattern = generate(kind, &catalog, 1, Intensity::Intermediate, &mut rng);
            assert_eq!(pattern.kind, kind);
            assert_eq!(pattern.muscle_group, MuscleGroup::UpperBody);
        }
    }
}
