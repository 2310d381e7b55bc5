//! Exercise catalogs, one per muscle group.
//!
//! The built-in catalog is built once and cached. Custom exercises from
//! the configuration file can be layered on top with [`Catalog::with_custom`].

use crate::config::CustomExercise;
use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all generations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in exercises
///
/// **Note**: prefer `get_default_catalog()` which returns a cached reference.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn build_default_catalog_internal() -> Catalog {
    let core = vec![
        Exercise::reps("Sit-ups", [30, 45, 60]),
        Exercise::hold("Plank", [30, 40, 55]),
        Exercise::reps("Hollow-rocks", [15, 25, 35]),
        Exercise::hold("Hollow-hold", [30, 40, 55]),
    ];

    let upper_body = vec![
        Exercise::reps("Push-ups", [20, 30, 40]),
        Exercise::reps("Pull-ups", [3, 8, 12]),
        Exercise::reps("Inverted Rows", [15, 25, 35]),
    ];

    let legs = vec![
        Exercise::reps("Pistols", [10, 15, 25]),
        Exercise::reps("Air Squats", [30, 40, 50]),
    ];

    Catalog {
        groups: [core, upper_body, legs],
    }
}

/// Exercise lists indexed by muscle group
///
/// A `Catalog` obtained from [`Catalog::new`], [`Catalog::with_custom`] or the
/// default builders always passes [`Catalog::validate`], so every group is
/// non-empty and has at least one exercise usable for AMRAP.
#[derive(Clone, Debug)]
pub struct Catalog {
    groups: [Vec<Exercise>; 3],
}

impl Catalog {
    /// Build a catalog from per-group exercise lists, rejecting invalid ones
    pub fn new(core: Vec<Exercise>, upper_body: Vec<Exercise>, legs: Vec<Exercise>) -> Result<Self> {
        let catalog = Catalog {
            groups: [core, upper_body, legs],
        };
        catalog.checked()
    }

    /// Copy of this catalog extended with custom exercises
    pub fn with_custom(&self, custom: &[CustomExercise]) -> Result<Self> {
        let mut catalog = self.clone();
        for entry in custom {
            tracing::debug!("Adding custom exercise '{}' to {}", entry.name, entry.group);
            catalog.groups[entry.group.index()].push(entry.to_exercise());
        }
        catalog.checked()
    }

    fn checked(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(Error::CatalogValidation(errors.join("; ")))
        }
    }

    /// Exercises for a muscle group
    pub fn exercises(&self, group: MuscleGroup) -> &[Exercise] {
        &self.groups[group.index()]
    }

    /// Iterate groups in rotation order
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, &[Exercise])> {
        MuscleGroup::ALL
            .into_iter()
            .map(move |group| (group, self.exercises(group)))
    }

    /// Pick an exercise uniformly at random for the given rotation cursor
    pub fn select_exercise<R: Rng + ?Sized>(&self, cursor: usize, rng: &mut R) -> &Exercise {
        let exercises = self.exercises(MuscleGroup::from_cursor(cursor));
        &exercises[rng.gen_range(0..exercises.len())]
    }

    /// Validate the catalog, returning a list of problems
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (group, exercises) in self.iter() {
            if exercises.is_empty() {
                errors.push(format!("{} catalog is empty", group));
                continue;
            }

            if exercises.iter().all(Exercise::is_hold) {
                errors.push(format!(
                    "{} catalog has only held positions; AMRAP needs a rep exercise",
                    group
                ));
            }

            for exercise in exercises {
                let name = exercise.name.trim();
                if name.is_empty() {
                    errors.push(format!("{} catalog has an exercise with no name", group));
                    continue;
                }
                if !seen.insert(name.to_lowercase()) {
                    errors.push(format!("Exercise '{}' is defined more than once", name));
                }
                if exercise.counts.contains(&0) {
                    errors.push(format!("Exercise '{}' has a zero count", name));
                }
                if exercise.counts.windows(2).any(|w| w[0] > w[1]) {
                    errors.push(format!(
                        "Exercise '{}' counts {:?} decrease with intensity",
                        name, exercise.counts
                    ));
                }
            }
        }

        errors
    }
}
