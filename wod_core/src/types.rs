//! Core domain types for the WOD generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and how they are measured
//! - Muscle groups and the rotation cursor mapping
//! - Intensity tiers and requests
//! - Generated patterns and the assembled WOD

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Exercise Types
// ============================================================================

/// How an exercise's counts are measured
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Repetitions (push-ups, squats, ...)
    Reps,
    /// Seconds in a held position (plank, hollow hold, ...)
    Seconds,
}

impl Measure {
    /// Unit word used in descriptions
    pub fn unit(&self) -> &'static str {
        match self {
            Measure::Reps => "reps",
            Measure::Seconds => "seconds",
        }
    }
}

/// An exercise with one count per intensity tier
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub counts: [u32; 3],
    pub measure: Measure,
}

impl Exercise {
    /// Repetition-based exercise
    pub fn reps(name: impl Into<String>, counts: [u32; 3]) -> Self {
        Self {
            name: name.into(),
            counts,
            measure: Measure::Reps,
        }
    }

    /// Held-position exercise, counted in seconds
    pub fn hold(name: impl Into<String>, counts: [u32; 3]) -> Self {
        Self {
            name: name.into(),
            counts,
            measure: Measure::Seconds,
        }
    }

    /// Whether this is a held position (unsuitable for AMRAP)
    pub fn is_hold(&self) -> bool {
        self.measure == Measure::Seconds
    }

    /// Count for the given intensity tier
    pub fn count_for(&self, intensity: Intensity) -> u32 {
        self.counts[intensity.index()]
    }
}

// ============================================================================
// Muscle Groups
// ============================================================================

/// Muscle group targeted by a catalog
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Core,
    UpperBody,
    Legs,
}

impl MuscleGroup {
    /// All groups in rotation order
    pub const ALL: [MuscleGroup; 3] = [MuscleGroup::Core, MuscleGroup::UpperBody, MuscleGroup::Legs];

    /// Group drawn from for the given rotation cursor (`cursor mod 3`)
    pub fn from_cursor(cursor: usize) -> Self {
        Self::ALL[cursor % Self::ALL.len()]
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            MuscleGroup::Core => 0,
            MuscleGroup::UpperBody => 1,
            MuscleGroup::Legs => 2,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MuscleGroup::Core => "Core",
            MuscleGroup::UpperBody => "Upper body",
            MuscleGroup::Legs => "Legs",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Intensity and Requests
// ============================================================================

/// Difficulty tier selecting which of an exercise's counts applies
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [
        Intensity::Beginner,
        Intensity::Intermediate,
        Intensity::Advanced,
    ];

    /// Parse a numeric tier (1 = lowest, 3 = highest)
    pub fn from_tier(tier: u8) -> Result<Self> {
        match tier {
            1 => Ok(Intensity::Beginner),
            2 => Ok(Intensity::Intermediate),
            3 => Ok(Intensity::Advanced),
            other => Err(Error::InvalidRequest(format!(
                "intensity tier must be 1, 2 or 3 (got {})",
                other
            ))),
        }
    }

    /// Numeric tier, 1..=3
    pub fn tier(&self) -> u8 {
        self.index() as u8 + 1
    }

    fn index(&self) -> usize {
        match self {
            Intensity::Beginner => 0,
            Intensity::Intermediate => 1,
            Intensity::Advanced => 2,
        }
    }

    /// Label shown by front ends
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Beginner => "Beginner",
            Intensity::Intermediate => "Intermediate",
            Intensity::Advanced => "Advanced",
        }
    }
}

/// Longest accepted time limit in minutes (one day)
pub const MAX_TIME_LIMIT: u32 = 24 * 60;

/// A request for one WOD
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WodRequest {
    /// Time budget in minutes
    pub time_limit: u32,
    pub intensity: Intensity,
}

impl WodRequest {
    pub fn new(time_limit: u32, intensity: Intensity) -> Self {
        Self {
            time_limit,
            intensity,
        }
    }
}

impl Default for WodRequest {
    fn default() -> Self {
        Self::new(30, Intensity::Intermediate)
    }
}

// ============================================================================
// Patterns and WOD
// ============================================================================

/// Workout pattern structure
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Every minute on the minute
    Emom,
    /// As many reps as possible
    Amrap,
    /// 20 seconds work, 10 seconds rest
    Tabata,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [PatternKind::Emom, PatternKind::Amrap, PatternKind::Tabata];
}

/// One generated pattern of a WOD
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub muscle_group: MuscleGroup,
    pub exercise: String,
    pub measure: Measure,
    /// Tier count; only EMOM prescribes one
    pub count: Option<u32>,
    /// Estimated duration in minutes
    pub minutes: u32,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PatternKind::Emom => write!(
                f,
                "EMOM: perform {} {} of {} at the top of every minute for {} minutes",
                self.count.unwrap_or_default(),
                self.measure.unit(),
                self.exercise,
                self.minutes
            ),
            PatternKind::Amrap => {
                write!(f, "AMRAP: as many reps as possible of {}", self.exercise)
            }
            PatternKind::Tabata => write!(
                f,
                "TABATA: alternate 20 seconds of work and 10 seconds of rest with {} for {} minutes",
                self.exercise, self.minutes
            ),
        }
    }
}

/// A workout of the day: patterns in display order
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wod {
    pub patterns: Vec<Pattern>,
}

impl Wod {
    /// Human-readable lines, one per pattern
    pub fn descriptions(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.to_string()).collect()
    }

    /// Sum of per-pattern time estimates
    pub fn total_minutes(&self) -> u32 {
        self.patterns.iter().map(|p| p.minutes).sum()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
