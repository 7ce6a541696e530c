use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use exercisedb_client::Exercise;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PlanError, PlanResult};

/// How a weekly plan is assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    FullBody,
    Muscle,
    BodyPart,
}

impl PlanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanMode::FullBody => "full_body",
            PlanMode::Muscle => "muscle",
            PlanMode::BodyPart => "body_part",
        }
    }

    /// Heading shown above the schedule. The hyphens are U+2011 so the
    /// presentation layer never breaks the line inside the name.
    pub fn title(self) -> &'static str {
        match self {
            PlanMode::FullBody => "\u{1F525} Full\u{2011}Body Plan",
            PlanMode::Muscle => "\u{1F3CB}\u{FE0F}\u{200D}\u{2642}\u{FE0F} Muscle\u{2011}Based Plan",
            PlanMode::BodyPart => {
                "\u{1F3CB}\u{FE0F}\u{200D}\u{2642}\u{FE0F} Body Part\u{2011}Based Plan"
            }
        }
    }
}

impl fmt::Display for PlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanMode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full_body" => Ok(PlanMode::FullBody),
            "muscle" => Ok(PlanMode::Muscle),
            "body_part" => Ok(PlanMode::BodyPart),
            _ => Err(PlanError::InvalidMode(s.to_string())),
        }
    }
}

/// Longest schedule a request may ask for.
pub const MAX_WORKOUT_DAYS: u32 = 366;

/// A validated plan request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanRequest {
    pub workout_days: u32,
    pub mode: PlanMode,
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl PlanRequest {
    /// Validate raw caller input.
    pub fn new(workout_days: u32, mode: &str, preferences: Vec<String>) -> PlanResult<Self> {
        let mode = mode.parse()?;
        let req = Self {
            workout_days,
            mode,
            preferences,
        };
        req.validate()?;
        Ok(req)
    }

    pub fn validate(&self) -> PlanResult<()> {
        self.days().map(|_| ())
    }

    /// Number of days to schedule, `1..=MAX_WORKOUT_DAYS`.
    pub fn days(&self) -> PlanResult<NonZeroU32> {
        if self.workout_days > MAX_WORKOUT_DAYS {
            return Err(PlanError::InvalidWorkoutDays(self.workout_days));
        }
        NonZeroU32::new(self.workout_days).ok_or(PlanError::InvalidWorkoutDays(self.workout_days))
    }
}

/// A titled schedule keyed by day number, `1..=workout_days`.
///
/// Every day is present; an empty day is a rest day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct WeeklyPlan {
    pub title: String,
    #[serde(serialize_with = "serialize_days")]
    #[schemars(with = "BTreeMap<String, Vec<Exercise>>")]
    pub days: BTreeMap<u32, Vec<Exercise>>,
}

impl WeeklyPlan {
    pub fn day(&self, day: u32) -> Option<&[Exercise]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn total_exercises(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Day numbers with nothing scheduled.
    pub fn rest_days(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|(_, exs)| exs.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }
}

pub fn day_label(day: u32) -> String {
    format!("Day {day}")
}

// Emitted as an ordered sequence of ("Day N", [...]) entries so day 10
// still follows day 9.
fn serialize_days<S>(days: &BTreeMap<u32, Vec<Exercise>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(days.iter().map(|(day, exs)| (day_label(*day), exs)))
}
