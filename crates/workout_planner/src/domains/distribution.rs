//! Round-robin placement of exercises onto training days.
//!
//! Day numbers are 1-based. Every day `1..=days` is present in the output,
//! empty days included.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use exercisedb_client::Exercise;

pub type DaySchedule = BTreeMap<u32, Vec<Exercise>>;

pub fn empty_schedule(days: NonZeroU32) -> DaySchedule {
    (1..=days.get()).map(|day| (day, Vec::new())).collect()
}

/// Day that item `index` of a round lands on.
pub fn day_for(index: usize, days: NonZeroU32) -> u32 {
    (index % days.get() as usize) as u32 + 1
}

/// Group `i` goes, whole, to day `i mod days + 1`.
pub fn distribute_groups(groups: Vec<Vec<Exercise>>, days: NonZeroU32) -> DaySchedule {
    let mut schedule = empty_schedule(days);
    for (i, group) in groups.into_iter().enumerate() {
        schedule.entry(day_for(i, days)).or_default().extend(group);
    }
    schedule
}

/// Within each batch, exercise `j` goes to day `j mod days + 1`.
///
/// The counter restarts for every batch, so each preference starts
/// filling from day 1 again and day 1 collects the most work.
pub fn distribute_batches(batches: Vec<Vec<Exercise>>, days: NonZeroU32) -> DaySchedule {
    let mut schedule = empty_schedule(days);
    for batch in batches {
        for (j, exercise) in batch.into_iter().enumerate() {
            schedule.entry(day_for(j, days)).or_default().push(exercise);
        }
    }
    schedule
}
