use std::ops::Range;

pub const MIN_ACTIVITIES_PER_DAY: usize = 2;
pub const MIN_RESTAURANTS_PER_DAY: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct DayAllocation<A, R> {
    pub day_number: u32,
    pub activities: Vec<A>,
    pub restaurants: Vec<R>,
}

pub fn per_day(total: usize, days: u32, minimum: usize) -> usize {
    let days = days.max(1) as usize;
    (total / days).max(minimum)
}

/// Index range for a 1-based day. Past the end of the list the range is empty.
fn day_range(day_number: u32, per_day: usize, total: usize) -> Range<usize> {
    let day = day_number as usize;
    let start = ((day - 1) * per_day).min(total);
    let end = (day * per_day).min(total);
    start..end
}

/// Split both lists into consecutive per-day slices.
///
/// Items keep their order and are never reused. Floor division means items
/// left over after the last full slice are not placed on any day.
pub fn allocate_days<A: Clone, R: Clone>(
    attractions: &[A],
    restaurants: &[R],
    duration_days: u32,
) -> Vec<DayAllocation<A, R>> {
    let duration_days = duration_days.max(1);
    let activities_per_day = per_day(attractions.len(), duration_days, MIN_ACTIVITIES_PER_DAY);
    let restaurants_per_day = per_day(restaurants.len(), duration_days, MIN_RESTAURANTS_PER_DAY);

    (1..=duration_days)
        .map(|day_number| DayAllocation {
            day_number,
            activities: attractions[day_range(day_number, activities_per_day, attractions.len())]
                .to_vec(),
            restaurants: restaurants
                [day_range(day_number, restaurants_per_day, restaurants.len())]
                .to_vec(),
        })
        .collect()
}
