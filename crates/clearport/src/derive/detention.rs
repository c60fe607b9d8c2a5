//! Detention and delivery-order validity date arithmetic.
//!
//! Calendar days throughout, never business days. Detention starts
//! once the free-time window after arrival runs out; the job-level DO
//! validity is the earliest detention start across all containers.

use chrono::{Days, NaiveDate};

use crate::model::Container;

/// `arrival + free_time` in calendar days.
pub fn detention_from(arrival: NaiveDate, free_time_days: u32) -> NaiveDate {
    arrival
        .checked_add_days(Days::new(u64::from(free_time_days)))
        .unwrap_or(arrival)
}

/// The DO validity shown to operators: the day before detention starts.
pub fn do_validity_display(detention: NaiveDate) -> NaiveDate {
    detention
        .checked_sub_days(Days::new(1))
        .unwrap_or(detention)
}

/// The job-level DO validity: the minimum `detention_from` across all
/// containers. Containers without an arrival date are excluded; when
/// none qualifies the previously stored value is kept.
pub fn job_do_validity(
    containers: &[Container],
    previous: Option<NaiveDate>,
) -> Option<NaiveDate> {
    containers
        .iter()
        .filter_map(|c| c.detention_from)
        .min()
        .or(previous)
}
