//! The pure derivation engine.
//!
//! Recomputes every denormalized field on a job from the raw fields:
//! per-container detention dates, the job-level DO validity, weighment
//! reconciliation, and the `detailed_status` milestone. Pure state
//! transformation; callers persist the result.

pub mod detention;
pub mod status;
pub mod weight;

pub use detention::{detention_from, do_validity_display, job_do_validity};
pub use status::detailed_status;
pub use weight::{apply_edit, format_shortage, WeightEdit};

use crate::model::Job;

/// Recomputes all derived fields in place. Idempotent: applying twice
/// to unchanged raw fields changes nothing.
///
/// Runs after every stage patch, so the derived fields are eagerly
/// consistent with the precedence and arithmetic rules at all times.
pub fn apply(job: &mut Job) {
    // Shared-arrival flag: the first container's arrival date is the
    // job's single source for all of them.
    if job.containers_arrive_together {
        let shared = job.containers.first().and_then(|c| c.arrival_date);
        for container in &mut job.containers {
            container.arrival_date = shared;
        }
    }

    for container in &mut job.containers {
        container.detention_from = container
            .arrival_date
            .map(|arrival| detention_from(arrival, job.free_time));
        weight::recompute(container);
    }

    job.do_validity_upto_job_level =
        job_do_validity(&job.containers, job.do_validity_upto_job_level);

    // The explicit override wins over the computed minimum; either way
    // every container carries the same validity date.
    let validity = job
        .required_do_validity
        .or(job.do_validity_upto_job_level);
    for container in &mut job.containers {
        container.do_validity_upto = validity;
    }

    job.detailed_status = detailed_status(job);
}
