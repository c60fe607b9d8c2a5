//! End-to-end checks of the derivation engine against the documented
//! milestone and date-arithmetic rules.

mod common;

use common::builders::{date, ContainerBuilder, JobBuilder};

use clearport::derive::{detention_from, do_validity_display, format_shortage};
use clearport::model::DetailedStatus;

#[test]
fn detention_follows_free_time_in_calendar_days() {
    assert_eq!(detention_from(date("2024-01-10"), 14), date("2024-01-24"));
    assert_eq!(detention_from(date("2024-12-28"), 7), date("2025-01-04"));
}

#[test]
fn display_validity_is_one_day_before_detention() {
    assert_eq!(do_validity_display(date("2024-01-24")), date("2024-01-23"));
}

#[test]
fn job_validity_is_earliest_container_detention() {
    let job = JobBuilder::new("00201")
        .container(ContainerBuilder::new("A").arrived("2024-01-10").build())
        .container(ContainerBuilder::new("B").arrived("2024-01-06").build())
        .build();

    // free_time 14: detentions are 01-24 and 01-20; the job takes the min.
    assert_eq!(job.do_validity_upto_job_level, Some(date("2024-01-20")));
    for container in &job.containers {
        assert_eq!(container.do_validity_upto, Some(date("2024-01-20")));
    }
}

#[test]
fn shortage_is_actual_minus_gross_with_signed_display() {
    let job = JobBuilder::new("00202")
        .container(
            ContainerBuilder::new("A")
                .arrived("2024-01-10")
                .weights(26000.0, 3750.0, 22000.0)
                .build(),
        )
        .build();

    let container = &job.containers[0];
    assert_eq!(container.actual_weight, 22250.0);
    assert_eq!(container.weight_shortage, Some(250.0));
    assert_eq!(format_shortage(250.0), "+250.00");
    assert_eq!(format_shortage(-50.0), "-50.00");
}

#[test]
fn shortage_is_absent_until_gross_is_documented() {
    let job = JobBuilder::new("00203")
        .container(
            ContainerBuilder::new("A")
                .weights(26000.0, 3750.0, 0.0)
                .build(),
        )
        .build();
    assert!(job.containers[0].weight_shortage.is_none());
}

#[test]
fn status_ladder_tracks_milestones_in_order() {
    // No ETA at all.
    let job = JobBuilder::new("00204").build();
    assert_eq!(job.detailed_status, DetailedStatus::EtaDatePending);

    // ETA only.
    let job = JobBuilder::new("00204").eta("2024-01-05").build();
    assert_eq!(job.detailed_status, DetailedStatus::EstimatedTimeOfArrival);

    // BE noted, nothing arrived.
    let job = JobBuilder::new("00204").be_no("BE123").build();
    assert_eq!(job.detailed_status, DetailedStatus::BeNotedArrivalPending);

    // BE noted plus one arrival.
    let job = JobBuilder::new("00204")
        .be_no("BE123")
        .container(ContainerBuilder::new("A").arrived("2024-01-10").build())
        .build();
    assert_eq!(job.detailed_status, DetailedStatus::BeNotedClearancePending);
}

#[test]
fn deriver_is_idempotent_over_persistence_round_trip() {
    let job = JobBuilder::new("00205")
        .be_no("BE123")
        .container(
            ContainerBuilder::new("A")
                .arrived("2024-01-10")
                .weights(26000.0, 3750.0, 22000.0)
                .build(),
        )
        .build();

    let serialized = serde_json::to_string(&job).unwrap();
    let mut reloaded: clearport::model::Job = serde_json::from_str(&serialized).unwrap();
    clearport::derive::apply(&mut reloaded);

    assert_eq!(serde_json::to_string(&reloaded).unwrap(), serialized);
}
