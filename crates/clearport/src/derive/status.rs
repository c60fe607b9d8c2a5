//! Milestone precedence for `detailed_status`.
//!
//! First matching rule wins, most-advanced milestone first. The order
//! is load-bearing: a job with an out-of-charge date and a BE number
//! must read "Custom Clearance Completed" even though the earlier
//! milestones also hold.

use crate::model::{DetailedStatus, Job};

/// Computes the job's detailed status from the underlying fields.
///
/// With normalized inputs the two ETA rules cover every job that fails
/// the earlier rungs, so the ladder is total and the stored status is
/// always overwritten, never preserved.
pub fn detailed_status(job: &Job) -> DetailedStatus {
    let be_noted = job.be_no.is_some();
    let any_arrived = job.any_container_arrived();
    let out_of_charge = job.out_of_charge.is_some();

    if be_noted && any_arrived && out_of_charge && job.all_containers_offloaded() {
        DetailedStatus::BillingPending
    } else if be_noted && any_arrived && out_of_charge {
        DetailedStatus::CustomClearanceCompleted
    } else if be_noted && any_arrived && job.pcv_date.is_some() {
        DetailedStatus::PcvDoneDutyPaymentPending
    } else if be_noted && any_arrived {
        DetailedStatus::BeNotedClearancePending
    } else if be_noted {
        DetailedStatus::BeNotedArrivalPending
    } else if job.all_containers_railed_out() {
        DetailedStatus::RailOut
    } else if job.discharge_date.is_some() {
        DetailedStatus::Discharged
    } else if job.gateway_igm_date.is_some() {
        DetailedStatus::GatewayIgmFiled
    } else if job.vessel_berthing.is_none() {
        DetailedStatus::EtaDatePending
    } else {
        DetailedStatus::EstimatedTimeOfArrival
    }
}
