//! The denormalized `detailed_status` milestone cache.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The furthest-progressed milestone a job has reached.
///
/// The string forms are fixed: they are what the original back office
/// displays and filters on, and what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailedStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Estimated Time of Arrival")]
    EstimatedTimeOfArrival,
    #[serde(rename = "ETA Date Pending")]
    EtaDatePending,
    #[serde(rename = "Gateway IGM Filed")]
    GatewayIgmFiled,
    #[serde(rename = "Discharged")]
    Discharged,
    #[serde(rename = "Rail Out")]
    RailOut,
    #[serde(rename = "BE Noted, Arrival Pending")]
    BeNotedArrivalPending,
    #[serde(rename = "BE Noted, Clearance Pending")]
    BeNotedClearancePending,
    #[serde(rename = "PCV Done, Duty Payment Pending")]
    PcvDoneDutyPaymentPending,
    #[serde(rename = "Custom Clearance Completed")]
    CustomClearanceCompleted,
    #[serde(rename = "Billing Pending")]
    BillingPending,
}

impl DetailedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::EstimatedTimeOfArrival => "Estimated Time of Arrival",
            Self::EtaDatePending => "ETA Date Pending",
            Self::GatewayIgmFiled => "Gateway IGM Filed",
            Self::Discharged => "Discharged",
            Self::RailOut => "Rail Out",
            Self::BeNotedArrivalPending => "BE Noted, Arrival Pending",
            Self::BeNotedClearancePending => "BE Noted, Clearance Pending",
            Self::PcvDoneDutyPaymentPending => "PCV Done, Duty Payment Pending",
            Self::CustomClearanceCompleted => "Custom Clearance Completed",
            Self::BillingPending => "Billing Pending",
        }
    }

    /// All statuses in lifecycle order, earliest first. Used by list
    /// screens to populate filter dropdowns.
    pub fn all() -> &'static [DetailedStatus] {
        &[
            Self::Pending,
            Self::EtaDatePending,
            Self::EstimatedTimeOfArrival,
            Self::GatewayIgmFiled,
            Self::Discharged,
            Self::RailOut,
            Self::BeNotedArrivalPending,
            Self::BeNotedClearancePending,
            Self::PcvDoneDutyPaymentPending,
            Self::CustomClearanceCompleted,
            Self::BillingPending,
        ]
    }
}

impl fmt::Display for DetailedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown detailed status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for DetailedStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl Default for DetailedStatus {
    fn default() -> Self {
        Self::Pending
    }
}
