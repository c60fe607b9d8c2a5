//! Normalization boundary for loosely-typed job documents.
//!
//! The legacy system stored every field as a string: dates as
//! `"2024-01-10"`, `"2024-01-10T14:30"`, `""` or the literal
//! `"Invalid Date"`, and weights as free-text numbers. Everything is
//! coerced exactly once, here; the typed model never carries sentinels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::job::{Container, DoRevalidation, Job};

/// Parses a raw date field. Empty strings, the `"Invalid Date"` marker
/// the legacy UI emitted, and anything unparseable all become `None`.
/// Datetime strings are truncated to their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "Invalid Date" {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // "2024-01-10T14:30" and friends: keep the date prefix.
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }
    None
}

/// Parses a raw optional date field.
pub fn parse_opt_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

/// Parses a raw weight field. Non-numeric input counts as zero.
pub fn parse_weight(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Trims a raw string field, mapping the empty result to `None`.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A job document as exported by the legacy system: every field a
/// string, every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub job_no: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub custom_house: String,
    #[serde(default)]
    pub importer: String,
    #[serde(default)]
    pub awb_bl_no: String,
    #[serde(default)]
    pub vessel_berthing: String,
    #[serde(default)]
    pub gateway_igm_date: String,
    #[serde(default)]
    pub discharge_date: String,
    #[serde(default)]
    pub be_no: String,
    #[serde(default)]
    pub be_date: String,
    #[serde(default)]
    pub pcv_date: String,
    #[serde(default)]
    pub out_of_charge: String,
    #[serde(default)]
    pub free_time: String,
    #[serde(default)]
    pub detailed_status: String,
    #[serde(default)]
    pub container_nos: Vec<RawContainer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContainer {
    #[serde(default)]
    pub container_number: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub arrival_date: String,
    #[serde(default)]
    pub container_rail_out_date: String,
    #[serde(default, rename = "emptyContainerOffLoadDate")]
    pub empty_container_off_load_date: String,
    #[serde(default)]
    pub physical_weight: String,
    #[serde(default)]
    pub tare_weight: String,
    #[serde(default)]
    pub container_gross_weight: String,
    #[serde(default)]
    pub net_weight: String,
    #[serde(default)]
    pub do_revalidation: Vec<RawDoRevalidation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDoRevalidation {
    #[serde(default)]
    pub do_revalidation_upto: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub completed: bool,
}

impl RawJob {
    /// Converts the raw document into the typed model. The derived
    /// fields are left at their defaults; callers run `derive::apply`
    /// afterwards, so a stale legacy `detailed_status` is recomputed
    /// rather than trusted.
    pub fn into_job(self) -> Job {
        let containers = self
            .container_nos
            .into_iter()
            .map(RawContainer::into_container)
            .collect();

        Job {
            job_no: self.job_no.trim().to_string(),
            year: self.year.trim().to_string(),
            custom_house: self.custom_house.trim().to_string(),
            importer: self.importer.trim().to_string(),
            awb_bl_no: self.awb_bl_no.trim().to_string(),
            vessel_berthing: parse_date(&self.vessel_berthing),
            gateway_igm_date: parse_date(&self.gateway_igm_date),
            discharge_date: parse_date(&self.discharge_date),
            be_no: non_empty(&self.be_no),
            be_date: parse_date(&self.be_date),
            pcv_date: parse_date(&self.pcv_date),
            out_of_charge: parse_date(&self.out_of_charge),
            free_time: self.free_time.trim().parse().unwrap_or(14),
            containers_arrive_together: false,
            required_do_validity: None,
            detailed_status: self.detailed_status.parse().unwrap_or_default(),
            do_validity_upto_job_level: None,
            containers,
            cth_documents: Vec::new(),
            documents: Default::default(),
            queries: Default::default(),
        }
    }
}

impl RawContainer {
    fn into_container(self) -> Container {
        let mut container = Container::new(self.container_number.trim(), self.size.trim());
        container.arrival_date = parse_date(&self.arrival_date);
        container.rail_out_date = parse_date(&self.container_rail_out_date);
        container.empty_offload_date = parse_date(&self.empty_container_off_load_date);
        container.physical_weight = parse_weight(&self.physical_weight);
        container.tare_weight = parse_weight(&self.tare_weight);
        container.container_gross_weight = parse_weight(&self.container_gross_weight);
        container.net_weight = parse_weight(&self.net_weight);
        container.do_revalidations = self
            .do_revalidation
            .into_iter()
            .map(|r| DoRevalidation {
                date: parse_date(&r.do_revalidation_upto),
                remarks: r.remarks.trim().to_string(),
                completed: r.completed,
            })
            .collect();
        container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DetailedStatus;

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(
            parse_date("2024-01-10"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
    }

    #[test]
    fn test_parse_date_with_time_suffix() {
        assert_eq!(
            parse_date("2024-01-10T14:30"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
    }

    #[test]
    fn test_parse_date_falsy_inputs() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("  "), None);
        assert_eq!(parse_date("Invalid Date"), None);
        assert_eq!(parse_date("10/01/2024"), None);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_parse_weight_non_numeric_is_zero() {
        assert_eq!(parse_weight("1000.5"), 1000.5);
        assert_eq!(parse_weight(" 950 "), 950.0);
        assert_eq!(parse_weight(""), 0.0);
        assert_eq!(parse_weight("n/a"), 0.0);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  BE123  "), Some("BE123".to_string()));
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn test_raw_job_normalization() {
        let raw: RawJob = serde_json::from_str(
            r#"{
                "job_no": " 00101 ",
                "year": "24-25",
                "custom_house": "ICD Sanand",
                "be_no": "",
                "vessel_berthing": "Invalid Date",
                "gateway_igm_date": "2024-02-01",
                "free_time": "7",
                "detailed_status": "Gateway IGM Filed",
                "container_nos": [
                    {
                        "container_number": "MSKU1234565",
                        "size": "40",
                        "arrival_date": "2024-01-10T08:00",
                        "physical_weight": "27000",
                        "tare_weight": "3750",
                        "container_gross_weight": "bad"
                    }
                ]
            }"#,
        )
        .unwrap();

        let job = raw.into_job();
        assert_eq!(job.job_no, "00101");
        assert!(job.be_no.is_none());
        assert!(job.vessel_berthing.is_none());
        assert!(job.gateway_igm_date.is_some());
        assert_eq!(job.free_time, 7);
        assert_eq!(job.detailed_status, DetailedStatus::GatewayIgmFiled);

        let container = &job.containers[0];
        assert_eq!(
            container.arrival_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
        );
        assert_eq!(container.physical_weight, 27000.0);
        assert_eq!(container.container_gross_weight, 0.0);
    }

    #[test]
    fn test_raw_job_unknown_status_falls_back_to_pending() {
        let raw = RawJob {
            detailed_status: "Something Else".to_string(),
            ..Default::default()
        };
        assert_eq!(raw.into_job().detailed_status, DetailedStatus::Pending);
    }
}
