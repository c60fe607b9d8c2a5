//! Job creation.

use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;
use crate::model::normalize::{non_empty, parse_date};
use crate::model::{is_valid_year, DetailedStatus, Job};

/// Input from the job-creation screen. The job starts in `Pending`;
/// the derived status first gets computed when a stage patch lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    pub job_no: String,
    pub year: String,
    pub custom_house: String,
    #[serde(default)]
    pub importer: String,
    #[serde(default)]
    pub awb_bl_no: String,
    /// Vessel ETA as entered, possibly empty.
    #[serde(default)]
    pub vessel_berthing: Option<String>,
    #[serde(default)]
    pub free_time: Option<u32>,
}

impl CreateJob {
    pub fn build(self, default_free_time: u32) -> Result<Job, WorkflowError> {
        let job_no = match non_empty(&self.job_no) {
            Some(job_no) => job_no,
            None => return Err(WorkflowError::EmptyJobNo),
        };
        let year = self.year.trim().to_string();
        if !is_valid_year(&year) {
            return Err(WorkflowError::InvalidYear { year });
        }

        tracing::info!(job_no = %job_no, year = %year, "creating job");

        Ok(Job {
            job_no,
            year,
            custom_house: self.custom_house.trim().to_string(),
            importer: self.importer.trim().to_string(),
            awb_bl_no: self.awb_bl_no.trim().to_string(),
            vessel_berthing: self.vessel_berthing.as_deref().and_then(|d| parse_date(d)),
            gateway_igm_date: None,
            discharge_date: None,
            be_no: None,
            be_date: None,
            pcv_date: None,
            out_of_charge: None,
            free_time: self.free_time.unwrap_or(default_free_time),
            containers_arrive_together: false,
            required_do_validity: None,
            detailed_status: DetailedStatus::Pending,
            do_validity_upto_job_level: None,
            containers: Vec::new(),
            cth_documents: Vec::new(),
            documents: Default::default(),
            queries: Default::default(),
        })
    }
}
