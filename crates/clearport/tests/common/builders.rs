//! Builder patterns for creating test data programmatically.
//!
//! These builders allow assembling jobs in arbitrary lifecycle states
//! without repetitive boilerplate code.

#![allow(dead_code)]

use chrono::NaiveDate;
use clearport::model::{Container, Job};
use clearport::workflow::CreateJob;

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("test date")
}

/// Builder for `Job` instances.
pub struct JobBuilder {
    job_no: String,
    year: String,
    custom_house: String,
    importer: String,
    be_no: Option<String>,
    vessel_berthing: Option<String>,
    free_time: u32,
    containers: Vec<Container>,
}

impl JobBuilder {
    pub fn new(job_no: &str) -> Self {
        Self {
            job_no: job_no.to_string(),
            year: "24-25".to_string(),
            custom_house: "ICD Sanand".to_string(),
            importer: "Acme Imports".to_string(),
            be_no: None,
            vessel_berthing: None,
            free_time: 14,
            containers: vec![],
        }
    }

    pub fn year(mut self, year: &str) -> Self {
        self.year = year.to_string();
        self
    }

    pub fn custom_house(mut self, custom_house: &str) -> Self {
        self.custom_house = custom_house.to_string();
        self
    }

    pub fn importer(mut self, importer: &str) -> Self {
        self.importer = importer.to_string();
        self
    }

    pub fn be_no(mut self, be_no: &str) -> Self {
        self.be_no = Some(be_no.to_string());
        self
    }

    pub fn eta(mut self, eta: &str) -> Self {
        self.vessel_berthing = Some(eta.to_string());
        self
    }

    pub fn free_time(mut self, days: u32) -> Self {
        self.free_time = days;
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Builds the job and runs the deriver once, as any persisted job
    /// would have been.
    pub fn build(self) -> Job {
        let mut job = CreateJob {
            job_no: self.job_no,
            year: self.year,
            custom_house: self.custom_house,
            importer: self.importer,
            awb_bl_no: "MAEU123456".to_string(),
            vessel_berthing: self.vessel_berthing,
            free_time: Some(self.free_time),
        }
        .build(14)
        .expect("valid test job");
        job.be_no = self.be_no;
        job.containers = self.containers;
        clearport::derive::apply(&mut job);
        job
    }
}

/// Builder for `Container` instances.
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new(number: &str) -> Self {
        Self {
            container: Container::new(number, "40"),
        }
    }

    pub fn size(mut self, size: &str) -> Self {
        self.container.size = size.to_string();
        self
    }

    pub fn arrived(mut self, arrival: &str) -> Self {
        self.container.arrival_date = Some(date(arrival));
        self
    }

    pub fn railed_out(mut self, rail_out: &str) -> Self {
        self.container.rail_out_date = Some(date(rail_out));
        self
    }

    pub fn offloaded(mut self, offload: &str) -> Self {
        self.container.empty_offload_date = Some(date(offload));
        self
    }

    pub fn weights(mut self, physical: f64, tare: f64, gross: f64) -> Self {
        self.container.physical_weight = physical;
        self.container.tare_weight = tare;
        self.container.container_gross_weight = gross;
        self
    }

    pub fn build(self) -> Container {
        self.container
    }
}
