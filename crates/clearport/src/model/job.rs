//! The import job schema.
//!
//! Dates are `Option<NaiveDate>`: a missing, empty, or unparseable date
//! in the source data is `None`, decided once at the normalization
//! boundary (`model::normalize`). Code past that boundary never sees
//! sentinel strings like `""` or `"Invalid Date"`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::DetailedStatus;

/// One import shipment tracked through documentation, filing,
/// submission, operations, delivery order, and billing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_no: String,
    /// Financial year the job is filed under, e.g. "24-25".
    pub year: String,
    pub custom_house: String,
    #[serde(default)]
    pub importer: String,
    #[serde(default)]
    pub awb_bl_no: String,

    /// Vessel ETA.
    #[serde(default)]
    pub vessel_berthing: Option<NaiveDate>,
    #[serde(default)]
    pub gateway_igm_date: Option<NaiveDate>,
    #[serde(default)]
    pub discharge_date: Option<NaiveDate>,
    /// Bill of Entry number; presence marks the "BE Noted" milestones.
    #[serde(default)]
    pub be_no: Option<String>,
    #[serde(default)]
    pub be_date: Option<NaiveDate>,
    #[serde(default)]
    pub pcv_date: Option<NaiveDate>,
    #[serde(default)]
    pub out_of_charge: Option<NaiveDate>,

    /// Detention free time in calendar days, uniform across containers.
    #[serde(default = "default_free_time")]
    pub free_time: u32,
    /// When set, every container shares the first container's arrival date.
    #[serde(default)]
    pub containers_arrive_together: bool,
    /// User override for DO validity; propagated to every container.
    #[serde(default)]
    pub required_do_validity: Option<NaiveDate>,

    // Derived fields, recomputed by `derive::apply`. Caches, not truth.
    #[serde(default)]
    pub detailed_status: DetailedStatus,
    #[serde(default)]
    pub do_validity_upto_job_level: Option<NaiveDate>,

    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default)]
    pub cth_documents: Vec<CthDocument>,
    #[serde(default)]
    pub documents: DocumentBuckets,
    #[serde(default)]
    pub queries: QueryThreads,
}

fn default_free_time() -> u32 {
    14
}

impl Job {
    pub fn container(&self, container_number: &str) -> Option<&Container> {
        self.containers
            .iter()
            .find(|c| c.container_number == container_number)
    }

    pub fn container_mut(&mut self, container_number: &str) -> Option<&mut Container> {
        self.containers
            .iter_mut()
            .find(|c| c.container_number == container_number)
    }

    /// True when at least one container has an arrival date.
    pub fn any_container_arrived(&self) -> bool {
        self.containers.iter().any(|c| c.arrival_date.is_some())
    }

    /// True when the job has containers and all of them are empty-offloaded.
    pub fn all_containers_offloaded(&self) -> bool {
        !self.containers.is_empty()
            && self
                .containers
                .iter()
                .all(|c| c.empty_offload_date.is_some())
    }

    /// True when the job has containers and all of them have railed out.
    pub fn all_containers_railed_out(&self) -> bool {
        !self.containers.is_empty()
            && self.containers.iter().all(|c| c.rail_out_date.is_some())
    }
}

/// One container on a job, with its detention and weighment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub container_number: String,
    /// Container size, e.g. "20" or "40".
    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default)]
    pub rail_out_date: Option<NaiveDate>,
    #[serde(default)]
    pub empty_offload_date: Option<NaiveDate>,

    // Weighment. `actual_weight` and `weight_shortage` are derived.
    #[serde(default)]
    pub physical_weight: f64,
    #[serde(default)]
    pub tare_weight: f64,
    #[serde(default)]
    pub actual_weight: f64,
    /// Gross weight claimed by the shipping documents.
    #[serde(default)]
    pub container_gross_weight: f64,
    #[serde(default)]
    pub net_weight: f64,
    /// `actual - gross`; `None` while the documented gross weight is
    /// missing or zero.
    #[serde(default)]
    pub weight_shortage: Option<f64>,

    // Derived detention fields.
    #[serde(default)]
    pub detention_from: Option<NaiveDate>,
    #[serde(default)]
    pub do_validity_upto: Option<NaiveDate>,

    #[serde(default)]
    pub do_revalidations: Vec<DoRevalidation>,
}

impl Container {
    pub fn new(container_number: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            container_number: container_number.into(),
            size: size.into(),
            arrival_date: None,
            rail_out_date: None,
            empty_offload_date: None,
            physical_weight: 0.0,
            tare_weight: 0.0,
            actual_weight: 0.0,
            container_gross_weight: 0.0,
            net_weight: 0.0,
            weight_shortage: None,
            detention_from: None,
            do_validity_upto: None,
            do_revalidations: Vec::new(),
        }
    }
}

/// A delivery-order revalidation requested from the shipping line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoRevalidation {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub completed: bool,
}

/// A supporting document required by the Customs Tariff Heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CthDocument {
    pub document_name: String,
    pub document_code: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub document_check_date: Option<NaiveDate>,
    /// e-Sanchit Invoice Reference Number, filled once uploaded.
    #[serde(default)]
    pub irn: Option<String>,
}

/// Named upload buckets. Each is a flat list of object-store URLs; the
/// store itself is an external collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentBuckets {
    #[serde(default)]
    pub all_documents: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub ooc_copies: Vec<String>,
    #[serde(default)]
    pub gate_pass_copies: Vec<String>,
    #[serde(default)]
    pub do_copies: Vec<String>,
    #[serde(default)]
    pub weighment_slips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentBucket {
    AllDocuments,
    Checklist,
    OocCopies,
    GatePassCopies,
    DoCopies,
    WeighmentSlips,
}

impl DocumentBuckets {
    pub fn bucket(&self, bucket: DocumentBucket) -> &[String] {
        match bucket {
            DocumentBucket::AllDocuments => &self.all_documents,
            DocumentBucket::Checklist => &self.checklist,
            DocumentBucket::OocCopies => &self.ooc_copies,
            DocumentBucket::GatePassCopies => &self.gate_pass_copies,
            DocumentBucket::DoCopies => &self.do_copies,
            DocumentBucket::WeighmentSlips => &self.weighment_slips,
        }
    }

    fn bucket_mut(&mut self, bucket: DocumentBucket) -> &mut Vec<String> {
        match bucket {
            DocumentBucket::AllDocuments => &mut self.all_documents,
            DocumentBucket::Checklist => &mut self.checklist,
            DocumentBucket::OocCopies => &mut self.ooc_copies,
            DocumentBucket::GatePassCopies => &mut self.gate_pass_copies,
            DocumentBucket::DoCopies => &mut self.do_copies,
            DocumentBucket::WeighmentSlips => &mut self.weighment_slips,
        }
    }

    /// Appends an uploaded URL, skipping exact duplicates.
    pub fn add_url(&mut self, bucket: DocumentBucket, url: impl Into<String>) {
        let url = url.into();
        let list = self.bucket_mut(bucket);
        if !list.contains(&url) {
            list.push(url);
        }
    }

    /// Removes a URL (the bookkeeping half of an object-store delete).
    /// Returns true if the URL was present.
    pub fn remove_url(&mut self, bucket: DocumentBucket, url: &str) -> bool {
        let list = self.bucket_mut(bucket);
        let before = list.len();
        list.retain(|u| u != url);
        list.len() != before
    }
}

/// A single raised query and its (possibly pending) reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryEntry {
    pub query: String,
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Do,
    Documentation,
    Esanchit,
    Submission,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Do => "DO",
            Self::Documentation => "documentation",
            Self::Esanchit => "e-Sanchit",
            Self::Submission => "submission",
        };
        f.write_str(name)
    }
}

/// Four independent, append-only query threads. Entries are never
/// reordered or removed; replies are filled in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryThreads {
    #[serde(default)]
    pub do_queries: Vec<QueryEntry>,
    #[serde(default)]
    pub documentation: Vec<QueryEntry>,
    #[serde(default)]
    pub esanchit: Vec<QueryEntry>,
    #[serde(default)]
    pub submission: Vec<QueryEntry>,
}

impl QueryThreads {
    pub fn thread(&self, kind: QueryKind) -> &[QueryEntry] {
        match kind {
            QueryKind::Do => &self.do_queries,
            QueryKind::Documentation => &self.documentation,
            QueryKind::Esanchit => &self.esanchit,
            QueryKind::Submission => &self.submission,
        }
    }

    pub(crate) fn thread_mut(&mut self, kind: QueryKind) -> &mut Vec<QueryEntry> {
        match kind {
            QueryKind::Do => &mut self.do_queries,
            QueryKind::Documentation => &mut self.documentation,
            QueryKind::Esanchit => &mut self.esanchit,
            QueryKind::Submission => &mut self.submission,
        }
    }
}
