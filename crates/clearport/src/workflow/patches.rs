//! Stage-scoped patches.
//!
//! Each back-office screen edits its own slice of the job: the patch
//! types here carry exactly that slice, raw strings included, and
//! applying one normalizes the input, merges it, and re-runs the
//! derivation engine. `None` always means "not edited on this screen";
//! list fields submit the whole list and replace.

use serde::{Deserialize, Serialize};

use crate::derive;
use crate::derive::weight::WeightEdit;
use crate::error::WorkflowError;
use crate::model::normalize::{non_empty, parse_date, parse_weight};
use crate::model::{Container, CthDocument, DoRevalidation, Job};

/// One CTH document as submitted by the documentation screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CthDocumentInput {
    pub document_name: String,
    pub document_code: String,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub document_check_date: Option<String>,
    #[serde(default)]
    pub irn: Option<String>,
}

impl CthDocumentInput {
    fn into_document(self) -> CthDocument {
        CthDocument {
            document_name: self.document_name.trim().to_string(),
            document_code: self.document_code.trim().to_string(),
            urls: self.urls,
            document_check_date: self.document_check_date.as_deref().and_then(parse_date),
            irn: self.irn.as_deref().and_then(non_empty),
        }
    }
}

/// Documentation screen: CTH document list and the shared buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentationPatch {
    #[serde(default)]
    pub cth_documents: Option<Vec<CthDocumentInput>>,
    #[serde(default)]
    pub all_documents: Option<Vec<String>>,
    #[serde(default)]
    pub checklist: Option<Vec<String>>,
}

impl DocumentationPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        if let Some(documents) = self.cth_documents {
            job.cth_documents = documents
                .into_iter()
                .map(CthDocumentInput::into_document)
                .collect();
        }
        if let Some(urls) = self.all_documents {
            job.documents.all_documents = urls;
        }
        if let Some(urls) = self.checklist {
            job.documents.checklist = urls;
        }
        finish(job, "documentation");
        Ok(())
    }
}

/// e-Sanchit screen: IRNs and check dates per CTH document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EsanchitPatch {
    #[serde(default)]
    pub documents: Vec<EsanchitDocumentInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsanchitDocumentInput {
    pub document_code: String,
    #[serde(default)]
    pub irn: Option<String>,
    #[serde(default)]
    pub document_check_date: Option<String>,
}

impl EsanchitPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        for input in self.documents {
            let document = job
                .cth_documents
                .iter_mut()
                .find(|d| d.document_code == input.document_code)
                .ok_or_else(|| WorkflowError::UnknownCthDocument {
                    job_no: job.job_no.clone(),
                    document_code: input.document_code.clone(),
                })?;
            if let Some(irn) = &input.irn {
                document.irn = non_empty(irn);
            }
            if let Some(raw) = &input.document_check_date {
                document.document_check_date = parse_date(raw);
            }
        }
        finish(job, "e-sanchit");
        Ok(())
    }
}

/// Submission screen: the Bill of Entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionPatch {
    #[serde(default)]
    pub be_no: Option<String>,
    #[serde(default)]
    pub be_date: Option<String>,
    #[serde(default)]
    pub checklist: Option<Vec<String>>,
}

impl SubmissionPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        if let Some(raw) = &self.be_no {
            job.be_no = non_empty(raw);
        }
        if let Some(raw) = &self.be_date {
            job.be_date = parse_date(raw);
        }
        if let Some(urls) = self.checklist {
            job.documents.checklist = urls;
        }
        finish(job, "submission");
        Ok(())
    }
}

/// A container being added from the operations screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContainer {
    pub container_number: String,
    #[serde(default)]
    pub size: String,
}

/// Per-container edits from the operations screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerUpdate {
    pub container_number: String,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub rail_out_date: Option<String>,
    #[serde(default)]
    pub physical_weight: Option<String>,
    #[serde(default)]
    pub tare_weight: Option<String>,
    #[serde(default)]
    pub container_gross_weight: Option<String>,
    #[serde(default)]
    pub net_weight: Option<String>,
}

/// Operations screen: arrivals, examination milestones, weighment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationsPatch {
    #[serde(default)]
    pub new_containers: Vec<NewContainer>,
    #[serde(default)]
    pub containers: Vec<ContainerUpdate>,
    #[serde(default)]
    pub pcv_date: Option<String>,
    #[serde(default)]
    pub out_of_charge: Option<String>,
    #[serde(default)]
    pub weighment_slips: Option<Vec<String>>,
    #[serde(default)]
    pub ooc_copies: Option<Vec<String>>,
}

impl OperationsPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        for new in self.new_containers {
            let number = new.container_number.trim().to_string();
            if job.container(&number).is_some() {
                return Err(WorkflowError::DuplicateContainer {
                    job_no: job.job_no.clone(),
                    container_number: number,
                });
            }
            job.containers.push(Container::new(number, new.size.trim()));
        }

        for update in self.containers {
            let job_no = job.job_no.clone();
            let container = job.container_mut(&update.container_number).ok_or(
                WorkflowError::UnknownContainer {
                    job_no,
                    container_number: update.container_number.clone(),
                },
            )?;
            if let Some(raw) = &update.arrival_date {
                container.arrival_date = parse_date(raw);
            }
            if let Some(raw) = &update.rail_out_date {
                container.rail_out_date = parse_date(raw);
            }
            if let Some(raw) = &update.physical_weight {
                derive::apply_edit(container, WeightEdit::Physical(parse_weight(raw)));
            }
            if let Some(raw) = &update.tare_weight {
                derive::apply_edit(container, WeightEdit::Tare(parse_weight(raw)));
            }
            if let Some(raw) = &update.container_gross_weight {
                derive::apply_edit(container, WeightEdit::Gross(parse_weight(raw)));
            }
            if let Some(raw) = &update.net_weight {
                container.net_weight = parse_weight(raw);
            }
        }

        if let Some(raw) = &self.pcv_date {
            job.pcv_date = parse_date(raw);
        }
        if let Some(raw) = &self.out_of_charge {
            job.out_of_charge = parse_date(raw);
        }
        if let Some(urls) = self.weighment_slips {
            job.documents.weighment_slips = urls;
        }
        if let Some(urls) = self.ooc_copies {
            job.documents.ooc_copies = urls;
        }
        finish(job, "operations");
        Ok(())
    }
}

/// A DO revalidation appended to one container's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevalidationInput {
    pub container_number: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub completed: bool,
}

/// DO planning screen: free time, shared arrival, validity override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoPlanningPatch {
    #[serde(default)]
    pub free_time: Option<u32>,
    #[serde(default)]
    pub containers_arrive_together: Option<bool>,
    /// Shared arrival date; applies to every container when the
    /// same-date flag is on, otherwise to the first container only.
    #[serde(default)]
    pub arrival_date: Option<String>,
    /// "Required DO validity upto" from the screen's date picker. An
    /// empty string clears the override.
    #[serde(default)]
    pub required_do_validity: Option<String>,
    #[serde(default)]
    pub revalidations: Vec<RevalidationInput>,
    #[serde(default)]
    pub do_copies: Option<Vec<String>>,
}

impl DoPlanningPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        if let Some(free_time) = self.free_time {
            job.free_time = free_time;
        }
        if let Some(flag) = self.containers_arrive_together {
            job.containers_arrive_together = flag;
        }
        if let Some(raw) = &self.arrival_date {
            let arrival = parse_date(raw);
            if job.containers_arrive_together {
                for container in &mut job.containers {
                    container.arrival_date = arrival;
                }
            } else if let Some(first) = job.containers.first_mut() {
                first.arrival_date = arrival;
            }
        }
        if let Some(raw) = &self.required_do_validity {
            job.required_do_validity = parse_date(raw);
        }

        for input in self.revalidations {
            let job_no = job.job_no.clone();
            let container = job.container_mut(&input.container_number).ok_or(
                WorkflowError::UnknownContainer {
                    job_no,
                    container_number: input.container_number.clone(),
                },
            )?;
            container.do_revalidations.push(DoRevalidation {
                date: input.date.as_deref().and_then(parse_date),
                remarks: input.remarks.trim().to_string(),
                completed: input.completed,
            });
        }

        if let Some(urls) = self.do_copies {
            job.documents.do_copies = urls;
        }
        finish(job, "do-planning");
        Ok(())
    }
}

/// Per-container empty-offload confirmation from the billing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerOffload {
    pub container_number: String,
    #[serde(default)]
    pub empty_offload_date: Option<String>,
}

/// Billing screen: offload confirmations and gate passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingPatch {
    #[serde(default)]
    pub offloads: Vec<ContainerOffload>,
    #[serde(default)]
    pub gate_pass_copies: Option<Vec<String>>,
}

impl BillingPatch {
    pub fn apply(self, job: &mut Job) -> Result<(), WorkflowError> {
        for offload in self.offloads {
            let job_no = job.job_no.clone();
            let container = job.container_mut(&offload.container_number).ok_or(
                WorkflowError::UnknownContainer {
                    job_no,
                    container_number: offload.container_number.clone(),
                },
            )?;
            if let Some(raw) = &offload.empty_offload_date {
                container.empty_offload_date = parse_date(raw);
            }
        }
        if let Some(urls) = self.gate_pass_copies {
            job.documents.gate_pass_copies = urls;
        }
        finish(job, "billing");
        Ok(())
    }
}

fn finish(job: &mut Job, stage: &str) {
    derive::apply(job);
    tracing::debug!(
        job_no = %job.job_no,
        year = %job.year,
        status = %job.detailed_status,
        "applied {stage} patch"
    );
}
