pub mod create;
pub mod patches;
pub mod queries;

pub use create::CreateJob;
pub use patches::{
    BillingPatch, ContainerOffload, ContainerUpdate, CthDocumentInput, DoPlanningPatch,
    DocumentationPatch, EsanchitDocumentInput, EsanchitPatch, NewContainer, OperationsPatch,
    RevalidationInput, SubmissionPatch,
};
pub use queries::{answer_query, raise_query};
