pub mod job;
pub mod normalize;
pub mod status;

pub use job::{
    Container, CthDocument, DoRevalidation, DocumentBucket, DocumentBuckets, Job, QueryEntry,
    QueryKind, QueryThreads,
};
pub use normalize::{RawContainer, RawJob};
pub use status::DetailedStatus;

/// Validates a financial-year string of the form "NN-NN", e.g. "24-25".
pub fn is_valid_year(year: &str) -> bool {
    regex::Regex::new(r"^\d{2}-\d{2}$")
        .map(|re| re.is_match(year))
        .unwrap_or(false)
}
