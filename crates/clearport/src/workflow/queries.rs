//! Query threads between the back office and its counterparties.
//!
//! Threads only grow: queries are appended, replies filled in place,
//! nothing is reordered or deleted.

use crate::error::WorkflowError;
use crate::model::{Job, QueryEntry, QueryKind};

/// Appends a new open query to the given thread.
pub fn raise_query(job: &mut Job, kind: QueryKind, query: impl Into<String>) {
    job.queries.thread_mut(kind).push(QueryEntry {
        query: query.into(),
        reply: None,
    });
    tracing::debug!(job_no = %job.job_no, kind = %kind, "query raised");
}

/// Records the reply to the query at `index` in the given thread.
pub fn answer_query(
    job: &mut Job,
    kind: QueryKind,
    index: usize,
    reply: impl Into<String>,
) -> Result<(), WorkflowError> {
    let thread = job.queries.thread_mut(kind);
    match thread.get_mut(index) {
        Some(entry) => {
            entry.reply = Some(reply.into());
            Ok(())
        }
        None => Err(WorkflowError::QueryOutOfRange { kind, index }),
    }
}
