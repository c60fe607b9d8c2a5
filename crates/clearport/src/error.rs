use std::path::PathBuf;
use thiserror::Error;

use crate::model::QueryKind;

#[derive(Error, Debug)]
pub enum ClearportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Database error: {0}")]
    Database(#[from] crate::db::DatabaseError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },

    #[error("Invalid financial year '{year}': expected \"NN-NN\"")]
    InvalidYear { year: String },
}

/// Errors from stage-scoped patch application.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Job number must not be empty")]
    EmptyJobNo,

    #[error("Invalid financial year '{year}': expected \"NN-NN\"")]
    InvalidYear { year: String },

    #[error("Job {job_no} has no container '{container_number}'")]
    UnknownContainer {
        job_no: String,
        container_number: String,
    },

    #[error("Job {job_no} already has container '{container_number}'")]
    DuplicateContainer {
        job_no: String,
        container_number: String,
    },

    #[error("Job {job_no} has no CTH document with code '{document_code}'")]
    UnknownCthDocument {
        job_no: String,
        document_code: String,
    },

    #[error("No query at index {index} in the {kind} thread")]
    QueryOutOfRange { kind: QueryKind, index: usize },
}

pub type Result<T> = std::result::Result<T, ClearportError>;
