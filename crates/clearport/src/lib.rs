pub mod config;
pub mod db;
pub mod derive;
pub mod error;
pub mod logging;
pub mod model;
pub mod workflow;

pub use config::{load_config, Config};
pub use db::{Database, DatabaseError, JobFilter};
pub use derive::{detention_from, do_validity_display, format_shortage, WeightEdit};
pub use error::{ClearportError, ConfigError, Result, WorkflowError};
pub use model::{Container, DetailedStatus, DocumentBucket, Job, QueryKind};
pub use workflow::CreateJob;
