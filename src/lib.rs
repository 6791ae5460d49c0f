//! Statement catalog for the songplays warehouse.
//!
//! Raw song and event logs are bulk loaded from S3 into two staging tables,
//! then reshaped into a star schema: the `songplays` fact table and the
//! `users`, `songs`, `artists` and `time` dimensions. This crate only produces
//! and orders the SQL; running it is up to an [Executor].
//!
//! ```rust,no_run
//! use songplays_dwh::{Phase, StatementCatalog};
//!
//! let catalog = StatementCatalog::load("dwh.cfg")?;
//! for statement in catalog.phase(Phase::Copy) {
//!     println!("{statement}");
//! }
//! # Ok::<(), songplays_dwh::ConfigurationError>(())
//! ```

pub use songplays_schema::{ParsePhaseError, Phase, Statement, Table};

pub mod catalog;
pub mod copy;
mod errors;
pub mod pipeline;
pub mod render;
pub mod settings;

pub use catalog::{InsertOrder, StatementCatalog};
pub use copy::build_copy_statements;
pub use errors::{ConfigurationError, PipelineError};
pub use pipeline::{Executor, run_phases, run_pipeline};
pub use settings::DwhConfig;
