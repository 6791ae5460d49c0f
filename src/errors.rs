use songplays_schema::Phase;

/// Error resolving the warehouse settings.
///
/// This is the only failure a [StatementCatalog](crate::StatementCatalog) can
/// raise, and it is raised before any statement exists.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("could not read settings—{0}")]
    Source(#[from] config::ConfigError),
    #[error("missing required setting `{key}` in section [{section}]")]
    Missing {
        section: &'static str,
        key: &'static str,
    },
    #[error("required setting `{key}` in section [{section}] is empty")]
    Empty {
        section: &'static str,
        key: &'static str,
    },
}

/// Error executing a statement through an [Executor](crate::Executor)
#[derive(thiserror::Error, Debug)]
#[error("{phase} statement `{statement}` failed")]
pub struct PipelineError<E> {
    pub phase: Phase,
    pub statement: &'static str,
    #[source]
    pub source: E,
}
