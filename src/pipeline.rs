use songplays_schema::{Phase, Statement};

use crate::{catalog::StatementCatalog, errors::PipelineError};

/// Something that runs SQL against the warehouse.
///
/// Connections, transactions and timeouts belong to the implementor; the
/// catalog only hands over statements one at a time, in order.
pub trait Executor {
    type Error;

    fn execute(&mut self, statement: &Statement) -> Result<(), Self::Error>;
}

impl<F, E> Executor for F
where
    F: FnMut(&Statement) -> Result<(), E>,
{
    type Error = E;

    fn execute(&mut self, statement: &Statement) -> Result<(), E> {
        self(statement)
    }
}

/// Runs the selected phases, always in pipeline order whatever order they are
/// given in, and stops at the first failing statement.
///
/// Returns how many statements were executed.
pub fn run_phases<X: Executor>(
    catalog: &StatementCatalog,
    phases: &[Phase],
    executor: &mut X,
) -> Result<usize, PipelineError<X::Error>> {
    let mut executed = 0;
    for phase in Phase::ALL.into_iter().filter(|phase| phases.contains(phase)) {
        for statement in catalog.phase(phase) {
            tracing::info!(%phase, statement = statement.name(), "executing statement");
            executor
                .execute(statement)
                .map_err(|source| PipelineError {
                    phase,
                    statement: statement.name(),
                    source,
                })?;
            executed += 1;
        }
    }
    Ok(executed)
}

/// Runs every phase: drop, create, copy, insert.
pub fn run_pipeline<X: Executor>(
    catalog: &StatementCatalog,
    executor: &mut X,
) -> Result<usize, PipelineError<X::Error>> {
    run_phases(catalog, &Phase::ALL, executor)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    const SETTINGS: &str = "\
[S3]
LOG_DATA=s3://bucket/log-data/
LOG_JSONPATH=s3://bucket/log_json_path.json
SONG_DATA=s3://bucket/song-data/
[IAM_ROLE]
ARN=arn:aws:iam::123456789012:role/dwhRole
";

    #[derive(Default)]
    struct Recorder {
        executed: Vec<&'static str>,
    }

    impl Executor for Recorder {
        type Error = io::Error;

        fn execute(&mut self, statement: &Statement) -> Result<(), io::Error> {
            self.executed.push(statement.name());
            Ok(())
        }
    }

    #[test]
    fn pipeline_executes_everything_in_order() -> Result<(), anyhow::Error> {
        let catalog = StatementCatalog::from_ini_str(SETTINGS)?;
        let mut recorder = Recorder::default();
        let executed = run_pipeline(&catalog, &mut recorder)?;
        assert_eq!(executed, 21);
        let expected: Vec<_> = catalog.pipeline().map(Statement::name).collect();
        assert_eq!(recorder.executed, expected);
        assert_eq!(recorder.executed.first(), Some(&"drop_staging_events"));
        assert_eq!(recorder.executed.last(), Some(&"insert_time"));
        Ok(())
    }

    #[test]
    fn phases_run_in_pipeline_order_regardless_of_request() -> Result<(), anyhow::Error> {
        let catalog = StatementCatalog::from_ini_str(SETTINGS)?;
        let mut recorder = Recorder::default();
        let executed = run_phases(&catalog, &[Phase::Insert, Phase::Copy], &mut recorder)?;
        assert_eq!(executed, 7);
        assert_eq!(
            &recorder.executed[..2],
            ["copy_staging_events", "copy_staging_songs"]
        );
        assert_eq!(recorder.executed[2], "insert_songplays");
        Ok(())
    }

    #[test]
    fn first_failure_stops_the_run() -> Result<(), anyhow::Error> {
        let catalog = StatementCatalog::from_ini_str(SETTINGS)?;
        let mut seen = Vec::new();
        let mut executor = |statement: &Statement| {
            seen.push(statement.name());
            if statement.phase() == Phase::Copy {
                Err(io::Error::other("access denied"))
            } else {
                Ok(())
            }
        };
        let err = run_pipeline(&catalog, &mut executor).unwrap_err();
        assert_eq!(err.phase, Phase::Copy);
        assert_eq!(err.statement, "copy_staging_events");
        assert_eq!(err.to_string(), "copy statement `copy_staging_events` failed");
        assert_eq!(seen.len(), 7 + 7 + 1);
        Ok(())
    }
}
