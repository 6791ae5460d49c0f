use songplays_schema::{Phase, Statement, Table};

use crate::settings::DwhConfig;

/// Builds the bulk loads for both staging tables, events first.
///
/// Paths and the role ARN are interpolated verbatim, with no quoting or
/// validation: they come from the deployment's own settings file.
pub fn build_copy_statements(config: &DwhConfig) -> [Statement; 2] {
    [
        Statement::new_owned(
            "copy_staging_events",
            Phase::Copy,
            Table::StagingEvents,
            staging_events_copy(config),
        ),
        Statement::new_owned(
            "copy_staging_songs",
            Phase::Copy,
            Table::StagingSongs,
            staging_songs_copy(config),
        ),
    ]
}

// Event timestamps are epoch milliseconds; the JSONPath file maps the log
// fields onto the staging columns.
fn staging_events_copy(config: &DwhConfig) -> String {
    format!(
        "COPY staging_events FROM '{log_data}'
CREDENTIALS 'aws_iam_role={arn}'
FORMAT AS JSON '{jsonpath}'
COMPUPDATE OFF
TIMEFORMAT AS 'epochmillisecs'
REGION '{region}';",
        log_data = config.log_data(),
        arn = config.iam_role_arn(),
        jsonpath = config.log_jsonpath(),
        region = config.region(),
    )
}

fn staging_songs_copy(config: &DwhConfig) -> String {
    format!(
        "COPY staging_songs FROM '{song_data}'
CREDENTIALS 'aws_iam_role={arn}'
JSON 'auto'
COMPUPDATE OFF
REGION '{region}';",
        song_data = config.song_data(),
        arn = config.iam_role_arn(),
        region = config.region(),
    )
}
