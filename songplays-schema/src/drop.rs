use crate::{Phase, Statement, Table};

/// Teardown of every table, staging first.
///
/// `IF EXISTS` keeps the phase idempotent on a fresh cluster.
pub static DROP_STATEMENTS: [Statement; 7] = [
    teardown(Table::StagingEvents, "drop_staging_events", "DROP TABLE IF EXISTS staging_events"),
    teardown(Table::StagingSongs, "drop_staging_songs", "DROP TABLE IF EXISTS staging_songs"),
    teardown(Table::Songplays, "drop_songplays", "DROP TABLE IF EXISTS songplays"),
    teardown(Table::Users, "drop_users", "DROP TABLE IF EXISTS users"),
    teardown(Table::Songs, "drop_songs", "DROP TABLE IF EXISTS songs"),
    teardown(Table::Artists, "drop_artists", "DROP TABLE IF EXISTS artists"),
    teardown(Table::Time, "drop_time", "DROP TABLE IF EXISTS time"),
];

const fn teardown(table: Table, name: &'static str, text: &'static str) -> Statement {
    Statement::new_static(name, Phase::Drop, table, text)
}

pub fn drop_statements() -> &'static [Statement] {
    &DROP_STATEMENTS
}
