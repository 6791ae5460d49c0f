use crate::{Phase, Statement, Table};

// Column names mirror the JSON keys of the event logs so the JSONPath file
// maps onto them one to one.
const STAGING_EVENTS: &str = r#"CREATE TABLE IF NOT EXISTS "staging_events" (
    artist VARCHAR,
    auth VARCHAR,
    firstName VARCHAR,
    gender VARCHAR,
    itemInSession INTEGER,
    lastName VARCHAR,
    length DECIMAL,
    level VARCHAR,
    location VARCHAR,
    method VARCHAR,
    page VARCHAR,
    registration DECIMAL,
    sessionId BIGINT,
    song VARCHAR,
    status DECIMAL,
    ts TIMESTAMP,
    userAgent VARCHAR,
    userId VARCHAR
);"#;

const STAGING_SONGS: &str = r#"CREATE TABLE IF NOT EXISTS "staging_songs" (
    artist_id VARCHAR,
    artist_latitude DECIMAL,
    artist_location VARCHAR,
    artist_longitude DECIMAL,
    artist_name VARCHAR,
    duration DECIMAL,
    num_songs BIGINT,
    song_id VARCHAR,
    title VARCHAR,
    year BIGINT
);"#;

const SONGS: &str = r#"CREATE TABLE IF NOT EXISTS songs (
    song_id VARCHAR PRIMARY KEY,
    title VARCHAR,
    artist_id VARCHAR,
    year INTEGER,
    duration DECIMAL
);"#;

const TIME: &str = r#"CREATE TABLE IF NOT EXISTS time (
    start_time TIMESTAMP NOT NULL PRIMARY KEY,
    hour INTEGER,
    day INTEGER,
    week INTEGER,
    month INTEGER,
    year INTEGER,
    weekday INTEGER
);"#;

const USERS: &str = r#"CREATE TABLE IF NOT EXISTS users (
    user_id VARCHAR PRIMARY KEY,
    first_name VARCHAR,
    last_name VARCHAR,
    gender VARCHAR,
    level VARCHAR
);"#;

const ARTISTS: &str = r#"CREATE TABLE IF NOT EXISTS artists (
    artist_id VARCHAR PRIMARY KEY,
    name VARCHAR,
    location VARCHAR,
    latitude DECIMAL,
    longitude DECIMAL
);"#;

const SONGPLAYS: &str = r#"CREATE TABLE IF NOT EXISTS songplays (
    songplay_id INTEGER GENERATED ALWAYS AS IDENTITY,
    start_time TIMESTAMP NOT NULL,
    FOREIGN KEY (start_time) REFERENCES time(start_time),
    user_id VARCHAR NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(user_id),
    level VARCHAR,
    song_id VARCHAR,
    FOREIGN KEY (song_id) REFERENCES songs(song_id),
    artist_id VARCHAR,
    FOREIGN KEY (artist_id) REFERENCES artists(artist_id),
    session_id BIGINT,
    location VARCHAR,
    user_agent VARCHAR
);"#;

/// Table creation: staging, then dimensions, then the fact table that
/// references them.
pub static CREATE_STATEMENTS: [Statement; 7] = [
    create(Table::StagingEvents, "create_staging_events", STAGING_EVENTS),
    create(Table::StagingSongs, "create_staging_songs", STAGING_SONGS),
    create(Table::Songs, "create_songs", SONGS),
    create(Table::Time, "create_time", TIME),
    create(Table::Users, "create_users", USERS),
    create(Table::Artists, "create_artists", ARTISTS),
    create(Table::Songplays, "create_songplays", SONGPLAYS),
];

const fn create(table: Table, name: &'static str, text: &'static str) -> Statement {
    Statement::new_static(name, Phase::Create, table, text)
}

pub fn create_statements() -> &'static [Statement] {
    &CREATE_STATEMENTS
}
