use crate::{Phase, Statement, Table};

const SONGPLAYS: &str = r#"INSERT INTO songplays (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
SELECT DISTINCT ev.ts,
    ev.userId,
    ev.level,
    sn.song_id,
    sn.artist_id,
    ev.sessionId,
    ev.location,
    ev.userAgent
FROM staging_events AS ev
JOIN staging_songs AS sn ON ev.artist = sn.artist_name
WHERE ev.page = 'NextSong'"#;

const USERS: &str = r#"INSERT INTO users (user_id, first_name, last_name, gender, level)
SELECT DISTINCT ev.userId,
    ev.firstName,
    ev.lastName,
    ev.gender,
    ev.level
FROM staging_events AS ev
WHERE ev.page = 'NextSong' AND ev.userId IS NOT NULL"#;

const SONGS: &str = r#"INSERT INTO songs (song_id, title, artist_id, year, duration)
SELECT DISTINCT sn.song_id,
    sn.title,
    sn.artist_id,
    sn.year,
    sn.duration
FROM staging_songs AS sn
WHERE sn.song_id IS NOT NULL"#;

const ARTISTS: &str = r#"INSERT INTO artists (artist_id, name, location, latitude, longitude)
SELECT DISTINCT sn.artist_id,
    sn.artist_name,
    sn.artist_location,
    sn.artist_latitude,
    sn.artist_longitude
FROM staging_songs AS sn
WHERE sn.artist_id IS NOT NULL"#;

const TIME: &str = r#"INSERT INTO time (start_time, hour, day, week, month, year, weekday)
SELECT DISTINCT ev.ts,
    EXTRACT(hour FROM ev.ts),
    EXTRACT(day FROM ev.ts),
    EXTRACT(week FROM ev.ts),
    EXTRACT(month FROM ev.ts),
    EXTRACT(year FROM ev.ts),
    EXTRACT(weekday FROM ev.ts)
FROM staging_events AS ev
WHERE ev.page = 'NextSong' AND ev.ts IS NOT NULL"#;

/// Staging to star transformations.
///
/// The fact table comes first even though it references the dimensions; the
/// warehouse does not enforce foreign keys on insert.
pub static INSERT_STATEMENTS: [Statement; 5] = [
    insert(Table::Songplays, "insert_songplays", SONGPLAYS),
    insert(Table::Users, "insert_users", USERS),
    insert(Table::Songs, "insert_songs", SONGS),
    insert(Table::Artists, "insert_artists", ARTISTS),
    insert(Table::Time, "insert_time", TIME),
];

const fn insert(table: Table, name: &'static str, text: &'static str) -> Statement {
    Statement::new_static(name, Phase::Insert, table, text)
}

pub fn insert_statements() -> &'static [Statement] {
    &INSERT_STATEMENTS
}
