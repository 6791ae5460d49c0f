//! Star schema statements for the songplays warehouse.
//!
//! Everything here is static SQL text: table teardown, table creation and the
//! staging-to-star transformations. The bulk-load `COPY` statements depend on
//! deployment settings and are built by the `songplays-dwh` crate on top of the
//! [Statement] record defined here.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::Serialize;

mod create;
mod drop;
mod insert;

pub use create::{CREATE_STATEMENTS, create_statements};
pub use drop::{DROP_STATEMENTS, drop_statements};
pub use insert::{INSERT_STATEMENTS, insert_statements};

/// Pipeline phase a statement belongs to, in execution order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Drop,
    Create,
    Copy,
    Insert,
}

impl Phase {
    /// Every phase in the order an executor must run them.
    pub const ALL: [Phase; 4] = [Phase::Drop, Phase::Create, Phase::Copy, Phase::Insert];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Drop => "drop",
            Phase::Create => "create",
            Phase::Copy => "copy",
            Phase::Insert => "insert",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePhaseError(s.to_owned()))
    }
}

/// Error parsing a [Phase] from its name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pipeline phase `{0}`, expected one of: drop, create, copy, insert")]
pub struct ParsePhaseError(String);

/// Tables of the warehouse, staging and star schema alike.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    StagingEvents,
    StagingSongs,
    Songplays,
    Users,
    Songs,
    Artists,
    Time,
}

impl Table {
    pub const fn name(&self) -> &'static str {
        match self {
            Table::StagingEvents => "staging_events",
            Table::StagingSongs => "staging_songs",
            Table::Songplays => "songplays",
            Table::Users => "users",
            Table::Songs => "songs",
            Table::Artists => "artists",
            Table::Time => "time",
        }
    }
    pub const fn is_staging(&self) -> bool {
        matches!(self, Table::StagingEvents | Table::StagingSongs)
    }
    /// `songplays` is the only fact table; it references every dimension.
    pub const fn is_fact(&self) -> bool {
        matches!(self, Table::Songplays)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named SQL statement bound to the phase and table it acts on.
///
/// Static statements borrow their text, parameterized ones own it. Either way
/// the text never changes once the statement exists.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    name: &'static str,
    phase: Phase,
    table: Table,
    text: Cow<'static, str>,
}

impl Statement {
    pub const fn new_static(
        name: &'static str,
        phase: Phase,
        table: Table,
        text: &'static str,
    ) -> Self {
        Statement {
            name,
            phase,
            table,
            text: Cow::Borrowed(text),
        }
    }
    pub fn new_owned(name: &'static str, phase: Phase, table: Table, text: String) -> Self {
        Statement {
            name,
            phase,
            table,
            text: Cow::Owned(text),
        }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn table(&self) -> Table {
        self.table
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
