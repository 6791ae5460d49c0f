use std::{borrow::Cow, path::Path};

use songplays_schema::{
    Phase, Statement, create_statements, drop_statements, insert_statements,
};

use crate::{copy::build_copy_statements, errors::ConfigurationError, settings::DwhConfig};

/// Order of the insert phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertOrder {
    /// `songplays` first, then users, songs, artists, time. Relies on the
    /// warehouse not enforcing foreign keys on insert.
    #[default]
    SourceParity,
    /// Dimensions first, `songplays` last. For warehouses that do enforce
    /// foreign keys at insert time.
    DimensionsFirst,
}

/// Every statement of the pipeline, grouped by phase.
///
/// Built once from a validated [DwhConfig] and never mutated afterwards, so it
/// can be shared between readers freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementCatalog {
    copy: [Statement; 2],
    insert: Cow<'static, [Statement]>,
    insert_order: InsertOrder,
}

impl StatementCatalog {
    pub fn new(config: &DwhConfig) -> Self {
        let catalog = StatementCatalog {
            copy: build_copy_statements(config),
            insert: Cow::Borrowed(insert_statements()),
            insert_order: InsertOrder::SourceParity,
        };
        tracing::debug!(
            statements = catalog.pipeline().count(),
            region = config.region(),
            "built statement catalog"
        );
        catalog
    }

    /// Loads the settings file and builds the catalog from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Ok(Self::new(&DwhConfig::load(path)?))
    }

    pub fn from_ini_str(contents: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::new(&DwhConfig::from_ini_str(contents)?))
    }

    pub fn with_insert_order(mut self, insert_order: InsertOrder) -> Self {
        self.insert = match insert_order {
            InsertOrder::SourceParity => Cow::Borrowed(insert_statements()),
            InsertOrder::DimensionsFirst => {
                let mut statements = insert_statements().to_vec();
                // stable: dimensions keep their relative order
                statements.sort_by_key(|statement| statement.table().is_fact());
                Cow::Owned(statements)
            }
        };
        self.insert_order = insert_order;
        self
    }

    pub fn insert_order(&self) -> InsertOrder {
        self.insert_order
    }

    pub fn drop_statements(&self) -> &[Statement] {
        drop_statements()
    }
    pub fn create_statements(&self) -> &[Statement] {
        create_statements()
    }
    pub fn copy_statements(&self) -> &[Statement] {
        &self.copy
    }
    pub fn insert_statements(&self) -> &[Statement] {
        &self.insert
    }

    pub fn phase(&self, phase: Phase) -> &[Statement] {
        match phase {
            Phase::Drop => self.drop_statements(),
            Phase::Create => self.create_statements(),
            Phase::Copy => self.copy_statements(),
            Phase::Insert => self.insert_statements(),
        }
    }

    /// Every statement in execution order: drop, create, copy, insert.
    pub fn pipeline(&self) -> impl Iterator<Item = &Statement> {
        Phase::ALL.into_iter().flat_map(|phase| self.phase(phase))
    }

    pub fn statement(&self, name: &str) -> Option<&Statement> {
        self.pipeline().find(|statement| statement.name() == name)
    }
}
