use clap::ValueEnum;
use songplays_schema::{Phase, Statement};

use crate::catalog::StatementCatalog;

/// Output format of a rendered statement list.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Sql,
    Json,
}

/// Statements of the selected phases, in pipeline order. No phases selects
/// every phase.
pub fn select<'a>(
    catalog: &'a StatementCatalog,
    phases: &'a [Phase],
) -> impl Iterator<Item = &'a Statement> {
    catalog
        .pipeline()
        .filter(move |statement| phases.is_empty() || phases.contains(&statement.phase()))
}

/// Renders the selected phases of `catalog` in the given format.
pub fn render(
    catalog: &StatementCatalog,
    phases: &[Phase],
    format: Format,
) -> Result<String, serde_json::Error> {
    let statements = select(catalog, phases);
    match format {
        Format::Sql => Ok(render_sql(statements)),
        Format::Json => render_json(statements),
    }
}

/// Renders statements as a SQL script, each one preceded by a `-- name` line
/// and terminated by a single `;`.
pub fn render_sql<'a>(statements: impl IntoIterator<Item = &'a Statement>) -> String {
    let mut script = String::new();
    for statement in statements {
        let text = statement.text().trim_end().trim_end_matches(';');
        script.push_str(&format!("-- {}\n{text};\n\n", statement.name()));
    }
    script
}

/// Renders statements as a JSON array of `{name, phase, table, text}` objects.
pub fn render_json<'a>(
    statements: impl IntoIterator<Item = &'a Statement>,
) -> Result<String, serde_json::Error> {
    let statements: Vec<&Statement> = statements.into_iter().collect();
    serde_json::to_string_pretty(&statements)
}
