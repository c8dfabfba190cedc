//! Level table assembly: the stock levels plus an optional scenario file

use std::fs;
use std::path::Path;

use chess_rules::{ScenarioFile, ScenarioTable};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Read a `{ "levels": [ ... ] }` scenario file
pub fn read_scenario_file(path: &Path) -> AppResult<ScenarioFile> {
    let contents = fs::read_to_string(path)?;
    let file: ScenarioFile = serde_json::from_str(&contents)?;
    if file.levels.is_empty() {
        return Err(AppError::EmptyScenarioFile {
            path: path.to_path_buf(),
        });
    }
    Ok(file)
}

/// Builtin levels, followed by (or replaced by) the levels of `extra`
///
/// Layouts are validated eagerly so a broken file is reported at startup
/// rather than when its level comes up.
pub fn build_table(extra: Option<&Path>) -> AppResult<ScenarioTable> {
    let mut table = ScenarioTable::builtin();

    if let Some(path) = extra {
        let file = read_scenario_file(path)?;
        for def in &file.levels {
            def.build_board()?;
        }
        info!(
            "[SCENARIO] Added {} levels from {:?}",
            file.levels.len(),
            path
        );
        table.extend_from_file(file);
    }

    Ok(table)
}
