//! Level loading: a delimited text file becomes a rectangular matrix of
//! tile codes, one row per line. Purely structural; codes are not
//! interpreted here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::GameError;

/// Row-major matrix of tile codes, exactly as laid out in the file.
pub type CodeMatrix = Vec<Vec<String>>;

pub const FIELD_DELIMITER: char = ',';

pub fn load_level(path: &Path) -> Result<CodeMatrix, GameError> {
    let file = File::open(path).map_err(|e| GameError::AssetLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_level(BufReader::new(file), &path.display().to_string())
}

fn parse_level<R: BufRead>(reader: R, path: &str) -> Result<CodeMatrix, GameError> {
    let mut matrix: CodeMatrix = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| GameError::AssetLoad {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<String> = line
            .split(FIELD_DELIMITER)
            .map(|code| code.trim().to_string())
            .collect();
        if let Some(first) = matrix.first() {
            if row.len() != first.len() {
                return Err(GameError::MalformedLevel {
                    path: path.to_string(),
                    reason: format!(
                        "row {} has {} columns, expected {}",
                        line_index + 1,
                        row.len(),
                        first.len()
                    ),
                });
            }
        }
        matrix.push(row);
    }
    if matrix.is_empty() {
        return Err(GameError::MalformedLevel {
            path: path.to_string(),
            reason: "level file has no rows".to_string(),
        });
    }
    Ok(matrix)
}
