use std::{fs, io::Read};

use crate::{Error, Result, options::SolverOptions};

const COMMENT_PREFIX: char = '#';

/// Reads the raw matrix text from `--input`, or stdin when unset.
pub(crate) fn read_matrix_text(options: &SolverOptions) -> Result<String> {
    match options.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::invalid_input(format!("failed to read input {}: {e}", path.display()))
        }),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses a whitespace-separated table, one row per line. Blank lines and
/// lines starting with `#` are skipped. Shape is not checked here.
pub fn parse_matrix(input: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| {
                    Error::invalid_input(format!("Line {}: invalid distance: {tok}", idx + 1))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(Error::invalid_input("No distance rows provided."));
    }

    log::debug!("input: rows={}", rows.len());
    Ok(rows)
}
