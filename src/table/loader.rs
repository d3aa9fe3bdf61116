// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader for the cytokine panel export.
//!
//! This is not a general CSV reader. It expects one header row, a sample-ID
//! column, a label row repeating the column title of the IDs, and any number
//! of placeholder columns. Everything else must parse as a float.

use std::io::Read;

use ndarray::Array2;
use tracing::{debug, info};

use super::Table;
use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};

/// Load the table from `config.source_path`.
pub fn load_path(config: &DatasetConfig) -> Result<Table> {
    debug!(path = %config.source_path.display(), "reading dataset");
    let text = std::fs::read_to_string(&config.source_path)?;
    load_str(&text, config)
}

/// Load the table from any reader.
pub fn load_reader<R: Read>(mut reader: R, config: &DatasetConfig) -> Result<Table> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_str(&text, config)
}

/// Load the table from in-memory text.
pub fn load_str(text: &str, config: &DatasetConfig) -> Result<Table> {
    // Spreadsheet exports often lead with a byte order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| DatasetError::format("input has no header row"))?;
    let header: Vec<String> = split_record(header_line, config.delimiter)?
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect();

    let index_pos = header
        .iter()
        .position(|h| *h == config.index_column)
        .ok_or_else(|| {
            DatasetError::format(format!(
                "index column '{}' not found in header",
                config.index_column
            ))
        })?;

    let (kept, dropped): (Vec<usize>, Vec<usize>) = (0..header.len())
        .filter(|&j| j != index_pos)
        .partition(|&j| !config.is_placeholder(&header[j]));
    if !dropped.is_empty() {
        let names: Vec<&str> = dropped.iter().map(|&j| header[j].as_str()).collect();
        debug!(columns = ?names, "dropping placeholder columns");
    }

    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();
    for (line_no, line) in lines {
        let fields = split_record(line, config.delimiter)?;
        if fields.len() != header.len() {
            return Err(DatasetError::format(format!(
                "line {}: expected {} fields, found {}",
                line_no + 1,
                header.len(),
                fields.len()
            )));
        }
        rows.push((line_no, fields));
    }

    let before = rows.len();
    rows.retain(|(_, fields)| fields[index_pos].trim() != config.label_row);
    if rows.len() == before {
        return Err(DatasetError::format(format!(
            "label row '{}' not found",
            config.label_row
        )));
    }

    let mut index = Vec::with_capacity(rows.len());
    let mut values = Array2::<f64>::zeros((rows.len(), kept.len()));
    for (r, (line_no, fields)) in rows.iter().enumerate() {
        let id = fields[index_pos].trim();
        for (c, &j) in kept.iter().enumerate() {
            values[[r, c]] = parse_cell(&fields[j], *line_no, &header[j])?;
        }
        index.push(id.to_string());
    }

    let columns: Vec<String> = kept.iter().map(|&j| header[j].clone()).collect();
    let table = Table::new(config.index_name.clone(), index, columns, values)?;
    let (n_rows, n_cols) = table.shape();
    info!(rows = n_rows, columns = n_cols, "loaded dataset");
    Ok(table)
}

fn parse_cell(raw: &str, line_no: usize, column: &str) -> Result<f64> {
    let cell = raw.trim();
    if cell.is_empty() {
        return Err(DatasetError::format(format!(
            "line {}: missing value in column '{column}'",
            line_no + 1
        )));
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DatasetError::format(format!(
            "line {}: cannot convert '{cell}' in column '{column}' to float",
            line_no + 1
        ))),
    }
}

/// Split one delimited line, honouring double-quoted fields.
///
/// A doubled quote inside a quoted field is an escaped quote.
pub fn split_record(line: &str, delimiter: char) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(ch);
        }
    }
    if in_quotes {
        return Err(DatasetError::format(format!("unterminated quote in '{line}'")));
    }
    fields.push(field);
    Ok(fields)
}
