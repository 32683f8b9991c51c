//! Tabular text parsing.
//!
//! # Responsibilities
//! - Detect the cell delimiter from the header line
//! - Split lines into trimmed cells
//! - Map header labels to column indices
//!
//! # Design Decisions
//! - Delimiter heuristic: tab if the header contains one, else comma.
//!   A cell value containing the chosen delimiter corrupts that row;
//!   published sheet exports do not quote, so this is accepted
//! - Header labels are matched case-insensitively after trimming;
//!   unknown layouts fall back to positional columns 0..6

use crate::lookup::record::COLUMN_LABELS;

/// Pick the delimiter by inspecting the header line.
pub fn detect_delimiter(header: &str) -> char {
    if header.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// Split one line into cells, trimming surrounding whitespace from each.
pub fn split_cells(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(str::trim).collect()
}

/// Column indices for each record field, derived from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub cpf: usize,
    pub campus: usize,
    pub ra: usize,
    pub nome_aluno: usize,
    pub nome_disciplina: usize,
    pub horario: usize,
    pub local: usize,
}

impl ColumnMap {
    /// Build the map from header cells.
    ///
    /// Each known label found in the header takes its header position;
    /// labels not present keep their canonical position.
    pub fn from_header(header_cells: &[&str]) -> Self {
        let index_of = |position: usize| {
            let label = COLUMN_LABELS[position];
            header_cells
                .iter()
                .position(|cell| cell.eq_ignore_ascii_case(label))
                .unwrap_or(position)
        };
        Self {
            cpf: index_of(0),
            campus: index_of(1),
            ra: index_of(2),
            nome_aluno: index_of(3),
            nome_disciplina: index_of(4),
            horario: index_of(5),
            local: index_of(6),
        }
    }
}
