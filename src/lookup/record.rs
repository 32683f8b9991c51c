//! The student record shape.

use serde::{Deserialize, Serialize};

use crate::lookup::table::ColumnMap;

/// Column labels as they appear in the published sheet header, in
/// positional order. Field extraction falls back to these positions when
/// a label is absent from the header.
pub const COLUMN_LABELS: [&str; 7] = [
    "cpf",
    "campus",
    "ra",
    "nome_aluno",
    "nome_disciplina",
    "horario",
    "local",
];

/// One student/course entry, as served to the client.
///
/// All fields are free-form text; the wire names match the sheet header
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub cpf: String,
    pub campus: String,
    pub ra: String,
    pub nome_aluno: String,
    pub nome_disciplina: String,
    pub horario: String,
    pub local: String,
}

impl StudentRecord {
    /// Project a row's cells into a record using the header column map.
    ///
    /// Cells missing from a short row default to the empty string.
    pub fn project(cells: &[&str], columns: &ColumnMap) -> Self {
        let cell = |i: usize| cells.get(i).copied().unwrap_or("").to_string();
        Self {
            cpf: cell(columns.cpf),
            campus: cell(columns.campus),
            ra: cell(columns.ra),
            nome_aluno: cell(columns.nome_aluno),
            nome_disciplina: cell(columns.nome_disciplina),
            horario: cell(columns.horario),
            local: cell(columns.local),
        }
    }
}
