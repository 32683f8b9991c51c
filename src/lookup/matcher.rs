//! Record matching over raw table text.
//!
//! # Responsibilities
//! - Scan data rows in order for the first CPF match
//! - Project the matching row into a [`StudentRecord`]
//!
//! # Design Decisions
//! - Exact equality on normalized digits only; no partial or fuzzy match
//! - Linear scan, O(rows × cells); the scan stops at the first match
//! - The input text is never mutated

use crate::lookup::cpf::{normalize, Cpf};
use crate::lookup::record::StudentRecord;
use crate::lookup::table::{detect_delimiter, split_cells, ColumnMap};

/// Find the first row whose CPF column matches the search key.
///
/// Line 0 is the header and is only used for delimiter detection and
/// column mapping; it is never matched against. Returns `None` when the
/// table is empty or no row matches.
pub fn find_record(table: &str, key: &Cpf) -> Option<StudentRecord> {
    let mut lines = table.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next()?;
    let delimiter = detect_delimiter(header);
    let columns = ColumnMap::from_header(&split_cells(header, delimiter));

    for line in lines {
        let cells = split_cells(line, delimiter);
        let row_cpf = cells.get(columns.cpf).copied().unwrap_or("");
        if normalize(row_cpf) == key.digits() {
            return Some(StudentRecord::project(&cells, &columns));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "cpf,campus,ra,nome_aluno,nome_disciplina,horario,local";

    fn key(s: &str) -> Cpf {
        s.parse().unwrap()
    }

    #[test]
    fn test_match_returns_full_record() {
        let table = format!(
            "{HEADER}\n11122233344,Campus A,RA001,Jane Doe,Algorithms,Mon 10:00,Room 5\n"
        );
        let record = find_record(&table, &key("111.222.333-44")).unwrap();
        assert_eq!(record.cpf, "11122233344");
        assert_eq!(record.campus, "Campus A");
        assert_eq!(record.ra, "RA001");
        assert_eq!(record.nome_aluno, "Jane Doe");
        assert_eq!(record.nome_disciplina, "Algorithms");
        assert_eq!(record.horario, "Mon 10:00");
        assert_eq!(record.local, "Room 5");
    }

    #[test]
    fn test_no_match_returns_none() {
        let table = format!(
            "{HEADER}\n11122233344,Campus A,RA001,Jane Doe,Algorithms,Mon 10:00,Room 5\n"
        );
        assert_eq!(find_record(&table, &key("999.999.999-99")), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = format!(
            "{HEADER}\n\
             11122233344,Campus A,RA001,Jane Doe,Algorithms,Mon 10:00,Room 5\n\
             11122233344,Campus B,RA002,Impostor,Databases,Tue 08:00,Room 9\n"
        );
        let record = find_record(&table, &key("11122233344")).unwrap();
        assert_eq!(record.campus, "Campus A");
        assert_eq!(record.ra, "RA001");
    }

    #[test]
    fn test_row_cpf_is_normalized_before_comparison() {
        let table = format!("{HEADER}\n111.222.333-44,Campus A,RA001,Jane,Alg,Mon,R5\n");
        assert!(find_record(&table, &key("11122233344")).is_some());
    }

    #[test]
    fn test_tab_delimiter_with_padded_cells() {
        let table = "cpf\tcampus\tra\tnome_aluno\tnome_disciplina\thorario\tlocal\n\
                     111.222.333-44 \t Campus A \t RA001 \t Jane Doe \t Algorithms \t Mon 10:00 \t Room 5\n";
        let record = find_record(table, &key("11122233344")).unwrap();
        assert_eq!(record.campus, "Campus A");
        assert_eq!(record.local, "Room 5");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = format!(
            "{HEADER}\n\n   \n11122233344,Campus A,RA001,Jane,Alg,Mon,R5\n\n"
        );
        assert!(find_record(&table, &key("11122233344")).is_some());
    }

    #[test]
    fn test_short_row_pads_missing_cells() {
        let table = format!("{HEADER}\n11122233344,Campus A\n");
        let record = find_record(&table, &key("11122233344")).unwrap();
        assert_eq!(record.campus, "Campus A");
        assert_eq!(record.ra, "");
        assert_eq!(record.local, "");
    }

    #[test]
    fn test_header_is_never_matched() {
        // A header whose first cell happens to normalize to the key
        let table = "11122233344,campus,ra,nome_aluno,nome_disciplina,horario,local\n";
        assert_eq!(find_record(table, &key("11122233344")), None);
    }

    #[test]
    fn test_reordered_columns_project_by_name() {
        let table = "nome_aluno,cpf,campus,ra,nome_disciplina,horario,local\n\
                     Jane Doe,11122233344,Campus A,RA001,Algorithms,Mon 10:00,Room 5\n";
        let record = find_record(table, &key("11122233344")).unwrap();
        assert_eq!(record.nome_aluno, "Jane Doe");
        assert_eq!(record.cpf, "11122233344");
        assert_eq!(record.campus, "Campus A");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(find_record("", &key("11122233344")), None);
        assert_eq!(find_record("\n \n", &key("11122233344")), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = format!("{HEADER}\r\n11122233344,Campus A,RA001,Jane,Alg,Mon,R5\r\n");
        let record = find_record(&table, &key("11122233344")).unwrap();
        assert_eq!(record.local, "R5");
    }
}
