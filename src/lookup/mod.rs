//! Record lookup subsystem.
//!
//! # Data Flow
//! ```text
//! raw table text (CSV/TSV)
//!     → table.rs (line split, delimiter detection, column map)
//!     → matcher.rs (linear scan on normalized CPF)
//!     → StudentRecord | no match
//! ```
//!
//! # Design Decisions
//! - Matching compares only the digits of the CPF column; every other
//!   field passes through trimmed but otherwise unmodified
//! - First match wins; the scan stops at the first equal row
//! - Header labels map columns by name, with positional fallback for
//!   tables that do not carry the known labels

pub mod cpf;
pub mod matcher;
pub mod record;
pub mod table;

pub use cpf::{normalize, Cpf, CpfError};
pub use matcher::find_record;
pub use record::StudentRecord;
