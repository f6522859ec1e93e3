//! Grade-sheet import

pub mod csv_parser;

pub use csv_parser::{parse_grade_sheet, parse_grade_sheet_str, SheetMetadata};
