//! HTML report page reading
//!
//! - `scan`: tokenizer over the page markup
//! - `table`: report tables located by element id
//! - `rows`: flattened data rows of a table
//! - `encode`: entity encoding and decoding

pub mod encode;
pub mod rows;
pub mod scan;
pub mod table;

pub use encode::{decode_entities, html_encode};
pub use rows::{collect_rows, skip_footer_groups};
pub use table::{format_version, Cell, ReportTable, Row, RowGroup};
