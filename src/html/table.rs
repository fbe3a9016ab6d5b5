//! Report table model built from the token stream
//!
//! A `ReportTable` is the parsed form of one `<table id=...>` element: its
//! declared format version and its row groups (`<tbody>`/`<tfoot>`). Rows
//! that sit directly under the table element land in an implicit group, as
//! they would in a browser DOM. `<thead>` rows are not data and are dropped.

use std::collections::BTreeMap;

use super::encode::decode_entities;
use super::scan::{normalize_ws, Tag, Token, Tokenizer};

/// Attribute carrying the table's format version
pub const VERSION_ATTR: &str = "data-version";

/// Prefix of raw-value attributes on cells
const DATA_ATTR_PREFIX: &str = "data-";

/// One `<td>`/`<th>` cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Tag-stripped, entity-decoded, whitespace-coalesced text
    pub text: String,
    /// `data-*` attributes with the prefix stripped
    pub attrs: BTreeMap<String, String>,
    /// Target of the first link inside the cell
    pub link: Option<String>,
}

impl Cell {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// One `<tr>` and the index of the row group it belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub group: usize,
}

impl Row {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGroup {
    pub rows: Vec<Row>,
}

/// A parsed report table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub id: String,
    /// Raw `data-version` value, if the attribute is present
    pub version_attr: Option<String>,
    pub groups: Vec<RowGroup>,
}

impl ReportTable {
    /// Parse every table carrying an `id` attribute, in document order
    ///
    /// Tables nested inside a captured table contribute text to the
    /// enclosing cell only.
    pub fn parse_all(doc: &str) -> Vec<ReportTable> {
        let mut tables = Vec::new();
        let mut builder: Option<TableBuilder> = None;

        for token in Tokenizer::new(doc) {
            let closed = match builder.as_mut() {
                Some(b) => b.feed(token),
                None => {
                    if let Token::Open(tag) = &token {
                        if let Some(id) = tag.attr("id").filter(|_| tag.name == "table") {
                            builder = Some(TableBuilder::new(id, tag));
                        }
                    }
                    false
                }
            };
            if closed {
                if let Some(done) = builder.take() {
                    tables.push(done.finish());
                }
            }
        }

        // Unterminated table at end of document
        if let Some(b) = builder {
            tables.push(b.finish());
        }
        tables
    }

    /// Parse the table with the given element id, if the document has one
    pub fn find(doc: &str, id: &str) -> Option<ReportTable> {
        Self::parse_all(doc).into_iter().find(|t| t.id == id)
    }

    /// Number of rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

/// Declared format version of a table
///
/// An absent table is version 0 ("no data"); an absent attribute is
/// version 1. A value that does not parse also maps to 0, which no layout
/// supports.
///
/// # Examples
/// ```
/// use report_charts::html::{format_version, ReportTable};
///
/// assert_eq!(format_version(None), 0);
/// let table = ReportTable::find("<table id=\"t\"></table>", "t");
/// assert_eq!(format_version(table.as_ref()), 1);
/// ```
pub fn format_version(table: Option<&ReportTable>) -> u32 {
    match table {
        None => 0,
        Some(table) => match table.version_attr.as_deref() {
            None => 1,
            Some(v) => v.trim().parse().unwrap_or(0),
        },
    }
}

/// Incremental state while inside a captured `<table>`
struct TableBuilder {
    table: ReportTable,
    depth: usize,
    in_head: bool,
    group_open: bool,
    row: Option<Row>,
    cell: Option<CellBuilder>,
}

struct CellBuilder {
    text: String,
    attrs: BTreeMap<String, String>,
    link: Option<String>,
}

impl CellBuilder {
    fn new(tag: &Tag) -> Self {
        let attrs = tag
            .attrs
            .iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(DATA_ATTR_PREFIX)
                    .filter(|k| !k.is_empty())
                    .map(|k| (k.to_string(), v.clone()))
            })
            .collect();
        Self {
            text: String::new(),
            attrs,
            link: None,
        }
    }

    fn finish(self) -> Cell {
        Cell {
            text: normalize_ws(&decode_entities(&self.text)),
            attrs: self.attrs,
            link: self.link,
        }
    }
}

impl TableBuilder {
    fn new(id: &str, tag: &Tag) -> Self {
        Self {
            table: ReportTable {
                id: id.to_string(),
                version_attr: tag.attr(VERSION_ATTR).map(str::to_string),
                groups: Vec::new(),
            },
            depth: 1,
            in_head: false,
            group_open: false,
            row: None,
            cell: None,
        }
    }

    /// Consume one token; returns true once the table element is closed
    fn feed(&mut self, token: Token<'_>) -> bool {
        match token {
            Token::Text(text) => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.text.push_str(text);
                }
            }
            Token::Open(tag) => {
                if tag.name == "table" {
                    self.depth += 1;
                    return false;
                }
                if self.depth > 1 {
                    self.open_inline(&tag);
                    return false;
                }
                match tag.name.as_str() {
                    "thead" => {
                        self.close_group();
                        self.in_head = true;
                    }
                    "tbody" | "tfoot" => {
                        self.close_group();
                        self.in_head = false;
                        self.open_group();
                    }
                    "tr" => {
                        self.close_row();
                        self.row = Some(Row::default());
                    }
                    "td" | "th" => {
                        self.close_cell();
                        if self.row.is_none() {
                            self.row = Some(Row::default());
                        }
                        self.cell = Some(CellBuilder::new(&tag));
                    }
                    _ => self.open_inline(&tag),
                }
            }
            Token::Close(name) => {
                if name == "table" {
                    self.depth -= 1;
                    return self.depth == 0;
                }
                if self.depth > 1 {
                    return false;
                }
                match name.as_str() {
                    "thead" => {
                        self.close_row();
                        self.in_head = false;
                    }
                    "tbody" | "tfoot" => self.close_group(),
                    "tr" => self.close_row(),
                    "td" | "th" => self.close_cell(),
                    _ => {}
                }
            }
        }
        false
    }

    /// Inline markup inside a cell: links and line breaks
    fn open_inline(&mut self, tag: &Tag) {
        if let Some(cell) = self.cell.as_mut() {
            match tag.name.as_str() {
                "a" if cell.link.is_none() => {
                    cell.link = tag.attr("href").map(str::to_string);
                }
                "br" => cell.text.push(' '),
                _ => {}
            }
        }
    }

    fn open_group(&mut self) {
        self.table.groups.push(RowGroup::default());
        self.group_open = true;
    }

    fn close_cell(&mut self) {
        if let Some(cell) = self.cell.take() {
            if let Some(row) = self.row.as_mut() {
                row.cells.push(cell.finish());
            }
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        let Some(mut row) = self.row.take() else {
            return;
        };
        if self.in_head {
            return;
        }
        if !self.group_open {
            self.open_group();
        }
        row.group = self.table.groups.len() - 1;
        if let Some(group) = self.table.groups.last_mut() {
            group.rows.push(row);
        }
    }

    fn close_group(&mut self) {
        self.close_row();
        self.group_open = false;
    }

    fn finish(mut self) -> ReportTable {
        self.close_group();
        self.table
    }
}
