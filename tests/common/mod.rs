//! Common Test Utilities
//!
//! Builders for report page markup. Rows are written the way the report
//! generator renders them: a leading `<th>` for the row label, counters in
//! `<td>` cells, percentage columns filled with placeholder text.

#![allow(dead_code)]

/// Transfer cell; `bytes` adds the raw attribute carried by newer tables
fn xfer_cell(kb: u64, bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) => format!("<td data-xfer=\"{}\">{} KB</td>", bytes, kb),
        None => format!("<td>{}</td>", kb),
    }
}

/// Daily usage row (25 cells)
///
/// Hits, files and pages share `hits`; visits and hosts share `visits`.
pub fn daily_row(day: u32, hits: u64, visits: u64, kb: u64, bytes: Option<u64>) -> String {
    let mut row = format!("<tr><th>{}</th>", day);
    for col in 1..25 {
        let cell = match col {
            1 | 5 | 9 => format!("<td>{}</td>", hits),
            13 | 17 => format!("<td>{}</td>", visits),
            21 => xfer_cell(kb, bytes),
            _ => "<td class=\"pct\">1.0%</td>".to_string(),
        };
        row.push_str(&cell);
    }
    row.push_str("</tr>");
    row
}

/// Hourly usage row (13 cells)
pub fn hourly_row(hour: u32, hits: u64, kb: u64, bytes: Option<u64>) -> String {
    let mut row = format!("<tr><th>{}</th>", hour);
    for col in 1..13 {
        let cell = match col {
            2 | 5 | 8 => format!("<td>{}</td>", hits),
            11 => xfer_cell(kb, bytes),
            _ => "<td>0</td>".to_string(),
        };
        row.push_str(&cell);
    }
    row.push_str("</tr>");
    row
}

/// Country usage row (10 cells); `code` is written as the raw attribute
pub fn country_row(rank: usize, name: &str, code: Option<&str>, visits: u64) -> String {
    let name_cell = match code {
        Some(code) => format!("<td data-ctry=\"{}\">{}</td>", code, name),
        None => format!("<td>{}</td>", name),
    };
    format!(
        "<tr><th>{}</th><td>{}</td><td>1.0%</td><td>{}</td><td>1.0%</td>\
         <td>10</td><td>1.0%</td><td>{}</td><td>1.0%</td>{}</tr>",
        rank,
        visits * 3,
        visits * 2,
        visits,
        name_cell
    )
}

/// Monthly summary row (11 cells) linking to `usage_YYYYMM.html`
pub fn monthly_row(yyyymm: &str, hits: u64, visits: u64, kb: u64, bytes: Option<u64>) -> String {
    let mut row = format!(
        "<tr><th><a href=\"usage_{}.html\">{}</a></th>",
        yyyymm, yyyymm
    );
    for col in 1..11 {
        let cell = match col {
            6 => xfer_cell(kb, bytes),
            7 => format!("<td>{}</td>", visits),
            8..=10 => format!("<td>{}</td>", hits),
            _ => "<td>0</td>".to_string(),
        };
        row.push_str(&cell);
    }
    row.push_str("</tr>");
    row
}

/// Monthly summary totals footer, narrower than a data row
pub fn monthly_footer() -> String {
    "<tbody class=\"summary_footer_tbody\"><tr><th colspan=\"5\">Totals</th>\
     <td>1</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td></tr></tbody>"
        .to_string()
}

/// Monthly totals table: one labelled row per statistic
pub fn totals_table(hits: u64, visits: u64) -> String {
    format!(
        "<table id=\"monthly_totals_table\" class=\"report_table monthly_totals_table\">\
         <thead><tr class=\"table_title_tr\"><th colspan=\"3\">Monthly Statistics</th></tr></thead>\
         <tbody class=\"totals_data_tbody\">\
         <tr><th>Total Hits</th>\n<td colspan=\"2\">{}</td></tr>\
         <tr><th>Total Visits</th>\n<td colspan=\"2\">{}</td></tr>\
         </tbody></table>",
        hits, visits
    )
}

/// Report table with a header row and one body group
pub fn table(id: &str, version: Option<u32>, rows: &[String]) -> String {
    let version = version
        .map(|v| format!(" data-version=\"{}\"", v))
        .unwrap_or_default();
    format!(
        "<table id=\"{}\"{}><thead><tr><th>Label</th><th>Hits</th></tr></thead>\
         <tbody>{}</tbody></table>",
        id,
        version,
        rows.concat()
    )
}

/// Same as `table` with extra row groups appended after the body
pub fn table_with_groups(id: &str, version: Option<u32>, rows: &[String], groups: &str) -> String {
    table(id, version, rows).replace("</tbody></table>", &format!("</tbody>{}</table>", groups))
}

/// Monthly usage page with a main menu, help topics and the given tables
pub fn usage_page(tables: &[String]) -> String {
    format!(
        "<html><body><a name=\"top\"></a>\
         <div id=\"main_menu\"><ul>\
         <li><a href=\"#daily\">Daily usage</a></li>\
         <li><a href=\"#hourly\">Hourly usage</a></li>\
         <li><a href=\"#country\">Countries</a></li>\
         </ul></div>\
         <div id=\"helptext\" style=\"display:none\">\
         <div title=\"hits\">Any request made to the server.</div>\
         <div title=\"xfer\">Amount of data sent<br>to clients.</div>\
         </div>{}</body></html>",
        tables.concat()
    )
}

/// Index page holding the monthly summary
pub fn index_page(summary_table: &str) -> String {
    format!(
        "<html><body><h2>Summary by month</h2>{}</body></html>",
        summary_table
    )
}
