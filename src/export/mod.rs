//! JSON and CSV export
//!
//! JSON files are pretty-printed with two-space indentation and must
//! round-trip: `projectList.json` in particular is re-read (possibly after
//! hand edits) by `push-properties`. CSV output handles shape-varying
//! records by collecting rows as sparse column→value mappings and computing
//! the header as a stable union before anything is written.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::client::models::{Project, User};
use crate::correlate::{ProjectBranches, ProjectMembers};
use crate::error::Result;

/// Write a collection as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut contents = serde_json::to_string_pretty(value)?;
    contents.push('\n');
    std::fs::write(path, contents)?;
    Ok(())
}

/// One CSV row as a sparse column → value mapping, in insertion order
#[derive(Debug, Clone, Default)]
pub struct SparseRow {
    cells: Vec<(String, String)>,
}

impl SparseRow {
    /// Empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.push((column.into(), value.into()));
    }

    /// Value of a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// Union of all row columns, in first-seen order
fn column_union(rows: &[SparseRow]) -> Vec<String> {
    let mut columns = Vec::new();
    let mut seen = HashSet::new();

    for row in rows {
        for (name, _) in &row.cells {
            if seen.insert(name.clone()) {
                columns.push(name.clone());
            }
        }
    }

    columns
}

/// Write rows to a CSV file, header first, blank cells for missing columns
pub fn write_csv(path: &Path, rows: &[SparseRow]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, rows)
}

fn write_csv_to<W: Write>(out: W, rows: &[SparseRow]) -> Result<()> {
    let columns = column_union(rows);
    let mut writer = csv::Writer::from_writer(out);

    // Nothing fetched means no columns; an empty file beats a zero-field record
    if columns.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    writer.write_record(&columns)?;
    for row in rows {
        let record: Vec<&str> = columns
            .iter()
            .map(|column| row.get(column).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

/// CSV rows for the project listing: nested properties flatten to one
/// compact-JSON column
pub fn project_rows(projects: &[Project]) -> Result<Vec<SparseRow>> {
    projects
        .iter()
        .map(|project| {
            let mut row = SparseRow::new();
            row.push("id", &project.id);
            row.push("name", &project.name);
            row.push("type", &project.project_type);
            row.push("properties", serde_json::to_string(&project.properties)?);
            Ok(row)
        })
        .collect()
}

/// CSV rows for the project↔branch correlation: one `branchN` column per
/// branch, so the header width follows the widest project
pub fn project_branches_rows(records: &[ProjectBranches]) -> Vec<SparseRow> {
    records
        .iter()
        .map(|record| {
            let mut row = SparseRow::new();
            row.push("id", &record.id);
            row.push("name", &record.name);
            for (i, branch) in record.branches.iter().enumerate() {
                row.push(format!("branch{}", i + 1), branch);
            }
            row
        })
        .collect()
}

/// CSV rows for the user listing
pub fn user_rows(users: &[User]) -> Result<Vec<SparseRow>> {
    users
        .iter()
        .map(|user| {
            let mut row = SparseRow::new();
            row.push("id", &user.id);
            row.push("name", &user.name);
            row.push("email", &user.email);
            row.push("groups", serde_json::to_string(&user.groups)?);
            Ok(row)
        })
        .collect()
}

/// CSV rows for the details listing: one row per project, memberships as
/// compact JSON
pub fn details_rows(details: &[ProjectMembers]) -> Result<Vec<SparseRow>> {
    details
        .iter()
        .map(|detail| {
            let mut row = SparseRow::new();
            row.push("id", &detail.id);
            row.push("name", &detail.name);
            row.push("groups", serde_json::to_string(&detail.groups)?);
            row.push("individuals", serde_json::to_string(&detail.individuals)?);
            Ok(row)
        })
        .collect()
}

/// Long-format CSV rows for project membership: one row per project/member
/// pair. Projects without members still get a bare row so the file covers
/// the whole project list.
pub fn project_details_rows(details: &[ProjectMembers]) -> Vec<SparseRow> {
    let mut rows = Vec::new();

    for detail in details {
        let mut emitted = false;

        for group in &detail.groups {
            for member in &group.members {
                let mut row = SparseRow::new();
                row.push("id", &detail.id);
                row.push("name", &detail.name);
                row.push("kind", "group");
                row.push("groupId", &group.id);
                row.push("groupName", &group.name);
                row.push("memberName", &member.name);
                row.push("memberEmail", &member.email);
                rows.push(row);
                emitted = true;
            }
        }

        for member in &detail.individuals {
            let mut row = SparseRow::new();
            row.push("id", &detail.id);
            row.push("name", &detail.name);
            row.push("kind", "individual");
            row.push("memberName", &member.name);
            row.push("memberEmail", &member.email);
            rows.push(row);
            emitted = true;
        }

        if !emitted {
            let mut row = SparseRow::new();
            row.push("id", &detail.id);
            row.push("name", &detail.name);
            rows.push(row);
        }
    }

    rows
}
