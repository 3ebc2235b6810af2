//! Tabular and JSON export of a [DashboardView].

use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::ops::Index;
use std::path::Path;

use ordinalizer::Ordinal;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};
use thiserror::Error;

use crate::dashboard::DashboardView;
use crate::period::LabelledRow;

/// Columns of the match table, with their human-readable headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Display)]
pub enum Column {
    Date,
    Opponent,
    Venue,
    #[strum(serialize = "Goals For")]
    GoalsFor,
    #[strum(serialize = "Goals Against")]
    GoalsAgainst,
    Result,
    Period,
}

/// One line of the match table, holding a value per [Column] in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    items: Vec<String>,
}
impl Record {
    pub fn header() -> Self {
        Self {
            items: Column::iter().map(|column| column.to_string()).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&LabelledRow> for Record {
    fn from(labelled: &LabelledRow) -> Self {
        let row = &labelled.row;
        let items = Column::iter()
            .map(|column| match column {
                Column::Date => row.date.format("%Y-%m-%d").to_string(),
                Column::Opponent => row.opponent.clone(),
                Column::Venue => row.venue.to_string(),
                Column::GoalsFor => row.goals_for.to_string(),
                Column::GoalsAgainst => row.goals_against.to_string(),
                Column::Result => row.outcome().to_string(),
                Column::Period => labelled.period.to_string(),
            })
            .collect();
        Self { items }
    }
}

impl Index<Column> for Record {
    type Output = str;

    fn index(&self, column: Column) -> &Self::Output {
        &self.items[column.ordinal()]
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the view's match table as CSV: a header row of column headings, then one record per
/// match.
pub fn write_csv(view: &DashboardView, writer: impl Write) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(Record::header().iter())?;
    for labelled in &view.matches {
        csv.write_record(Record::from(labelled).iter())?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_csv_file(view: &DashboardView, path: impl AsRef<Path>) -> Result<(), ExportError> {
    write_csv(view, create(path.as_ref())?)
}

pub fn write_json(view: &DashboardView, writer: impl Write) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, view)?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
