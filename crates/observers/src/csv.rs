//! Column-oriented CSV output.
//!
//! A [`CsvTable`] collects named columns of text cells and writes them as rows:
//! the first row holds the column names, and row `i` after it holds cell `i` of
//! every column. Columns shorter than the longest one are padded with empty
//! cells. Cells are joined with `,` and each row ends with `\n`; nothing is
//! quoted or escaped.
//!
//! [`CsvObserver`] fills a table from the samples of a free-body run, one row
//! per sample.

use std::{
    convert::Infallible,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tumble_core::Observer;
use tumble_solvers::transient::free_body::{Event, Sample};

/// Errors from writing a [`CsvTable`] to disk.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns the conventional results file name, `results-<unix seconds>.csv`.
#[must_use]
pub fn results_file_name(unix_seconds: i64) -> String {
    format!("results-{unix_seconds}.csv")
}

/// A named column of text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

/// A table built column by column and written row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    columns: Vec<Column>,
}

impl CsvTable {
    /// Creates an empty table with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with empty columns of the given names.
    #[must_use]
    pub fn with_columns<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let mut table = Self::new();
        for name in names {
            table.push_column(name);
        }
        table
    }

    /// Appends an empty column and returns its index.
    pub fn push_column(&mut self, name: impl Into<String>) -> usize {
        self.columns.push(Column {
            name: name.into(),
            cells: Vec::new(),
        });
        self.columns.len() - 1
    }

    /// Appends a cell to column `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not the index of an existing column.
    pub fn push(&mut self, column: usize, cell: impl ToString) {
        self.columns[column].cells.push(cell.to_string());
    }

    /// Appends one cell to each column in order, starting with the first.
    ///
    /// Extra cells beyond the number of columns are ignored; missing cells
    /// leave the remaining columns short.
    pub fn push_row<C: ToString>(&mut self, cells: impl IntoIterator<Item = C>) {
        for (column, cell) in self.columns.iter_mut().zip(cells) {
            column.cells.push(cell.to_string());
        }
    }

    /// The columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows: the length of the longest column.
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.cells.len())
            .max()
            .unwrap_or(0)
    }

    /// Writes the header row followed by every data row.
    ///
    /// # Errors
    ///
    /// Returns any error from `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let header = self.columns.iter().map(|column| column.name.as_str());
        write_row(&mut writer, header)?;

        for row in 0..self.height() {
            let cells = self
                .columns
                .iter()
                .map(|column| column.cells.get(row).map_or("", String::as_str));
            write_row(&mut writer, cells)?;
        }

        writer.flush()
    }

    /// Creates (or truncates) the file at `path` and writes the table to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be created or written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let to_error = |source| Error::Write {
            path: path.to_owned(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        self.write_to(BufWriter::new(file)).map_err(to_error)
    }
}

fn write_row<'a, W: Write>(writer: &mut W, cells: impl Iterator<Item = &'a str>) -> io::Result<()> {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(cell.as_bytes())?;
    }
    writer.write_all(b"\n")
}

/// Column names written by [`CsvObserver`].
///
/// Only the vertical components of the center-of-mass velocity and position
/// are recorded.
pub const SAMPLE_COLUMNS: [&str; 9] = [
    "t", "v z", "pos z", "omega x", "omega y", "omega z", "P x", "P y", "P z",
];

/// Records free-body samples into a [`CsvTable`], one row per sample.
///
/// Pass `&mut CsvObserver` to the driver so the table is still available once
/// the run completes.
///
/// # Example
///
/// ```ignore
/// let mut csv = CsvObserver::new();
/// free_body::solve(&config, &mut csv)?;
/// csv.table().write_to_file(results_file_name(now))?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvObserver {
    table: CsvTable,
}

impl CsvObserver {
    /// Creates an observer whose table has the [`SAMPLE_COLUMNS`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: CsvTable::with_columns(SAMPLE_COLUMNS),
        }
    }

    /// Appends one row for `sample`.
    pub fn record(&mut self, sample: &Sample) {
        self.table.push_row([
            sample.time,
            sample.velocity.z(),
            sample.position.z(),
            sample.angular_velocity.x(),
            sample.angular_velocity.y(),
            sample.angular_velocity.z(),
            sample.point.x(),
            sample.point.y(),
            sample.point.z(),
        ]);
    }

    /// The table recorded so far.
    #[must_use]
    pub fn table(&self) -> &CsvTable {
        &self.table
    }

    /// Consumes the observer, returning its table.
    #[must_use]
    pub fn into_table(self) -> CsvTable {
        self.table
    }
}

impl Default for CsvObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer<Event, Infallible> for CsvObserver {
    fn observe(&mut self, event: &Event) -> Option<Infallible> {
        self.record(&event.sample);
        None
    }
}

/// Allows `&mut CsvObserver` to be passed to the driver, which takes its
/// observer by value.
impl Observer<Event, Infallible> for &mut CsvObserver {
    fn observe(&mut self, event: &Event) -> Option<Infallible> {
        (*self).observe(event)
    }
}
