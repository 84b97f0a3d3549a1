//! The grid surface the maps populate and color, plus its in-memory implementation.

use crate::interp::Rgb;
use std::fmt;

/// Contents of one grid cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    /// Whatever the user typed that is not a number. Kept verbatim, never colored.
    Text(String),
}

impl CellValue {
    /// Interprets user input: blank is empty, finite `f64` is a number.
    /// `NaN` and infinities stay text so they are never colored or compared as numbers.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if t.is_empty() {
            return CellValue::Empty;
        }
        match t.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Text(t.to_string()),
        }
    }

    /// Replaces a non-finite number with its text form.
    pub fn normalized(self) -> Self {
        match self {
            CellValue::Number(v) if !v.is_finite() => CellValue::Text(v.to_string()),
            other => other,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// What the map formulas need from a spreadsheet-like widget.
///
/// Coordinates are `(column, row)`; out-of-range access is ignored by setters
/// and yields `None` from getters.
pub trait GridSurface {
    fn column_count(&self) -> usize;
    fn row_count(&self) -> usize;
    fn set_column_count(&mut self, count: usize);
    fn set_row_count(&mut self, count: usize);
    fn set_column_header(&mut self, x: usize, text: String);
    fn set_row_header(&mut self, y: usize, text: String);
    fn cell(&self, x: usize, y: usize) -> Option<&CellValue>;
    fn set_cell(&mut self, x: usize, y: usize, value: CellValue);
    fn set_back_color(&mut self, x: usize, y: usize, color: Option<Rgb>);
}

/// Row-major grid with per-cell background color and header labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub title: String,
    columns: usize,
    rows: usize,
    column_headers: Vec<String>,
    row_headers: Vec<String>,
    cells: Vec<CellValue>,
    back_colors: Vec<Option<Rgb>>,
}

impl Sheet {
    /// A 1x1 empty sheet; populating resizes it.
    pub fn new(title: impl Into<String>) -> Self {
        let mut sheet = Self {
            title: title.into(),
            columns: 0,
            rows: 0,
            column_headers: Vec::new(),
            row_headers: Vec::new(),
            cells: Vec::new(),
            back_colors: Vec::new(),
        };
        sheet.resize(1, 1);
        sheet
    }

    pub fn column_headers(&self) -> &[String] {
        &self.column_headers
    }

    pub fn row_headers(&self) -> &[String] {
        &self.row_headers
    }

    pub fn back_color(&self, x: usize, y: usize) -> Option<Rgb> {
        self.index(x, y).and_then(|i| self.back_colors[i])
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.columns && y < self.rows).then_some(y * self.columns + x)
    }

    /// Resizes while keeping existing cells at their coordinates.
    fn resize(&mut self, columns: usize, rows: usize) {
        let mut cells = vec![CellValue::Empty; columns * rows];
        let mut colors = vec![None; columns * rows];
        for y in 0..rows.min(self.rows) {
            for x in 0..columns.min(self.columns) {
                let old = y * self.columns + x;
                cells[y * columns + x] = std::mem::take(&mut self.cells[old]);
                colors[y * columns + x] = self.back_colors[old];
            }
        }

        self.cells = cells;
        self.back_colors = colors;
        self.columns = columns;
        self.rows = rows;
        self.column_headers.resize_with(columns, String::new);
        self.row_headers.resize_with(rows, String::new);
        for (i, h) in self.column_headers.iter_mut().enumerate() {
            if h.is_empty() {
                *h = default_column_header(i);
            }
        }
        for (i, h) in self.row_headers.iter_mut().enumerate() {
            if h.is_empty() {
                *h = (i + 1).to_string();
            }
        }
    }
}

/// Spreadsheet-style column names: A..Z, AA..
fn default_column_header(mut i: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

impl GridSurface for Sheet {
    fn column_count(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn set_column_count(&mut self, count: usize) {
        self.resize(count, self.rows);
    }

    fn set_row_count(&mut self, count: usize) {
        self.resize(self.columns, count);
    }

    fn set_column_header(&mut self, x: usize, text: String) {
        if let Some(h) = self.column_headers.get_mut(x) {
            *h = text;
        }
    }

    fn set_row_header(&mut self, y: usize, text: String) {
        if let Some(h) = self.row_headers.get_mut(y) {
            *h = text;
        }
    }

    fn cell(&self, x: usize, y: usize) -> Option<&CellValue> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    fn set_cell(&mut self, x: usize, y: usize, value: CellValue) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    fn set_back_color(&mut self, x: usize, y: usize, color: Option<Rgb>) {
        if let Some(i) = self.index(x, y) {
            self.back_colors[i] = color;
        }
    }
}
