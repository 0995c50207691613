//! Plain-text table rendering for roster listings.
//!
//! Bordered, left-aligned columns sized to their widest cell:
//!
//! ```text
//! +------------+-----------+
//! | First Name | Last Name |
//! +------------+-----------+
//! | Alice      | Smith     |
//! +------------+-----------+
//! ```

use std::fmt;

/// A bordered text table with a heading row.
#[derive(Debug, Clone)]
pub struct TextTable {
    headings: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Creates a table with the given column headings.
    #[must_use]
    pub fn new(headings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            headings: headings.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends one row. Short rows render with trailing blank cells.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headings.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i >= widths.len() {
                    break;
                }
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
        for width in widths {
            write!(f, "+{}", "-".repeat(width + 2))?;
        }
        write!(f, "+")
    }

    fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map_or("", String::as_str);
            let pad = width - cell.chars().count().min(*width);
            write!(f, "| {cell}{} ", " ".repeat(pad))?;
        }
        write!(f, "|")
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        Self::write_border(f, &widths)?;
        writeln!(f)?;
        Self::write_row(f, &self.headings, &widths)?;
        writeln!(f)?;
        Self::write_border(f, &widths)?;
        writeln!(f)?;
        for row in &self.rows {
            Self::write_row(f, row, &widths)?;
            writeln!(f)?;
        }
        Self::write_border(f, &widths)
    }
}
