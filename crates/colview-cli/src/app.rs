//! Record formatting for the `colview` binary.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use colview::{ColumnId, ColumnSource, Columns, LayoutConfig, LineBuffer};

/// Column content for one input record.
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Splits `line` on `delimiter`.
    pub fn split(line: &'a str, delimiter: char) -> Self {
        Record {
            fields: line.split(delimiter).collect(),
        }
    }
}

/// Serves record fields by index; missing fields render empty.
struct Fields;

impl<'a> ColumnSource<Record<'a>> for Fields {
    fn column_text(&mut self, id: ColumnId, record: &Record<'a>, max_bytes: usize) -> Vec<u8> {
        let field = record.fields.get(id).copied().unwrap_or_default();
        let end = floor_char_boundary(field, max_bytes);
        field[..end].as_bytes().to_vec()
    }
}

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Maps a layout column name to a field index.
///
/// Names are 1-based field numbers, or header names when a header is given.
pub fn field_index(name: &str, header: Option<&[String]>) -> Option<ColumnId> {
    if let Ok(n) = name.parse::<usize>() {
        return n.checked_sub(1);
    }
    header?.iter().position(|h| h == name)
}

/// Formats every record read from `input` into `output`.
pub struct Formatter {
    layout: LayoutConfig,
    width: usize,
    delimiter: char,
    header: bool,
}

impl Formatter {
    pub fn new(layout: LayoutConfig, width: usize, delimiter: char, header: bool) -> Self {
        Formatter {
            layout,
            width,
            delimiter,
            header,
        }
    }

    fn build(&self, header: Option<&[String]>) -> anyhow::Result<Columns> {
        if self.layout.columns.is_empty() {
            bail!("layout has no columns");
        }
        self.layout
            .build(|name| field_index(name, header))
            .context("building column layout")
    }

    /// Renders one record as a line with trailing blanks removed.
    pub fn format(&self, columns: &Columns, line: &str) -> String {
        let record = Record::split(line, self.delimiter);
        let mut buffer = LineBuffer::new(self.width);
        columns.format_line(&record, self.width, &mut Fields, &mut buffer);
        buffer.trimmed()
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> anyhow::Result<usize> {
        let mut lines = input.lines();
        let mut header_names: Option<Vec<String>> = None;

        if self.header {
            if let Some(first) = lines.next() {
                let first = first.context("reading header")?;
                header_names = Some(first.split(self.delimiter).map(str::to_string).collect());
            }
        }

        let columns = self.build(header_names.as_deref())?;
        tracing::debug!(width = self.width, columns = columns.len(), "formatting records");

        let mut count = 0;
        for line in lines {
            let line = line.context("reading input")?;
            writeln!(output, "{}", self.format(&columns, &line))?;
            count += 1;
        }
        output.flush()?;
        Ok(count)
    }
}
