//! A minimal bordered table for the scan report.
//!
//! Cells may carry ANSI color codes; widths are measured with
//! [`console::measure_text_width`] so styling never skews alignment.

use colored::*;
use console::measure_text_width;

use blemap_common::error::ReportError;

#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
}

struct Column {
    header: String,
    align: Align,
}

pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn column(&mut self, header: &str, align: Align) {
        self.columns.push(Column {
            header: header.to_string(),
            align,
        });
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Renders the full box. A row whose cell count does not match the
    /// column set is rejected instead of printing a skewed table.
    pub fn render(&self) -> Result<String, ReportError> {
        for row in &self.rows {
            if row.len() != self.columns.len() {
                return Err(ReportError::MalformedRow {
                    expected: self.columns.len(),
                    found: row.len(),
                });
            }
        }

        let widths = self.measure();
        let total: usize = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len() + 1;

        let mut out = String::new();

        let title_pad = total.saturating_sub(measure_text_width(&self.title)) / 2;
        out.push_str(&" ".repeat(title_pad));
        out.push_str(&self.title);
        out.push('\n');

        out.push_str(&rule(&widths, "╭", "┬", "╮"));
        out.push('\n');

        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header.bold().to_string())
            .collect();
        out.push_str(&self.format_line(&headers, &widths));
        out.push('\n');

        out.push_str(&rule(&widths, "├", "┼", "┤"));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.format_line(row, &widths));
            out.push('\n');
        }

        out.push_str(&rule(&widths, "╰", "┴", "╯"));

        Ok(out)
    }

    fn measure(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| measure_text_width(&row[i]))
                    .chain(std::iter::once(measure_text_width(&column.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn format_line(&self, cells: &[String], widths: &[usize]) -> String {
        let edge = "│".bright_black().to_string();
        let body: Vec<String> = cells
            .iter()
            .zip(self.columns.iter().zip(widths))
            .map(|(cell, (column, width))| format!(" {} ", pad(cell, *width, column.align)))
            .collect();
        format!("{edge}{}{edge}", body.join(&edge))
    }
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let mut line = String::from(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push_str(right);
    line.bright_black().to_string()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let gap = width.saturating_sub(measure_text_width(cell));
    match align {
        Align::Left => format!("{cell}{}", " ".repeat(gap)),
        Align::Center => {
            let left = gap / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        colored::control::set_override(false);
        let mut table = Table::new("Sample");
        table.column("Signal", Align::Center);
        table.column("Name", Align::Left);
        table
    }

    #[test]
    fn render_rejects_malformed_rows() {
        let mut table = sample();
        table.row(vec!["-55 dBm".to_string()]);

        let err = table.render().unwrap_err();
        assert_eq!(
            err,
            ReportError::MalformedRow {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn render_produces_an_even_box() {
        let mut table = sample();
        table.row(vec!["-55 dBm".to_string(), "Phone".to_string()]);
        table.row(vec!["-90 dBm".to_string(), "Unknown".to_string()]);

        let rendered = table.render().unwrap();
        let lines: Vec<&str> = rendered.lines().skip(1).collect();

        assert!(lines.first().unwrap().starts_with('╭'));
        assert!(lines.last().unwrap().starts_with('╰'));

        let box_width = measure_text_width(lines[0]);
        for line in &lines {
            assert_eq!(
                measure_text_width(line),
                box_width,
                "ragged line in rendered table:\n{rendered}"
            );
        }
    }

    #[test]
    fn render_contains_headers_and_cells() {
        let mut table = sample();
        table.row(vec!["-55 dBm".to_string(), "Phone".to_string()]);

        let rendered = table.render().unwrap();
        assert!(rendered.contains("Signal"));
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("-55 dBm"));
        assert!(rendered.contains("Phone"));
    }
}
