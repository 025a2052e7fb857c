//! Spreadsheet artifact renderer
//!
//! Renders extracted rows into an xlsx workbook with a bold header row and
//! locale-aware numeric formatting.

use crate::adapters::traits::ArtifactRenderer;
use crate::config::schema::{NumberLocale, ReportFormatConfig};
use crate::domain::errors::HeraldError;
use crate::domain::result::Result;
use crate::domain::row::{CellValue, ReportRow};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Xlsx renderer with configurable numeric formatting
pub struct XlsxRenderer {
    locale: NumberLocale,
    decimals: u32,
}

impl XlsxRenderer {
    /// Create a renderer from the report format configuration
    pub fn new(format: &ReportFormatConfig) -> Self {
        Self {
            locale: format.locale,
            decimals: format.decimals,
        }
    }

    /// Spreadsheet number format string for the configured locale
    ///
    /// European style groups with dots and separates decimals with a comma
    /// (`#.##0,00`); anglo style is the inverse (`#,##0.00`).
    pub fn number_format_string(&self) -> String {
        let decimals = self.decimals as usize;
        match self.locale {
            NumberLocale::European => {
                if decimals == 0 {
                    "#.##0".to_string()
                } else {
                    format!("#.##0,{}", "0".repeat(decimals))
                }
            }
            NumberLocale::Anglo => {
                if decimals == 0 {
                    "#,##0".to_string()
                } else {
                    format!("#,##0.{}", "0".repeat(decimals))
                }
            }
        }
    }
}

impl Default for XlsxRenderer {
    fn default() -> Self {
        Self::new(&ReportFormatConfig::default())
    }
}

impl ArtifactRenderer for XlsxRenderer {
    fn render(
        &self,
        rows: &[ReportRow],
        headers: Option<&[String]>,
        destination: &Path,
        sheet_name: Option<&str>,
    ) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    HeraldError::Render(format!(
                        "Failed to create output directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        if let Some(name) = sheet_name {
            worksheet
                .set_name(name)
                .map_err(|e| HeraldError::Render(format!("Invalid sheet name '{name}': {e}")))?;
        }

        let header_format = Format::new().set_bold();
        let number_format = Format::new().set_num_format(self.number_format_string());

        let mut row_index: u32 = 0;

        if let Some(headers) = headers {
            for (col, header) in headers.iter().enumerate() {
                worksheet
                    .write_string_with_format(0, col as u16, header, &header_format)
                    .map_err(|e| HeraldError::Render(e.to_string()))?;
            }
            row_index = 1;
        }

        for row in rows {
            for (col, cell) in row.cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    CellValue::Text(text) => worksheet
                        .write_string(row_index, col, text)
                        .map(|_| ())
                        .map_err(|e| HeraldError::Render(e.to_string()))?,
                    CellValue::Integer(value) => worksheet
                        .write_number(row_index, col, *value as f64)
                        .map(|_| ())
                        .map_err(|e| HeraldError::Render(e.to_string()))?,
                    CellValue::Number(value) => worksheet
                        .write_number_with_format(row_index, col, *value, &number_format)
                        .map(|_| ())
                        .map_err(|e| HeraldError::Render(e.to_string()))?,
                    CellValue::Date(date) => worksheet
                        .write_string(row_index, col, date.format("%Y-%m-%d").to_string())
                        .map(|_| ())
                        .map_err(|e| HeraldError::Render(e.to_string()))?,
                    CellValue::Null => {}
                }
            }
            row_index += 1;
        }

        worksheet.autofit();

        workbook.save(destination).map_err(|e| {
            HeraldError::Render(format!(
                "Failed to write artifact {}: {e}",
                destination.display()
            ))
        })?;

        tracing::debug!(
            destination = %destination.display(),
            rows = rows.len(),
            "Artifact rendered"
        );
        Ok(())
    }
}
