//! `Items.xlsx` reader.
use super::{Catalog, CatalogError, Cell};
use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
use std::io::Cursor;

impl From<&Data> for Cell {
    #[allow(clippy::cast_precision_loss)]
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Empty,
            Data::Int(i) => Self::Number(*i as f64),
            Data::Float(f) => Self::Number(*f),
            Data::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

impl Catalog {
    /// Parse the first sheet of an xlsx workbook.
    ///
    /// The first row is the header; an empty sheet yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Workbook`] when the bytes are not a readable
    /// workbook, [`CatalogError::NoSheet`] when it has no sheets, or
    /// [`CatalogError::MissingColumn`] from [`Catalog::from_rows`].
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|err: calamine::XlsxError| CatalogError::Workbook(err.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(CatalogError::NoSheet)?
            .map_err(|err| CatalogError::Workbook(err.to_string()))?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            log::warn!("Catalog sheet is empty");
            return Ok(Self::default());
        };
        let headers: Vec<String> = header_row
            .iter()
            .map(|data| Cell::from(data).text())
            .collect();
        let catalog = Self::from_rows(
            &headers,
            rows.map(|row| row.iter().map(Cell::from).collect::<Vec<_>>()),
        )?;
        log::info!("Loaded {} catalog items", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreadsheet_values_map_to_cells() {
        assert_eq!(Cell::from(&Data::Int(3)), Cell::Number(3.0));
        assert_eq!(Cell::from(&Data::Float(0.5)), Cell::Number(0.5));
        assert_eq!(
            Cell::from(&Data::String("물".into())),
            Cell::Text("물".into())
        );
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Text("true".into()));
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
    }

    #[test]
    fn garbage_bytes_are_a_workbook_error() {
        let err = Catalog::from_xlsx_bytes(b"not a zip archive").unwrap_err();
        assert!(matches!(err, CatalogError::Workbook(_)));
    }
}
