//! Item catalog used by the bag-packing screen.
//!
//! The catalog ships as a spreadsheet whose first row names the columns
//! (`korName`, `name`, `weight`, `volume`, `description`). Rows are loaded
//! once per screen mount and never change afterwards.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[cfg(feature = "xlsx")]
pub mod xlsx;

pub const COL_KOR_NAME: &str = "korName";
pub const COL_NAME: &str = "name";
pub const COL_WEIGHT: &str = "weight";
pub const COL_VOLUME: &str = "volume";
pub const COL_DESCRIPTION: &str = "description";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("could not read workbook: {0}")]
    Workbook(String),
    #[error("workbook has no sheets")]
    NoSheet,
    #[error("catalog is missing the `{0}` column")]
    MissingColumn(&'static str),
}

/// A packable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// 1-based position in the catalog.
    pub id: u32,
    pub kor_name: String,
    /// Internal name; keys submissions and names the image asset.
    pub name: String,
    pub weight: f64,
    pub volume: f64,
    pub description: String,
    pub image_path: String,
}

impl Item {
    #[must_use]
    pub fn image_path_for(name: &str) -> String {
        format!("resource/{name}.png")
    }
}

/// A raw spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Cell rendered as text; numbers print without a trailing `.0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => n.to_string(),
        }
    }

    /// Numeric value, defaulting to `0` when the cell holds no number.
    #[must_use]
    pub fn number_or_zero(&self) -> f64 {
        let value = match self {
            Self::Empty => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_leading_float(s),
        };
        value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// Parse the longest numeric prefix of `text`, the way spreadsheet exports
/// like `"2.5kg"` are expected to coerce.
#[must_use]
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - end - 1;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from a header row and data rows.
    ///
    /// Blank rows are skipped; missing cells default to empty text or `0`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingColumn`] when the header has no `name`
    /// column, since items could not be submitted or pictured without it.
    pub fn from_rows<I>(headers: &[String], rows: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let columns: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.trim(), idx))
            .collect();
        if !columns.contains_key(COL_NAME) {
            return Err(CatalogError::MissingColumn(COL_NAME));
        }
        for optional in [COL_KOR_NAME, COL_WEIGHT, COL_VOLUME, COL_DESCRIPTION] {
            if !columns.contains_key(optional) {
                log::warn!("Catalog has no `{optional}` column; using defaults");
            }
        }

        let empty = Cell::Empty;
        let mut items = Vec::new();
        for row in rows {
            if row.iter().all(Cell::is_empty) {
                continue;
            }
            let cell = |column: &str| {
                columns
                    .get(column)
                    .and_then(|idx| row.get(*idx))
                    .unwrap_or(&empty)
            };
            let name = cell(COL_NAME).text();
            let id = u32::try_from(items.len() + 1).unwrap_or(u32::MAX);
            items.push(Item {
                id,
                kor_name: cell(COL_KOR_NAME).text(),
                image_path: Item::image_path_for(&name),
                name,
                weight: cell(COL_WEIGHT).number_or_zero(),
                volume: cell(COL_VOLUME).number_or_zero(),
                description: cell(COL_DESCRIPTION).text(),
            });
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose Korean name contains `term`, ignoring case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Item> {
        let needle = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.kor_name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        ["korName", "name", "weight", "volume", "description"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn leading_float_follows_prefix_rules() {
        assert_eq!(parse_leading_float("2.5"), Some(2.5));
        assert_eq!(parse_leading_float("  3kg"), Some(3.0));
        assert_eq!(parse_leading_float("-1.5e2x"), Some(-150.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("kg3"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn cells_coerce_to_numbers_with_zero_default() {
        assert!((Cell::Number(1.25).number_or_zero() - 1.25).abs() < f64::EPSILON);
        assert!((text("4 L").number_or_zero() - 4.0).abs() < f64::EPSILON);
        assert!(text("많이").number_or_zero().abs() < f64::EPSILON);
        assert!(Cell::Empty.number_or_zero().abs() < f64::EPSILON);
        assert!(Cell::Number(f64::NAN).number_or_zero().abs() < f64::EPSILON);
    }

    #[test]
    fn cell_text_prints_integers_plainly() {
        assert_eq!(Cell::Number(3.0).text(), "3");
        assert_eq!(Cell::Number(0.5).text(), "0.5");
        assert_eq!(Cell::Empty.text(), "");
    }

    #[test]
    fn rows_map_to_items_with_ids_and_images() {
        let rows = vec![
            vec![
                text("물"),
                text("water"),
                Cell::Number(1.0),
                Cell::Number(1.0),
                text("생수 1L"),
            ],
            vec![Cell::Empty, Cell::Empty, Cell::Empty],
            vec![text("라디오"), text("radio"), text("0.8"), text("?")],
        ];
        let catalog = Catalog::from_rows(&headers(), rows).expect("catalog");
        assert_eq!(catalog.len(), 2);

        let water = &catalog.items[0];
        assert_eq!(water.id, 1);
        assert_eq!(water.kor_name, "물");
        assert_eq!(water.image_path, "resource/water.png");
        assert_eq!(water.description, "생수 1L");

        let radio = catalog.find(2).expect("radio");
        assert!((radio.weight - 0.8).abs() < f64::EPSILON);
        assert!(radio.volume.abs() < f64::EPSILON);
        assert_eq!(radio.description, "");
    }

    #[test]
    fn name_column_is_required() {
        let headers = vec!["korName".to_string(), "weight".to_string()];
        let err = Catalog::from_rows(&headers, Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::MissingColumn("name"));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            vec![text("Flashlight 손전등"), text("flashlight")],
            vec![text("물"), text("water")],
        ];
        let headers = vec!["korName".to_string(), "name".to_string()];
        let catalog = Catalog::from_rows(&headers, rows).expect("catalog");
        assert_eq!(catalog.search("").len(), 2);
        assert_eq!(catalog.search("FLASH")[0].name, "flashlight");
        assert_eq!(catalog.search("물")[0].name, "water");
        assert!(catalog.search("radio").is_empty());
    }
}
