use anyhow::{Context, Result};
use chrono::Utc;
use disaster_core::{Catalog, Cell};
use std::fs;
use std::path::Path;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse comma-separated numeric seeds.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed `{token}`"))
        })
        .collect()
}

/// Unique team name for a backend run, so repeated runs never collide.
pub fn run_team_name(seed: u64) -> String {
    let ts = Utc::now().format("%H%M%S");
    format!("tester-{seed}-{ts}")
}

/// Load an `Items.xlsx` workbook from disk.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Catalog::from_xlsx_bytes(&bytes)
        .with_context(|| format!("failed to parse catalog {}", path.display()))
}

/// Small built-in catalog used when no workbook is given.
pub fn sample_catalog() -> Catalog {
    let headers: Vec<String> = ["korName", "name", "weight", "volume", "description"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let rows = [
        ("물", "water", 2.0, 2.0, "생수 2L"),
        ("라디오", "radio", 0.5, 0.4, "휴대용 라디오"),
        ("손전등", "flashlight", 0.3, 0.2, "건전지 포함"),
        ("통조림", "canned_food", 1.0, 0.6, "3일치 식량"),
        ("구급상자", "first_aid", 1.2, 1.5, "기본 응급 처치 용품"),
        ("담요", "blanket", 1.5, 3.0, "보온용 담요"),
        ("호루라기", "whistle", 0.05, 0.05, "구조 요청용"),
    ]
    .into_iter()
    .map(|(kor, name, weight, volume, description)| {
        vec![
            Cell::Text(kor.to_string()),
            Cell::Text(name.to_string()),
            Cell::Number(weight),
            Cell::Number(volume),
            Cell::Text(description.to_string()),
        ]
    });
    Catalog::from_rows(&headers, rows).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn seeds_parse_or_report_the_bad_token() {
        assert_eq!(parse_seeds("1, 2,3").expect("seeds"), vec![1, 2, 3]);
        let err = parse_seeds("1,abc").expect_err("bad seed");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn sample_catalog_is_searchable() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.search("라디오").len(), 1);
        assert_eq!(catalog.find(1).map(|item| item.name.as_str()), Some("water"));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let err = read_catalog(Path::new("/nonexistent/Items.xlsx")).expect_err("missing");
        assert!(err.to_string().contains("Items.xlsx"));
    }

    #[test]
    fn team_names_carry_the_seed() {
        assert!(run_team_name(42).starts_with("tester-42-"));
    }
}
