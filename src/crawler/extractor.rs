//! Positional field extraction from company detail pages
//!
//! The detail pages carry their data in a fixed tabular layout, so cells are
//! located by structural position rather than by semantic label: the second
//! `<td>` of the 1st, 3rd, 6th and 9th table row in document order. Pages
//! from a different template (index pages, error pages) have none of those
//! cells and are classified as a format mismatch.
//!
//! Extraction is a pure transformation: same input, bit-identical output,
//! no side effects.

use crate::company::Company;
use crate::PageError;
use scraper::{ElementRef, Html, Selector};

/// 1-based table row positions of the four expected cells
const ROW_STOCK_NAME: usize = 1;
const ROW_COMPANY_NAME: usize = 3;
const ROW_MARKET_VALUE: usize = 6;
const ROW_OSCILLATION: usize = 9;

/// Locale thousands separator stripped from the market value cell
const THOUSANDS_SEPARATOR: char = '.';

/// Extracts a [`Company`] from a detail page body
///
/// # Failure conditions
///
/// * All four expected cells absent → [`PageError::FormatMismatch`]
/// * Market value cell absent or non-numeric after stripping thousands
///   separators → [`PageError::ValueParse`]
///
/// Partial absence of the non-critical cells (name, short code, oscillation)
/// is tolerated; those fields come back as empty strings.
pub fn extract(html: &str) -> Result<Company, PageError> {
    let document = Html::parse_document(html);

    let row_selector =
        Selector::parse("tr").map_err(|e| PageError::Load(format!("bad selector: {}", e)))?;
    let cell_selector =
        Selector::parse("td").map_err(|e| PageError::Load(format!("bad selector: {}", e)))?;

    let rows: Vec<ElementRef> = document.select(&row_selector).collect();

    let stock_name = cell_text(&rows, &cell_selector, ROW_STOCK_NAME);
    let company_name = cell_text(&rows, &cell_selector, ROW_COMPANY_NAME);
    let market_value = cell_text(&rows, &cell_selector, ROW_MARKET_VALUE);
    let oscillation = cell_text(&rows, &cell_selector, ROW_OSCILLATION);

    // A page where none of the expected cells exist belongs to a different
    // template entirely.
    if stock_name.is_none()
        && company_name.is_none()
        && market_value.is_none()
        && oscillation.is_none()
    {
        return Err(PageError::FormatMismatch);
    }

    let market_value = parse_market_value(&market_value.unwrap_or_default())?;

    Ok(Company {
        company_name: company_name.unwrap_or_default(),
        stock_name: stock_name.unwrap_or_default(),
        market_value,
        oscillation: oscillation.unwrap_or_default(),
    })
}

/// Returns the trimmed text of the second `<td>` of the given 1-based row,
/// or `None` if the row or cell does not exist
fn cell_text(rows: &[ElementRef], cell_selector: &Selector, row: usize) -> Option<String> {
    let row = rows.get(row - 1)?;
    let cell = row.select(cell_selector).nth(1)?;
    Some(cell.text().collect::<String>().trim().to_string())
}

/// Normalizes and parses the market value cell
///
/// Strips every thousands separator, then parses the remainder as a signed
/// 64-bit integer. `"1.234.567"` → `1234567`; anything else non-numeric is a
/// [`PageError::ValueParse`].
fn parse_market_value(raw: &str) -> Result<i64, PageError> {
    let normalized: String = raw
        .chars()
        .filter(|c| *c != THOUSANDS_SEPARATOR)
        .collect();

    normalized
        .parse::<i64>()
        .map_err(|_| PageError::ValueParse(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a detail page whose rows 1/3/6/9 carry the given cell values
    fn detail_page(stock: &str, name: &str, value: &str, oscillation: &str) -> String {
        let mut rows = vec![String::new(); 9];
        rows[0] = format!("<tr><td>Papel</td><td>{}</td></tr>", stock);
        rows[1] = "<tr><td>Tipo</td><td>ON</td></tr>".to_string();
        rows[2] = format!("<tr><td>Empresa</td><td>{}</td></tr>", name);
        rows[3] = "<tr><td>Setor</td><td>Energia</td></tr>".to_string();
        rows[4] = "<tr><td>Subsetor</td><td>Eletrica</td></tr>".to_string();
        rows[5] = format!("<tr><td>Valor de mercado</td><td>{}</td></tr>", value);
        rows[6] = "<tr><td>Cotacao</td><td>12,34</td></tr>".to_string();
        rows[7] = "<tr><td>Min 52 sem</td><td>10,00</td></tr>".to_string();
        rows[8] = format!("<tr><td>Oscilacao</td><td>{}</td></tr>", oscillation);

        format!(
            "<html><body><table>{}</table></body></html>",
            rows.join("\n")
        )
    }

    #[test]
    fn test_extract_full_page() {
        let html = detail_page("ACME3", "Acme SA", "1.234.567", "-1,24%");
        let company = extract(&html).unwrap();

        assert_eq!(company.stock_name, "ACME3");
        assert_eq!(company.company_name, "Acme SA");
        assert_eq!(company.market_value, 1234567);
        assert_eq!(company.oscillation, "-1,24%");
    }

    #[test]
    fn test_thousands_separator_normalization() {
        let html = detail_page("ACME3", "Acme SA", "1.234.567", "0%");
        assert_eq!(extract(&html).unwrap().market_value, 1234567);

        let html = detail_page("ACME3", "Acme SA", "987", "0%");
        assert_eq!(extract(&html).unwrap().market_value, 987);
    }

    #[test]
    fn test_non_numeric_value_is_value_parse_error() {
        let html = detail_page("ACME3", "Acme SA", "12a34", "0%");
        assert_eq!(
            extract(&html).unwrap_err(),
            PageError::ValueParse("12a34".to_string())
        );
    }

    #[test]
    fn test_all_cells_missing_is_format_mismatch() {
        let html = "<html><body><p>No such company</p></body></html>";
        assert_eq!(extract(html).unwrap_err(), PageError::FormatMismatch);
    }

    #[test]
    fn test_empty_page_is_format_mismatch() {
        assert_eq!(extract("").unwrap_err(), PageError::FormatMismatch);
    }

    #[test]
    fn test_missing_oscillation_tolerated() {
        // Only 6 rows: oscillation row (9) is gone, value row (6) present
        let html = r#"<html><body><table>
            <tr><td>Papel</td><td>ACME3</td></tr>
            <tr><td>Tipo</td><td>ON</td></tr>
            <tr><td>Empresa</td><td>Acme SA</td></tr>
            <tr><td>Setor</td><td>Energia</td></tr>
            <tr><td>Subsetor</td><td>Eletrica</td></tr>
            <tr><td>Valor de mercado</td><td>5.000</td></tr>
        </table></body></html>"#;

        let company = extract(html).unwrap();
        assert_eq!(company.market_value, 5000);
        assert_eq!(company.oscillation, "");
    }

    #[test]
    fn test_missing_value_cell_is_value_parse_error() {
        // Rows exist but row 6 has a single cell, so the value cell is absent
        let html = r#"<html><body><table>
            <tr><td>Papel</td><td>ACME3</td></tr>
            <tr><td></td><td></td></tr>
            <tr><td>Empresa</td><td>Acme SA</td></tr>
            <tr><td></td><td></td></tr>
            <tr><td></td><td></td></tr>
            <tr><td>Valor de mercado</td></tr>
        </table></body></html>"#;

        assert!(matches!(
            extract(html).unwrap_err(),
            PageError::ValueParse(_)
        ));
    }

    #[test]
    fn test_negative_value_parses() {
        let html = detail_page("ACME3", "Acme SA", "-42", "0%");
        assert_eq!(extract(&html).unwrap().market_value, -42);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = detail_page("ACME3", "Acme SA", "1.234.567", "-1,24%");
        let first = extract(&html).unwrap();
        let second = extract(&html).unwrap();
        assert_eq!(first, second);
    }
}
