use std::fs::File;
use std::io::Read;
use std::path::Path;

use descarga_types::{BARCODE_COLUMN, DESCRIPTION_COLUMN, InventoryRecord, InventorySet};

use crate::error::{Error, Result};

/// Read and validate an inventory CSV file.
pub fn read_inventory(path: &Path) -> Result<InventorySet> {
    let file = File::open(path)?;
    parse_inventory(file)
}

/// Parse an inventory table from any reader.
///
/// Requires a `codigo_barras` column. A missing `descricao` column is
/// filled per row with `Produto <barcode>`; every other column passes
/// through unchanged, in file order. Duplicate barcodes are accepted
/// (lookup later resolves them first-match).
pub fn parse_inventory<R: Read>(reader: R) -> Result<InventorySet> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let barcode_idx = headers
        .iter()
        .position(|h| h == BARCODE_COLUMN)
        .ok_or_else(|| {
            Error::Validation(format!("required column '{}' not found", BARCODE_COLUMN))
        })?;
    let description_idx = headers.iter().position(|h| h == DESCRIPTION_COLUMN);

    let mut columns = headers.clone();
    if description_idx.is_none() {
        columns.push(DESCRIPTION_COLUMN.to_string());
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let barcode = row.get(barcode_idx).unwrap_or_default().trim();
        if barcode.is_empty() {
            return Err(Error::Validation(format!(
                "empty '{}' value at line {}",
                BARCODE_COLUMN, line
            )));
        }

        let description = description_idx
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| InventoryRecord::default_description(barcode));

        let mut record = InventoryRecord::new(barcode, description);
        for (idx, header) in headers.iter().enumerate() {
            if idx == barcode_idx || Some(idx) == description_idx {
                continue;
            }
            record
                .extra
                .push((header.clone(), row.get(idx).unwrap_or_default().to_string()));
        }
        records.push(record);
    }

    Ok(InventorySet::new(columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_barcode_column_is_rejected() {
        let err = parse_inventory("descricao\nWidget\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("codigo_barras"));
    }

    #[test]
    fn description_defaults_per_row() {
        let set = parse_inventory("codigo_barras\nA1\nB2\n".as_bytes()).unwrap();
        assert_eq!(set.records()[0].description, "Produto A1");
        assert_eq!(set.records()[1].description, "Produto B2");
        assert_eq!(set.columns(), &["codigo_barras", "descricao"]);
    }

    #[test]
    fn blank_description_cell_is_defaulted() {
        let set = parse_inventory("codigo_barras,descricao\nA1,\n".as_bytes()).unwrap();
        assert_eq!(set.records()[0].description, "Produto A1");
    }

    #[test]
    fn extra_columns_pass_through_in_order() {
        let set = parse_inventory(
            "categoria,codigo_barras,descricao,peso\nferramentas,A1,Widget,2kg\n".as_bytes(),
        )
        .unwrap();

        assert_eq!(
            set.columns(),
            &["categoria", "codigo_barras", "descricao", "peso"]
        );
        let record = &set.records()[0];
        assert_eq!(
            record.extra,
            vec![
                ("categoria".to_string(), "ferramentas".to_string()),
                ("peso".to_string(), "2kg".to_string()),
            ]
        );
    }

    #[test]
    fn empty_barcode_cell_is_rejected_with_line() {
        let err = parse_inventory("codigo_barras,descricao\nA1,Widget\n,Gadget\n".as_bytes())
            .unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn duplicate_barcodes_are_accepted() {
        let set = parse_inventory("codigo_barras\nA1\nA1\n".as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn utf8_bom_on_header_is_stripped() {
        let set = parse_inventory("\u{feff}codigo_barras,descricao\nA1,Widget\n".as_bytes())
            .unwrap();
        assert_eq!(set.records()[0].barcode, "A1");
        assert_eq!(set.columns()[0], "codigo_barras");
    }

    #[test]
    fn read_inventory_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "codigo_barras,descricao\nA1,Widget\n").unwrap();

        let set = read_inventory(file.path()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = read_inventory(Path::new("/nonexistent/inventario.csv")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
