use serde::{Deserialize, Serialize};

/// Required barcode column name in uploaded inventory files.
pub const BARCODE_COLUMN: &str = "codigo_barras";

/// Optional description column name; defaulted when absent.
pub const DESCRIPTION_COLUMN: &str = "descricao";

/// Normalize a scanned or stored barcode for comparison.
///
/// Lookup uses exact equality after trimming surrounding whitespace;
/// scanners frequently append a trailing newline or tab.
pub fn normalize_barcode(code: &str) -> &str {
    code.trim()
}

/// One row of the uploaded inventory table.
///
/// `extra` carries every column beyond barcode/description, in file order,
/// so the final report can reproduce the upload's layout unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub barcode: String,
    pub description: String,
    #[serde(default)]
    pub extra: Vec<(String, String)>,
}

impl InventoryRecord {
    pub fn new(barcode: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            description: description.into(),
            extra: Vec::new(),
        }
    }

    /// Default description applied when the upload has no `descricao` column.
    pub fn default_description(barcode: &str) -> String {
        format!("Produto {}", barcode)
    }

    /// Resolve a column name to this record's value.
    pub fn field(&self, column: &str) -> Option<&str> {
        if column == BARCODE_COLUMN {
            return Some(&self.barcode);
        }
        if column == DESCRIPTION_COLUMN {
            return Some(&self.description);
        }
        self.extra
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// Ordered inventory loaded once per session; immutable until replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySet {
    columns: Vec<String>,
    records: Vec<InventoryRecord>,
}

impl InventorySet {
    pub fn new(columns: Vec<String>, records: Vec<InventoryRecord>) -> Self {
        Self { columns, records }
    }

    /// Column names in upload order (barcode/description included).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose barcode matches `code` after normalization.
    ///
    /// Duplicate barcodes are accepted at ingestion; first match in load
    /// order wins, matching the original upload-tool behavior.
    pub fn find(&self, code: &str) -> Option<&InventoryRecord> {
        let code = normalize_barcode(code);
        self.records
            .iter()
            .find(|record| normalize_barcode(&record.barcode) == code)
    }
}
