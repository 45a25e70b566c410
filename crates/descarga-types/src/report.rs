use serde::{Deserialize, Serialize};

/// Timestamp column appended to each report row.
pub const SCANNED_AT_COLUMN: &str = "hora_escaneamento";

/// Inter-scan delta column appended to each report row.
pub const DELTA_COLUMN: &str = "tempo_desde_ultimo";

/// Timestamp format used in report rows and metadata.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metadata record attached to an exported run report.
///
/// Field names on the wire keep the report format of the original
/// unloading tool, hence the Portuguese renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    #[serde(rename = "data_processamento")]
    pub processed_at: String,
    #[serde(rename = "tempo_total_segundos")]
    pub total_seconds: f64,
    #[serde(rename = "tempo_medio_entre_itens")]
    pub mean_seconds_between_items: f64,
    #[serde(rename = "total_itens_processados")]
    pub items_processed: usize,
    #[serde(rename = "total_itens_inventario")]
    pub items_in_inventory: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_serializes_with_wire_names() {
        let metadata = ReportMetadata {
            processed_at: "2026-08-29 10:00:00".to_string(),
            total_seconds: 9.0,
            mean_seconds_between_items: 4.5,
            items_processed: 2,
            items_in_inventory: 2,
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["data_processamento"], "2026-08-29 10:00:00");
        assert_eq!(json["tempo_total_segundos"], 9.0);
        assert_eq!(json["tempo_medio_entre_itens"], 4.5);
        assert_eq!(json["total_itens_processados"], 2);
        assert_eq!(json["total_itens_inventario"], 2);
    }
}
