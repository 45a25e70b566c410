use descarga_types::RunSummary;

pub fn calculate_run_summary(
    elapsed_seconds: f64,
    scanned_count: usize,
    inventory_size: usize,
    deltas: &[f64],
) -> RunSummary {
    RunSummary {
        elapsed_seconds,
        scanned_count,
        inventory_size,
        completion_ratio: completion_ratio(scanned_count, inventory_size),
        mean_delta_seconds: mean(deltas),
    }
}

/// `scanned / inventory`, guarded to 0.0 for an empty inventory.
pub fn completion_ratio(scanned_count: usize, inventory_size: usize) -> f64 {
    if inventory_size == 0 {
        return 0.0;
    }
    scanned_count as f64 / inventory_size as f64
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_deltas() {
        assert_eq!(mean(&[5.0, 4.0]), 4.5);
    }

    #[test]
    fn completion_guards_empty_inventory() {
        assert_eq!(completion_ratio(0, 0), 0.0);
        assert_eq!(completion_ratio(3, 0), 0.0);
    }

    #[test]
    fn completion_of_partial_run() {
        assert_eq!(completion_ratio(1, 2), 0.5);
    }

    #[test]
    fn summary_composes_guards() {
        let summary = calculate_run_summary(9.0, 2, 2, &[5.0, 4.0]);
        assert_eq!(summary.completion_ratio, 1.0);
        assert_eq!(summary.mean_delta_seconds, 4.5);
    }
}
