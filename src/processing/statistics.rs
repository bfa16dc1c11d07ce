/// Summary of the edit state of a session: how far the working series has
/// drifted from the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct EditStats {
    pub total: usize,
    pub modified: usize,
    pub max_abs_delta: f64,
    pub mean_abs_delta: f64,
}

impl EditStats {
    /// Compute edit statistics over index-aligned baseline/working series.
    /// Returns None for empty input.
    pub fn compute(baseline: &[f64], working: &[f64]) -> Option<Self> {
        let total = baseline.len().min(working.len());
        if total == 0 {
            return None;
        }

        let deltas: Vec<f64> = (0..total)
            .filter(|&i| working[i] != baseline[i])
            .map(|i| (working[i] - baseline[i]).abs())
            .collect();

        let modified = deltas.len();
        let max_abs_delta = deltas.iter().copied().fold(0.0, f64::max);
        let mean_abs_delta = if modified == 0 {
            0.0
        } else {
            deltas.iter().sum::<f64>() / modified as f64
        };

        Some(EditStats {
            total,
            modified,
            max_abs_delta,
            mean_abs_delta,
        })
    }

    /// One-line summary for the panel footer.
    pub fn summary(&self) -> String {
        if self.modified == 0 {
            format!("{} points, none modified", self.total)
        } else {
            format!(
                "{} of {} points modified, max deviation {:.3}, mean {:.3}",
                self.modified, self.total, self.max_abs_delta, self.mean_abs_delta
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_none() {
        assert!(EditStats::compute(&[], &[]).is_none());
    }

    #[test]
    fn unmodified_series_has_zero_deltas() {
        let stats = EditStats::compute(&[1.0, 2.0], &[1.0, 2.0]).expect("some");
        assert_eq!(stats.modified, 0);
        assert_eq!(stats.max_abs_delta, 0.0);
        assert_eq!(stats.mean_abs_delta, 0.0);
        assert_eq!(stats.summary(), "2 points, none modified");
    }

    #[test]
    fn deltas_are_aggregated_over_modified_points_only() {
        let baseline = [1.0, 2.0, 3.0, 4.0];
        let working = [1.0, 4.0, 3.0, 3.0];
        let stats = EditStats::compute(&baseline, &working).expect("some");
        assert_eq!(stats.total, 4);
        assert_eq!(stats.modified, 2);
        assert_eq!(stats.max_abs_delta, 2.0);
        assert_eq!(stats.mean_abs_delta, 1.5);
    }
}
