/// One review session: the series under correction and its original baseline.
///
/// The session keeps three index-aligned sequences:
/// - `baseline`: the values as loaded, fixed for the session lifetime
/// - `working`: the committed numeric values, always well-formed
/// - `staging`: the raw text per point, tolerant of half-typed input
///
/// Text input only reaches `working` once it parses as a finite number, so
/// the chart never shows invalid numeric state while the text field still
/// reflects every keystroke.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    task_name: String,
    baseline: Vec<f64>,
    working: Vec<f64>,
    staging: Vec<String>,
}

impl ReviewSession {
    pub fn new(task_name: impl Into<String>, values: Vec<f64>) -> Self {
        let staging = values.iter().map(|v| format_value(*v)).collect();
        Self {
            task_name: task_name.into(),
            baseline: values.clone(),
            working: values,
            staging,
        }
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    pub fn working(&self) -> &[f64] {
        &self.working
    }

    pub fn staging_text(&self, index: usize) -> &str {
        self.staging.get(index).map(String::as_str).unwrap_or("")
    }

    /// Route a keystroke-level text edit at `index`.
    ///
    /// A finite parse commits to `working`; anything else (empty, "-",
    /// "abc", "NaN") only updates `staging` and is silently left pending.
    pub fn apply_text_input(&mut self, index: usize, raw: &str) {
        if index >= self.working.len() {
            return;
        }
        if let Some(value) = parse_finite(raw) {
            self.working[index] = value;
        }
        self.staging[index] = raw.to_string();
    }

    /// Commit a drag edit at `index`. Drags always carry a valid number,
    /// so both sequences are set unconditionally.
    pub fn apply_drag_value(&mut self, index: usize, value: f64) {
        if index >= self.working.len() {
            return;
        }
        self.working[index] = value;
        self.staging[index] = format_value(value);
    }

    /// Restore a single point from the baseline.
    pub fn reset_index(&mut self, index: usize) {
        if index >= self.working.len() {
            return;
        }
        self.working[index] = self.baseline[index];
        self.staging[index] = format_value(self.baseline[index]);
    }

    /// Restore every point from the baseline.
    pub fn discard_all(&mut self) {
        for index in 0..self.working.len() {
            self.working[index] = self.baseline[index];
            self.staging[index] = format_value(self.baseline[index]);
        }
    }

    pub fn is_modified(&self, index: usize) -> bool {
        match (self.working.get(index), self.baseline.get(index)) {
            (Some(w), Some(b)) => w != b,
            _ => false,
        }
    }

    /// Indices where the working value diverges from the baseline, in order.
    /// Recomputed fresh on every call; the series are small.
    pub fn modified_indices(&self) -> Vec<usize> {
        (0..self.working.len())
            .filter(|&i| self.working[i] != self.baseline[i])
            .collect()
    }

    /// The series handed to the submission writer, verbatim.
    pub fn values(&self) -> &[f64] {
        &self.working
    }
}

/// Parse user text as a committed value: finite numbers only.
/// "3" and "-2.5" pass; "", "-", "abc", "NaN" and "inf" do not.
pub fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a committed value back into staging text.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(values: &[f64]) -> ReviewSession {
        ReviewSession::new("test", values.to_vec())
    }

    #[test]
    fn new_session_starts_unmodified() {
        let s = session(&[1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.working(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.baseline(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.staging_text(1), "2");
        assert!(s.modified_indices().is_empty());
    }

    #[test]
    fn drag_sets_working_and_staging() {
        let mut s = session(&[1.0, 2.0, 3.0]);
        s.apply_drag_value(1, 9.0);
        assert_eq!(s.working(), &[1.0, 9.0, 3.0]);
        assert_eq!(s.staging_text(1), "9");
        assert_eq!(s.modified_indices(), vec![1]);
    }

    #[test]
    fn valid_text_commits_to_working() {
        let mut s = session(&[1.0, 2.0]);
        s.apply_text_input(0, "4.5");
        assert_eq!(s.working()[0], 4.5);
        assert_eq!(s.staging_text(0), "4.5");
    }

    #[test]
    fn invalid_text_stages_without_committing() {
        let mut s = session(&[1.0, 2.0]);
        s.apply_text_input(0, "abc");
        assert_eq!(s.working(), &[1.0, 2.0]);
        assert_eq!(s.staging_text(0), "abc");
        assert!(s.modified_indices().is_empty());
    }

    #[test]
    fn partial_input_is_tolerated() {
        let mut s = session(&[5.0, 5.0]);
        s.apply_text_input(0, "-");
        assert_eq!(s.working(), &[5.0, 5.0]);
        assert_eq!(s.staging_text(0), "-");
        assert_eq!(s.staging_text(1), "5");
        assert!(s.modified_indices().is_empty());
    }

    #[test]
    fn empty_and_nonfinite_text_do_not_commit() {
        let mut s = session(&[5.0]);
        for raw in ["", "NaN", "nan", "inf", "-inf"] {
            s.apply_text_input(0, raw);
            assert_eq!(s.working()[0], 5.0, "input {raw:?} must not commit");
            assert_eq!(s.staging_text(0), raw);
        }
    }

    #[test]
    fn reset_restores_single_index() {
        let mut s = session(&[1.0, 2.0, 3.0]);
        s.apply_drag_value(1, 9.0);
        assert_eq!(s.modified_indices(), vec![1]);
        s.reset_index(1);
        assert_eq!(s.working()[1], 2.0);
        assert_eq!(s.staging_text(1), "2");
        assert!(s.modified_indices().is_empty());
    }

    #[test]
    fn discard_all_clears_every_edit_and_is_idempotent() {
        let mut s = session(&[1.0, 2.0, 3.0]);
        s.apply_drag_value(0, -4.0);
        s.apply_text_input(2, "7.25");
        assert_eq!(s.modified_indices(), vec![0, 2]);

        s.discard_all();
        assert!(s.modified_indices().is_empty());
        assert_eq!(s.working(), s.baseline());
        let snapshot = s.clone();

        s.discard_all();
        assert_eq!(s.working(), snapshot.working());
        assert_eq!(s.staging_text(0), snapshot.staging_text(0));
    }

    #[test]
    fn discard_clears_pending_invalid_staging() {
        let mut s = session(&[5.0]);
        s.apply_text_input(0, "not a number");
        s.discard_all();
        assert_eq!(s.staging_text(0), "5");
    }

    #[test]
    fn modified_indices_are_ordered() {
        let mut s = session(&[0.0; 5]);
        s.apply_drag_value(4, 1.0);
        s.apply_drag_value(0, 1.0);
        s.apply_drag_value(2, 1.0);
        assert_eq!(s.modified_indices(), vec![0, 2, 4]);
    }

    #[test]
    fn editing_back_to_baseline_clears_modified() {
        let mut s = session(&[1.5]);
        s.apply_drag_value(0, 2.0);
        assert_eq!(s.modified_indices(), vec![0]);
        s.apply_text_input(0, "1.5");
        assert!(s.modified_indices().is_empty());
    }

    #[test]
    fn out_of_range_operations_are_ignored() {
        let mut s = session(&[1.0]);
        s.apply_text_input(5, "9");
        s.apply_drag_value(5, 9.0);
        s.reset_index(5);
        assert_eq!(s.working(), &[1.0]);
        assert!(!s.is_modified(5));
    }

    #[test]
    fn values_hand_back_working_series_verbatim() {
        let mut s = session(&[1.0, 2.0, 3.0]);
        s.apply_drag_value(1, 9.0);
        s.apply_text_input(2, "oops");
        assert_eq!(s.values(), &[1.0, 9.0, 3.0]);
    }

    #[test]
    fn parse_finite_policy() {
        assert_eq!(parse_finite("3"), Some(3.0));
        assert_eq!(parse_finite("-2.5"), Some(-2.5));
        assert_eq!(parse_finite(" 4.5 "), Some(4.5));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("-"), None);
        assert_eq!(parse_finite("abc"), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
    }

    #[test]
    fn format_value_round_trips_typical_values() {
        assert_eq!(format_value(9.0), "9");
        assert_eq!(format_value(4.5), "4.5");
        assert_eq!(format_value(-0.125), "-0.125");
    }
}
