/// Display data for the quiz result page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub score: i64,
    pub total: i64,
    pub percent: i64,
    pub verdict: &'static str,
}

impl QuizResultVm {
    /// Values come straight from the route, so they may be negative or huge.
    #[must_use]
    pub fn new(score: i64, total: i64) -> Self {
        let percent = percent_of(score, total);
        let verdict = match percent {
            80.. => "Excellent work!",
            50..=79 => "Well done, you passed.",
            _ => "Keep practicing.",
        };
        Self {
            score,
            total,
            percent,
            verdict,
        }
    }
}

/// Whole-number percentage truncated toward zero, 0 when `total` is 0.
fn percent_of(score: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    let pct = i128::from(score) * 100 / i128::from(total);
    i64::try_from(pct).unwrap_or(if pct < 0 { i64::MIN } else { i64::MAX })
}
