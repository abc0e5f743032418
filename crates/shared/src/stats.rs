use std::fmt;

use crate::models::AccountList;

/// Running tallies for a session. Slot `i` belongs to the account at position
/// `i` in the wordbank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_rounds: u32,
    pub total_correct: u32,
    rounds_shown: Vec<u32>,
    correct_shown: Vec<u32>,
}

impl Stats {
    pub fn new(num_accounts: usize) -> Self {
        Self {
            total_rounds: 0,
            total_correct: 0,
            rounds_shown: vec![0; num_accounts],
            correct_shown: vec![0; num_accounts],
        }
    }

    /// Tally one finished round for the account at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a slot this tracker was created with.
    pub fn record_round(&mut self, index: usize, correct: bool) {
        self.total_rounds += 1;
        self.rounds_shown[index] += 1;
        if correct {
            self.total_correct += 1;
            self.correct_shown[index] += 1;
        }
    }

    pub fn rounds_shown(&self, index: usize) -> u32 {
        self.rounds_shown.get(index).copied().unwrap_or(0)
    }

    pub fn correct_shown(&self, index: usize) -> u32 {
        self.correct_shown.get(index).copied().unwrap_or(0)
    }

    pub fn report(&self, accounts: &AccountList) -> StatsReport {
        let mut lines = Vec::with_capacity(accounts.len() + 1);
        lines.push(ReportLine {
            label: "total".to_string(),
            correct: self.total_correct,
            shown: self.total_rounds,
        });
        for (i, account) in accounts.iter().enumerate() {
            lines.push(ReportLine {
                label: account.to_string(),
                correct: self.correct_shown(i),
                shown: self.rounds_shown(i),
            });
        }
        StatsReport { lines }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub correct: u32,
    pub shown: u32,
}

impl ReportLine {
    /// Accuracy as a percentage rounded to 4 places, `None` with no rounds.
    pub fn percent(&self) -> Option<f64> {
        if self.shown == 0 {
            return None;
        }
        let pct = 100.0 * f64::from(self.correct) / f64::from(self.shown);
        Some((pct * 10_000.0).round() / 10_000.0)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(pct) => write!(
                f,
                "{} correct % = {} / {} = {}%",
                self.label, self.correct, self.shown, pct
            ),
            None => write!(f, "{} correct % = N/A", self.label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub lines: Vec<ReportLine>,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GAME STATISTICS")?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_accounts() -> AccountList {
        AccountList::new(["alpha", "beta"]).unwrap()
    }

    #[test]
    fn test_record_round_counts() {
        let mut stats = Stats::new(2);
        stats.record_round(0, true);
        stats.record_round(0, false);
        stats.record_round(1, true);

        assert_eq!(stats.total_rounds, 3);
        assert_eq!(stats.total_correct, 2);
        assert_eq!(stats.rounds_shown(0), 2);
        assert_eq!(stats.correct_shown(0), 1);
        assert_eq!(stats.rounds_shown(1), 1);
        assert_eq!(stats.correct_shown(1), 1);
    }

    #[test]
    fn test_report_lines() {
        let mut stats = Stats::new(2);
        stats.record_round(0, true);
        stats.record_round(0, false);
        stats.record_round(1, true);

        let report = stats.report(&two_accounts());
        let lines: Vec<String> = report.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "total correct % = 2 / 3 = 66.6667%",
                "alpha correct % = 1 / 2 = 50%",
                "beta correct % = 1 / 1 = 100%",
            ]
        );
    }

    #[test]
    fn test_report_is_idempotent() {
        let mut stats = Stats::new(2);
        stats.record_round(1, false);
        let accounts = two_accounts();

        assert_eq!(stats.report(&accounts), stats.report(&accounts));
        assert_eq!(
            stats.report(&accounts).to_string(),
            stats.report(&accounts).to_string()
        );
    }

    #[test]
    fn test_unshown_account_is_not_applicable() {
        let mut stats = Stats::new(2);
        stats.record_round(1, false);

        let report = stats.report(&two_accounts());
        assert_eq!(report.lines[1].to_string(), "alpha correct % = N/A");
        assert_eq!(report.lines[2].to_string(), "beta correct % = 0 / 1 = 0%");
    }

    #[test]
    fn test_no_rounds_at_all() {
        let stats = Stats::new(2);
        let text = stats.report(&two_accounts()).to_string();
        assert_eq!(
            text,
            "GAME STATISTICS\n\
             total correct % = N/A\n\
             alpha correct % = N/A\n\
             beta correct % = N/A\n"
        );
    }

    #[test]
    fn test_rounding_to_four_places() {
        let line = ReportLine {
            label: "x".into(),
            correct: 1,
            shown: 7,
        };
        assert_eq!(line.to_string(), "x correct % = 1 / 7 = 14.2857%");
    }
}
