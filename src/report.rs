//! Console reports.
//!
//! Each report is a `Display` wrapper, so callers choose where the text
//! goes (stdout, a log line, a test string). The formats are fixed and
//! compared verbatim in tests.

use crate::players::Player;
use crate::stats::{MatchSummary, RankingEntry};

/// Per-match report for one summary.
///
/// ```text
/// --- [Forward] vs [Keep]
/// Number of games played: 9
///   Wins: 33% (3)
///   Losses: 33% (3)
///   Ties: 33% (3)
///
/// ```
pub struct MatchReport<'a>(pub &'a MatchSummary);

impl std::fmt::Display for MatchReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        writeln!(f, "--- [{}] vs [{}]", s.player1, s.player2)?;
        writeln!(f, "Number of games played: {}", s.rounds)?;
        writeln!(f, "  Wins: {}% ({})", s.win_rate(), s.wins)?;
        writeln!(f, "  Losses: {}% ({})", s.lose_rate(), s.losses)?;
        writeln!(f, "  Ties: {}% ({})", s.tie_rate(), s.ties)?;
        writeln!(f)
    }
}

/// Ranking report over already-selected entries.
pub struct RankingReport<'a>(pub &'a [RankingEntry]);

impl std::fmt::Display for RankingReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Most successful strategies:")?;
        for entry in self.0 {
            writeln!(f, "  {} - score: {}", entry.player, entry.score)?;
        }
        Ok(())
    }
}

/// Head-to-head report: opponents only one of two players defeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonReport {
    pub first: Player,
    pub second: Player,
    /// Beaten by `first` but not by `second`.
    pub only_first: Vec<Player>,
    /// Beaten by `second` but not by `first`.
    pub only_second: Vec<Player>,
}

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Only [{}] wins against:", self.first)?;
        for player in &self.only_first {
            writeln!(f, "- {}", player)?;
        }
        writeln!(f, "Only [{}] wins against:", self.second)?;
        // the second list is indented one space in the reference output
        for player in &self.only_second {
            writeln!(f, " - {}", player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::strategy::Strategy;

    #[test]
    fn test_match_report_format() {
        let mut summary = MatchSummary::new(
            Player::simple(Strategy::Forward),
            Player::adaptive(Strategy::Keep, Strategy::Copy, Strategy::Backward),
        );
        for outcome in [Outcome::Win, Outcome::Win, Outcome::Lose] {
            summary.record(outcome);
        }

        let text = MatchReport(&summary).to_string();
        assert_eq!(
            text,
            "--- [Forward] vs [Keep/Copy/Backward]\n\
             Number of games played: 3\n  \
             Wins: 66% (2)\n  \
             Losses: 33% (1)\n  \
             Ties: 0% (0)\n\n"
        );
    }

    #[test]
    fn test_ranking_report_format() {
        let entries = [
            RankingEntry { player: Player::simple(Strategy::Copy), score: 4 },
            RankingEntry { player: Player::simple(Strategy::Keep), score: 1 },
        ];
        assert_eq!(
            RankingReport(&entries).to_string(),
            "Most successful strategies:\n  Copy - score: 4\n  Keep - score: 1\n"
        );
        assert_eq!(RankingReport(&[]).to_string(), "Most successful strategies:\n");
    }

    #[test]
    fn test_comparison_report_format() {
        let report = ComparisonReport {
            first: Player::adaptive(Strategy::Forward, Strategy::Copy, Strategy::Forward),
            second: Player::adaptive(Strategy::Copy, Strategy::Forward, Strategy::Forward),
            only_first: vec![Player::simple(Strategy::Keep)],
            only_second: vec![Player::simple(Strategy::Copy), Player::simple(Strategy::Backward)],
        };
        assert_eq!(
            report.to_string(),
            "Only [Forward/Copy/Forward] wins against:\n\
             - Keep\n\
             Only [Copy/Forward/Forward] wins against:\n \
             - Copy\n \
             - Backward\n"
        );
    }
}
