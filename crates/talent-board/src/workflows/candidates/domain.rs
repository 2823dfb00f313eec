use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for roster entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interview score on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, InvalidScore> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(InvalidScore(i64::from(value)))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn band(self) -> ScoreBand {
        if self.0 >= 80 {
            ScoreBand::Strong
        } else if self.0 >= 70 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

impl TryFrom<i64> for Score {
    type Error = InvalidScore;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|score| *score <= Self::MAX)
            .map(Self)
            .ok_or(InvalidScore(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside 0..=100")]
pub struct InvalidScore(pub i64);

/// Colour band renderers attach to a score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

/// Interview outcome recorded against a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    Selected,
    Rejected,
    Pending,
}

impl CandidateStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Selected, Self::Rejected, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CandidateStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStatus(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown candidate status '{0}' (expected Selected, Rejected, or Pending)")]
pub struct UnknownStatus(pub String);

/// A job applicant with interview outcome metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub position: String,
    pub date: NaiveDate,
    pub status: CandidateStatus,
    pub score: Score,
}

impl Candidate {
    /// Lowercased string form of every field, in declaration order.
    ///
    /// Free-text search matches against all of these, numbers and the status label
    /// included, so typing "85" or "pending" finds candidates the same way a name does.
    pub fn search_haystack(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.to_lowercase(),
            self.position.to_lowercase(),
            self.date.format("%Y-%m-%d").to_string(),
            self.status.label().to_lowercase(),
            self.score.to_string(),
        ]
    }

    /// First letter of each name part, as shown in the roster avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Which optional bound of a score range a raw input feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBoundKind {
    Min,
    Max,
}

impl ScoreBoundKind {
    pub const fn fallback(self) -> i32 {
        match self {
            Self::Min => 0,
            Self::Max => Score::MAX as i32,
        }
    }
}

/// Inclusive interview-date window; an unset side imposes no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Advanced filter criteria layered on top of search and status.
///
/// `min_score <= max_score` is expected but not enforced; inverted bounds match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub min_score: i32,
    #[serde(default = "default_max_score")]
    pub max_score: i32,
    #[serde(default)]
    pub date_range: DateRange,
}

fn default_max_score() -> i32 {
    ScoreBoundKind::Max.fallback()
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            position: String::new(),
            min_score: ScoreBoundKind::Min.fallback(),
            max_score: ScoreBoundKind::Max.fallback(),
            date_range: DateRange::default(),
        }
    }
}

impl FilterOptions {
    /// Restores every criterion to its pass-through value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Status criterion; `All` passes every candidate through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(CandidateStatus),
}

impl StatusFilter {
    pub fn admits(self, status: CandidateStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

/// One entry in the comparison panel; `id == None` is an unselected slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCandidate {
    pub id: Option<CandidateId>,
    pub name: String,
}

impl ComparisonCandidate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_selected(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rejects_values_above_one_hundred() {
        assert!(Score::new(100).is_ok());
        assert_eq!(Score::new(101), Err(InvalidScore(101)));
        assert_eq!(Score::try_from(-3), Err(InvalidScore(-3)));
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(Score::new(80).expect("valid").band(), ScoreBand::Strong);
        assert_eq!(Score::new(79).expect("valid").band(), ScoreBand::Moderate);
        assert_eq!(Score::new(70).expect("valid").band(), ScoreBand::Moderate);
        assert_eq!(Score::new(69).expect("valid").band(), ScoreBand::Weak);
    }

    #[test]
    fn status_filter_parses_all_and_labels() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Pending".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(CandidateStatus::Pending))
        );
        assert!("Hired".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn initials_take_first_letter_of_each_name_part() {
        let candidate = Candidate {
            id: CandidateId(3),
            name: "Michael  Johnson".to_string(),
            position: "UI/UX Designer".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 5, 17).expect("valid date"),
            status: CandidateStatus::Pending,
            score: Score::new(75).expect("valid score"),
        };
        assert_eq!(candidate.initials(), "MJ");
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let day = |d| NaiveDate::from_ymd_opt(2023, 5, d).expect("valid date");
        let range = DateRange {
            start: Some(day(16)),
            end: Some(day(18)),
        };
        assert!(!range.contains(day(15)));
        assert!(range.contains(day(16)));
        assert!(range.contains(day(18)));
        assert!(!range.contains(day(19)));
        assert!(DateRange::default().contains(day(1)));
    }

    #[test]
    fn reset_restores_pass_through_filters() {
        let mut options = FilterOptions {
            position: "QA Engineer".to_string(),
            min_score: 50,
            max_score: 60,
            date_range: DateRange {
                start: NaiveDate::from_ymd_opt(2023, 5, 1),
                end: None,
            },
        };
        options.reset();
        assert_eq!(options, FilterOptions::default());
    }
}
