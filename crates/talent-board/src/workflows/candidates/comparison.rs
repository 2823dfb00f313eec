use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateId, ComparisonCandidate, Score};

/// Score gap under which the top two candidates are reported as a close match.
pub const CLOSE_MATCH_THRESHOLD: u8 = 5;

const SELECT_MORE: &str = "Please select at least two candidates to generate a recommendation.";
const CLOSELY_MATCHED: &str = "The top candidates are very closely matched. Consider other factors like cultural fit and specific skills.";

/// Outcome of comparing the selected candidates by score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    NeedsMoreCandidates,
    CloselyMatched,
    Leader { name: String, lead: u8 },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedsMoreCandidates => f.write_str(SELECT_MORE),
            Self::CloselyMatched => f.write_str(CLOSELY_MATCHED),
            Self::Leader { name, lead } => write!(
                f,
                "{name} leads by {lead} points and may be the stronger candidate."
            ),
        }
    }
}

/// Ranks the selection by score and compares the top two.
///
/// Ties keep selection order, so among equal scores the earlier slot ranks first.
pub fn recommend(selected: &[&Candidate]) -> Recommendation {
    let mut ranked: Vec<&Candidate> = selected.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let (top, runner_up) = match ranked.as_slice() {
        [top, runner_up, ..] => (*top, *runner_up),
        _ => return Recommendation::NeedsMoreCandidates,
    };

    let lead = score_gap(top.score, runner_up.score);
    if lead < CLOSE_MATCH_THRESHOLD {
        Recommendation::CloselyMatched
    } else {
        Recommendation::Leader {
            name: top.name.clone(),
            lead,
        }
    }
}

fn score_gap(top: Score, runner_up: Score) -> u8 {
    top.value().abs_diff(runner_up.value())
}

/// The comparison panel's slots. Starts with two empty slots and never drops below one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SlotList")]
pub struct ComparisonSlots {
    slots: Vec<ComparisonCandidate>,
}

/// Wire form of `ComparisonSlots`; an empty list still decodes to one empty slot.
#[derive(Deserialize)]
struct SlotList {
    #[serde(default)]
    slots: Vec<ComparisonCandidate>,
}

impl From<SlotList> for ComparisonSlots {
    fn from(list: SlotList) -> Self {
        Self::at_least_one(list.slots)
    }
}

impl Default for ComparisonSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSlots {
    pub fn new() -> Self {
        Self {
            slots: vec![ComparisonCandidate::empty(), ComparisonCandidate::empty()],
        }
    }

    /// Builds slots from ids, filling names from the roster.
    ///
    /// `None` entries and ids missing from the roster become empty slots. An empty input
    /// still yields a single empty slot.
    pub fn from_ids(ids: &[Option<CandidateId>], roster: &[Candidate]) -> Self {
        let slots = ids
            .iter()
            .map(|id| {
                id.and_then(|id| lookup(roster, id))
                    .map(slot_for)
                    .unwrap_or_default()
            })
            .collect();
        Self::at_least_one(slots)
    }

    fn at_least_one(mut slots: Vec<ComparisonCandidate>) -> Self {
        if slots.is_empty() {
            slots.push(ComparisonCandidate::empty());
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[ComparisonCandidate] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn add_slot(&mut self) {
        self.slots.push(ComparisonCandidate::empty());
    }

    /// Removes a slot. Returns `false` without changes when only one slot remains or
    /// the index is out of range.
    pub fn remove_slot(&mut self, index: usize) -> bool {
        if self.slots.len() <= 1 || index >= self.slots.len() {
            return false;
        }
        self.slots.remove(index);
        true
    }

    /// Points a slot at a roster candidate, or clears it with `None`.
    ///
    /// An id that is not on the roster leaves the slot untouched. Returns whether the
    /// slot changed.
    pub fn select(
        &mut self,
        index: usize,
        candidate_id: Option<CandidateId>,
        roster: &[Candidate],
    ) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        let replacement = match candidate_id {
            None => ComparisonCandidate::empty(),
            Some(id) => match lookup(roster, id) {
                Some(candidate) => slot_for(candidate),
                None => return false,
            },
        };
        let changed = *slot != replacement;
        *slot = replacement;
        changed
    }

    /// Roster entries behind the selected slots, in slot order.
    pub fn resolve<'a>(&self, roster: &'a [Candidate]) -> Vec<&'a Candidate> {
        self.slots
            .iter()
            .filter_map(|slot| slot.id)
            .filter_map(|id| lookup(roster, id))
            .collect()
    }
}

fn lookup(roster: &[Candidate], id: CandidateId) -> Option<&Candidate> {
    roster.iter().find(|candidate| candidate.id == id)
}

fn slot_for(candidate: &Candidate) -> ComparisonCandidate {
    ComparisonCandidate {
        id: Some(candidate.id),
        name: candidate.name.clone(),
    }
}

/// Side-by-side comparison handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub candidates: Vec<Candidate>,
    pub recommendation: Recommendation,
    pub recommendation_text: String,
}

impl ComparisonReport {
    pub fn build(slots: &ComparisonSlots, roster: &[Candidate]) -> Self {
        let selected = slots.resolve(roster);
        let recommendation = recommend(&selected);
        Self {
            recommendation_text: recommendation.to_string(),
            candidates: selected.into_iter().cloned().collect(),
            recommendation,
        }
    }
}
