use chrono::NaiveDate;

use super::domain::{Candidate, CandidateId, CandidateStatus, Score};

const SAMPLE_ROSTER: &[(u32, &str, &str, (i32, u32, u32), CandidateStatus, u8)] = &[
    (1, "John Doe", "Frontend Developer", (2023, 5, 15), CandidateStatus::Selected, 85),
    (2, "Jane Smith", "Backend Developer", (2023, 5, 16), CandidateStatus::Rejected, 65),
    (3, "Michael Johnson", "UI/UX Designer", (2023, 5, 17), CandidateStatus::Pending, 75),
    (4, "Emily Davis", "Full Stack Developer", (2023, 5, 18), CandidateStatus::Selected, 90),
    (5, "Robert Wilson", "DevOps Engineer", (2023, 5, 19), CandidateStatus::Pending, 80),
    (6, "Sarah Brown", "Product Manager", (2023, 5, 20), CandidateStatus::Selected, 88),
    (7, "David Miller", "Data Scientist", (2023, 5, 21), CandidateStatus::Rejected, 70),
    (8, "Jennifer Taylor", "QA Engineer", (2023, 5, 22), CandidateStatus::Pending, 78),
];

/// Demo roster used when no CSV import or live feed is supplied.
pub fn sample_roster() -> Vec<Candidate> {
    SAMPLE_ROSTER
        .iter()
        .filter_map(|&(id, name, position, (year, month, day), status, score)| {
            Some(Candidate {
                id: CandidateId(id),
                name: name.to_string(),
                position: position.to_string(),
                date: NaiveDate::from_ymd_opt(year, month, day)?,
                status,
                score: Score::new(score).ok()?,
            })
        })
        .collect()
}
