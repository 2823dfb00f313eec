use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::rows::InterviewRow;

const MISSING: &str = "N/A";

/// Response body of the total-interview endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterviewFeedPayload {
    #[serde(default)]
    pub jobs: Option<Vec<FeedJob>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedJob {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub posted_on: Option<String>,
    #[serde(
        rename = "candidateList",
        default,
        deserialize_with = "list_or_nothing"
    )]
    pub candidate_list: Vec<FeedCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedCandidate {
    #[serde(rename = "candidateId", deserialize_with = "string_or_number")]
    pub candidate_id: String,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub status: Option<i64>,
}

impl InterviewFeedPayload {
    /// One row per (job, candidate) pair, in feed order. Jobs without a candidate list
    /// contribute nothing; blank titles and posting dates read "N/A".
    pub fn flatten(self) -> Vec<InterviewRow> {
        self.jobs
            .unwrap_or_default()
            .into_iter()
            .flat_map(|job| {
                let title = or_missing(job.title);
                let posted_on = or_missing(job.posted_on);
                let job_id = job.job_id;
                job.candidate_list
                    .into_iter()
                    .map(move |candidate| InterviewRow {
                        candidate_id: candidate.candidate_id,
                        job_id,
                        status: candidate.status,
                        title: title.clone(),
                        posted_on: posted_on.clone(),
                    })
            })
            .collect()
    }
}

fn or_missing(value: Option<String>) -> String {
    value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

/// A `candidateList` that is absent, `null`, or not an array counts as empty.
fn list_or_nothing<'de, D>(deserializer: D) -> Result<Vec<FeedCandidate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| FeedCandidate::deserialize(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// Integers and numeric strings are read; `null` or anything else is `None`.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "candidateId must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> InterviewFeedPayload {
        serde_json::from_value(value).expect("payload parses")
    }

    #[test]
    fn flatten_emits_one_row_per_job_candidate() {
        let rows = payload(json!({
            "jobs": [
                {
                    "job_id": 7,
                    "title": "Backend Engineer",
                    "posted_on": "2024-02-01",
                    "candidateList": [
                        { "candidateId": "cand-1", "status": 10 },
                        { "candidateId": 42, "status": 5 }
                    ]
                },
                { "job_id": 8, "title": "", "candidateList": [{ "candidateId": "cand-3", "status": 2 }] }
            ]
        }))
        .flatten();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].candidate_id, "cand-1");
        assert_eq!(rows[1].candidate_id, "42");
        assert_eq!(rows[1].job_id, Some(7));
        assert_eq!(rows[2].title, "N/A");
        assert_eq!(rows[2].posted_on, "N/A");
    }

    #[test]
    fn flatten_skips_jobs_without_candidate_arrays() {
        let rows = payload(json!({
            "jobs": [
                { "job_id": 1, "title": "A" },
                { "job_id": 2, "title": "B", "candidateList": null },
                { "job_id": 3, "title": "C", "candidateList": { "candidateId": "x" } }
            ]
        }))
        .flatten();
        assert!(rows.is_empty());
    }

    #[test]
    fn loose_job_ids_and_statuses_keep_the_rest_of_the_feed() {
        let rows = payload(json!({
            "jobs": [
                {
                    "job_id": 7,
                    "title": "Backend Engineer",
                    "candidateList": [{ "candidateId": "cand-1", "status": 10 }]
                },
                {
                    "job_id": null,
                    "title": "Designer",
                    "candidateList": [{ "candidateId": "cand-2", "status": null }]
                },
                {
                    "job_id": "J-7",
                    "candidateList": [{ "candidateId": "cand-3", "status": "5" }]
                },
                {
                    "job_id": "12",
                    "candidateList": [{ "candidateId": "cand-4" }]
                }
            ]
        }))
        .flatten();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].job_id, Some(7));
        assert_eq!(rows[0].status, Some(10));
        assert_eq!(rows[1].job_id, None);
        assert_eq!(rows[1].status, None);
        assert_eq!(rows[1].status_label(), "N/A");
        assert_eq!(rows[2].job_id, None);
        assert_eq!(rows[2].status_label(), "Rejected");
        assert_eq!(rows[3].job_id, Some(12));
        assert_eq!(rows[3].status, None);
    }

    #[test]
    fn missing_or_null_jobs_flatten_to_nothing() {
        assert!(payload(json!({})).flatten().is_empty());
        assert!(payload(json!({ "jobs": null })).flatten().is_empty());
    }
}
