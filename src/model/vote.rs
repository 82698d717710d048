use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::CandidateList;
use super::draft::VoteDraft;

/// The externally issued, immutable identifier of a vote. Participants
/// type it in to join; updates are keyed by it.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Deref for Code {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Code {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// A vote as yielded by the record loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    /// Vote code.
    pub code: Code,
    /// Vote title.
    pub title: String,
    /// Voting window start.
    pub start_date_time: DateTime<Utc>,
    /// Voting window end.
    pub end_date_time: DateTime<Utc>,
    /// The selectable options.
    pub candidates: CandidateList,
}

/// The replace-style update body accepted by the persistence API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteUpdate {
    /// Vote code.
    pub code: Code,
    /// Vote title.
    pub title: String,
    /// Voting window start.
    pub start_date: DateTime<Utc>,
    /// Voting window end.
    pub end_date: DateTime<Utc>,
    /// The selectable options, tallies stripped.
    pub candidates: CandidateList,
    /// Identity of the submitting user.
    pub publisher: String,
}

impl VoteUpdate {
    /// Assemble the replace body for a draft being submitted.
    pub fn new(code: Code, draft: &VoteDraft, publisher: impl Into<String>) -> Self {
        Self {
            code,
            title: draft.title.clone(),
            start_date: draft.start_time,
            end_date: draft.end_time,
            candidates: draft.candidates.clone(),
            publisher: publisher.into(),
        }
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    use chrono::Duration;

    impl Code {
        pub fn example() -> Self {
            "fh7gk2".into()
        }
    }

    impl VoteRecord {
        pub fn example() -> Self {
            let start_date_time = Utc::now();
            Self {
                code: Code::example(),
                title: "Clubhouse Improvement 2023".to_string(),
                start_date_time,
                end_date_time: start_date_time + Duration::days(7),
                candidates: CandidateList::example(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn update_body_matches_the_wire_format() {
        let record = VoteRecord {
            start_date_time: "2023-03-20T09:00:00Z".parse().unwrap(),
            end_date_time: "2023-03-27T09:00:00Z".parse().unwrap(),
            ..VoteRecord::example()
        };
        let mut draft = VoteDraft::new();
        draft.hydrate(&record);

        let update = VoteUpdate::new(record.code.clone(), &draft, "chris@example.com");
        let body = serde_json::to_value(&update).unwrap();

        assert_eq!(
            body,
            json!({
                "code": "fh7gk2",
                "title": "Clubhouse Improvement 2023",
                "startDate": "2023-03-20T09:00:00Z",
                "endDate": "2023-03-27T09:00:00Z",
                "candidates": [
                    {
                        "name": "Chris Riches",
                        "title": "Keep the clubhouse open on Sundays",
                        "key": 1,
                    },
                    {
                        "name": "Jane Doe",
                        "title": "Refit the clubhouse kitchen first",
                        "key": 2,
                    },
                ],
                "publisher": "chris@example.com",
            })
        );
    }

    #[test]
    fn record_parses_from_loader_json() {
        let record: VoteRecord = serde_json::from_value(json!({
            "code": "fh7gk2",
            "title": "Clubhouse Improvement 2023",
            "startDateTime": "2023-03-20T09:00:00Z",
            "endDateTime": "2023-03-27T09:00:00Z",
            "candidates": [
                {"name": "Chris Riches", "title": "", "key": 1},
                {"name": "Jane Doe", "title": "", "key": 2},
            ],
        }))
        .unwrap();

        assert_eq!(record.code, Code::example());
        assert_eq!(record.candidates.len(), 2);
        assert!(record.start_date_time < record.end_date_time);
    }
}
