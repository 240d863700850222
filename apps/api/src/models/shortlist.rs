use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Placeholder stored when a shortlist record arrives without an email.
pub const EMAIL_SENTINEL: &str = "N/A";

/// A scored match between a candidate and a job code, normally written by the
/// external matcher. `score` has no enforced range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shortlist {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub candidate_name: String,
    pub job_code: String,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub email: String,
    #[serde(rename = "shortlist")]
    pub shortlisted: bool,
    pub date_shortlisted: DateTime<Utc>,
}

/// A validated shortlist record ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShortlist {
    pub candidate_name: String,
    pub job_code: String,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub email: String,
    pub shortlisted: bool,
    pub date_shortlisted: DateTime<Utc>,
}

impl Shortlist {
    pub fn from_new(new: NewShortlist) -> Self {
        Shortlist {
            id: Uuid::new_v4(),
            candidate_name: new.candidate_name,
            job_code: new.job_code,
            score: new.score,
            matched_skills: new.matched_skills,
            missing_skills: new.missing_skills,
            summary: new.summary,
            email: new.email,
            shortlisted: new.shortlisted,
            date_shortlisted: new.date_shortlisted,
        }
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` that also accepts timestamps
/// without an offset (`2025-06-04T10:15:00.123456`), read as UTC. The matcher
/// writes its dates in that form.
pub mod lenient_timestamp {
    use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
    use serde::{de, Deserialize, Deserializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        let parsed = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                    .map(|naive| naive.and_utc())
            })?;
        Some(parsed.trunc_subsecs(6))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'"))),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{TimeZone, Timelike};

        #[test]
        fn test_naive_timestamp_is_read_as_utc() {
            let parsed = parse("2025-06-04T10:15:00.123456").unwrap();
            assert_eq!(
                parsed,
                Utc.with_ymd_and_hms(2025, 6, 4, 10, 15, 0).unwrap()
                    + chrono::Duration::microseconds(123_456)
            );
        }

        #[test]
        fn test_space_separated_and_offset_forms() {
            assert!(parse("2025-06-04 10:15:00").is_some());
            let offset = parse("2025-06-04T12:15:00+02:00").unwrap();
            assert_eq!(offset, Utc.with_ymd_and_hms(2025, 6, 4, 10, 15, 0).unwrap());
        }

        #[test]
        fn test_nanoseconds_truncated_to_micros() {
            let parsed = parse("2025-06-04T10:15:00.123456789Z").unwrap();
            assert_eq!(parsed.nanosecond(), 123_456_000);
        }

        #[test]
        fn test_garbage_is_rejected() {
            assert!(parse("yesterday").is_none());
        }
    }
}
