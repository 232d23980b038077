//! Read-model records serialized to clients. Each has a fixed field set.

use crate::models::{Event, Session, Speaker, SpeakerBio};
use serde::Serialize;

/// Substituted for a missing bio. Absence is never surfaced as null.
pub const NO_BIO_FALLBACK: &str = "No bio available";

#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl From<Event> for EventSummary {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            location: e.location,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub id: i64,
    pub title: String,
    /// ISO-8601, second precision, no offset (the catalog stores naive times).
    pub start_time: String,
}

impl From<Session> for SessionSummary {
    fn from(s: Session) -> Self {
        Self {
            id: s.id,
            title: s.title,
            start_time: s.start_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakerSummary {
    pub id: i64,
    pub name: String,
}

impl From<Speaker> for SpeakerSummary {
    fn from(s: Speaker) -> Self {
        Self {
            id: s.id,
            name: s.name,
        }
    }
}

/// Speaker with bio text, falling back to [`NO_BIO_FALLBACK`].
#[derive(Debug, Serialize)]
pub struct SpeakerProfile {
    pub id: i64,
    pub name: String,
    pub bio_text: String,
}

impl From<SpeakerBio> for SpeakerProfile {
    fn from(s: SpeakerBio) -> Self {
        Self {
            id: s.id,
            name: s.name,
            bio_text: s.bio_text.unwrap_or_else(|| NO_BIO_FALLBACK.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn session_start_time_is_iso_8601() {
        let s = Session {
            id: 1,
            title: "Intro".into(),
            start_time: NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            event_id: 1,
        };
        let view = SessionSummary::from(s);
        assert_eq!(view.start_time, "2024-06-15T09:00:00");
    }

    #[test]
    fn missing_bio_uses_fallback() {
        let view = SpeakerProfile::from(SpeakerBio {
            id: 4,
            name: "Bob Williams".into(),
            bio_text: None,
        });
        assert_eq!(view.bio_text, NO_BIO_FALLBACK);
    }

    #[test]
    fn empty_bio_text_is_not_the_fallback() {
        let view = SpeakerProfile::from(SpeakerBio {
            id: 5,
            name: "Eve".into(),
            bio_text: Some(String::new()),
        });
        assert_eq!(view.bio_text, "");
    }
}
