use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_DATE_ORDER, ERR_MISSING_PLACES, ERR_TRIP_TOO_LONG, MAX_TRIP_DAYS};
use crate::error::{AppError, Result};

/// Interest tags offered on the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Food,
    Museums,
    Nature,
    Nightlife,
    Shopping,
    History,
    Architecture,
    Family,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::Food,
        Interest::Museums,
        Interest::Nature,
        Interest::Nightlife,
        Interest::Shopping,
        Interest::History,
        Interest::Architecture,
        Interest::Family,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Food => "food",
            Interest::Museums => "museums",
            Interest::Nature => "nature",
            Interest::Nightlife => "nightlife",
            Interest::Shopping => "shopping",
            Interest::History => "history",
            Interest::Architecture => "architecture",
            Interest::Family => "family",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trip intensity; only changes the prompt wording
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Normal,
    Tight,
}

impl Pace {
    pub const ALL: [Pace; 3] = [Pace::Relaxed, Pace::Normal, Pace::Tight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Normal => "normal",
            Pace::Tight => "tight",
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_interests() -> Vec<Interest> {
    vec![Interest::Food, Interest::Museums]
}

/// Parameters of one itinerary request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_interests")]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub pace: Pace,
}

impl TripRequest {
    /// Form defaults: a two-day trip starting `today`, food and museums, normal pace
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            start_date: today,
            end_date: today.checked_add_days(Days::new(1)).unwrap_or(today),
            interests: default_interests(),
            pace: Pace::default(),
        }
    }

    /// Reject requests the form would have blocked
    ///
    /// Origin and destination must be non-blank, the end date must not
    /// precede the start date, and the trip may span at most `MAX_TRIP_DAYS`.
    pub fn validate(&self) -> Result<()> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(AppError::InvalidInput(ERR_MISSING_PLACES.to_string()));
        }

        if self.end_date < self.start_date {
            return Err(AppError::InvalidInput(ERR_DATE_ORDER.to_string()));
        }

        if self.day_count() > MAX_TRIP_DAYS {
            return Err(AppError::InvalidInput(ERR_TRIP_TOO_LONG.to_string()));
        }

        Ok(())
    }

    /// Inclusive number of days covered by the trip
    pub fn day_count(&self) -> u64 {
        (self.end_date - self.start_date).num_days().max(0) as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(start: NaiveDate, end: NaiveDate) -> TripRequest {
        TripRequest {
            origin: "Ho Chi Minh City".to_string(),
            destination: "Da Nang".to_string(),
            start_date: start,
            end_date: end,
            interests: vec![Interest::Food],
            pace: Pace::Normal,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(trip(date(2024, 5, 1), date(2024, 5, 3)).validate().is_ok());
        assert!(trip(date(2024, 5, 1), date(2024, 5, 1)).validate().is_ok());
    }

    #[test]
    fn test_validate_missing_places() {
        let mut request = trip(date(2024, 5, 1), date(2024, 5, 2));
        request.destination = "   ".to_string();

        match request.validate() {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, ERR_MISSING_PLACES),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_end_before_start() {
        let request = trip(date(2024, 5, 3), date(2024, 5, 1));

        match request.validate() {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, ERR_DATE_ORDER),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_trip_length_limit() {
        let start = date(2024, 5, 1);
        let last_allowed = start + chrono::Duration::days(MAX_TRIP_DAYS as i64 - 1);

        assert_eq!(trip(start, last_allowed).day_count(), MAX_TRIP_DAYS);
        assert!(trip(start, last_allowed).validate().is_ok());

        let one_over = last_allowed + chrono::Duration::days(1);
        match trip(start, one_over).validate() {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, ERR_TRIP_TOO_LONG),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_extreme_date_range() {
        let json = r#"{
            "origin": "a",
            "destination": "b",
            "start_date": "-262143-01-01",
            "end_date": "+262142-12-31"
        }"#;
        let request: TripRequest = serde_json::from_str(json).unwrap();

        assert!(matches!(request.validate(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_day_count_inclusive() {
        assert_eq!(trip(date(2024, 5, 1), date(2024, 5, 1)).day_count(), 1);
        assert_eq!(trip(date(2024, 2, 27), date(2024, 3, 1)).day_count(), 4);
    }

    #[test]
    fn test_defaults() {
        let today = date(2024, 12, 31);
        let defaults = TripRequest::defaults(today);

        assert_eq!(defaults.start_date, today);
        assert_eq!(defaults.end_date, date(2025, 1, 1));
        assert_eq!(defaults.interests, vec![Interest::Food, Interest::Museums]);
        assert_eq!(defaults.pace, Pace::Normal);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "origin": "Hanoi",
            "destination": "Hue",
            "start_date": "2024-05-01",
            "end_date": "2024-05-02"
        }"#;
        let request: TripRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.interests, vec![Interest::Food, Interest::Museums]);
        assert_eq!(request.pace, Pace::Normal);
    }

    #[test]
    fn test_deserialize_rejects_unknown_interest() {
        let json = r#"{
            "origin": "Hanoi",
            "destination": "Hue",
            "start_date": "2024-05-01",
            "end_date": "2024-05-02",
            "interests": ["skydiving"]
        }"#;
        assert!(serde_json::from_str::<TripRequest>(json).is_err());
    }
}
