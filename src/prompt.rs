//! Itinerary prompt construction
//!
//! Turns a [`TripRequest`] into the instruction text sent to the model: one
//! header describing the trip and the required output layout, followed by an
//! empty Morning/Afternoon/Evening skeleton for every day of the trip.

use crate::models::TripRequest;

const FORMAT_RULES: &str = "\nFORMAT RULES (IMPORTANT):\n\
- Output must be **very clearly structured**.\n\
- For each day, use exactly this layout:\n\
\x20 Day X – YYYY-MM-DD\n\
\x20 Morning:\n\
\x20   • one sentence (< 25 words)\n\
\x20 Afternoon:\n\
\x20   • one sentence (< 25 words)\n\
\x20 Evening:\n\
\x20   • one sentence (< 25 words)\n\
- Make sure each section is on **its own line**.\n\
- Do NOT merge multiple periods into one paragraph.\n\
- Keep all descriptions concise, factual, and easy to scan.\n\
- After each sentence is a new line.\n\
- Sort sentence by date and time";

/// Build the generation prompt for a trip
///
/// Callers validate date ordering first; an inverted range yields a single
/// skeleton block for the start date.
pub fn build_prompt(trip: &TripRequest) -> String {
    let days = trip.day_count();

    let interests = if trip.interests.is_empty() {
        "general".to_string()
    } else {
        trip.interests
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut blocks = Vec::with_capacity(days as usize + 1);
    blocks.push(format!(
        "Create a clean, well-formatted day-by-day itinerary from {} to {}.\n\
         Dates: {} to {} ({} days)\n\
         Interests: {}\n\
         Pace: {}\n{}",
        trip.origin,
        trip.destination,
        trip.start_date.format("%Y-%m-%d"),
        trip.end_date.format("%Y-%m-%d"),
        days,
        interests,
        trip.pace,
        FORMAT_RULES,
    ));

    for (index, date) in trip.start_date.iter_days().take(days as usize).enumerate() {
        blocks.push(format!(
            "\nDay {} – {}\nMorning:\nAfternoon:\nEvening:",
            index + 1,
            date.format("%Y-%m-%d")
        ));
    }

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interest, Pace};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(start: NaiveDate, end: NaiveDate) -> TripRequest {
        TripRequest {
            origin: "Ho Chi Minh City".to_string(),
            destination: "Da Nang".to_string(),
            start_date: start,
            end_date: end,
            interests: vec![Interest::Food, Interest::Museums],
            pace: Pace::Relaxed,
        }
    }

    #[test]
    fn test_block_count_matches_day_count() {
        for length in 0..10u64 {
            let start = date(2024, 2, 25);
            let end = start + chrono::Duration::days(length as i64);
            let request = trip(start, end);

            let prompt = build_prompt(&request);
            let blocks = prompt.matches("\nDay ").count();

            assert_eq!(blocks as u64, request.day_count());
            assert_eq!(blocks as u64, length + 1);
        }
    }

    #[test]
    fn test_single_day_trip() {
        let prompt = build_prompt(&trip(date(2024, 5, 1), date(2024, 5, 1)));

        assert!(prompt.contains("Dates: 2024-05-01 to 2024-05-01 (1 days)"));
        assert!(prompt.contains("\nDay 1 – 2024-05-01\nMorning:\nAfternoon:\nEvening:"));
        assert!(!prompt.contains("Day 2 –"));
    }

    #[test]
    fn test_days_cross_month_boundary() {
        let prompt = build_prompt(&trip(date(2024, 2, 28), date(2024, 3, 1)));

        assert!(prompt.contains("Day 1 – 2024-02-28"));
        assert!(prompt.contains("Day 2 – 2024-02-29"));
        assert!(prompt.contains("Day 3 – 2024-03-01"));
        assert!(prompt.ends_with("Day 3 – 2024-03-01\nMorning:\nAfternoon:\nEvening:"));
    }

    #[test]
    fn test_header_lines() {
        let prompt = build_prompt(&trip(date(2024, 5, 1), date(2024, 5, 2)));

        assert!(prompt.starts_with(
            "Create a clean, well-formatted day-by-day itinerary from Ho Chi Minh City to Da Nang.\n"
        ));
        assert!(prompt.contains("\nInterests: food, museums\n"));
        assert!(prompt.contains("\nPace: relaxed\n\nFORMAT RULES (IMPORTANT):\n"));
        assert!(prompt.contains("\n  Day X – YYYY-MM-DD\n  Morning:\n    • one sentence (< 25 words)\n"));
        assert!(prompt.contains("- Sort sentence by date and time\n\nDay 1 – 2024-05-01"));
    }

    #[test]
    fn test_no_interests_means_general() {
        let mut request = trip(date(2024, 5, 1), date(2024, 5, 1));
        request.interests.clear();

        assert!(build_prompt(&request).contains("\nInterests: general\n"));
    }

    #[test]
    fn test_deterministic() {
        let request = trip(date(2024, 5, 1), date(2024, 5, 4));
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }
}
