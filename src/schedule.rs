use std::collections::VecDeque;

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// parses an alarm time in 24-hour "HH:MM" format
/// zero padding is optional, so "9:30" and "09:30" are both fine
///
/// # Errors
/// out of range hours/minutes or anything that isn't two numbers
/// separated by a colon
pub fn parse_time(time: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
}

/// builds today's alarm queue from a set of times of day
///
/// each time becomes "today at HH:MM" on `reference`'s date with seconds
/// truncated to zero, the candidates are sorted ascending, and only those
/// strictly after `reference` survive. times already passed today are
/// dropped, not moved to tomorrow.
#[must_use]
pub fn compile(times: &[NaiveTime], reference: NaiveDateTime) -> VecDeque<NaiveDateTime> {
    let mut raw: Vec<NaiveDateTime> = times
        .iter()
        .filter_map(|time| NaiveTime::from_hms_opt(time.hour(), time.minute(), 0))
        .map(|time| reference.date().and_time(time))
        .collect();
    raw.sort_unstable();
    raw.into_iter().filter(|time| *time > reference).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn times(strs: &[&str]) -> Vec<NaiveTime> {
        strs.iter().map(|s| parse_time(s).unwrap()).collect()
    }

    #[test]
    fn parses_padded_and_unpadded_times() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("9:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time(" 23:59 ").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_and_malformed_times() {
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("10").is_err());
        assert!(parse_time("10:00:00").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn keeps_only_times_after_the_reference() {
        // reference 09:00:00 with one past, one exactly-now and one future time
        let queue = compile(&times(&["10:00", "08:00", "09:00"]), at(9, 0, 0));
        assert_eq!(queue, VecDeque::from([at(10, 0, 0)]));
    }

    #[test]
    fn a_time_equal_to_the_reference_is_excluded() {
        let queue = compile(&times(&["09:00"]), at(9, 0, 0));
        assert!(queue.is_empty());
    }

    #[test]
    fn seconds_on_the_reference_push_the_same_minute_into_the_past() {
        // 23:59:00 is before a 23:59:30 reference
        let queue = compile(&times(&["23:59"]), at(23, 59, 30));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_input_gives_an_empty_queue() {
        assert!(compile(&[], at(9, 0, 0)).is_empty());
    }

    #[test]
    fn queue_is_sorted_ascending_with_duplicates_preserved() {
        let queue = compile(
            &times(&["21:15", "06:30", "12:00", "12:00", "18:45"]),
            at(0, 0, 1),
        );
        assert_eq!(
            queue,
            VecDeque::from([
                at(6, 30, 0),
                at(12, 0, 0),
                at(12, 0, 0),
                at(18, 45, 0),
                at(21, 15, 0),
            ])
        );
        assert!(queue.iter().all(|time| *time > at(0, 0, 1)));
    }

    #[test]
    fn compile_is_deterministic() {
        let input = times(&["07:00", "22:10", "13:37"]);
        let reference = at(8, 15, 42);
        assert_eq!(compile(&input, reference), compile(&input, reference));
    }
}
