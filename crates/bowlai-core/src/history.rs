//! Filtering of the analysis history
//!
//! Three predicates narrow the list: legality status, a relative date range
//! and a case-insensitive name search. They are ANDed together and the input
//! order is preserved, so applying them in any order yields the same list.

use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};

use crate::clock::Clock;
use crate::error::Error;
use crate::types::{AnalysisRecord, LegalityStatus};

/// Status dropdown on the history page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Legal,
    Review,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Legal => "Legal",
            StatusFilter::Review => "Review",
        }
    }

    /// Cycle to the next option (All → Legal → Review → All)
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Legal,
            StatusFilter::Legal => StatusFilter::Review,
            StatusFilter::Review => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: LegalityStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Legal => status == LegalityStatus::Legal,
            StatusFilter::Review => status == LegalityStatus::Review,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "legal" => Ok(StatusFilter::Legal),
            "review" => Ok(StatusFilter::Review),
            other => Err(Error::config(format!(
                "unknown status filter '{other}' (expected all, legal or review)"
            ))),
        }
    }
}

/// Date dropdown on the history page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    PastWeek,
    PastMonth,
}

impl DateRange {
    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All Time",
            DateRange::PastWeek => "Past Week",
            DateRange::PastMonth => "Past Month",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DateRange::All => DateRange::PastWeek,
            DateRange::PastWeek => DateRange::PastMonth,
            DateRange::PastMonth => DateRange::All,
        }
    }

    /// Earliest instant a record may fall on, or `None` for no bound
    pub fn lower_bound(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            DateRange::All => None,
            DateRange::PastWeek => Some(now - Duration::days(7)),
            DateRange::PastMonth => Some(now - Duration::days(30)),
        }
    }
}

impl FromStr for DateRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "week" => Ok(DateRange::PastWeek),
            "month" => Ok(DateRange::PastMonth),
            other => Err(Error::config(format!(
                "unknown date range '{other}' (expected all, week or month)"
            ))),
        }
    }
}

/// One filtering rule, evaluated against a fixed `now`
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Status(StatusFilter),
    Since(Option<NaiveDateTime>),
    NameContains(String),
}

impl Predicate {
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        match self {
            Predicate::Status(filter) => filter.matches(record.status),
            Predicate::Since(None) => true,
            // Record dates count from local midnight
            Predicate::Since(Some(bound)) => record.date.and_hms_opt(0, 0, 0) >= Some(*bound),
            // Whitespace only skips the filter; otherwise the query is matched as typed
            Predicate::NameContains(query) => {
                query.trim().is_empty()
                    || record.name.to_lowercase().contains(&query.to_lowercase())
            }
        }
    }

    /// Keep the records this predicate accepts, in order
    pub fn apply(&self, records: &[AnalysisRecord]) -> Vec<AnalysisRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Combined filter state of the history page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub status: StatusFilter,
    pub range: DateRange,
    pub search: String,
}

impl HistoryFilter {
    /// Resolve the filter into concrete predicates at `now`
    pub fn predicates(&self, now: NaiveDateTime) -> [Predicate; 3] {
        [
            Predicate::Status(self.status),
            Predicate::Since(self.range.lower_bound(now)),
            Predicate::NameContains(self.search.clone()),
        ]
    }

    pub fn matches(&self, record: &AnalysisRecord, now: NaiveDateTime) -> bool {
        self.predicates(now).iter().all(|p| p.matches(record))
    }

    /// Filter `records` using the clock's current time
    pub fn apply(&self, records: &[AnalysisRecord], clock: &dyn Clock) -> Vec<AnalysisRecord> {
        let now = clock.now();
        records
            .iter()
            .filter(|r| self.matches(r, now))
            .cloned()
            .collect()
    }
}

/// Result count caption (`1 result`, `4 results`)
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::history_records;
    use crate::clock::{FixedClock, MockClock};
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn ids(records: &[AnalysisRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    fn clock() -> FixedClock {
        FixedClock(at(2025, 11, 21, 12))
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let all = history_records();
        let out = HistoryFilter::default().apply(&all, &clock());
        assert_eq!(out, all);
    }

    #[test]
    fn test_legal_status_filter() {
        let filter = HistoryFilter {
            status: StatusFilter::Legal,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_review_status_filter() {
        let filter = HistoryFilter {
            status: StatusFilter::Review,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![2, 5]);
    }

    #[test]
    fn test_legal_plus_search() {
        let filter = HistoryFilter {
            status: StatusFilter::Legal,
            search: "Fast".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filter = HistoryFilter {
            search: "sEsSiOn".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![2]);
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let filter = HistoryFilter {
            search: "#8 ".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&history_records(), &clock()).is_empty());

        let filter = HistoryFilter {
            search: "Session ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![2]);
    }

    #[test]
    fn test_blank_search_is_skipped() {
        let filter = HistoryFilter {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&history_records(), &clock()).len(), 6);
    }

    #[test]
    fn test_past_week_excludes_strictly_earlier_dates() {
        // now - 7d = Nov 14 12:00; Nov 15 midnight is kept, Nov 12 is not
        let filter = HistoryFilter {
            range: DateRange::PastWeek,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &clock())), vec![1, 2, 3]);
    }

    #[test]
    fn test_past_week_boundary_is_inclusive() {
        let records = history_records();
        // now - 7d is exactly Nov 15 midnight, the date of record 3
        let clock = FixedClock(at(2025, 11, 22, 0));
        let filter = HistoryFilter {
            range: DateRange::PastWeek,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&records, &clock)), vec![1, 2, 3]);
    }

    #[test]
    fn test_past_month_with_mock_clock() {
        let mut mock = MockClock::new();
        mock.expect_now().times(1).return_const(at(2025, 12, 10, 9));

        // now - 30d = Nov 10 09:00; Nov 10 midnight is strictly earlier
        let filter = HistoryFilter {
            range: DateRange::PastMonth,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&history_records(), &mock)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_date_range_far_in_future_is_empty() {
        let clock = FixedClock(at(2026, 6, 1, 0));
        let filter = HistoryFilter {
            range: DateRange::PastMonth,
            ..Default::default()
        };
        let out = filter.apply(&history_records(), &clock);
        assert!(out.is_empty());
        assert_eq!(result_label(out.len()), "0 results");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = HistoryFilter {
            status: StatusFilter::Legal,
            range: DateRange::PastMonth,
            search: "i".to_string(),
        };
        let once = filter.apply(&history_records(), &clock());
        let twice = filter.apply(&once, &clock());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_predicates_commute() {
        let filter = HistoryFilter {
            status: StatusFilter::Legal,
            range: DateRange::PastWeek,
            search: "s".to_string(),
        };
        let now = clock().now();
        let [a, b, c] = filter.predicates(now);
        let records = history_records();

        let orders = [
            [&a, &b, &c],
            [&a, &c, &b],
            [&b, &a, &c],
            [&b, &c, &a],
            [&c, &a, &b],
            [&c, &b, &a],
        ];
        let expected = filter.apply(&records, &clock());
        for order in orders {
            let out = order
                .iter()
                .fold(records.clone(), |acc, p| p.apply(&acc));
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_result_label() {
        assert_eq!(result_label(1), "1 result");
        assert_eq!(result_label(4), "4 results");
    }

    #[test]
    fn test_parse_and_cycle() {
        assert_eq!("LEGAL".parse::<StatusFilter>().unwrap(), StatusFilter::Legal);
        assert_eq!("week".parse::<DateRange>().unwrap(), DateRange::PastWeek);
        assert!("sometimes".parse::<StatusFilter>().is_err());
        assert!("year".parse::<DateRange>().is_err());
        assert_eq!(StatusFilter::Review.next(), StatusFilter::All);
        assert_eq!(DateRange::PastMonth.next(), DateRange::All);
        assert_eq!(DateRange::PastWeek.label(), "Past Week");
    }
}
