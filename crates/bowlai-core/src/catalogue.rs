//! Literal mock data shown by the views
//!
//! Nothing here is persisted or derived. The functions build fresh values on
//! each call so callers can own them.

use chrono::{NaiveDate, NaiveTime};

use crate::types::{
    AnalysisRecord, AnalysisReport, CameraAngle, DetailedMetric, LegalityStatus, MetricBound,
    MetricStatus, ScoreBar, SessionScore, StatCard,
};

/// Number of history records the dashboard lists as "Recent Analyses"
pub const RECENT_COUNT: usize = 3;

/// Unread notifications shown on the navigation bar badge
pub const NOTIFICATION_COUNT: usize = 3;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &'static str,
    date: NaiveDate,
    time: NaiveTime,
    elbow: f64,
    accuracy: u8,
    status: LegalityStatus,
    angle: CameraAngle,
) -> AnalysisRecord {
    AnalysisRecord {
        id,
        name,
        date,
        time,
        elbow,
        accuracy,
        status,
        angle: Some(angle),
    }
}

/// The six past analyses listed on the history page, in display order
pub fn history_records() -> Vec<AnalysisRecord> {
    use CameraAngle::{Front, Side};
    use LegalityStatus::{Legal, Review};

    vec![
        record(1, "Fast Bowling #12", date(2025, 11, 20), time(14, 30), 164.2, 96, Legal, Front),
        record(2, "Practice Session #8", date(2025, 11, 18), time(10, 15), 167.8, 89, Review, Side),
        record(3, "Match Simulation #5", date(2025, 11, 15), time(16, 45), 163.5, 94, Legal, Front),
        record(4, "Training Drill #22", date(2025, 11, 12), time(9, 20), 162.1, 97, Legal, Side),
        record(5, "Speed Test #3", date(2025, 11, 10), time(15, 0), 168.5, 85, Review, Front),
        record(6, "Form Check #15", date(2025, 11, 8), time(11, 30), 161.8, 98, Legal, Side),
    ]
}

/// The dashboard's "Recent Analyses" list (no camera angle is shown there)
pub fn recent_analyses() -> Vec<AnalysisRecord> {
    history_records()
        .into_iter()
        .take(RECENT_COUNT)
        .map(|r| AnalysisRecord { angle: None, ..r })
        .collect()
}

/// Headline statistics on the dashboard
pub fn dashboard_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Analyses",
            value: "24",
            trend: "+12%",
        },
        StatCard {
            label: "Avg Elbow Angle",
            value: "163.5°",
            trend: "+2.3°",
        },
        StatCard {
            label: "Legal Actions",
            value: "87%",
            trend: "+5%",
        },
        StatCard {
            label: "This Month",
            value: "8",
            trend: "+3",
        },
    ]
}

/// Bars of the dashboard's "Performance Summary" card
pub fn performance_summary() -> Vec<ScoreBar> {
    vec![
        ScoreBar {
            label: "Overall Score",
            score: 92,
        },
        ScoreBar {
            label: "Consistency",
            score: 88,
        },
    ]
}

/// Bullet points of the dashboard's "Quick Tips" card
pub fn quick_tips() -> [&'static str; 3] {
    [
        "Maintain elbow angle below 15° extension",
        "Keep consistent stride length",
        "Focus on shoulder rotation timing",
    ]
}

/// Bullet points of the upload page's "Tips for Best Results" card
pub fn upload_tips() -> [&'static str; 4] {
    [
        "Ensure good lighting and clear visibility of the bowler",
        "Use a steady camera or tripod to avoid shaky footage",
        "Capture the complete bowling action from run-up to follow-through",
        "Avoid obstructions between the camera and the bowler",
    ]
}

fn report_metrics() -> Vec<DetailedMetric> {
    vec![
        DetailedMetric {
            key: "elbowExtension",
            name: "Elbow Extension",
            value: 14.2,
            bound: MetricBound::Max(15.0),
            unit: "°",
            status: MetricStatus::Legal,
        },
        DetailedMetric {
            key: "shoulderRotation",
            name: "Shoulder Rotation",
            value: 87.0,
            bound: MetricBound::Target(90.0),
            unit: "°",
            status: MetricStatus::Good,
        },
        DetailedMetric {
            key: "kneeAngle",
            name: "Knee Angle",
            value: 143.0,
            bound: MetricBound::Target(140.0),
            unit: "°",
            status: MetricStatus::Good,
        },
        DetailedMetric {
            key: "strideLength",
            name: "Stride Length",
            value: 2.3,
            bound: MetricBound::Target(2.5),
            unit: "m",
            status: MetricStatus::Acceptable,
        },
        DetailedMetric {
            key: "releaseHeight",
            name: "Release Height",
            value: 2.8,
            bound: MetricBound::Target(2.7),
            unit: "m",
            status: MetricStatus::Excellent,
        },
        DetailedMetric {
            key: "followThrough",
            name: "Follow Through",
            value: 95.0,
            bound: MetricBound::Target(90.0),
            unit: "%",
            status: MetricStatus::Excellent,
        },
    ]
}

/// Build the detailed report for a route id.
///
/// Ids naming a literal history record take that record's summary fields
/// (name, date, time, status, elbow angle, accuracy). Any other id gets the
/// default payload. The metric breakdown, recommendations and comparison
/// chart are the same literals for every id.
pub fn report_for(id: &str) -> AnalysisReport {
    let mut report = AnalysisReport {
        id: id.to_string(),
        name: "Fast Bowling #12",
        date: date(2025, 11, 20),
        time: time(14, 30),
        status: LegalityStatus::Legal,
        elbow_angle: 164.2,
        accuracy: 96,
        overall_score: 92,
        video_url: "/sample-video.mp4",
        metrics: report_metrics(),
        recommendations: vec![
            "Maintain your current elbow angle - excellent ICC compliance",
            "Consider increasing stride length by 8cm for more power",
            "Shoulder rotation timing is good, maintain consistency",
            "Follow-through technique is excellent, keep it up",
        ],
        comparison: vec![
            SessionScore {
                session: "Session 1",
                score: 85,
            },
            SessionScore {
                session: "Session 2",
                score: 88,
            },
            SessionScore {
                session: "Session 3",
                score: 90,
            },
            SessionScore {
                session: "Current",
                score: 92,
            },
        ],
    };

    let matched = id
        .parse::<u32>()
        .ok()
        .and_then(|n| history_records().into_iter().find(|r| r.id == n));

    if let Some(record) = matched {
        report.name = record.name;
        report.date = record.date;
        report.time = record.time;
        report.status = record.status;
        report.elbow_angle = record.elbow;
        report.accuracy = record.accuracy;
    } else {
        tracing::debug!("No history record for report id {:?}, using default payload", id);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_has_six_records_in_order() {
        let ids: Vec<u32> = history_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_history_record_literals() {
        let records = history_records();
        let speed = &records[4];
        assert_eq!(speed.name, "Speed Test #3");
        assert_eq!(speed.display_date(), "Nov 10, 2025");
        assert_eq!(speed.display_time(), "15:00");
        assert_eq!(speed.elbow, 168.5);
        assert_eq!(speed.accuracy, 85);
        assert_eq!(speed.status, LegalityStatus::Review);
        assert_eq!(speed.angle, Some(CameraAngle::Front));
    }

    #[test]
    fn test_legal_records() {
        let legal: Vec<u32> = history_records()
            .iter()
            .filter(|r| r.status == LegalityStatus::Legal)
            .map(|r| r.id)
            .collect();
        assert_eq!(legal, vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_recent_analyses_are_first_three_without_angle() {
        let recent = recent_analyses();
        assert_eq!(recent.len(), RECENT_COUNT);
        assert_eq!(recent[0].name, "Fast Bowling #12");
        assert_eq!(recent[2].name, "Match Simulation #5");
        assert!(recent.iter().all(|r| r.angle.is_none()));
    }

    #[test]
    fn test_report_for_unknown_id_uses_default_payload() {
        let report = report_for("7");
        assert_eq!(report.id, "7");
        assert_eq!(report.name, "Fast Bowling #12");
        assert_eq!(report.overall_score, 92);
        assert_eq!(report.metrics.len(), 6);
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(report.comparison.last().map(|s| s.score), Some(92));
    }

    #[test]
    fn test_report_for_non_numeric_id_uses_default_payload() {
        let report = report_for("abc");
        assert_eq!(report.name, "Fast Bowling #12");
        assert_eq!(report.elbow_angle, 164.2);
    }

    #[test]
    fn test_report_for_known_id_takes_record_summary() {
        let report = report_for("2");
        assert_eq!(report.name, "Practice Session #8");
        assert_eq!(report.status, LegalityStatus::Review);
        assert_eq!(report.elbow_angle, 167.8);
        assert_eq!(report.accuracy, 89);
        // Breakdown stays literal
        assert_eq!(report.metrics, report_for("7").metrics);
    }

    #[test]
    fn test_elbow_extension_metric_has_max_bound() {
        let report = report_for("1");
        let elbow = &report.metrics[0];
        assert_eq!(elbow.key, "elbowExtension");
        assert_eq!(elbow.bound, MetricBound::Max(15.0));
        assert_eq!(elbow.status, MetricStatus::Legal);
    }

    #[test]
    fn test_dashboard_literals() {
        let stats = dashboard_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[1].value, "163.5°");
        let summary = performance_summary();
        assert_eq!(summary[0].score, 92);
        assert_eq!(summary[1].score, 88);
    }
}
