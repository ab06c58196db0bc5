//! Domain types for analysis records and report metrics
//!
//! Every value here is literal display data. Nothing is measured or computed
//! from video; the types only give the views something well-typed to render.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Date format used everywhere a record date is shown (`Nov 20, 2025`)
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Time format used for record times (`14:30`)
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// Two-valued legality label attached to an analysis record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LegalityStatus {
    Legal,
    Review,
}

impl LegalityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LegalityStatus::Legal => "Legal",
            LegalityStatus::Review => "Review",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            LegalityStatus::Legal => StatusTone::Positive,
            LegalityStatus::Review => StatusTone::Caution,
        }
    }
}

impl std::fmt::Display for LegalityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Camera position a clip was recorded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CameraAngle {
    Front,
    Side,
}

impl CameraAngle {
    pub fn label(&self) -> &'static str {
        match self {
            CameraAngle::Front => "Front",
            CameraAngle::Side => "Side",
        }
    }
}

/// Color family a status badge is drawn in.
///
/// The views map tones onto palette colors so that the core crate stays
/// free of any terminal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Emerald: Legal, Excellent, Good
    Positive,
    /// Yellow: Acceptable, and Review on history cards
    Caution,
    /// Orange: Review on the detailed report
    Warning,
}

/// One past (simulated) bowling-action evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub id: u32,
    pub name: &'static str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Elbow angle in degrees
    pub elbow: f64,
    /// Accuracy percent
    pub accuracy: u8,
    pub status: LegalityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<CameraAngle>,
}

impl AnalysisRecord {
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn display_time(&self) -> String {
        self.time.format(DISPLAY_TIME_FORMAT).to_string()
    }

    /// Route path of the detailed report for this record
    pub fn report_path(&self) -> String {
        format!("/analysis/{}", self.id)
    }
}

/// Qualitative grade attached to a detailed metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricStatus {
    Excellent,
    Good,
    Acceptable,
    Legal,
    Review,
}

impl MetricStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Excellent => "Excellent",
            MetricStatus::Good => "Good",
            MetricStatus::Acceptable => "Acceptable",
            MetricStatus::Legal => "Legal",
            MetricStatus::Review => "Review",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            MetricStatus::Legal | MetricStatus::Excellent | MetricStatus::Good => {
                StatusTone::Positive
            }
            MetricStatus::Acceptable => StatusTone::Caution,
            MetricStatus::Review => StatusTone::Warning,
        }
    }
}

/// Reference value a metric is drawn against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricBound {
    /// Desired value; the metric may exceed it
    Target(f64),
    /// Hard ceiling (e.g. the 15° elbow extension limit)
    Max(f64),
}

impl MetricBound {
    pub fn value(&self) -> f64 {
        match self {
            MetricBound::Target(v) | MetricBound::Max(v) => *v,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricBound::Target(_) => "Target",
            MetricBound::Max(_) => "Max",
        }
    }
}

/// A single row of the biomechanical breakdown on the report page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedMetric {
    pub key: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub bound: MetricBound,
    pub unit: &'static str,
    pub status: MetricStatus,
}

impl DetailedMetric {
    /// Fraction of the bar to fill, clamped to `0.0..=1.0`
    pub fn fill_ratio(&self) -> f64 {
        let bound = self.bound.value();
        if bound <= 0.0 {
            return 0.0;
        }
        (self.value / bound).clamp(0.0, 1.0)
    }
}

/// Score of one session on the "Progress Over Time" chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionScore {
    pub session: &'static str,
    pub score: u8,
}

/// Everything the detailed report page renders for one id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Route parameter the report was opened with
    pub id: String,
    pub name: &'static str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: LegalityStatus,
    pub elbow_angle: f64,
    pub accuracy: u8,
    pub overall_score: u8,
    pub video_url: &'static str,
    pub metrics: Vec<DetailedMetric>,
    pub recommendations: Vec<&'static str>,
    pub comparison: Vec<SessionScore>,
}

impl AnalysisReport {
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn display_time(&self) -> String {
        self.time.format(DISPLAY_TIME_FORMAT).to_string()
    }
}

/// Headline number on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

/// Labelled 0-100 score bar (dashboard performance summary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBar {
    pub label: &'static str,
    pub score: u8,
}
