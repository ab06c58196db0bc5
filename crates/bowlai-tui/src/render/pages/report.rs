//! Detailed report for one analysis

use bowlai_core::{AnalysisReport, DetailedMetric, StatusTone};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::{meter, Button, ButtonVariant};

use super::{badge, gap};

const METRIC_BAR_WIDTH: usize = 40;
const CHART_BAR_WIDTH: usize = 40;

/// Report status badges use orange for "Review"
fn report_tone(report: &AnalysisReport) -> StatusTone {
    match report.status {
        bowlai_core::LegalityStatus::Legal => StatusTone::Positive,
        bowlai_core::LegalityStatus::Review => StatusTone::Warning,
    }
}

pub fn build(report: &AnalysisReport, page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let icons = theme.icons;

    page.blank();
    page.push(Line::from(vec![
        Span::styled("[Esc] ", styles::keybinding(p)),
        Span::styled(format!("{} Back", icons.arrow_left()), styles::text_secondary(p)),
    ]));
    page.blank();
    page.title(report.name);
    page.push(Line::from(vec![
        Span::styled(
            format!("{} {}", icons.calendar(), report.display_date()),
            styles::text_secondary(p),
        ),
        gap(),
        Span::styled(report.display_time(), styles::text_secondary(p)),
        gap(),
        badge(report.status.label(), report_tone(report), p),
    ]));
    let mut actions = Button::new("Share", p)
        .variant(ButtonVariant::Secondary)
        .spans();
    actions.push(Span::raw("  "));
    actions.extend(Button::new("Download Report", p).spans());
    page.push(Line::from(actions));

    // Summary cards
    page.blank();
    let summary = [
        ("Overall Score", format!("{}/100", report.overall_score)),
        ("Elbow Angle", format!("{}\u{b0}", report.elbow_angle)),
        ("Accuracy", format!("{}%", report.accuracy)),
        ("Status", report.status.label().to_string()),
    ];
    for (label, value) in summary {
        page.push(Line::from(vec![
            Span::styled(format!("{:>10}", value), styles::heading(p)),
            Span::raw("  "),
            Span::styled(label, styles::text_secondary(p)),
        ]));
    }

    page.section("Analysis Video");
    page.push(Line::from(vec![
        Span::styled(format!("{} ", icons.video()), styles::text_muted(p)),
        Span::styled("Video Player Placeholder", styles::text_muted(p)),
    ]));

    page.section("Biomechanical Metrics");
    for metric in &report.metrics {
        metric_rows(metric, page);
    }

    page.section("Progress Over Time");
    for item in &report.comparison {
        let mut spans = vec![Span::styled(
            format!("{:<12}", item.session),
            styles::text_muted(p),
        )];
        spans.extend(meter::percent_bar(
            item.score,
            CHART_BAR_WIDTH.min(page.width().saturating_sub(18)),
            styles::accent(p),
            Style::default().fg(p.border),
        ));
        spans.push(Span::styled(format!(" {}", item.score), styles::heading(p)));
        page.push(Line::from(spans));
    }

    page.section("AI Recommendations");
    for rec in &report.recommendations {
        page.bullet(icons.check(), styles::accent(p), rec, styles::text_secondary(p));
    }

    page.section("Next Steps");
    page.push(
        Button::new("Analyze Another Video", p)
            .icon(icons.video())
            .key_hint("a")
            .line(),
    );
    page.push(
        Button::new("View All Analyses", p)
            .variant(ButtonVariant::Secondary)
            .key_hint("h")
            .line(),
    );
    page.blank();
}

fn metric_rows(metric: &DetailedMetric, page: &mut PageLines) {
    let p = page.theme().palette;

    page.blank();
    page.push(Line::from(vec![
        Span::styled(format!("{:<22}", metric.name), styles::text_secondary(p)),
        badge(metric.status.label(), metric.status.tone(), p),
    ]));
    page.push(Line::from(vec![
        Span::styled(metric.value.to_string(), styles::heading(p)),
        Span::styled(format!(" {}", metric.unit), styles::text_muted(p)),
        Span::styled(
            format!(
                "  / {}: {}{}",
                metric.bound.label(),
                metric.bound.value(),
                metric.unit
            ),
            styles::text_muted(p),
        ),
    ]));
    page.push(Line::from(meter::bar(
        metric.fill_ratio(),
        METRIC_BAR_WIDTH.min(page.width()),
        Style::default().fg(p.tone(metric.status.tone())),
        Style::default().fg(p.border),
    )));
}
