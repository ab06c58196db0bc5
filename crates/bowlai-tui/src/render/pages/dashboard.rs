//! Dashboard: quick actions, headline stats and recent analyses

use bowlai_app::AppState;
use bowlai_core::{dashboard_stats, performance_summary, quick_tips, recent_analyses};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::{meter, Button, ButtonVariant};

use super::{badge, gap};

struct QuickAction {
    key: Option<&'static str>,
    title: &'static str,
    desc: &'static str,
}

const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        key: Some("n"),
        title: "New Analysis",
        desc: "Upload and analyze a new video",
    },
    QuickAction {
        key: Some("v"),
        title: "View History",
        desc: "Browse past analyses",
    },
    QuickAction {
        key: None,
        title: "Reports",
        desc: "View detailed reports",
    },
];

const BAR_WIDTH: usize = 30;

pub fn build(state: &AppState, page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let icons = theme.icons;

    page.blank();
    page.title("Dashboard");
    page.text(
        "Welcome back! Here's your bowling performance overview",
        styles::text_secondary(p),
    );

    // Quick actions
    page.blank();
    for action in &QUICK_ACTIONS {
        let key = match action.key {
            Some(key) => Span::styled(format!("[{}] ", key), styles::keybinding(p)),
            None => Span::raw("    "),
        };
        page.push(Line::from(vec![
            key,
            Span::styled(format!("{:<14}", action.title), styles::heading(p)),
            Span::styled(action.desc, styles::text_muted(p)),
        ]));
    }

    // Stats
    page.blank();
    for stat in dashboard_stats() {
        page.push(Line::from(vec![
            Span::styled(format!("{:>8}", stat.value), styles::heading(p)),
            Span::raw("  "),
            Span::styled(format!("{:<18}", stat.label), styles::text_secondary(p)),
            Span::styled(
                format!("{} {}", icons.trend_up(), stat.trend),
                styles::badge(p, bowlai_core::StatusTone::Positive),
            ),
        ]));
    }

    // Recent analyses
    page.section("Recent Analyses");
    page.push(Line::from(vec![
        Span::styled("[v] ", styles::keybinding(p)),
        Span::styled(format!("View All {}", icons.chevron_right()), styles::accent(p)),
    ]));
    for (i, record) in recent_analyses().iter().enumerate() {
        let selected = i == state.dashboard.selected;
        page.blank();

        let name_style = if selected {
            styles::selected_row(p)
        } else {
            styles::heading(p)
        };
        let marker = if selected { icons.chevron_right() } else { " " };
        page.focus_next_if(selected);
        page.push(Line::from(vec![
            Span::styled(format!("{} ", marker), styles::accent(p)),
            Span::styled(record.name, name_style),
        ]));
        page.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", icons.calendar(), record.display_date()),
                styles::text_muted(p),
            ),
            gap(),
            Span::styled(record.display_time(), styles::text_muted(p)),
        ]));

        let mut facts = vec![
            Span::raw("  "),
            Span::styled(format!("{}\u{b0}", record.elbow), styles::accent_bold(p)),
            Span::styled(" Elbow Angle", styles::text_muted(p)),
            gap(),
            Span::styled(format!("{}%", record.accuracy), styles::heading(p)),
            Span::styled(" Accuracy", styles::text_muted(p)),
            gap(),
            badge(record.status.label(), record.status.tone(), p),
        ];
        if selected {
            facts.push(gap());
            facts.extend(
                Button::new("View", p)
                    .variant(ButtonVariant::Secondary)
                    .key_hint("Enter")
                    .spans(),
            );
        }
        page.push(Line::from(facts));
        page.extend_focus_if(selected);
    }

    // Performance summary
    page.section("Performance Summary");
    for bar in performance_summary() {
        page.push(Line::from(vec![
            Span::styled(format!("{:<16}", bar.label), styles::text_secondary(p)),
            Span::styled(format!("{}/100", bar.score), styles::heading(p)),
        ]));
        page.push(Line::from(meter::percent_bar(
            bar.score,
            BAR_WIDTH.min(page.width()),
            styles::accent(p),
            Style::default().fg(p.border),
        )));
    }

    // Tips
    page.section("Quick Tips");
    for tip in quick_tips() {
        page.bullet(icons.check(), styles::accent(p), tip, styles::text_secondary(p));
    }

    // Call to action
    page.section("Ready for more?");
    page.text(
        "Upload a new video to continue improving",
        styles::text_secondary(p),
    );
    page.blank();
    page.push(
        Button::new("New Analysis", p)
            .icon(icons.upload())
            .key_hint("n")
            .line(),
    );
    page.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::ops::Range;

    fn render(state: &AppState) -> (String, Option<Range<usize>>) {
        let theme = Theme::new(state.theme.mode(), state.settings.ui.icons);
        let mut page = PageLines::new(theme, 100);
        build(state, &mut page);
        let (lines, focus) = page.into_parts();
        let text = lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        (text, focus)
    }

    #[test]
    fn test_dashboard_copy() {
        let state = AppState::new().with_initial_path("/dashboard");
        let (text, _) = render(&state);

        assert!(text.contains("Welcome back! Here's your bowling performance overview"));
        assert!(text.contains("Total Analyses"));
        assert!(text.contains("163.5\u{b0}"));
        assert!(text.contains("+12%"));
        assert!(text.contains("Fast Bowling #12"));
        assert!(text.contains("Match Simulation #5"));
        assert!(!text.contains("Training Drill #22"));
        assert!(text.contains("92/100"));
        assert!(text.contains("88/100"));
        assert!(text.contains("Focus on shoulder rotation timing"));
    }

    #[test]
    fn test_selected_row_is_focused() {
        let mut state = AppState::new().with_initial_path("/dashboard");
        state.dashboard.selected = 2;
        let (text, focus) = render(&state);

        let lines: Vec<&str> = text.lines().collect();
        let focus = focus.unwrap();
        assert!(lines[focus.start].contains("Match Simulation #5"));
        assert!(lines[focus.end - 1].contains("[Enter]"));
        assert_eq!(text.matches("[Enter]").count(), 1);
    }
}
