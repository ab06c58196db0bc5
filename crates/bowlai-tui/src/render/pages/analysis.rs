//! Upload screen with the simulated analysis run

use bowlai_app::progress::ProgressPhase;
use bowlai_app::AppState;
use bowlai_core::{upload_tips, UploadedFile};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::{meter, Button, ButtonSize, ButtonVariant};

pub fn build(state: &AppState, page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;

    page.blank();
    page.push(Span::styled("\u{26a1} AI-Powered Analysis", styles::accent_bold(p)));
    page.title("Analyze Your Action");
    page.text(
        "Upload your bowling video for instant biomechanical analysis",
        styles::text_secondary(p),
    );

    page.section("Upload Video");
    page.text(
        "We support a single upload flow \u{2014} simply choose your video and start analysis.",
        styles::text_secondary(p),
    );
    page.blank();

    match &state.analysis.file {
        None => drop_zone(page),
        Some(file) => preview(state, file, page),
    }

    page.section("Tips for Best Results");
    for tip in upload_tips() {
        page.bullet("\u{2022}", Style::default().fg(p.accent), tip, styles::text_secondary(p));
    }
    page.blank();
}

fn drop_zone(page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let edge = Style::default().fg(p.border);
    let dashes = "\u{254c}".repeat(page.width());

    page.push(Span::styled(dashes.clone(), edge));
    page.blank();
    page.push(Line::from(Span::styled(theme.icons.upload(), styles::accent_bold(p))).centered());
    page.push(Line::from(Span::styled("Upload Your Video", styles::heading(p))).centered());
    page.centered(
        "Drop a file onto the terminal or press o to browse",
        styles::text_secondary(p),
    );
    page.blank();
    page.push(
        Button::new("Choose Video File", p)
            .size(ButtonSize::Lg)
            .key_hint("o")
            .line()
            .centered(),
    );
    page.blank();
    page.push(
        Line::from(Span::styled(
            "MP4, AVI, MOV \u{2022} Max 100MB",
            styles::text_muted(p),
        ))
        .centered(),
    );
    page.blank();
    page.push(Span::styled(dashes, edge));
}

fn preview(state: &AppState, file: &UploadedFile, page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let progress = &state.analysis.progress;
    let running = progress.phase() == ProgressPhase::Running;

    page.push(Line::from(vec![
        Span::styled(format!("{} ", theme.icons.video()), styles::accent(p)),
        Span::styled(file.name().to_string(), styles::heading(p)),
    ]));
    page.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(file.display_size(), styles::text_secondary(p)),
        Span::raw("   "),
        Span::styled("[x] ", styles::keybinding(p)),
        Span::styled(theme.icons.close(), Style::default().fg(p.danger)),
    ]));

    page.section("Analysis Configuration");
    for (label, value) in [("Video", "Uploaded Video"), ("Analysis Type", "Biomechanical")] {
        page.push(Line::from(vec![
            Span::styled(format!("{:<16}", label), styles::text_secondary(p)),
            Span::styled(value, styles::heading(p)),
        ]));
    }

    if running {
        page.blank();
        page.push(Line::from(vec![
            Span::styled(format!("{:<16}", "Processing..."), styles::text_secondary(p)),
            Span::styled(format!("{}%", progress.value()), styles::heading(p)),
        ]));
        page.push(Line::from(meter::percent_bar(
            progress.value(),
            page.width().min(60),
            styles::accent(p),
            Style::default().fg(p.border),
        )));
    }

    page.blank();
    let label = if running { "Analyzing..." } else { "Start Analysis" };
    let mut spans = Button::new(label, p)
        .icon("\u{26a1}")
        .key_hint("s")
        .disabled(running)
        .spans();
    spans.push(Span::raw("  "));
    spans.extend(
        Button::new("Cancel", p)
            .variant(ButtonVariant::Secondary)
            .key_hint("c")
            .spans(),
    );
    page.push(Line::from(spans));
}
