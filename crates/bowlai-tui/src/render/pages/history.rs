//! Filterable list of past analyses

use bowlai_app::{AppState, UiMode};
use bowlai_core::result_label;
use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::{Button, ButtonVariant, TextInput};

use super::{badge, gap};

const SEARCH_WIDTH: usize = 28;

pub fn build(state: &AppState, page: &mut PageLines) {
    let theme = page.theme();
    let p = theme.palette;
    let icons = theme.icons;
    let filter = &state.history.filter;

    page.blank();
    page.title("Analysis History");
    page.text(
        "View and manage all your past bowling analyses",
        styles::text_secondary(p),
    );
    page.push(
        Button::new("Export All", p)
            .variant(ButtonVariant::Secondary)
            .line(),
    );
    page.blank();

    // Filters
    let searching = state.ui_mode == UiMode::SearchInput;
    let search = TextInput::new(&filter.search, p)
        .prefix(icons.search())
        .placeholder("Search analyses...")
        .focused(searching);
    let mut spans = vec![Span::styled("[/] ", styles::keybinding(p))];
    spans.extend(
        search
            .spans(SEARCH_WIDTH)
            .into_iter()
            .map(|s| Span::styled(s.content.into_owned(), s.style)),
    );
    page.push(Line::from(spans));
    page.push(Line::from(vec![
        Span::styled("[f] ", styles::keybinding(p)),
        Span::styled(
            format!("{} {}", icons.filter(), filter.status.label()),
            styles::text_primary(p),
        ),
        gap(),
        Span::styled("[d] ", styles::keybinding(p)),
        Span::styled(
            format!("{} {}", icons.calendar(), filter.range.label()),
            styles::text_primary(p),
        ),
        gap(),
        Span::styled(result_label(state.history.visible.len()), styles::text_muted(p)),
    ]));
    page.rule();

    if state.history.visible.is_empty() {
        page.blank();
        page.push(Line::from(Span::styled(icons.video(), styles::text_muted(p))).centered());
        page.push(Line::from(Span::styled("No analyses found", styles::heading(p))).centered());
        page.centered(
            "Try adjusting your filters or search term",
            styles::text_muted(p),
        );
        page.blank();
        return;
    }

    for (i, record) in state.history.visible.iter().enumerate() {
        let selected = i == state.history.selected;
        page.blank();

        let marker = if selected { icons.chevron_right() } else { " " };
        let name_style = if selected {
            styles::selected_row(p)
        } else {
            styles::heading(p)
        };
        page.focus_next_if(selected);
        page.push(Line::from(vec![
            Span::styled(format!("{} ", marker), styles::accent(p)),
            Span::styled(format!("{} ", icons.video()), styles::accent(p)),
            Span::styled(record.name, name_style),
            gap(),
            badge(record.status.label(), record.status.tone(), p),
        ]));

        let mut meta = vec![
            Span::raw("    "),
            Span::styled(
                format!("{} {}", icons.calendar(), record.display_date()),
                styles::text_muted(p),
            ),
            gap(),
            Span::styled(record.display_time(), styles::text_muted(p)),
        ];
        if let Some(angle) = record.angle {
            meta.push(gap());
            meta.push(Span::styled(
                format!("{} View", angle.label()),
                styles::text_muted(p),
            ));
        }
        page.push(Line::from(meta));

        let mut facts = vec![
            Span::raw("    "),
            Span::styled(format!("{}\u{b0}", record.elbow), styles::accent_bold(p)),
            Span::styled(" Elbow Angle", styles::text_muted(p)),
            gap(),
            Span::styled(format!("{}%", record.accuracy), styles::heading(p)),
            Span::styled(" Accuracy", styles::text_muted(p)),
        ];
        if selected {
            facts.push(gap());
            facts.extend(Button::new("View Details", p).key_hint("Enter").spans());
        }
        page.push(Line::from(facts));
        page.extend_focus_if(selected);
    }
    page.blank();
}
