//! Render helpers for widget and view tests

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Terminal backed by an in-memory buffer
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
        }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw");
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw(|f| f.render_widget(widget, area));
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text of one row, trailing spaces trimmed
    pub fn row(&self, y: u16) -> String {
        let buf = self.buffer();
        let mut line = String::new();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        line.trim_end().to_string()
    }

    /// Whole screen as newline-separated rows
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }
}
