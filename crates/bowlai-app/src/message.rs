//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Text pasted into the terminal (also how file drops arrive)
    Paste(String),

    /// Periodic tick from the event loop
    Tick,

    /// Terminal was resized; `compact` is true when the nav links do not fit
    Resized { compact: bool },

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to a path through the routing table
    Navigate(String),
    /// Return to the previous path
    Back,
    /// Move to the next/previous nav link
    NextNavLink,
    PreviousNavLink,

    // ─────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    /// The view measured the current page; `max` is the largest useful offset
    ScrollBounds { max: u16 },

    // ─────────────────────────────────────────────────────────
    // Chrome (theme, menus, alert)
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    ToggleUserMenu,
    ToggleSidebar,
    /// Move the highlight inside the open menu (user menu or sidebar)
    MenuUp,
    MenuDown,
    /// Activate the highlighted menu entry
    MenuSelect,
    /// Close whatever overlay is open
    CloseOverlay,
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Upload & analysis
    // ─────────────────────────────────────────────────────────
    /// Open the "Choose Video File" path prompt
    OpenPathPrompt,
    /// Replace the path prompt text
    PathInput { text: String },
    /// Validate the prompt text as a file path
    SubmitPath,
    CancelPathInput,
    /// A path arrived from a paste/drop outside the prompt
    PathDropped(String),
    StartAnalysis,
    RemoveFile,
    /// Timer tick of the fake progress run `run_id`
    ProgressTick { run_id: u64 },

    // ─────────────────────────────────────────────────────────
    // Lists (dashboard recent analyses, history cards)
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    /// Open the report of the selected record
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // History filters
    // ─────────────────────────────────────────────────────────
    StartSearch,
    SearchInput { text: String },
    EndSearch,
    CycleStatusFilter,
    CycleDateRange,
}
