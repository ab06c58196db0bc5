//! Custom widget components

mod button;
mod dialog;
pub mod meter;
pub mod modal_overlay;
mod nav_bar;
mod sidebar;
mod text_input;
mod user_menu;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use dialog::{AlertDialog, PathPrompt};
pub use nav_bar::NavBar;
pub use sidebar::Sidebar;
pub use text_input::TextInput;
pub use user_menu::UserMenu;
