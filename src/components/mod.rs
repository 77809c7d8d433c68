//! UI Components
//!
//! Leptos components of the dashboard.

mod header_bar;
mod tag_bar;
mod section_card;
mod item_card;
mod prompt_card;
mod toast_view;
mod settings_modal;
mod help_overlay;
mod footer_notes;

pub use header_bar::HeaderBar;
pub use tag_bar::TagBar;
pub use section_card::SectionCard;
pub use item_card::ItemCard;
pub use prompt_card::PromptCard;
pub use toast_view::ToastView;
pub use settings_modal::SettingsModal;
pub use help_overlay::HelpOverlay;
pub use footer_notes::FooterNotes;
