//! UI Components
//!
//! Leptos components for the Tasks and Kader pages.

mod color_picker;
mod date_badge;
mod delete_button;
mod filter_modal;
mod kader_view;
mod name_badge;
mod page_header;
mod roster_form;
mod task_form;
mod tasks_view;
mod toast;

pub use color_picker::ColorPicker;
pub use date_badge::DateBadge;
pub use delete_button::DeleteButton;
pub use filter_modal::FilterModal;
pub use kader_view::KaderView;
pub use name_badge::NameBadge;
pub use page_header::PageHeader;
pub use roster_form::RosterForm;
pub use task_form::TaskForm;
pub use tasks_view::TasksView;
pub use toast::ToastStack;
