//! UI Components
//!
//! Leptos components for the roster and detail screens.

mod amiibo_card;
mod amiibo_detail;
mod amiibo_list;
mod delete_confirm_button;
mod status_panel;

pub use amiibo_card::AmiiboCard;
pub use amiibo_detail::AmiiboDetail;
pub use amiibo_list::AmiiboList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use status_panel::{ErrorPanel, LoadingPanel, NotFoundPanel};
