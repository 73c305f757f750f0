//! Document model for the history view: cards, the actions they raise, and
//! the visibility the backend toggles.

mod action;
mod card;
mod visibility;

pub use action::UserAction;
pub use card::{ButtonRole, Card, CardButton, CardTarget};
pub use visibility::Visibility;
