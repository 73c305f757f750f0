use crate::history::HistoryEntry;

use super::UserAction;

/// Which button of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Copy,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    pub role: ButtonRole,
    pub label: &'static str,
    pub class_name: &'static str,
    /// Buttons always stop propagation; the card's own click handler is a
    /// copy, which must not fire on a delete click.
    pub stops_propagation: bool,
}

impl CardButton {
    fn copy() -> Self {
        Self {
            role: ButtonRole::Copy,
            label: "📋",
            class_name: "btn",
            stops_propagation: true,
        }
    }

    fn delete() -> Self {
        Self {
            role: ButtonRole::Delete,
            label: "🗑️",
            class_name: "btn btn-delete",
            stops_propagation: true,
        }
    }

    fn action_for(&self, text: &str) -> UserAction {
        match self.role {
            ButtonRole::Copy => UserAction::Copy(text.to_string()),
            ButtonRole::Delete => UserAction::Delete(text.to_string()),
        }
    }
}

/// Where inside a card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    /// The card surface outside text and buttons.
    Body,
    Text,
    CopyButton,
    DeleteButton,
}

/// Rendered unit for one entry: its text, a copy button and a delete button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    text: String,
    copy_button: CardButton,
    delete_button: CardButton,
}

impl Card {
    pub const CLASS_NAME: &'static str = "card";
    pub const TEXT_CLASS_NAME: &'static str = "card-text";
    pub const ACTIONS_CLASS_NAME: &'static str = "card-actions";

    pub fn from_entry(entry: &HistoryEntry) -> Self {
        Self {
            text: entry.text.clone(),
            copy_button: CardButton::copy(),
            delete_button: CardButton::delete(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> [&CardButton; 2] {
        [&self.copy_button, &self.delete_button]
    }

    /// Dispatches a click through the card's handlers, innermost first.
    ///
    /// A button handler runs, then the event bubbles to the card handler
    /// (copy) unless the button stopped propagation.
    pub fn dispatch_click(&self, target: CardTarget) -> Vec<UserAction> {
        let mut fired = Vec::with_capacity(1);

        let button = match target {
            CardTarget::CopyButton => Some(&self.copy_button),
            CardTarget::DeleteButton => Some(&self.delete_button),
            CardTarget::Body | CardTarget::Text => None,
        };

        if let Some(button) = button {
            fired.push(button.action_for(&self.text));
            if button.stops_propagation {
                return fired;
            }
        }

        fired.push(UserAction::Copy(self.text.clone()));
        fired
    }
}
