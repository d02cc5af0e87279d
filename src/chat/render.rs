//! Pure chat render: (log, pending, notices) → view tree.

use super::session::Notice;
use crate::llm::{Role, Turn};

pub const WELCOME_TITLE: &str = "ChatGPT";
pub const WELCOME_PROMPT: &str = "How can I help you today?";
pub const THINKING_TEXT: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    #[must_use]
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "./assets/user.svg",
            Self::Bot => "./assets/bot.svg",
        }
    }

    #[must_use]
    pub fn alt(self) -> &'static str {
        match self {
            Self::User => "User Avatar",
            Self::Bot => "Bot Avatar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Message,
    Thinking,
    Error,
}

/// One message row in the conversation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub sender: Sender,
    pub kind: BubbleKind,
    pub text: String,
}

impl Bubble {
    fn message(sender: Sender, text: &str) -> Self {
        Self { sender, kind: BubbleKind::Message, text: text.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatView {
    Welcome { title: &'static str, prompt: &'static str },
    Conversation(Vec<Bubble>),
}

impl ChatView {
    #[must_use]
    pub fn is_welcome(&self) -> bool {
        matches!(self, Self::Welcome { .. })
    }

    /// Bubbles in display order; empty for the welcome state.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        match self {
            Self::Welcome { .. } => &[],
            Self::Conversation(bubbles) => bubbles,
        }
    }

    #[must_use]
    pub fn count(&self, kind: BubbleKind) -> usize {
        self.bubbles().iter().filter(|b| b.kind == kind).count()
    }
}

/// Build the view for a conversation. System turns are never shown.
#[must_use]
pub fn render(log: &[Turn], pending: bool, notices: &[Notice]) -> ChatView {
    if log.is_empty() && notices.is_empty() && !pending {
        return ChatView::Welcome { title: WELCOME_TITLE, prompt: WELCOME_PROMPT };
    }

    let mut bubbles = Vec::with_capacity(log.len() + notices.len() + 1);
    push_notices(&mut bubbles, notices, 0);
    for (idx, turn) in log.iter().enumerate() {
        match turn.role() {
            Role::User => bubbles.push(Bubble::message(Sender::User, turn.content())),
            Role::Assistant => bubbles.push(Bubble::message(Sender::Bot, turn.content())),
            Role::System => {}
        }
        push_notices(&mut bubbles, notices, idx + 1);
    }
    if pending {
        bubbles.push(Bubble { sender: Sender::Bot, kind: BubbleKind::Thinking, text: THINKING_TEXT.to_string() });
    }
    ChatView::Conversation(bubbles)
}

fn push_notices(bubbles: &mut Vec<Bubble>, notices: &[Notice], position: usize) {
    for notice in notices.iter().filter(|n| n.position == position) {
        bubbles.push(Bubble { sender: Sender::Bot, kind: BubbleKind::Error, text: notice.text.clone() });
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
