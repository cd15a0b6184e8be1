// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ids::*;

pub const TITLE_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Home,
    Conversation,
}

/// Tab identity. The home tab is a dedicated variant rather than a reserved
/// string id, so "home is never closable" is a match arm instead of a
/// sentinel comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabId {
    Home,
    Conversation(ConversationId),
}

impl TabId {
    pub const fn kind(&self) -> TabKind {
        match self {
            Self::Home => TabKind::Home,
            Self::Conversation(_) => TabKind::Conversation,
        }
    }

    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    pub fn conversation(&self) -> Option<&ConversationId> {
        match self {
            Self::Home => None,
            Self::Conversation(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
}

impl Tab {
    pub fn home() -> Self {
        Self {
            id: TabId::Home,
            title: "Home".to_owned(),
        }
    }

    pub fn conversation(id: ConversationId, title: impl Into<String>) -> Self {
        Self {
            id: TabId::Conversation(id),
            title: title.into(),
        }
    }

    pub const fn kind(&self) -> TabKind {
        self.id.kind()
    }

    pub const fn is_home(&self) -> bool {
        self.id.is_home()
    }
}

/// First 30 characters of the first user message, plain truncation. Counted
/// in chars so a multi-byte sequence is never split.
pub fn derive_title(text: &str) -> String {
    text.chars().take(TITLE_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{Role, Tab, TabId, TabKind, derive_title};
    use crate::ids::ConversationId;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!(Role::parse(Role::User.as_str()), Some(Role::User));
        assert_eq!(Role::parse(Role::Assistant.as_str()), Some(Role::Assistant));
        assert_eq!(Role::parse("system"), None);
    }

    #[test]
    fn derive_title_truncates_to_thirty_chars() {
        let long = "Explain the difference between mitosis and meiosis";
        assert_eq!(derive_title(long), "Explain the difference between");
        assert_eq!(derive_title("short"), "short");
    }

    #[test]
    fn derive_title_counts_chars_not_bytes() {
        let accented = "é".repeat(40);
        assert_eq!(derive_title(&accented).chars().count(), 30);
    }

    #[test]
    fn tab_kind_follows_id() {
        assert_eq!(Tab::home().kind(), TabKind::Home);
        let tab = Tab::conversation(ConversationId::new("chat-1"), "Fractions");
        assert_eq!(tab.kind(), TabKind::Conversation);
        assert_eq!(
            tab.id.conversation(),
            Some(&ConversationId::new("chat-1"))
        );
        assert_eq!(TabId::Home.conversation(), None);
    }
}
