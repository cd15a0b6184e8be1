// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;

use crate::ids::{ConversationId, MessageId};
use crate::model::{Conversation, Message, Role, derive_title};

/// What `append_user_message` did, so the caller can propagate a title
/// change to the matching tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendReceipt {
    pub message_id: MessageId,
    pub new_title: Option<String>,
}

/// In-memory collection of conversations. Nothing here is persisted; the
/// store lives exactly as long as the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatStore {
    conversations: Vec<Conversation>,
    next_conversation_seq: u64,
    next_message_seq: u64,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: &ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| &c.id == id)
    }

    /// Adds a pre-built conversation (demo seeding). Ignores duplicates of
    /// an id already present.
    pub fn insert_conversation(&mut self, conversation: Conversation) {
        if self.conversation(&conversation.id).is_none() {
            self.conversations.push(conversation);
        }
    }

    /// Appends a user message. The conversation's first message also sets
    /// its title. Returns `None` for an unknown conversation id: that is a
    /// caller bug, silently ignored rather than surfaced.
    pub fn append_user_message(
        &mut self,
        id: &ConversationId,
        text: &str,
    ) -> Option<AppendReceipt> {
        let index = self.conversations.iter().position(|c| &c.id == id)?;
        let message_id = self.mint_message_id();
        let conversation = &mut self.conversations[index];

        let new_title = if conversation.messages.is_empty() {
            let title = derive_title(text);
            conversation.title = title.clone();
            Some(title)
        } else {
            None
        };

        conversation.messages.push(Message {
            id: message_id.clone(),
            role: Role::User,
            content: text.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        });

        Some(AppendReceipt {
            message_id,
            new_title,
        })
    }

    /// Appends an assistant message with an already-composed body. Reply
    /// selection belongs to the responder, not the store. `None` for an
    /// unknown conversation id.
    pub fn append_assistant_message(
        &mut self,
        id: &ConversationId,
        body: &str,
    ) -> Option<MessageId> {
        let index = self.conversations.iter().position(|c| &c.id == id)?;
        let message_id = self.mint_message_id();
        let conversation = &mut self.conversations[index];
        conversation.messages.push(Message {
            id: message_id.clone(),
            role: Role::Assistant,
            content: body.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        });
        Some(message_id)
    }

    /// Allocates a conversation titled from its initial text, seeded with
    /// one user message.
    pub fn create_conversation(&mut self, initial_text: &str) -> ConversationId {
        self.next_conversation_seq += 1;
        let id = ConversationId::new(format!("chat-{}", self.next_conversation_seq));
        let message_id = self.mint_message_id();
        let now = OffsetDateTime::now_utc();
        self.conversations.push(Conversation {
            id: id.clone(),
            title: derive_title(initial_text),
            messages: vec![Message {
                id: message_id,
                role: Role::User,
                content: initial_text.to_owned(),
                created_at: now,
            }],
            created_at: now,
        });
        id
    }

    fn mint_message_id(&mut self) -> MessageId {
        self.next_message_seq += 1;
        MessageId::new(format!("msg-{}", self.next_message_seq))
    }
}
