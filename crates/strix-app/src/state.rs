// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::ConversationId;
use crate::model::{Role, TabId};
use crate::store::ChatStore;
use crate::tabs::TabStrip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCommand {
    /// Open a conversation from the sidebar: create its tab if needed and
    /// activate it. Ignored when the conversation does not exist.
    OpenConversation(ConversationId),
    ActivateTab(TabId),
    CloseTab(TabId),
    /// Home-surface submit: allocate a conversation seeded with the text,
    /// open its tab, activate it.
    StartConversation(String),
    SendMessage {
        conversation: ConversationId,
        text: String,
    },
    /// Delayed assistant reply landing. Ignored for unknown conversations.
    AppendReply {
        conversation: ConversationId,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    ConversationStarted(ConversationId),
    TabOpened(TabId),
    TabActivated(TabId),
    TabClosed(TabId),
    MessageAppended {
        conversation: ConversationId,
        role: Role,
    },
    TitleChanged {
        conversation: ConversationId,
        title: String,
    },
}

/// The whole in-memory surface state: every conversation ever created plus
/// the open-tabs view over them. Closing a tab never deletes the
/// conversation; it stays reachable from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workspace {
    pub store: ChatStore,
    pub tabs: TabStrip,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, command: WorkspaceCommand) -> Vec<WorkspaceEvent> {
        match command {
            WorkspaceCommand::OpenConversation(id) => self.open_conversation(id),
            WorkspaceCommand::ActivateTab(id) => {
                self.tabs.activate(id.clone());
                vec![WorkspaceEvent::TabActivated(id)]
            }
            WorkspaceCommand::CloseTab(id) => {
                if self.tabs.close(&id) {
                    let mut events = vec![WorkspaceEvent::TabClosed(id)];
                    events.push(WorkspaceEvent::TabActivated(self.tabs.active().clone()));
                    events
                } else {
                    vec![]
                }
            }
            WorkspaceCommand::StartConversation(text) => self.start_conversation(&text),
            WorkspaceCommand::SendMessage { conversation, text } => {
                self.send_message(&conversation, &text)
            }
            WorkspaceCommand::AppendReply { conversation, body } => {
                match self.store.append_assistant_message(&conversation, &body) {
                    Some(_) => vec![WorkspaceEvent::MessageAppended {
                        conversation,
                        role: Role::Assistant,
                    }],
                    None => vec![],
                }
            }
        }
    }

    fn open_conversation(&mut self, id: ConversationId) -> Vec<WorkspaceEvent> {
        let Some(conversation) = self.store.conversation(&id) else {
            return vec![];
        };
        let title = conversation.title.clone();

        let mut events = Vec::new();
        if self.tabs.open_or_activate(&id, &title) {
            events.push(WorkspaceEvent::TabOpened(TabId::Conversation(id.clone())));
        }
        events.push(WorkspaceEvent::TabActivated(TabId::Conversation(id)));
        events
    }

    fn start_conversation(&mut self, text: &str) -> Vec<WorkspaceEvent> {
        let id = self.store.create_conversation(text);
        let title = self
            .store
            .conversation(&id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        self.tabs.open_or_activate(&id, &title);

        let tab_id = TabId::Conversation(id.clone());
        vec![
            WorkspaceEvent::ConversationStarted(id.clone()),
            WorkspaceEvent::MessageAppended {
                conversation: id,
                role: Role::User,
            },
            WorkspaceEvent::TabOpened(tab_id.clone()),
            WorkspaceEvent::TabActivated(tab_id),
        ]
    }

    fn send_message(&mut self, id: &ConversationId, text: &str) -> Vec<WorkspaceEvent> {
        let Some(receipt) = self.store.append_user_message(id, text) else {
            return vec![];
        };

        let mut events = vec![WorkspaceEvent::MessageAppended {
            conversation: id.clone(),
            role: Role::User,
        }];
        if let Some(title) = receipt.new_title {
            self.tabs.sync_title(id, &title);
            events.push(WorkspaceEvent::TitleChanged {
                conversation: id.clone(),
                title,
            });
        }
        events
    }
}
