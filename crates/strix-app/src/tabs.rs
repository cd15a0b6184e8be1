// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::ConversationId;
use crate::model::{Tab, TabId};

/// Ordered sequence of open tabs plus the active-tab pointer. The home tab
/// is always present at index 0 and is never removed. `activate` does not
/// check membership, so the pointer can name a tab that is not in the
/// sequence; callers render that as an empty conversation pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: TabId,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self {
            tabs: vec![Tab::home()],
            active: TabId::Home,
        }
    }
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &TabId {
        &self.active
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.tabs.iter().any(|tab| &tab.id == id)
    }

    /// Opens a tab for the conversation if none exists, and activates it
    /// either way. Returns whether a tab was created. The caller is
    /// responsible for checking that the conversation exists.
    pub fn open_or_activate(&mut self, id: &ConversationId, title: &str) -> bool {
        let tab_id = TabId::Conversation(id.clone());
        let created = !self.contains(&tab_id);
        if created {
            self.tabs.push(Tab::conversation(id.clone(), title));
        }
        self.active = tab_id;
        created
    }

    /// Removes the tab. Closing home is a no-op. If the closed tab was
    /// active, the pointer jumps to the tail of the remaining sequence
    /// (home when only home is left) -- the tail, not the neighbor of the
    /// closed tab.
    pub fn close(&mut self, id: &TabId) -> bool {
        if id.is_home() {
            return false;
        }
        let before = self.tabs.len();
        self.tabs.retain(|tab| &tab.id != id);
        if self.tabs.len() == before {
            return false;
        }
        if &self.active == id {
            self.active = self
                .tabs
                .last()
                .map_or(TabId::Home, |tab| tab.id.clone());
        }
        true
    }

    /// Sets the pointer unconditionally; no existence check.
    pub fn activate(&mut self, id: TabId) {
        self.active = id;
    }

    /// Updates the title of the conversation's tab; silent no-op when the
    /// conversation has no open tab.
    pub fn sync_title(&mut self, id: &ConversationId, title: &str) {
        let tab_id = TabId::Conversation(id.clone());
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == tab_id) {
            tab.title = title.to_owned();
        }
    }
}
