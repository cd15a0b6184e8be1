// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::OffsetDateTime;

use crate::ids::{ConversationId, MessageId};
use crate::model::{Conversation, Message, Role};
use crate::store::ChatStore;

pub const DEMO_MATHS_ID: &str = "maths-homework";
pub const DEMO_TENSES_ID: &str = "english-tenses";

const DEMO_TENSES_QUESTION: &str = "I want to learn English tenses";
const DEMO_TENSES_ANSWER: &str = "Let's explore English tenses together. I will guide you \
through the logic behind them rather than just listing rules.\n\nAt their core, tenses are how \
we change verbs to show when an action happens (Time) and how it happens (Aspect).\n\nWhere \
would you like to start our exploration?\n1. The Foundations (Simple Tenses)\n2. The \
Storyteller (Past Forms)\n3. The \"Now\" and \"Later\" (Present & Future)";

/// Seeds the two conversations the surface starts with: an empty one and
/// one holding a short exchange. Idempotent; re-seeding never duplicates.
pub fn seed_demo_conversations(store: &mut ChatStore) {
    let seeded_at = OffsetDateTime::UNIX_EPOCH;
    store.insert_conversation(Conversation {
        id: ConversationId::new(DEMO_MATHS_ID),
        title: "Maths homework".to_owned(),
        messages: vec![],
        created_at: seeded_at,
    });
    store.insert_conversation(Conversation {
        id: ConversationId::new(DEMO_TENSES_ID),
        title: "English Tenses".to_owned(),
        messages: vec![
            demo_message("seed-1", Role::User, DEMO_TENSES_QUESTION),
            demo_message("seed-2", Role::Assistant, DEMO_TENSES_ANSWER),
        ],
        created_at: seeded_at,
    });
}

fn demo_message(id: &str, role: Role, content: &str) -> Message {
    Message {
        id: MessageId::new(id),
        role,
        content: content.to_owned(),
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[cfg(test)]
mod tests {
    use super::{DEMO_MATHS_ID, DEMO_TENSES_ID, seed_demo_conversations};
    use crate::ids::ConversationId;
    use crate::model::Role;
    use crate::store::ChatStore;

    #[test]
    fn demo_seed_matches_initial_surface_state() {
        let mut store = ChatStore::new();
        seed_demo_conversations(&mut store);

        let maths = store
            .conversation(&ConversationId::new(DEMO_MATHS_ID))
            .expect("maths conversation");
        assert_eq!(maths.title, "Maths homework");
        assert!(maths.messages.is_empty());

        let tenses = store
            .conversation(&ConversationId::new(DEMO_TENSES_ID))
            .expect("tenses conversation");
        assert_eq!(tenses.messages.len(), 2);
        assert_eq!(tenses.messages[0].role, Role::User);
        assert_eq!(tenses.messages[1].role, Role::Assistant);
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let mut store = ChatStore::new();
        seed_demo_conversations(&mut store);
        seed_demo_conversations(&mut store);
        assert_eq!(store.conversations().len(), 2);
    }
}
