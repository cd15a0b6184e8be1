// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::time::Duration;
use strix_app::ConversationId;
use strix_sim::Responder;
use strix_tui::ChatBackend;

/// Backend that answers every conversation from the local responder.
pub struct SimRuntime {
    responder: Responder,
}

impl SimRuntime {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }
}

impl ChatBackend for SimRuntime {
    fn compose_reply(&mut self, _conversation: &ConversationId) -> Result<String> {
        Ok(self.responder.compose_reply())
    }

    fn reply_delay(&self) -> Duration {
        self.responder.delay()
    }
}

#[cfg(test)]
mod tests {
    use super::SimRuntime;
    use anyhow::Result;
    use std::time::Duration;
    use strix_app::ConversationId;
    use strix_sim::Responder;
    use strix_testkit::ScriptedPicker;
    use strix_tui::ChatBackend;

    #[test]
    fn runtime_reports_responder_delay() -> Result<()> {
        let responder = Responder::new(
            Duration::from_millis(10),
            vec!["hello there".to_owned()],
        )?;
        let runtime = SimRuntime::new(responder);
        assert_eq!(runtime.reply_delay(), Duration::from_millis(10));
        Ok(())
    }

    #[test]
    fn runtime_composes_from_reply_set() -> Result<()> {
        let replies = vec!["first".to_owned(), "second".to_owned()];
        let responder = Responder::with_picker(
            Duration::from_millis(1),
            replies,
            Box::new(ScriptedPicker::new(vec![1, 0])),
        )?;
        let mut runtime = SimRuntime::new(responder);

        let conversation = ConversationId::new("chat-1");
        assert_eq!(runtime.compose_reply(&conversation)?, "second");
        assert_eq!(runtime.compose_reply(&conversation)?, "first");
        Ok(())
    }
}
