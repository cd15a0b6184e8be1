// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::VecDeque;
use strix_app::{Workspace, WorkspaceCommand};
use strix_sim::ReplyPicker;

pub use strix_app::demo::{DEMO_MATHS_ID, DEMO_TENSES_ID, seed_demo_conversations};

/// A workspace with `count` conversations started and therefore `count`
/// open tabs; the most recently started one is active.
pub fn workspace_with_open_tabs(count: usize) -> Workspace {
    let mut workspace = Workspace::new();
    for index in 1..=count {
        workspace.dispatch(WorkspaceCommand::StartConversation(format!(
            "conversation {index}"
        )));
    }
    workspace
}

/// Replays a scripted sequence of picks, then repeats the last one. An
/// empty script always picks 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    picks: VecDeque<usize>,
    last: usize,
}

impl ScriptedPicker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            last: 0,
        }
    }
}

impl ReplyPicker for ScriptedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        if let Some(next) = self.picks.pop_front() {
            self.last = next;
        }
        self.last
    }
}
