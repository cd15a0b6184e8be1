// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use rand::Rng;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// The stand-in for a real tutoring backend: replies are canned strings,
/// picked uniformly at random.
pub const CANNED_REPLIES: [&str; 6] = [
    "I'd be happy to help you with that! Let me think about the best way to explain this topic...",
    "Great question! Let's break it down into small steps and work through them together.",
    "Let's start from what you already know and build on it one idea at a time.",
    "Here's a way to think about it: try a simple example first, then we'll generalize.",
    "Good thinking! Before I explain, what do you expect the answer to be, and why?",
    "Let's explore that together. I'll guide you through the logic rather than just listing rules.",
];

/// Source of the "pick one of N" decision, injected so tests can script it.
pub trait ReplyPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform, unseeded, not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPicker;

impl ReplyPicker for UniformPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Owns the reply set and the fixed delay after which a reply should land.
pub struct Responder {
    delay: Duration,
    replies: Vec<String>,
    picker: Box<dyn ReplyPicker + Send>,
}

// The boxed picker has no Debug bound, so the derive is unavailable.
impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("delay", &self.delay)
            .field("replies", &self.replies.len())
            .finish_non_exhaustive()
    }
}

impl Responder {
    pub fn new(delay: Duration, replies: Vec<String>) -> Result<Self> {
        Self::with_picker(delay, replies, Box::new(UniformPicker))
    }

    pub fn with_picker(
        delay: Duration,
        replies: Vec<String>,
        picker: Box<dyn ReplyPicker + Send>,
    ) -> Result<Self> {
        if replies.is_empty() {
            bail!("responder reply set must not be empty");
        }
        if replies.iter().any(|reply| reply.trim().is_empty()) {
            bail!("responder replies must not be blank");
        }
        Ok(Self {
            delay,
            replies,
            picker,
        })
    }

    pub fn canned() -> Self {
        Self::new(
            DEFAULT_REPLY_DELAY,
            CANNED_REPLIES.iter().map(|s| (*s).to_owned()).collect(),
        )
        .expect("built-in reply set is non-empty")
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn compose_reply(&mut self) -> String {
        let index = self.picker.pick(self.replies.len());
        // A picker that runs past the end is a bug on its side; clamp
        // instead of panicking.
        let index = index.min(self.replies.len() - 1);
        self.replies[index].clone()
    }
}
