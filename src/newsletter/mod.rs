//! Newsletter subscriptions
//!
//! Subscribers live in memory only and are lost on restart. Duplicate
//! detection is an exact string match, so `A@x.io` and `a@x.io` are two
//! subscribers.

use indexmap::IndexSet;
use std::sync::{Mutex, PoisonError};

/// Outcome of a subscribe request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    /// Empty or missing `@`; nothing stored
    Invalid,
    /// Already on the list; nothing stored
    Duplicate,
    /// Stored
    Added,
}

impl Subscription {
    /// Message shown to the visitor
    pub fn message(&self) -> &'static str {
        match self {
            Subscription::Invalid => "Please enter a valid email address",
            Subscription::Duplicate => "You are already subscribed!",
            Subscription::Added => "Thank you for subscribing!",
        }
    }
}

/// Minimal shape check: non-empty and contains `@`
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

/// In-memory subscriber list
#[derive(Debug, Default)]
pub struct Newsletter {
    subscribers: Mutex<IndexSet<String>>,
}

impl Newsletter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record an email address
    pub fn subscribe(&self, email: &str) -> Subscription {
        if !is_valid_email(email) {
            return Subscription::Invalid;
        }

        // Check and insert under one lock
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !subscribers.insert(email.to_string()) {
            return Subscription::Duplicate;
        }
        drop(subscribers);

        tracing::info!(email = %email, "new subscriber");
        Subscription::Added
    }

    pub fn len(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, email: &str) -> bool {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(email)
    }
}
