//! Test doubles for the draw source.

#![allow(dead_code)]

use std::collections::HashMap;

use paq_spec::DrawSource;
use thiserror::Error;

/// A draw made against a [`PinnedDraws`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Integer { label: String, bound: u32 },
    Shuffle { label: String, len: usize },
}

/// How [`PinnedDraws`] reorders shuffled items.
#[derive(Debug, Clone, Copy)]
pub enum Ordering {
    Identity,
    Reverse,
    RotateLeft(usize),
    /// Drops the first item, breaking the permutation contract.
    DropFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinnedError {
    #[error("no value pinned for '{0}'")]
    Unpinned(String),
}

/// Returns pinned integers per label and records every call.
#[derive(Debug)]
pub struct PinnedDraws {
    integers: HashMap<String, u32>,
    ordering: Ordering,
    pub calls: Vec<Call>,
}

impl PinnedDraws {
    pub fn new() -> Self {
        Self {
            integers: HashMap::new(),
            ordering: Ordering::Identity,
            calls: Vec::new(),
        }
    }

    pub fn addends(left: u32, right: u32) -> Self {
        Self::new()
            .pin("left addend", left)
            .pin("right addend", right)
    }

    pub fn pin(mut self, label: &str, value: u32) -> Self {
        self.integers.insert(label.to_string(), value);
        self
    }

    pub fn ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }
}

impl DrawSource for PinnedDraws {
    type Error = PinnedError;

    fn integer(&mut self, label: &str, bound: u32) -> Result<u32, PinnedError> {
        self.calls.push(Call::Integer {
            label: label.to_string(),
            bound,
        });
        self.integers
            .get(label)
            .copied()
            .ok_or_else(|| PinnedError::Unpinned(label.to_string()))
    }

    fn shuffle<T>(&mut self, label: &str, mut items: Vec<T>) -> Result<Vec<T>, PinnedError> {
        self.calls.push(Call::Shuffle {
            label: label.to_string(),
            len: items.len(),
        });
        match self.ordering {
            Ordering::Identity => {}
            Ordering::Reverse => items.reverse(),
            Ordering::RotateLeft(n) => {
                let len = items.len();
                if len > 0 {
                    items.rotate_left(n % len);
                }
            }
            Ordering::DropFirst => {
                if !items.is_empty() {
                    items.remove(0);
                }
            }
        }
        Ok(items)
    }
}
