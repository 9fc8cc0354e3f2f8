// Undo/redo history over canvas snapshots.

use crate::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, trace};

/// History limits. `max_depth: None` keeps every committed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl HistoryConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(depth: usize) -> Result<Self, HistoryError> {
        let config = Self {
            max_depth: Some(depth),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HistoryError> {
        match self.max_depth {
            Some(0) => Err(HistoryError::InvalidDepth { depth: 0 }),
            _ => Ok(()),
        }
    }
}

/// Whether the undo and redo affordances should be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Two-stack history.
///
/// `done` holds committed states with the current one on top; `undone` holds
/// states reachable by redo, most recently undone on top. The bottom entry of
/// `done` is the baseline: undo never removes it, so once something has been
/// committed there is always a current state to show.
#[derive(Debug, Clone)]
pub struct History<S = Snapshot> {
    done: VecDeque<S>,
    undone: Vec<S>,
    max_depth: Option<usize>,
}

impl<S: Clone> History<S> {
    /// Empty, unbounded history.
    pub fn new() -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            max_depth: None,
        }
    }

    pub fn with_config(config: HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        debug!("Creating history with max depth {:?}", config.max_depth);
        Ok(Self {
            max_depth: config.max_depth,
            ..Self::new()
        })
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Record a completed action. Anything reachable by redo is discarded.
    pub fn commit(&mut self, state: S) {
        if !self.undone.is_empty() {
            debug!("Discarding {} redo state(s)", self.undone.len());
            self.undone.clear();
        }
        self.push_done(state);
        debug!("Committed state, {} in history", self.done.len());
    }

    /// Step back one state.
    ///
    /// The current state moves onto the redo stack and a copy of the state
    /// beneath it is returned; that state stays in place as the new current.
    /// Returns `None` without touching anything when there is no earlier state.
    pub fn undo(&mut self) -> Option<S> {
        if self.done.len() < 2 {
            trace!("Nothing to undo ({} state(s) in history)", self.done.len());
            return None;
        }

        let current = self.done.pop_back()?;
        self.undone.push(current);
        debug!(
            "Undo: {} in history, {} to redo",
            self.done.len(),
            self.undone.len()
        );
        self.done.back().cloned()
    }

    /// Re-apply the most recently undone state and return it.
    pub fn redo(&mut self) -> Option<S> {
        let Some(state) = self.undone.pop() else {
            trace!("Nothing to redo");
            return None;
        };

        self.push_done(state.clone());
        debug!(
            "Redo: {} in history, {} to redo",
            self.done.len(),
            self.undone.len()
        );
        Some(state)
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Drop both stacks, e.g. when the surface starts over from a fresh baseline.
    pub fn reset(&mut self) {
        debug!(
            "Resetting history ({} done, {} undone)",
            self.done.len(),
            self.undone.len()
        );
        self.done.clear();
        self.undone.clear();
    }

    /// The state the surface should currently show.
    pub fn current(&self) -> Option<&S> {
        self.done.back()
    }

    pub fn undo_len(&self) -> usize {
        self.done.len()
    }

    pub fn redo_len(&self) -> usize {
        self.undone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty() && self.undone.is_empty()
    }

    fn push_done(&mut self, state: S) {
        self.done.push_back(state);
        if let Some(max) = self.max_depth {
            while self.done.len() > max {
                self.done.pop_front();
                trace!("Evicted oldest state, depth limit {}", max);
            }
        }
    }
}

impl<S: Clone> Default for History<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history depth must be at least 1, got {depth}")]
    InvalidDepth { depth: usize },
}
