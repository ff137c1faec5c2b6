//! CommandLog: bounded undo stack plus redo stack.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use kmap_core::errors::EditorError;
use kmap_core::KmapResult;
use kmap_graph::MapGraph;

use crate::command::EditCommand;

/// One applied command and the command that reverses it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub command: EditCommand,
    pub inverse: EditCommand,
    pub applied_at: DateTime<Utc>,
}

/// Undo/redo history for structural edits.
#[derive(Debug, Clone)]
pub struct CommandLog {
    undo: VecDeque<LogEntry>,
    redo: Vec<LogEntry>,
    limit: usize,
}

impl CommandLog {
    /// `limit` is the number of undoable entries kept; at least one.
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Apply `command` and record it. Clears the redo stack.
    pub fn do_command(&mut self, graph: &mut MapGraph, command: EditCommand) -> KmapResult<()> {
        let inverse = command.apply(graph)?;
        self.redo.clear();
        self.push_undo(LogEntry {
            command,
            inverse,
            applied_at: Utc::now(),
        });
        Ok(())
    }

    /// Reverse the most recent command.
    pub fn undo(&mut self, graph: &mut MapGraph) -> KmapResult<&LogEntry> {
        let entry = self.undo.pop_back().ok_or(EditorError::NothingToUndo)?;
        match entry.inverse.apply(graph) {
            Ok(command) => {
                self.redo.push(LogEntry {
                    command,
                    inverse: entry.inverse,
                    applied_at: Utc::now(),
                });
                self.redo.last().ok_or_else(|| EditorError::NothingToRedo.into())
            }
            Err(err) => {
                self.undo.push_back(entry);
                Err(err)
            }
        }
    }

    /// Re-apply the most recently undone command.
    pub fn redo(&mut self, graph: &mut MapGraph) -> KmapResult<&LogEntry> {
        let entry = self.redo.pop().ok_or(EditorError::NothingToRedo)?;
        match entry.command.apply(graph) {
            Ok(inverse) => {
                self.push_undo(LogEntry {
                    command: entry.command,
                    inverse,
                    applied_at: Utc::now(),
                });
                self.undo.back().ok_or_else(|| EditorError::NothingToUndo.into())
            }
            Err(err) => {
                self.redo.push(entry);
                Err(err)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undoable entries, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.undo.iter()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, entry: LogEntry) {
        self.undo.push_back(entry);
        while self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }
}
