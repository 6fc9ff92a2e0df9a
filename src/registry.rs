//! Process registry.
//!
//! Accepts the raw input rows, assigns sequential 1-based ids, and validates
//! attributes before any scheduling runs. The registered set is immutable
//! for the rest of the run; the registry holds it in memory and has no other
//! side effects.

use crate::models::{Process, ProcessAttrs};
use crate::validation::{self, ValidationError};

/// The validated, immutable process set for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    processes: Vec<Process>,
}

impl Registry {
    /// Builds a registry from input rows.
    ///
    /// Ids are assigned by input order starting at 1. Every row is checked;
    /// on failure all detected violations are returned and no registry is
    /// produced.
    pub fn from_rows(rows: Vec<ProcessAttrs>) -> Result<Self, Vec<ValidationError>> {
        validation::validate_rows(&rows)?;

        let processes = rows
            .into_iter()
            .enumerate()
            .map(|(index, attrs)| Process::new(index as u32 + 1, attrs))
            .collect();

        Ok(Self { processes })
    }

    /// The registered processes in id order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a process by id.
    pub fn get(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of registered processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
