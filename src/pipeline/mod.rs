pub mod steps;

use std::time::Instant;

use tracing::info;

use crate::table::{Table, TableError};

/// One table-to-table transformation in a [`Pipeline`].
pub trait Step {
    fn name(&self) -> &'static str;
    fn apply(&self, table: Table) -> Result<Table, TableError>;
}

#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn then_if(self, enabled: bool, step: impl Step + 'static) -> Self {
        if enabled { self.then(step) } else { self }
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, mut table: Table) -> Result<Table, TableError> {
        for step in &self.steps {
            let start = Instant::now();
            info!(stage = step.name(), rows = table.n_rows(), "starting stage");
            table = step.apply(table)?;
            info!(
                stage = step.name(),
                elapsed_ms = start.elapsed().as_millis(),
                rows = table.n_rows(),
                cols = table.n_cols(),
                "finished stage"
            );
        }
        Ok(table)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
