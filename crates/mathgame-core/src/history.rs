//! In-memory, append-only log of completed rounds.

use comfy_table::{Cell, Table};

use crate::model::{Operation, SessionRecord};

/// Ordered history of completed rounds. Insertion order is chronological.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    records: Vec<SessionRecord>,
}

/// Aggregate results for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStats {
    pub operation: Operation,
    pub rounds: usize,
    pub best: i32,
    pub total: i32,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fixed-width history table: header, rule, then one line per record.
    pub fn render_table(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.records.len() + 2);
        lines.push(format!("{:<12} {:<15} {:<8}", "Date", "Game Mode", "Points"));
        lines.push("- - - - - - - - - - - - - - - -".to_string());
        for record in &self.records {
            lines.push(format!(
                "{:<12} {:<15} {:<8}",
                record.date_label(),
                record.mode_name(),
                record.points()
            ));
        }
        lines
    }

    /// Per-operation totals, in menu order, skipping operations never played.
    pub fn summary(&self) -> Vec<OperationStats> {
        Operation::ALL
            .iter()
            .filter_map(|&operation| {
                let points: Vec<i32> = self
                    .records
                    .iter()
                    .filter(|r| r.mode() == operation)
                    .map(SessionRecord::points)
                    .collect();
                let best = points.iter().copied().max()?;
                Some(OperationStats {
                    operation,
                    rounds: points.len(),
                    best,
                    total: points.iter().sum(),
                })
            })
            .collect()
    }

    /// Summary rendered as a table.
    pub fn summary_table(&self) -> Table {
        let mut table = Table::new();
        table.set_header(vec!["Game Mode", "Rounds", "Best", "Total"]);
        for stats in self.summary() {
            table.add_row(vec![
                Cell::new(stats.operation),
                Cell::new(stats.rounds),
                Cell::new(stats.best),
                Cell::new(stats.total),
            ]);
        }
        table
    }
}
