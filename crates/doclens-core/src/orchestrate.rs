//! Two-category fan-out/fan-in
//!
//! Both categories are evaluated concurrently against the same read-only file
//! list. Each task posts its report exactly once on a channel; the
//! orchestrator receives exactly twice and merges. No mutable state crosses
//! the task boundary.

use crate::coverage::{evaluate, CategoryReport};
use crate::patterns::BlockPattern;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Both category reports from one invocation. The pair is semantically
/// unordered; reports are stored in pattern order so output is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub reports: [CategoryReport; 2],
}

impl ScanResult {
    /// Whether every category meets the minimum coverage percentage.
    pub fn all_passing(&self, threshold: f64) -> bool {
        self.reports.iter().all(|report| report.is_passing(threshold))
    }
}

/// Evaluate both categories concurrently over `files`.
///
/// There is no cancellation or timeout: a stalled file read stalls the whole
/// invocation, which is acceptable for a one-shot batch tool.
pub fn scan(files: &[PathBuf], patterns: [&dyn BlockPattern; 2]) -> ScanResult {
    let (sender, receiver) = mpsc::channel();

    let mut slots: [Option<CategoryReport>; 2] = [None, None];
    thread::scope(|scope| {
        for (index, pattern) in patterns.into_iter().enumerate() {
            let sender = sender.clone();
            scope.spawn(move || {
                // Exactly one send per category task.
                let _ = sender.send((index, evaluate(pattern, files)));
            });
        }
        drop(sender);

        for _ in 0..2 {
            let (index, report) = receiver
                .recv()
                .expect("category task exited without posting its report");
            slots[index] = Some(report);
        }
    });

    let reports =
        slots.map(|slot| slot.expect("category task exited without posting its report"));
    ScanResult { reports }
}
