//! Timed insert, search and delete passes over differently ordered record lists

use std::{
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};

use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{ChainedHashSet, record::GdpRecord, utils::TableHash};

/// Order in which a record list is fed to the hash set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Alphabetical by country
    Sorted,
    /// Random permutation
    Shuffled,
    /// Reverse alphabetical by country
    Reversed,
}

impl ListOrder {
    /// Every order, in the sequence an analysis runs them
    pub const ALL: [Self; 3] = [Self::Sorted, Self::Shuffled, Self::Reversed];

    /// Returns the label used in reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "Sorted",
            Self::Shuffled => "Shuffled",
            Self::Reversed => "Reversed",
        }
    }
}

/// Returns a copy of `records` arranged in `order`
pub fn arrange<R: Rng + ?Sized>(
    records: &[GdpRecord],
    order: ListOrder,
    rng: &mut R,
) -> Vec<GdpRecord> {
    let mut arranged = records.to_vec();
    match order {
        ListOrder::Sorted => arranged.sort(),
        ListOrder::Shuffled => arranged.shuffle(rng),
        ListOrder::Reversed => arranged.sort_by(|a, b| b.cmp(a)),
    }
    arranged
}

/// Elapsed time of each pass over a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationTimings {
    /// Inserting every item
    pub insert: Duration,
    /// Looking up every item
    pub search: Duration,
    /// Removing every item
    pub delete: Duration,
}

/// Inserts, then looks up, then removes every item of `items`, timing each pass.
///
/// Leaves `set` without any of the items.
pub fn time_operations<T>(set: &mut ChainedHashSet<T>, items: &[T]) -> OperationTimings
where
    T: Eq + TableHash + Clone,
{
    let owned = items.to_vec();

    let start = Instant::now();
    for item in owned {
        set.insert(item);
    }
    let insert = start.elapsed();

    let start = Instant::now();
    for item in items {
        let _found = black_box(set.contains(item));
    }
    let search = start.elapsed();

    let start = Instant::now();
    for item in items {
        set.remove(item);
    }
    let delete = start.elapsed();

    OperationTimings { insert, search, delete }
}

/// Timings of one ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRun {
    /// Order the records were fed in
    pub order: ListOrder,
    /// Measured passes
    pub timings: OperationTimings,
}

impl fmt::Display for OrderRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} - Insert: {:.6} s, Search: {:.6} s, Delete: {:.6} s",
            self.order.label(),
            self.timings.insert.as_secs_f64(),
            self.timings.search.as_secs_f64(),
            self.timings.delete.as_secs_f64()
        )
    }
}

/// Result of running every ordering over a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Number of records in the dataset
    pub entries: usize,
    /// One run per ordering, in [`ListOrder::ALL`] sequence
    pub runs: Vec<OrderRun>,
}

impl AnalysisReport {
    /// Renders the report as one CSV line: the entry count followed by insert,
    /// search and delete seconds for each ordering
    #[must_use]
    pub fn csv_line(&self) -> String {
        let mut fields = vec![self.entries.to_string()];
        for run in &self.runs {
            let timings = run.timings;
            for elapsed in [timings.insert, timings.search, timings.delete] {
                fields.push(format!("{:.6}", elapsed.as_secs_f64()));
            }
        }
        fields.join(",")
    }
}

/// Times every ordering of `records` against one shared `ChainedHashSet`
pub fn run_analysis<R: Rng + ?Sized>(records: &[GdpRecord], rng: &mut R) -> AnalysisReport {
    let mut set = ChainedHashSet::new();
    let runs = ListOrder::ALL
        .into_iter()
        .map(|order| {
            let arranged = arrange(records, order, rng);
            let timings = time_operations(&mut set, &arranged);
            let run = OrderRun { order, timings };
            debug!("{run}");
            run
        })
        .collect();

    AnalysisReport { entries: records.len(), runs }
}
