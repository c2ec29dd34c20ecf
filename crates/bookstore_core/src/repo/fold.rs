//! Folding of flat join rows into parent/child object graphs.
//!
//! # Responsibility
//! - Deduplicate parents by primary key while a row stream is consumed.
//! - Attach child columns of every row to the parent that row belongs to.
//!
//! # Invariants
//! - Each parent key yields exactly one parent, regardless of row order.
//! - Parents come out in first-seen order.
//! - Children are appended in row arrival order.
//! - A NULL or zero child id means "no child on this row" (outer join).
//! - A row-source error aborts the fold; no partial result escapes.

use super::RepoResult;
use crate::model::EntityId;
use log::debug;
use rusqlite::{Row, Rows};
use std::collections::HashMap;
use std::hash::Hash;

/// Keyed accumulator of partially built parents.
#[derive(Debug)]
pub struct FoldAccumulator<K, P> {
    positions: HashMap<K, usize>,
    parents: Vec<P>,
}

impl<K: Eq + Hash, P> FoldAccumulator<K, P> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            parents: Vec::new(),
        }
    }

    /// Returns the parent stored under `key`, building it with `build` the
    /// first time the key is seen.
    pub fn parent_or_insert_with<E>(
        &mut self,
        key: K,
        build: impl FnOnce() -> Result<P, E>,
    ) -> Result<&mut P, E> {
        let position = match self.positions.get(&key).copied() {
            Some(position) => position,
            None => {
                let parent = build()?;
                self.parents.push(parent);
                let position = self.parents.len() - 1;
                self.positions.insert(key, position);
                position
            }
        };
        Ok(&mut self.parents[position])
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Materializes all parents in first-seen order.
    pub fn into_parents(self) -> Vec<P> {
        self.parents
    }

    /// Materializes the first parent, for single-id queries.
    pub fn into_first(self) -> Option<P> {
        self.parents.into_iter().next()
    }
}

impl<K: Eq + Hash, P> Default for FoldAccumulator<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes how one join result shape maps onto a parent graph.
pub trait RowFold {
    type Key: Eq + Hash;
    type Parent;

    /// Reads the parent primary key of a row.
    fn parent_key(&self, row: &Row<'_>) -> rusqlite::Result<Self::Key>;

    /// Builds a parent, with empty child collections, from its first row.
    fn build_parent(&self, row: &Row<'_>) -> rusqlite::Result<Self::Parent>;

    /// Folds the child columns of `row` into `parent`.
    fn fold_row(&self, parent: &mut Self::Parent, row: &Row<'_>) -> rusqlite::Result<()>;
}

/// Consumes `rows` through `fold` and returns the accumulated parents.
pub fn fold_rows<F: RowFold>(
    fold: &F,
    mut rows: Rows<'_>,
) -> RepoResult<FoldAccumulator<F::Key, F::Parent>> {
    let mut accumulator = FoldAccumulator::new();
    let mut row_count = 0usize;

    while let Some(row) = rows.next()? {
        row_count += 1;
        let key = fold.parent_key(row)?;
        let parent = accumulator.parent_or_insert_with(key, || fold.build_parent(row))?;
        fold.fold_row(parent, row)?;
    }

    debug!(
        "event=rows_folded module=repo rows={} parents={}",
        row_count,
        accumulator.len()
    );
    Ok(accumulator)
}

/// Reads a nullable child id, treating NULL and `0` as absent.
pub fn child_id(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<EntityId>> {
    let id = row.get::<_, Option<EntityId>>(column)?;
    Ok(id.filter(|id| *id != 0))
}
