#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! AC-3 over crossword overlaps.
//!
//! An arc `(x, y)` is consistent when every word left for `x` has at least one
//! word left for `y` with the same letter at their shared cell. `revise` makes
//! one arc consistent by deleting unsupported words from `x`; `ac3` keeps a
//! work list of arcs and revises until nothing changes or some domain empties.
//!
//! Whenever `x` shrinks, each other neighbor `z` of `x` may have lost support,
//! so `(z, x)` goes back on the work list. `(y, x)` is not re-queued: the words
//! `x` lost had no partner in `y` to begin with.
//!
//! The order in which arcs are taken off the work list does not change the
//! fixed point reached, only how quickly it is reached. Both a FIFO queue and
//! a LIFO stack are provided.

use crate::crossword::puzzle::Puzzle;
use crate::crossword::variable::VarId;
use crate::csp::domain::Domains;
use clap::ValueEnum;
use log::{debug, trace};
use std::collections::VecDeque;
use std::fmt::{Debug, Display};

/// An ordered pair `(x, y)`: make `x` consistent with `y`.
pub type Arc = (VarId, VarId);

/// Work list holding the arcs still to be revised.
pub trait ArcQueue: Debug + Clone + Default {
    fn push(&mut self, arc: Arc);
    fn pop(&mut self) -> Option<Arc>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn extend<I: IntoIterator<Item = Arc>>(&mut self, arcs: I) {
        for arc in arcs {
            self.push(arc);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct FifoQueue(VecDeque<Arc>);

impl ArcQueue for FifoQueue {
    fn push(&mut self, arc: Arc) {
        self.0.push_back(arc);
    }

    fn pop(&mut self) -> Option<Arc> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct LifoStack(Vec<Arc>);

impl ArcQueue for LifoStack {
    fn push(&mut self, arc: Arc) {
        self.0.push(arc);
    }

    fn pop(&mut self) -> Option<Arc> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Run-time choice between the work list implementations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArcQueueImpls {
    Fifo(FifoQueue),
    Lifo(LifoStack),
}

impl Default for ArcQueueImpls {
    fn default() -> Self {
        Self::Fifo(FifoQueue::default())
    }
}

impl ArcQueue for ArcQueueImpls {
    fn push(&mut self, arc: Arc) {
        match self {
            Self::Fifo(q) => q.push(arc),
            Self::Lifo(q) => q.push(arc),
        }
    }

    fn pop(&mut self) -> Option<Arc> {
        match self {
            Self::Fifo(q) => q.pop(),
            Self::Lifo(q) => q.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Fifo(q) => q.len(),
            Self::Lifo(q) => q.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Fifo(q) => q.clear(),
            Self::Lifo(q) => q.clear(),
        }
    }
}

/// Selects the arc work list from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum ArcQueueType {
    /// First in, first out.
    #[default]
    Fifo,
    /// Last in, first out.
    Lifo,
}

impl Display for ArcQueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Lifo => write!(f, "lifo"),
        }
    }
}

impl ArcQueueType {
    #[must_use]
    pub fn to_impl(self) -> ArcQueueImpls {
        match self {
            Self::Fifo => ArcQueueImpls::Fifo(FifoQueue::default()),
            Self::Lifo => ArcQueueImpls::Lifo(LifoStack::default()),
        }
    }
}

/// What a run of `ac3` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArcConsistency {
    /// Number of arcs revised.
    pub revisions: usize,
    /// Number of words deleted across all domains.
    pub removals: usize,
    /// The variable whose domain emptied, if propagation failed.
    pub wipeout: Option<VarId>,
}

impl ArcConsistency {
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.wipeout.is_none()
    }
}

/// Makes `x` arc consistent with `y`, returning the number of words removed
/// from the domain of `x`. Variables that do not cross are trivially
/// consistent and nothing is removed.
///
/// Words too short to reach the crossing cell neither support nor survive, so
/// domains need not be node consistent beforehand.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: VarId, y: VarId) -> usize {
    let Some((i, j)) = puzzle.overlap(x, y) else {
        return 0;
    };

    let vocabulary = &puzzle.vocabulary;
    let supported: Vec<char> = {
        let mut letters: Vec<char> = domains[y]
            .iter()
            .filter_map(|&w| vocabulary.get_letter(w, j))
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    };

    let removed = domains.retain(x, |w| {
        vocabulary
            .get_letter(w, i)
            .is_some_and(|letter| supported.binary_search(&letter).is_ok())
    });
    if removed > 0 {
        trace!("revise ({x}, {y}) removed {removed}, {} left", domains.len(x));
    }
    removed
}

/// Runs AC-3 until a fixed point or a wipeout.
///
/// `queue` is cleared first. With `arcs = None` it is seeded with every arc of
/// the puzzle, otherwise with exactly the given arcs.
pub fn ac3<Q: ArcQueue>(
    puzzle: &Puzzle,
    domains: &mut Domains,
    arcs: Option<Vec<Arc>>,
    queue: &mut Q,
) -> ArcConsistency {
    queue.clear();
    match arcs {
        Some(arcs) => queue.extend(arcs),
        None => queue.extend(puzzle.arcs()),
    }

    let mut result = ArcConsistency::default();

    while let Some((x, y)) = queue.pop() {
        result.revisions += 1;
        let removed = revise(puzzle, domains, x, y);
        if removed == 0 {
            continue;
        }
        result.removals += removed;

        if domains.is_empty(x) {
            debug!("ac3 emptied the domain of {}", puzzle.variable(x));
            result.wipeout = Some(x);
            queue.clear();
            return result;
        }

        queue.extend(
            puzzle
                .neighbors(x)
                .iter()
                .filter(|&&z| z != y)
                .map(|&z| (z, x)),
        );
    }

    debug!(
        "ac3 reached a fixed point after {} revisions, {} removals",
        result.revisions, result.removals
    );
    result
}
