//! Breadth-first construction of the page catalog

use std::{
    collections::{HashMap, VecDeque},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, Player},
    minimax,
    types::PageId,
};

/// Standing of a page, seen from the reader's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The reader still has squares to choose from.
    Open,
    /// The book completed a line on its reply.
    Loss,
    /// Every square is filled with no line made.
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Open => "open",
            Outcome::Loss => "loss",
            Outcome::Draw => "draw",
        };
        write!(f, "{text}")
    }
}

/// One numbered entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub board: Board,
    pub outcome: Outcome,
    /// Reader move -> destination page, one entry per empty square in
    /// row-major order. Empty on terminal pages.
    pub transitions: Vec<(usize, PageId)>,
}

/// Deduplicated catalog of every reachable page, keyed by board encoding.
///
/// Exactly one page exists per distinct board content. Ids are a
/// permutation of `1..=len()` in breadth-first discovery order from the
/// empty board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGraph {
    pages: HashMap<String, Page>,
    order: Vec<String>,
}

impl PageGraph {
    fn new() -> Self {
        PageGraph {
            pages: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of pages in the catalog
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a page by its canonical board encoding
    pub fn get(&self, key: &str) -> Option<&Page> {
        self.pages.get(key)
    }

    /// Look up a page by id
    pub fn page(&self, id: PageId) -> Option<&Page> {
        let index = (id.value() as usize).checked_sub(1)?;
        self.order.get(index).and_then(|key| self.pages.get(key))
    }

    /// Iterate pages in ascending id order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.order
            .iter()
            .map(|key| &self.pages[key])
    }
}

/// Traversal state threaded through the build: the id counter, the
/// accumulating catalog, and the FIFO queue of keys awaiting expansion.
struct BuilderState {
    next_id: u32,
    graph: PageGraph,
    queue: VecDeque<String>,
}

impl BuilderState {
    /// Seed the catalog with page 1, the empty board.
    fn new() -> Self {
        let mut state = BuilderState {
            next_id: 1,
            graph: PageGraph::new(),
            queue: VecDeque::new(),
        };
        state.intern(Board::new());
        state
    }

    /// Look up the page for `board`, creating and enqueueing it on first
    /// sight. Returns its id either way.
    fn intern(&mut self, board: Board) -> PageId {
        let key = board.encode();
        if let Some(page) = self.graph.pages.get(&key) {
            return page.id;
        }

        let id = PageId::new(self.next_id);
        self.next_id += 1;
        self.graph.pages.insert(
            key.clone(),
            Page {
                id,
                board,
                outcome: Outcome::Open,
                transitions: Vec::new(),
            },
        );
        self.graph.order.push(key.clone());
        self.queue.push_back(key);
        id
    }

    /// Expand one dequeued page: finalize it as terminal, or record one
    /// transition per empty square, with the book's reply applied whenever
    /// the reader's mark leaves the game running.
    fn expand(&mut self, key: &str) -> Result<()> {
        let board = self
            .graph
            .get(key)
            .map(|page| page.board)
            .expect("queued keys always have a page");

        if board.is_over() {
            let outcome = if board.winner().is_some() {
                Outcome::Loss
            } else {
                Outcome::Draw
            };
            if let Some(page) = self.graph.pages.get_mut(key) {
                page.outcome = outcome;
            }
            return Ok(());
        }

        let empty = board.empty_positions();
        let mut transitions = Vec::with_capacity(empty.len());
        for pos in empty {
            let after_reader = board.place(pos, Player::X)?;
            let next = if after_reader.is_over() {
                // The reader's own mark ended the game; the page shows it
                // as played.
                after_reader
            } else {
                let reply = minimax::best_reply(&after_reader)?;
                after_reader.place(reply, Player::O)?
            };
            let target = self.intern(next);
            transitions.push((pos, target));
        }

        if let Some(page) = self.graph.pages.get_mut(key) {
            page.transitions = transitions;
        }
        Ok(())
    }
}

/// Build the complete catalog from the empty board.
///
/// Every distinct board reachable under "reader marks a square, the book
/// answers with its best reply while the game continues" becomes exactly
/// one page; the queue drains once each has been expanded.
pub fn build_page_graph() -> Result<PageGraph> {
    let mut state = BuilderState::new();
    while let Some(key) = state.queue.pop_front() {
        state.expand(&key)?;
    }
    Ok(state.graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_one_is_empty_board() {
        let graph = build_page_graph().unwrap();
        let first = graph.page(PageId::new(1)).unwrap();
        assert_eq!(first.board, Board::new());
        assert_eq!(first.outcome, Outcome::Open);
    }

    #[test]
    fn test_page_one_transitions_cover_all_squares() {
        let graph = build_page_graph().unwrap();
        let first = graph.page(PageId::new(1)).unwrap();

        // Nine fresh boards discovered in row-major order take ids 2-10.
        let expected: Vec<(usize, PageId)> = (0..9)
            .map(|pos| (pos, PageId::new(pos as u32 + 2)))
            .collect();
        assert_eq!(first.transitions, expected);
    }

    #[test]
    fn test_keys_are_unique_and_match_boards() {
        let graph = build_page_graph().unwrap();
        let mut seen = std::collections::HashSet::new();
        for page in graph.pages() {
            assert!(seen.insert(page.board.encode()), "duplicate page content");
            assert_eq!(graph.get(&page.board.encode()).unwrap().id, page.id);
        }
        assert_eq!(seen.len(), graph.len());
    }

    #[test]
    fn test_lookup_by_id_round_trips() {
        let graph = build_page_graph().unwrap();
        for page in graph.pages() {
            assert_eq!(graph.page(page.id).unwrap().id, page.id);
        }
        assert!(graph.page(PageId::new(0)).is_none());
        assert!(graph.page(PageId::new(graph.len() as u32 + 1)).is_none());
    }
}
