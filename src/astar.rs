//! A* over the four-neighbourhood of a [GridView] with unit step costs and the Euclidean distance
//! as heuristic. Search state (parents, costs, open set) lives in one call and is dropped with it.
use crate::cancel::CancelToken;
use crate::components::Components;
use crate::error::Result;
use crate::frontier::{new_frontier, FrontierKind};
use crate::report::{Reporter, Severity, NO_PATH_MESSAGE};
use crate::{Cell, FxIndexMap, GridView};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace};
use num_traits::Zero;

/// Settings for a [Pathfinder].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Open-set policy, which also fixes the tie-breaking rule between equal f-scores.
    pub frontier: FrontierKind,
    /// Stop with [SearchOutcome::LimitReached] after this many cells have been expanded.
    pub max_expansions: Option<usize>,
    /// Compute connected components before searching and skip the search entirely when start
    /// and end are disconnected. Costs one pass over the grid per call.
    pub precheck_components: bool,
}

impl SearchConfig {
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_component_precheck(mut self, enabled: bool) -> Self {
        self.precheck_components = enabled;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest path from start to end, both inclusive.
    Found(Vec<Cell>),
    /// The open set ran empty, or an endpoint is blocked. The reporter has been notified.
    NoPath,
    /// The [CancelToken] was raised during the search.
    Cancelled,
    /// [SearchConfig::max_expansions] was exhausted.
    LimitReached,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The found path, or an empty sequence for every other outcome.
    pub fn into_path(self) -> Vec<Cell> {
        match self {
            SearchOutcome::Found(path) => path,
            _ => Vec::new(),
        }
    }
}

/// Best known way of reaching a cell: index of the predecessor in the node table and the number
/// of steps from the start.
struct Node {
    parent: usize,
    cost: u32,
}

fn reverse_path(parents: &FxIndexMap<Cell, Node>, start: usize) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut i = start;
    while let Some((cell, node)) = parents.get_index(i) {
        path.push(*cell);
        i = node.parent;
    }
    path.reverse();
    path
}

/// Runs single searches according to its [SearchConfig]. Holds no per-search state, so one
/// [Pathfinder] can serve concurrent searches on shared grids.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder {
    pub config: SearchConfig,
    cancel: Option<CancelToken>,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Pathfinder {
        Pathfinder {
            config,
            cancel: None,
        }
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Validates `grid` and computes a path from `start` to `end`. See
    /// [find_path_in](Self::find_path_in).
    pub fn find_path<T, R, P>(
        &self,
        grid: &[R],
        start: Cell,
        end: Cell,
        reporter: &mut P,
    ) -> Result<SearchOutcome>
    where
        T: Zero,
        R: AsRef<[T]>,
        P: Reporter + ?Sized,
    {
        let view = GridView::new(grid)?;
        self.find_path_in(&view, start, end, reporter)
    }

    /// Computes a path on an already validated grid. Out-of-bounds endpoints are rejected before
    /// searching. [NO_PATH_MESSAGE] is sent to `reporter` at [Severity::Warning] exactly once when,
    /// and only when, the outcome is [SearchOutcome::NoPath].
    pub fn find_path_in<T, P>(
        &self,
        grid: &GridView<'_, T>,
        start: Cell,
        end: Cell,
        reporter: &mut P,
    ) -> Result<SearchOutcome>
    where
        T: Zero,
        P: Reporter + ?Sized,
    {
        grid.check_endpoints(start, end)?;
        trace!("Searching from {} to {} with {:?}", start, end, self.config);
        let outcome = if !grid.walkable(start) || !grid.walkable(end) {
            debug!("Endpoint blocked: {} -> {}", start, end);
            SearchOutcome::NoPath
        } else if self.config.precheck_components
            && Components::generate(grid).unreachable(start, end)
        {
            debug!("{} and {} lie in different components", start, end);
            SearchOutcome::NoPath
        } else {
            self.astar(grid, start, end)
        };
        if outcome == SearchOutcome::NoPath {
            reporter.display_message(NO_PATH_MESSAGE, Severity::Warning);
        }
        Ok(outcome)
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    fn astar<T: Zero>(&self, grid: &GridView<'_, T>, start: Cell, end: Cell) -> SearchOutcome {
        let mut to_see = new_frontier(self.config.frontier);
        let mut parents: FxIndexMap<Cell, Node> = FxIndexMap::default();
        parents.insert(
            start,
            Node {
                parent: usize::MAX,
                cost: 0,
            },
        );
        to_see.push(0, start.euclidean_distance(&end), 0);
        let mut expanded = 0usize;
        loop {
            if self.cancelled() {
                debug!("Search cancelled after {} expansions", expanded);
                return SearchOutcome::Cancelled;
            }
            let Some((index, cost)) = to_see.pop() else {
                break;
            };
            let Some((&node, best)) = parents.get_index(index) else {
                continue;
            };
            // A cell is pushed again whenever a cheaper way to it is found, skip the
            // outdated entries.
            if cost > best.cost {
                continue;
            }
            if node == end {
                debug!(
                    "Path of {} steps found after {} expansions, {} entries left open",
                    cost,
                    expanded,
                    to_see.len()
                );
                return SearchOutcome::Found(reverse_path(&parents, index));
            }
            if self.config.max_expansions.is_some_and(|limit| expanded >= limit) {
                debug!("Expansion limit of {} reached", expanded);
                return SearchOutcome::LimitReached;
            }
            expanded += 1;

            let new_cost = cost + 1;
            for successor in grid.walkable_neighbours(node) {
                let h; // heuristic(&successor)
                let n; // index for successor
                match parents.entry(successor) {
                    Vacant(e) => {
                        h = e.key().euclidean_distance(&end);
                        n = e.index();
                        e.insert(Node {
                            parent: index,
                            cost: new_cost,
                        });
                    }
                    Occupied(mut e) => {
                        if e.get().cost > new_cost {
                            h = e.key().euclidean_distance(&end);
                            n = e.index();
                            e.insert(Node {
                                parent: index,
                                cost: new_cost,
                            });
                        } else {
                            continue;
                        }
                    }
                }
                to_see.push(n, new_cost as f64 + h, new_cost);
            }
        }
        debug!(
            "Open set exhausted after {} expansions, {} cells reached",
            expanded,
            parents.len()
        );
        SearchOutcome::NoPath
    }
}
