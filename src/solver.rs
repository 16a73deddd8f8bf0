//! A* search over caller-defined state spaces.
//!
//! The engine is problem-agnostic: callers supply a goal test, a successor
//! generator and a heuristic, either as closures ([`a_star_search`]) or by
//! implementing [`SearchProblem`] ([`solve`]). Every transition costs 1.
//!
//! Nodes are expanded in ascending `f = g + h`. The explored table remembers the
//! cost at which each state was expanded; a popped node whose state was already
//! expanded at an equal or lower cost is a stale duplicate and is dropped
//! without being counted. For the first goal popped to be optimal the heuristic
//! must be admissible, and for the duplicate rule to be safe it must also be
//! consistent. Neither property is checked here.
//!
//! The engine never fails. If the frontier runs dry the result simply has no
//! goal node. If the state space is infinite and holds no goal, the call does
//! not return unless [`SearchConfig::max_expansions`] is set.

use std::hash::Hash;
use std::rc::Rc;

use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::node::SearchNode;

/// A state space the engine can search.
pub trait SearchProblem {
    /// One configuration of the problem. Equal states must hash equally.
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All states reachable from `state` in one unit-cost step. Must be finite.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Estimated remaining cost from `state`. Must be finite, non-negative and
    /// zero at goal states. Defaults to 0, which turns A* into uniform-cost search.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A goal state was popped from the frontier.
    GoalReached,
    /// Every reachable state was expanded without finding a goal.
    FrontierExhausted,
    /// `max_expansions` was reached before a goal was popped.
    ExpansionLimit,
}

/// Outcome of a search: the goal node (if any) and the work counters.
#[derive(Debug)]
pub struct SearchResult<S> {
    /// The goal node, `None` when no goal was found.
    pub goal: Option<Rc<SearchNode<S>>>,
    /// Nodes created, including the root.
    pub nodes_generated: u64,
    /// Nodes whose successors were generated. Stale duplicates are not counted.
    pub nodes_expanded: u64,
    /// Largest frontier size seen during the run.
    pub frontier_high_water: usize,
    pub termination: Termination,
}

impl<S> SearchResult<S> {
    pub fn is_solved(&self) -> bool {
        self.goal.is_some()
    }

    /// Number of transitions on the solution path.
    pub fn solution_length(&self) -> Option<u32> {
        self.goal.as_ref().map(|node| node.cost())
    }
}

impl<S: Clone> SearchResult<S> {
    /// States from the start to the goal, start first.
    pub fn path(&self) -> Option<Vec<S>> {
        self.goal.as_ref().map(|node| node.path())
    }
}

/// Runs A* from `start` with the default configuration.
///
/// # Arguments
/// * `start`: The initial state.
/// * `goal_test`: Returns `true` iff a state is a goal.
/// * `next_states`: Enumerates the successors of a state.
/// * `heuristic`: Estimates the remaining cost of a state.
///
/// # Returns
/// A [`SearchResult`] holding the goal node (or `None` if no goal is
/// reachable) together with the generated and expanded node counts.
///
/// # Examples
/// ```
/// use astar_search::solver::a_star_search;
///
/// let result = a_star_search(
///     0u32,
///     |&s| s == 10,
///     |&s| [s + 1, s + 2].into_iter().filter(|&n| n <= 10).collect::<Vec<_>>(),
///     |_| 0.0,
/// );
/// assert_eq!(result.solution_length(), Some(5));
/// assert_eq!(result.path().unwrap().last(), Some(&10));
/// ```
pub fn a_star_search<S, G, N, I, H>(
    start: S,
    goal_test: G,
    next_states: N,
    heuristic: H,
) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    H: FnMut(&S) -> f64,
{
    search_with_config(
        start,
        &SearchConfig::default(),
        goal_test,
        next_states,
        heuristic,
    )
}

/// Runs A* on a [`SearchProblem`].
pub fn solve<P: SearchProblem>(problem: &P, config: &SearchConfig) -> SearchResult<P::State> {
    search_with_config(
        problem.start(),
        config,
        |s| problem.is_goal(s),
        |s| problem.successors(s),
        |s| problem.heuristic(s),
    )
}

/// Runs A* from `start` under `config`. See [`a_star_search`] for the arguments.
pub fn search_with_config<S, G, N, I, H>(
    start: S,
    config: &SearchConfig,
    mut goal_test: G,
    mut next_states: N,
    mut heuristic: H,
) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    H: FnMut(&S) -> f64,
{
    let mut frontier = Frontier::with_tie_break(config.tie_break);
    let mut explored: FxHashMap<S, u32> = FxHashMap::default();

    let h_start = heuristic(&start);
    let root = SearchNode::root(start, h_start);
    let root_key = OrderedFloat(root.evaluation());
    frontier.push(root, root_key);

    let mut nodes_generated: u64 = 1;
    let mut nodes_expanded: u64 = 0;

    tracing::debug!(
        h_start,
        max_expansions = ?config.max_expansions,
        tie_break = ?config.tie_break,
        "Starting A* search"
    );

    let (goal, termination) = loop {
        let Some(node) = frontier.pop() else {
            break (None, Termination::FrontierExhausted);
        };

        if goal_test(node.state()) {
            break (Some(node), Termination::GoalReached);
        }

        if let Some(&best_cost) = explored.get(node.state()) {
            if best_cost <= node.cost() {
                tracing::trace!(
                    cost = node.cost(),
                    best_cost,
                    "Discarding stale frontier entry"
                );
                continue;
            }
        }

        if config
            .max_expansions
            .is_some_and(|limit| nodes_expanded >= limit)
        {
            break (None, Termination::ExpansionLimit);
        }

        explored.insert(node.state().clone(), node.cost());
        nodes_expanded += 1;
        tracing::trace!(
            cost = node.cost(),
            evaluation = node.evaluation(),
            frontier = frontier.len(),
            "Expanding node"
        );

        for successor in next_states(node.state()) {
            let h = heuristic(&successor);
            let child = SearchNode::child(&node, successor, h);
            let key = OrderedFloat(child.evaluation());
            frontier.push(child, key);
            nodes_generated += 1;
        }
    };

    tracing::debug!(
        nodes_generated,
        nodes_expanded,
        frontier_high_water = frontier.high_water(),
        ?termination,
        solution_length = ?goal.as_ref().map(|n| n.cost()),
        "A* search finished"
    );

    SearchResult {
        goal,
        nodes_generated,
        nodes_expanded,
        frontier_high_water: frontier.high_water(),
        termination,
    }
}
