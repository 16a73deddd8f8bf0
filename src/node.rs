//! Search nodes and path reconstruction.
//!
//! A `SearchNode` is created once per generated successor and never mutated.
//! Parents are shared through `Rc`, so a node stays alive exactly as long as a
//! frontier entry or one of its descendants still refers to it. Dropping a node
//! releases its uniquely owned ancestors in a loop, so arbitrarily deep paths
//! do not overflow the stack.

use std::rc::Rc;

/// An immutable node in the search tree.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    parent: Option<Rc<SearchNode<S>>>,
    cost: u32,
    evaluation: f64,
}

impl<S> SearchNode<S> {
    /// Creates the root node for `state` with `g = 0` and `f = heuristic`.
    pub fn root(state: S, heuristic: f64) -> Rc<Self> {
        Rc::new(SearchNode {
            state,
            parent: None,
            cost: 0,
            evaluation: heuristic,
        })
    }

    /// Creates a successor of `parent` one unit-cost step further away.
    ///
    /// # Arguments
    /// * `parent`: The node that produced `state`.
    /// * `state`: The successor state.
    /// * `heuristic`: `h(state)`, added to the new path cost to form `f`.
    pub fn child(parent: &Rc<Self>, state: S, heuristic: f64) -> Rc<Self> {
        let cost = parent.cost + 1;
        Rc::new(SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            cost,
            evaluation: f64::from(cost) + heuristic,
        })
    }

    /// The wrapped state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node that produced this one, `None` for the root.
    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    /// Accumulated path cost `g(n)`.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Frontier priority `f(n) = g(n) + h(n)`.
    pub fn evaluation(&self) -> f64 {
        self.evaluation
    }

    /// Iterates from this node up to the root.
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors {
            current: Some(self),
        }
    }
}

impl<S: Clone> SearchNode<S> {
    /// Reconstructs the state sequence from the root to this node, root first.
    pub fn path(&self) -> Vec<S> {
        let mut path: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        path.reverse();
        path
    }
}

impl<S> Drop for SearchNode<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            // Stop at the first ancestor someone else still holds.
            next = match Rc::try_unwrap(parent) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// Iterator over a node and its ancestors, produced by [`SearchNode::ancestors`].
pub struct Ancestors<'a, S> {
    current: Option<&'a SearchNode<S>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.parent.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_zero_cost_and_heuristic_evaluation() {
        let root = SearchNode::root('a', 3.5);
        assert_eq!(root.cost(), 0);
        assert_eq!(root.evaluation(), 3.5);
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_child_adds_unit_cost() {
        let root = SearchNode::root('a', 2.0);
        let b = SearchNode::child(&root, 'b', 1.0);
        let c = SearchNode::child(&b, 'c', 0.0);

        assert_eq!(b.cost(), 1);
        assert_eq!(b.evaluation(), 2.0);
        assert_eq!(c.cost(), 2);
        assert_eq!(c.evaluation(), 2.0);
        assert_eq!(*c.parent().unwrap().state(), 'b');
    }

    #[test]
    fn test_path_is_root_first() {
        let root = SearchNode::root(0, 0.0);
        let one = SearchNode::child(&root, 1, 0.0);
        let two = SearchNode::child(&one, 2, 0.0);
        assert_eq!(two.path(), vec![0, 1, 2]);
        assert_eq!(root.path(), vec![0]);
    }

    #[test]
    fn test_siblings_share_parent() {
        let root = SearchNode::root("start", 0.0);
        let left = SearchNode::child(&root, "left", 0.0);
        let right = SearchNode::child(&root, "right", 0.0);
        // root + two child links
        assert_eq!(Rc::strong_count(&root), 3);
        drop(left);
        assert_eq!(Rc::strong_count(&root), 2);
        assert_eq!(right.path(), vec!["start", "right"]);
    }

    #[test]
    fn test_drop_keeps_shared_ancestors() {
        let root = SearchNode::root(0, 0.0);
        let mid = SearchNode::child(&root, 1, 0.0);
        let leaf = SearchNode::child(&mid, 2, 0.0);
        drop(mid);
        let branch = SearchNode::child(leaf.parent().unwrap(), 3, 0.0);

        drop(leaf);
        assert_eq!(branch.path(), vec![0, 1, 3]);
        assert_eq!(Rc::strong_count(&root), 2);
    }

    #[test]
    fn test_drop_deep_chain() {
        let mut node = SearchNode::root(0u32, 0.0);
        for state in 1..=1_000_000 {
            node = SearchNode::child(&node, state, 0.0);
        }
        assert_eq!(node.cost(), 1_000_000);
        drop(node);
    }

    #[test]
    fn test_ancestors_walks_to_root() {
        let root = SearchNode::root('x', 0.0);
        let y = SearchNode::child(&root, 'y', 0.0);
        let costs: Vec<u32> = y.ancestors().map(|n| n.cost()).collect();
        assert_eq!(costs, vec![1, 0]);
    }
}
