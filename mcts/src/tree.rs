use std::collections::HashMap;

use engine::GameState;
use log::debug;

use super::{rebuild_from_root, MCTSEdge, MCTSNode, NodeArena, NodeId, SearchError};

/// Nodes keyed by state identity, joined by edges carrying visit counts and action values.
///
/// A state reachable by several move orders is stored once and has several incoming edges. The
/// tree only ever grows during a search; `prune_to` discards everything not reachable from the
/// state actually played.
#[derive(Debug)]
pub struct SearchTree<S> {
    arena: NodeArena<MCTSNode<S>>,
    transpositions: HashMap<S, NodeId>,
    root: NodeId,
}

impl<S> SearchTree<S>
where
    S: GameState,
{
    pub fn new(root_state: S) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.push(MCTSNode::new(root_state.clone()));

        let mut transpositions = HashMap::new();
        transpositions.insert(root_state, root);

        Self {
            arena,
            transpositions,
            root,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn root_state(&self) -> &S {
        self.arena.get(self.root).state()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &MCTSNode<S> {
        self.arena.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut MCTSNode<S> {
        self.arena.get_mut(id)
    }

    pub fn node_id(&self, state: &S) -> Option<NodeId> {
        self.transpositions.get(state).copied()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.transpositions.contains_key(state)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.arena.iter().map(|(_, node)| node.state())
    }

    pub fn visits(&self, state: &S) -> Option<usize> {
        self.node_id(state).map(|id| self.node(id).visits())
    }

    /// Adds a node for `state` unless one already exists. Existing statistics are left untouched.
    pub fn add_node(&mut self, state: S) -> NodeId {
        if let Some(id) = self.node_id(&state) {
            return id;
        }

        let id = self.arena.push(MCTSNode::new(state.clone()));
        self.transpositions.insert(state, id);
        id
    }

    /// Joins two known states. Re-adding an existing edge keeps its statistics.
    pub fn add_edge(&mut self, parent: &S, child: &S) -> Result<(), SearchError> {
        let parent = self.require(parent)?;
        let child = self.require(child)?;
        self.link(parent, child);
        Ok(())
    }

    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId) {
        if self.arena.get_mut(parent).add_edge(child) {
            self.arena.get_mut(child).add_parent(parent);
        }
    }

    pub fn edge(&self, parent: &S, child: &S) -> Option<&MCTSEdge> {
        let parent = self.node(self.node_id(parent)?);
        let index = parent.edge_to(self.node_id(child)?)?;
        Some(&parent.edges()[index])
    }

    /// Outgoing edges of `state`, optionally only those never visited. An empty result means the
    /// node has not been expanded.
    pub fn outgoing_edges(
        &self,
        state: &S,
        only_unvisited: bool,
    ) -> Result<Vec<&MCTSEdge>, SearchError> {
        let node = self.node(self.require(state)?);

        Ok(node
            .edges()
            .iter()
            .filter(|edge| !only_unvisited || edge.visits() == 0)
            .collect())
    }

    /// The predecessor of `state` on the path of the current iteration.
    pub fn parent_of(&self, state: &S) -> Result<&S, SearchError> {
        let (parent, _) = self.parent_edge(self.require(state)?)?;
        Ok(self.node(parent).state())
    }

    /// The unique parent of `id` with the index of the connecting edge. With several parents the
    /// one whose edge is marked active is chosen; anything other than exactly one is an error.
    pub(crate) fn parent_edge(&self, id: NodeId) -> Result<(NodeId, usize), SearchError> {
        let node = self.node(id);
        let edge_from = |parent: NodeId| self.node(parent).edge_to(id).map(|i| (parent, i));

        if let [parent] = node.parents() {
            if let Some(found) = edge_from(*parent) {
                return Ok(found);
            }
        }

        let active: Vec<_> = node
            .parents()
            .iter()
            .filter_map(|parent| edge_from(*parent))
            .filter(|(parent, index)| self.node(*parent).edges()[*index].is_active())
            .collect();

        match active[..] {
            [found] => Ok(found),
            _ => Err(SearchError::AmbiguousParent {
                state: format!("{:?}", node.state()),
                active: active.len(),
            }),
        }
    }

    /// Makes `state` the root and releases every node not reachable from it.
    pub fn prune_to(&mut self, state: &S) -> Result<(), SearchError> {
        let new_root = self.require(state)?;
        let before = self.len();

        let rebuilt = rebuild_from_root(std::mem::take(&mut self.arena), new_root);

        self.transpositions = rebuilt
            .arena
            .iter()
            .map(|(id, node)| (node.state().clone(), id))
            .collect();
        self.arena = rebuilt.arena;
        self.root = rebuilt.root;

        debug!("Pruned search tree from {} to {} nodes", before, self.len());

        Ok(())
    }

    fn require(&self, state: &S) -> Result<NodeId, SearchError> {
        self.node_id(state)
            .ok_or_else(|| SearchError::UnknownState(format!("{:?}", state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SearchTree<&'static str> {
        //     a
        //    / \
        //   b   c
        //    \ / \
        //     d   e
        let mut tree = SearchTree::new("a");
        for state in ["b", "c", "d", "e"] {
            tree.add_node(state);
        }
        for (parent, child) in [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("c", "e")] {
            tree.add_edge(&parent, &child).unwrap();
        }
        tree
    }

    fn mark_active(tree: &mut SearchTree<&'static str>, parent: &'static str, child: &'static str) {
        let parent_id = tree.node_id(&parent).unwrap();
        let child_id = tree.node_id(&child).unwrap();
        let index = tree.node(parent_id).edge_to(child_id).unwrap();
        tree.node_mut(parent_id).edge_mut(index).mark_active();
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut tree = tree();
        let id = tree.node_id(&"d").unwrap();
        tree.node_mut(id).increment_visits();

        assert_eq!(tree.add_node("d"), id);
        assert_eq!(tree.visits(&"d"), Some(1));
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut tree = tree();
        mark_active(&mut tree, "a", "b");

        tree.add_edge(&"a", &"b").unwrap();

        assert_eq!(tree.outgoing_edges(&"a", false).unwrap().len(), 2);
        assert!(tree.edge(&"a", &"b").unwrap().is_active());
    }

    #[test]
    fn test_add_edge_requires_known_states() {
        let mut tree = tree();

        assert!(matches!(
            tree.add_edge(&"a", &"z"),
            Err(SearchError::UnknownState(_))
        ));
    }

    #[test]
    fn test_outgoing_edges_can_skip_visited() {
        let mut tree = tree();
        let a = tree.root();
        tree.node_mut(a).edge_mut(0).record(1.0);

        assert_eq!(tree.outgoing_edges(&"a", false).unwrap().len(), 2);
        assert_eq!(tree.outgoing_edges(&"a", true).unwrap().len(), 1);
        assert!(tree.outgoing_edges(&"d", false).unwrap().is_empty());
    }

    #[test]
    fn test_parent_of_single_parent() {
        let tree = tree();

        assert_eq!(*tree.parent_of(&"b").unwrap(), "a");
        assert_eq!(*tree.parent_of(&"e").unwrap(), "c");
    }

    #[test]
    fn test_parent_of_transposition_uses_active_edge() {
        let mut tree = tree();
        mark_active(&mut tree, "c", "d");

        assert_eq!(*tree.parent_of(&"d").unwrap(), "c");
    }

    #[test]
    fn test_parent_of_without_active_edge_is_ambiguous() {
        let tree = tree();

        assert!(matches!(
            tree.parent_of(&"d"),
            Err(SearchError::AmbiguousParent { active: 0, .. })
        ));
    }

    #[test]
    fn test_parent_of_with_two_active_edges_is_ambiguous() {
        let mut tree = tree();
        mark_active(&mut tree, "b", "d");
        mark_active(&mut tree, "c", "d");

        assert!(matches!(
            tree.parent_of(&"d"),
            Err(SearchError::AmbiguousParent { active: 2, .. })
        ));
    }

    #[test]
    fn test_parent_of_root_is_an_error() {
        let tree = tree();

        assert!(tree.parent_of(&"a").is_err());
    }

    #[test]
    fn test_prune_keeps_reachable_subgraph() {
        let mut tree = tree();
        let c = tree.node_id(&"c").unwrap();
        tree.node_mut(c).increment_visits();

        tree.prune_to(&"c").unwrap();

        let mut states: Vec<_> = tree.states().copied().collect();
        states.sort();
        assert_eq!(states, vec!["c", "d", "e"]);
        assert_eq!(*tree.root_state(), "c");
        assert_eq!(tree.visits(&"c"), Some(1));
        assert!(!tree.contains(&"a"));
        assert!(!tree.contains(&"b"));

        // "d" lost its parent "b" along with the rest of the discarded tree.
        assert_eq!(*tree.parent_of(&"d").unwrap(), "c");
        assert!(tree.node(tree.root()).parents().is_empty());
    }

    #[test]
    fn test_prune_to_unknown_state_fails() {
        let mut tree = tree();

        assert!(matches!(
            tree.prune_to(&"z"),
            Err(SearchError::UnknownState(_))
        ));
        assert_eq!(tree.len(), 5);
    }
}
