use super::{MCTSEdge, NodeId};

#[derive(Debug)]
pub struct MCTSNode<S> {
    state: S,
    visits: usize,
    edges: Vec<MCTSEdge>,
    parents: Vec<NodeId>,
}

impl<S> MCTSNode<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            visits: 0,
            edges: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn increment_visits(&mut self) {
        self.visits += 1;
    }

    /// Outgoing edges in the order children were added.
    pub fn edges(&self) -> &[MCTSEdge] {
        &self.edges
    }

    pub fn edge_mut(&mut self, index: usize) -> &mut MCTSEdge {
        &mut self.edges[index]
    }

    pub fn is_expanded(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn edge_to(&self, child: NodeId) -> Option<usize> {
        self.edges.iter().position(|e| e.child() == child)
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub(crate) fn add_edge(&mut self, child: NodeId) -> bool {
        if self.edge_to(child).is_some() {
            return false;
        }

        self.edges.push(MCTSEdge::new(child));
        true
    }

    pub(crate) fn add_parent(&mut self, parent: NodeId) {
        if !self.parents.contains(&parent) {
            self.parents.push(parent);
        }
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [MCTSEdge] {
        &mut self.edges
    }

    pub(crate) fn set_parents(&mut self, parents: Vec<NodeId>) {
        self.parents = parents;
    }
}
