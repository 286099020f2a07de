use super::NodeId;

/// A parent to child link with its visit count and running-mean action value. Values are always
/// from the perspective of `Player::One`.
#[derive(Debug, Clone)]
pub struct MCTSEdge {
    child: NodeId,
    visits: usize,
    action_value: f32,
    active: bool,
}

impl MCTSEdge {
    pub fn new(child: NodeId) -> Self {
        Self {
            child,
            visits: 0,
            action_value: 0.0,
            active: false,
        }
    }

    pub fn child(&self) -> NodeId {
        self.child
    }

    pub(crate) fn set_child(&mut self, child: NodeId) {
        self.child = child;
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn action_value(&self) -> f32 {
        self.action_value
    }

    /// Whether the edge lies on the path of the iteration currently in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mark_active(&mut self) {
        self.active = true;
    }

    /// Folds one rollout outcome into the running mean and consumes the active flag.
    pub fn record(&mut self, outcome: f32) {
        self.visits += 1;
        self.action_value += (outcome - self.action_value) / self.visits as f32;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_record_is_running_mean() {
        let mut edge = MCTSEdge::new(NodeId::from_usize(1));

        edge.mark_active();
        edge.record(1.0);
        edge.record(-1.0);
        edge.record(1.0);

        assert_eq!(edge.visits(), 3);
        assert_approx_eq!(edge.action_value(), 1.0 / 3.0);
        assert!(!edge.is_active());
    }
}
