use std::fmt::Display;

use log::{debug, trace};

/// Receives progress notifications from a search.
pub trait SearchObserver {
    fn on_iteration<S: Display>(&self, _iteration: usize, _leaf: &S, _outcome: f32) {}

    fn on_move_chosen<S: Display, A: Display>(
        &self,
        _state: &S,
        _action: &A,
        _root_visits: usize,
        _distribution: &[f32],
    ) {
    }
}

/// Forwards search progress to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_iteration<S: Display>(&self, iteration: usize, leaf: &S, outcome: f32) {
        trace!(
            "Iteration {}: simulated from {} with outcome {}",
            iteration,
            leaf,
            outcome
        );
    }

    fn on_move_chosen<S: Display, A: Display>(
        &self,
        state: &S,
        action: &A,
        root_visits: usize,
        distribution: &[f32],
    ) {
        debug!(
            "Chose {} from {} after {} visits, distribution: {:?}",
            action, state, root_visits, distribution
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
