use std::fmt::Display;

use engine::{GameEngine, GameState, Player};
use log::debug;
use model::Policy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{
    best_index, uct_score, LogObserver, MCTSOptions, NodeId, SearchError, SearchObserver,
    SearchTree,
};

/// The move picked by a search together with the visit distribution it was derived from.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    pub action: A,
    pub state: S,
    pub distribution: Vec<f32>,
}

/// Monte Carlo tree search with UCT descent and policy-guided rollouts.
///
/// Values are kept from `Player::One`'s perspective: a rollout won by player One scores `1.0`,
/// otherwise `-1.0`. The tree survives between real moves and is pruned to the subtree below
/// the move that was played.
pub struct MCTS<'a, E, P, O = LogObserver>
where
    E: GameEngine,
{
    options: MCTSOptions,
    game_engine: &'a E,
    policy: P,
    observer: O,
    tree: SearchTree<E::State>,
    rng: StdRng,
    iterations: usize,
}

impl<'a, E, P> MCTS<'a, E, P, LogObserver>
where
    E: GameEngine,
    E::State: GameState,
{
    pub fn new(
        game_state: E::State,
        game_engine: &'a E,
        policy: P,
        options: MCTSOptions,
    ) -> Self {
        let rng = common::create_rng(options.seed);

        Self {
            options,
            game_engine,
            policy,
            observer: LogObserver,
            tree: SearchTree::new(game_state),
            rng,
            iterations: 0,
        }
    }
}

impl<'a, E, P, O> MCTS<'a, E, P, O>
where
    E: GameEngine,
    E::State: GameState + Display,
    E::Action: Display,
    P: Policy<State = E::State>,
    O: SearchObserver,
{
    pub fn with_observer<O2: SearchObserver>(self, observer: O2) -> MCTS<'a, E, P, O2> {
        MCTS {
            options: self.options,
            game_engine: self.game_engine,
            policy: self.policy,
            observer,
            tree: self.tree,
            rng: self.rng,
            iterations: self.iterations,
        }
    }

    pub fn tree(&self) -> &SearchTree<E::State> {
        &self.tree
    }

    #[cfg(test)]
    pub(crate) fn tree_mut(&mut self) -> &mut SearchTree<E::State> {
        &mut self.tree
    }

    pub fn root_state(&self) -> &E::State {
        self.tree.root_state()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Searches `iterations` times from `game_state`, reports the resulting visit distribution to
    /// the policy and plays the greedy move. The tree is advanced to the chosen child.
    pub fn run(
        &mut self,
        game_state: &E::State,
        iterations: usize,
    ) -> Result<SearchResult<E::State, E::Action>, SearchError> {
        self.advance_to_state(game_state)?;
        self.search(iterations)?;
        self.choose()
    }

    /// Runs `iterations` select, expand, simulate and backpropagate passes from the current root.
    pub fn search(&mut self, iterations: usize) -> Result<(), SearchError> {
        for _ in 0..iterations {
            let (leaf, outcome) = self.iterate()?;
            self.iterations += 1;
            self.observer
                .on_iteration(self.iterations, self.tree.node(leaf).state(), outcome);
        }

        Ok(())
    }

    /// Makes `game_state` the root. The known subtree below it is kept; an unknown state starts a
    /// fresh tree.
    pub fn advance_to_state(&mut self, game_state: &E::State) -> Result<(), SearchError> {
        if self.tree.root_state() == game_state {
            return Ok(());
        }

        if self.tree.contains(game_state) {
            self.tree.prune_to(game_state)
        } else {
            debug!("State {} is not in the tree, starting a new one", game_state);
            self.tree = SearchTree::new(game_state.clone());
            Ok(())
        }
    }

    /// Applies `action` to the current root and advances to the resulting state.
    pub fn advance_to_action(&mut self, action: &E::Action) -> Result<(), SearchError> {
        let next = self
            .game_engine
            .take_action(self.tree.root_state(), action)?;
        self.advance_to_state(&next)
    }

    /// Visit counts of the root's children, normalized to sum to one, with one bucket per action.
    /// Buckets without a child are zero.
    pub fn root_distribution(&self) -> Result<Vec<f32>, SearchError> {
        let root_state = self.tree.root_state();
        let mut distribution = vec![0.0; self.game_engine.action_space_size()];

        for edge in self.tree.node(self.tree.root()).edges() {
            let child_state = self.tree.node(edge.child()).state();
            let action = self.game_engine.derive_action(root_state, child_state)?;
            distribution[self.game_engine.action_index(&action)] += edge.visits() as f32;
        }

        Ok(common::normalize(&distribution).unwrap_or(distribution))
    }

    fn choose(&mut self) -> Result<SearchResult<E::State, E::Action>, SearchError> {
        let distribution = self.root_distribution()?;
        let root = self.tree.root();
        let root_state = self.tree.root_state().clone();

        self.policy.add_case(&root_state, &distribution);

        let child = self.greedy_child(root)?;
        let state = self.tree.node(child).state().clone();
        let action = self.game_engine.derive_action(&root_state, &state)?;

        self.observer.on_move_chosen(
            &root_state,
            &action,
            self.tree.node(root).visits(),
            &distribution,
        );

        self.tree.prune_to(&state)?;

        Ok(SearchResult {
            action,
            state,
            distribution,
        })
    }

    /// Highest action value for player One, lowest for player Two. Unvisited edges only compete
    /// when no edge has been visited.
    fn greedy_child(&self, id: NodeId) -> Result<NodeId, SearchError> {
        let node = self.tree.node(id);
        let maximizing = self.game_engine.player_to_move(node.state()).is_maximizing();

        let visited: Vec<_> = node.edges().iter().filter(|e| e.visits() > 0).collect();
        let candidates = if visited.is_empty() {
            node.edges().iter().collect()
        } else {
            visited
        };

        best_index(candidates.iter().map(|e| e.action_value()), maximizing)
            .map(|index| candidates[index].child())
            .ok_or_else(|| SearchError::NoChildren(node.state().to_string()))
    }

    fn iterate(&mut self) -> Result<(NodeId, f32), SearchError> {
        let leaf = self.select()?;
        let leaf_state = self.tree.node(leaf).state().clone();
        let outcome = self.rollout(leaf_state)?;
        self.backpropagate(leaf, outcome)?;
        Ok((leaf, outcome))
    }

    /// Descends from the root and returns the node to simulate from. Every edge taken is marked
    /// active so backpropagation can retrace the path through transpositions.
    fn select(&mut self) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();
        let mut depth = 0;

        loop {
            let node = self.tree.node(current);

            if depth >= self.options.max_depth || self.game_engine.is_terminal(node.state()) {
                return Ok(current);
            }

            if !node.is_expanded() {
                return self.expand(current);
            }

            let unvisited: Vec<usize> = node
                .edges()
                .iter()
                .enumerate()
                .filter(|(_, e)| e.visits() == 0)
                .map(|(i, _)| i)
                .collect();

            if let Some(&index) = unvisited.choose(&mut self.rng) {
                return Ok(self.take_edge(current, index));
            }

            let index = self.best_uct_edge(current)?;
            current = self.take_edge(current, index);
            depth += 1;
        }
    }

    /// Adds every child of `id` to the tree and picks one at random to simulate from.
    fn expand(&mut self, id: NodeId) -> Result<NodeId, SearchError> {
        let game_state = self.tree.node(id).state().clone();

        for action in self.game_engine.legal_actions(&game_state) {
            let child = self.game_engine.take_action(&game_state, &action)?;
            let child = self.tree.add_node(child);
            self.tree.link(id, child);
        }

        let len = self.tree.node(id).edges().len();
        if len == 0 {
            return Err(SearchError::NoLegalActions(game_state.to_string()));
        }

        let index = self.rng.gen_range(0..len);
        Ok(self.take_edge(id, index))
    }

    fn take_edge(&mut self, id: NodeId, index: usize) -> NodeId {
        let edge = self.tree.node_mut(id).edge_mut(index);
        edge.mark_active();
        edge.child()
    }

    fn best_uct_edge(&self, id: NodeId) -> Result<usize, SearchError> {
        let node = self.tree.node(id);
        let maximizing = self.game_engine.player_to_move(node.state()).is_maximizing();
        let c = self.options.c;

        let scores = node
            .edges()
            .iter()
            .map(|e| uct_score(e.action_value(), node.visits(), e.visits(), c, maximizing));

        best_index(scores, maximizing)
            .ok_or_else(|| SearchError::NoChildren(node.state().to_string()))
    }

    /// Plays out a disposable copy of a state to the end and scores it for player One.
    fn rollout(&mut self, mut game_state: E::State) -> Result<f32, SearchError> {
        while !self.game_engine.is_terminal(&game_state) {
            let action = self.rollout_action(&game_state)?;
            self.game_engine.play_action(&mut game_state, &action)?;
        }

        Ok(match self.game_engine.winner(&game_state) {
            Some(winner) => Player::outcome(winner),
            None => 0.0,
        })
    }

    /// Epsilon-greedy pick over the policy's prediction masked to the legal actions. Ties for the
    /// most probable action are broken at random. Falls back to a uniform pick when the policy
    /// puts no mass on any legal action.
    pub(crate) fn rollout_action(&mut self, game_state: &E::State) -> Result<E::Action, SearchError> {
        let mut legal_actions = self.game_engine.legal_actions(game_state);

        if legal_actions.is_empty() {
            return Err(SearchError::NoLegalActions(game_state.to_string()));
        }

        let prediction = self.policy.predict(game_state);
        let masked: Vec<f32> = legal_actions
            .iter()
            .map(|a| {
                let p = prediction
                    .get(self.game_engine.action_index(a))
                    .copied()
                    .unwrap_or(0.0);
                if p.is_finite() {
                    p.max(0.0)
                } else {
                    0.0
                }
            })
            .collect();

        let index = match common::normalize(&masked) {
            Some(probabilities) => {
                if self.rng.gen::<f32>() < self.options.epsilon {
                    let supported: Vec<usize> = (0..probabilities.len())
                        .filter(|i| probabilities[*i] > 0.0)
                        .collect();
                    supported.choose(&mut self.rng).copied().unwrap_or(0)
                } else {
                    let max = probabilities.iter().copied().fold(0.0, f32::max);
                    let maximal: Vec<usize> = (0..probabilities.len())
                        .filter(|i| probabilities[*i] == max)
                        .collect();
                    maximal.choose(&mut self.rng).copied().unwrap_or(0)
                }
            }
            None => self.rng.gen_range(0..legal_actions.len()),
        };

        Ok(legal_actions.swap_remove(index))
    }

    /// Walks from `leaf` back to the root through the active edges, folding `outcome` into every
    /// edge and node on the way.
    fn backpropagate(&mut self, leaf: NodeId, outcome: f32) -> Result<(), SearchError> {
        let root = self.tree.root();
        let mut current = leaf;

        loop {
            self.tree.node_mut(current).increment_visits();

            if current == root {
                return Ok(());
            }

            let (parent, index) = self.tree.parent_edge(current)?;
            self.tree.node_mut(parent).edge_mut(index).record(outcome);
            current = parent;
        }
    }
}
