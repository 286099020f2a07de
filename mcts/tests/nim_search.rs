use engine::{GameEngine, Player};
use mcts::{MCTSOptions, MCTS};
use model::{ReplayBuffer, UniformPolicy};
use nim::{Engine, Take};

fn options(seed: u64) -> MCTSOptions {
    MCTSOptions::new(1.0, 5, 1.0, Some(seed))
}

#[test]
fn test_takes_the_last_pieces() {
    let engine = Engine::new(3);
    let state = engine.initial_state(3, Player::One).unwrap();
    let policy = UniformPolicy::new(&engine, ReplayBuffer::new(100, 0.3, Some(1)));
    let mut mcts = MCTS::new(state.clone(), &engine, policy, options(1));

    let res = mcts.run(&state, 300).unwrap();

    assert_eq!(res.action, Take(3));
    assert_eq!(res.distribution.len(), 3);
}

#[test]
fn test_player_two_takes_the_last_pieces() {
    let engine = Engine::new(3);
    let state = engine.initial_state(2, Player::Two).unwrap();
    let policy = UniformPolicy::new(&engine, ReplayBuffer::new(100, 0.3, Some(1)));
    let mut mcts = MCTS::new(state.clone(), &engine, policy, options(2));

    let res = mcts.run(&state, 300).unwrap();

    assert_eq!(res.action, Take(2));
    assert_eq!(engine.winner(&res.state), Some(Player::Two));
}

#[test]
fn test_unreachable_buckets_stay_empty() {
    let engine = Engine::new(3);
    let state = engine.initial_state(2, Player::One).unwrap();
    let policy = UniformPolicy::new(&engine, ReplayBuffer::new(100, 0.3, Some(1)));
    let mut mcts = MCTS::new(state.clone(), &engine, policy, options(3));

    let res = mcts.run(&state, 50).unwrap();

    assert_eq!(res.distribution[2], 0.0);
}

#[test]
fn test_game_plays_out_with_tree_reuse() {
    let engine = Engine::new(3);
    let mut state = engine.initial_state(15, Player::One).unwrap();
    let policy = UniformPolicy::new(&engine, ReplayBuffer::new(100, 0.3, Some(1)));
    let mut mcts = MCTS::new(state.clone(), &engine, policy, options(4));
    let mut moves = 0;

    while !engine.is_terminal(&state) {
        let res = mcts.run(&state, 200).unwrap();
        engine.play_action(&mut state, &res.action).unwrap();
        assert_eq!(*mcts.root_state(), state);
        moves += 1;
    }

    assert_eq!(state.pieces(), 0);
    assert!(moves >= 5);
    assert_eq!(mcts.policy().replay_buffer().len(), moves);
}
