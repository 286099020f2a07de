use model::Symmetries;

use super::{board, GameState};

/// Equivalent Hex positions for training-case augmentation: the half turn, the colour swap
/// (transpose with swapped players) and both combined.
#[derive(Default)]
pub struct HexSymmetries;

impl HexSymmetries {
    pub fn new() -> Self {
        Self
    }
}

impl Symmetries for HexSymmetries {
    type State = GameState;

    fn symmetries(&self, state: &Self::State, distribution: &[f32]) -> Vec<(Self::State, Vec<f32>)> {
        let size = state.size();

        let rotate = |dist: &[f32]| dist.iter().rev().copied().collect::<Vec<_>>();
        let transpose = |dist: &[f32]| {
            let mut out = vec![0.0; dist.len()];
            for (position, p) in dist.iter().enumerate() {
                out[board::transpose(size, position)] = *p;
            }
            out
        };

        let swapped = state.swapped();
        let swapped_distribution = transpose(distribution);

        vec![
            (state.clone(), distribution.to_vec()),
            (state.rotated(), rotate(distribution)),
            (swapped.rotated(), rotate(&swapped_distribution)),
            (swapped, swapped_distribution),
        ]
    }
}
