use std::marker::PhantomData;

/// Expands a training case into every equivalent case under the board's symmetries. The first
/// returned case is the input itself.
pub trait Symmetries {
    type State;

    fn symmetries(&self, state: &Self::State, distribution: &[f32]) -> Vec<(Self::State, Vec<f32>)>;
}

pub struct NoSymmetries<S> {
    _phantom: PhantomData<S>,
}

impl<S> NoSymmetries<S> {
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S> Default for NoSymmetries<S> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S> Symmetries for NoSymmetries<S>
where
    S: Clone,
{
    type State = S;

    fn symmetries(&self, state: &Self::State, distribution: &[f32]) -> Vec<(Self::State, Vec<f32>)> {
        vec![(state.clone(), distribution.to_vec())]
    }
}
