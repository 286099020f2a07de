use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingCase<S> {
    pub state: S,
    pub distribution: Vec<f32>,
}

impl<S> TrainingCase<S> {
    pub fn new(state: S, distribution: Vec<f32>) -> Self {
        Self {
            state,
            distribution,
        }
    }
}
