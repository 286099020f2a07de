use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Removes the given number of pieces from the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Take(pub usize);

impl Display for Take {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "removes {} pieces", self.0)
    }
}
