/// UCT score of an edge. The exploration bonus is added for the maximizing player and subtracted
/// for the minimizing player, so the former takes the highest score and the latter the lowest.
pub fn uct_score(
    action_value: f32,
    parent_visits: usize,
    edge_visits: usize,
    c: f32,
    maximizing: bool,
) -> f32 {
    let exploration = c * ((parent_visits as f32).ln() / (1.0 + edge_visits as f32)).sqrt();

    if maximizing {
        action_value + exploration
    } else {
        action_value - exploration
    }
}

/// Index of the best score. Ties go to the earliest index.
pub fn best_index(scores: impl IntoIterator<Item = f32>, maximizing: bool) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, score) in scores.into_iter().enumerate() {
        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };

        if better {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_exploration_term() {
        let bonus = (10f32.ln() / 3.0).sqrt();

        assert_approx_eq!(uct_score(0.5, 10, 2, 1.0, true), 0.5 + bonus);
        assert_approx_eq!(uct_score(0.5, 10, 2, 1.0, false), 0.5 - bonus);
        assert_approx_eq!(uct_score(0.5, 10, 2, 2.0, true), 0.5 + 2.0 * bonus);
    }

    #[test]
    fn test_single_parent_visit_has_no_bonus() {
        assert_approx_eq!(uct_score(-0.25, 1, 0, 1.0, true), -0.25);
    }

    #[test]
    fn test_best_index_breaks_ties_by_order() {
        assert_eq!(best_index([0.1, 0.7, 0.7, 0.2], true), Some(1));
        assert_eq!(best_index([0.1, -0.7, -0.7, 0.2], false), Some(1));
        assert_eq!(best_index(Vec::<f32>::new(), true), None);
    }
}
