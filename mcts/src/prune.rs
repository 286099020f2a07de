use std::collections::VecDeque;

use super::{MCTSNode, NodeArena, NodeId};

pub struct RebuiltArena<S> {
    pub arena: NodeArena<MCTSNode<S>>,
    pub root: NodeId,
}

/// Rebuilds a new arena containing only the nodes reachable from `root`.
///
/// Consumes the old arena and remaps every NodeId. Child links are patched to the new ids and
/// parent links to discarded nodes are dropped. The root is placed first so it becomes id 0.
pub fn rebuild_from_root<S>(arena: NodeArena<MCTSNode<S>>, root: NodeId) -> RebuiltArena<S> {
    let nodes = arena.into_vec();

    // 1) Mark reachable nodes.
    let mut live = vec![false; nodes.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        let idx = usize::from(id);
        if live.get(idx).copied().unwrap_or(true) {
            continue;
        }
        live[idx] = true;
        order.push(idx);

        for edge in nodes[idx].edges() {
            queue.push_back(edge.child());
        }
    }

    // 2) Move live nodes into a new arena in BFS order, recording old->new ID mappings.
    let mut old_nodes: Vec<Option<MCTSNode<S>>> = nodes.into_iter().map(Some).collect();
    let mut id_map: Vec<Option<NodeId>> = vec![None; old_nodes.len()];
    let mut new_arena = NodeArena::new();

    for &old_idx in &order {
        if let Some(node) = old_nodes[old_idx].take() {
            id_map[old_idx] = Some(new_arena.push(node));
        }
    }

    // 3) Patch child and parent links to use new NodeIds.
    for &old_idx in &order {
        let Some(new_id) = id_map[old_idx] else {
            continue;
        };
        let node = new_arena.get_mut(new_id);

        for edge in node.edges_mut() {
            if let Some(child) = id_map[usize::from(edge.child())] {
                edge.set_child(child);
            }
        }

        let parents = node
            .parents()
            .iter()
            .filter_map(|parent| id_map[usize::from(*parent)])
            .collect();
        node.set_parents(parents);
    }

    let new_root = id_map
        .get(usize::from(root))
        .copied()
        .flatten()
        .unwrap_or(root);

    RebuiltArena {
        arena: new_arena,
        root: new_root,
    }
}
