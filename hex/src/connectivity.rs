use engine::Player;

use super::board;

/// Per-player connectivity of placed pieces.
///
/// Each player's pieces form an undirected graph in which two positions are joined iff both are
/// held by that player and the cells are adjacent. The graph is kept as a union-find over the
/// board cells plus two virtual nodes for the player's target sides. Placing a piece touches only
/// its neighbours, so asking whether a player has connected their sides never rescans the board.
#[derive(Clone, Debug)]
pub struct ConnectivityGraph {
    size: usize,
    graphs: [PlayerGraph; 2],
}

#[derive(Clone, Debug)]
struct PlayerGraph {
    parents: Vec<usize>,
    ranks: Vec<u8>,
    members: Vec<bool>,
    len: usize,
}

impl ConnectivityGraph {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            graphs: [PlayerGraph::new(size), PlayerGraph::new(size)],
        }
    }

    /// Adds `position` to `player`'s graph, joining it to every adjacent position the player holds.
    /// Adding a position twice has no effect.
    pub fn insert(&mut self, player: Player, position: usize) {
        let size = self.size;
        let graph = self.graph_mut(player);

        if graph.members[position] {
            return;
        }

        graph.members[position] = true;
        graph.len += 1;

        for neighbour in board::neighbours(size, position) {
            if graph.members[neighbour] {
                graph.union(position, neighbour);
            }
        }

        let (start, end) = (size * size, size * size + 1);
        match side_of(player, size, position) {
            (true, true) => {
                graph.union(position, start);
                graph.union(position, end);
            }
            (true, false) => graph.union(position, start),
            (false, true) => graph.union(position, end),
            (false, false) => {}
        }
    }

    /// Whether `player` has a chain of pieces joining both of their sides.
    /// Player One joins the top and bottom rows, player Two the left and right columns.
    pub fn is_connected(&self, player: Player) -> bool {
        let graph = self.graph(player);
        let n = self.size * self.size;
        graph.find(n) == graph.find(n + 1)
    }

    /// Whether both positions belong to `player` and are joined by a chain of their pieces.
    pub fn are_joined(&self, player: Player, a: usize, b: usize) -> bool {
        let graph = self.graph(player);
        graph.members[a] && graph.members[b] && graph.find(a) == graph.find(b)
    }

    /// Whether the graph of `player` has an edge between `a` and `b`.
    pub fn has_edge(&self, player: Player, a: usize, b: usize) -> bool {
        let graph = self.graph(player);
        a != b && graph.members[a] && graph.members[b] && board::are_adjacent(self.size, a, b)
    }

    pub fn contains(&self, player: Player, position: usize) -> bool {
        self.graph(player).members[position]
    }

    /// Number of positions in `player`'s graph.
    pub fn len(&self, player: Player) -> usize {
        self.graph(player).len
    }

    pub fn is_empty(&self, player: Player) -> bool {
        self.len(player) == 0
    }

    pub fn positions(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        self.graph(player)
            .members
            .iter()
            .enumerate()
            .filter_map(|(position, member)| member.then_some(position))
    }

    fn graph(&self, player: Player) -> &PlayerGraph {
        &self.graphs[player.as_usize() - 1]
    }

    fn graph_mut(&mut self, player: Player) -> &mut PlayerGraph {
        &mut self.graphs[player.as_usize() - 1]
    }
}

/// Whether a position lies on the player's start side and end side.
fn side_of(player: Player, size: usize, position: usize) -> (bool, bool) {
    let line = match player {
        Player::One => board::row(size, position),
        Player::Two => board::col(size, position),
    };

    (line == 0, line == size - 1)
}

impl PlayerGraph {
    fn new(size: usize) -> Self {
        let nodes = size * size + 2;
        Self {
            parents: (0..nodes).collect(),
            ranks: vec![0; nodes],
            members: vec![false; size * size],
            len: 0,
        }
    }

    fn find(&self, mut node: usize) -> usize {
        while self.parents[node] != node {
            node = self.parents[node];
        }
        node
    }

    fn find_compress(&mut self, mut node: usize) -> usize {
        while self.parents[node] != node {
            self.parents[node] = self.parents[self.parents[node]];
            node = self.parents[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let a = self.find_compress(a);
        let b = self.find_compress(b);

        if a == b {
            return;
        }

        match self.ranks[a].cmp(&self.ranks[b]) {
            std::cmp::Ordering::Less => self.parents[a] = b,
            std::cmp::Ordering::Greater => self.parents[b] = a,
            std::cmp::Ordering::Equal => {
                self.parents[b] = a;
                self.ranks[a] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(size: usize, row: usize, col: usize) -> usize {
        board::position(size, row, col)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = ConnectivityGraph::new(4);

        assert!(graph.is_empty(Player::One));
        assert!(graph.is_empty(Player::Two));
        assert!(!graph.is_connected(Player::One));
        assert!(!graph.is_connected(Player::Two));
    }

    #[test]
    fn test_adjacent_pieces_share_an_edge() {
        let mut graph = ConnectivityGraph::new(4);
        graph.insert(Player::Two, pos(4, 3, 3));
        graph.insert(Player::Two, pos(4, 3, 2));

        assert!(graph.has_edge(Player::Two, pos(4, 3, 3), pos(4, 3, 2)));
        assert!(graph.has_edge(Player::Two, pos(4, 3, 2), pos(4, 3, 3)));
        assert!(!graph.has_edge(Player::One, pos(4, 3, 3), pos(4, 3, 2)));
    }

    #[test]
    fn test_distant_pieces_share_no_edge() {
        let mut graph = ConnectivityGraph::new(4);
        graph.insert(Player::One, pos(4, 0, 0));
        graph.insert(Player::One, pos(4, 2, 3));

        assert!(!graph.has_edge(Player::One, pos(4, 0, 0), pos(4, 2, 3)));
        assert!(!graph.are_joined(Player::One, pos(4, 0, 0), pos(4, 2, 3)));
    }

    #[test]
    fn test_anti_diagonal_is_not_adjacent() {
        let mut graph = ConnectivityGraph::new(3);
        graph.insert(Player::One, pos(3, 0, 2));
        graph.insert(Player::One, pos(3, 1, 1));
        graph.insert(Player::One, pos(3, 2, 0));

        assert!(!graph.has_edge(Player::One, pos(3, 0, 2), pos(3, 1, 1)));
        assert!(!graph.is_connected(Player::One));
    }

    #[test]
    fn test_diagonal_chain_connects_player_one() {
        let mut graph = ConnectivityGraph::new(3);
        graph.insert(Player::One, pos(3, 0, 0));
        graph.insert(Player::One, pos(3, 1, 1));
        assert!(!graph.is_connected(Player::One));

        graph.insert(Player::One, pos(3, 2, 2));
        assert!(graph.is_connected(Player::One));
        assert!(!graph.is_connected(Player::Two));
    }

    #[test]
    fn test_row_connects_player_two() {
        let mut graph = ConnectivityGraph::new(3);
        for col in 0..3 {
            graph.insert(Player::Two, pos(3, 1, col));
        }

        assert!(graph.is_connected(Player::Two));
        assert!(!graph.is_connected(Player::One));
    }

    #[test]
    fn test_chains_merge_through_a_bridge() {
        let mut graph = ConnectivityGraph::new(4);
        graph.insert(Player::One, pos(4, 0, 0));
        graph.insert(Player::One, pos(4, 1, 0));
        graph.insert(Player::One, pos(4, 3, 1));
        graph.insert(Player::One, pos(4, 3, 2));
        assert!(!graph.are_joined(Player::One, pos(4, 0, 0), pos(4, 3, 2)));

        graph.insert(Player::One, pos(4, 2, 1));
        assert!(graph.are_joined(Player::One, pos(4, 0, 0), pos(4, 3, 2)));
        assert!(graph.is_connected(Player::One));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut graph = ConnectivityGraph::new(3);
        graph.insert(Player::One, 4);
        graph.insert(Player::One, 4);

        assert_eq!(graph.len(Player::One), 1);
        assert_eq!(graph.positions(Player::One).collect::<Vec<_>>(), vec![4]);
    }
}
