use crate::point::Point;

/// Weighted digraph over vertices `0..n` as adjacency lists. Undirected
/// structures (the spanning tree) store each edge as a directed pair.
#[derive(Debug)]
pub struct Graph {
    vertices: usize,
    edges: usize,
    adjacencies: Vec<Vec<Neighbor>>,
}

#[derive(Clone, Copy, Debug)]
struct Neighbor {
    id: usize,
    weight: f64,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edges: 0,
            adjacencies: vec![Vec::new(); vertices],
        }
    }

    /// Complete graph over the given points: every ordered pair `(i, j)`,
    /// `i != j`, carries one edge weighted by Euclidean distance.
    pub fn complete(points: &[Point]) -> Self {
        let mut graph = Self::new(points.len());
        for (i, point) in points.iter().enumerate() {
            for (j, other) in points.iter().enumerate() {
                if i != j {
                    graph.add_edge(i, j, point.dist(other));
                }
            }
        }
        graph
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) {
        self.adjacencies[from].push(Neighbor { id: to, weight });
        self.edges += 1;
    }

    /// Neighbors of `vertex` with their edge weights, most recently inserted
    /// first. Tour extraction and the exporters rely on this exact order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.adjacencies[vertex]
            .iter()
            .rev()
            .map(|neighbor| (neighbor.id, neighbor.weight))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

#[cfg(test)]
#[test]
fn complete_graph_has_all_ordered_pairs() {
    let points = [
        Point { x: 0., y: 0. },
        Point { x: 1., y: 0. },
        Point { x: 0., y: 2. },
    ];
    let graph = Graph::complete(&points);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 6);
    for vertex in 0..3 {
        assert_eq!(graph.neighbors(vertex).count(), 2);
    }
    assert_eq!(
        graph.neighbors(0).collect::<Vec<_>>(),
        vec![(2, 2.), (1, 1.)]
    );
}

#[cfg(test)]
#[test]
fn neighbors_come_newest_first() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1.);
    graph.add_edge(0, 2, 2.);
    graph.add_edge(0, 3, 3.);

    assert_eq!(
        graph.neighbors(0).collect::<Vec<_>>(),
        vec![(3, 3.), (2, 2.), (1, 1.)]
    );
    assert_eq!(graph.neighbors(1).count(), 0);
    assert_eq!(graph.edge_count(), 3);
}

#[cfg(test)]
#[test]
fn single_vertex_graph_is_empty() {
    let graph = Graph::complete(&[Point { x: 5., y: 5. }]);
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}
