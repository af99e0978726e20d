use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::heap::{MinHeap, VertexCost};
use crate::kbn_summation;

/// Spanning tree produced by [`compute_mst`], together with the per-vertex
/// bookkeeping Prim's algorithm maintains: the predecessor each vertex was
/// attached through (`None` for the start vertex) and the weight of that
/// attaching edge (zero for the start vertex).
#[derive(Debug)]
pub struct Mst {
    pub tree: Graph,
    pub predecessors: Vec<Option<usize>>,
    pub costs: Vec<f64>,
}

impl Mst {
    /// Total weight of the tree: the costs sum to exactly the weight of the
    /// V-1 undirected edges.
    pub fn weight(&self) -> f64 {
        kbn_summation! {
            for cost in &self.costs => {
                weight += *cost;
            }
        }
        weight
    }
}

/// Compute a minimum spanning tree of `graph` with Prim's algorithm, grown
/// from `start`.
///
/// Every vertex starts at infinite cost and gets finalized once extracted
/// from the heap; an extraction relaxes the still-active neighbors whose
/// connecting edge beats their recorded cost. On the complete graphs this
/// crate feeds in, the adjacency scan per extraction dominates: O(V^2)
/// overall with O(log V) per decrease-key.
pub fn compute_mst(graph: &Graph, start: usize) -> Result<Mst> {
    let n = graph.vertex_count();
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut costs = vec![f64::INFINITY; n];
    costs[start] = 0.;

    let mut heap = MinHeap::build(
        (0..n)
            .map(|vertex| VertexCost {
                vertex,
                cost: f64::INFINITY,
            })
            .collect(),
    );
    heap.decrease_key(start, 0.);

    while !heap.is_empty() {
        let u = heap.extract_min()?;
        for (neighbor, weight) in graph.neighbors(u.vertex) {
            if heap.contains(neighbor) && weight < costs[neighbor] {
                costs[neighbor] = weight;
                predecessors[neighbor] = Some(u.vertex);
                heap.decrease_key(neighbor, weight);
            }
        }
    }

    // Materialize the predecessor array as an undirected tree, predecessor
    // direction first so traversal order stays reproducible.
    let mut tree = Graph::new(n);
    for (vertex, predecessor) in predecessors.iter().enumerate() {
        if let Some(predecessor) = *predecessor {
            tree.add_edge(predecessor, vertex, costs[vertex]);
            tree.add_edge(vertex, predecessor, costs[vertex]);
        }
    }

    let mst = Mst {
        tree,
        predecessors,
        costs,
    };
    debug!(
        vertices = n,
        edges = mst.tree.edge_count(),
        weight = mst.weight(),
        "spanning tree built"
    );
    Ok(mst)
}

#[cfg(test)]
use crate::point::{random_points, Point};

#[cfg(test)]
fn unit_square() -> Vec<Point> {
    vec![
        Point { x: 0., y: 0. },
        Point { x: 1., y: 0. },
        Point { x: 1., y: 1. },
        Point { x: 0., y: 1. },
    ]
}

/// Kruskal's algorithm over all point pairs, as an independent oracle.
#[cfg(test)]
fn kruskal_weight(points: &[Point]) -> f64 {
    fn find(parents: &mut [usize], vertex: usize) -> usize {
        let mut root = vertex;
        while parents[root] != root {
            parents[root] = parents[parents[root]];
            root = parents[root];
        }
        root
    }

    let n = points.len();
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push((points[i].dist(&points[j]), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let mut parents: Vec<usize> = (0..n).collect();
    let mut weight = 0.;
    for (w, i, j) in edges {
        let (root_i, root_j) = (find(&mut parents, i), find(&mut parents, j));
        if root_i != root_j {
            parents[root_i] = root_j;
            weight += w;
        }
    }
    weight
}

#[cfg(test)]
#[test]
fn unit_square_tree_weighs_three() {
    let points = unit_square();
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();

    assert_eq!(mst.weight(), 3.);
    assert_eq!(mst.tree.vertex_count(), 4);
    assert_eq!(mst.tree.edge_count(), 6);
    assert_eq!(mst.predecessors[0], None);
    assert_eq!(mst.costs[0], 0.);
    assert!(mst.costs.iter().skip(1).all(|cost| *cost == 1.));
}

#[cfg(test)]
#[test]
fn collinear_points_chain_up() {
    let points = vec![
        Point { x: 0., y: 0. },
        Point { x: 1., y: 0. },
        Point { x: 2., y: 0. },
    ];
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();

    assert_eq!(mst.weight(), 2.);
    assert_eq!(mst.predecessors, vec![None, Some(0), Some(1)]);
}

#[cfg(test)]
#[test]
fn single_vertex_tree_is_trivial() {
    let points = vec![Point { x: 3., y: 9. }];
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();

    assert_eq!(mst.tree.edge_count(), 0);
    assert_eq!(mst.weight(), 0.);
    assert_eq!(mst.predecessors, vec![None]);
}

#[cfg(test)]
#[test]
fn tree_edge_count_is_twice_vertices_minus_one() {
    for seed in 0..8 {
        let points = random_points(8, Some(seed));
        let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
        assert_eq!(mst.tree.edge_count(), 2 * (points.len() - 1));
        assert_eq!(
            mst.predecessors.iter().filter(|p| p.is_none()).count(),
            1
        );
    }
}

#[cfg(test)]
#[test]
fn prim_matches_a_kruskal_oracle() {
    for seed in 0..16 {
        let points = random_points(seed as usize % 7 + 2, Some(seed));
        let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
        let oracle = kruskal_weight(&points);
        assert!(
            (mst.weight() - oracle).abs() < 1e-9,
            "seed {seed}: prim {} vs kruskal {oracle}",
            mst.weight()
        );
    }
}

#[cfg(test)]
#[test]
fn start_vertex_roots_the_tree() {
    let points = unit_square();
    let mst = compute_mst(&Graph::complete(&points), 2).unwrap();

    assert_eq!(mst.predecessors[2], None);
    assert_eq!(mst.costs[2], 0.);
    assert_eq!(mst.weight(), 3.);
}
