use crate::graph::Graph;
use crate::kbn_summation;
use crate::point::Point;

/// Preorder depth-first walk of the spanning tree, closed back to `start`.
///
/// Returns V+1 vertex ids: every vertex once, in discovery order, plus the
/// start vertex repeated at the end. Neighbors are taken in the tree's
/// traversal order, so the walk is fully determined by the order the tree's
/// edges were inserted. The recursion is unrolled onto an explicit stack of
/// (vertex, resume offset) pairs; the visitation order is that of the
/// recursive form.
pub fn depth_first_tour(tree: &Graph, start: usize) -> Vec<usize> {
    let n = tree.vertex_count();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n + 1);

    visited[start] = true;
    tour.push(start);

    let mut stack = vec![(start, 0)];
    while let Some((vertex, offset)) = stack.pop() {
        let next = tree
            .neighbors(vertex)
            .enumerate()
            .skip(offset)
            .find(|(_, (neighbor, _))| !visited[*neighbor]);
        if let Some((idx, (neighbor, _))) = next {
            stack.push((vertex, idx + 1));
            visited[neighbor] = true;
            tour.push(neighbor);
            stack.push((neighbor, 0));
        }
    }

    tour.push(start);
    tour
}

/// Total Euclidean length of the tour. The closing edge is already present
/// as the final consecutive pair, so summing pairs counts it exactly once.
pub fn tour_cost(points: &[Point], tour: &[usize]) -> f64 {
    kbn_summation! {
        for pair in tour.windows(2) => {
            cost += points[pair[0]].dist(&points[pair[1]]);
        }
    }
    cost
}

#[cfg(test)]
use crate::mst::compute_mst;
#[cfg(test)]
use crate::point::random_points;

#[cfg(test)]
#[test]
fn unit_square_tour_walks_the_perimeter() {
    let points = vec![
        Point { x: 0., y: 0. },
        Point { x: 1., y: 0. },
        Point { x: 1., y: 1. },
        Point { x: 0., y: 1. },
    ];
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
    let tour = depth_first_tour(&mst.tree, 0);

    assert_eq!(tour, vec![0, 3, 2, 1, 0]);
    assert_eq!(tour_cost(&points, &tour), 4.);
}

#[cfg(test)]
#[test]
fn collinear_tour_goes_out_and_back() {
    let points = vec![
        Point { x: 0., y: 0. },
        Point { x: 1., y: 0. },
        Point { x: 2., y: 0. },
    ];
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
    let tour = depth_first_tour(&mst.tree, 0);

    assert_eq!(tour, vec![0, 1, 2, 0]);
    assert_eq!(tour_cost(&points, &tour), 4.);
}

#[cfg(test)]
#[test]
fn single_point_tour_is_a_zero_cost_loop() {
    let points = vec![Point { x: 7., y: 7. }];
    let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
    let tour = depth_first_tour(&mst.tree, 0);

    assert_eq!(tour, vec![0, 0]);
    assert_eq!(tour_cost(&points, &tour), 0.);
}

#[cfg(test)]
#[test]
fn tour_visits_every_vertex_once_and_closes() {
    for seed in 0..8 {
        let points = random_points(12, Some(seed));
        let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
        let tour = depth_first_tour(&mst.tree, 0);

        assert_eq!(tour.len(), points.len() + 1);
        assert_eq!(tour.first(), tour.last());
        let mut seen = vec![false; points.len()];
        for vertex in &tour[..points.len()] {
            assert!(!seen[*vertex], "seed {seed}: vertex {vertex} repeated");
            seen[*vertex] = true;
        }
        assert!(seen.iter().all(|v| *v));
    }
}

#[cfg(test)]
#[test]
fn tour_cost_stays_within_twice_the_tree_weight() {
    for seed in 0..8 {
        let points = random_points(24, Some(seed));
        let mst = compute_mst(&Graph::complete(&points), 0).unwrap();
        let tour = depth_first_tour(&mst.tree, 0);
        let cost = tour_cost(&points, &tour);

        assert!(
            cost <= 2. * mst.weight() + 1e-9,
            "seed {seed}: cost {cost} vs tree weight {}",
            mst.weight()
        );
    }
}
