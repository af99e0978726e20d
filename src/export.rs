use std::io::Write;

use crate::error::Result;
use crate::graph::Graph;
use crate::point::Point;

/// Write the spanning tree as coordinate pairs, two lines per directed edge.
/// Both directions of every tree edge appear, in the tree's traversal order.
pub fn write_tree<W: Write>(mut out: W, tree: &Graph, points: &[Point]) -> Result<()> {
    for vertex in 0..tree.vertex_count() {
        for (neighbor, _) in tree.neighbors(vertex) {
            writeln!(out, "{}", points[vertex])?;
            writeln!(out, "{}", points[neighbor])?;
        }
    }
    Ok(())
}

/// Write the tour as one coordinate line per visited vertex; the start
/// vertex appears both first and last.
pub fn write_tour<W: Write>(mut out: W, points: &[Point], tour: &[usize]) -> Result<()> {
    for vertex in tour {
        writeln!(out, "{}", points[*vertex])?;
    }
    Ok(())
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
#[test]
fn tree_export_lists_both_edge_directions() {
    let points = [Point { x: 0., y: 0. }, Point { x: 1., y: 0. }];
    let mut tree = Graph::new(2);
    tree.add_edge(0, 1, 1.);
    tree.add_edge(1, 0, 1.);

    let mut out = Vec::new();
    write_tree(&mut out, &tree, &points).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 0\n1 0\n1 0\n0 0\n");
}

#[cfg(test)]
#[test]
fn tour_export_closes_the_loop() {
    let points = [
        Point { x: 0., y: 0. },
        Point { x: 1.5, y: 0. },
        Point { x: 1., y: 2. },
    ];
    let mut out = Vec::new();
    write_tour(&mut out, &points, &[0, 2, 1, 0]).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 0\n1 2\n1.5 0\n0 0\n"
    );
}
