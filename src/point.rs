use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};

/// A point in the plane. Vertex ids elsewhere in the crate are indices into
/// the point slice handed to the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn dist(self, rhs: &Point) -> f64 {
        ((self.x - rhs.x).powi(2) + (self.y - rhs.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parse the point file format: a count token followed by that many `x y`
/// coordinate pairs, all whitespace separated.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut tokens = input.split_whitespace();
    let count: usize = tokens
        .next()
        .ok_or_else(|| Error::invalid_input("missing point count"))?
        .parse()
        .map_err(|e| Error::invalid_input(format!("unreadable point count: {e}")))?;
    if count == 0 {
        return Err(Error::invalid_input("point count must be at least 1"));
    }

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let mut coordinate = || -> Result<f64> {
            tokens
                .next()
                .ok_or_else(|| {
                    Error::invalid_input(format!("expected {count} points, input ends at {i}"))
                })?
                .parse()
                .map_err(|e| Error::invalid_input(format!("point {i}: {e}")))
        };
        let x = coordinate()?;
        let y = coordinate()?;
        points.push(Point { x, y });
    }

    Ok(points)
}

/// Uniform random points, reproducible when a seed is given.
pub fn random_points(count: usize, seed: Option<u64>) -> Vec<Point> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| Point {
            x: rng.gen_range(0.0..1000.0),
            y: rng.gen_range(0.0..1000.0),
        })
        .collect()
}

#[cfg(test)]
#[test]
fn dist_is_euclidean() {
    let a = Point { x: 0., y: 0. };
    let b = Point { x: 3., y: 4. };
    assert_eq!(a.dist(&b), 5.);
    assert_eq!(b.dist(&a), 5.);
    assert_eq!(a.dist(&a), 0.);
}

#[cfg(test)]
#[test]
fn parse_reads_count_then_pairs() {
    let points = parse_points("3\n0 0\n1.5 0\n2 -7\n").unwrap();
    assert_eq!(
        points,
        vec![
            Point { x: 0., y: 0. },
            Point { x: 1.5, y: 0. },
            Point { x: 2., y: -7. },
        ]
    );
}

#[cfg(test)]
#[test]
fn parse_rejects_zero_count() {
    assert!(parse_points("0\n").is_err());
}

#[cfg(test)]
#[test]
fn parse_rejects_truncated_input() {
    assert!(parse_points("2\n0 0\n1").is_err());
    assert!(parse_points("").is_err());
}

#[cfg(test)]
#[test]
fn random_points_are_reproducible_with_a_seed() {
    assert_eq!(random_points(16, Some(7)), random_points(16, Some(7)));
    assert_eq!(random_points(0, Some(7)), vec![]);
}
