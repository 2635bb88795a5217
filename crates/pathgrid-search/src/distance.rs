use pathgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent on a 4-connected unit-cost grid, which is what
/// makes it a valid A* heuristic here.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(4, 4)), 8);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 2)), 3);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }
}
