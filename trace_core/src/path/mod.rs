pub mod shapes;

use glam::Vec2;

use crate::error::TraceError;

/// Ordered point sequence defining the figure a player must trace.
/// Immutable once built; a new path is created whenever a level loads.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencePath {
    points: Vec<Vec2>,
    closed: bool,
}

impl ReferencePath {
    pub fn new(points: Vec<Vec2>, closed: bool) -> Result<Self, TraceError> {
        if points.len() < 2 {
            return Err(TraceError::PathTooShort { got: points.len() });
        }
        Ok(Self { points, closed })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Distance from `point` to the nearest path vertex.
    ///
    /// Deliberately measured against the point set, not the polyline;
    /// switching to segment projection would change how forgiving the
    /// tracing feels near corners.
    pub fn nearest_distance(&self, point: Vec2) -> f32 {
        self.points
            .iter()
            .map(|p| p.distance(point))
            .fold(f32::INFINITY, f32::min)
    }

    /// The same path mapped into host canvas space: `center + point * scale`.
    pub fn screen_mapped(&self, center: Vec2, scale: f32) -> ReferencePath {
        ReferencePath {
            points: self.points.iter().map(|p| center + *p * scale).collect(),
            closed: self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_paths() {
        assert!(ReferencePath::new(vec![], false).is_err());
        assert!(ReferencePath::new(vec![Vec2::ZERO], false).is_err());
        assert!(ReferencePath::new(vec![Vec2::ZERO, Vec2::ONE], false).is_ok());
    }

    #[test]
    fn nearest_distance_picks_the_closest_vertex() {
        let path = ReferencePath::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
            false,
        )
        .unwrap();

        assert_eq!(path.nearest_distance(Vec2::new(0.0, 30.0)), 30.0);
        assert_eq!(path.nearest_distance(Vec2::new(90.0, 0.0)), 10.0);
    }

    #[test]
    fn screen_mapping_applies_center_and_scale() {
        let path = ReferencePath::new(
            vec![Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0)],
            true,
        )
        .unwrap();

        let mapped = path.screen_mapped(Vec2::new(200.0, 300.0), 2.0);
        assert_eq!(mapped.points()[0], Vec2::new(180.0, 300.0));
        assert_eq!(mapped.points()[1], Vec2::new(220.0, 300.0));
        assert!(mapped.is_closed());
    }
}
