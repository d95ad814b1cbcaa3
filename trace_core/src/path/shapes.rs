use glam::Vec2;

use super::ReferencePath;

/// Levels per category. Completing level 4 completes the mode.
pub const MAX_LEVEL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceCategory {
    Shapes,
    Numbers,
    Letters,
}

impl TraceCategory {
    pub const ALL: [TraceCategory; 3] =
        [TraceCategory::Shapes, TraceCategory::Numbers, TraceCategory::Letters];

    /// Store key for this category's persisted level.
    pub fn level_key(&self) -> &'static str {
        match self {
            TraceCategory::Shapes => "trace_level_shapes",
            TraceCategory::Numbers => "trace_level_numbers",
            TraceCategory::Letters => "trace_level_letters",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraceCategory::Shapes => "shapes",
            TraceCategory::Numbers => "numbers",
            TraceCategory::Letters => "letters",
        }
    }
}

/// One catalog entry, in model space (coordinates within roughly ±100;
/// the host maps them onto its canvas).
#[derive(Debug, Clone)]
pub struct TraceShape {
    pub name: &'static str,
    pub path: ReferencePath,
}

/// Catalog lookup. Levels outside 1..=MAX_LEVEL clamp to the nearest entry.
pub fn shape_for(category: TraceCategory, level: u32) -> TraceShape {
    let level = level.clamp(1, MAX_LEVEL);
    match category {
        TraceCategory::Numbers => number(level),
        TraceCategory::Letters => letter(level),
        TraceCategory::Shapes => figure(level),
    }
}

fn number(level: u32) -> TraceShape {
    match level {
        1 => shape(
            "number 1",
            vec![p(-20.0, -80.0), p(0.0, -100.0), p(0.0, 100.0)],
            false,
        ),
        2 => {
            // Top semicircle, then the diagonal down to a flat base.
            let mut points = arc(p(0.0, -50.0), 50.0, 180.0, 0.0);
            points.push(p(-50.0, 100.0));
            points.push(p(50.0, 100.0));
            shape("number 2", points, false)
        }
        3 => {
            // Two stacked bowls.
            let mut points = arc(p(0.0, -50.0), 40.0, 180.0, -90.0);
            points.extend(arc(p(0.0, 50.0), 50.0, 90.0, -180.0));
            shape("number 3", points, false)
        }
        _ => shape(
            "number 4",
            vec![
                p(-50.0, -100.0),
                p(-50.0, 0.0),
                p(50.0, 0.0),
                p(50.0, -100.0),
                p(50.0, 100.0),
            ],
            false,
        ),
    }
}

fn letter(level: u32) -> TraceShape {
    match level {
        1 => shape(
            "letter A",
            vec![
                p(-60.0, 100.0),
                p(0.0, -100.0),
                p(60.0, 100.0),
                p(30.0, 10.0),
                p(-30.0, 10.0),
            ],
            false,
        ),
        2 => shape(
            "letter L",
            vec![p(-40.0, -100.0), p(-40.0, 100.0), p(60.0, 100.0)],
            false,
        ),
        3 => shape(
            "letter F",
            vec![
                p(60.0, -100.0),
                p(-40.0, -100.0),
                p(-40.0, 100.0),
                p(-40.0, 0.0),
                p(40.0, 0.0),
            ],
            false,
        ),
        _ => shape(
            "letter T",
            vec![
                p(-60.0, -100.0),
                p(60.0, -100.0),
                p(0.0, -100.0),
                p(0.0, 100.0),
            ],
            false,
        ),
    }
}

fn figure(level: u32) -> TraceShape {
    match level {
        1 => shape(
            "square",
            vec![
                p(-80.0, -80.0),
                p(80.0, -80.0),
                p(80.0, 80.0),
                p(-80.0, 80.0),
            ],
            true,
        ),
        2 => shape(
            "triangle",
            vec![p(0.0, -90.0), p(90.0, 70.0), p(-90.0, 70.0)],
            true,
        ),
        3 => shape(
            "rhombus",
            vec![p(0.0, -90.0), p(70.0, 0.0), p(0.0, 90.0), p(-70.0, 0.0)],
            true,
        ),
        _ => shape(
            "pentagon",
            vec![
                p(0.0, -90.0),
                p(90.0, -20.0),
                p(55.0, 90.0),
                p(-55.0, 90.0),
                p(-90.0, -20.0),
            ],
            true,
        ),
    }
}

/// Clockwise arc sampled every 10 degrees, endpoints inclusive. Screen y
/// grows downward, hence the negated sine.
fn arc(center: Vec2, radius: f32, start_deg: f32, end_deg: f32) -> Vec<Vec2> {
    let steps = ((start_deg - end_deg) / 10.0).round() as i32;
    (0..=steps)
        .map(|i| {
            let rad = (start_deg - i as f32 * 10.0).to_radians();
            Vec2::new(
                center.x + rad.cos() * radius,
                center.y - rad.sin() * radius,
            )
        })
        .collect()
}

fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn shape(name: &'static str, points: Vec<Vec2>, closed: bool) -> TraceShape {
    TraceShape {
        name,
        path: ReferencePath::new(points, closed).expect("catalog entries hold at least 2 points"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_a_valid_path() {
        for category in TraceCategory::ALL {
            for level in 1..=MAX_LEVEL {
                let entry = shape_for(category, level);
                assert!(
                    entry.path.points().len() >= 2,
                    "{} level {} too short",
                    category.label(),
                    level
                );
            }
        }
    }

    #[test]
    fn only_figures_are_closed() {
        for level in 1..=MAX_LEVEL {
            assert!(shape_for(TraceCategory::Shapes, level).path.is_closed());
            assert!(!shape_for(TraceCategory::Numbers, level).path.is_closed());
            assert!(!shape_for(TraceCategory::Letters, level).path.is_closed());
        }
    }

    #[test]
    fn out_of_range_levels_clamp() {
        assert_eq!(
            shape_for(TraceCategory::Letters, 99).name,
            shape_for(TraceCategory::Letters, MAX_LEVEL).name
        );
        assert_eq!(
            shape_for(TraceCategory::Numbers, 0).name,
            shape_for(TraceCategory::Numbers, 1).name
        );
    }

    #[test]
    fn arcs_sample_every_ten_degrees_inclusive() {
        // A 180 degree sweep yields 19 samples.
        let two = shape_for(TraceCategory::Numbers, 2);
        assert_eq!(two.path.points().len(), 19 + 2);

        let semicircle = arc(Vec2::ZERO, 50.0, 180.0, 0.0);
        assert_eq!(semicircle.len(), 19);
        assert!((semicircle[0] - Vec2::new(-50.0, 0.0)).length() < 1e-4);
        assert!((semicircle[18] - Vec2::new(50.0, 0.0)).length() < 1e-4);
        // Topmost sample sits above the center in screen coordinates.
        assert!((semicircle[9] - Vec2::new(0.0, -50.0)).length() < 1e-4);
    }
}
