//! Radar polygon geometry.
//!
//! Maps an ordered sequence of (skill, proficiency) records onto a closed
//! radial polygon. Order determines angular placement; the radial scale is
//! pinned to `[0, RADIAL_MAX]` so shapes stay comparable across renders.

use serde::{Deserialize, Serialize};

/// Upper bound of the radial scale. Proficiencies are clamped into
/// `[0, RADIAL_MAX]` rather than rejected.
pub const RADIAL_MAX: i32 = 100;

/// One (skill, proficiency) input pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub proficiency: i32,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, proficiency: i32) -> Self {
        Self {
            name: name.into(),
            proficiency,
        }
    }
}

/// A polygon vertex in polar coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub angle_degrees: f64,
    pub radius: i32,
    pub label: String,
}

/// Closed polygon description produced from skill data.
///
/// Holds N vertices plus a closing copy of the first, so a renderer can
/// trace the outline without special-casing the wrap-around edge.
/// `filled` marks the bounded area for shading and is always set by
/// [`build_radar`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSpec {
    pub points: Vec<RadarPoint>,
    pub filled: bool,
}

impl RadarSpec {
    /// Number of distinct vertices, the closing point excluded.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertices without the closing point.
    #[must_use]
    pub fn vertices(&self) -> &[RadarPoint] {
        match self.points.len() {
            0 => &[],
            n => &self.points[..n - 1],
        }
    }
}

/// Build the closed radar polygon for an ordered skill sequence.
///
/// Vertex `i` sits at `i * (360 / N)` degrees. Out-of-range proficiencies
/// are clamped, never rejected. An empty input yields an empty spec; one
/// or two records yield a degenerate but valid shape.
#[must_use]
pub fn build_radar(records: &[SkillRecord]) -> RadarSpec {
    if records.is_empty() {
        return RadarSpec {
            points: Vec::new(),
            filled: true,
        };
    }

    let step = 360.0 / records.len() as f64;
    let mut points: Vec<RadarPoint> = records
        .iter()
        .enumerate()
        .map(|(i, record)| RadarPoint {
            angle_degrees: i as f64 * step,
            radius: record.proficiency.clamp(0, RADIAL_MAX),
            label: record.name.clone(),
        })
        .collect();

    // Tie the last vertex back to the first so the outline has no gap.
    let first = points[0].clone();
    points.push(first);

    RadarSpec {
        points,
        filled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, i32)]) -> Vec<SkillRecord> {
        pairs
            .iter()
            .map(|(name, value)| SkillRecord::new(*name, *value))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_spec() {
        let spec = build_radar(&[]);
        assert!(spec.is_empty());
        assert_eq!(spec.vertex_count(), 0);
        assert!(spec.vertices().is_empty());
    }

    #[test]
    fn three_records_place_vertices_at_thirds() {
        let spec = build_radar(&records(&[("Python", 90), ("SQL", 85), ("ML", 75)]));

        assert_eq!(spec.points.len(), 4);
        assert_eq!(spec.vertex_count(), 3);

        let angles: Vec<f64> = spec.points.iter().map(|p| p.angle_degrees).collect();
        assert_eq!(angles, vec![0.0, 120.0, 240.0, 0.0]);

        let radii: Vec<i32> = spec.points.iter().map(|p| p.radius).collect();
        assert_eq!(radii, vec![90, 85, 75, 90]);
    }

    #[test]
    fn closing_point_repeats_first_vertex() {
        let spec = build_radar(&records(&[("a", 10), ("b", 20), ("c", 30), ("d", 40)]));
        let first = &spec.points[0];
        let last = spec.points.last().unwrap();
        assert_eq!(first, last);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let spec = build_radar(&records(&[("X", 150)]));
        assert_eq!(spec.points.len(), 2);
        assert_eq!(spec.points[0].radius, RADIAL_MAX);
        assert_eq!(spec.points[0], spec.points[1]);

        let spec = build_radar(&records(&[("Y", -20), ("Z", 101)]));
        assert_eq!(spec.points[0].radius, 0);
        assert_eq!(spec.points[1].radius, RADIAL_MAX);
    }

    #[test]
    fn spec_is_always_filled() {
        assert!(build_radar(&[]).filled);
        assert!(build_radar(&records(&[("a", 1)])).filled);
    }

    #[test]
    fn single_record_is_degenerate_but_valid() {
        let spec = build_radar(&records(&[("solo", 50)]));
        assert_eq!(spec.vertex_count(), 1);
        assert_eq!(spec.points[0].angle_degrees, 0.0);
    }
}
