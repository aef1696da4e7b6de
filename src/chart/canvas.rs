//! Character-grid plotting for radar specs.
//!
//! Maps the polar polygon onto a text grid: polar coordinates become
//! cartesian cells (2:1 horizontal stretch to compensate for character
//! aspect), edges are traced by sampling, and the bounded area is shaded
//! with an even-odd test when the spec is filled. Angle 0 points up and
//! angles grow clockwise.

use crate::chart::radar::{RADIAL_MAX, RadarSpec};

const MIN_WIDTH: usize = 17;
const MIN_HEIGHT: usize = 9;

/// Glyph set used when plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridChars {
    pub vertex: char,
    pub edge: char,
    pub fill: char,
    pub center: char,
}

const UNICODE_CHARS: GridChars = GridChars {
    vertex: '\u{25cf}',
    edge: '\u{2217}',
    fill: '\u{00b7}',
    center: '+',
};

const ASCII_CHARS: GridChars = GridChars {
    vertex: 'O',
    edge: '*',
    fill: '.',
    center: '+',
};

/// Fixed-size plot surface for one radar spec.
#[derive(Debug, Clone, Copy)]
pub struct RadarGrid {
    width: usize,
    height: usize,
    chars: GridChars,
}

impl RadarGrid {
    #[must_use]
    pub fn new(width: usize, height: usize, unicode: bool) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height: height.max(MIN_HEIGHT),
            chars: if unicode { UNICODE_CHARS } else { ASCII_CHARS },
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Plot the spec. Always returns exactly `height` rows; an empty spec
    /// renders as an empty plot area.
    #[must_use]
    pub fn render(&self, spec: &RadarSpec) -> Vec<String> {
        let mut cells = vec![vec![' '; self.width]; self.height];

        if !spec.is_empty() {
            let vertices: Vec<(f64, f64)> = spec
                .vertices()
                .iter()
                .map(|p| self.to_cell(p.angle_degrees, p.radius))
                .collect();

            if spec.filled {
                self.shade(&mut cells, &vertices);
            }
            self.trace_edges(&mut cells, &vertices);
            self.mark_vertices(&mut cells, &vertices);
            self.place_labels(&mut cells, spec);

            let (cx, cy) = self.center();
            put(&mut cells, cx, cy, self.chars.center);
        }

        cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Radial extents in cells, horizontal stretched 2:1.
    fn extents(&self) -> (f64, f64) {
        let (cx, cy) = self.center();
        let ry = (cy as f64 - 1.0).max(1.0);
        let rx = (cx as f64 - 2.0).min(2.0 * ry).max(2.0);
        (rx, rx / 2.0)
    }

    fn to_cell(&self, angle_degrees: f64, radius: i32) -> (f64, f64) {
        let (cx, cy) = self.center();
        let (rx, ry) = self.extents();
        let frac = f64::from(radius) / f64::from(RADIAL_MAX);
        let theta = angle_degrees.to_radians();
        let x = cx as f64 + theta.sin() * frac * rx;
        let y = cy as f64 - theta.cos() * frac * ry;
        (x, y)
    }

    fn shade(&self, cells: &mut [Vec<char>], vertices: &[(f64, f64)]) {
        if vertices.len() < 3 {
            return;
        }
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if point_in_polygon(vertices, x as f64, y as f64) {
                    *cell = self.chars.fill;
                }
            }
        }
    }

    fn trace_edges(&self, cells: &mut [Vec<char>], vertices: &[(f64, f64)]) {
        if vertices.len() < 2 {
            return;
        }
        for i in 0..vertices.len() {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            let steps = ((x2 - x1).abs().max((y2 - y1).abs()) * 2.0).ceil() as usize;
            for step in 0..=steps.max(1) {
                let t = step as f64 / steps.max(1) as f64;
                let x = (x1 + t * (x2 - x1)).round();
                let y = (y1 + t * (y2 - y1)).round();
                if x >= 0.0 && y >= 0.0 {
                    put(cells, x as usize, y as usize, self.chars.edge);
                }
            }
        }
    }

    fn mark_vertices(&self, cells: &mut [Vec<char>], vertices: &[(f64, f64)]) {
        for &(x, y) in vertices {
            let (x, y) = (x.round(), y.round());
            if x >= 0.0 && y >= 0.0 {
                put(cells, x as usize, y as usize, self.chars.vertex);
            }
        }
    }

    /// Write each vertex label just outside the full-scale ring, growing
    /// away from the plot so it never crosses the polygon. Clipped at the
    /// grid boundary.
    fn place_labels(&self, cells: &mut [Vec<char>], spec: &RadarSpec) {
        let (cx, _) = self.center();
        for point in spec.vertices() {
            let (ax, ay) = self.to_cell(point.angle_degrees, RADIAL_MAX);
            let row = ay.round().clamp(0.0, (self.height - 1) as f64) as usize;
            if ax.round() as usize >= cx {
                let start = (ax.round() as usize + 2).min(self.width);
                write_text(&mut cells[row], start, &point.label);
            } else {
                let end = (ax.round().max(0.0) as usize).saturating_sub(1);
                let start = end.saturating_sub(point.label.chars().count());
                write_text(&mut cells[row], start, &point.label);
            }
        }
    }
}

fn put(cells: &mut [Vec<char>], x: usize, y: usize, ch: char) {
    if let Some(row) = cells.get_mut(y) {
        if let Some(cell) = row.get_mut(x) {
            *cell = ch;
        }
    }
}

fn write_text(row: &mut [char], start: usize, text: &str) {
    for (offset, ch) in text.chars().enumerate() {
        if let Some(cell) = row.get_mut(start + offset) {
            *cell = ch;
        }
    }
}

/// Even-odd containment test against the open vertex ring.
fn point_in_polygon(vertices: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let n = vertices.len();
    for i in 0..n {
        let (x1, y1) = vertices[i];
        let (x2, y2) = vertices[(i + 1) % n];
        if (y1 > y) != (y2 > y) {
            let t = (y - y1) / (y2 - y1);
            if x < x1 + t * (x2 - x1) {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::radar::{SkillRecord, build_radar};

    fn spec3() -> RadarSpec {
        build_radar(&[
            SkillRecord::new("py", 90),
            SkillRecord::new("sq", 85),
            SkillRecord::new("ml", 75),
        ])
    }

    #[test]
    fn render_has_fixed_row_count() {
        let grid = RadarGrid::new(41, 15, true);
        assert_eq!(grid.render(&spec3()).len(), 15);
    }

    #[test]
    fn empty_spec_renders_blank_area() {
        let grid = RadarGrid::new(41, 15, true);
        let rows = grid.render(&build_radar(&[]));
        assert_eq!(rows.len(), 15);
        assert!(rows.iter().all(String::is_empty));
    }

    #[test]
    fn vertices_and_labels_appear() {
        let grid = RadarGrid::new(41, 15, false);
        let plot = grid.render(&spec3()).join("\n");
        assert_eq!(plot.matches('O').count(), 3);
        assert!(plot.contains("py"));
        assert!(plot.contains("sq"));
        assert!(plot.contains("ml"));
    }

    #[test]
    fn filled_spec_shades_interior() {
        let grid = RadarGrid::new(41, 15, false);
        let plot = grid.render(&spec3()).join("\n");
        assert!(plot.contains('.'));
    }

    #[test]
    fn unfilled_spec_has_no_shading() {
        let mut spec = spec3();
        spec.filled = false;
        let grid = RadarGrid::new(41, 15, false);
        let plot = grid.render(&spec).join("\n");
        assert!(!plot.contains('.'));
    }

    #[test]
    fn degenerate_shapes_do_not_panic() {
        let grid = RadarGrid::new(41, 15, true);
        for count in 1..=2 {
            let records: Vec<SkillRecord> = (0..count)
                .map(|i| SkillRecord::new(format!("s{i}"), 50))
                .collect();
            let rows = grid.render(&build_radar(&records));
            assert_eq!(rows.len(), 15);
        }
    }

    #[test]
    fn tiny_dimensions_are_clamped() {
        let grid = RadarGrid::new(1, 1, true);
        assert!(grid.width() >= 17);
        assert!(grid.height() >= 9);
        let _ = grid.render(&spec3());
    }
}
