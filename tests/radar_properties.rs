use proptest::prelude::*;

use folio::chart::radar::{RADIAL_MAX, SkillRecord, build_radar};

fn records(values: &[i32]) -> Vec<SkillRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| SkillRecord::new(format!("skill{i}"), *value))
        .collect()
}

proptest! {
    #[test]
    fn point_count_is_vertices_plus_closing(values in prop::collection::vec(-500i32..600, 1..40)) {
        let spec = build_radar(&records(&values));
        prop_assert_eq!(spec.points.len(), values.len() + 1);
        prop_assert_eq!(spec.vertex_count(), values.len());
    }

    #[test]
    fn radii_equal_clamped_input(values in prop::collection::vec(-500i32..600, 1..40)) {
        let spec = build_radar(&records(&values));
        for (point, value) in spec.vertices().iter().zip(&values) {
            prop_assert_eq!(point.radius, (*value).clamp(0, RADIAL_MAX));
            prop_assert!((0..=RADIAL_MAX).contains(&point.radius));
        }
    }

    #[test]
    fn angular_spacing_is_uniform(values in prop::collection::vec(0i32..=100, 2..40)) {
        let spec = build_radar(&records(&values));
        let step = 360.0 / values.len() as f64;
        let vertices = spec.vertices();
        for pair in vertices.windows(2) {
            let gap = pair[1].angle_degrees - pair[0].angle_degrees;
            prop_assert!((gap - step).abs() < 1e-9);
        }
        prop_assert_eq!(vertices[0].angle_degrees, 0.0);
    }

    #[test]
    fn closing_point_repeats_first_vertex(values in prop::collection::vec(0i32..=100, 1..40)) {
        let spec = build_radar(&records(&values));
        let first = spec.points.first().unwrap();
        let last = spec.points.last().unwrap();
        prop_assert_eq!(first, last);
    }

}

#[test]
fn empty_input_stays_empty() {
    let spec = build_radar(&[]);
    assert!(spec.is_empty());
    assert_eq!(spec.vertex_count(), 0);
}
