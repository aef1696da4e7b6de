//! Skill-proficiency chart pipeline.
//!
//! `radar` turns an ordered skill sequence into a closed polar polygon
//! description; `canvas` plots that description onto a character grid.
//! The two halves are independent: any polar renderer can consume a
//! [`radar::RadarSpec`] in place of the built-in canvas.

pub mod canvas;
pub mod radar;

pub use canvas::RadarGrid;
pub use radar::{RADIAL_MAX, RadarPoint, RadarSpec, SkillRecord, build_radar};
