//! Debug output.

pub mod svg;

pub use svg::{CoverageSvg, SvgColorScheme, SvgConfig};
