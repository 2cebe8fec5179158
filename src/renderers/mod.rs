pub mod svg;

pub use svg::render as render_svg;
