mod plan_to_svg;
pub mod svg_util;

#[doc(inline)]
pub use plan_to_svg::plan_to_svg;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
