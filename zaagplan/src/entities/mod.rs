mod bar;
mod instance;
mod piece;
mod plan;
mod problem;
mod registry;
mod stock;

#[doc(inline)]
pub use bar::Bar;
#[doc(inline)]
pub use instance::CutInstance;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use plan::Plan;
#[doc(inline)]
pub use problem::BarKey;
#[doc(inline)]
pub use problem::BarType;
#[doc(inline)]
pub use problem::CutPlacement;
#[doc(inline)]
pub use problem::CutProblem;
#[doc(inline)]
pub use problem::PieceState;
#[doc(inline)]
pub use registry::PieceRegistry;
#[doc(inline)]
pub use stock::Overhead;
#[doc(inline)]
pub use stock::StockLength;
