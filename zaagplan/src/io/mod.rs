/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
mod import;

/// All logic for exporting internal representations into external ones
mod export;

/// Parsing of plain-text piece lists (`length, quantity[, label]` per line)
pub mod piece_list;

/// All logic for creating SVG cutting diagrams from [`Plan`](crate::entities::Plan)s
#[cfg(feature = "svg")]
pub mod svg;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::import_stock_lengths;
