use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;
pub mod opt;

#[doc(inline)]
pub use opt::ffd::{FFDOptimizer, optimize};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
