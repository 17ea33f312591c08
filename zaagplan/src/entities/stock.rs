use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A standard length (mm) in which raw profile bars are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct StockLength(u64);

impl StockLength {
    pub fn new(length: u64) -> Result<Self, ConfigurationError> {
        match length {
            0 => Err(ConfigurationError::ZeroStockLength),
            _ => Ok(Self(length)),
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for StockLength {
    type Error = ConfigurationError;

    fn try_from(length: u64) -> Result<Self, Self::Error> {
        StockLength::new(length)
    }
}

impl From<StockLength> for u64 {
    fn from(stock: StockLength) -> Self {
        stock.0
    }
}

impl Display for StockLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

/// Material lost per piece on top of its own length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overhead {
    /// Extra length reserved per piece for fixturing (mm)
    #[serde(default)]
    pub clamp_clearance: u64,
    /// Material consumed by the saw blade per cut (mm)
    #[serde(default)]
    pub kerf_loss: u64,
}

impl Overhead {
    pub fn new(clamp_clearance: u64, kerf_loss: u64) -> Self {
        Self {
            clamp_clearance,
            kerf_loss,
        }
    }

    /// Overhead charged for every piece placed on a bar, including the first one.
    /// Saturates at `u64::MAX`, which no piece can fit next to.
    pub fn per_piece(&self) -> u64 {
        self.clamp_clearance.saturating_add(self.kerf_loss)
    }
}
