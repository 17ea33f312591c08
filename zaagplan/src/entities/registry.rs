use crate::entities::Piece;
use crate::error::RegistryError;
use log::debug;

/// Ordered, caller-owned list of pieces waiting to be cut.
///
/// Every mutation is validated up front: a rejected operation leaves the registry untouched.
/// The optimizer never reads the registry directly, it works on a [`PieceRegistry::snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegistry {
    pieces: Vec<Piece>,
}

impl PieceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a piece and returns its index.
    pub fn add(&mut self, label: impl Into<String>, length: i64) -> Result<usize, RegistryError> {
        let piece = Piece::new(label, length)?;
        self.pieces.push(piece);
        debug!("[REG] added piece #{}", self.pieces.len() - 1);
        Ok(self.pieces.len() - 1)
    }

    /// Appends `qty` identical pieces, returns the index range they occupy.
    pub fn add_qty(
        &mut self,
        label: impl Into<String>,
        length: i64,
        qty: usize,
    ) -> Result<std::ops::Range<usize>, RegistryError> {
        let piece = Piece::new(label, length)?;
        let start = self.pieces.len();
        self.pieces.extend(std::iter::repeat_n(piece, qty));
        Ok(start..self.pieces.len())
    }

    /// Replaces the piece at `index` in place.
    pub fn update(
        &mut self,
        index: usize,
        label: impl Into<String>,
        length: i64,
    ) -> Result<(), RegistryError> {
        self.check_index(index)?;
        self.pieces[index] = Piece::new(label, length)?;
        Ok(())
    }

    /// Removes the piece at `index`, shifting all subsequent pieces down by one.
    pub fn remove(&mut self, index: usize) -> Result<Piece, RegistryError> {
        self.check_index(index)?;
        Ok(self.pieces.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// Owned copy of the current pieces, in registry order
    pub fn snapshot(&self) -> Vec<Piece> {
        self.pieces.clone()
    }

    fn check_index(&self, index: usize) -> Result<(), RegistryError> {
        match index < self.pieces.len() {
            true => Ok(()),
            false => Err(RegistryError::IndexOutOfRange {
                index,
                len: self.pieces.len(),
            }),
        }
    }
}

impl FromIterator<Piece> for PieceRegistry {
    fn from_iter<T: IntoIterator<Item = Piece>>(iter: T) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}
