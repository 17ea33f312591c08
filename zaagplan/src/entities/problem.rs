use crate::entities::{Bar, CutInstance, Plan};
use crate::util::assertions::problem_matches_plan;
use log::{debug, warn};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Unique key for each open [`Bar`] in a [`CutProblem`]
    pub struct BarKey;
}

/// Dynamic counterpart of [`CutInstance`]: the bars opened so far and what happened to every piece.
#[derive(Debug, Clone)]
pub struct CutProblem {
    pub instance: CutInstance,
    pub bars: SlotMap<BarKey, Bar>,
    /// Keys of the open bars in the order they were created
    bar_order: Vec<BarKey>,
    piece_states: Vec<PieceState>,
    /// Ids of the pieces which could not be placed, in the order they were rejected
    unplaced: Vec<usize>,
}

/// What happened to a piece of the instance so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Pending,
    Placed(BarKey),
    Unplaced,
}

impl CutProblem {
    pub fn new(instance: CutInstance) -> Self {
        let piece_states = vec![PieceState::Pending; instance.n_pieces()];
        Self {
            instance,
            bars: SlotMap::with_key(),
            bar_order: vec![],
            piece_states,
            unplaced: vec![],
        }
    }

    /// Open bars in creation order
    pub fn open_bars(&self) -> impl Iterator<Item = (BarKey, &Bar)> {
        self.bar_order.iter().map(|&key| (key, &self.bars[key]))
    }

    /// Places a piece according to the provided [`CutPlacement`], opening a new bar if required.
    /// Panics if the piece would overfill the bar.
    pub fn place_piece(&mut self, placement: CutPlacement) -> BarKey {
        let CutPlacement { bar, piece_id } = placement;
        assert_eq!(self.piece_states[piece_id], PieceState::Pending);

        let piece = self.instance.piece(piece_id).clone();
        let key = match bar {
            BarType::Open(key) => key,
            BarType::Closed { stock_id } => {
                let bar = Bar::new(
                    self.instance.stock(stock_id),
                    self.instance.overhead.per_piece(),
                );
                let key = self.bars.insert(bar);
                self.bar_order.push(key);
                debug!("[PROB] opened bar {} of {}", self.bar_order.len(), self.bars[key].stock);
                key
            }
        };

        let bar = &mut self.bars[key];
        assert!(bar.fits(&piece), "{piece:?} overfills {bar:?}");
        bar.place(piece);
        self.piece_states[piece_id] = PieceState::Placed(key);
        key
    }

    /// Registers that a piece cannot be placed on any bar of the available stock.
    pub fn reject_piece(&mut self, piece_id: usize) {
        assert_eq!(self.piece_states[piece_id], PieceState::Pending);
        let piece = self.instance.piece(piece_id);
        warn!(
            "[PROB] piece {:?} ({} mm + {} mm overhead) does not fit on the longest stock length ({} mm), it is left out of the plan",
            piece.label(),
            piece.length(),
            self.instance.overhead.per_piece(),
            self.instance.max_stock_length().map_or(0, |s| s.get())
        );
        self.piece_states[piece_id] = PieceState::Unplaced;
        self.unplaced.push(piece_id);
    }

    pub fn piece_state(&self, piece_id: usize) -> PieceState {
        self.piece_states[piece_id]
    }

    pub fn n_pending(&self) -> usize {
        self.piece_states
            .iter()
            .filter(|s| **s == PieceState::Pending)
            .count()
    }

    pub fn unplaced_ids(&self) -> &[usize] {
        &self.unplaced
    }

    /// Creates a snapshot of the current state of the problem as a [`Plan`].
    pub fn save(&self) -> Plan {
        let plan = Plan {
            bars: self.open_bars().map(|(_, bar)| bar.clone()).collect(),
            unplaced: self
                .unplaced
                .iter()
                .map(|&id| self.instance.piece(id).clone())
                .collect(),
            overhead: self.instance.overhead,
        };

        debug_assert!(problem_matches_plan(self, &plan));

        plan
    }
}

/// Encapsulates all information required to place a piece in a [`CutProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutPlacement {
    /// Which bar to put the piece on
    pub bar: BarType,
    /// Index of the piece in the [`CutInstance`]
    pub piece_id: usize,
}

/// Distinguishes between bars that are already open and new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarType {
    /// An existing bar, identified by its key
    Open(BarKey),
    /// A bar that does not exist yet, opened by taking a fresh stock bar of this length
    Closed { stock_id: usize },
}
