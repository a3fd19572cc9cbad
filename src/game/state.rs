//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated; no war has been dealt yet.
    WaitingForWar,
    /// A war is in progress and the next battle can be drawn.
    AwaitingDraw,
    /// Hands are drawn and waiting for both play orders.
    AwaitingOrders,
    /// The war has a winner; start another war or end the session.
    WarEnded,
    /// Final standings have been taken. Terminal.
    SessionEnded,
}

impl GameState {
    /// Returns whether a new war may be started from this state.
    #[must_use]
    pub const fn can_start_war(self) -> bool {
        matches!(self, Self::WaitingForWar | Self::WarEnded)
    }

    /// Returns whether a war is being played.
    #[must_use]
    pub const fn in_war(self) -> bool {
        matches!(self, Self::AwaitingDraw | Self::AwaitingOrders)
    }
}
