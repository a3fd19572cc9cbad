//! Game configuration options.

/// Points awarded for winning a war unless configured otherwise.
pub const DEFAULT_WAR_POINTS: u32 = 100;

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_war_points(250);
/// assert_eq!(options.war_points, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Points credited to the winner of each war.
    pub war_points: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            war_points: DEFAULT_WAR_POINTS,
        }
    }
}

impl GameOptions {
    /// Sets the points credited for winning a war.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_points(10);
    /// assert_eq!(options.war_points, 10);
    /// ```
    #[must_use]
    pub const fn with_war_points(mut self, points: u32) -> Self {
        self.war_points = points;
        self
    }
}
