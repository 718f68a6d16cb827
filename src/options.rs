//! Game configuration options.

/// Hand totals on which a double down is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down offered on any total.
    Any,
    /// Double down offered only on 9 or 10.
    NineOrTen,
    /// Double down offered only on 9 through 11.
    #[default]
    NineThrough11,
    /// Double down never offered.
    None,
}

impl DoubleOption {
    /// Returns whether a hand with `total` may double down.
    #[must_use]
    pub const fn allows(self, total: u8) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => matches!(total, 9 | 10),
            Self::NineThrough11 => matches!(total, 9..=11),
            Self::None => false,
        }
    }
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(4)
///     .with_starting_chips(250)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Chips each named player starts with.
    pub starting_chips: usize,
    /// Cards kept in reserve beyond the initial deal before the shoe is
    /// rebuilt.
    pub reshuffle_margin: usize,
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether insurance is offered when the dealer shows an Ace.
    pub insurance: bool,
    /// Whether pairs may be split.
    pub split: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            starting_chips: 100,
            reshuffle_margin: 35,
            dealer_stands_on: 17,
            double: DoubleOption::NineThrough11,
            insurance: true,
            split: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks. A shoe always holds at least one.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = if decks == 0 { 1 } else { decks };
        self
    }

    /// Sets the chips each named player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the reshuffle safety margin.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_margin(20);
    /// assert_eq!(options.reshuffle_margin, 20);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_margin(mut self, margin: usize) -> Self {
        self.reshuffle_margin = margin;
        self
    }

    /// Sets the total at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{DoubleOption, GameOptions};
    ///
    /// let options = GameOptions::default().with_double(DoubleOption::NineOrTen);
    /// assert_eq!(options.double, DoubleOption::NineOrTen);
    /// ```
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets whether pairs may be split.
    #[must_use]
    pub const fn with_split(mut self, allowed: bool) -> Self {
        self.split = allowed;
        self
    }
}
