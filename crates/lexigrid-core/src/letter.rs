//! Board letter representation.

use std::fmt::{self, Display};

/// A lowercase letter in the range `a`-`z`.
///
/// This enum provides type-safe representation of board letters, preventing
/// invalid cell values at compile time. Each variant corresponds to exactly
/// one letter of the alphabet.
///
/// # Examples
///
/// ```
/// use lexigrid_core::Letter;
///
/// let letter = Letter::E;
/// assert_eq!(letter.as_char(), 'e');
///
/// // Create from a char
/// let letter = Letter::from_char('q');
/// assert_eq!(letter, Some(Letter::Q));
///
/// // Iterate over the whole alphabet
/// for letter in Letter::ALL {
///     assert!(letter.as_char().is_ascii_lowercase());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Letter {
    /// The letter `a`.
    A,
    /// The letter `b`.
    B,
    /// The letter `c`.
    C,
    /// The letter `d`.
    D,
    /// The letter `e`.
    E,
    /// The letter `f`.
    F,
    /// The letter `g`.
    G,
    /// The letter `h`.
    H,
    /// The letter `i`.
    I,
    /// The letter `j`.
    J,
    /// The letter `k`.
    K,
    /// The letter `l`.
    L,
    /// The letter `m`.
    M,
    /// The letter `n`.
    N,
    /// The letter `o`.
    O,
    /// The letter `p`.
    P,
    /// The letter `q`.
    Q,
    /// The letter `r`.
    R,
    /// The letter `s`.
    S,
    /// The letter `t`.
    T,
    /// The letter `u`.
    U,
    /// The letter `v`.
    V,
    /// The letter `w`.
    W,
    /// The letter `x`.
    X,
    /// The letter `y`.
    Y,
    /// The letter `z`.
    Z,
}

impl Letter {
    /// Array containing the whole alphabet in order.
    ///
    /// Useful for iterating over all possible cell values, and as the draw
    /// pool for random board generation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0], Letter::A);
    /// assert_eq!(Letter::ALL[25], Letter::Z);
    /// ```
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Creates a letter from a lowercase ASCII character.
    ///
    /// Returns `None` for anything outside `a`-`z`, including uppercase
    /// letters; the board alphabet is strictly lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::Letter;
    ///
    /// assert_eq!(Letter::from_char('a'), Some(Letter::A));
    /// assert_eq!(Letter::from_char('A'), None);
    /// assert_eq!(Letter::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match u8::try_from(c) {
            Ok(byte @ b'a'..=b'z') => Some(Self::ALL[usize::from(byte - b'a')]),
            _ => None,
        }
    }

    /// Creates a letter from an alphabet index in the range 0-25.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 26 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::Letter;
    ///
    /// assert_eq!(Letter::from_index(0), Letter::A);
    /// assert_eq!(Letter::from_index(25), Letter::Z);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::ALL.len(), "Invalid letter index: {index}");
        Self::ALL[index]
    }

    /// Returns this letter's position in the alphabet (0-25).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::Letter;
    ///
    /// assert_eq!(Letter::A.index(), 0);
    /// assert_eq!(Letter::Z.index(), 25);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase character for this letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::Letter;
    ///
    /// assert_eq!(Letter::A.as_char(), 'a');
    /// assert_eq!(Letter::M.as_char(), 'm');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
