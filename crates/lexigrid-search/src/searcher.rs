//! Multi-word substring search over a search space.

use crate::search_space::SearchSpace;

/// Errors that can occur during a word search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// The word list handed to the searcher contained no words.
    #[display("word list is empty")]
    EmptyWordList,
}

/// Finds dictionary words hidden in a [`SearchSpace`].
///
/// A word counts as found when it occurs as a contiguous substring of at
/// least one vector in any family. The searcher borrows the space, so one
/// space can serve any number of searches.
///
/// Both the grid and the words are expected to be lowercase; the searcher
/// performs no case normalization.
///
/// # Examples
///
/// ```
/// use lexigrid_core::LetterGrid;
/// use lexigrid_search::{SearchSpace, WordSearcher};
///
/// let grid: LetterGrid = "
///     c a t
///     o x e
///     w y z
/// "
/// .parse()?;
/// let space = SearchSpace::from_grid(&grid);
/// let searcher = WordSearcher::new(&space);
///
/// // "cat" reads along row 0, "cow" down column 0, and "tac" along the
/// // reversed row; "dog" is nowhere on the board.
/// let found = searcher.find_words(&["cat", "dog", "cow", "tac"])?;
/// assert_eq!(found, ["cat", "cow", "tac"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordSearcher<'a> {
    space: &'a SearchSpace,
}

impl<'a> WordSearcher<'a> {
    /// Creates a searcher over the given space.
    #[must_use]
    pub const fn new(space: &'a SearchSpace) -> Self {
        Self { space }
    }

    /// Returns `true` if `word` occurs in any vector of any family.
    ///
    /// Scanning stops at the first vector containing the word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.space.vectors().any(|vector| vector.contains(word))
    }

    /// Returns the subset of `words` present on the board, in input order.
    ///
    /// A word appearing several times on the board is still reported once.
    /// Duplicate input words are reported as often as they appear in the
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyWordList`] if `words` is empty.
    pub fn find_words<S>(&self, words: &[S]) -> Result<Vec<String>, SearchError>
    where
        S: AsRef<str>,
    {
        if words.is_empty() {
            return Err(SearchError::EmptyWordList);
        }
        Ok(words
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| self.contains(word))
            .map(str::to_owned)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use lexigrid_core::{Letter, LetterGrid};
    use proptest::prelude::*;

    use super::*;
    use crate::direction::Direction;

    fn searcher_fixture(s: &str) -> SearchSpace {
        SearchSpace::from_grid(&s.parse().unwrap())
    }

    #[test]
    fn test_word_on_a_row() {
        let space = searcher_fixture(
            "
            q w e r t
            y u i o p
            h e l l o
            a s d f g
            z x c v b
        ",
        );
        let searcher = WordSearcher::new(&space);

        assert!(searcher.contains("hello"));
        assert!(searcher.contains("olleh"));
        assert!(!searcher.contains("world"));

        let found = searcher
            .find_words(&["hello", "olleh", "world"])
            .unwrap();
        assert_eq!(found, ["hello", "olleh"]);
    }

    #[test]
    fn test_word_on_diagonals() {
        // "cat" runs down-right from the top-left corner.
        let space = searcher_fixture(
            "
            c q q
            q a q
            q q t
        ",
        );
        let searcher = WordSearcher::new(&space);
        assert!(searcher.contains("cat"));
        assert!(searcher.contains("tac"));

        // "cat" runs down-left from the top-right corner.
        let space = searcher_fixture(
            "
            q q c
            q a q
            t q q
        ",
        );
        let searcher = WordSearcher::new(&space);
        assert!(searcher.contains("cat"));
        assert!(searcher.contains("tac"));
    }

    #[test]
    fn test_word_on_a_column() {
        let space = searcher_fixture(
            "
            c x
            o x
            w x
        ",
        );
        let searcher = WordSearcher::new(&space);
        assert!(searcher.contains("cow"));
        assert!(searcher.contains("woc"));
        assert!(!searcher.contains("cwo"));
    }

    #[test]
    fn test_word_as_inner_substring() {
        let space = searcher_fixture("xxcatxx");
        let searcher = WordSearcher::new(&space);
        assert!(searcher.contains("cat"));
        assert!(searcher.contains("at"));
        assert!(!searcher.contains("cats"));
    }

    #[test]
    fn test_single_cell_board() {
        let space = searcher_fixture("a");
        let searcher = WordSearcher::new(&space);
        assert_eq!(searcher.find_words(&["a"]).unwrap(), ["a"]);
        assert_eq!(searcher.find_words(&["b"]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_found_words_keep_input_order() {
        let space = searcher_fixture(
            "
            c a t
            o x e
            w y z
        ",
        );
        let searcher = WordSearcher::new(&space);
        let found = searcher
            .find_words(&["zebra", "cow", "dog", "cat"])
            .unwrap();
        assert_eq!(found, ["cow", "cat"]);
    }

    #[test]
    fn test_no_case_normalization() {
        let space = searcher_fixture(
            "
            c a t
            o x e
            w y z
        ",
        );
        let searcher = WordSearcher::new(&space);
        assert!(!searcher.contains("CAT"));
        assert!(!searcher.contains("Cat"));
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        let space = searcher_fixture("a");
        let searcher = WordSearcher::new(&space);
        let words: [&str; 0] = [];
        assert_eq!(
            searcher.find_words(&words),
            Err(SearchError::EmptyWordList)
        );
    }

    fn arb_grid() -> impl Strategy<Value = LetterGrid> {
        (1..=10_usize, 1..=10_usize)
            .prop_flat_map(|(width, height)| {
                prop::collection::vec(
                    prop::collection::vec(prop::sample::select(Letter::ALL.to_vec()), width),
                    height,
                )
            })
            .prop_map(|rows| LetterGrid::from_rows(rows).unwrap())
    }

    proptest! {
        #[test]
        fn prop_whole_vector_is_always_found(
            grid in arb_grid(),
            direction in prop::sample::select(Direction::ALL.to_vec()),
            index_seed in 0..64_usize,
        ) {
            let space = SearchSpace::from_grid(&grid);
            let family = space.family(direction);
            let vector = family[index_seed % family.len()].clone();
            let searcher = WordSearcher::new(&space);
            prop_assert!(searcher.contains(&vector));
            prop_assert_eq!(searcher.find_words(&[vector.as_str()]).unwrap(), [vector]);
        }

        #[test]
        fn prop_found_words_are_substrings_of_some_vector(grid in arb_grid(), word in "[a-z]{1,4}") {
            let space = SearchSpace::from_grid(&grid);
            let searcher = WordSearcher::new(&space);
            let found = searcher.contains(&word);
            let witnessed = space.vectors().any(|vector| vector.contains(&word));
            prop_assert_eq!(found, witnessed);
        }
    }
}
