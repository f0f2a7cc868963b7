//! Search configuration and the opening book

use super::ResultCache;
use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Sample size used by the interactive entry point
pub const INTERACTIVE_MAX_SOLUTIONS: usize = 100;

/// Best first guess for five-letter games
const FIVE_LETTER_OPENING: &[&str] = &["SOARE"];

/// Second-round candidates precomputed for games opened with ARISE
const AFTER_ARISE: &[&str] = &[
    "RADAR", "RORTY", "STORM", "COULD", "OBANG", "SLOBS", "CANTY", "GAULT", "POTCH", "LETCH",
    "LORRY", "DENET", "PLANT", "CADGY", "CHYND", "PITCH", "COUNT", "POYNT", "ABASE", "PATLY",
    "DEMPT", "LINED", "SEWEN", "LINTY", "NATAL", "CLOGS", "FIRST", "GONCH", "TWEEP", "KLONG",
    "GLINT", "BACHS", "NOULD", "SWORN", "CEDER", "SHIRK", "ARGUE", "CLINT", "PUTON", "LINGO",
    "CLAPT", "UNAPT", "ISLET", "ROUGH", "SNAIL", "KNELT", "FLOUT", "AMASS", "DROPT", "BETEL",
    "TICED", "DONUT", "SLASH", "ORBIT", "VINED", "KNOTS", "SLOTH", "LAUCH", "SHOUT", "ASIDE",
    "SIEGE", "ALAND", "SPIRE", "CLOTH", "MONTH", "ABRAM", "THACK", "RIDGE", "CHANT", "STAIR",
    "WORTH", "EXIST", "HANDY", "FLING", "GLYPH", "ALIEN", "NYMPH", "BLOCK", "SAINT", "SWAMP",
    "MARSH", "SHIED", "INANE", "QUASI", "ARISE", "PLEON", "BUILT", "RENEW", "ARSON", "PUTTY",
    "PEARL", "DUTCH", "PROSE", "AIDER", "ASCOT", "IRATE", "WORST", "WAIVE", "MEDIA", "DAISY",
    "ARENA", "SEPIA", "ACRID", "POISE", "AROSE", "LOFTY", "AFIRE", "ERASE", "PARSE", "AISLE",
    "RAISE", "AMISS", "SKIER", "RINSE", "VERSO", "ARTSY",
];

/// Precomputed candidate guesses for specific early-game histories
///
/// Keys are the previous guess words joined with `;` (see
/// [`GameState::guess_key`](crate::game::GameState::guess_key)); the empty key
/// is the first round.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: Arc<FxHashMap<String, Vec<Word>>>,
}

impl OpeningBook {
    /// A book with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Book for the standard five-letter game
    #[must_use]
    pub fn five_letter() -> Self {
        Self::from_entries([
            (String::new(), words_from_slice(FIVE_LETTER_OPENING)),
            ("ARISE".to_string(), words_from_slice(AFTER_ARISE)),
        ])
    }

    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<Word>)>) -> Self {
        Self {
            entries: Arc::new(entries.into_iter().collect()),
        }
    }

    /// Override candidate list for a history key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Word]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tunable search settings
///
/// Defaults: full candidate set, fresh random seed, parallel evaluation,
/// useless-guess elimination, fast (early exit) checking, the five-letter
/// opening book, and no result cache.
#[derive(Debug, Clone)]
pub struct SolveSettings {
    /// Seed for candidate subsampling; a fresh seed is drawn when `None`
    pub random_seed: Option<u64>,
    /// Cap on the number of remaining hidden words scored against each guess
    pub max_solutions_to_search: Option<usize>,
    pub use_parallel: bool,
    pub eliminate_useless_guesses: bool,
    /// Rank guesses by remaining candidates with early exit, rather than by
    /// eliminated candidates with full evaluation
    pub use_fast_checking: bool,
    pub opening_book: OpeningBook,
    pub result_cache: Option<Arc<ResultCache>>,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            random_seed: None,
            max_solutions_to_search: None,
            use_parallel: true,
            eliminate_useless_guesses: true,
            use_fast_checking: true,
            opening_book: OpeningBook::five_letter(),
            result_cache: None,
        }
    }
}

impl SolveSettings {
    /// Settings used by the interactive entry point: bounded sample, opening
    /// book, parallel evaluation and a result cache
    #[must_use]
    pub fn interactive() -> Self {
        Self::default()
            .with_max_solutions(INTERACTIVE_MAX_SOLUTIONS)
            .with_cache(Arc::new(ResultCache::new()))
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions_to_search = Some(max);
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    #[must_use]
    pub const fn with_useless_guess_elimination(mut self, eliminate: bool) -> Self {
        self.eliminate_useless_guesses = eliminate;
        self
    }

    #[must_use]
    pub const fn with_fast_checking(mut self, fast: bool) -> Self {
        self.use_fast_checking = fast;
        self
    }

    #[must_use]
    pub fn with_opening_book(mut self, book: OpeningBook) -> Self {
        self.opening_book = book;
        self
    }

    #[must_use]
    pub fn without_opening_book(self) -> Self {
        self.with_opening_book(OpeningBook::empty())
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<ResultCache>) -> Self {
        self.result_cache = Some(cache);
        self
    }
}
