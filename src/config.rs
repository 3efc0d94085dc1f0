/// The rule used to pick the column to branch on at each level of the search.
///
/// Every active column admits the same set of exact covers, so the rule
/// affects only the size of the search tree and the order in which solutions
/// are reported, never which solutions are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnChoice {
    /// Choose an active column with the fewest active rows; ties go to the
    /// column with the lowest id. This is the "minimum remaining values"
    /// heuristic recommended by Knuth.
    #[default]
    MinimumSize,
    /// Always choose the first active column.
    Leftmost,
}

/// Settings for a single call to [`Matrix::search_with_config`].
///
/// [`Matrix::search_with_config`]: crate::Matrix::search_with_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// The search stops as soon as this many solutions have been reported.
    pub max_solutions: usize,
    /// How to pick the column to branch on.
    pub column_choice: ColumnChoice,
    /// Whether to count search nodes, covers and dead ends.
    pub collect_stats: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_solutions: usize::MAX,
            column_choice: ColumnChoice::default(),
            collect_stats: false,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration that visits every solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = max_solutions;
        self
    }

    #[must_use]
    pub fn with_column_choice(mut self, column_choice: ColumnChoice) -> Self {
        self.column_choice = column_choice;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, collect_stats: bool) -> Self {
        self.collect_stats = collect_stats;
        self
    }
}

/// Counters gathered during a search when [`SearchConfig::collect_stats`]
/// is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The number of levels of recursion entered, including the first one.
    pub nodes: usize,
    /// The number of column covers performed.
    pub covers: usize,
    /// The number of times a chosen column had no rows left.
    pub dead_ends: usize,
    /// The deepest level reached, which is the length of the longest partial
    /// solution considered.
    pub max_depth: usize,
}

/// The result of [`Matrix::search_with_config`].
///
/// [`Matrix::search_with_config`]: crate::Matrix::search_with_config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// The number of solutions reported to the sink.
    pub solutions: usize,
    /// The search counters, if they were requested.
    pub stats: Option<SearchStats>,
}
