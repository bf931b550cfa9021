/// How operator assignments are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Every sequence in `{+, -, /, *}^gaps`, lexicographic with the first gap
    /// most significant
    #[default]
    Exhaustive,
    /// Combinations with replacement: only sequences that never step back in
    /// the `+ - / *` order. Misses answers such as `3*4+5` that need a
    /// "larger" operator before a "smaller" one.
    Multiset,
}
