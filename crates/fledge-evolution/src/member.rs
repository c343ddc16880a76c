use fledge_neural::Chromosome;

/// Capability trait for agents that take part in population breeding.
///
/// Any concrete agent type implements this to plug into
/// [`Population`](crate::Population); the breeding code never needs to know
/// what the agent actually does during an episode.
pub trait Member {
    /// Returns the member's fitness for the episode just evaluated.
    ///
    /// Must be non-negative; selection weight is proportional to this value.
    fn fitness(&self) -> f32;

    /// Extracts a copy of the member's current chromosome.
    fn chromosome(&self) -> Chromosome;

    /// Replaces the member's chromosome with a bred one.
    ///
    /// # Panics
    ///
    /// Panics if the chromosome does not match the member's network
    /// topology; a malformed chromosome must never be partially applied.
    fn install_chromosome(&mut self, chromosome: Chromosome);

    /// Restores the member to its configured start state for the next
    /// episode, leaving the installed chromosome untouched.
    fn reset(&mut self);
}
