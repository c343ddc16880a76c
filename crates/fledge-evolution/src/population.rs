use fledge_neural::{Chromosome, topology::GeneRanges};
use fledge_stats::descriptive::DescriptiveStats;
use rand::Rng;

use crate::member::Member;

/// Breeding parameters applied when producing the next generation.
#[derive(Debug, Clone, Copy)]
pub struct Breeder {
    /// Probability of redrawing each chromosome entry (per-entry rate).
    pub mutation_rate: f32,
    /// Ranges mutated entries are redrawn from.
    pub ranges: GeneRanges,
}

/// A fixed-size ordered collection of members plus the generation counter.
///
/// The population size is constant across generations: breeding replaces
/// every member's chromosome in place, it never removes members.
#[derive(Debug, Clone)]
pub struct Population<M> {
    members: Vec<M>,
    generation: usize,
}

impl<M: Member> Population<M> {
    /// Wraps an initial member collection as generation zero.
    ///
    /// # Panics
    ///
    /// Panics if `members` is empty.
    #[must_use]
    pub fn new(members: Vec<M>) -> Self {
        assert!(!members.is_empty(), "population must not be empty");
        Self {
            members,
            generation: 0,
        }
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; provided for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns all members in order.
    #[must_use]
    pub fn members(&self) -> &[M] {
        &self.members
    }

    /// Returns all members mutably, for per-tick evaluation by the driver.
    pub fn members_mut(&mut self) -> &mut [M] {
        &mut self.members
    }

    /// Returns the current generation index, starting at zero.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Sums every member's fitness.
    #[must_use]
    pub fn total_fitness(&self) -> f32 {
        self.members.iter().map(Member::fitness).sum()
    }

    /// Computes descriptive statistics over the members' fitness values.
    #[must_use]
    pub fn fitness_stats(&self) -> DescriptiveStats {
        DescriptiveStats::new(self.members.iter().map(Member::fitness))
            .expect("population is never empty")
    }

    /// Breeds the next generation in place.
    ///
    /// For every offspring slot, two parents are selected by
    /// fitness-proportionate sampling from the outgoing generation, their
    /// chromosomes are crossed over and the child mutated. All children are
    /// bred before any member is touched; afterwards every member receives
    /// its child chromosome and is reset to its start state, and the
    /// generation counter is incremented.
    ///
    /// Breeding is a generation barrier: callers must not invoke it until
    /// every member's fitness for the episode has settled.
    ///
    /// # Panics
    ///
    /// Panics unless `breeder.mutation_rate` is within `[0, 1]`.
    pub fn breed<R>(&mut self, breeder: &Breeder, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        assert!(
            (0.0..=1.0).contains(&breeder.mutation_rate),
            "mutation rate must be in [0, 1]"
        );

        let total_fitness = self.total_fitness();
        let children: Vec<Chromosome> = (0..self.members.len())
            .map(|_| {
                let parent_a = select_parent(&self.members, total_fitness, rng);
                let parent_b = select_parent(&self.members, total_fitness, rng);
                let mut child =
                    Chromosome::crossover(&parent_a.chromosome(), &parent_b.chromosome());
                child.mutate(breeder.mutation_rate, &breeder.ranges, rng);
                child
            })
            .collect();

        for (member, child) in std::iter::zip(&mut self.members, children) {
            member.install_chromosome(child);
            member.reset();
        }
        self.generation += 1;
    }
}

/// Selects one parent with probability proportional to fitness.
///
/// When the total fitness is zero (no member scored at all), selection
/// degrades to a uniform-random choice.
fn select_parent<'a, M, R>(members: &'a [M], total_fitness: f32, rng: &mut R) -> &'a M
where
    M: Member,
    R: Rng + ?Sized,
{
    if total_fitness <= 0.0 {
        return &members[rng.random_range(0..members.len())];
    }
    let mut threshold = rng.random_range(0.0..total_fitness);
    for member in members {
        threshold -= member.fitness();
        if threshold < 0.0 {
            return member;
        }
    }
    // Floating-point accumulation can leave a sliver above zero.
    members.last().expect("population is never empty")
}
