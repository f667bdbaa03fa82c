//! Year/day keyed factories that parse input into ready-to-solve instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Years addressable by the registry, `BASE_YEAR..BASE_YEAR + MAX_YEARS`
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
/// One slot per addressable puzzle
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Position of a puzzle in the registry's flat slot table, ordered by
/// year then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PuzzleSlot(usize);

impl PuzzleSlot {
    fn new(year: u16, day: u8) -> Option<Self> {
        let year_offset = usize::from(year.checked_sub(BASE_YEAR)?);
        let day_offset = usize::from(day.checked_sub(1)?);
        (year_offset < MAX_YEARS && day_offset < DAYS_PER_YEAR)
            .then_some(Self(year_offset * DAYS_PER_YEAR + day_offset))
    }

    fn year_day(self) -> (u16, u8) {
        // both quotients fit: slot < CAPACITY
        let year = BASE_YEAR + (self.0 / DAYS_PER_YEAR) as u16;
        let day = (self.0 % DAYS_PER_YEAR) as u8 + 1;
        (year, day)
    }
}

/// Parses input into a type-erased instance; shared across threads
pub type SolverFactory =
    Box<dyn Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without parsing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct Registration {
    factory: SolverFactory,
    parts: u8,
}

type Slots = Box<[Option<Registration>]>;

/// Builder for an immutable [`SolverRegistry`]
///
/// Duplicate and out-of-range registrations are rejected here, so a built
/// registry never needs to check them again.
///
/// ```
/// use aoc_solver::{Answer, AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type Parsed = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
///         input
///             .split_whitespace()
///             .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(parsed: &Self::Parsed, _part: u8) -> Result<Answer, SolveError> {
///         Ok(parsed.iter().sum())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register::<Sum>(2023, 1)
///     .unwrap()
///     .build();
///
/// let solver = registry.create_solver(2023, 1, "1 2 3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, 6);
/// ```
pub struct SolverRegistryBuilder {
    slots: Slots,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(CAPACITY).collect(),
        }
    }

    /// Register a factory with an explicit parts count
    ///
    /// Fails with [`RegistrationError::InvalidYearDay`] outside the
    /// addressable window and [`RegistrationError::DuplicateSolver`] when the
    /// slot is taken.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(&str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        let PuzzleSlot(slot) =
            PuzzleSlot::new(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        let entry = &mut self.slots[slot];
        if entry.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *entry = Some(Registration {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register solver type `S` for a year and day
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register every plugin submitted through `inventory::submit!`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .expect("plugins collide")
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// // Only solvers tagged "easy"
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))
    ///     .expect("plugins collide")
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage { slots: self.slots },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the registered factories; lookups are O(1)
pub struct SolverFactoryStorage {
    slots: Slots,
}

impl SolverFactoryStorage {
    fn registration(&self, year: u16, day: u8) -> Option<&Registration> {
        let PuzzleSlot(slot) = PuzzleSlot::new(year, day)?;
        self.slots[slot].as_ref()
    }

    /// Every registered puzzle, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.slots.iter().enumerate().filter_map(|(slot, registration)| {
            let (year, day) = PuzzleSlot(slot).year_day();
            registration.as_ref().map(|r| FactoryInfo {
                year,
                day,
                parts: r.parts,
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.registration(year, day).map(|r| FactoryInfo {
            year,
            day,
            parts: r.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.registration(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for year/day
    ///
    /// Errors with [`SolverError::InvalidYearDay`] outside the addressable
    /// window, [`SolverError::NotFound`] for an empty slot, and
    /// [`SolverError::ParseError`] when the input is rejected.
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        if PuzzleSlot::new(year, day).is_none() {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let registration = self
            .storage
            .registration(year, day)
            .ok_or(SolverError::NotFound(year, day))?;

        Ok((registration.factory)(input)?)
    }
}

/// Object-safe hook that lets a solver register itself with a builder
///
/// Every [`Solver`] gets this through a blanket impl, which is what allows
/// `&'static dyn RegisterableSolver` to sit inside a [`SolverPlugin`].
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// Plugin record collected by `inventory`
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`. Written by hand:
///
/// ```ignore
/// aoc_solver::inventory::submit! {
///     aoc_solver::SolverPlugin {
///         year: 2023,
///         day: 5,
///         solver: &Day05,
///         tags: &["2023", "ranges"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Labels the runner filters on; a solver must carry every requested tag
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_roundtrip_covers_capacity() {
        for slot in 0..CAPACITY {
            let (year, day) = PuzzleSlot(slot).year_day();
            assert_eq!(PuzzleSlot::new(year, day), Some(PuzzleSlot(slot)));
        }
    }

    #[test]
    fn slot_rejects_out_of_bounds() {
        assert_eq!(PuzzleSlot::new(2014, 1), None);
        assert_eq!(PuzzleSlot::new(2035, 1), None);
        assert_eq!(PuzzleSlot::new(2023, 0), None);
        assert_eq!(PuzzleSlot::new(2023, 26), None);
        assert_eq!(PuzzleSlot::new(2015, 1), Some(PuzzleSlot(0)));
        assert_eq!(PuzzleSlot::new(2034, 25), Some(PuzzleSlot(CAPACITY - 1)));
    }

    #[test]
    fn slots_order_by_year_then_day() {
        assert!(PuzzleSlot::new(2016, 1) > PuzzleSlot::new(2015, 25));
        assert!(PuzzleSlot::new(2023, 6) > PuzzleSlot::new(2023, 5));
    }
}
