//! Registry mapping (year, day) to solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage covers
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total slots in the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for year/day, or None when out of bounds
#[inline]
fn slot_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Inverse of [`slot_index`]
#[inline]
fn slot_year_day(index: usize) -> (u16, u8) {
    (
        BASE_YEAR + (index / DAYS_PER_YEAR) as u16,
        (index % DAYS_PER_YEAR) as u8 + 1,
    )
}

/// Factory producing a solver instance from raw input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata for a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts the solver implements
    pub parts: u8,
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for [`SolverRegistry`], with duplicate and bounds checking.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_plugins(|_| true)
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<RegistryEntry>>,
}

impl RegistryBuilder {
    /// Create an empty builder with pre-allocated storage.
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory for a specific year and day.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = slot_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(RegistryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly.
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    /// Register every collected plugin, in submission order.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the collected plugins matching `filter`.
    ///
    /// The filter sees each plugin's year, day and tags, so callers can
    /// restrict a build to e.g. one year or one tag.
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry.
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table of solver factories.
pub struct SolverRegistry {
    entries: Vec<Option<RegistryEntry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for year/day.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = slot_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for a registered solver, or None.
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        let index = slot_index(year, day)?;
        self.entries[index].as_ref().map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Whether a solver is registered for year/day.
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    /// Iterate over metadata for all registered solvers, in year/day order.
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = slot_year_day(i);
                SolverInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Number of registered solvers.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Type-erased self-registration, blanket-implemented for every [`Solver`].
///
/// Plugins hold `&'static dyn RegisterableSolver` so solvers with different
/// shared data types can live in one inventory collection.
pub trait RegisterableSolver: Sync {
    /// Register this solver with the builder for the given year and day.
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Number of parts the solver implements.
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for link-time discovery.
///
/// The `Solution` derive generates the `inventory::submit!` for each day;
/// [`RegistryBuilder::register_plugins`] collects them.
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver, type-erased
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form tags for filtering (topic, year, ...)
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::InputParser;

    struct Doubler;

    impl InputParser for Doubler {
        type Shared<'a> = i64;

        fn parse(input: &str) -> Result<Self::Shared<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut i64, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                2 => Ok((*shared * 4).to_string()),
                p => Err(SolveError::PartNotImplemented(p)),
            }
        }
    }

    #[test]
    fn register_and_solve() {
        let registry = RegistryBuilder::new()
            .register_solver::<Doubler>(2022, 1)
            .unwrap()
            .build();

        let mut solver = registry.create_solver(2022, 1, "21").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "42");
        assert_eq!(solver.solve(2).unwrap().answer, "84");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register_solver::<Doubler>(2022, 1)
            .unwrap()
            .register_solver::<Doubler>(2022, 1);
        assert!(matches!(result, Err(RegistrationError::Duplicate(2022, 1))));
    }

    #[test]
    fn out_of_bounds_registration_rejected() {
        let day_zero = RegistryBuilder::new().register_solver::<Doubler>(2022, 0);
        assert!(matches!(
            day_zero,
            Err(RegistrationError::InvalidYearDay(2022, 0))
        ));

        let early_year = RegistryBuilder::new().register_solver::<Doubler>(2014, 1);
        assert!(matches!(
            early_year,
            Err(RegistrationError::InvalidYearDay(2014, 1))
        ));
    }

    #[test]
    fn lookup_misses() {
        let registry = RegistryBuilder::new()
            .register_solver::<Doubler>(2022, 3)
            .unwrap()
            .build();

        assert!(registry.contains(2022, 3));
        assert!(!registry.contains(2022, 4));
        assert!(matches!(
            registry.create_solver(2022, 4, ""),
            Err(SolverError::NotFound(2022, 4))
        ));
        assert!(matches!(
            registry.create_solver(2022, 26, ""),
            Err(SolverError::InvalidYearDay(2022, 26))
        ));
    }

    #[test]
    fn info_iteration_is_ordered() {
        let registry = RegistryBuilder::new()
            .register_solver::<Doubler>(2022, 5)
            .unwrap()
            .register_solver::<Doubler>(2022, 2)
            .unwrap()
            .register_solver::<Doubler>(2021, 25)
            .unwrap()
            .build();

        let info: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(info, vec![(2021, 25), (2022, 2), (2022, 5)]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn parse_failure_propagates() {
        let registry = RegistryBuilder::new()
            .register_solver::<Doubler>(2022, 1)
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(2022, 1, "not a number"),
            Err(SolverError::Parse(ParseError::InvalidFormat(_)))
        ));
    }
}
