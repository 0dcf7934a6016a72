//! Local lookup of puzzle input files

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`. One puzzle may
/// carry an explicit path override from `--input`; inputs are never fetched
/// from anywhere else.
pub struct InputStore {
    base_dir: PathBuf,
    explicit: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    /// Create a store rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            explicit: None,
        }
    }

    /// Use `path` for the given year/day instead of the store layout
    pub fn with_explicit(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.explicit = Some((year, day, path));
        self
    }

    /// Path where the input for year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        if let Some((y, d, path)) = &self.explicit
            && *y == year
            && *d == day
        {
            return path.clone();
        }
        self.base_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check whether the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for year/day
    pub fn read(&self, year: u16, day: u8) -> io::Result<String> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("cannot read input file {}: {}", path.display(), e),
            )
        })
    }
}
