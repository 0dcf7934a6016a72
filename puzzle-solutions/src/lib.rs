//! Advent of Code 2022 puzzle solutions.
//!
//! Each day lives in its own module under [`year_2022`] and registers
//! itself with the solver framework through the `Solution` derive.

pub mod year_2022;
