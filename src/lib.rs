//! Two small tools: a random integer array generator and an output file
//! comparator. The binaries under `src/bin` are thin wrappers around this crate.

pub mod array;
pub mod compare;
pub mod error;
pub mod logging;

pub use array::{Bounds, RandomArray, SeededRng};
pub use compare::{ComparePlan, Outcome};
pub use error::{Error, Result};
