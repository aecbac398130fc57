//! Random integer arrays and their text file format.
//!
//! ```text
//! <N>
//! <v1> <v2> ... <vN>
//! ```
//!
//! The second line has no trailing separator and no trailing newline.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Closed interval `[min, max]` to draw values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: i64,
    max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Seeded ChaCha RNG. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Picks a fresh seed. Use [`SeededRng::seed`] to replay the run later.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RandomArray {
    values: Vec<i64>,
}

impl RandomArray {
    /// Draws `size` values, each uniform over `bounds`.
    pub fn generate<R: Rng>(size: usize, bounds: Bounds, rng: &mut R) -> Self {
        let values = (0..size)
            .map(|_| rng.gen_range(bounds.min()..=bounds.max()))
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.values.len())?;

        let mut iter = self.values.iter();
        if let Some(first) = iter.next() {
            write!(writer, "{}", first)?;
            for value in iter {
                write!(writer, " {}", value)?;
            }
        }
        Ok(())
    }

    /// Creates or truncates `path` and writes the array to it.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);

        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::io(path, e))?;

        info!(path = %path.display(), len = self.len(), "array written");
        Ok(())
    }

    /// Reads the generator format back. Tokens may be separated by any
    /// whitespace; the value count must match the header.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let header = tokens
            .next()
            .ok_or_else(|| Error::parse(1, "missing element count"))?;
        let count: usize = header
            .parse()
            .map_err(|e| Error::parse(1, format!("bad element count {header:?}: {e}")))?;

        let mut values = Vec::new();
        for token in tokens {
            let value: i64 = token
                .parse()
                .map_err(|e| Error::parse(2, format!("bad value {token:?}: {e}")))?;
            values.push(value);
        }

        if values.len() != count {
            return Err(Error::parse(
                2,
                format!("expected {count} values, found {}", values.len()),
            ));
        }
        Ok(Self { values })
    }

    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "array read");
        Self::parse(&text)
    }
}

impl From<Vec<i64>> for RandomArray {
    fn from(values: Vec<i64>) -> Self {
        Self { values }
    }
}
