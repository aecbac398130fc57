//! Checks that a fixed list of files all match the first one byte for byte.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

pub const DEFAULT_PREFIX: &str = "output";
pub const DEFAULT_COUNT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AllIdentical,
    /// Names of the files that differ from the reference, in list order.
    Different { reference: String, names: Vec<String> },
    /// First file that could not be read. Nothing after it was looked at.
    Missing(String),
}

impl Outcome {
    pub fn report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Outcome::AllIdentical => writeln!(writer, "All files are identical"),
            Outcome::Different { reference, names } => {
                for name in names {
                    writeln!(writer, "{} is different from {}", name, reference)?;
                }
                Ok(())
            }
            Outcome::Missing(name) => writeln!(writer, "Error: {} not found", name),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    path: PathBuf,
}

/// Ordered list of files to compare. The first entry is the reference.
#[derive(Debug, Clone, Default)]
pub struct ComparePlan {
    entries: Vec<Entry>,
}

impl ComparePlan {
    /// `<prefix>_1.txt` .. `<prefix>_<count>.txt` inside `dir`.
    pub fn numbered(dir: impl AsRef<Path>, prefix: &str, count: usize) -> Self {
        let dir = dir.as_ref();
        let entries = (1..=count)
            .map(|i| {
                let name = format!("{prefix}_{i}.txt");
                Entry {
                    path: dir.join(&name),
                    name,
                }
            })
            .collect();
        Self { entries }
    }

    /// `output_1.txt` .. `output_8.txt` in `dir`.
    pub fn standard(dir: impl AsRef<Path>) -> Self {
        Self::numbered(dir, DEFAULT_PREFIX, DEFAULT_COUNT)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn run(&self) -> Outcome {
        let mut snapshots = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match fs::read(&entry.path) {
                Ok(bytes) => {
                    debug!(file = %entry.name, bytes = bytes.len(), "read");
                    snapshots.push(bytes);
                }
                Err(err) => {
                    debug!(file = %entry.name, error = %err, "unreadable");
                    return Outcome::Missing(entry.name.clone());
                }
            }
        }

        let Some((first, rest)) = snapshots.split_first() else {
            return Outcome::AllIdentical;
        };

        let names: Vec<String> = rest
            .iter()
            .zip(&self.entries[1..])
            .filter(|(snapshot, _)| *snapshot != first)
            .map(|(_, entry)| entry.name.clone())
            .collect();

        if names.is_empty() {
            Outcome::AllIdentical
        } else {
            Outcome::Different {
                reference: self.entries[0].name.clone(),
                names,
            }
        }
    }
}
