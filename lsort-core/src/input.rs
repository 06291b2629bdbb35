//! Input file boundary: generation, loading, shuffling.
//!
//! The benchmark reads a fixed number of integers from a fixed file; both
//! are compile-time constants, not runtime configuration.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Input file consumed by the benchmark.
pub const DEFAULT_INPUT_PATH: &str = "inputFile.txt";

/// Number of integers the benchmark reads from the input file.
pub const DEFAULT_INPUT_SIZE: usize = 1_000_000;

/// Range the generated input values are drawn from.
pub const VALUE_RANGE: RangeInclusive<i32> = 1000..=9999;

/// Failures at the input-file boundary.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write input file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {} value {index} is not an integer: {token:?}", .path.display())]
    Parse {
        path: PathBuf,
        index: usize,
        token: String,
    },

    #[error("input file {} holds {found} values, expected {expected}", .path.display())]
    Truncated {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// Read exactly `count` whitespace-separated integers from `path`.
///
/// Values past the first `count` are ignored; fewer than `count` is an
/// error.
pub fn read_values(path: impl AsRef<Path>, count: usize) -> Result<Vec<i32>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.into(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut values = Vec::with_capacity(count);
    for line in reader.lines() {
        let line = line.map_err(|source| InputError::Read {
            path: path.into(),
            source,
        })?;
        for token in line.split_whitespace() {
            if values.len() == count {
                return Ok(values);
            }
            let value: i32 = token.parse().map_err(|_| InputError::Parse {
                path: path.into(),
                index: values.len(),
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    if values.len() < count {
        return Err(InputError::Truncated {
            path: path.into(),
            expected: count,
            found: values.len(),
        });
    }
    Ok(values)
}

/// Write `count` uniformly drawn values to `path`, one per line.
pub fn write_random_values(path: impl AsRef<Path>, count: usize) -> Result<(), InputError> {
    let path = path.as_ref();
    let write_err = |source| InputError::Write {
        path: path.into(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        writeln!(out, "{}", rng.gen_range(VALUE_RANGE)).map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Shuffle the values in place (Fisher-Yates) with a freshly seeded RNG.
///
/// The harness shuffles once before either list is built, so neither
/// driver sees an already-sorted pivot sequence.
pub fn shuffle(values: &mut [i32]) {
    values.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("lsort_input_{name}.txt"))
    }

    #[test]
    fn test_write_read_round_trip() {
        let path = temp_path("round_trip");
        write_random_values(&path, 100).unwrap();

        let values = read_values(&path, 100).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| VALUE_RANGE.contains(v)));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_ignores_extra_values() {
        let path = temp_path("extra");
        fs::write(&path, "1 2 3\n4\n5\n").unwrap();

        assert_eq!(read_values(&path, 3).unwrap(), vec![1, 2, 3]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_values(temp_path("does_not_exist"), 5).unwrap_err();
        assert!(matches!(err, InputError::Open { .. }));
    }

    #[test]
    fn test_read_truncated_file() {
        let path = temp_path("truncated");
        fs::write(&path, "1\n2\n3\n").unwrap();

        let err = read_values(&path, 5).unwrap_err();
        match err {
            InputError::Truncated { expected, found, .. } => {
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_rejects_bad_token() {
        let path = temp_path("bad_token");
        fs::write(&path, "12 oops 34\n").unwrap();

        let err = read_values(&path, 3).unwrap_err();
        match err {
            InputError::Parse { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "oops");
            }
            other => panic!("expected Parse, got {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_zero_count() {
        let path = temp_path("zero");
        fs::write(&path, "").unwrap();

        assert_eq!(read_values(&path, 0).unwrap(), Vec::<i32>::new());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_shuffle_keeps_multiset() {
        let original: Vec<i32> = (0..64).collect();
        let mut shuffled = original.clone();
        shuffle(&mut shuffled);

        let mut restored = shuffled.clone();
        restored.sort_unstable();
        assert_eq!(restored, original);
    }
}
