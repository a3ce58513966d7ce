//! Determinism checks for WAV output.
//!
//! Encoding must be byte-identical across runs: same payload, same bytes.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// Byte offset of the first difference, if any.
    pub first_diff: Option<usize>,
}

impl fmt::Display for DeterminismResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_diff {
            None => write!(
                f,
                "deterministic over {} runs ({} bytes, {})",
                self.runs, self.output_size, self.hash
            ),
            Some(offset) => write!(
                f,
                "output differs at byte {} over {} runs",
                offset, self.runs
            ),
        }
    }
}

/// Runs `generate` `runs` times and compares every output to the first.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    let first = generate();
    let hash = blake3::hash(&first).to_hex().to_string();
    let mut first_diff = None;

    for _ in 1..runs {
        let next = generate();
        if next != first {
            first_diff = Some(
                first
                    .iter()
                    .zip(&next)
                    .position(|(a, b)| a != b)
                    .unwrap_or_else(|| first.len().min(next.len())),
            );
            break;
        }
    }

    DeterminismResult {
        is_deterministic: first_diff.is_none(),
        runs,
        output_size: first.len(),
        hash,
        first_diff,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_difference() {
        let mut counter = 0u8;
        let result = verify_determinism(
            || {
                counter += 1;
                vec![0, 0, counter]
            },
            3,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.first_diff, Some(2));
    }

    #[test]
    fn test_detects_length_difference() {
        let mut len = 2;
        let result = verify_determinism(
            || {
                len += 1;
                vec![7; len]
            },
            2,
        );
        assert_eq!(result.first_diff, Some(3));
    }
}
