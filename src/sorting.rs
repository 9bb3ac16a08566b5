//! Sorting algorithms and data-file helpers for the native target
//!
//! The benchmark contrasts a textbook quadratic sort against the platform
//! sort. Both operate in place on the newline-delimited integer list the
//! targets exchange through `arq.txt` / `arq-saida.txt`.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

/// Input file every target reads.
pub const INPUT_FILE: &str = "arq.txt";

/// Output file every target writes the sorted list to.
pub const OUTPUT_FILE: &str = "arq-saida.txt";

/// Algorithm keyword accepted on the target command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Adjacent-swap quadratic sort with early exit on a clean pass
    Bubble,
    /// The platform-provided sort (pattern-defeating quicksort)
    Efficient,
}

impl Algorithm {
    pub fn apply(self, numbers: &mut [i64]) {
        match self {
            Algorithm::Bubble => bubble_sort(numbers),
            Algorithm::Efficient => efficient_sort(numbers),
        }
    }
}

/// Bubble sort; bails out as soon as a full pass makes no swap.
pub fn bubble_sort(numbers: &mut [i64]) {
    let n = numbers.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n.saturating_sub(i + 1) {
            if numbers[j] > numbers[j + 1] {
                numbers.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// The standard library's unstable sort.
pub fn efficient_sort(numbers: &mut [i64]) {
    numbers.sort_unstable();
}

/// Read a newline-delimited integer list; blank lines are skipped.
pub fn read_numbers(path: &Path) -> io::Result<Vec<i64>> {
    let text = fs::read_to_string(path)?;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<i64>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("bad integer '{}': {}", line, e),
                )
            })
        })
        .collect()
}

/// Write a newline-delimited integer list.
pub fn write_numbers(path: &Path, numbers: &[i64]) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for n in numbers {
        writeln!(writer, "{}", n)?;
    }
    writer.flush()
}
