use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

/// Writes `rows` random equations to `path` and returns the expected answers.
pub fn generate_equations(path: &Path, rows: usize, seed: u64) -> Result<Vec<String>, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut file = BufWriter::new(File::create(path)?);
    let mut expected = Vec::with_capacity(rows);

    for _ in 0..rows {
        let left: i64 = rng.gen_range(-1_000_000_000_000..=1_000_000_000_000);
        let right: i64 = rng.gen_range(-1_000_000..=1_000_000);
        if rng.gen_bool(0.5) {
            writeln!(file, "{} + {}", left, right)?;
            expected.push((left as i128 + right as i128).to_string());
        } else {
            writeln!(file, "{} - {}", left, right)?;
            expected.push((left as i128 - right as i128).to_string());
        }
    }

    file.flush()?;
    Ok(expected)
}
