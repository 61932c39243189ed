use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

const SAMPLES: usize = 20_000;
const BASELINE: f64 = 100.0;
const NOISE: f64 = 40.0;

/// Write a synthetic raw series in the line-skip layout.
#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path
    #[arg(value_name = "OUTPUT", default_value = "sample_series.txt")]
    output: PathBuf,
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Raw signal: noisy baseline with blink-like bursts every `period` samples.
fn generate_series(n: usize, period: usize, rng: &mut SimpleRng) -> Vec<i64> {
    let bursts: Vec<(f64, f64, f64)> = (period / 2..n)
        .step_by(period)
        .map(|centre| {
            let amplitude = 600.0 + 400.0 * rng.next_f64();
            (centre as f64, 8.0 + 6.0 * rng.next_f64(), amplitude)
        })
        .collect();

    (0..n)
        .map(|i| {
            let t = i as f64;
            let signal: f64 = bursts
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(t, mu, sigma, amp))
                .sum();
            (BASELINE + signal + rng.gauss(0.0, NOISE)).round() as i64
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output_path = args.output.display().to_string();

    let mut rng = SimpleRng::new(42);
    // Header line occupies index 0 in line-skip mode.
    let series = generate_series(SAMPLES - 1, 1_500, &mut rng);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {output_path}"))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "Raw Value")?;
    for value in &series {
        writeln!(out, "{value}")?;
    }
    out.flush().with_context(|| format!("writing {output_path}"))?;

    let above = series.iter().filter(|&&v| v > 500).count();
    println!(
        "Wrote {} samples to {output_path} ({above} above 500)",
        series.len()
    );
    Ok(())
}
