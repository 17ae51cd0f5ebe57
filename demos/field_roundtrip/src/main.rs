use anyhow::Result;
use clap::{Parser, ValueEnum};
use floatpack_codec::{LinearQuantizer, LogQuantizer};
use floatpack_core::{Quantizer, RoundMode, U16};
use floatpack_slab::{dequantize_slabs, quantize_slabs};
use ndarray::{Array3, Axis};
use rand::Rng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    Linear,
    Log,
}

#[derive(Parser, Debug)]
#[command(about = "Slab-quantize a synthetic 3-D scalar field to u16 codes")]
struct Args {
    /// Grid size along x
    #[arg(long, default_value_t = 64)]
    nx: usize,
    /// Grid size along y
    #[arg(long, default_value_t = 64)]
    ny: usize,
    /// Grid size along z
    #[arg(long, default_value_t = 32)]
    nz: usize,
    /// Axis to slice along (0, 1 or 2)
    #[arg(long, default_value_t = 2)]
    axis: usize,
    /// Codec family
    #[arg(long, value_enum, default_value = "linear")]
    family: Family,
    /// Relative noise amplitude added to the smooth field
    #[arg(long, default_value_t = 0.01)]
    noise: f64,
}

/// Smooth positive field plus noise: usable by both codec families.
fn synthetic_field(args: &Args) -> Array3<f64> {
    let mut rng = rand::thread_rng();
    Array3::from_shape_fn((args.nx, args.ny, args.nz), |(i, j, k)| {
        let x = i as f64 * 0.07;
        let y = j as f64 * 0.05;
        let z = k as f64 * 0.11;
        let base = (x.sin() * y.cos() + 2.0) * (1.0 + 0.5 * z.sin());
        base * (1.0 + args.noise * rng.gen_range(-1.0..1.0))
    })
}

fn report<Q: Quantizer<U16>>(name: &str, quantizer: &Q, field: &Array3<f64>, axis: usize) -> Result<()> {
    let start = Instant::now();
    let slabs = quantize_slabs(quantizer, field, Axis(axis))?;
    let encode_time = start.elapsed();

    let start = Instant::now();
    let decoded: ndarray::Array3<f64> = dequantize_slabs(quantizer, &slabs)?;
    let decode_time = start.elapsed();

    // the quantized axis lands at the back; permute it home for comparison
    let mut order: Vec<usize> = (0..3).filter(|&a| a != axis).collect();
    order.push(axis);
    let mut perm = [0usize; 3];
    for (pos, &src) in order.iter().enumerate() {
        perm[src] = pos;
    }
    let restored = decoded.permuted_axes(perm);

    let mut max_err = 0.0f64;
    let mut sum_err = 0.0f64;
    for (&x, &y) in field.iter().zip(restored.iter()) {
        let err = (x - y).abs();
        max_err = max_err.max(err);
        sum_err += err;
    }

    let n = field.len();
    let raw_bytes = n * 8;
    // u16 payload plus two f64 scalars per slab
    let packed_bytes = n * 2 + slabs.len() * 16;

    println!("--- {name} (axis {axis}, {} slabs)", slabs.len());
    println!("    elements:       {n}");
    println!(
        "    payload:        {packed_bytes} B ({:.2}x vs f64)",
        raw_bytes as f64 / packed_bytes as f64
    );
    println!("    max abs error:  {max_err:.3e}");
    println!("    mean abs error: {:.3e}", sum_err / n as f64);
    println!("    encode {encode_time:?}, decode {decode_time:?}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let field = synthetic_field(&args);

    match args.family {
        Family::Linear => {
            report("linear/u16", &LinearQuantizer::new(), &field, args.axis)?;
        }
        Family::Log => {
            report(
                "log/u16 (LinSpace)",
                &LogQuantizer::with_mode(RoundMode::LinSpace),
                &field,
                args.axis,
            )?;
            report(
                "log/u16 (LogSpace)",
                &LogQuantizer::with_mode(RoundMode::LogSpace),
                &field,
                args.axis,
            )?;
        }
    }
    Ok(())
}
