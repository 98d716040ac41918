//! Ohmnet - Resistor Network Calculator
//!
//! Builds the sample network (a series chain and a parallel bank over the
//! same two resistor values, composed in series) and prints equivalent
//! resistances plus the current and power drawn at the supply voltage.
//!
//! # Usage
//!
//! ```bash
//! ohmnet --r1 7 --r2 3 --voltage 9
//! ```

use clap::Parser;
use ohmnet::{
    circuit::{Circuit, CompositeCircuit, ParallelCircuit, SeriesCircuit},
    components::Resistor,
    error::Result,
};

/// Resistor network calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First resistor value in ohms
    #[arg(long, default_value_t = 7.0)]
    r1: f64,

    /// Second resistor value in ohms
    #[arg(long, default_value_t = 3.0)]
    r2: f64,

    /// Supply voltage in volts
    #[arg(short, long, default_value_t = 9.0)]
    voltage: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let r1 = Resistor::new(args.r1)?;
    let r2 = Resistor::new(args.r2)?;

    let series = Circuit::from(SeriesCircuit::new(vec![r1, r2]));
    let parallel = Circuit::from(ParallelCircuit::new(vec![r1, r2]));

    let mut network = CompositeCircuit::new();
    network.add_child(series.clone().into_handle());
    network.add_child(parallel.clone().into_handle());
    let network = Circuit::from(network);

    println!("series:    {} ohm", series.format_resistance()?);
    println!("parallel:  {} ohm", parallel.format_resistance()?);
    println!("composite: {} ohm", network.format_resistance()?);

    // Treat the whole network as one equivalent resistor at the supply.
    let equivalent = Resistor::new(network.equivalent_resistance()?)?;
    let current = equivalent.current(args.voltage);
    println!(
        "at {} V: {:.4} A, {:.4} W",
        args.voltage,
        current,
        equivalent.power(current)
    );

    Ok(())
}
