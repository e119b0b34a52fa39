//! A command line interface to swarm intelligence simulations.

mod commands;
mod interruption;

use crate::commands::create_write_buffer;
use crate::commands::simulate::{get_simulate_command, run_simulate};
use crate::interruption::create_interruption_quota;
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Swarm Simulation")
        .version("0.1")
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to swarm intelligence simulations")
        .subcommand_required(true)
        .subcommand(get_simulate_command())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("simulate", simulate_matches)) => {
            run_simulate(simulate_matches, create_interruption_quota(), create_write_buffer)
        }
        _ => unreachable!("subcommand is required"),
    };

    if let Err(err) = result {
        eprintln!("cannot run simulation: '{err}'");
        process::exit(1);
    }
}
