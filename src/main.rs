#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod scenario;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
    scenario::Scenario,
    tables::{build_schedule_table, build_summary_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Solve(args) => {
            let scenario = args.load_scenario()?;
            let plan = scenario.solve().context("failed to optimize the dispatch")?;
            println!("{}", build_schedule_table(&plan, &scenario.demand, &scenario.costs));
            println!("{}", build_summary_table(&plan));
        }
        Command::Scenario => {
            print!("{}", Scenario::reference().to_toml()?);
        }
    }

    info!("done!");
    Ok(())
}
