//! retok CLI binary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use retok::cli::args::RetokArgs;
use retok::cli::commands::execute_command;

fn main() -> anyhow::Result<()> {
    let args = RetokArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let lang = args.lang.clone();
    execute_command(args).with_context(|| format!("retokenizing '{lang}' text failed"))?;
    Ok(())
}
