// src/main.rs

use graphsum::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("graphsum error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    if let Some(report) = run(args)? {
        println!("{}", report.sum);
    }
    Ok(())
}
