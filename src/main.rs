use std::io::{stdin, stdout};
use std::process::ExitCode;

use dotenv::dotenv;

use crate::app::{DraftEngine, HeroDataset};
use crate::opt::*;

mod app;
mod cli;
mod context;
mod error;
mod models;
mod opt;

fn main() -> ExitCode {
    dotenv().ok();

    let args = std::env::args().collect::<Vec<String>>();
    let context = context::create_context(&args);
    log_if(&format!("{:?}", context), DbgFlg::Engine);

    let dataset = match HeroDataset::load(&context.hero_data_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = DraftEngine::new(dataset);
    println!(
        "Draft engine initialized with {} heroes",
        engine.dataset().len()
    );
    if engine.dataset().is_empty() {
        println!("warning: {} contains no heroes", context.hero_data_path.display());
    }
    println!("Type 'help' for a list of commands");
    match cli::main(&mut engine, &context, stdin().lock(), &mut stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
