use std::env;
use std::process::ExitCode;

use arena_app::match_bootstrap::bootstrap_match;
use arena_app::seed::resolve_seed_from_args;
use arena_app::{format_fingerprint, format_seed};
use arena_core::{GenerationConfig, SpawnCriteria, UniformGrid};
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let seed = match resolve_seed_from_args(&args) {
        Ok(seed) => seed,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let config = GenerationConfig { seed, ..GenerationConfig::default() };
    let setup = match bootstrap_match(config, &SpawnCriteria::default(), &UniformGrid::default()) {
        Ok(setup) => setup,
        Err(err) => {
            error!("invalid generation config: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", setup.render_ascii());
    println!(
        "seed {} fingerprint {}",
        format_seed(setup.layout.seed()),
        format_fingerprint(setup.layout.fingerprint())
    );
    ExitCode::SUCCESS
}
