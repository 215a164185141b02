use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io;

use prompt_chain::{NodeEvaluatorRegistry, NodeRequest};

mod cli;
mod config;

use cli::CliArgs;

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();

    let registry = NodeEvaluatorRegistry::with_builtin_nodes();
    if args.list {
        for type_id in registry.type_ids() {
            let name = registry
                .get(type_id)
                .map(|e| e.display_name())
                .unwrap_or_default();
            println!("{}\t{}", type_id, name);
        }
        return Ok(());
    }

    let config = config::load_config().apply_args(&args);
    if args.save_config {
        config::save_config(&config);
    }
    debug!("Effective config: {:?}", config);

    let json = match &args.request_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read request from stdin")?,
    };
    let request = NodeRequest::from_json(&json).context("invalid node request")?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let response = registry
        .evaluate(&config.node_type, request, &mut rng)
        .with_context(|| format!("failed to evaluate '{}' node", config.node_type))?;

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", rendered);
    Ok(())
}
