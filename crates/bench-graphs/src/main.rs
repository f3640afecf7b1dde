// File: crates/bench-graphs/src/main.rs
// Summary: Charts every file in benchmark_results/ into benchmark_result_graphs/.

use anyhow::Result;
use bench_graphs::{run, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&Config::default())?;
    println!("done");
    Ok(())
}
