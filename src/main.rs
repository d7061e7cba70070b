use clap::Parser;
use gitgraphed::config::current_year;
use gitgraphed::utils::logger;
use gitgraphed::{
    CliConfig, ContributionPipeline, FileSink, GraphEngine, GraphError, HttpSource,
    RegexExtractor, Result, RunConfig, StdoutSink,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve(current_year()) {
        Ok(config) => config,
        Err(GraphError::Usage) => {
            println!("{}", GraphError::Usage);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = run(&cli, config).await {
        tracing::error!("Run failed: {} (Category: {:?})", e, e.category());
        match e {
            GraphError::Encoding(_) | GraphError::Io(_) => eprintln!("{}", e),
            _ => eprintln!("Error fetching contribution data: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig, config: RunConfig) -> Result<()> {
    tracing::info!(
        "Fetching contribution graph for '{}' ({})",
        config.username,
        config.year
    );

    let source = HttpSource::new(config.clone())?;
    let pipeline = ContributionPipeline::new(source, RegexExtractor::new()?, config);
    let engine = GraphEngine::new(pipeline);

    match &cli.output {
        Some(path) => engine.run_into(&FileSink::new(path)).await?,
        None => engine.run_into(&StdoutSink).await?,
    };

    Ok(())
}
