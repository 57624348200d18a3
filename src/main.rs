use clap::Parser;
use customer_geo::output::render;
use customer_geo::utils::error::ErrorSeverity;
use customer_geo::utils::{logger, validation::Validate};
use customer_geo::{AppError, CliArgs, CustomerPipeline, CustomerRepository};

fn exit_with(e: &AppError) -> ! {
    eprintln!("❌ {}", e);
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // exit code follows severity
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    logger::init_cli_logger(args.verbose, config.log_level(), config.logging.json);

    tracing::info!("Starting customer-geo");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let pipeline = CustomerPipeline::from_config(&config);

    let customers: Vec<_> = match args.id {
        Some(id) => pipeline.fetch(id).await.into_iter().collect(),
        None => {
            pipeline
                .fetch_all(args.property.as_deref(), args.direction.as_deref())
                .await
        }
    };

    tracing::info!("✅ Returning {} customers", customers.len());

    match render(&customers, args.format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Failed to render output: {}", e);
            exit_with(&e);
        }
    }
}
