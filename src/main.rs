use generate_endpoints::core::OutputSink;
use generate_endpoints::utils::{logger, validation::Validate};
use generate_endpoints::{
    CliConfig, DirectorySource, FileOutput, GenerateEngine, GenerateError, GoCodeGenerator,
    HttpFetcher, RemoteZipSource, StdoutOutput,
};

async fn generate(config: &CliConfig) -> Result<Vec<u8>, GenerateError> {
    let options = config.specification_options();
    let generator = GoCodeGenerator::default();

    if config.is_remote() {
        let source = RemoteZipSource::new(&config.path, HttpFetcher::default(), options);
        GenerateEngine::new(source, generator, config.clone())
            .run()
            .await
    } else {
        let source = DirectorySource::new(&config.path, options);
        GenerateEngine::new(source, generator, config.clone())
            .run()
            .await
    }
}

async fn run(config: &CliConfig) -> Result<(), GenerateError> {
    config.validate()?;
    let output = generate(config).await?;

    match config.output_filename() {
        Some(file_name) => FileOutput::new(file_name).write_output(&output).await,
        None => StdoutOutput.write_output(&output).await,
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse_args();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!(
        path = %config.path,
        package_name = %config.package_name,
        variable = %config.variable_name,
        add_path_comment = config.add_path_comment,
        private = config.private,
        "Starting generate-endpoints"
    );

    if let Err(e) = run(&config).await {
        tracing::error!(
            operation = e.operation(),
            error = %e,
            path = %config.path,
            package_name = %config.package_name,
            variable = %config.variable_name,
            suggestion = e.recovery_suggestion(),
            "{} Exiting.",
            e.user_friendly_message()
        );
        std::process::exit(1);
    }
}
