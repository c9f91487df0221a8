use serbench::app::{write_fixture_files, write_report};
use serbench::prelude::*;
use tokio::io::AsyncWrite;
use tracing::info;

#[tokio::main]
async fn main() {
    // stdout carries the report
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    CliApp::new("serbench").run(run_catalog).await
}

/// Generate the selected shapes and report their JSON sizes
async fn run_catalog<W>(args: Vec<String>, mut writer: W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin + Send,
{
    let args = HarnessArgs::extract(args)?;
    if !args.forwarded.is_empty() {
        info!(tokens = ?args.forwarded, "Forwarded arguments");
    }

    let mut config = FactoryConfig::new();
    if let Some(reference_time) = args.reference_time {
        config = config.with_reference_time(reference_time);
    }
    let factory = FixtureFactory::with_config(config);

    let shapes = args.selected_shapes()?;
    info!(
        shapes = shapes.len(),
        partition = ?args.partition,
        "Generating fixtures"
    );

    let fixtures = shapes
        .into_iter()
        .map(|id| factory.generate(id))
        .collect::<Result<Vec<_>, _>>()?;

    write_report(&fixtures, &mut writer).await?;

    if let Some(dir) = &args.output_dir {
        let written = write_fixture_files(&fixtures, dir).await?;
        info!(files = written.len(), dir = %dir.display(), "Wrote fixtures");
    }

    Ok(())
}
