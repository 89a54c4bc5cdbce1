use std::path::PathBuf;

use clap::Parser;

use gradle_bump::config::Config;
use gradle_bump::discovery::find_build_files;
use gradle_bump::logging::{self, LogFormat};
use gradle_bump::update::Updater;
use gradle_bump::version::registries::create_fetcher;

#[derive(Parser)]
#[command(name = "gradle-bump")]
#[command(version, about = "Update dependency versions in Gradle build files")]
struct Cli {
    /// Project directory to scan (defaults to the current directory)
    path: Option<PathBuf>,

    /// Report available updates without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Configuration file (defaults to .gradle-bump.json in the project directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let config = Config::discover(&root, cli.config.as_deref())?;

    let files = find_build_files(&root, &config.files);
    if files.is_empty() {
        println!("No build files found under {}", root.display());
        return Ok(());
    }

    let mut updater = Updater::new(create_fetcher(&config.registries).await);
    let summary = updater.run(&files, cli.dry_run).await?;

    for file in &summary.updated {
        for change in &file.changes {
            println!(
                "{}:{}: {}:{} -> {}",
                file.path.display(),
                change.line + 1,
                change.module,
                change.from,
                change.to
            );
        }
    }

    let verb = if cli.dry_run { "available" } else { "applied" };
    println!(
        "{} update(s) {} across {} of {} file(s)",
        summary.change_count(),
        verb,
        summary.updated.len(),
        summary.files_scanned
    );

    if !summary.skipped.is_empty() {
        println!(
            "Skipped {} file(s) that are not valid UTF-8",
            summary.skipped.len()
        );
    }

    if !summary.write_failures.is_empty() {
        anyhow::bail!(
            "failed to write {} file(s)",
            summary.write_failures.len()
        );
    }

    Ok(())
}
