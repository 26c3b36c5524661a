use clap::Parser;

use folio_cli::cli::commands::{
    add, analyze, define, list, providers, read, remove, search, translate,
};
use folio_cli::cli::{Args, Command};
use folio_cli::enrich::EnrichError;
use folio_cli::language::print_languages;
use folio_cli::output::{self, OutputConfig};
use folio_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        let code = if err.downcast_ref::<EnrichError>().is_some() {
            exitcode::UNAVAILABLE
        } else {
            exitcode::USAGE
        };
        std::process::exit(code);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Add { file, title, lang }) => add::run_add(add::AddOptions {
            file: &file,
            title,
            lang,
        }),
        Some(Command::List) => list::run_list(),
        Some(Command::Read { document }) => read::run_read(&document).await,
        Some(Command::Remove { document }) => remove::run_remove(&document),
        Some(Command::Translate {
            file,
            to,
            from,
            no_cache,
        }) => {
            let options = translate::TranslateOptions {
                file,
                to,
                from,
                no_cache,
            };
            translate::run_translate(options).await
        }
        Some(Command::Search { query }) => search::run_search(&query.join(" ")).await,
        Some(Command::Define { word }) => define::run_define(&word).await,
        Some(Command::Analyze { file }) => analyze::run_analyze(file.as_deref()).await,
        Some(Command::Providers) => providers::run_providers(),
        Some(Command::Languages) => {
            print_languages();
            Ok(())
        }
        None => match args.file {
            Some(file) => read::run_open_file(&file).await,
            None => list::run_list(),
        },
    }
}
