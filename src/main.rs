use clap::Parser;
use template_fields::cli::commands::{cmd_extract, cmd_scan};
use template_fields::cli::config::{Cli, Commands, load_config};
use template_fields::trace::logger::{init_logging, resolve_level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Log level: RUST_LOG > CLI flags > config > default
    init_logging(resolve_level(
        cli.verbose,
        cli.quiet,
        config.log_level.as_deref(),
    ));

    match cli.command {
        Commands::Scan {
            root,
            extension,
            output,
            pretty,
            max_depth,
        } => {
            cmd_scan(
                &config,
                root.as_deref(),
                extension.as_deref(),
                output.as_deref(),
                pretty,
                max_depth,
            )?;
        }
        Commands::Extract { file, pretty } => {
            let json = cmd_extract(&config, &file, pretty)?;
            println!("{}", json);
        }
    }

    Ok(())
}
