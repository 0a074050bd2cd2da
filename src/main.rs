use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use signsh::app::{run_clip_command, run_frame_command, run_live_command};
use signsh::cli::{Cli, Commands};
use signsh::config::Config;
use signsh::explain::HANDSHAPES;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        None | Some(Commands::Live) => {
            run_live_command(&config, cli.quiet, cli.verbose)?;
        }
        Some(Commands::Clip) => {
            run_clip_command(&config, cli.quiet)?;
        }
        Some(Commands::Frame) => {
            run_frame_command(&config, cli.quiet)?;
        }
        Some(Commands::Letters) => {
            list_letters(&config);
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "signsh", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Load configuration and layer CLI overrides on top.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&Config::default_path())?,
    };
    config = config.with_env_overrides();

    if let Some(floor) = cli.min_confidence {
        config.detect.min_confidence = floor;
    }

    Ok(config)
}

/// Print the fingerspelling alphabet with handshape descriptions.
fn list_letters(config: &Config) {
    println!("Letters (model: {}):", config.detect.model.green());
    for info in HANDSHAPES {
        println!("  {}  {}", info.letter.to_string().green(), info.description);
    }
}
