use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;
use strum::{EnumIter, IntoStaticStr};

const SOCKET_PATH: &str = "/tmp/demilune.sock";

#[derive(Parser, Debug)]
#[command(name = "demilunectl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
enum Commands {
    /// Show the menu window.
    Show,
    /// Hide the menu window.
    Hide,
    /// Close an open menu, leaving the toggle visible.
    Dismiss,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    send_command(cli.command.into())
}

fn send_command(cmd: &str) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to demilune at {}: {}. Is demilune running?",
            SOCKET_PATH,
            e
        )
    })?;

    log::debug!("Sending '{}'", cmd);
    writeln!(stream, "{}", cmd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_names() {
        let names: Vec<&'static str> = Commands::iter().map(<&'static str>::from).collect();
        assert_eq!(names, vec!["show", "hide", "dismiss"]);
    }

    #[test]
    fn test_cli_parsing() {
        Cli::command().debug_assert();
        let cli = Cli::try_parse_from(["demilunectl", "dismiss"]).unwrap();
        assert_eq!(cli.command, Commands::Dismiss);
        assert!(Cli::try_parse_from(["demilunectl"]).is_err());
    }
}
