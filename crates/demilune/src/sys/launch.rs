use derive_more::{AsRef, Deref, Display, From, Into};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Command line run when a menu item is released.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ExecCommand(String);

crate::impl_string_newtype!(ExecCommand);

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Empty command")]
    Empty,
    #[error("Malformed command line: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExecCommand {
    /// Splits the command line the way a POSIX shell would, without running a shell.
    /// A leading `~` in an argument is replaced by the home directory.
    pub fn argv(&self) -> Result<Vec<String>, LaunchError> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        self.argv_with_home(home.as_deref())
    }

    fn argv_with_home(&self, home: Option<&Path>) -> Result<Vec<String>, LaunchError> {
        let args = shell_words::split(&self.0)?;
        if args.is_empty() {
            return Err(LaunchError::Empty);
        }
        Ok(args
            .into_iter()
            .map(|arg| match home {
                Some(home) => expand_home(arg, home),
                None => arg,
            })
            .collect())
    }
}

fn expand_home(arg: String, home: &Path) -> String {
    if arg == "~" {
        return home.display().to_string();
    }
    match arg.strip_prefix("~/") {
        Some(rest) => home.join(rest).display().to_string(),
        None => arg,
    }
}

pub fn launch(exec: &ExecCommand) -> Result<(), LaunchError> {
    let args = exec.argv()?;
    Command::new(&args[0])
        .args(&args[1..])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv_splitting() {
        let exec = ExecCommand::new("xdg-open 'My Documents/a b.txt'");
        assert_eq!(
            exec.argv().unwrap(),
            vec!["xdg-open".to_string(), "My Documents/a b.txt".to_string()]
        );
    }

    #[test]
    fn test_home_is_expanded_without_a_shell() {
        let home = Path::new("/home/user");
        let exec = ExecCommand::new("xdg-open ~/ ~ ~/Music '~other' a~b");
        assert_eq!(
            exec.argv_with_home(Some(home)).unwrap(),
            vec!["xdg-open", "/home/user/", "/home/user", "/home/user/Music", "~other", "a~b"]
        );

        let exec = ExecCommand::new("xdg-open ~");
        assert_eq!(exec.argv_with_home(None).unwrap(), vec!["xdg-open", "~"]);
    }

    #[test]
    fn test_bad_commands() {
        assert!(matches!(
            ExecCommand::new("   ").argv(),
            Err(LaunchError::Empty)
        ));
        assert!(matches!(
            ExecCommand::new("echo 'unterminated").argv(),
            Err(LaunchError::Parse(_))
        ));
    }
}
