#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Show,
    Hide,
    Dismiss,
    ConfigReload,
}

impl AppEvent {
    /// Parses one line of the control socket protocol.
    pub fn from_command(line: &str) -> Option<Self> {
        match line.trim() {
            "show" => Some(Self::Show),
            "hide" => Some(Self::Hide),
            "dismiss" => Some(Self::Dismiss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command() {
        assert_eq!(AppEvent::from_command("show\n"), Some(AppEvent::Show));
        assert_eq!(AppEvent::from_command(" dismiss "), Some(AppEvent::Dismiss));
        assert_eq!(AppEvent::from_command("reload"), None);
    }
}
