//! Keyboard handling for the host loop.
//!
//! `q` toggles the color, `w`/`s` move the area threshold, Escape ends the
//! run. Anything else leaves the session alone.

use tracking::TrackingCommand;

use crate::CliError;

pub const ESCAPE: char = '\u{1b}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Command(TrackingCommand),
    Quit,
}

pub fn decode_key(key: char) -> HostAction {
    match key.to_ascii_lowercase() {
        'q' => HostAction::Command(TrackingCommand::ToggleColor),
        'w' => HostAction::Command(TrackingCommand::IncreaseThreshold),
        's' => HostAction::Command(TrackingCommand::DecreaseThreshold),
        ESCAPE => HostAction::Quit,
        _ => HostAction::Command(TrackingCommand::NoOp),
    }
}

/// Parse a comma-separated key script, one entry per frame.
///
/// Entries are single keys (`q`, `w`, `s`), `-` for no key, or `esc`.
pub fn parse_key_script(script: &str) -> Result<Vec<HostAction>, CliError> {
    script
        .split(',')
        .map(str::trim)
        .map(|token| {
            if token.eq_ignore_ascii_case("esc") {
                return Ok(HostAction::Quit);
            }
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Ok(HostAction::Command(TrackingCommand::NoOp)),
                (Some(key), None) => Ok(decode_key(key)),
                _ => Err(CliError::UnknownKey(token.to_string())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_tracker_keys() {
        assert_eq!(decode_key('q'), HostAction::Command(TrackingCommand::ToggleColor));
        assert_eq!(decode_key('W'), HostAction::Command(TrackingCommand::IncreaseThreshold));
        assert_eq!(decode_key('s'), HostAction::Command(TrackingCommand::DecreaseThreshold));
        assert_eq!(decode_key(ESCAPE), HostAction::Quit);
        assert_eq!(decode_key('z'), HostAction::Command(TrackingCommand::NoOp));
    }

    #[test]
    fn parses_script() {
        let actions = parse_key_script("q, -, w,,s, esc").unwrap();
        assert_eq!(
            actions,
            vec![
                HostAction::Command(TrackingCommand::ToggleColor),
                HostAction::Command(TrackingCommand::NoOp),
                HostAction::Command(TrackingCommand::IncreaseThreshold),
                HostAction::Command(TrackingCommand::NoOp),
                HostAction::Command(TrackingCommand::DecreaseThreshold),
                HostAction::Quit,
            ]
        );
    }

    #[test]
    fn rejects_multi_char_tokens() {
        assert!(matches!(parse_key_script("q,ww"), Err(CliError::UnknownKey(k)) if k == "ww"));
    }
}
