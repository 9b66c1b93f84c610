use super::*;

/// Represents menu actions, like starting a round or changing a setting.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    /// Starts a round with a random word from the wordlist.
    Play(Wordlist),
    /// Starts a round with a word typed in by another player.
    PlayCustom,
    /// Shows two sessions being played side by side.
    Demo,
    /// Toggles a boolean config value.
    CfgToggle(String),
    /// Increments config value.
    CfgIncrement(String),
}
