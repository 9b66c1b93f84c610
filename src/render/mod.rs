/// Two-session demonstration, printed without raw mode.
pub mod demo;

/// Round renderer.
pub mod game;

/// Menu renderer.
pub mod menu;

/// Hidden secret word entry.
pub mod prompt;

/// Rendering utilities.
pub mod util;

/// Statically stored wordlist content.
pub mod wordlist;
