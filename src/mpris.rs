//! Constants for the MPRIS 2.x D-Bus interface.

/// Namespace prefix every MPRIS well-known bus name lives under.
pub const MPRIS_BUS_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Object path every MPRIS player exports its interfaces at.
pub const MPRIS_OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// The MPRIS root interface, carrying `Identity` and application-level
/// capabilities.
pub const MPRIS_ROOT_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// The MPRIS player interface, carrying playback state and capabilities.
pub const MPRIS_PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Leading character of unique (connection-scoped) bus names.
pub const UNIQUE_NAME_SIGIL: char = ':';
