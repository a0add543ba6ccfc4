use tracing::debug;
use zbus::interface;

/// Minimal `org.mpris.MediaPlayer2` root object.
///
/// Serves `Identity` plus the rest of the root interface's shape so a
/// well-behaved prober does not error on introspection. Only `Identity` is
/// configurable; capability properties are hardcoded and no media state is
/// modeled.
#[derive(Debug, Clone)]
pub struct RootInterface {
    pub(crate) identity: String,
}

impl RootInterface {
    /// Create a root object reporting the given identity string.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootInterface {
    // There is no window to raise and no playback to tear down; both
    // methods are accepted as no-ops.
    async fn raise(&self) {}

    async fn quit(&self) {}

    #[zbus(property)]
    async fn identity(&self) -> &str {
        debug!("Identity property read");
        &self.identity
    }

    #[zbus(property)]
    async fn can_quit(&self) -> bool {
        false
    }

    #[zbus(property)]
    async fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    async fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    async fn desktop_entry(&self) -> &str {
        "fakeplayer"
    }

    #[zbus(property)]
    async fn supported_uri_schemes(&self) -> &[&str] {
        &[]
    }

    #[zbus(property)]
    async fn supported_mime_types(&self) -> &[&str] {
        &[]
    }
}
