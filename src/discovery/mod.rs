
use tracing::{debug, instrument, warn};

use crate::{
    bus::{BusClient, BusError},
    mpris::{
        MPRIS_BUS_PREFIX, MPRIS_OBJECT_PATH, MPRIS_PLAYER_INTERFACE, MPRIS_ROOT_INTERFACE,
        UNIQUE_NAME_SIGIL,
    },
};

/// Capability flags read from a player, best-effort.
///
/// `None` means the player did not answer the capability read, which never
/// disqualifies it; only `Identity` is required for compliance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerCapabilities {
    /// Whether the player accepts control commands at all
    pub can_control: Option<bool>,
    /// Whether the player can start playback
    pub can_play: Option<bool>,
}

/// A successfully probed media player.
///
/// Built per discovery run and discarded after reporting; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Well-known bus name the player is registered under
    pub bus_name: String,
    /// Human-readable identity reported by the player
    pub identity: String,
    /// Capability flags, where the player reported them
    pub capabilities: PlayerCapabilities,
}

/// Whether a bus name is a candidate player: a well-known name (no unique
/// connection-name sigil) under the MPRIS namespace.
pub fn is_candidate(name: &str) -> bool {
    !name.starts_with(UNIQUE_NAME_SIGIL) && name.starts_with(MPRIS_BUS_PREFIX)
}

/// List the compliant media players currently reachable on the bus.
///
/// Enumerates all bus names, filters candidates, and probes each one for
/// its `Identity`. A candidate that fails its probe is logged and excluded
/// rather than aborting the run; one bad endpoint must not prevent
/// reporting the others. Records preserve the bus's name order. Read-only.
///
/// # Errors
/// Fails only if the name listing itself fails (bus unreachable), reported
/// as `BusError::ConnectionFailed`.
#[instrument(skip(bus))]
pub async fn discover<B: BusClient + ?Sized>(bus: &B) -> Result<Vec<PlayerRecord>, BusError> {
    let names = bus.list_names().await.map_err(|e| match e {
        BusError::Dbus(inner) => BusError::ConnectionFailed(inner.to_string()),
        other => other,
    })?;

    let mut records = Vec::new();
    for name in names.into_iter().filter(|name| is_candidate(name)) {
        match probe(bus, &name).await {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping non-compliant player {name}: {e}"),
        }
    }

    debug!("Discovered {} compliant player(s)", records.len());
    Ok(records)
}

/// Probe one candidate. `Identity` is load-bearing; capability flags are
/// read best-effort afterwards.
async fn probe<B: BusClient + ?Sized>(bus: &B, name: &str) -> Result<PlayerRecord, BusError> {
    let identity = bus
        .get_property(name, MPRIS_OBJECT_PATH, MPRIS_ROOT_INTERFACE, "Identity")
        .await?;

    let identity = String::try_from(identity).map_err(|e| BusError::InvalidReply {
        name: name.to_owned(),
        property: "Identity".to_owned(),
        details: e.to_string(),
    })?;

    let capabilities = PlayerCapabilities {
        can_control: read_capability(bus, name, "CanControl").await,
        can_play: read_capability(bus, name, "CanPlay").await,
    };

    Ok(PlayerRecord {
        bus_name: name.to_owned(),
        identity,
        capabilities,
    })
}

async fn read_capability<B: BusClient + ?Sized>(
    bus: &B,
    name: &str,
    property: &str,
) -> Option<bool> {
    match bus
        .get_property(name, MPRIS_OBJECT_PATH, MPRIS_PLAYER_INTERFACE, property)
        .await
    {
        Ok(value) => bool::try_from(value).ok(),
        Err(_) => None,
    }
}
