use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use zbus::zvariant::{OwnedValue, Value};

use super::{BusClient, BusError};
use crate::{
    endpoint::RootInterface,
    mpris::{MPRIS_PLAYER_INTERFACE, MPRIS_ROOT_INTERFACE},
};

/// Properties a fake player object answers with.
#[derive(Debug, Clone)]
struct FakePlayerObject {
    identity: String,
    can_control: Option<bool>,
    can_play: Option<bool>,
}

/// In-memory bus adapter.
///
/// Models just enough of a bus daemon's name registry and property routing
/// to exercise discovery and the simulated endpoint without a running
/// daemon: names in registration order, one MPRIS root object per name, and
/// switches to simulate an unreachable daemon or a broken peer.
#[derive(Debug, Default)]
pub struct FakeBus {
    names: RwLock<Vec<String>>,
    objects: RwLock<HashMap<String, FakePlayerObject>>,
    pending_root: RwLock<Option<FakePlayerObject>>,
    broken: RwLock<HashSet<String>>,
    malformed_identities: RwLock<HashSet<String>>,
    unreachable: RwLock<bool>,
}

impl FakeBus {
    /// Create an empty fake bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare name with no object behind it (a unique connection name
    /// or a foreign well-known name).
    pub async fn add_name(&self, name: &str) {
        self.names.write().await.push(name.to_owned());
    }

    /// Add a player that answers `Identity` but serves no capabilities.
    pub async fn add_player(&self, name: &str, identity: &str) {
        self.add_player_with_capabilities(name, identity, None, None)
            .await;
    }

    /// Add a player with explicit capability flags.
    pub async fn add_player_with_capabilities(
        &self,
        name: &str,
        identity: &str,
        can_control: Option<bool>,
        can_play: Option<bool>,
    ) {
        self.names.write().await.push(name.to_owned());
        self.objects.write().await.insert(
            name.to_owned(),
            FakePlayerObject {
                identity: identity.to_owned(),
                can_control,
                can_play,
            },
        );
    }

    /// Make every probe addressed to `name` fail, while the name stays
    /// visible in the registry.
    pub async fn fail_probes_for(&self, name: &str) {
        self.broken.write().await.insert(name.to_owned());
    }

    /// Make `name` answer its `Identity` read with a non-string value, as
    /// a peer sending a malformed reply would.
    pub async fn serve_malformed_identity(&self, name: &str) {
        self.malformed_identities
            .write()
            .await
            .insert(name.to_owned());
    }

    /// Make `list_names` fail as if the daemon were unreachable.
    pub async fn make_unreachable(&self) {
        *self.unreachable.write().await = true;
    }

    /// Whether `name` is currently present in the registry.
    pub async fn has_name(&self, name: &str) -> bool {
        self.names.read().await.iter().any(|n| n == name)
    }

    fn owned(value: Value<'_>) -> Result<OwnedValue, BusError> {
        value.try_to_owned().map_err(|e| BusError::Dbus(e.into()))
    }

    fn property_unavailable(name: &str, interface: &str, property: &str) -> BusError {
        BusError::PropertyUnavailable {
            name: name.to_owned(),
            interface: interface.to_owned(),
            property: property.to_owned(),
        }
    }
}

#[async_trait]
impl BusClient for FakeBus {
    async fn list_names(&self) -> Result<Vec<String>, BusError> {
        if *self.unreachable.read().await {
            return Err(BusError::ConnectionFailed(
                "fake bus daemon is unreachable".to_owned(),
            ));
        }

        Ok(self.names.read().await.clone())
    }

    async fn get_property(
        &self,
        destination: &str,
        _path: &str,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, BusError> {
        if !self.has_name(destination).await || self.broken.read().await.contains(destination) {
            return Err(Self::property_unavailable(destination, interface, property));
        }

        let objects = self.objects.read().await;
        let object = objects
            .get(destination)
            .ok_or_else(|| Self::property_unavailable(destination, interface, property))?;

        let value = match (interface, property) {
            (MPRIS_ROOT_INTERFACE, "Identity") => {
                if self
                    .malformed_identities
                    .read()
                    .await
                    .contains(destination)
                {
                    Value::from(42u32)
                } else {
                    Value::from(object.identity.clone())
                }
            }
            (MPRIS_ROOT_INTERFACE, "CanQuit" | "CanRaise" | "HasTrackList") => Value::from(false),
            (MPRIS_PLAYER_INTERFACE, "CanControl") => Value::from(
                object
                    .can_control
                    .ok_or_else(|| Self::property_unavailable(destination, interface, property))?,
            ),
            (MPRIS_PLAYER_INTERFACE, "CanPlay") => Value::from(
                object
                    .can_play
                    .ok_or_else(|| Self::property_unavailable(destination, interface, property))?,
            ),
            _ => return Err(Self::property_unavailable(destination, interface, property)),
        };

        Self::owned(value)
    }

    async fn call_method(
        &self,
        destination: &str,
        _path: &str,
        interface: &str,
        member: &str,
    ) -> Result<(), BusError> {
        let has_object = self.objects.read().await.contains_key(destination);
        if !has_object || !self.has_name(destination).await {
            return Err(Self::property_unavailable(destination, interface, member));
        }

        // The simulated root interface accepts Raise and Quit as no-ops.
        match (interface, member) {
            (MPRIS_ROOT_INTERFACE, "Raise" | "Quit") => Ok(()),
            _ => Err(BusError::NotSupported {
                name: destination.to_owned(),
                interface: interface.to_owned(),
                member: member.to_owned(),
            }),
        }
    }

    async fn serve_root(&self, player: RootInterface) -> Result<(), BusError> {
        *self.pending_root.write().await = Some(FakePlayerObject {
            identity: player.identity,
            can_control: None,
            can_play: None,
        });

        Ok(())
    }

    async fn register_name(&self, name: &str) -> Result<(), BusError> {
        if self.has_name(name).await {
            // Drop the object staged by the losing serve_root call so a
            // later registration cannot adopt it.
            self.pending_root.write().await.take();
            return Err(BusError::NameTaken(name.to_owned()));
        }

        self.names.write().await.push(name.to_owned());
        if let Some(object) = self.pending_root.write().await.take() {
            self.objects.write().await.insert(name.to_owned(), object);
        }

        Ok(())
    }

    async fn release_name(&self, name: &str) -> Result<bool, BusError> {
        let mut names = self.names.write().await;
        let held = names.iter().position(|n| n == name);
        if let Some(index) = held {
            names.remove(index);
            self.objects.write().await.remove(name);
        }

        Ok(held.is_some())
    }
}
