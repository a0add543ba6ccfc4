use async_trait::async_trait;
use zbus::zvariant::OwnedValue;

use super::BusError;
use crate::endpoint::RootInterface;

/// Capability interface over a message bus.
///
/// Everything the discovery tool and the simulated endpoint need from the
/// bus goes through this trait: name enumeration, addressed property reads
/// and method calls, and exclusive well-known-name registration. The real
/// adapter is [`super::BusConnection`]; tests substitute [`super::FakeBus`].
///
/// The handle is always passed explicitly. Neither tool keeps global
/// connection state.
#[async_trait]
pub trait BusClient: Send + Sync {
    /// List all names currently present on the bus, in bus order.
    ///
    /// # Errors
    /// Returns `BusError::ConnectionFailed` or `BusError::Dbus` if the bus
    /// cannot be queried at all.
    async fn list_names(&self) -> Result<Vec<String>, BusError>;

    /// Read a property from the object at `path` behind `destination`.
    ///
    /// # Errors
    /// Returns an error if the destination is unreachable, the object or
    /// interface is missing, or the property does not exist.
    async fn get_property(
        &self,
        destination: &str,
        path: &str,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, BusError>;

    /// Invoke an argument-less method on the object at `path` behind
    /// `destination`, discarding the reply body.
    ///
    /// # Errors
    /// Returns an error if the call cannot be delivered or the peer answers
    /// with an error reply.
    async fn call_method(
        &self,
        destination: &str,
        path: &str,
        interface: &str,
        member: &str,
    ) -> Result<(), BusError>;

    /// Export a simulated MPRIS root object on this connection.
    ///
    /// Must be called before [`BusClient::register_name`] so the object is
    /// answering by the time the name becomes visible.
    ///
    /// # Errors
    /// Returns `BusError::Dbus` if the object cannot be exported.
    async fn serve_root(&self, player: RootInterface) -> Result<(), BusError>;

    /// Request exclusive ownership of a well-known name.
    ///
    /// # Errors
    /// Returns `BusError::NameTaken` if another process already holds the
    /// name. Ownership is not queued.
    async fn register_name(&self, name: &str) -> Result<(), BusError>;

    /// Release a previously registered well-known name.
    ///
    /// Returns `true` if this connection held the name.
    ///
    /// # Errors
    /// Returns `BusError::Dbus` if the release request cannot be delivered.
    async fn release_name(&self, name: &str) -> Result<bool, BusError>;
}
