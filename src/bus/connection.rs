use async_trait::async_trait;
use tracing::{debug, instrument};
use zbus::{Connection, fdo, names::InterfaceName, zvariant::OwnedValue};

use super::{BusClient, BusError};
use crate::{endpoint::RootInterface, mpris::MPRIS_OBJECT_PATH};

/// Which bus instance a tool should talk to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BusSelector {
    /// The per-login session bus. This is the default.
    #[default]
    Session,
    /// The system-wide bus.
    System,
    /// A bus reachable via an explicit D-Bus address string.
    Address(String),
}

/// Real bus adapter over an established [`zbus::Connection`].
///
/// Lifecycle is open (via [`BusConnection::connect`]), use, drop. Dropping
/// the handle closes the connection, which releases any names it holds.
#[derive(Debug, Clone)]
pub struct BusConnection {
    connection: Connection,
}

impl BusConnection {
    /// Establish a connection to the selected bus instance.
    ///
    /// # Errors
    /// Returns `BusError::ConnectionFailed` if the bus cannot be reached,
    /// which callers treat as fatal.
    #[instrument]
    pub async fn connect(selector: &BusSelector) -> Result<Self, BusError> {
        debug!("Connecting to message bus");
        let connection = match selector {
            BusSelector::Session => Connection::session().await,
            BusSelector::System => Connection::system().await,
            BusSelector::Address(address) => match zbus::connection::Builder::address(
                address.as_str(),
            ) {
                Ok(builder) => builder.build().await,
                Err(e) => Err(e),
            },
        }
        .map_err(|e| BusError::ConnectionFailed(e.to_string()))?;

        Ok(Self { connection })
    }

    /// Access the underlying zbus connection.
    pub fn inner(&self) -> &Connection {
        &self.connection
    }
}

#[async_trait]
impl BusClient for BusConnection {
    async fn list_names(&self) -> Result<Vec<String>, BusError> {
        let dbus_proxy = fdo::DBusProxy::new(&self.connection).await?;
        let names = dbus_proxy
            .list_names()
            .await
            .map_err(|e| BusError::Dbus(e.into()))?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    async fn get_property(
        &self,
        destination: &str,
        path: &str,
        interface: &str,
        property: &str,
    ) -> Result<OwnedValue, BusError> {
        let interface_name =
            InterfaceName::try_from(interface).map_err(|e| BusError::Dbus(e.into()))?;

        let properties = fdo::PropertiesProxy::builder(&self.connection)
            .destination(destination.to_owned())?
            .path(path.to_owned())?
            .build()
            .await?;

        properties
            .get(interface_name, property)
            .await
            .map_err(|e| BusError::Dbus(e.into()))
    }

    async fn call_method(
        &self,
        destination: &str,
        path: &str,
        interface: &str,
        member: &str,
    ) -> Result<(), BusError> {
        self.connection
            .call_method(
                Some(destination.to_owned()),
                path.to_owned(),
                Some(interface.to_owned()),
                member,
                &(),
            )
            .await?;

        Ok(())
    }

    async fn serve_root(&self, player: RootInterface) -> Result<(), BusError> {
        self.connection
            .object_server()
            .at(MPRIS_OBJECT_PATH, player)
            .await?;

        Ok(())
    }

    async fn register_name(&self, name: &str) -> Result<(), BusError> {
        match self.connection.request_name(name.to_owned()).await {
            Ok(()) => Ok(()),
            Err(zbus::Error::NameTaken) => Err(BusError::NameTaken(name.to_owned())),
            Err(e) => Err(BusError::Dbus(e)),
        }
    }

    async fn release_name(&self, name: &str) -> Result<bool, BusError> {
        self.connection
            .release_name(name.to_owned())
            .await
            .map_err(BusError::Dbus)
    }
}
