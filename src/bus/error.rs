use thiserror::Error;

/// Errors that can occur while talking to a message bus.
#[derive(Error, Debug)]
pub enum BusError {
    /// The bus itself could not be reached. Fatal for both tools.
    #[error("failed to connect to message bus: {0}")]
    ConnectionFailed(String),

    /// D-Bus communication error on an individual call.
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),

    /// The requested well-known name is already held by another process.
    #[error("bus name '{0}' is already registered by another process")]
    NameTaken(String),

    /// No object behind the given name answers the requested property.
    #[error("no object answering {interface}.{property} behind '{name}'")]
    PropertyUnavailable {
        /// Bus name that was probed
        name: String,
        /// Interface the property was looked up on
        interface: String,
        /// Property that was requested
        property: String,
    },

    /// A property came back with an unexpected type.
    #[error("malformed reply reading '{property}' from '{name}': {details}")]
    InvalidReply {
        /// Bus name that was probed
        name: String,
        /// Property that was requested
        property: String,
        /// Conversion error details
        details: String,
    },

    /// An incoming or outgoing method call the peer does not implement.
    #[error("method {interface}.{member} is not supported by '{name}'")]
    NotSupported {
        /// Bus name the call was addressed to
        name: String,
        /// Interface the method was looked up on
        interface: String,
        /// Method that was called
        member: String,
    },
}
