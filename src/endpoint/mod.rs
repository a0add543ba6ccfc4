/// The served `org.mpris.MediaPlayer2` root object.
pub mod root;

pub use root::*;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    bus::{BusClient, BusError},
    mpris::MPRIS_BUS_PREFIX,
};

/// Lifecycle handle for a simulated MPRIS endpoint.
///
/// State machine: unregistered, then registered and serving after
/// [`SimulatedPlayer::start`], then unregistered again after
/// [`SimulatedPlayer::stop`] or process exit. Incoming playback commands
/// never change state; the root object answers them as no-ops.
pub struct SimulatedPlayer<B: BusClient> {
    bus: Arc<B>,
    bus_name: String,
    registered: bool,
}

impl<B: BusClient> SimulatedPlayer<B> {
    /// Export the root object and claim `org.mpris.MediaPlayer2.<suffix>`
    /// exclusively.
    ///
    /// The object is exported before the name is requested, so the player
    /// is answering by the time it becomes discoverable.
    ///
    /// # Errors
    /// Returns `BusError::NameTaken` if another process already holds the
    /// name. Two simulators with the same suffix is a configuration error,
    /// so the conflict is surfaced rather than retried.
    #[instrument(skip(bus))]
    pub async fn start(bus: Arc<B>, suffix: &str, identity: &str) -> Result<Self, BusError> {
        let bus_name = format!("{MPRIS_BUS_PREFIX}{suffix}");

        bus.serve_root(RootInterface::new(identity)).await?;
        bus.register_name(&bus_name).await?;
        info!("Registered {bus_name} on the message bus");

        Ok(Self {
            bus,
            bus_name,
            registered: true,
        })
    }

    /// The well-known name this player is registered under.
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    /// Release the well-known name.
    ///
    /// Safe to call more than once; calls after the first are no-ops. The
    /// binaries also call this from their signal handlers so the name is
    /// not left squatted on interruption.
    ///
    /// # Errors
    /// Returns `BusError::Dbus` if the release request cannot be delivered.
    pub async fn stop(&mut self) -> Result<(), BusError> {
        if !self.registered {
            return Ok(());
        }

        self.bus.release_name(&self.bus_name).await?;
        self.registered = false;
        info!("Released {} from the message bus", self.bus_name);

        Ok(())
    }
}
