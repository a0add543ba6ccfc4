//! pdmtools - tools for listing and simulating MPRIS 2.x media players.
//!
//! Two small programs built on one library:
//!
//! - `lsmpris` lists the MPRIS-compatible media players currently reachable
//!   on a message bus.
//! - `fakeplayer` registers a minimal simulated player so `lsmpris` can be
//!   exercised without a real media player running.
//!
//! The library models the message bus as an explicit [`bus::BusClient`]
//! capability so discovery and the simulated endpoint can run against a
//! real D-Bus connection or an in-memory fake.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use pdmtools::bus::{BusConnection, BusSelector};
//! use pdmtools::discovery;
//!
//! # async fn run() -> Result<(), pdmtools::bus::BusError> {
//! let bus = BusConnection::connect(&BusSelector::Session).await?;
//! for player in discovery::discover(&bus).await? {
//!     println!("{} ({})", player.identity, player.bus_name);
//! }
//! # Ok(())
//! # }
//! ```

/// Message bus client abstraction and adapters.
pub mod bus;

/// Player discovery and capability probing.
pub mod discovery;

/// Simulated MPRIS endpoint.
pub mod endpoint;

/// MPRIS protocol constants.
pub mod mpris;

/// Tracing subscriber setup.
pub mod tracing_config;
