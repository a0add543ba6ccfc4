//! fakeplayer - simulates a MPRIS 2.x compatible media player.
//!
//! For debugging lsmpris only; does not implement MPRIS in its entirety.

use std::{error::Error, io, process, sync::Arc};

use clap::Parser;
use pdmtools::{
    bus::{BusConnection, BusError, BusSelector},
    endpoint::SimulatedPlayer,
    tracing_config,
};
use tokio::signal::unix::{SignalKind, signal};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "fakeplayer",
    version,
    about = "Simulates a MPRIS 2.x compatible media player. For debugging lsmpris only."
)]
struct Args {
    /// sets the identity string the player reports
    #[arg(long, default_value = "Fake Player")]
    identity: String,

    /// sets the bus-name suffix under org.mpris.MediaPlayer2.
    #[arg(long, default_value = "fakeplayer")]
    suffix: String,

    /// uses the system message bus
    #[arg(long, conflicts_with_all = ["session", "bus"])]
    system: bool,

    /// uses the session message bus (this is the default)
    #[arg(long, conflicts_with = "bus")]
    session: bool,

    /// uses the message bus accessible via the provided address
    #[arg(long, value_name = "ADDRESS")]
    bus: Option<String>,

    /// enable output of debug information
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn selector(&self) -> BusSelector {
        if self.system {
            BusSelector::System
        } else if let Some(address) = &self.bus {
            BusSelector::Address(address.clone())
        } else {
            BusSelector::Session
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_config::init(args.verbose)?;

    if let Err(e) = run(&args).await {
        eprintln!("fakeplayer: {e}");
        process::exit(1);
    }

    Ok(())
}

async fn run(args: &Args) -> Result<(), BusError> {
    let bus = Arc::new(BusConnection::connect(&args.selector()).await?);
    let mut player = SimulatedPlayer::start(bus, &args.suffix, &args.identity).await?;

    info!(
        "Serving {} as \"{}\"; press Ctrl-C to stop",
        player.bus_name(),
        args.identity
    );

    // zbus answers incoming calls on its own connection task; this task
    // parks until told to stop. The name is released before any signal
    // handler failure is surfaced, so it is not left squatted on that exit
    // path either.
    let shutdown = wait_for_shutdown().await;
    player.stop().await?;

    shutdown.map_err(|e| {
        BusError::ConnectionFailed(format!("failed to install signal handler: {e}"))
    })
}

async fn wait_for_shutdown() -> io::Result<()> {
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = sigterm.recv() => {}
    }

    Ok(())
}
