//! lsmpris - lists running MPRIS 2.x compatible media players.

use std::{error::Error, process};

use clap::Parser;
use pdmtools::{
    bus::{BusConnection, BusError, BusSelector},
    discovery, tracing_config,
};

#[derive(Parser, Debug)]
#[command(
    name = "lsmpris",
    version,
    about = "Lists running MPRIS 2.x compatible media players."
)]
struct Args {
    /// list players on the system message bus
    #[arg(long, conflicts_with_all = ["session", "bus"])]
    system: bool,

    /// list players on the session message bus (this is the default)
    #[arg(long, conflicts_with = "bus")]
    session: bool,

    /// list players on the message bus accessible via the provided address
    #[arg(long, value_name = "ADDRESS")]
    bus: Option<String>,
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
    tracing_config::init(false)?;

    if let Err(e) = run(&args).await {
        eprintln!("lsmpris: {e}");
        process::exit(1);
    }

    Ok(())
}

async fn run(args: &Args) -> Result<(), BusError> {
    let bus = BusConnection::connect(&args.selector()).await?;
    let players = discovery::discover(&bus).await?;

    for player in players {
        println!("{} ({})", player.identity, player.bus_name);
    }

    Ok(())
}
