mod drive;
mod location;
mod surface;
mod ui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use poi_map_logic::{Capabilities, Location, MapWidget, MountPoint, WidgetSettings};
use poi_map_transport::{
    DIRECTIONS_BASE_URL, HttpPoiFeed, MAPBOX_TOKEN, MapboxDirections, POI_FEED_URL,
};

use std::result::Result as StdResult;

use crate::{
    location::{FixedLocation, parse_location},
    surface::ConsoleSurface,
    ui::ConsoleUi,
};

type Result<T = (), E = anyhow::Error> = StdResult<T, E>;

pub type Widget =
    MapWidget<ConsoleSurface, FixedLocation, HttpPoiFeed, MapboxDirections, ConsoleUi>;

#[derive(Parser)]
#[command(version, about = "Run the POI map widget without a screen")]
struct Cli {
    /// URL of the JSON list of points of interest
    #[arg(long, default_value = POI_FEED_URL)]
    feed_url: String,

    /// Root of the directions API
    #[arg(long, default_value = DIRECTIONS_BASE_URL)]
    directions_url: String,

    /// Access token for the directions API
    #[arg(long, default_value = MAPBOX_TOKEN)]
    token: String,

    /// The viewer's position as "lat,lng", leave out to act like location is unavailable
    #[arg(long, value_parser = parse_location, allow_hyphen_values = true)]
    from: Option<Location>,

    /// Act like the host can't render, nothing will happen
    #[arg(long)]
    headless: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the map and print the widget state
    Pois,
    /// Plan a route from the viewer to a point of interest and print the steps
    Route {
        /// Name of the point of interest (case-insensitive)
        name: String,
    },
    /// Plan a route, then step through it with start/next/prev/quit read from stdin
    Drive {
        /// Name of the point of interest (case-insensitive)
        name: String,
    },
}

async fn route_to(widget: &Widget, name: &str) -> Result {
    let poi = widget
        .find_poi(name)
        .await
        .with_context(|| format!("No point of interest named {name:?} on the map"))?;
    widget.select_poi(&poi).await;

    for step in widget.get_ui_state().await.route_instructions {
        println!("{step}");
    }

    Ok(())
}

async fn run(widget: &Widget, command: Commands) -> Result {
    match command {
        Commands::Pois => {
            let state = widget.get_ui_state().await;
            let json = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
            println!("{json}");
            Ok(())
        }
        Commands::Route { name } => route_to(widget, &name).await,
        Commands::Drive { name } => {
            route_to(widget, &name).await?;
            drive::drive_loop(widget).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    colog::init();

    let cli = Cli::parse();

    let capabilities = if cli.headless {
        Capabilities::NONE
    } else {
        Capabilities::FULL
    };

    let widget = Widget::new(
        WidgetSettings::default(),
        capabilities,
        ConsoleSurface::default(),
        FixedLocation(cli.from),
        HttpPoiFeed::new(cli.feed_url),
        MapboxDirections::new(cli.directions_url, cli.token),
        ConsoleUi,
    );

    widget.mount(&MountPoint::new("map")).await;

    let res = run(&widget, cli.command).await;

    widget.unmount().await;
    info!("Done");

    res
}
