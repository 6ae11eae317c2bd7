//! demos/render_frames.rs
//!
//! Loads the bundled sample dataset, projects a snapshot, and renders the month
//! time series for one location using `plotlars`.
//!
//! To run this demo:
//! cargo run --example render_frames --features plotting

use std::error::Error;

use chrono::NaiveDate;
use plotlars::{Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;
use thermomap::{
    ContourFrame, GeoScatterFrame, LineSeriesFrame, Selection, Thermomap, Unit,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 1. Load the dataset once for the session.
    let map = Thermomap::from_path("demos/data.json").await?;
    println!("Variables available: {:?}", map.variable_ids());

    // 2. The selection a date/variable/unit picker would produce.
    let selection = Selection::builder()
        .date(NaiveDate::from_ymd_opt(1980, 6, 23).ok_or("bad reference date")?)
        .variable("ta")
        .unit(Unit::Celsius)
        .build();

    // 3. Project the snapshot and build the two map-level frames.
    let snapshot = map.project(&selection);
    let geo = GeoScatterFrame::from_snapshot(&snapshot, &selection);
    println!(
        "{}: {} markers, color domain {:?}",
        geo.title,
        geo.len(),
        geo.color_domain
    );

    let contour = ContourFrame::from_snapshot(&snapshot, &selection);
    println!("{}: {} grid points", contour.title, contour.len());

    // 4. The equivalent of clicking a marker: the renderer echoes rounded
    //    coordinates, the locator resolves them to a record id.
    let clicked = snapshot
        .locator()
        .nearest(52.5, 13.4, 25.0)
        .ok_or("no marker near the click")?;
    let series = map.month_series(&selection, clicked)?;
    let line = LineSeriesFrame::from_series(&series, &selection);
    println!("{}: {} points", line.title, line.len());

    // 5. Hand the line frame to the charting collaborator.
    println!("Generating time-series plot...");
    plot_series(&line)?;
    println!("Plot shown in browser.");

    Ok(())
}

// --- Plotting Helper Function ---

/// Renders a line-series frame through plotlars.
fn plot_series(frame: &LineSeriesFrame) -> Result<(), Box<dyn Error>> {
    let dates: Vec<String> = frame.dates.iter().map(|d| d.to_string()).collect();
    let data = df!(
        "date" => dates,
        "value" => frame.values.clone(),
    )?
    .lazy()
    .with_column(col("date").str().to_date(StrptimeOptions::default()))
    .collect()?;

    TimeSeriesPlot::builder()
        .data(&data)
        .x("date")
        .y("value")
        .size(8)
        .colors(vec![Rgb(0, 123, 255)])
        .lines(vec![Line::Solid])
        .with_shape(true)
        .shapes(vec![Shape::Circle])
        .plot_title(Text::from(frame.title.as_str()).font("Arial").size(18))
        .x_title(frame.x_label.as_str())
        .y_title(frame.y_label.as_str())
        .build()
        .plot();

    Ok(())
}
