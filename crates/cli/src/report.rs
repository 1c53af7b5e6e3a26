//! Console report of the nearest bikes and hubs.

use std::io::{self, Write};

use bikealert_jump::{Bike, Hub, Ranked};

pub fn bike_line(ranked: &Ranked<&Bike>) -> String {
    let bike = ranked.item;
    match bike.ebike_battery_level {
        Some(battery) => format!(
            "{} {} ({:.2} miles, {}%)",
            bike.name, bike.address, ranked.distance_miles, battery
        ),
        None => format!(
            "{} {} ({:.2} miles)",
            bike.name, bike.address, ranked.distance_miles
        ),
    }
}

pub fn hub_line(ranked: &Ranked<&Hub>) -> String {
    let hub = ranked.item;
    format!(
        "{} {} ({} bikes) ({:.2} miles)",
        hub.name,
        hub.address,
        hub.bikes_available(),
        ranked.distance_miles
    )
}

pub fn write_report(
    out: &mut impl Write,
    bikes: &[Ranked<&Bike>],
    hubs: &[Ranked<&Hub>],
) -> io::Result<()> {
    writeln!(out, "Bikes")?;
    for bike in bikes {
        writeln!(out, "{}", bike_line(bike))?;
    }
    writeln!(out)?;

    writeln!(out, "Hubs")?;
    for hub in hubs {
        writeln!(out, "{}", hub_line(hub))?;
    }
    out.flush()
}
