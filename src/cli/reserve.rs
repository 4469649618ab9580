//! Reserve command: print the WhatsApp reservation for a car.

use anyhow::{Context, Result, anyhow};

use crate::{
    catalog::{Catalog, ContactBook, Reservation},
    cli::args::ReserveArgs,
    config::ShowroomConfig,
    log,
};

/// Execute reserve command
pub fn run_reserve(args: &ReserveArgs, config: &ShowroomConfig) -> Result<()> {
    let catalog = Catalog::load(&config.paths.cars_index())
        .context("cannot load cars, run `showroom build` first")?;
    let car = catalog
        .find(&args.slug)
        .ok_or_else(|| anyhow!("no car with slug `{}`", args.slug))?;

    let book = ContactBook::load_or_fallback(&config.paths.contacts_index());
    let contact = match &args.contact {
        Some(name) => book.find(name).ok_or_else(|| {
            let names: Vec<_> = book.offered().iter().map(|c| c.name.as_str()).collect();
            anyhow!("no contact named `{name}`, choose one of: {}", names.join(", "))
        })?,
        None => book.for_car(car),
    };

    let reservation = Reservation::new(car, contact, &config.contact);
    if reservation.number.is_empty() {
        log!("warning"; "{} has no phone number", reservation.contact);
    }
    log!("reserve"; "{} via {}", car.title, reservation.contact);

    println!("{}\n\n{}", reservation.message, reservation.link);
    Ok(())
}
