//! List command: the listing page, on the terminal.

use std::io::{self, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    catalog::Catalog,
    cli::args::ListArgs,
    config::ShowroomConfig,
    content::{CarRecord, CarStatus},
    log,
    utils::plural_count,
};

/// Execute list command
pub fn run_list(args: &ListArgs, config: &ShowroomConfig) -> Result<()> {
    let path = config.paths.cars_index();
    let catalog = Catalog::load(&path).with_context(|| {
        format!(
            "cannot list cars, run `showroom build` to regenerate {}",
            config.root_relative(&path).display()
        )
    })?;

    let cars = catalog.view(&args.status, args.sort);
    log!("list"; "{} of {} (sort: {})", plural_count(cars.len(), "car"), catalog.len(), args.sort);

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &cars)?;
        writeln!(stdout)?;
    } else {
        for car in cars {
            writeln!(stdout, "{}", format_row(car))?;
        }
    }
    Ok(())
}

/// One line per car: star, slug, title, year, price, status.
fn format_row(car: &CarRecord) -> String {
    let star = if car.featured { "★" } else { " " };
    let status = match &car.status {
        CarStatus::Available => car.status.as_str().green().to_string(),
        CarStatus::Sold => car.status.as_str().red().to_string(),
        CarStatus::Incoming => car.status.as_str().yellow().to_string(),
        CarStatus::Other(raw) => raw.dimmed().to_string(),
    };
    format!(
        "{star} {:<24} {:<32} {:>4}  {:>18}  {status}",
        car.slug, car.title, car.year, car.price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        owo_colors::set_override(false);
        let car: CarRecord = serde_json::from_value(serde_json::json!({
            "slug": "mazda-cx5",
            "car_id": "mazda-cx5",
            "title": "Mazda CX-5",
            "brand": "Mazda",
            "model": "CX-5",
            "year": 2018,
            "price": "KSh 3,100,000",
            "status": "sold",
            "featured": true,
            "description": "",
            "features": [],
            "images": ["/images/cx5.jpg"],
            "primary_image": "/images/cx5.jpg",
            "contact_ref": ""
        }))
        .unwrap();

        let row = format_row(&car);
        assert!(row.starts_with("★ mazda-cx5"));
        assert!(row.contains("Mazda CX-5"));
        assert!(row.ends_with("KSh 3,100,000  sold"));
    }
}
