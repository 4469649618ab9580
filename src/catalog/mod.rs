//! Catalog: the read side of the cars index.
//!
//! Mirrors what the site's listing page does with `cars-index.json`:
//! filter by status, sort by one of the listing controls, look a car up by
//! slug for the detail view and the reservation flow.

pub mod reserve;

use std::{fmt, fs, io, path::Path, path::PathBuf, str::FromStr};

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::content::{CarRecord, CarStatus};

pub use reserve::{ContactBook, Reservation};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("`{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("`{0}` does not contain a JSON array")]
    NotAnArray(PathBuf),
}

/// Status filter of the listing (`all` or a single status).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CarStatus),
}

impl StatusFilter {
    pub fn matches(&self, car: &CarRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => &car.status == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("status must not be empty".into());
        }
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(CarStatus::parse(s)))
        }
    }
}

/// Sort order of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Featured cars first, otherwise index order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    YearNew,
}

impl SortKey {
    const NAMES: [(&'static str, Self); 4] = [
        ("featured", Self::Featured),
        ("price-low", Self::PriceLow),
        ("price-high", Self::PriceHigh),
        ("year-new", Self::YearNew),
    ];

    pub fn as_str(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, key)| *key == self)
            .map_or("featured", |(name, _)| name)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, key)| *key)
            .ok_or_else(|| {
                let names: Vec<_> = Self::NAMES.iter().map(|(name, _)| *name).collect();
                format!("unknown sort `{s}`, expected one of: {}", names.join(", "))
            })
    }
}

/// Numeric value of a display price: digits and `.` only, 0 if none.
pub fn parse_price(price: &str) -> f64 {
    let numeric: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(0.0)
}

/// Cars loaded from an index file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cars: Vec<CarRecord>,
}

impl Catalog {
    pub fn new(cars: Vec<CarRecord>) -> Self {
        Self { cars }
    }

    /// Load `cars-index.json`. Anything but a JSON array of cars is an error.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|e| CatalogError::Io(path.to_path_buf(), e))?;
        let value: JsonValue =
            serde_json::from_str(&text).map_err(|e| CatalogError::Json(path.to_path_buf(), e))?;
        if !value.is_array() {
            return Err(CatalogError::NotAnArray(path.to_path_buf()));
        }
        let cars =
            serde_json::from_value(value).map_err(|e| CatalogError::Json(path.to_path_buf(), e))?;
        Ok(Self { cars })
    }

    pub fn cars(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&CarRecord> {
        self.cars.iter().find(|car| car.slug == slug)
    }

    /// Cars matching `filter`, in index order.
    pub fn filter(&self, filter: &StatusFilter) -> Vec<&CarRecord> {
        self.cars.iter().filter(|car| filter.matches(car)).collect()
    }

    /// Filtered and sorted view, as the listing page shows it.
    pub fn view(&self, filter: &StatusFilter, sort: SortKey) -> Vec<&CarRecord> {
        let mut cars = self.filter(filter);
        match sort {
            SortKey::Featured => cars.sort_by(|a, b| b.featured.cmp(&a.featured)),
            SortKey::PriceLow => {
                cars.sort_by(|a, b| parse_price(&a.price).total_cmp(&parse_price(&b.price)))
            }
            SortKey::PriceHigh => {
                cars.sort_by(|a, b| parse_price(&b.price).total_cmp(&parse_price(&a.price)))
            }
            SortKey::YearNew => cars.sort_by(|a, b| b.year.cmp(&a.year)),
        }
        cars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::index::write_index;
    use tempfile::TempDir;

    fn car(slug: &str, price: &str, year: i64, status: CarStatus, featured: bool) -> CarRecord {
        CarRecord {
            slug: slug.into(),
            car_id: slug.into(),
            title: slug.into(),
            brand: "Nissan".into(),
            model: "Note".into(),
            year,
            price: price.into(),
            status,
            featured,
            description: String::new(),
            features: vec![],
            images: vec!["/images/car-placeholder.jpg".into()],
            primary_image: "/images/car-placeholder.jpg".into(),
            contact_ref: String::new(),
            extra: Default::default(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            car("a", "KSh 2,500,000", 2019, CarStatus::Available, false),
            car("b", "Contact for price", 2022, CarStatus::Sold, false),
            car("c", "KSh 900,000", 2021, CarStatus::Available, true),
            car("d", "KSh 1,200,000.50", 2020, CarStatus::Incoming, false),
        ])
    }

    fn slugs(cars: Vec<&CarRecord>) -> Vec<&str> {
        cars.into_iter().map(|c| c.slug.as_str()).collect()
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("KSh 2,500,000"), 2_500_000.0);
        assert_eq!(parse_price("KSh 1,200,000.50"), 1_200_000.5);
        assert_eq!(parse_price("Contact for price"), 0.0);
        assert_eq!(parse_price("KSh."), 0.0);
    }

    #[test]
    fn test_view_sorts() {
        let catalog = catalog();
        let all = StatusFilter::All;
        assert_eq!(slugs(catalog.view(&all, SortKey::Featured)), vec!["c", "a", "b", "d"]);
        assert_eq!(slugs(catalog.view(&all, SortKey::PriceLow)), vec!["b", "c", "d", "a"]);
        assert_eq!(slugs(catalog.view(&all, SortKey::PriceHigh)), vec!["a", "d", "c", "b"]);
        assert_eq!(slugs(catalog.view(&all, SortKey::YearNew)), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn test_view_filters_by_status() {
        let catalog = catalog();
        let available = "available".parse::<StatusFilter>().unwrap();
        assert_eq!(slugs(catalog.view(&available, SortKey::YearNew)), vec!["c", "a"]);
        let sold: StatusFilter = "Sold".parse().unwrap();
        assert_eq!(slugs(catalog.view(&sold, SortKey::Featured)), vec!["b"]);
        assert_eq!(slugs(catalog.filter(&StatusFilter::All)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_key_names() {
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert_eq!(SortKey::YearNew.to_string(), "year-new");
        let err = "cheapest".parse::<SortKey>().unwrap_err();
        assert!(err.contains("price-low"));
        assert!("".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_load_and_find() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cars-index.json");
        write_index(&path, catalog().cars()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.find("d").unwrap().status, CarStatus::Incoming);
        assert!(loaded.find("zzz").is_none());
    }

    #[test]
    fn test_load_errors() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.json");
        assert!(matches!(Catalog::load(&missing), Err(CatalogError::Io(..))));

        let object = tmp.path().join("object.json");
        fs::write(&object, "{\"cars\": []}").unwrap();
        assert!(matches!(Catalog::load(&object), Err(CatalogError::NotAnArray(_))));

        let broken = tmp.path().join("broken.json");
        fs::write(&broken, "[{").unwrap();
        assert!(matches!(Catalog::load(&broken), Err(CatalogError::Json(..))));

        let legacy = tmp.path().join("legacy.json");
        fs::write(
            &legacy,
            r#"[{"slug": "x", "title": "X", "brand": "B", "model": "M", "year": 2015,
                "price": "KSh 1", "status": "sold", "featured": false, "description": "",
                "features": [], "images": ["/images/x.jpg"], "primary_image": "/images/x.jpg"}]"#,
        )
        .unwrap();
        assert_eq!(Catalog::load(&legacy).unwrap().find("x").unwrap().car_id, "");

        let empty = tmp.path().join("empty.json");
        fs::write(&empty, "[]").unwrap();
        assert!(Catalog::load(&empty).unwrap().is_empty());
    }
}
