//! Scaffold command: per-car image folders for uploads.
//!
//! ```text
//! static/images/
//! ├── cars/<car_id>/
//! │   ├── README.md
//! │   ├── thumbnails/
//! │   └── fullsize/
//! └── contacts/
//! ```

use std::{
    fs,
    path::{Component, Path},
};

use anyhow::{Context, Result};

use crate::{
    catalog::Catalog, config::ShowroomConfig, content::CarRecord, debug, log,
    utils::plural_count,
};

/// Execute scaffold command
pub fn run_scaffold(config: &ShowroomConfig) -> Result<()> {
    let index = config.paths.cars_index();
    if !index.exists() {
        log!("scaffold"; "{} not found, run `showroom build` first", config.root_relative(&index).display());
        return Ok(());
    }

    let catalog = Catalog::load(&index)?;
    let created = scaffold_images(&config.paths.images, catalog.cars())?;
    log!(
        "scaffold";
        "image folders for {} ({created} new)",
        plural_count(catalog.len(), "car")
    );
    Ok(())
}

/// Create the folder layout under `images_dir`. Returns how many
/// directories were newly created.
///
/// Cars whose `car_id` is not a plain folder name are skipped. An existing
/// `README.md` is left alone.
pub fn scaffold_images(images_dir: &Path, cars: &[CarRecord]) -> Result<usize> {
    let mut created = 0;

    for car in cars {
        // Older indexes may lack `car_id`
        let id = if car.car_id.is_empty() { &car.slug } else { &car.car_id };
        if !is_folder_name(id) {
            log!("skip"; "{}: car_id `{}` is not a folder name", car.slug, id);
            continue;
        }

        let car_dir = images_dir.join("cars").join(id);
        for dir in [car_dir.clone(), car_dir.join("thumbnails"), car_dir.join("fullsize")] {
            if !dir.exists() {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("cannot create {}", dir.display()))?;
                debug!("scaffold"; "created {}", dir.display());
                created += 1;
            }
        }
        let readme_path = car_dir.join("README.md");
        if !readme_path.exists() {
            fs::write(&readme_path, readme(id))
                .with_context(|| format!("cannot write {}", readme_path.display()))?;
        }
    }

    let contacts = images_dir.join("contacts");
    if !contacts.exists() {
        fs::create_dir_all(&contacts)?;
        created += 1;
    }
    Ok(created)
}

/// Exactly one normal path component: no separators, `..`, or root.
fn is_folder_name(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn readme(id: &str) -> String {
    format!(
        "# Images for {id}\n\n\
         Upload:\n\
         - primary.jpg (600x400) - main card image\n\
         - fullsize/1.jpg, 2.jpg, ... (1200x800) - gallery images\n\
         - thumbnails/1.jpg, 2.jpg, ... (200x150) - thumbnail images\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Document, normalize_car};
    use tempfile::TempDir;

    fn car(slug: &str, car_id: Option<&str>) -> CarRecord {
        let mut doc = Document {
            slug: slug.into(),
            fields: Default::default(),
            body: String::new(),
        };
        if let Some(id) = car_id {
            doc.fields.insert("car_id".into(), id.into());
        }
        normalize_car(&doc, &Default::default())
    }

    #[test]
    fn test_scaffold_creates_layout_once() {
        let tmp = TempDir::new().unwrap();
        let cars = vec![car("honda-fit", None), car("vitz", Some("TV-9"))];

        assert_eq!(scaffold_images(tmp.path(), &cars).unwrap(), 7);
        assert!(tmp.path().join("cars/honda-fit/thumbnails").is_dir());
        assert!(tmp.path().join("cars/TV-9/fullsize").is_dir());
        assert!(tmp.path().join("contacts").is_dir());

        let readme = fs::read_to_string(tmp.path().join("cars/TV-9/README.md")).unwrap();
        assert!(readme.starts_with("# Images for TV-9"));

        assert_eq!(scaffold_images(tmp.path(), &cars).unwrap(), 0);
    }

    #[test]
    fn test_scaffold_skips_ids_outside_images_dir() {
        let tmp = TempDir::new().unwrap();
        let images = tmp.path().join("static/images");
        let cars = vec![
            car("escape", Some("../escape")),
            car("deep", Some("../../../deep")),
            car("nested", Some("a/b")),
            car("rooted", Some("/abs")),
            car("ok", None),
        ];

        assert_eq!(scaffold_images(&images, &cars).unwrap(), 4);
        assert!(!tmp.path().join("static/escape").exists());
        assert!(!tmp.path().join("static/images/escape").exists());
        assert!(!images.join("cars/a").exists());
        let dirs: Vec<_> = fs::read_dir(images.join("cars"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(dirs, vec!["ok"]);
    }

    #[test]
    fn test_scaffold_keeps_edited_readme() {
        let tmp = TempDir::new().unwrap();
        let cars = vec![car("vitz", None)];
        scaffold_images(tmp.path(), &cars).unwrap();

        let readme = tmp.path().join("cars/vitz/README.md");
        fs::write(&readme, "hand edited").unwrap();
        scaffold_images(tmp.path(), &cars).unwrap();
        assert_eq!(fs::read_to_string(&readme).unwrap(), "hand edited");
    }

    #[test]
    fn test_is_folder_name() {
        assert!(is_folder_name("TC-001"));
        assert!(!is_folder_name(""));
        assert!(!is_folder_name(".."));
        assert!(!is_folder_name("a/b"));
        assert!(!is_folder_name("/abs"));
    }
}
