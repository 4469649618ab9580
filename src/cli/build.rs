//! Build orchestration.
//!
//! Build phases:
//! - **Prepare** - Create the content, data and image directories
//! - **Cars** - `content/cars/*.md` to `data/cars-index.json`
//! - **Contacts** - `content/contacts/*.md` to `data/contacts-index.json`
//! - **Finalize** - Summary logging
//!
//! Per-file problems never fail the build. Only an index that could not be
//! written makes the command exit non-zero, after both indexes were tried.

use std::fs;

use anyhow::{Result, bail};

use crate::{
    config::ShowroomConfig,
    content::{IndexReport, build_cars_index, build_contacts_index, index::error_chain},
    debug, log,
    utils::plural_count,
};

/// Reports of both indexes.
#[derive(Debug)]
pub struct BuildSummary {
    pub cars: Option<IndexReport>,
    pub contacts: Option<IndexReport>,
}

/// Run the full build for the project in `config`.
pub fn build_all(config: &ShowroomConfig) -> Result<BuildSummary> {
    prepare_dirs(config);

    let cars = build_cars_index(
        &config.paths.cars,
        &config.paths.cars_index(),
        &config.cars,
    )
    .inspect_err(|e| log!("error"; "cars index: {}", error_chain(e)))
    .ok();

    let contacts = build_contacts_index(&config.paths.contacts, &config.paths.contacts_index())
        .inspect_err(|e| log!("error"; "contacts index: {}", error_chain(e)))
        .ok();

    let summary = BuildSummary { cars, contacts };
    log_summary(&summary);

    if summary.cars.is_none() || summary.contacts.is_none() {
        bail!("build finished with unwritable index files");
    }
    Ok(summary)
}

/// Create missing project directories. Failures are logged only; the index
/// writers report anything that matters.
fn prepare_dirs(config: &ShowroomConfig) {
    for dir in config.paths.build_dirs() {
        if dir.exists() {
            continue;
        }
        match fs::create_dir_all(dir) {
            Ok(()) => debug!("build"; "created {}", config.root_relative(dir).display()),
            Err(e) => log!("warning"; "cannot create {}: {}", config.root_relative(dir).display(), e),
        }
    }
}

fn log_summary(summary: &BuildSummary) {
    let part = |report: &Option<IndexReport>, noun: &str| match report {
        Some(r) if r.skipped > 0 => format!(
            "{} ({} skipped)",
            plural_count(r.written, noun),
            r.skipped
        ),
        Some(r) => plural_count(r.written, noun),
        None => format!("{noun}s failed"),
    };

    log!(
        "done";
        "{}, {}",
        part(&summary.cars, "car"),
        part(&summary.contacts, "contact")
    );
}
