//! Command implementations.
//!
//! Each command works on a [`LocalStore`] over [`FileStorage`] and returns
//! what it did; printing is left to `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use teamboard_model::{AppData, SeedData};
use teamboard_persistence::{FileStorage, LocalStore, export_file_name, read_backup, write_backup};
use teamboard_state::{
    Breadcrumb, EditorMode, NavigationState, Section, Subsection, View, breadcrumbs,
};
use tracing::info_span;

use crate::cli::{ClearArgs, ExportArgs, ImportArgs, InitArgs, RouteArgs};

/// Store keeping its document under `data_dir`.
pub fn open_store(data_dir: &Path) -> LocalStore<FileStorage> {
    LocalStore::new(FileStorage::new(data_dir))
}

pub fn run_init(store: &mut LocalStore<FileStorage>, args: &InitArgs) -> Result<usize> {
    let _span = info_span!("init", data_dir = %store.storage().dir().display()).entered();

    let seed = match &args.seed {
        Some(path) => {
            let text = read_backup(path).context("read seed file")?;
            serde_json::from_str::<SeedData>(&text)
                .with_context(|| format!("parse seed file {}", path.display()))?
        }
        None => SeedData::default(),
    };

    if store.is_initialized()? {
        if !args.force {
            bail!("data is already initialized (use --force to replace it)");
        }
        store.clear_all_data()?;
    }
    store.initialize_with_mock_data(seed)?;

    Ok(store
        .get_all_data()?
        .map_or(0, |data| data.record_count()))
}

/// Result of `export`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Printed(String),
}

pub fn run_export(
    store: &LocalStore<FileStorage>,
    args: &ExportArgs,
    product_name: &str,
    today: NaiveDate,
) -> Result<ExportOutcome> {
    let text = store.export_data().context("export data")?;
    if args.stdout {
        return Ok(ExportOutcome::Printed(text));
    }

    let path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(export_file_name(product_name, today)));
    write_backup(&path, &text).context("write backup")?;
    Ok(ExportOutcome::Written(path))
}

pub fn run_import(store: &mut LocalStore<FileStorage>, args: &ImportArgs) -> Result<AppData> {
    let text = read_backup(&args.file).context("read backup")?;
    match store.try_import_data(&text) {
        Ok(data) => Ok(data),
        Err(e) if e.is_rejected_input() => bail!(
            "{} is not a valid backup, nothing was changed: {e}",
            args.file.display()
        ),
        Err(e) => Err(e).context("store imported data"),
    }
}

pub fn run_clear(store: &mut LocalStore<FileStorage>, args: &ClearArgs) -> Result<()> {
    if !args.yes {
        bail!("refusing to delete all data without --yes");
    }
    store.clear_all_data()?;
    Ok(())
}

pub fn run_summary(store: &LocalStore<FileStorage>) -> Result<Option<AppData>> {
    Ok(store.get_all_data()?)
}

/// Result of `route`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub state: NavigationState,
    pub view: View,
    pub trail: Vec<Breadcrumb>,
}

/// Build the navigation state named by `args` and resolve it.
///
/// Unknown sections fall back to the dashboard; unknown subsections and
/// modes are errors.
pub fn run_route(args: &RouteArgs) -> Result<RouteOutcome> {
    let mut state = NavigationState::at(Section::parse_or_default(&args.section));
    if let Some(name) = &args.subsection {
        state.subsection = Some(name.parse::<Subsection>()?);
    }
    if let Some(name) = &args.mode {
        state.mode = Some(name.parse::<EditorMode>()?);
    }
    state.id.clone_from(&args.id);
    state.module_id.clone_from(&args.module_id);

    if args.back {
        state = state.go_back();
    }

    Ok(RouteOutcome {
        view: View::resolve(&state),
        trail: breadcrumbs(&state),
        state,
    })
}
