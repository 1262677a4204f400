//! Command-line storefront demo.
//!
//! Opens (or creates) the on-disk store, seeds the starter catalog on first
//! run, and prints the dashboard. An optional argument filters the list the
//! same way the dashboard search bar does.

use std::path::PathBuf;

use anyhow::Context;

use dukaan_app::App;
use dukaan_storage::SqliteKvStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dukaan_observability::init();

    let db_path = db_path()?;
    let kv = SqliteKvStore::open(&db_path)
        .await
        .with_context(|| format!("failed to open store database at {:?}", db_path))?;
    let app = App::new(kv);

    let query = std::env::args().nth(1).unwrap_or_default();

    let dashboard = app.dashboard_or_default().await?;
    let visible = app.search(&dashboard.items, &query);

    println!("{} - {}", dashboard.profile.name, dashboard.profile.tagline);
    if query.is_empty() {
        println!("{} items", visible.len());
    } else {
        println!(
            "{} of {} items match {:?}",
            visible.len(),
            dashboard.items.len(),
            query
        );
    }
    println!();

    for item in &visible {
        println!(
            "{:<24} {:>10}  {:<12} {}",
            item.name, item.price, item.stock, item.category
        );
    }

    Ok(())
}

/// Resolve the path to the store database:
/// `{app_data_dir}/dukaan/dukaan.db`, overridable via `DUKAAN_DATA_DIR`.
fn db_path() -> anyhow::Result<PathBuf> {
    let base = match std::env::var_os("DUKAAN_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?
            .join("dukaan"),
    };

    Ok(base.join("dukaan.db"))
}
