use anyhow::{Context as _, Error};
use log::{error, info};
use page_model::html;
use scrollspy::FolioConfig;
use std::env;
use std::fs;
use std::path::PathBuf;

mod session;

pub fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("folio failed: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = FolioConfig::from_env();
    info!("starting with {config:?}");

    // Run the scripted session first so the rendered nav reflects where it
    // ended up.
    let out_path = out_path();
    let final_active = session::run_demo(&config);
    let page = html::render_page(final_active);
    fs::write(&out_path, page)
        .with_context(|| format!("writing rendered page to {}", out_path.display()))?;
    info!(
        "wrote rendered page to {} with active section {final_active}",
        out_path.display()
    );
    Ok(())
}

/// Output path for the rendered page, `FOLIO_OUT` or `folio.html`.
fn out_path() -> PathBuf {
    env::var_os("FOLIO_OUT").map_or_else(|| PathBuf::from("folio.html"), PathBuf::from)
}
