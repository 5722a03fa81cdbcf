use ormic_core::{driver::Driver, Error, Result};

use url::Url;

/// Picks the driver for a connection URL by its scheme.
pub(super) fn driver(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url).map_err(Error::driver)?;

    match parsed.scheme() {
        "sqlite" => sqlite(url),
        scheme => ormic_core::bail!("unsupported database; scheme={scheme}; url={url}"),
    }
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(ormic_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    ormic_core::bail!("`sqlite` feature not enabled")
}
