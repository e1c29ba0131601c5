//! Quote command implementation for the hubfreight CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hubfreight_core::{Catalog, CatalogSpec, Order, Quote, Quoter};
use hubfreight_optimizer::AnchorQuoter;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_QUOTE_CATALOG, ARG_QUOTE_ORDER, CliError, ENV_QUOTE_ORDER};

/// CLI arguments for the `quote` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "quote",
    long_about = "Price an order by finding the cheapest anchor center. The \
                 order is a JSON object mapping product codes to integer \
                 quantities. Without --catalog the built-in reference \
                 catalog is used.",
    about = "Quote the minimum shipping cost for an order"
)]
#[ortho_config(prefix = "HUBFREIGHT")]
pub(crate) struct QuoteArgs {
    /// Path to a JSON file containing the order.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) order_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog replacing the reference catalog.
    #[arg(long = ARG_QUOTE_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl QuoteArgs {
    pub(crate) fn into_config(self) -> Result<QuoteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        QuoteConfig::try_from(merged)
    }
}

/// Resolved `quote` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuoteConfig {
    /// Path to the JSON order file.
    pub(crate) order_path: Utf8PathBuf,
    /// Catalog file, or `None` for the reference catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl QuoteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.order_path, ARG_QUOTE_ORDER)?;
        if let Some(catalog) = &self.catalog {
            Self::require_existing(catalog, ARG_QUOTE_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<QuoteArgs> for QuoteConfig {
    type Error = CliError;

    fn try_from(args: QuoteArgs) -> Result<Self, Self::Error> {
        let order_path = args.order_path.ok_or(CliError::MissingArgument {
            field: ARG_QUOTE_ORDER,
            env: ENV_QUOTE_ORDER,
        })?;
        Ok(Self {
            order_path,
            catalog: args.catalog,
        })
    }
}

/// Builds a quoter over the catalog chosen for the current invocation.
pub(super) trait QuoterBuilder {
    fn build(&self, catalog: Catalog) -> Result<Box<dyn Quoter>, CliError>;
}

pub(super) struct DefaultQuoterBuilder;

impl QuoterBuilder for DefaultQuoterBuilder {
    fn build(&self, catalog: Catalog) -> Result<Box<dyn Quoter>, CliError> {
        Ok(Box::new(AnchorQuoter::new(catalog)))
    }
}

pub(super) fn run_quote(args: QuoteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultQuoterBuilder;
    run_quote_with(args, &builder, &mut stdout)
}

pub(super) fn run_quote_with(
    args: QuoteArgs,
    builder: &dyn QuoterBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let quote = execute_quote(args, builder)?;
    write_quote(writer, &quote)
}

fn execute_quote(args: QuoteArgs, builder: &dyn QuoterBuilder) -> Result<Quote, CliError> {
    let config = resolve_quote_config(args)?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let order = load_order(&config.order_path, &catalog)?;
    let quoter = builder.build(catalog)?;
    Ok(quoter.quote(&order)?)
}

fn resolve_quote_config(args: QuoteArgs) -> Result<QuoteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads the catalog file at `path`, or the reference catalog when absent.
///
/// Center pairs without a recorded distance are logged, since they price as
/// zero.
pub(super) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        log::info!("using the reference catalog");
        return Ok(Catalog::reference());
    };
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let spec: CatalogSpec = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let catalog = Catalog::try_from(spec).map_err(|source| CliError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded catalog from {path} with {} centers and {} products",
        catalog.centers().count(),
        catalog.products().count()
    );
    for (from, to) in catalog.unlinked_pairs() {
        log::warn!("catalog has no distance between {from} and {to}; it will count as zero");
    }
    Ok(catalog)
}

/// Loads a JSON order mapping product codes to quantities and validates it
/// against `catalog`.
pub(super) fn load_order(path: &Utf8Path, catalog: &Catalog) -> Result<Order, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOrder {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: BTreeMap<String, i64> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseOrder {
                path: path.to_path_buf(),
                source,
            }
        })?;
    Order::from_raw(catalog, raw).map_err(|source| CliError::InvalidOrder {
        path: path.to_path_buf(),
        source,
    })
}

fn write_quote(writer: &mut dyn Write, quote: &Quote) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(quote).map_err(CliError::SerializeQuote)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteQuoteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteQuoteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<QuoteConfig, CliError> {
    let merged = QuoteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    QuoteConfig::try_from(merged)
}
