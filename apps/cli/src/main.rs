#![allow(clippy::print_stdout)]

mod args;
mod render;

use crate::args::{Cli, Command, GlobalArgs};
use anyhow::{Context, Result};
use clap::Parser;
use fcompat::domain::config::CompatConfig;
use fcompat::Engine;
use fcompat::domain::{Declarations, RuntimeIdentity, names};
use fcompat::kernel::config::load_compat_config;
use fcompat::validator::platforms_for_feature;
use fcompat_logger::{Logger, level_for_verbosity};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log = init_logger(&cli.global)?;

    let config = load(&cli.global).context("Critical: Configuration is malformed")?;
    let engine = Engine::from_config(&config);
    let identity = RuntimeIdentity::new(cli.global.runtime, cli.global.runtime_version.clone());
    debug!(%identity, "Engine ready");

    match cli.command {
        Command::Check { features, platforms, elements } => {
            let declarations = Declarations::new()
                .with_features(features)
                .with_platforms(platforms)
                .with_config_elements(elements);
            let report = engine.check(&identity, &declarations).await;

            if cli.global.json {
                println!("{}", render::report_json(&report)?);
            } else {
                print!("{}", render::report_text(&report));
            }

            Ok(if report.has_errors() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        },
        Command::Platforms { feature } => {
            let snapshot = engine.resolver().resolve(&identity).await;
            let platforms = if names::version_of(&feature).is_some() {
                platforms_for_feature(&snapshot, &feature)
            } else {
                engine.validator().platforms_for_versionless_feature(&snapshot, &feature)
            };

            if cli.global.json {
                println!("{}", render::platforms_json(&feature, &platforms)?);
            } else {
                print!("{}", render::platforms_text(&feature, &platforms));
            }

            Ok(ExitCode::SUCCESS)
        },
    }
}

fn init_logger(global: &GlobalArgs) -> Result<Logger> {
    let builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level_for_verbosity(global.verbose));

    let logger = match &global.log_dir {
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    };
    logger.context("Failed to initialize logging")
}

fn load(global: &GlobalArgs) -> Result<CompatConfig> {
    let mut config = load_compat_config(global.config.as_deref())?;
    if let Some(mirror) = &global.mirror {
        config.sources.mirror_dir = Some(mirror.clone());
    }
    if let Some(install_dir) = &global.install_dir {
        config.sources.install_dir = Some(install_dir.clone());
    }
    Ok(config)
}
