// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 ® John Hauger Mitander <john@mitander.dev>

use auroom_contracts::app::cli::{self, Cli};
use auroom_contracts::app::config::RegistrySettings;
use auroom_contracts::app::logging::setup_logging;
use auroom_contracts::domain::error::AppError;
use auroom_contracts::infrastructure::data::registry::Registry;
use clap::Parser;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut settings = RegistrySettings::load_with_path(cli.config.as_deref())?;
    cli.apply_overrides(&mut settings);
    setup_logging(settings.log_level(), settings.log_json);

    let registry = Registry::load(&settings)?;
    tracing::debug!(
        target: "registry",
        networks = ?settings.networks,
        policy = %settings.missing_policy,
        "Registry loaded"
    );

    cli::run(&registry, &cli.command)
}
