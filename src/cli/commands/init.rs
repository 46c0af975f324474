//! Init command - Create a new board in the working directory

use std::path::Path;

use tracing::info;

use crate::errors::{Result, StayboardError};
use crate::fs::{get_board_dir, get_config_path, get_data_path, resolve_cwd, write_json, write_reservations};
use crate::schemas::Config;

/// Create `.stayboard/` with a default config and an empty data file
pub async fn run(cwd: Option<&Path>, force: bool, dry_run: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let board_dir = get_board_dir(&root);

    if board_dir.exists() && !force {
        return Err(StayboardError::ConfigError(format!(
            "{} already exists (use --force to reinitialize)",
            board_dir.display()
        )));
    }

    let config = Config::default();
    let config_path = get_config_path(&root);
    let data_path = get_data_path(&root, &config);

    if dry_run {
        info!(
            config = %config_path.display(),
            data = %data_path.display(),
            "dry run, board not created"
        );
        return Ok(());
    }

    write_json(&config_path, &config)?;
    write_reservations(&data_path, &[])?;
    info!(path = %board_dir.display(), "board initialized");
    println!("Initialized empty board in {}", board_dir.display());
    Ok(())
}
