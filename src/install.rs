//! Post-projection package manager invocation.
//! Fire-and-forget from the projection's perspective: a failure to start the
//! install is logged and never fails the run.

use log::{info, warn};
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawns `yarn install` in the freshly scaffolded destination.
pub fn invoke_package_manager<P: AsRef<Path>>(dest_dir: P) {
    let dest_dir = dest_dir.as_ref();
    info!("Installing dependencies in {}", dest_dir.display());

    match Command::new("yarn")
        .arg("install")
        .current_dir(dest_dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(_) => {}
        Err(e) => warn!("Could not start package manager: {}", e),
    }
}
