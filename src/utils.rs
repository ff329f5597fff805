//! Helpers querying the environment the tool runs in.

use std::process::Command;

use log::debug;

/// Reads the author name from the git configuration.
pub fn git_author_name() -> Option<String> {
    let output = match Command::new("git").args(["config", "user.name"]).output() {
        Ok(output) => output,
        Err(e) => {
            debug!("Unable to run git: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
