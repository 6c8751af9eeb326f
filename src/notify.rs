//! Completion chime.

use std::io;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, warn};

/// Plays `path` with the first available platform player and waits for it.
///
/// Never fails: a missing file or player is logged as a warning.
pub async fn play_chime(path: &Path) {
    if !path.exists() {
        warn!(path = %path.display(), "Completion chime file does not exist");
        return;
    }

    for mut command in players(path) {
        match command.status().await {
            Ok(status) if status.success() => {
                debug!("Completion chime played");
                return;
            }
            Ok(status) => {
                warn!(%status, "Failed to play completion chime");
                return;
            }
            // Player not installed, try the next one.
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                warn!(error = %e, "Failed to play completion chime");
                return;
            }
        }
    }

    warn!("No audio player available for completion chime");
}

fn players(path: &Path) -> Vec<Command> {
    let mut commands = Vec::new();
    if cfg!(target_os = "macos") {
        let mut afplay = Command::new("afplay");
        afplay.arg(path);
        commands.push(afplay);
    } else if cfg!(target_os = "windows") {
        let script = format!(
            "(New-Object Media.SoundPlayer '{}').PlaySync()",
            path.display().to_string().replace('\'', "''")
        );
        let mut powershell = Command::new("powershell");
        powershell.args(["-NoProfile", "-Command", &script]);
        commands.push(powershell);
    } else {
        for player in ["paplay", "aplay"] {
            let mut command = Command::new(player);
            command.arg(path);
            commands.push(command);
        }
    }
    commands
}
