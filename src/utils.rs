//! Utility functions for directory management and id generation
//!
//! Directory helpers follow the XDG Base Directory specification so
//! preference files land in the conventional per-user location
//! (`~/.config/routedit/` on Linux).

use directories::ProjectDirs;
use rand::Rng;
use std::path::PathBuf;

const ID_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Generates a random 8-char lowercase-hex identifier.
///
/// Characters are drawn independently and uniformly. No collision checking
/// is performed; within one edit session the collision probability is
/// negligible and ids are not meant for long-term storage keys.
pub fn random_id() -> String {
    let mut rng = rand::rng();
    (0..8)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "routedit", "routedit").map(|pd| pd.config_dir().to_path_buf())
}

/// Creates the config directory if missing, user-accessible only on Unix.
pub fn ensure_dirs() -> std::io::Result<()> {
    let Some(dir) = get_config_dir() else {
        return Ok(());
    };

    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700);
        builder.recursive(true);
        builder.create(dir)?;
    }

    #[cfg(not(unix))]
    {
        std::fs::create_dir_all(dir)?;
    }

    Ok(())
}
