// cli/constants.rs — Program identity strings shown by `--version` and `--help`.

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "plughost";
pub const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT: &str = "Copyright (c) the plughost developers. All rights reserved.";
pub const LICENSE_NOTICE: &str = "Released under the terms of the GNU General Public License, version 2.";

/// Returns the one-line version banner, e.g. `plughost version 0.1.0`.
pub fn version_banner() -> String {
    format!("{} version {}", PROGRAM_NAME, PROGRAM_VERSION)
}
