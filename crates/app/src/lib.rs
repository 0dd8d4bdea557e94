pub mod ascii_canvas;
pub mod match_bootstrap;
pub mod preset_file;
pub mod seed;

pub const APP_NAME: &str = "ArenaForge";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a layout fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}
