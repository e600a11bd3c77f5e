pub mod app_loop;
pub mod navigation;
pub mod params;
pub mod seed;
pub mod viewer_settings;

pub const APP_NAME: &str = "Procedural Generation";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}
