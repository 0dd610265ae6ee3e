/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // Logging
    pub const DEFAULT_LOG_FILTER: &'static str = "particle_report=warn";

    // Demo scenario: video card saved to a file
    pub const DEMO_VIDEO_CARD_MODEL: &'static str = "NVIDIA GeForce RTX 2070 Super";
    pub const DEMO_VIDEO_CARD_MEMORY_GB: u32 = 8;
    pub const DEMO_VIDEO_CARD_CUDA_CORES: u32 = 2560;

    // Demo scenario: hard drive printed to the console
    pub const DEMO_HARD_DRIVE_MODEL: &'static str = "Seagate Barracuda";
    pub const DEMO_HARD_DRIVE_CAPACITY_GB: u32 = 2000;

    // Printed between demo scenarios
    pub const SCENARIO_SEPARATOR: &'static str = "\n\n";
}
