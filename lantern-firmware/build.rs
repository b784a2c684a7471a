//! Build script for lantern-firmware
//!
//! - Stages memory.x and the RP2040 linker arguments
//! - Validates lantern.toml and compiles it into the image

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lantern_core::config::{LanternConfig, TimingConfig};

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate lantern.toml
fn load_config() -> LanternConfig {
    // Re-run if lantern.toml changes
    println!("cargo:rerun-if-changed=lantern.toml");

    let config_path = Path::new("lantern.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lantern.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a lantern.toml configuration file.        ║\n\
            ║  Please create one in the lantern-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read lantern.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse straight into the firmware's config types
    let config: LanternConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid lantern.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timing in lantern.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!(
        "cargo:warning=lantern.toml validated successfully ({} ms nominal session)",
        config.timing.nominal_session_ms()
    );
    config
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `$OUT_DIR/lantern_config.rs` with the validated configuration
fn write_config(config: &LanternConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("lantern_config.rs")).unwrap();
    f.write_all(render_config(config).as_bytes()).unwrap();
}

/// Render the configuration as a Rust constant
fn render_config(config: &LanternConfig) -> String {
    let timing = match config.timing {
        TimingConfig::TimeInterpolated(t) => format!(
            "TimingConfig::TimeInterpolated(TimeConfig {{\n        \
             debounce_ms: {},\n        \
             charge_ms: {},\n        \
             discharge_ms: {},\n        \
             on_ms: {},\n    \
             }})",
            t.debounce_ms, t.charge_ms, t.discharge_ms, t.on_ms
        ),
        TimingConfig::StepInterpolated(s) => format!(
            "TimingConfig::StepInterpolated(StepConfig {{\n        \
             charge_steps: {},\n        \
             discharge_steps: {},\n        \
             charge_delay_ms: {},\n        \
             discharge_delay_ms: {},\n        \
             loops: {},\n    \
             }})",
            s.charge_steps, s.discharge_steps, s.charge_delay_ms, s.discharge_delay_ms, s.loops
        ),
    };

    format!(
        "// Generated from lantern.toml by build.rs\n\
         \n\
         #[allow(unused_imports)]\n\
         use lantern_core::config::{{\n    \
         LanternConfig, LightConfig, StepConfig, TimeConfig, TimingConfig, WakeConfig, WakeTrigger,\n\
         }};\n\
         \n\
         /// Configuration compiled in from lantern.toml\n\
         pub const LANTERN_CONFIG: LanternConfig = LanternConfig {{\n    \
         timing: {timing},\n    \
         wake: WakeConfig {{\n        \
         trigger: WakeTrigger::{trigger:?},\n        \
         pull_up: {pull_up},\n    \
         }},\n    \
         interior: LightConfig {{\n        \
         active_low: {active_low},\n    \
         }},\n\
         }};\n",
        timing = timing,
        trigger = config.wake.trigger,
        pull_up = config.wake.pull_up,
        active_low = config.interior.active_low,
    )
}
