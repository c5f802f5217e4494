//! Build script for joymenu-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates menu.toml and turns it into a `MenuConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use joymenu_core::config::{ConfigError, MenuConfig, MAX_VISIBLE_ROWS};

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
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
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read menu.toml, validate it, and emit `menu_config.rs` into OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=menu.toml");

    let config_path = Path::new("menu.toml");

    // A missing file means defaults
    let config = if config_path.exists() {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) => {
                panic!(
                    "\n\
                    ╔══════════════════════════════════════════════════════════════════╗\n\
                    ║  ERROR: Failed to read menu.toml                                 ║\n\
                    ║                                                                  ║\n\
                    ║  Error: {:<56} ║\n\
                    ╚══════════════════════════════════════════════════════════════════╝\n",
                    e
                );
            }
        };
        parse_config(&content)
    } else {
        println!("cargo:warning=menu.toml not found, using default menu configuration");
        MenuConfig::default()
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid menu.toml                                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(e))
        );
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("menu_config.rs"), render_config(&config)).unwrap();

    println!("cargo:warning=menu.toml validated successfully");
}

/// Parse the TOML text, stopping the build on syntax or type errors
fn parse_config(content: &str) -> MenuConfig {
    match toml::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML in menu.toml                                ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    }
}

/// Human-readable explanation of a validation failure
fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::NoVisibleRows => "visible_rows must be at least 1".to_string(),
        ConfigError::TooManyRows => {
            format!("visible_rows must be at most {}", MAX_VISIBLE_ROWS)
        }
        ConfigError::ZeroTick => "tick_ms must be at least 1".to_string(),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            // Byte slicing could split a character quoted from menu.toml
            let truncated = if line.chars().count() > 64 {
                let cut = line.char_indices().nth(61).map_or(line.len(), |(i, _)| i);
                format!("{}...", &line[..cut])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rust source for the generated constant
fn render_config(config: &MenuConfig) -> String {
    format!(
        "/// Menu configuration from menu.toml\n\
         pub const MENU_CONFIG: MenuConfig = MenuConfig {{\n\
         \x20   visible_rows: {},\n\
         \x20   tick_ms: {},\n\
         \x20   action_pause_ticks: {},\n\
         \x20   submenu_pause_ticks: {},\n\
         \x20   welcome_pause_ticks: {},\n\
         \x20   backlight_on_start: {},\n\
         }};\n",
        config.visible_rows,
        config.tick_ms,
        config.action_pause_ticks,
        config.submenu_pause_ticks,
        config.welcome_pause_ticks,
        config.backlight_on_start,
    )
}
