// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    validation: ValidationLimits,
    descriptors: DescriptorLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ValidationLimits {
    max_bit_list_capacity: usize,
    max_range_length: usize,
}

#[derive(serde::Deserialize)]
struct DescriptorLimits {
    max_table_entries: usize,
    max_name_length: usize,
    max_nesting_depth: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PARAM_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=PARAM_CONFIG_DIR");

    let profile = env::var("PARAM_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("PARAM_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of the param_engine directory
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    // A bitmap string is allocated per bit_list value
    const ABSOLUTE_MAX_BIT_LIST_CAPACITY: usize = 1 << 20;

    if config.validation.max_bit_list_capacity == 0 {
        panic!("max_bit_list_capacity must be at least 1");
    }

    if config.validation.max_bit_list_capacity > ABSOLUTE_MAX_BIT_LIST_CAPACITY {
        panic!("max_bit_list_capacity exceeds absolute maximum");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!("log_buffer_size must be between 100 and 100000");
    }

    if profile == "production" && config.descriptors.max_nesting_depth > 16 {
        panic!("PRODUCTION: max_nesting_depth too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod validation {{
        pub const MAX_BIT_LIST_CAPACITY: usize = {};
        pub const MAX_RANGE_LENGTH: usize = {};
    }}

    pub mod descriptors {{
        pub const MAX_TABLE_ENTRIES: usize = {};
        pub const MAX_NAME_LENGTH: usize = {};
        pub const MAX_NESTING_DEPTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Validation
        config.validation.max_bit_list_capacity,
        config.validation.max_range_length,
        // Descriptors
        config.descriptors.max_table_entries,
        config.descriptors.max_name_length,
        config.descriptors.max_nesting_depth,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
