/// Operation name constants, shared by routes, CLI parsing and metric labels

pub const ADD_OP: &str = "add";
pub const SUBTRACT_OP: &str = "subtract";
pub const MULTIPLY_OP: &str = "multiply";
pub const DIVIDE_OP: &str = "divide";

// Server defaults (overridable through config.toml, env or CLI)
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_LOG_DIRECTIVE: &str = "web_calculator=info";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "calculator.log";

// Environment overrides
pub const ENV_HOST: &str = "CALC_HOST";
pub const ENV_PORT: &str = "CALC_PORT";
pub const ENV_LOG_LEVEL: &str = "CALC_LOG_LEVEL";
pub const ENV_METRICS_ENABLED: &str = "CALC_METRICS_ENABLED";

/// Get all supported operation names
pub fn get_supported_operations() -> Vec<&'static str> {
    vec![ADD_OP, SUBTRACT_OP, MULTIPLY_OP, DIVIDE_OP]
}
