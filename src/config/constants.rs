pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const CONFIG_DIR: &str = ".stagehand";
pub const CONFIG_FILE: &str = "config";
pub const AUDIT_LOG_FILE: &str = "audit_log.json";
