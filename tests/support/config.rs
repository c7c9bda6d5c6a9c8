use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temp file that lives as long as the handle.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("exchange-robot-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

pub fn valid_config(url: &str) -> String {
    format!(
        r#"
[telegram]
bot_token = "123456:test-token"
register_commands = false

[provider]
url = "{url}"
timeout_ms = 500
retry_max_attempts = 1

[runtime]
poll_interval_ms = 1000
scheduler_tick_ms = 1000

[logging]
level = "warn"
format = "pretty"
"#
    )
}
