//! # 测试配置样例

/// 只设置端口，`rate-limit` 显式为 0，不含 `[bot]`
pub const MINIMAL_CONFIG: &str = r#"
port = 8080
rate-limit = 0
"#;

/// 完整配置，含自定义 bot 映射
pub const CUSTOM_BOTS_CONFIG: &str = r#"
port = 3800
tokens = ["caller-token-1", "caller-token-2"]
access-tokens = ["poe-access-token"]
gateway = "https://gateway.example.com/api"
simulate-roles = 1
rate-limit = 30
cool-down = 5
timeout = 120

[bot]
"claude-3-opus" = "Claude-3-Opus"
"gpt-4o" = "GPT-4o"
"#;

/// 语法错误的配置
pub const MALFORMED_CONFIG: &str = r#"
port = 8080
[bot
"gpt-4" = "GPT-4"
"#;
