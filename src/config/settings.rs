//! # 网关设置结构定义

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 默认监听端口
pub const DEFAULT_PORT: i64 = 3700;

/// 默认速率限制
pub const DEFAULT_RATE_LIMIT: i64 = 10;

/// 未配置 `[bot]` 时使用的内置映射：模型标识 -> 后端 bot 名称
pub const DEFAULT_BOTS: [(&str, &str); 4] = [
    ("gpt-3.5-turbo-16k", "ChatGPT-16k"),
    ("gpt-4", "GPT-4"),
    ("gpt-4-vision-preview", "GPT-4-128k"),
    ("gpt-4-turbo-preview", "Claude-3-Opus"),
];

/// 网关主配置
///
/// 启动时从 TOML 文件解析一次，补齐默认值后只读共享。所有字段都可以在文件中省略。
/// 数值字段只做类型解析，不做范围校验，负数和超出端口范围的值原样保留。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// 监听端口，0 或缺省时为 3700
    pub port: i64,
    /// 调用方使用的 bearer token
    pub tokens: Vec<String>,
    /// 另一类访问凭据，由外部鉴权组件解释
    pub access_tokens: Vec<String>,
    /// 上游网关地址（http/https）
    pub gateway: String,
    /// 角色模拟开关，外部组件使用
    pub simulate_roles: i64,
    /// 速率限制，0 或缺省时为 10
    pub rate_limit: i64,
    /// 冷却时间
    pub cool_down: i64,
    /// 超时时间
    pub timeout: i64,
    /// 模型标识 -> 后端 bot 名称，序列化时表必须排在标量之后
    pub bot: HashMap<String, String>,
}

impl Settings {
    /// 仅解析 TOML 文本，不补默认值
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 从 TOML 文本解析，并补齐默认值
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        Ok(Self::parse(content)?.apply_defaults())
    }

    /// 按固定顺序补齐默认值，各项互不影响
    #[must_use]
    pub fn apply_defaults(mut self) -> Self {
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        if self.rate_limit == 0 {
            self.rate_limit = DEFAULT_RATE_LIMIT;
        }
        // 用户给出的映射原样使用，不与内置映射合并
        if self.bot.is_empty() {
            self.bot = default_bots();
        }
        self
    }

    /// 上游网关的 WebSocket 地址
    #[must_use]
    pub fn gateway_ws_url(&self) -> String {
        to_ws_url(&self.gateway)
    }

    /// 根据模型标识查找后端 bot 名称
    #[must_use]
    pub fn bot_display_name(&self, model: &str) -> Option<&str> {
        self.bot.get(model).map(String::as_str)
    }

    /// 序列化为 TOML，用于诊断输出
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

/// 内置 bot 映射
#[must_use]
pub fn default_bots() -> HashMap<String, String> {
    DEFAULT_BOTS
        .iter()
        .map(|(model, bot)| ((*model).to_string(), (*bot).to_string()))
        .collect()
}

/// 把 http(s) 地址改写为 ws(s) 地址
///
/// 对整个字符串做两轮替换：先 `http://` -> `ws://`，再 `https://` -> `wss://`。
/// 不校验 URL 格式，也不处理路径和末尾斜杠。
#[must_use]
pub fn to_ws_url(gateway: &str) -> String {
    gateway
        .replace("http://", "ws://")
        .replace("https://", "wss://")
}
