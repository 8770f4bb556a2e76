use thiserror::Error;

/// 加载映射表 / 配置时的致命错误
///
/// 只在初始化阶段出现，转换本身不会失败
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate rule for '{key}' in rule table '{table}'")]
    DuplicateRule { table: String, key: String },

    #[error("duplicate color override '{0}'")]
    DuplicateColor(String),

    #[error("invalid rule '{key}': {reason}")]
    InvalidRule { key: String, reason: String },

    #[error("duplicate scale '{0}'")]
    DuplicateScale(String),

    #[error("rule '{key}' references unknown scale '{scale}'")]
    UnknownScale { key: String, scale: String },

    #[error("invalid color override '{name}': {reason}")]
    InvalidColor { name: String, reason: String },

    #[error("empty key in {0}")]
    EmptyKey(&'static str),
}
