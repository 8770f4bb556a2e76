use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entries::deserialize_entries;
use crate::error::ConfigError;

/// 断点映射策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BreakpointStrategy {
    /// 按档位序号映射（xxl → 2xl），保持顺序但不保证像素阈值
    #[default]
    Nearest,
    /// 保留 Tailwind 名称，同时要求调用方写入 Bootstrap 像素值的 `screens` 配置
    Exact,
}

/// 刻度映射的严格程度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingStrictness {
    /// 没有精确对应时使用最接近的值
    #[default]
    Approximate,
    /// 没有精确对应时报告 `InvalidModifierCombination`
    Strict,
}

/// Tailwind 颜色 + 色阶（如 blue-600；white / black 没有色阶）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorShade {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<u16>,
}

impl ColorShade {
    pub fn new(color: impl Into<String>, shade: Option<u16>) -> Self {
        Self {
            color: color.into(),
            shade,
        }
    }

    /// 同一颜色的另一个色阶；无色阶的颜色返回 None
    pub fn with_shade(&self, shade: u16) -> Option<Self> {
        self.shade.map(|_| Self::new(self.color.clone(), Some(shade)))
    }
}

impl fmt::Display for ColorShade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shade {
            Some(shade) => write!(f, "{}-{}", self.color, shade),
            None => f.write_str(&self.color),
        }
    }
}

/// 转换配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawOptions")]
pub struct ConvertOptions {
    pub breakpoint_strategy: BreakpointStrategy,
    /// 语义颜色名 → 具体颜色，优先于内置颜色表
    pub color_overrides: IndexMap<String, ColorShade>,
    pub spacing_strictness: SpacingStrictness,
}

impl ConvertOptions {
    /// 从 JSON 字符串加载配置
    ///
    /// JSON 格式示例：
    /// ```json
    /// {
    ///   "breakpointStrategy": "exact",
    ///   "colorOverrides": { "primary": { "color": "indigo", "shade": 600 } },
    ///   "spacingStrictness": "strict"
    /// }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let raw: RawOptions = serde_json::from_str(json_str)?;
        Self::try_from(raw)
    }

    pub fn with_breakpoint_strategy(mut self, strategy: BreakpointStrategy) -> Self {
        self.breakpoint_strategy = strategy;
        self
    }

    pub fn with_spacing_strictness(mut self, strictness: SpacingStrictness) -> Self {
        self.spacing_strictness = strictness;
        self
    }

    /// 添加颜色覆盖（builder 模式），重复的 key 会被拒绝
    pub fn with_color_override(
        mut self,
        name: impl Into<String>,
        color: ColorShade,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        validate_color_entry(&name, &color)?;
        if self.color_overrides.contains_key(&name) {
            return Err(ConfigError::DuplicateColor(name));
        }
        self.color_overrides.insert(name, color);
        Ok(self)
    }
}

/// 反序列化中间形态：颜色覆盖保留重复项，交给 `TryFrom` 报错
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    breakpoint_strategy: BreakpointStrategy,
    #[serde(default, deserialize_with = "deserialize_entries")]
    color_overrides: Vec<(String, ColorShade)>,
    #[serde(default)]
    spacing_strictness: SpacingStrictness,
}

impl TryFrom<RawOptions> for ConvertOptions {
    type Error = ConfigError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        let mut options = ConvertOptions {
            breakpoint_strategy: raw.breakpoint_strategy,
            color_overrides: IndexMap::new(),
            spacing_strictness: raw.spacing_strictness,
        };
        for (name, color) in raw.color_overrides {
            options = options.with_color_override(name, color)?;
        }
        Ok(options)
    }
}

fn validate_color_entry(name: &str, color: &ColorShade) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyKey("colorOverrides"));
    }
    if color.color.is_empty() || color.color.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidColor {
            name: name.to_string(),
            reason: format!("'{}' is not a Tailwind color name", color.color),
        });
    }
    Ok(())
}
