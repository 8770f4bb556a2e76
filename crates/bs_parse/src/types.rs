use crosswind_core::{BootstrapBreakpoint, RawToken};
use serde::{Deserialize, Serialize};

/// 可识别的状态后缀
///
/// Bootstrap 5.3 只生成 `-hover`（`link-offset-2-hover`）；`-focus` 也会被拆出来，
/// 以便查找阶段报告为无效组合，而不是当成未知值
pub const STATE_SUFFIXES: [&str; 2] = ["hover", "focus"];

/// Bootstrap 实际生成的状态后缀
pub const HOVER_STATE: &str = "hover";

/// 解析后的 Bootstrap class 表示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedClass {
    /// 原始 token
    pub raw: RawToken,

    /// 响应式中缀（如 `d-md-none` 中的 md）
    pub breakpoint: Option<BootstrapBreakpoint>,

    /// 交互状态（如 hover），按出现顺序，不重复
    pub pseudo_modifiers: Vec<String>,

    /// 前导 `!`
    pub important: bool,

    /// 工具类词干（如 d, m, justify-content）
    pub base_utility: String,

    /// 值部分（如 none, 3, between）
    pub value_suffix: Option<String>,
}

impl ParsedClass {
    /// 创建一个只有词干的 ParsedClass
    pub fn new(raw: RawToken, base_utility: impl Into<String>) -> Self {
        Self {
            raw,
            breakpoint: None,
            pseudo_modifiers: Vec::new(),
            important: false,
            base_utility: base_utility.into(),
            value_suffix: None,
        }
    }

    /// 整个 token 作为词干（未匹配到任何已注册词干时）
    pub fn unparsed(raw: RawToken) -> Self {
        let base = raw.text.clone();
        Self::new(raw, base)
    }

    /// 设置断点
    pub fn with_breakpoint(mut self, breakpoint: BootstrapBreakpoint) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }

    /// 添加交互状态，已存在时忽略
    pub fn with_pseudo(mut self, pseudo: impl Into<String>) -> Self {
        let pseudo = pseudo.into();
        if !self.pseudo_modifiers.contains(&pseudo) {
            self.pseudo_modifiers.push(pseudo);
        }
        self
    }

    /// 设置值
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = Some(suffix.into());
        self
    }

    /// 设置重要性
    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// 去掉断点和状态后的工具类名（如 `d-md-none` → `d-none`），用于规则查找
    pub fn utility_name(&self) -> String {
        match &self.value_suffix {
            Some(suffix) => format!("{}-{}", self.base_utility, suffix),
            None => self.base_utility.clone(),
        }
    }

    /// 按 Bootstrap 语法重新拼出 class 字符串
    pub fn to_normalized_string(&self) -> String {
        let mut result = String::new();

        if self.important {
            result.push('!');
        }

        result.push_str(&self.base_utility);

        if let Some(bp) = self.breakpoint {
            result.push('-');
            result.push_str(bp.as_str());
        }

        if let Some(suffix) = &self.value_suffix {
            result.push('-');
            result.push_str(suffix);
        }

        for pseudo in &self.pseudo_modifiers {
            result.push('-');
            result.push_str(pseudo);
        }

        result
    }
}
