use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointSpec;

/// 输入 class 属性中的单个 token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawToken {
    /// 原始文本（不含空白）
    pub text: String,
    /// 在输入中的序号（从 0 开始），后续所有阶段都按它排序
    pub position: usize,
}

impl RawToken {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// 单个 token 的转换问题分类
///
/// 全部是非致命的：出问题的 token 原样输出，同时记录一条警告
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// 没有任何规则匹配
    UnrecognizedToken,
    /// 同一个 key 在多张规则表中以相同优先级出现，按注册顺序取第一个
    AmbiguousMapping,
    /// 修饰符与工具类组合非法（如非响应式工具类带断点、刻度值不存在）
    InvalidModifierCombination,
}

/// 转换警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub source_token: RawToken,
    pub kind: WarningKind,
    /// 给人看的说明
    pub message: String,
}

impl Warning {
    pub fn new(source_token: RawToken, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            source_token,
            kind,
            message: message.into(),
        }
    }

    pub fn unrecognized(source_token: RawToken) -> Self {
        let message = format!("Unknown class: {}", source_token.text);
        Self::new(source_token, WarningKind::UnrecognizedToken, message)
    }
}

/// 输出：一次转换的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Tailwind 类名，按源 token 顺序排列
    pub output_classes: Vec<String>,
    /// 警告，按源 token 顺序排列
    pub warnings: Vec<Warning>,
    /// `exact` 断点策略下需要调用方写入 `screens` 配置的断点表
    pub custom_screens: Option<Vec<BreakpointSpec>>,
}

impl ConversionResult {
    /// 以单个空格连接的输出类名（可直接写回 class 属性）
    pub fn output_string(&self) -> String {
        self.output_classes.join(" ")
    }

    /// 没有任何警告
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// 指定类型的警告
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_string_joins_with_single_space() {
        let result = ConversionResult {
            output_classes: vec!["flex".to_string(), "md:hidden".to_string()],
            warnings: Vec::new(),
            custom_screens: None,
        };
        assert_eq!(result.output_string(), "flex md:hidden");
        assert!(result.is_clean());
    }

    #[test]
    fn test_warnings_of_filters_by_kind() {
        let result = ConversionResult {
            output_classes: vec!["foo".to_string(), "d-md-x".to_string()],
            warnings: vec![
                Warning::unrecognized(RawToken::new("foo", 0)),
                Warning::new(
                    RawToken::new("d-md-x", 1),
                    WarningKind::InvalidModifierCombination,
                    "bad",
                ),
            ],
            custom_screens: None,
        };

        let unknown: Vec<_> = result.warnings_of(WarningKind::UnrecognizedToken).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].source_token.position, 0);
        assert_eq!(unknown[0].message, "Unknown class: foo");
        assert!(!result.is_clean());
    }
}
