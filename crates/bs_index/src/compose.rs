use crosswind_bs_parse::ParsedClass;
use crosswind_core::{ConversionResult, Warning, WarningKind};

use crate::breakpoint::{custom_screens_table, RemappedBreakpoint};
use crate::resolver::Resolution;

/// 单个 token 在组合前的全部信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub parsed: ParsedClass,
    /// 重映射后的断点
    pub screen: Option<RemappedBreakpoint>,
    pub resolution: Resolution,
}

/// 按源 token 顺序拼出最终结果
///
/// - 组合规则的多个输出保持连续，位于源 token 的位置
/// - 不去重，不处理不同 token 之间的冲突
/// - 未转换的 token 原样输出，警告按源顺序排列
pub fn compose(tokens: Vec<ResolvedToken>) -> ConversionResult {
    let mut output_classes = Vec::with_capacity(tokens.len());
    let mut warnings = Vec::new();
    let mut needs_custom_screens = false;

    for token in tokens {
        match token.resolution {
            Resolution::Mapped {
                classes, ambiguity, ..
            } => {
                needs_custom_screens |= token.screen.is_some_and(|s| s.requires_custom_screens);
                let prefix = variant_prefix(&token.parsed, token.screen);
                let important = token.parsed.important;
                output_classes.extend(
                    classes
                        .into_iter()
                        .map(|class| prefixed_class(&prefix, &class, important)),
                );
                if let Some(message) = ambiguity {
                    warnings.push(Warning::new(
                        token.parsed.raw,
                        WarningKind::AmbiguousMapping,
                        message,
                    ));
                }
            }
            Resolution::Passthrough { kind, message } => {
                output_classes.push(token.parsed.raw.text.clone());
                warnings.push(Warning::new(token.parsed.raw, kind, message));
            }
        }
    }

    ConversionResult {
        output_classes,
        warnings,
        custom_screens: needs_custom_screens.then(custom_screens_table),
    }
}

/// 拼上变体前缀；`!` 放在输出类自带的变体之后（`after:!absolute`）
fn prefixed_class(prefix: &str, class: &str, important: bool) -> String {
    if !important {
        return format!("{}{}", prefix, class);
    }
    let (variants, utility) = class.split_at(utility_start(class));
    format!("{}{}!{}", prefix, variants, utility)
}

/// 工具类本体的起始位置：方括号外最后一个 `:` 之后
fn utility_start(class: &str) -> usize {
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in class.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => start = idx + 1,
            _ => {}
        }
    }
    start
}

/// `md:hover:` 形式的变体前缀：断点在外层，状态在内层
fn variant_prefix(parsed: &ParsedClass, screen: Option<RemappedBreakpoint>) -> String {
    let mut prefix = String::new();
    if let Some(screen) = screen {
        prefix.push_str(screen.screen.as_str());
        prefix.push(':');
    }
    for pseudo in &parsed.pseudo_modifiers {
        prefix.push_str(pseudo);
        prefix.push(':');
    }
    prefix
}
