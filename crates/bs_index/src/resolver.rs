use crosswind_bs_parse::{ParsedClass, HOVER_STATE};
use crosswind_core::{ColorShade, ConvertOptions, SpacingStrictness, WarningKind};
use serde::{Deserialize, Serialize};

use crate::rule::{MappingRule, OutputTemplate, RuleKind, DEFAULT_STEP};
use crate::tables::{MappingTables, RuleMatch};

/// 栅格词干：依赖兄弟元素数量，单个 token 无法转换
const GRID_STEMS: [&str; 7] = ["row", "col", "row-cols", "offset", "g", "gx", "gy"];

/// `container-{bp}` 在断点以下仍保留内边距，无法整体加断点前缀
const CONTAINER_STEM: &str = "container";

/// 颜色色调后缀（Bootstrap 5.3 的 `-subtle` / `-emphasis`）
const COLOR_TONES: [(&str, u16); 2] = [("-subtle", 100), ("-emphasis", 800)];

/// 单个 token 的查找结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Resolution {
    /// 命中规则，得到不带断点 / 状态前缀的 Tailwind 类
    Mapped {
        kind: RuleKind,
        classes: Vec<String>,
        /// 同优先级的其他候选规则（已按注册顺序取第一个）
        ambiguity: Option<String>,
    },
    /// 原样输出并记录警告
    Passthrough { kind: WarningKind, message: String },
}

impl Resolution {
    fn invalid(message: String) -> Self {
        Self::Passthrough {
            kind: WarningKind::InvalidModifierCombination,
            message,
        }
    }

    fn unrecognized(message: String) -> Self {
        Self::Passthrough {
            kind: WarningKind::UnrecognizedToken,
            message,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped { .. })
    }
}

/// 规则不产出结果的原因
#[derive(Debug)]
enum Miss {
    /// 规则不适用，继续尝试其他规则
    NotApplicable,
    /// 规则适用但值非法
    Invalid(String),
}

/// 为解析后的 class 查找映射
///
/// 查找顺序：
/// 1. 完整类名（`rounded-circle`），再逐段截短值部分（`border-primary-subtle` → `border`）
/// 2. 同一 key 在多张规则表中命中时按优先级排序，同优先级取先注册的
/// 3. 都不命中时原样输出
///
/// 纯函数，不修改任何状态
pub fn resolve(
    parsed: &ParsedClass,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Resolution {
    if let Some(invalid) = check_modifiers(parsed, tables) {
        tracing::debug!(token = %parsed.raw.text, "invalid modifier combination");
        return invalid;
    }

    if parsed.base_utility == CONTAINER_STEM && parsed.breakpoint.is_some() {
        tracing::debug!(token = %parsed.raw.text, "responsive container left unchanged");
        return Resolution::unrecognized(format!(
            "Responsive container '{}' keeps its padding below the breakpoint and is left unchanged",
            parsed.raw.text
        ));
    }

    let mut failure: Option<String> = None;

    for (key, remainder) in candidate_keys(parsed) {
        let mut matches = tables.lookup(&key);
        if matches.is_empty() {
            continue;
        }
        // 稳定排序：同优先级保持注册顺序
        matches.sort_by(|a, b| b.rule.priority.cmp(&a.rule.priority));

        let mut winner: Option<(RuleMatch<'_>, Vec<String>)> = None;
        let mut contenders: Vec<&str> = Vec::new();

        for candidate in &matches {
            if let Some((first, _)) = &winner {
                if candidate.rule.priority < first.rule.priority {
                    break;
                }
            }
            match apply_rule(candidate.rule, &key, remainder, tables, options) {
                Ok(classes) if winner.is_none() => winner = Some((*candidate, classes)),
                Ok(_) => contenders.push(candidate.table),
                Err(Miss::Invalid(message)) => {
                    if winner.is_none() && failure.is_none() {
                        failure = Some(message);
                    }
                }
                Err(Miss::NotApplicable) => {}
            }
        }

        if let Some((first, classes)) = winner {
            if let (Some(bp), false) = (parsed.breakpoint, first.rule.responsive) {
                tracing::debug!(token = %parsed.raw.text, key = %key, "breakpoint on fixed utility");
                return Resolution::invalid(format!(
                    "'{}' has no responsive variants, '{}' breakpoint is not allowed",
                    key, bp
                ));
            }
            let ambiguity = (!contenders.is_empty()).then(|| {
                tracing::warn!(
                    token = %parsed.raw.text,
                    key = %key,
                    table = first.table,
                    others = ?contenders,
                    "ambiguous mapping, first registered rule wins"
                );
                format!(
                    "'{}' is mapped by rule tables '{}' and '{}' with equal priority; using '{}'",
                    key,
                    first.table,
                    contenders.join("', '"),
                    first.table
                )
            });
            return Resolution::Mapped {
                kind: first.rule.kind,
                classes,
                ambiguity,
            };
        }
    }

    if let Some(message) = failure {
        tracing::debug!(token = %parsed.raw.text, %message, "invalid value");
        return Resolution::invalid(message);
    }

    if GRID_STEMS.contains(&parsed.base_utility.as_str()) {
        tracing::debug!(token = %parsed.raw.text, "grid class left unchanged");
        return Resolution::unrecognized(format!(
            "Grid class '{}' depends on sibling columns and is left unchanged",
            parsed.raw.text
        ));
    }

    tracing::debug!(token = %parsed.raw.text, "unrecognized class");
    Resolution::unrecognized(format!("Unknown class: {}", parsed.raw.text))
}

/// 断点 / 状态后缀是否被该词干支持
fn check_modifiers(parsed: &ParsedClass, tables: &MappingTables) -> Option<Resolution> {
    let flags = tables
        .vocabulary()
        .get(&parsed.base_utility)
        .map(|stem| stem.flags)
        .unwrap_or_default();

    if let Some(bp) = parsed.breakpoint {
        if !flags.responsive {
            return Some(Resolution::invalid(format!(
                "'{}' has no responsive variants, '{}' breakpoint is not allowed",
                parsed.base_utility, bp
            )));
        }
    }

    if let Some(pseudo) = parsed.pseudo_modifiers.first() {
        if !flags.interactive || pseudo != HOVER_STATE {
            return Some(Resolution::invalid(format!(
                "'{}' has no '{}' state variant",
                parsed.base_utility, pseudo
            )));
        }
    }

    None
}

/// 候选 key，从长到短：(key, 剩余的值)
///
/// `border-primary-subtle` →
/// (`border-primary-subtle`, None), (`border-primary`, `subtle`), (`border`, `primary-subtle`)
fn candidate_keys(parsed: &ParsedClass) -> Vec<(String, Option<&str>)> {
    let base = &parsed.base_utility;
    let Some(suffix) = parsed.value_suffix.as_deref() else {
        return vec![(base.clone(), None)];
    };

    let mut keys = vec![(format!("{}-{}", base, suffix), None)];
    for (idx, _) in suffix.rmatch_indices('-') {
        keys.push((format!("{}-{}", base, &suffix[..idx]), Some(&suffix[idx + 1..])));
    }
    keys.push((base.clone(), Some(suffix)));
    keys
}

fn apply_rule(
    rule: &MappingRule,
    key: &str,
    remainder: Option<&str>,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Result<Vec<String>, Miss> {
    if rule.kind == RuleKind::Passthrough {
        return match remainder {
            None => Ok(vec![key.to_string()]),
            Some(_) => Err(Miss::NotApplicable),
        };
    }
    if remainder.is_some() && !rule.takes_suffix() {
        return Err(Miss::NotApplicable);
    }

    rule.outputs
        .iter()
        .map(|output| render(output, key, remainder, tables, options))
        .collect()
}

fn render(
    output: &OutputTemplate,
    key: &str,
    remainder: Option<&str>,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Result<String, Miss> {
    match output {
        OutputTemplate::Literal { class } => Ok(class.clone()),
        OutputTemplate::Scaled { prefix, scale } => {
            render_scaled(prefix, scale, key, remainder, tables, options)
        }
        OutputTemplate::Color { prefix } => {
            let name = remainder.ok_or(Miss::NotApplicable)?;
            let color = semantic_color(name, tables, options).ok_or(Miss::NotApplicable)?;
            Ok(format!("{}-{}", prefix, color))
        }
        OutputTemplate::Contrast { prefix } => {
            let name = remainder.ok_or(Miss::NotApplicable)?;
            let color = contrast_color(name, tables, options).ok_or(Miss::NotApplicable)?;
            Ok(format!("{}-{}", prefix, color))
        }
    }
}

fn render_scaled(
    prefix: &str,
    scale: &str,
    key: &str,
    remainder: Option<&str>,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Result<String, Miss> {
    let step = match remainder {
        None => DEFAULT_STEP,
        Some(DEFAULT_STEP) => return Err(Miss::NotApplicable),
        Some(step) => step,
    };
    let Some(entry) = tables.scale_entry(scale, step) else {
        if looks_like_index(step) {
            return Err(Miss::Invalid(format!(
                "'{}-{}' is not on the {} scale",
                key, step, scale
            )));
        }
        return Err(Miss::NotApplicable);
    };

    let class = if entry.value.is_empty() {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, entry.value)
    };

    if !entry.exact && options.spacing_strictness == SpacingStrictness::Strict {
        return Err(Miss::Invalid(format!(
            "'{}' only approximates the Bootstrap {} value '{}'",
            class, scale, step
        )));
    }

    Ok(if entry.negative {
        format!("-{}", class)
    } else {
        class
    })
}

/// 刻度序号：纯数字或负值写法 `n3`
fn looks_like_index(value: &str) -> bool {
    let digits = value.strip_prefix('n').unwrap_or(value);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// 语义颜色名 → 具体颜色；`color_overrides` 优先于颜色表
fn semantic_color(
    name: &str,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Option<ColorShade> {
    let lookup = |name: &str| {
        options
            .color_overrides
            .get(name)
            .or_else(|| tables.color(name))
            .cloned()
    };

    lookup(name).or_else(|| {
        COLOR_TONES.iter().find_map(|(suffix, shade)| {
            let base = name.strip_suffix(suffix)?;
            lookup(base)?.with_shade(*shade)
        })
    })
}

/// 与语义颜色搭配的前景色
///
/// 被覆盖的颜色不再使用内置对比色表，按色阶推导
fn contrast_color(
    name: &str,
    tables: &MappingTables,
    options: &ConvertOptions,
) -> Option<ColorShade> {
    if !options.color_overrides.contains_key(name) {
        if let Some(contrast) = tables.contrast(name) {
            return Some(contrast.clone());
        }
    }

    let color = semantic_color(name, tables, options)?;
    let light = match color.shade {
        Some(shade) => shade < 500,
        None => color.color == "white",
    };
    Some(if light {
        ColorShade::new("black", None)
    } else {
        ColorShade::new("white", None)
    })
}
