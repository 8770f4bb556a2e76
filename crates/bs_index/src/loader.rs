use crosswind_core::{deserialize_entries, ColorShade, ConfigError};
use serde::Deserialize;

use crate::rule::{MappingRule, RuleTable, ScaleEntry, ScaleTable};
use crate::tables::MappingTables;

/// 从 JSON 字符串加载一张规则表
///
/// JSON 格式示例：
/// ```json
/// [
///   { "match": "btn-primary", "kind": "composite",
///     "outputs": [
///       { "type": "literal", "class": "px-4" },
///       { "type": "literal", "class": "bg-blue-600" }
///     ] },
///   { "match": "shadow-sm", "kind": "rename",
///     "outputs": [{ "type": "literal", "class": "shadow" }], "priority": 1 }
/// ]
/// ```
///
/// 重复的 `match`、形状不合法的规则都会报错
pub fn load_rules_from_json(name: &str, json_str: &str) -> Result<RuleTable, ConfigError> {
    let rules: Vec<MappingRule> = serde_json::from_str(json_str)?;

    let mut table = RuleTable::new(name);
    for rule in rules {
        table.insert(rule)?;
    }

    Ok(table)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExtensionJson {
    #[serde(default, deserialize_with = "deserialize_entries")]
    scales: Vec<(String, ScaleJson)>,
    #[serde(default, deserialize_with = "deserialize_entries")]
    colors: Vec<(String, ColorJson)>,
    #[serde(default)]
    rules: Vec<MappingRule>,
}

#[derive(Debug, Deserialize)]
struct ScaleJson(#[serde(deserialize_with = "deserialize_entries")] Vec<(String, ScaleEntry)>);

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorJson {
    color: String,
    #[serde(default)]
    shade: Option<u16>,
    /// `text-bg-*` 使用的前景色
    #[serde(default)]
    contrast: Option<ColorShade>,
}

/// 在已有映射表上加载扩展：新刻度表、新语义颜色和一张规则表
///
/// JSON 格式示例：
/// ```json
/// {
///   "scales": { "stack": { "1": { "value": "1" }, "3": { "value": "4" } } },
///   "colors": { "brand": { "color": "violet", "shade": 600,
///                          "contrast": { "color": "white" } } },
///   "rules": [
///     { "match": "vstack-gap", "kind": "scaleRemap",
///       "outputs": [{ "type": "scaled", "prefix": "space-y", "scale": "stack" }] }
///   ]
/// }
/// ```
///
/// 规则可以引用同一文件中定义的刻度表；任何重复项都会报错
pub fn load_extension_from_json(
    tables: MappingTables,
    name: &str,
    json_str: &str,
) -> Result<MappingTables, ConfigError> {
    let extension: ExtensionJson = serde_json::from_str(json_str)?;
    let mut tables = tables;

    for (scale_name, ScaleJson(entries)) in extension.scales {
        let mut scale = ScaleTable::new();
        for (key, entry) in entries {
            if scale.contains_key(&key) {
                return Err(ConfigError::InvalidRule {
                    key,
                    reason: format!("duplicate entry in scale '{}'", scale_name),
                });
            }
            scale.insert(key, entry);
        }
        tables = tables.with_scale(scale_name, scale)?;
    }

    for (color_name, color) in extension.colors {
        if color.color.is_empty() || color.color.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidColor {
                name: color_name,
                reason: format!("'{}' is not a Tailwind color name", color.color),
            });
        }
        if let Some(contrast) = color.contrast {
            tables = tables.with_contrast(color_name.clone(), contrast);
        }
        tables = tables.with_color(color_name, ColorShade::new(color.color, color.shade))?;
    }

    let mut table = RuleTable::new(name);
    for rule in extension.rules {
        table.insert(rule)?;
    }
    if table.is_empty() {
        return Ok(tables);
    }
    tables.with_rule_table(table)
}
