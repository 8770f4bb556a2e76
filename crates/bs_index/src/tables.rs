use crosswind_bs_parse::{StemFlags, UtilityVocabulary};
use crosswind_core::{ColorShade, ConfigError};
use indexmap::IndexMap;

use crate::plugin_map::bootstrap_rule_tables;
use crate::rule::{MappingRule, RuleTable, ScaleEntry, ScaleTable};
use crate::value_map::{builtin_colors, builtin_contrast, builtin_scales};

/// 某个 key 在某张规则表中的命中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    pub table: &'t str,
    pub rule: &'t MappingRule,
}

/// 转换所需的全部只读数据
///
/// 构建一次，之后以引用传入转换流程；构建完成后不再修改
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    vocabulary: UtilityVocabulary,
    rule_tables: Vec<RuleTable>,
    scales: IndexMap<String, ScaleTable>,
    colors: IndexMap<String, ColorShade>,
    contrast: IndexMap<String, ColorShade>,
}

impl MappingTables {
    /// 空表（没有词干、规则和颜色）
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bootstrap 5.3 → Tailwind 3.4 内置映射
    pub fn bootstrap() -> Result<Self, ConfigError> {
        let mut tables = Self::empty().with_vocabulary(UtilityVocabulary::bootstrap());

        for (name, scale) in builtin_scales() {
            tables = tables.with_scale(name, scale)?;
        }
        for (name, color) in builtin_colors() {
            tables = tables.with_color(name, color)?;
        }
        for (name, color) in builtin_contrast() {
            tables = tables.with_contrast(name, color);
        }
        for table in bootstrap_rule_tables()? {
            tables = tables.with_rule_table(table)?;
        }

        Ok(tables)
    }

    pub fn with_vocabulary(mut self, vocabulary: UtilityVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// 添加刻度表，同名报错
    pub fn with_scale(
        mut self,
        name: impl Into<String>,
        scale: ScaleTable,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyKey("scales"));
        }
        if self.scales.contains_key(&name) {
            return Err(ConfigError::DuplicateScale(name));
        }
        self.scales.insert(name, scale);
        Ok(self)
    }

    /// 添加语义颜色，同名报错（替换颜色请用 `ConvertOptions::color_overrides`）
    pub fn with_color(
        mut self,
        name: impl Into<String>,
        color: ColorShade,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyKey("colors"));
        }
        if self.colors.contains_key(&name) {
            return Err(ConfigError::DuplicateColor(name));
        }
        self.colors.insert(name, color);
        Ok(self)
    }

    /// 设置语义颜色的对比色（覆盖已有值）
    pub fn with_contrast(mut self, name: impl Into<String>, color: ColorShade) -> Self {
        self.contrast.insert(name.into(), color);
        self
    }

    /// 追加规则表
    ///
    /// 规则引用的刻度表必须已存在；词汇表无法识别的 key 会注册为新词干，
    /// 这样扩展规则（如 `btn-primary`）能被解析器拆出来
    pub fn with_rule_table(mut self, table: RuleTable) -> Result<Self, ConfigError> {
        for rule in table.rules() {
            if let Some(scale) = rule.scales().find(|s| !self.scales.contains_key(*s)) {
                return Err(ConfigError::UnknownScale {
                    key: rule.match_base_utility.clone(),
                    scale: scale.to_string(),
                });
            }
        }

        let mut registered = 0;
        for rule in table.rules() {
            if self.vocabulary.longest_match(&rule.match_base_utility).is_none() {
                self.vocabulary
                    .register(rule.match_base_utility.as_str(), StemFlags::PLAIN);
                registered += 1;
            }
        }

        tracing::debug!(
            table = table.name(),
            rules = table.len(),
            new_stems = registered,
            "rule table registered"
        );

        self.rule_tables.push(table);
        Ok(self)
    }

    pub fn vocabulary(&self) -> &UtilityVocabulary {
        &self.vocabulary
    }

    pub fn rule_tables(&self) -> &[RuleTable] {
        &self.rule_tables
    }

    /// 所有规则表中 key 的命中，按注册顺序
    pub fn lookup(&self, key: &str) -> Vec<RuleMatch<'_>> {
        self.rule_tables
            .iter()
            .filter_map(|table| {
                table.get(key).map(|rule| RuleMatch {
                    table: table.name(),
                    rule,
                })
            })
            .collect()
    }

    pub fn scale(&self, name: &str) -> Option<&ScaleTable> {
        self.scales.get(name)
    }

    pub fn scale_entry(&self, scale: &str, key: &str) -> Option<&ScaleEntry> {
        self.scales.get(scale).and_then(|table| table.get(key))
    }

    pub fn color(&self, name: &str) -> Option<&ColorShade> {
        self.colors.get(name)
    }

    pub fn contrast(&self, name: &str) -> Option<&ColorShade> {
        self.contrast.get(name)
    }

    /// 规则总数
    pub fn rule_count(&self) -> usize {
        self.rule_tables.iter().map(RuleTable::len).sum()
    }
}
