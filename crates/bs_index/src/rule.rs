use crosswind_core::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 规则类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    /// 一对一改名（`d-none` → `hidden`）
    Rename,
    /// 按刻度表换算数值（`mt-3` → `mt-4`）
    ScaleRemap,
    /// 一个 Bootstrap 类对应多个 Tailwind 类
    Composite,
    /// 语义颜色 → 具体色阶（`text-primary` → `text-blue-600`）
    ColorSemantic,
    /// 两边同名，原样输出
    Passthrough,
}

/// 单个输出 class 的生成方式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutputTemplate {
    /// 固定 class
    Literal { class: String },
    /// `{prefix}-{刻度值}`，刻度值为空时只输出 prefix
    Scaled { prefix: String, scale: String },
    /// `{prefix}-{颜色}`，颜色来自值部分的语义颜色名
    Color { prefix: String },
    /// `{prefix}-{对比色}`，用于 `text-bg-*` 这类同时设置前景色的工具类
    Contrast { prefix: String },
}

impl OutputTemplate {
    pub fn literal(class: impl Into<String>) -> Self {
        Self::Literal {
            class: class.into(),
        }
    }

    pub fn scaled(prefix: impl Into<String>, scale: impl Into<String>) -> Self {
        Self::Scaled {
            prefix: prefix.into(),
            scale: scale.into(),
        }
    }

    pub fn color(prefix: impl Into<String>) -> Self {
        Self::Color {
            prefix: prefix.into(),
        }
    }

    pub fn contrast(prefix: impl Into<String>) -> Self {
        Self::Contrast {
            prefix: prefix.into(),
        }
    }

    /// 是否需要从 token 的值部分取值
    pub fn consumes_suffix(&self) -> bool {
        !matches!(self, Self::Literal { .. })
    }
}

/// 一条映射规则
///
/// JSON 格式示例：
/// ```json
/// { "match": "mt", "kind": "scaleRemap",
///   "outputs": [{ "type": "scaled", "prefix": "mt", "scale": "margin" }] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    /// 匹配的工具类名：不带值的词干（`mt`）或完整类名（`d-none`）
    #[serde(rename = "match")]
    pub match_base_utility: String,
    pub kind: RuleKind,
    #[serde(default)]
    pub outputs: Vec<OutputTemplate>,
    /// 同一 key 有多条规则时，优先级高的胜出
    #[serde(default)]
    pub priority: i32,
    /// 为 false 时不接受断点中缀，即使词干是响应式的（`text-md-primary`）
    #[serde(default = "default_true")]
    pub responsive: bool,
}

impl MappingRule {
    fn with_outputs(key: impl Into<String>, kind: RuleKind, outputs: Vec<OutputTemplate>) -> Self {
        Self {
            match_base_utility: key.into(),
            kind,
            outputs,
            priority: 0,
            responsive: true,
        }
    }

    pub fn rename(key: impl Into<String>, class: impl Into<String>) -> Self {
        Self::with_outputs(key, RuleKind::Rename, vec![OutputTemplate::literal(class)])
    }

    pub fn passthrough(key: impl Into<String>) -> Self {
        Self::with_outputs(key, RuleKind::Passthrough, Vec::new())
    }

    pub fn composite(key: impl Into<String>, outputs: Vec<OutputTemplate>) -> Self {
        Self::with_outputs(key, RuleKind::Composite, outputs)
    }

    pub fn scale(
        key: impl Into<String>,
        prefix: impl Into<String>,
        scale: impl Into<String>,
    ) -> Self {
        Self::with_outputs(
            key,
            RuleKind::ScaleRemap,
            vec![OutputTemplate::scaled(prefix, scale)],
        )
    }

    pub fn color(key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::with_outputs(
            key,
            RuleKind::ColorSemantic,
            vec![OutputTemplate::color(prefix)],
        )
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 标记为没有响应式变体
    pub fn without_breakpoints(mut self) -> Self {
        self.responsive = false;
        self
    }

    /// 规则是否需要值部分（`mt` + `3`），否则只匹配完整类名
    pub fn takes_suffix(&self) -> bool {
        self.outputs.iter().any(OutputTemplate::consumes_suffix)
    }

    /// 引用的刻度表名
    pub fn scales(&self) -> impl Iterator<Item = &str> {
        self.outputs.iter().filter_map(|output| match output {
            OutputTemplate::Scaled { scale, .. } => Some(scale.as_str()),
            _ => None,
        })
    }

    /// 检查规则形状与类别是否一致
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = &self.match_base_utility;
        if key.is_empty() {
            return Err(ConfigError::EmptyKey("rule match"));
        }
        if key.contains(char::is_whitespace) {
            return Err(self.invalid("match key contains whitespace"));
        }

        let (mut literals, mut scaled, mut colors) = (0, 0, 0);
        for output in &self.outputs {
            match output {
                OutputTemplate::Literal { .. } => literals += 1,
                OutputTemplate::Scaled { .. } => scaled += 1,
                OutputTemplate::Color { .. } => colors += 1,
                OutputTemplate::Contrast { .. } => {}
            }
        }
        let total = self.outputs.len();

        match self.kind {
            RuleKind::Rename if total != 1 || literals != 1 => {
                Err(self.invalid("rename needs exactly one literal output"))
            }
            RuleKind::Composite if total < 2 => {
                Err(self.invalid("composite needs at least two outputs"))
            }
            RuleKind::Composite if scaled > 0 => {
                Err(self.invalid("composite outputs cannot use a scale"))
            }
            RuleKind::ScaleRemap if total != 1 || scaled != 1 => {
                Err(self.invalid("scaleRemap needs exactly one scaled output"))
            }
            RuleKind::ColorSemantic if total != 1 || colors != 1 => {
                Err(self.invalid("colorSemantic needs exactly one color output"))
            }
            RuleKind::Passthrough if total != 0 => {
                Err(self.invalid("passthrough cannot have outputs"))
            }
            _ => Ok(()),
        }
    }

    fn invalid(&self, reason: &str) -> ConfigError {
        ConfigError::InvalidRule {
            key: self.match_base_utility.clone(),
            reason: reason.to_string(),
        }
    }
}

/// 刻度表中的一项
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// Tailwind 侧的值；为空表示只输出前缀（`border-1` → `border`）
    pub value: String,
    /// 输出负值类（`mt-n3` → `-mt-4`）
    #[serde(default)]
    pub negative: bool,
    /// 与 Bootstrap 的像素值完全一致
    #[serde(default = "default_true")]
    pub exact: bool,
}

fn default_true() -> bool {
    true
}

impl ScaleEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            negative: false,
            exact: true,
        }
    }

    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    pub fn approximate(mut self) -> Self {
        self.exact = false;
        self
    }
}

/// 不带值时（`border`、`rounded`）使用的刻度项
pub const DEFAULT_STEP: &str = "DEFAULT";

/// Bootstrap 值 → Tailwind 值
pub type ScaleTable = IndexMap<String, ScaleEntry>;

/// 一组有名字的映射规则，key 不可重复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    name: String,
    rules: IndexMap<String, MappingRule>,
}

impl RuleTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: IndexMap::new(),
        }
    }

    /// 添加规则；形状不合法或 key 已存在时报错
    pub fn insert(&mut self, rule: MappingRule) -> Result<(), ConfigError> {
        rule.validate()?;
        if self.rules.contains_key(&rule.match_base_utility) {
            return Err(ConfigError::DuplicateRule {
                table: self.name.clone(),
                key: rule.match_base_utility,
            });
        }
        self.rules.insert(rule.match_base_utility.clone(), rule);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&MappingRule> {
        self.rules.get(key)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按插入顺序遍历
    pub fn rules(&self) -> impl Iterator<Item = &MappingRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
