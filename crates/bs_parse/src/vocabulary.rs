use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 词干属性
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemFlags {
    /// Bootstrap 为该工具类生成了响应式变体（`{stem}-{bp}-{value}`）
    pub responsive: bool,
    /// 接受 `-hover` 状态后缀
    pub interactive: bool,
}

impl StemFlags {
    pub const PLAIN: StemFlags = StemFlags {
        responsive: false,
        interactive: false,
    };
    pub const RESPONSIVE: StemFlags = StemFlags {
        responsive: true,
        interactive: false,
    };
    pub const INTERACTIVE: StemFlags = StemFlags {
        responsive: false,
        interactive: true,
    };

    fn union(self, other: StemFlags) -> StemFlags {
        StemFlags {
            responsive: self.responsive || other.responsive,
            interactive: self.interactive || other.interactive,
        }
    }
}

/// 已注册的工具类词干
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stem {
    pub name: String,
    pub flags: StemFlags,
}

/// Bootstrap 5.3 工具类词干
///
/// 只登记词干本身，值由映射表决定；栅格类（col / row-cols / g）也在这里，
/// 这样 `col-lg-4` 之类能被正确拆出断点
static BOOTSTRAP_STEMS: phf::Map<&'static str, StemFlags> = phf_map! {
    // Display / flex
    "d" => StemFlags::RESPONSIVE,
    "flex" => StemFlags::RESPONSIVE,
    "justify-content" => StemFlags::RESPONSIVE,
    "align-items" => StemFlags::RESPONSIVE,
    "align-content" => StemFlags::RESPONSIVE,
    "align-self" => StemFlags::RESPONSIVE,
    "align" => StemFlags::PLAIN,
    "order" => StemFlags::RESPONSIVE,
    "float" => StemFlags::RESPONSIVE,
    "object-fit" => StemFlags::RESPONSIVE,

    // Spacing (间距)
    "m" => StemFlags::RESPONSIVE,
    "mt" => StemFlags::RESPONSIVE,
    "mb" => StemFlags::RESPONSIVE,
    "ms" => StemFlags::RESPONSIVE,
    "me" => StemFlags::RESPONSIVE,
    "mx" => StemFlags::RESPONSIVE,
    "my" => StemFlags::RESPONSIVE,
    "p" => StemFlags::RESPONSIVE,
    "pt" => StemFlags::RESPONSIVE,
    "pb" => StemFlags::RESPONSIVE,
    "ps" => StemFlags::RESPONSIVE,
    "pe" => StemFlags::RESPONSIVE,
    "px" => StemFlags::RESPONSIVE,
    "py" => StemFlags::RESPONSIVE,
    "gap" => StemFlags::RESPONSIVE,
    "row-gap" => StemFlags::RESPONSIVE,
    "column-gap" => StemFlags::RESPONSIVE,

    // Grid（需要兄弟元素上下文，不做转换）
    "container" => StemFlags::RESPONSIVE,
    "row" => StemFlags::PLAIN,
    "col" => StemFlags::RESPONSIVE,
    "row-cols" => StemFlags::RESPONSIVE,
    "offset" => StemFlags::RESPONSIVE,
    "g" => StemFlags::RESPONSIVE,
    "gx" => StemFlags::RESPONSIVE,
    "gy" => StemFlags::RESPONSIVE,

    // Typography (排版)
    "text" => StemFlags::RESPONSIVE,
    "text-bg" => StemFlags::PLAIN,
    "text-opacity" => StemFlags::PLAIN,
    "text-decoration" => StemFlags::PLAIN,
    "fw" => StemFlags::PLAIN,
    "fst" => StemFlags::PLAIN,
    "fs" => StemFlags::PLAIN,
    "lh" => StemFlags::PLAIN,
    "font-monospace" => StemFlags::PLAIN,
    "lead" => StemFlags::PLAIN,
    "list-unstyled" => StemFlags::PLAIN,

    // Links
    "link" => StemFlags::PLAIN,
    "link-offset" => StemFlags::INTERACTIVE,
    "link-opacity" => StemFlags::INTERACTIVE,
    "link-underline" => StemFlags::PLAIN,
    "link-underline-opacity" => StemFlags::INTERACTIVE,

    // Background / borders
    "bg" => StemFlags::PLAIN,
    "bg-opacity" => StemFlags::PLAIN,
    "border" => StemFlags::PLAIN,
    "border-top" => StemFlags::PLAIN,
    "border-bottom" => StemFlags::PLAIN,
    "border-start" => StemFlags::PLAIN,
    "border-end" => StemFlags::PLAIN,
    "border-opacity" => StemFlags::PLAIN,
    "rounded" => StemFlags::PLAIN,
    "rounded-top" => StemFlags::PLAIN,
    "rounded-bottom" => StemFlags::PLAIN,
    "rounded-start" => StemFlags::PLAIN,
    "rounded-end" => StemFlags::PLAIN,

    // Sizing (尺寸)
    "w" => StemFlags::PLAIN,
    "h" => StemFlags::PLAIN,
    "mw" => StemFlags::PLAIN,
    "mh" => StemFlags::PLAIN,
    "vw" => StemFlags::PLAIN,
    "vh" => StemFlags::PLAIN,
    "min-vw" => StemFlags::PLAIN,
    "min-vh" => StemFlags::PLAIN,

    // Position (定位)
    "position" => StemFlags::PLAIN,
    "top" => StemFlags::PLAIN,
    "bottom" => StemFlags::PLAIN,
    "start" => StemFlags::PLAIN,
    "end" => StemFlags::PLAIN,
    "translate-middle" => StemFlags::PLAIN,
    "fixed" => StemFlags::PLAIN,
    "sticky" => StemFlags::RESPONSIVE,
    "z" => StemFlags::PLAIN,

    // Effects / misc
    "shadow" => StemFlags::PLAIN,
    "opacity" => StemFlags::PLAIN,
    "overflow" => StemFlags::PLAIN,
    "overflow-x" => StemFlags::PLAIN,
    "overflow-y" => StemFlags::PLAIN,
    "visible" => StemFlags::PLAIN,
    "invisible" => StemFlags::PLAIN,
    "visually-hidden" => StemFlags::PLAIN,
    "user-select" => StemFlags::PLAIN,
    "ratio" => StemFlags::PLAIN,
    "vstack" => StemFlags::PLAIN,
    "hstack" => StemFlags::PLAIN,
    "stretched-link" => StemFlags::PLAIN,
    "img-fluid" => StemFlags::PLAIN,
    "clearfix" => StemFlags::PLAIN,
};

/// 工具类词干表
///
/// 词干按长度降序保存，保证 `ps` / `px` 先于 `p` 匹配
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityVocabulary {
    stems: Vec<Stem>,
}

impl UtilityVocabulary {
    /// 创建空词汇表
    pub fn new() -> Self {
        Self { stems: Vec::new() }
    }

    /// Bootstrap 内置词汇表
    pub fn bootstrap() -> Self {
        let mut vocabulary = Self::new();
        for (name, flags) in BOOTSTRAP_STEMS.entries() {
            vocabulary.register(*name, *flags);
        }
        vocabulary
    }

    /// 注册词干；已存在时合并属性
    pub fn register(&mut self, name: impl Into<String>, flags: StemFlags) {
        let name = name.into();
        if let Some(existing) = self.stems.iter_mut().find(|s| s.name == name) {
            existing.flags = existing.flags.union(flags);
            return;
        }

        // 长度降序，同长度按字典序，保证结果与注册顺序无关
        let pos = self
            .stems
            .iter()
            .position(|s| {
                s.name.len() < name.len() || (s.name.len() == name.len() && s.name > name)
            })
            .unwrap_or(self.stems.len());
        self.stems.insert(pos, Stem { name, flags });
    }

    /// 查询词干
    pub fn get(&self, name: &str) -> Option<&Stem> {
        self.stems.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 最长匹配的词干：token 等于词干，或以 `{词干}-` 开头且后面还有内容
    pub fn longest_match(&self, token: &str) -> Option<&Stem> {
        self.stems.iter().find(|stem| stem_matches(&stem.name, token))
    }

    /// 按匹配顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Stem> {
        self.stems.iter()
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }
}

fn stem_matches(stem: &str, token: &str) -> bool {
    match token.strip_prefix(stem) {
        Some("") => true,
        Some(rest) => rest.len() > 1 && rest.starts_with('-'),
        None => false,
    }
}
