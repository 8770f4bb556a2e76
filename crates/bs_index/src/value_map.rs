use crosswind_core::ColorShade;
use indexmap::IndexMap;
use phf::phf_map;

use crate::rule::{ScaleEntry, ScaleTable, DEFAULT_STEP};

/// 编译期刻度项，加载时转换为 [`ScaleEntry`]
#[derive(Debug, Clone, Copy)]
struct ScaleStep {
    value: &'static str,
    negative: bool,
    exact: bool,
}

impl ScaleStep {
    const fn exact(value: &'static str) -> Self {
        Self {
            value,
            negative: false,
            exact: true,
        }
    }

    const fn approx(value: &'static str) -> Self {
        Self {
            value,
            negative: false,
            exact: false,
        }
    }

    const fn negative(value: &'static str) -> Self {
        Self {
            value,
            negative: true,
            exact: true,
        }
    }

    fn to_entry(self) -> ScaleEntry {
        ScaleEntry {
            value: self.value.to_string(),
            negative: self.negative,
            exact: self.exact,
        }
    }
}

/// 间距（$spacer = 1rem）：0 / .25 / .5 / 1 / 1.5 / 3rem
static SPACING_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "0" => ScaleStep::exact("0"),
    "1" => ScaleStep::exact("1"),
    "2" => ScaleStep::exact("2"),
    "3" => ScaleStep::exact("4"),
    "4" => ScaleStep::exact("6"),
    "5" => ScaleStep::exact("12"),
};

/// 外边距：间距 + auto + 负值（`n1` ~ `n5`）
static MARGIN_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "0" => ScaleStep::exact("0"),
    "1" => ScaleStep::exact("1"),
    "2" => ScaleStep::exact("2"),
    "3" => ScaleStep::exact("4"),
    "4" => ScaleStep::exact("6"),
    "5" => ScaleStep::exact("12"),
    "auto" => ScaleStep::exact("auto"),
    "n1" => ScaleStep::negative("1"),
    "n2" => ScaleStep::negative("2"),
    "n3" => ScaleStep::negative("4"),
    "n4" => ScaleStep::negative("6"),
    "n5" => ScaleStep::negative("12"),
};

/// 边框宽度（px），`border` 本身为 1px
static BORDER_WIDTH_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "DEFAULT" => ScaleStep::exact(""),
    "0" => ScaleStep::exact("0"),
    "1" => ScaleStep::exact(""),
    "2" => ScaleStep::exact("2"),
    "3" => ScaleStep::exact("[3px]"),
    "4" => ScaleStep::exact("4"),
    "5" => ScaleStep::exact("[5px]"),
};

/// 圆角：.25 / .375 / .5 / 1 / 2rem，`rounded-5` 没有对应值
static BORDER_RADIUS_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "DEFAULT" => ScaleStep::exact("md"),
    "0" => ScaleStep::exact("none"),
    "1" => ScaleStep::exact(""),
    "2" => ScaleStep::exact("md"),
    "3" => ScaleStep::exact("lg"),
    "4" => ScaleStep::exact("2xl"),
    "5" => ScaleStep::approx("3xl"),
};

/// 字号：fs-1 ~ fs-3 在 Tailwind 中没有等值
static FONT_SIZE_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "1" => ScaleStep::approx("4xl"),
    "2" => ScaleStep::approx("3xl"),
    "3" => ScaleStep::approx("3xl"),
    "4" => ScaleStep::exact("2xl"),
    "5" => ScaleStep::exact("xl"),
    "6" => ScaleStep::exact("base"),
};

/// 行高：1 / 1.25 / 1.5 / 2
static LINE_HEIGHT_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "1" => ScaleStep::exact("none"),
    "sm" => ScaleStep::exact("tight"),
    "base" => ScaleStep::exact("normal"),
    "lg" => ScaleStep::exact("loose"),
};

static OPACITY_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "0" => ScaleStep::exact("0"),
    "10" => ScaleStep::exact("10"),
    "25" => ScaleStep::exact("25"),
    "50" => ScaleStep::exact("50"),
    "75" => ScaleStep::exact("75"),
    "100" => ScaleStep::exact("100"),
};

/// 宽高百分比
static PERCENT_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "25" => ScaleStep::exact("1/4"),
    "50" => ScaleStep::exact("1/2"),
    "75" => ScaleStep::exact("3/4"),
    "100" => ScaleStep::exact("full"),
    "auto" => ScaleStep::exact("auto"),
};

/// 定位偏移（top / bottom / start / end）
static INSET_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "0" => ScaleStep::exact("0"),
    "50" => ScaleStep::exact("1/2"),
    "100" => ScaleStep::exact("full"),
};

static ORDER_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "first" => ScaleStep::exact("first"),
    "0" => ScaleStep::exact("none"),
    "1" => ScaleStep::exact("1"),
    "2" => ScaleStep::exact("2"),
    "3" => ScaleStep::exact("3"),
    "4" => ScaleStep::exact("4"),
    "5" => ScaleStep::exact("5"),
    "last" => ScaleStep::exact("last"),
};

static Z_INDEX_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "n1" => ScaleStep::exact("[-1]"),
    "0" => ScaleStep::exact("0"),
    "1" => ScaleStep::exact("[1]"),
    "2" => ScaleStep::exact("[2]"),
    "3" => ScaleStep::exact("[3]"),
};

/// 下划线偏移：.125 / .25 / .375em，Tailwind 用 px
static LINK_OFFSET_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "1" => ScaleStep::approx("1"),
    "2" => ScaleStep::approx("2"),
    "3" => ScaleStep::approx("4"),
};

/// 下划线透明度：Tailwind 没有 decoration-opacity，用 currentColor 混合
static UNDERLINE_OPACITY_SCALE: phf::Map<&'static str, ScaleStep> = phf_map! {
    "0" => ScaleStep::exact("transparent"),
    "10" => ScaleStep::exact("[color:color-mix(in_srgb,currentColor_10%,transparent)]"),
    "25" => ScaleStep::exact("[color:color-mix(in_srgb,currentColor_25%,transparent)]"),
    "50" => ScaleStep::exact("[color:color-mix(in_srgb,currentColor_50%,transparent)]"),
    "75" => ScaleStep::exact("[color:color-mix(in_srgb,currentColor_75%,transparent)]"),
    "100" => ScaleStep::exact("current"),
};

/// 刻度表名 → 刻度表
static SCALES: &[(&str, &phf::Map<&'static str, ScaleStep>)] = &[
    ("spacing", &SPACING_SCALE),
    ("margin", &MARGIN_SCALE),
    ("border-width", &BORDER_WIDTH_SCALE),
    ("border-radius", &BORDER_RADIUS_SCALE),
    ("font-size", &FONT_SIZE_SCALE),
    ("line-height", &LINE_HEIGHT_SCALE),
    ("opacity", &OPACITY_SCALE),
    ("percent", &PERCENT_SCALE),
    ("inset", &INSET_SCALE),
    ("order", &ORDER_SCALE),
    ("z-index", &Z_INDEX_SCALE),
    ("link-offset", &LINK_OFFSET_SCALE),
    ("underline-opacity", &UNDERLINE_OPACITY_SCALE),
];

/// Bootstrap 主题色 → Tailwind 默认调色板
static COLOR_MAP: phf::Map<&'static str, (&'static str, Option<u16>)> = phf_map! {
    "primary" => ("blue", Some(600)),
    "secondary" => ("gray", Some(600)),
    "success" => ("green", Some(600)),
    "danger" => ("red", Some(600)),
    "warning" => ("yellow", Some(400)),
    "info" => ("cyan", Some(400)),
    "light" => ("gray", Some(100)),
    "dark" => ("gray", Some(900)),
    "white" => ("white", None),
    "black" => ("black", None),
    "transparent" => ("transparent", None),
};

/// `text-bg-*` 的前景色，与 Bootstrap 的 color-contrast() 结果一致
static CONTRAST_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "primary" => "white",
    "secondary" => "white",
    "success" => "white",
    "danger" => "white",
    "dark" => "white",
    "warning" => "black",
    "info" => "black",
    "light" => "black",
};

/// 内置刻度表（按数值顺序）
pub fn builtin_scales() -> IndexMap<String, ScaleTable> {
    SCALES
        .iter()
        .map(|(name, map)| {
            let mut table: ScaleTable = map
                .entries()
                .map(|(key, step)| (key.to_string(), step.to_entry()))
                .collect();
            table.sort_by(|a, _, b, _| scale_key_order(a).cmp(&scale_key_order(b)));
            (name.to_string(), table)
        })
        .collect()
}

/// 内置主题色
pub fn builtin_colors() -> IndexMap<String, ColorShade> {
    let mut colors: IndexMap<String, ColorShade> = COLOR_MAP
        .entries()
        .map(|(name, (color, shade))| (name.to_string(), ColorShade::new(*color, *shade)))
        .collect();
    colors.sort_keys();
    colors
}

/// 内置对比色
pub fn builtin_contrast() -> IndexMap<String, ColorShade> {
    let mut contrast: IndexMap<String, ColorShade> = CONTRAST_MAP
        .entries()
        .map(|(name, color)| (name.to_string(), ColorShade::new(*color, None)))
        .collect();
    contrast.sort_keys();
    contrast
}

/// 排序用：DEFAULT 最前，负值按绝对值倒序，数字按大小，其余在后
fn scale_key_order(key: &str) -> (u8, i64, &str) {
    if key == DEFAULT_STEP {
        return (0, 0, key);
    }
    if let Some(n) = key.strip_prefix('n').and_then(|n| n.parse::<i64>().ok()) {
        return (1, -n, key);
    }
    match key.parse::<i64>() {
        Ok(n) => (1, n, key),
        Err(_) => (2, 0, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(scale: &str, key: &str) -> Option<ScaleEntry> {
        builtin_scales().get(scale).and_then(|t| t.get(key)).cloned()
    }

    #[test]
    fn test_spacing_scale() {
        assert_eq!(entry("spacing", "3").unwrap().value, "4");
        assert_eq!(entry("spacing", "5").unwrap().value, "12");
        assert!(entry("spacing", "6").is_none());
        assert!(entry("spacing", "auto").is_none());
    }

    #[test]
    fn test_margin_negative() {
        let n3 = entry("margin", "n3").unwrap();
        assert_eq!(n3.value, "4");
        assert!(n3.negative);
        assert_eq!(entry("margin", "auto").unwrap().value, "auto");
    }

    #[test]
    fn test_approximate_entries() {
        assert!(!entry("font-size", "1").unwrap().exact);
        assert!(entry("font-size", "4").unwrap().exact);
        assert!(!entry("border-radius", "5").unwrap().exact);
        assert!(entry("line-height", "lg").unwrap().exact);
    }

    #[test]
    fn test_underline_opacity_scale() {
        assert_eq!(entry("underline-opacity", "0").unwrap().value, "transparent");
        assert_eq!(entry("underline-opacity", "100").unwrap().value, "current");
        assert_eq!(
            entry("underline-opacity", "25").unwrap().value,
            "[color:color-mix(in_srgb,currentColor_25%,transparent)]"
        );
    }

    #[test]
    fn test_builtin_scales_sorted() {
        let scales = builtin_scales();
        let margin: Vec<&str> = scales["margin"].keys().map(|k| k.as_str()).collect();
        assert_eq!(
            margin,
            vec!["n5", "n4", "n3", "n2", "n1", "0", "1", "2", "3", "4", "5", "auto"]
        );
        let border: Vec<&str> = scales["border-width"].keys().map(|k| k.as_str()).collect();
        assert_eq!(border[0], "DEFAULT");
    }

    #[test]
    fn test_colors() {
        let colors = builtin_colors();
        assert_eq!(colors["primary"].to_string(), "blue-600");
        assert_eq!(colors["white"].to_string(), "white");
        assert!(!colors.contains_key("purple"));
    }

    #[test]
    fn test_contrast_covers_theme_colors() {
        let contrast = builtin_contrast();
        for name in ["primary", "secondary", "success", "danger", "warning", "info", "light", "dark"] {
            assert!(contrast.contains_key(name), "missing contrast for {}", name);
        }
    }
}
