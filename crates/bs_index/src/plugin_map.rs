use crosswind_core::ConfigError;

use crate::rule::{MappingRule, OutputTemplate, RuleTable};

/// 内置工具类规则表名
pub const UTILITIES_TABLE: &str = "bootstrap-utilities";
/// 内置颜色规则表名
pub const COLORS_TABLE: &str = "bootstrap-colors";

/// 一对一改名：Bootstrap 完整类名 → Tailwind 类名
static RENAMES: &[(&str, &str)] = &[
    // Display
    ("d-none", "hidden"),
    ("d-inline", "inline"),
    ("d-inline-block", "inline-block"),
    ("d-block", "block"),
    ("d-grid", "grid"),
    ("d-inline-grid", "inline-grid"),
    ("d-table", "table"),
    ("d-table-row", "table-row"),
    ("d-table-cell", "table-cell"),
    ("d-flex", "flex"),
    ("d-inline-flex", "inline-flex"),

    // Flex
    ("flex-column", "flex-col"),
    ("flex-column-reverse", "flex-col-reverse"),
    ("flex-fill", "flex-auto"),
    ("flex-grow-0", "grow-0"),
    ("flex-grow-1", "grow"),
    ("flex-shrink-0", "shrink-0"),
    ("flex-shrink-1", "shrink"),
    ("justify-content-start", "justify-start"),
    ("justify-content-end", "justify-end"),
    ("justify-content-center", "justify-center"),
    ("justify-content-between", "justify-between"),
    ("justify-content-around", "justify-around"),
    ("justify-content-evenly", "justify-evenly"),
    ("align-items-start", "items-start"),
    ("align-items-end", "items-end"),
    ("align-items-center", "items-center"),
    ("align-items-baseline", "items-baseline"),
    ("align-items-stretch", "items-stretch"),
    ("align-content-start", "content-start"),
    ("align-content-end", "content-end"),
    ("align-content-center", "content-center"),
    ("align-content-between", "content-between"),
    ("align-content-around", "content-around"),
    ("align-content-stretch", "content-stretch"),
    ("align-self-auto", "self-auto"),
    ("align-self-start", "self-start"),
    ("align-self-end", "self-end"),
    ("align-self-center", "self-center"),
    ("align-self-baseline", "self-baseline"),
    ("align-self-stretch", "self-stretch"),

    // Object fit
    ("object-fit-contain", "object-contain"),
    ("object-fit-cover", "object-cover"),
    ("object-fit-fill", "object-fill"),
    ("object-fit-scale", "object-scale-down"),
    ("object-fit-none", "object-none"),

    // Typography (排版)
    ("text-decoration-none", "no-underline"),
    ("text-decoration-underline", "underline"),
    ("text-decoration-line-through", "line-through"),
    ("fw-light", "font-light"),
    ("fw-lighter", "font-extralight"),
    ("fw-normal", "font-normal"),
    ("fw-medium", "font-medium"),
    ("fw-semibold", "font-semibold"),
    ("fw-bold", "font-bold"),
    ("fw-bolder", "font-extrabold"),
    ("fst-italic", "italic"),
    ("fst-normal", "not-italic"),
    ("font-monospace", "font-mono"),

    // Background
    ("bg-body", "bg-white"),
    ("bg-body-secondary", "bg-gray-100"),
    ("bg-body-tertiary", "bg-gray-50"),

    // Borders / shadows
    ("rounded-circle", "rounded-full"),
    ("rounded-pill", "rounded-full"),
    ("shadow", "shadow-md"),
    ("shadow-lg", "shadow-xl"),

    // Sizing (尺寸)
    ("mw-100", "max-w-full"),
    ("mh-100", "max-h-full"),
    ("vw-100", "w-screen"),
    ("vh-100", "h-screen"),
    ("min-vw-100", "min-w-[100vw]"),
    ("min-vh-100", "min-h-screen"),

    // Position (定位)
    ("position-static", "static"),
    ("position-relative", "relative"),
    ("position-absolute", "absolute"),
    ("position-fixed", "fixed"),
    ("position-sticky", "sticky"),
    ("translate-middle-x", "-translate-x-1/2"),
    ("translate-middle-y", "-translate-y-1/2"),

    // Interaction
    ("visually-hidden", "sr-only"),
    ("user-select-all", "select-all"),
    ("user-select-auto", "select-auto"),
    ("user-select-none", "select-none"),
    ("pe-none", "pointer-events-none"),
    ("pe-auto", "pointer-events-auto"),
    ("link-underline", "underline"),

    // Ratio
    ("ratio-1x1", "aspect-square"),
    ("ratio-16x9", "aspect-video"),
    ("ratio-4x3", "aspect-[4/3]"),
    ("ratio-21x9", "aspect-[21/9]"),
];

/// `text` 词干下没有响应式变体的改名；只有 `text-{bp}-start|center|end` 是响应式的
static TEXT_RENAMES: &[(&str, &str)] = &[
    ("text-lowercase", "lowercase"),
    ("text-uppercase", "uppercase"),
    ("text-capitalize", "capitalize"),
    ("text-nowrap", "whitespace-nowrap"),
    ("text-wrap", "whitespace-normal"),
    ("text-break", "break-words"),
    ("text-truncate", "truncate"),
    ("text-reset", "text-inherit"),
    ("text-muted", "text-gray-500"),
    ("text-body", "text-gray-900"),
    ("text-body-secondary", "text-gray-600"),
    ("text-body-tertiary", "text-gray-500"),
    ("text-body-emphasis", "text-black"),
    ("text-white-50", "text-white/50"),
    ("text-black-50", "text-black/50"),
];

/// 两边写法相同的类
static PASSTHROUGHS: &[&str] = &[
    "text-center",
    "text-start",
    "text-end",
    "flex-row",
    "flex-row-reverse",
    "flex-wrap",
    "flex-nowrap",
    "flex-wrap-reverse",
    "float-start",
    "float-end",
    "float-none",
    "shadow-sm",
    "shadow-none",
    "visible",
    "invisible",
    "overflow-auto",
    "overflow-hidden",
    "overflow-visible",
    "overflow-scroll",
    "overflow-x-auto",
    "overflow-x-hidden",
    "overflow-x-visible",
    "overflow-x-scroll",
    "overflow-y-auto",
    "overflow-y-hidden",
    "overflow-y-visible",
    "overflow-y-scroll",
    "align-baseline",
    "align-top",
    "align-middle",
    "align-bottom",
    "align-text-top",
    "align-text-bottom",
];

/// 一个 Bootstrap 类展开为多个 Tailwind 类（输出顺序固定）
static COMPOSITES: &[(&str, &[&str])] = &[
    ("translate-middle", &["-translate-x-1/2", "-translate-y-1/2"]),
    ("vstack", &["flex", "flex-1", "flex-col", "self-stretch"]),
    ("hstack", &["flex", "flex-row", "items-center", "self-stretch"]),
    (
        "stretched-link",
        &["after:absolute", "after:inset-0", "after:z-[1]", "after:content-['']"],
    ),
    ("fixed-top", &["fixed", "top-0", "inset-x-0", "z-[1030]"]),
    ("fixed-bottom", &["fixed", "bottom-0", "inset-x-0", "z-[1030]"]),
    ("sticky-top", &["sticky", "top-0", "z-[1020]"]),
    ("sticky-bottom", &["sticky", "bottom-0", "z-[1020]"]),
    ("img-fluid", &["max-w-full", "h-auto"]),
    ("ratio", &["relative", "w-full"]),
    ("visually-hidden-focusable", &["sr-only", "focus:not-sr-only"]),
    ("clearfix", &["after:block", "after:clear-both", "after:content-['']"]),
    ("list-unstyled", &["list-none", "pl-0"]),
    ("lead", &["text-xl", "font-light"]),
    ("container", &["container", "mx-auto", "px-3"]),
    ("container-fluid", &["w-full", "mx-auto", "px-3"]),
];

/// 按刻度换算的工具类：(Bootstrap 词干, Tailwind 前缀, 刻度表)
static SCALED: &[(&str, &str, &str)] = &[
    // Spacing (间距)
    ("m", "m", "margin"),
    ("mt", "mt", "margin"),
    ("mb", "mb", "margin"),
    ("ms", "ms", "margin"),
    ("me", "me", "margin"),
    ("mx", "mx", "margin"),
    ("my", "my", "margin"),
    ("p", "p", "spacing"),
    ("pt", "pt", "spacing"),
    ("pb", "pb", "spacing"),
    ("ps", "ps", "spacing"),
    ("pe", "pe", "spacing"),
    ("px", "px", "spacing"),
    ("py", "py", "spacing"),
    ("gap", "gap", "spacing"),
    ("row-gap", "gap-y", "spacing"),
    ("column-gap", "gap-x", "spacing"),

    // Border (边框)
    ("border", "border", "border-width"),
    ("border-top", "border-t", "border-width"),
    ("border-bottom", "border-b", "border-width"),
    ("border-start", "border-s", "border-width"),
    ("border-end", "border-e", "border-width"),
    ("rounded", "rounded", "border-radius"),
    ("rounded-top", "rounded-t", "border-radius"),
    ("rounded-bottom", "rounded-b", "border-radius"),
    ("rounded-start", "rounded-s", "border-radius"),
    ("rounded-end", "rounded-e", "border-radius"),

    // Opacity
    ("opacity", "opacity", "opacity"),
    ("text-opacity", "text-opacity", "opacity"),
    ("bg-opacity", "bg-opacity", "opacity"),
    ("border-opacity", "border-opacity", "opacity"),
    ("link-opacity", "text-opacity", "opacity"),
    ("link-underline-opacity", "decoration", "underline-opacity"),

    // Typography (排版)
    ("fs", "text", "font-size"),
    ("lh", "leading", "line-height"),
    ("link-offset", "underline-offset", "link-offset"),

    // Sizing / position
    ("w", "w", "percent"),
    ("h", "h", "percent"),
    ("top", "top", "inset"),
    ("bottom", "bottom", "inset"),
    ("start", "start", "inset"),
    ("end", "end", "inset"),
    ("order", "order", "order"),
    ("z", "z", "z-index"),
];

/// 语义颜色工具类：(Bootstrap 词干, Tailwind 前缀)
static COLOR_RULES: &[(&str, &str)] = &[
    ("text", "text"),
    ("bg", "bg"),
    ("border", "border"),
    ("link", "text"),
    ("link-underline", "decoration"),
];

/// 内置规则表：工具类在前，颜色在后
///
/// 颜色工具类都没有响应式变体
pub fn bootstrap_rule_tables() -> Result<Vec<RuleTable>, ConfigError> {
    Ok(vec![utilities_table()?, colors_table()?])
}

fn utilities_table() -> Result<RuleTable, ConfigError> {
    let mut table = RuleTable::new(UTILITIES_TABLE);

    for (key, class) in RENAMES {
        table.insert(MappingRule::rename(*key, *class))?;
    }
    for (key, class) in TEXT_RENAMES {
        table.insert(MappingRule::rename(*key, *class).without_breakpoints())?;
    }
    for key in PASSTHROUGHS {
        table.insert(MappingRule::passthrough(*key))?;
    }
    for (key, classes) in COMPOSITES {
        let outputs = classes.iter().map(|c| OutputTemplate::literal(*c)).collect();
        table.insert(MappingRule::composite(*key, outputs))?;
    }
    for (key, prefix, scale) in SCALED {
        table.insert(MappingRule::scale(*key, *prefix, *scale))?;
    }

    Ok(table)
}

fn colors_table() -> Result<RuleTable, ConfigError> {
    let mut table = RuleTable::new(COLORS_TABLE);

    for (key, prefix) in COLOR_RULES {
        table.insert(MappingRule::color(*key, *prefix).without_breakpoints())?;
    }
    // 背景在前，前景在后
    table.insert(
        MappingRule::composite(
            "text-bg",
            vec![OutputTemplate::color("bg"), OutputTemplate::contrast("text")],
        )
        .without_breakpoints(),
    )?;

    Ok(table)
}
