use crosswind_bs_parse::parse_class;
use crosswind_core::{tokenize, ConversionResult, ConvertOptions, RawToken};
use rayon::prelude::*;

use crate::breakpoint::remap;
use crate::compose::{compose, ResolvedToken};
use crate::resolver::resolve;
use crate::tables::MappingTables;

/// Bootstrap class 字符串 → Tailwind class 字符串
///
/// 映射表以引用传入，可以在多个 Converter / 线程之间共享
///
/// # 示例
///
/// ```
/// use crosswind_bs_index::{Converter, MappingTables};
/// use crosswind_core::ConvertOptions;
///
/// let tables = MappingTables::bootstrap().unwrap();
/// let converter = Converter::new(&tables, ConvertOptions::default());
///
/// let result = converter.convert("d-none d-md-block");
/// assert_eq!(result.output_string(), "hidden md:block");
/// ```
#[derive(Debug, Clone)]
pub struct Converter<'t> {
    tables: &'t MappingTables,
    options: ConvertOptions,
}

impl<'t> Converter<'t> {
    pub fn new(tables: &'t MappingTables, options: ConvertOptions) -> Self {
        Self { tables, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn tables(&self) -> &'t MappingTables {
        self.tables
    }

    /// 转换一个 class 属性值
    pub fn convert(&self, input: &str) -> ConversionResult {
        self.convert_tokens(tokenize(input))
    }

    /// 转换已经切好的 token
    pub fn convert_tokens(&self, tokens: Vec<RawToken>) -> ConversionResult {
        let resolved = tokens
            .into_iter()
            .map(|token| self.resolve_token(token))
            .collect();
        compose(resolved)
    }

    /// 解析 + 查找 + 断点重映射，不做组合
    pub fn resolve_token(&self, token: RawToken) -> ResolvedToken {
        let parsed = parse_class(&token, self.tables.vocabulary());
        let resolution = resolve(&parsed, self.tables, &self.options);
        let screen = remap(parsed.breakpoint, self.options.breakpoint_strategy);
        ResolvedToken {
            parsed,
            screen,
            resolution,
        }
    }

    /// 并行转换多个 class 属性值，结果顺序与输入一致
    pub fn convert_batch<S>(&self, inputs: &[S]) -> Vec<ConversionResult>
    where
        S: AsRef<str> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.convert(input.as_ref()))
            .collect()
    }
}
