use crosswind_core::{BootstrapBreakpoint, RawToken};

use crate::types::{ParsedClass, STATE_SUFFIXES};
use crate::vocabulary::{Stem, UtilityVocabulary};

/// 解析 Bootstrap class token
///
/// 支持的格式：
/// - 简单类：`d-flex`, `m-3`, `rounded-circle`
/// - 响应式中缀：`d-md-none`, `justify-content-lg-between`, `col-md`
/// - 交互状态后缀：`link-offset-2-hover`
/// - 重要性前缀：`!m-3`
///
/// 不会失败：没有匹配到任何已注册词干时，整个 token 作为 `base_utility`，
/// 由后续的规则查找决定如何处理。
///
/// # 示例
///
/// ```
/// use crosswind_bs_parse::{parse_class, UtilityVocabulary};
/// use crosswind_core::{BootstrapBreakpoint, RawToken};
///
/// let vocabulary = UtilityVocabulary::bootstrap();
/// let parsed = parse_class(&RawToken::new("d-md-none", 0), &vocabulary);
/// assert_eq!(parsed.base_utility, "d");
/// assert_eq!(parsed.breakpoint, Some(BootstrapBreakpoint::Md));
/// assert_eq!(parsed.value_suffix.as_deref(), Some("none"));
/// ```
pub fn parse_class(token: &RawToken, vocabulary: &UtilityVocabulary) -> ParsedClass {
    let parser = Parser::new(&token.text, vocabulary);
    parser
        .parse(token)
        .unwrap_or_else(|| ParsedClass::unparsed(token.clone()))
}

/// 内部解析器
struct Parser<'a> {
    input: &'a str,
    vocabulary: &'a UtilityVocabulary,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, vocabulary: &'a UtilityVocabulary) -> Self {
        Self { input, vocabulary }
    }

    fn parse(&self, token: &RawToken) -> Option<ParsedClass> {
        // 1. 解析重要性（!）
        let (important, body) = match self.input.strip_prefix('!') {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, self.input),
        };

        // 2. 解析状态后缀；去掉后缀后没有词干匹配时按无后缀处理
        let (body, state, stem) = match self.split_state(body) {
            Some((stripped, state)) => match self.vocabulary.longest_match(stripped) {
                Some(stem) => (stripped, Some(state), stem),
                None => (body, None, self.vocabulary.longest_match(body)?),
            },
            None => (body, None, self.vocabulary.longest_match(body)?),
        };

        // 3. 解析断点和值
        let mut parsed = ParsedClass::new(token.clone(), stem.name.clone()).with_important(important);

        if let Some(rest) = body[stem.name.len()..].strip_prefix('-') {
            match split_breakpoint(stem, rest) {
                Some((bp, suffix)) => {
                    parsed = parsed.with_breakpoint(bp);
                    if let Some(suffix) = suffix {
                        parsed = parsed.with_suffix(suffix);
                    }
                }
                None => parsed = parsed.with_suffix(rest),
            }
        }

        if let Some(state) = state {
            parsed = parsed.with_pseudo(state);
        }

        Some(parsed)
    }

    /// 拆出结尾的状态后缀（`-hover` / `-focus`）
    fn split_state<'b>(&self, body: &'b str) -> Option<(&'b str, &'static str)> {
        STATE_SUFFIXES.iter().find_map(|state| {
            let stripped = body.strip_suffix(state)?.strip_suffix('-')?;
            (!stripped.is_empty()).then_some((stripped, *state))
        })
    }
}

/// 拆出词干后的断点中缀
///
/// - `md-none` → (md, Some("none"))
/// - `md`（仅响应式词干，如 `col-md`）→ (md, None)
/// - 非响应式词干的 `sm`（如 `shadow-sm`）不是断点
fn split_breakpoint<'b>(stem: &Stem, rest: &'b str) -> Option<(BootstrapBreakpoint, Option<&'b str>)> {
    match rest.split_once('-') {
        Some((head, tail)) if !tail.is_empty() => {
            BootstrapBreakpoint::from_name(head).map(|bp| (bp, Some(tail)))
        }
        Some(_) => None,
        None if stem.flags.responsive => BootstrapBreakpoint::from_name(rest).map(|bp| (bp, None)),
        None => None,
    }
}
