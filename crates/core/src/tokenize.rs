use crate::types::RawToken;

/// 将 class 属性值拆分为 token 序列
///
/// 功能：
/// 1. 按一个或多个空白字符拆分
/// 2. 忽略首尾空白
/// 3. 保留重复项和原始顺序（不去重、不排序）
pub fn tokenize(input: &str) -> Vec<RawToken> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, text)| RawToken::new(text, position))
        .collect()
}
