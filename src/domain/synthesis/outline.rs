//! 大纲分段

/// 大纲为空时使用的默认片段
pub const FALLBACK_SEGMENT: &str =
    "The story setup is simple. I meet the other lead and a problem starts.";

/// 是否为行首/行尾需要去掉的字符（空白与项目符号）
#[inline]
fn is_bullet_or_space(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '•')
}

/// 将大纲拆分为场景片段
///
/// 按 \n 与 \r 拆分（兼容 \r\n 与单独的 \r），去掉首尾空白和项目符号，丢弃空行；
/// 没有任何片段时返回单个默认片段
pub fn split_outline(outline: &str) -> Vec<String> {
    let segments: Vec<String> = outline
        .split(['\n', '\r'])
        .map(|line| line.trim_matches(is_bullet_or_space))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if segments.is_empty() {
        return vec![FALLBACK_SEGMENT.to_string()];
    }
    segments
}
