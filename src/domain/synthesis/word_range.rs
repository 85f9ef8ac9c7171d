//! 字数区间约束
//!
//! 章节正文必须落在 [MIN_WORDS, MAX_WORDS] 个空白分隔词之间

/// 最少词数
pub const MIN_WORDS: usize = 1400;

/// 最多词数
pub const MAX_WORDS: usize = 1800;

/// 截断后向前寻找句号的窗口（按词计）
const SENTENCE_LOOKBACK_WORDS: usize = 200;

/// 字数不足时循环追加的填充段落
const FILLER: &str = "I took my time and described what happened in a clear way. \
I kept the focus on real details, steady thoughts, and simple actions. \
I stayed in first person and let each moment breathe without sounding poetic or dramatic.";

/// 统计空白分隔的词数
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 将文本约束到 [MIN_WORDS, MAX_WORDS] 词
///
/// 分支互斥，先判断下限再判断上限：
/// - 不足下限：整段追加填充句，直到达到下限
/// - 超过上限：截断到 MAX_WORDS 词，若最后 200 词内有句号则回退到句号之后
/// - 区间内：原样返回（空白会被规整为单个空格）
pub fn enforce_word_range(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();

    if words.len() < MIN_WORDS {
        let filler: Vec<&str> = FILLER.split_whitespace().collect();
        while words.len() < MIN_WORDS {
            words.extend_from_slice(&filler);
        }
    } else if words.len() > MAX_WORDS {
        words.truncate(MAX_WORDS);
        return cut_at_sentence_end(&words);
    }

    words.truncate(MAX_WORDS);
    words.join(" ")
}

/// 在截断结果的最后 SENTENCE_LOOKBACK_WORDS 个词内寻找最后一个 '.'
///
/// 找到则保留到该句号（含），否则保留硬截断结果
fn cut_at_sentence_end(words: &[&str]) -> String {
    let window_start = words.len().saturating_sub(SENTENCE_LOOKBACK_WORDS);

    let cut = words[window_start..]
        .iter()
        .enumerate()
        .rev()
        .find_map(|(offset, word)| word.rfind('.').map(|dot| (window_start + offset, dot)));

    match cut {
        Some((index, dot)) => {
            let mut kept = words[..index].join(" ");
            if !kept.is_empty() {
                kept.push(' ');
            }
            kept.push_str(&words[index][..=dot]);
            kept
        }
        None => words.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_count_words_ignores_extra_whitespace() {
        assert_eq!(count_words("  one\ttwo\n\nthree  "), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\t "), 0);
    }

    #[test]
    fn test_short_text_is_padded_into_range() {
        for n in [0, 1, 10, 500, 1399] {
            let out = enforce_word_range(&words(n, "word"));
            let count = count_words(&out);
            assert!((MIN_WORDS..=MAX_WORDS).contains(&count), "n={} count={}", n, count);
            assert!(out.ends_with("dramatic."));
        }
    }

    #[test]
    fn test_in_range_text_is_unchanged() {
        let text = words(1500, "steady");
        assert_eq!(enforce_word_range(&text), text);

        let edge_low = words(MIN_WORDS, "a");
        assert_eq!(enforce_word_range(&edge_low), edge_low);

        let edge_high = words(MAX_WORDS, "b");
        assert_eq!(enforce_word_range(&edge_high), edge_high);
    }

    #[test]
    fn test_in_range_text_whitespace_is_normalized() {
        let text = format!("{}\n\n{}", words(700, "x"), words(800, "y"));
        let out = enforce_word_range(&text);
        assert_eq!(count_words(&out), 1500);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_long_text_without_period_is_hard_cut() {
        let out = enforce_word_range(&words(2500, "word"));
        assert_eq!(count_words(&out), MAX_WORDS);
    }

    #[test]
    fn test_long_text_cuts_back_to_sentence_end() {
        // 1750 个词后紧跟一个句号，再接 1000 个词
        let text = format!("{} end. {}", words(1749, "word"), words(1000, "tail"));
        let out = enforce_word_range(&text);
        assert!(out.ends_with("end."));
        assert_eq!(count_words(&out), 1750);
    }

    #[test]
    fn test_period_outside_lookback_window_is_ignored() {
        // 句号位于第 1500 个词，离截断点超过 200 词
        let text = format!("{} stop. {}", words(1499, "word"), words(1000, "tail"));
        let out = enforce_word_range(&text);
        assert_eq!(count_words(&out), MAX_WORDS);
        assert!(out.ends_with("tail"));
    }

    #[test]
    fn test_output_always_in_range() {
        for n in [0, 37, 1399, 1400, 1401, 1799, 1800, 1801, 4000] {
            let text = (0..n)
                .map(|i| if i % 13 == 12 { "word." } else { "word" })
                .collect::<Vec<_>>()
                .join(" ");
            let count = count_words(&enforce_word_range(&text));
            assert!((MIN_WORDS..=MAX_WORDS).contains(&count), "n={} count={}", n, count);
        }
    }
}
