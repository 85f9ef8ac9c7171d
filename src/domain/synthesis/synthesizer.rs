//! 章节正文合成
//!
//! 基于大纲的确定性模板展开：相同输入总是得到逐字节相同的输出，
//! 不含随机数，也不依赖当前时间

use super::outline::split_outline;
use super::word_range::{count_words, enforce_word_range};
use crate::domain::project::{Genre, Pov};

/// 最多展开为场景的大纲片段数
const MAX_SCENES: usize = 8;

/// 展开阶段的目标词数（之后再做区间约束）
const ELABORATION_TARGET_WORDS: usize = 1450;

/// 合成一章所需的全部输入
#[derive(Debug, Clone, Copy)]
pub struct ChapterBrief<'a> {
    pub outline: &'a str,
    pub chapter_number: u32,
    pub chapter_total: u32,
    pub pov: Pov,
    pub genre: Genre,
    /// 用户的调整说明，只含空白时视为无
    pub user_instructions: Option<&'a str>,
}

/// 合成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedChapter {
    pub text: String,
    pub word_count: usize,
}

fn genre_note(genre: Genre) -> &'static str {
    match genre {
        Genre::Billionaire => {
            " There is a quiet tension between wealth and loneliness. Power shows up in small practical ways."
        }
        Genre::Werewolf => {
            " Instinct and duty pull at me. I notice heat, breath, and the press of the crowd without exaggeration."
        }
        Genre::Mafia => {
            " Danger is present but not sensational. Trust is fragile and every choice has a cost."
        }
        Genre::General => "",
    }
}

fn push_scene(lines: &mut Vec<String>, scene_number: usize, segment: &str) {
    lines.push(format!(
        "Scene {}: {}. I look for what matters right now. I describe only what I would notice.",
        scene_number, segment
    ));
    lines.push(
        "I watch faces and hands. I listen for tone. I keep my feelings steady and honest."
            .to_string(),
    );
    lines.push(
        "I let the moment slow enough to understand it, then I make a choice that moves the scene forward."
            .to_string(),
    );
    lines.push(
        "Dialogue feels natural. I speak in clear sentences. I avoid dramatic fragments and fancy images."
            .to_string(),
    );
    lines.push(
        "My body tells a simple truth: my breath changes, my shoulders tense, my hands warm or cool."
            .to_string(),
    );
}

fn elaboration(step: &str) -> String {
    format!(
        " I take one more careful step in this situation: {}. I ask a direct question, I listen, \
and I notice how my chest feels and how my thoughts settle. I choose clear words and I keep the pace even. \
I avoid clichés. I use plain language. I stay with the present scene and I let the next moment lead me.",
        step
    )
}

/// 追加用户调整说明后重新约束字数
pub fn apply_adjustment(text: &str, instructions: &str) -> String {
    let adjusted = format!(
        "{} Adjustment note applied: {} I keep the same plot and tone while refining moments.",
        text,
        instructions.trim()
    );
    enforce_word_range(&adjusted)
}

/// 根据大纲合成一章正文
///
/// 流程：
/// 1. 大纲分段
/// 2. 开场（视角/基调、章节位置、题材提示）
/// 3. 前 8 个片段各展开为 5 句的场景
/// 4. 三句收尾
/// 5. 循环追加展开段落直到达到目标词数
/// 6. 字数区间约束，必要时附加调整说明
pub fn synthesize_chapter(brief: &ChapterBrief<'_>) -> SynthesizedChapter {
    let segments = split_outline(brief.outline);
    let mut lines: Vec<String> = Vec::with_capacity(5 + MAX_SCENES * 5);

    lines.push(format!(
        "This chapter follows the outline and continues the story in a clear, human voice. \
I speak in first person as the {} lead. The tone is natural and steady. \
The setting and actions are grounded in small details.",
        brief.pov
    ));
    lines.push(format!(
        "It is chapter {} of {}. I keep the pacing even and I move from one scene to the next \
without jumps. I react in real time with simple thoughts and clean sentences.{}",
        brief.chapter_number,
        brief.chapter_total,
        genre_note(brief.genre)
    ));

    for (i, segment) in segments.iter().take(MAX_SCENES).enumerate() {
        push_scene(&mut lines, i + 1, segment);
    }

    lines.push(
        "I stay consistent with point of view. I keep it personal and close. I do not summarize the story."
            .to_string(),
    );
    lines.push(
        "When I think of the other lead, I admit what I want and what I fear, even if I do not say it out loud."
            .to_string(),
    );
    lines.push(
        "The chapter closes on a clean beat. I do not end with a slogan. I end with a small decision or a question that matters."
            .to_string(),
    );

    let mut body = lines.join(" ");
    let mut word_count = count_words(&body);
    for step in segments.iter().cycle() {
        if word_count >= ELABORATION_TARGET_WORDS {
            break;
        }
        let paragraph = elaboration(step);
        word_count += count_words(&paragraph);
        body.push_str(&paragraph);
    }

    let mut text = enforce_word_range(&body);
    if let Some(instructions) = brief.user_instructions.filter(|s| !s.is_empty()) {
        text = apply_adjustment(&text, instructions);
    }

    SynthesizedChapter {
        word_count: count_words(&text),
        text,
    }
}
