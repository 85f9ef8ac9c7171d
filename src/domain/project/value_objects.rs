//! Project Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ProjectError;

/// 项目唯一标识
///
/// 对外以标准的连字符 UUID 字符串形式暴露
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析客户端传入的标识
    ///
    /// 只做语法校验，不访问存储
    pub fn parse(raw: &str) -> Result<Self, ProjectError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| ProjectError::InvalidIdentifier(raw.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 章节总数，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterCount(u32);

impl ChapterCount {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 6;

    pub fn new(count: u32) -> Result<Self, ProjectError> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(ProjectError::InvalidChapterCount(count));
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// 章节号是否落在 [1, count] 内
    pub fn contains(&self, chapter_number: u32) -> bool {
        (1..=self.0).contains(&chapter_number)
    }
}

/// 叙述视角（已解析，单章只会是其中之一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pov {
    Female,
    Male,
}

impl Pov {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pov::Female => "female",
            Pov::Male => "male",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "female" => Some(Pov::Female),
            "male" => Some(Pov::Male),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pov {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 项目级视角策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PovMode {
    #[default]
    Female,
    Male,
    Dual,
}

impl PovMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PovMode::Female => "female",
            PovMode::Male => "male",
            PovMode::Dual => "dual",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "female" => Some(PovMode::Female),
            "male" => Some(PovMode::Male),
            "dual" => Some(PovMode::Dual),
            _ => None,
        }
    }

    /// 解析某一章的叙述视角
    ///
    /// dual 模式按奇偶交替：奇数章女性视角，偶数章男性视角
    pub fn resolve(&self, chapter_number: u32) -> Pov {
        match self {
            PovMode::Female => Pov::Female,
            PovMode::Male => Pov::Male,
            PovMode::Dual if chapter_number % 2 == 1 => Pov::Female,
            PovMode::Dual => Pov::Male,
        }
    }
}

/// 题材，用于选择基调提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Billionaire,
    Werewolf,
    Mafia,
    #[default]
    General,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Billionaire => "billionaire",
            Genre::Werewolf => "werewolf",
            Genre::Mafia => "mafia",
            Genre::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "billionaire" => Some(Genre::Billionaire),
            "werewolf" => Some(Genre::Werewolf),
            "mafia" => Some(Genre::Mafia),
            "general" => Some(Genre::General),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_pov_alternates_by_parity() {
        for n in 1..=50 {
            let expected = if n % 2 == 1 { Pov::Female } else { Pov::Male };
            assert_eq!(PovMode::Dual.resolve(n), expected, "chapter {}", n);
        }
    }

    #[test]
    fn test_fixed_pov_modes() {
        for n in 1..=6 {
            assert_eq!(PovMode::Female.resolve(n), Pov::Female);
            assert_eq!(PovMode::Male.resolve(n), Pov::Male);
        }
    }

    #[test]
    fn test_chapter_count_bounds() {
        assert!(ChapterCount::new(2).is_err());
        assert!(ChapterCount::new(3).is_ok());
        assert!(ChapterCount::new(6).is_ok());
        assert!(ChapterCount::new(7).is_err());

        let count = ChapterCount::new(3).unwrap();
        assert!(!count.contains(0));
        assert!(count.contains(3));
        assert!(!count.contains(4));
    }

    #[test]
    fn test_project_id_parse() {
        let id = ProjectId::new();
        assert_eq!(ProjectId::parse(&id.to_string()).unwrap(), id);
        assert!(matches!(
            ProjectId::parse("not-an-id"),
            Err(ProjectError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_enum_string_forms() {
        assert_eq!(PovMode::from_str("dual"), Some(PovMode::Dual));
        assert_eq!(Genre::from_str("werewolf"), Some(Genre::Werewolf));
        assert_eq!(Genre::from_str("romance"), None);
        assert_eq!(Pov::Male.as_str(), "male");
        assert_eq!(serde_json::to_string(&Genre::Mafia).unwrap(), "\"mafia\"");
    }
}
