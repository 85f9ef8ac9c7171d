//! SQLite Project Repository
//!
//! 项目存于 projects 表，章节存于 chapters 子表，按 (project_id, number) 唯一

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection};
use std::collections::HashMap;
use uuid::Uuid;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{ProjectRepositoryPort, RepositoryError};
use crate::domain::project::{
    Chapter, ChapterCount, Genre, Pov, PovMode, Project, ProjectId, ProjectSettings,
};

/// SQLite Project Repository
pub struct SqliteProjectRepository {
    pool: DbPool,
}

impl SqliteProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

#[derive(FromRow)]
struct ProjectRow {
    id: String,
    name: String,
    outline: String,
    chapter_count: i64,
    pov_mode: String,
    genre: Option<String>,
    rules: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ProjectRow {
    fn into_project(self, chapters: Vec<Chapter>) -> Result<Project, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let chapter_count = u32::try_from(self.chapter_count)
            .ok()
            .and_then(|n| ChapterCount::new(n).ok())
            .ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "invalid chapter_count {}",
                    self.chapter_count
                ))
            })?;
        let pov_mode = PovMode::from_str(&self.pov_mode).ok_or_else(|| {
            RepositoryError::SerializationError(format!("invalid pov_mode {}", self.pov_mode))
        })?;
        let genre = self
            .genre
            .map(|g| {
                Genre::from_str(&g).ok_or_else(|| {
                    RepositoryError::SerializationError(format!("invalid genre {}", g))
                })
            })
            .transpose()?;

        Ok(Project::restore(
            ProjectId::from_uuid(id),
            ProjectSettings {
                name: self.name,
                outline: self.outline,
                chapter_count,
                pov_mode,
                genre,
                rules: self.rules,
            },
            chapters,
            parse_timestamp(&self.created_at)?,
            parse_timestamp(&self.updated_at)?,
        ))
    }
}

#[derive(FromRow)]
struct ChapterRow {
    project_id: String,
    number: i64,
    title: String,
    text: String,
    pov: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ChapterRow> for Chapter {
    type Error = RepositoryError;

    fn try_from(row: ChapterRow) -> Result<Self, Self::Error> {
        let number = u32::try_from(row.number)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let pov = Pov::from_str(&row.pov).ok_or_else(|| {
            RepositoryError::SerializationError(format!("invalid pov {}", row.pov))
        })?;

        Ok(Chapter::restore(
            number,
            row.title,
            row.text,
            pov,
            parse_timestamp(&row.created_at)?,
            parse_timestamp(&row.updated_at)?,
        ))
    }
}

const PROJECT_COLUMNS: &str =
    "id, name, outline, chapter_count, pov_mode, genre, rules, created_at, updated_at";

const CHAPTER_COLUMNS: &str = "project_id, number, title, text, pov, created_at, updated_at";

/// 按章节号 upsert，重新生成会覆盖 created_at
async fn upsert_chapter(
    conn: &mut SqliteConnection,
    project_id: &str,
    chapter: &Chapter,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO chapters (project_id, number, title, text, pov, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(project_id, number) DO UPDATE SET
            title = excluded.title,
            text = excluded.text,
            pov = excluded.pov,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(project_id)
    .bind(chapter.number() as i64)
    .bind(chapter.title())
    .bind(chapter.text())
    .bind(chapter.pov().as_str())
    .bind(chapter.created_at().to_rfc3339())
    .bind(chapter.updated_at().to_rfc3339())
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn touch_project(
    conn: &mut SqliteConnection,
    project_id: &str,
    updated_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE projects SET updated_at = ? WHERE id = ?")
        .bind(updated_at.to_rfc3339())
        .bind(project_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

#[async_trait]
impl ProjectRepositoryPort for SqliteProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), RepositoryError> {
        let id = project.id().to_string();
        let settings = project.settings();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"
            INSERT INTO projects (id, name, outline, chapter_count, pov_mode, genre, rules, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                outline = excluded.outline,
                pov_mode = excluded.pov_mode,
                genre = excluded.genre,
                rules = excluded.rules,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&id)
        .bind(&settings.name)
        .bind(&settings.outline)
        .bind(settings.chapter_count.get() as i64)
        .bind(settings.pov_mode.as_str())
        .bind(settings.genre.map(|g| g.as_str()))
        .bind(settings.rules.as_deref())
        .bind(project.created_at().to_rfc3339())
        .bind(project.updated_at().to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM chapters WHERE project_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        for chapter in project.chapters() {
            upsert_chapter(&mut tx, &id, chapter)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        let row: Option<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects WHERE id = ?",
            PROJECT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let chapter_rows: Vec<ChapterRow> = sqlx::query_as(&format!(
            "SELECT {} FROM chapters WHERE project_id = ? ORDER BY number",
            CHAPTER_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let chapters = chapter_rows
            .into_iter()
            .map(Chapter::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        row.into_project(chapters).map(Some)
    }

    async fn find_all(&self) -> Result<Vec<Project>, RepositoryError> {
        let rows: Vec<ProjectRow> = sqlx::query_as(&format!(
            "SELECT {} FROM projects ORDER BY created_at, id",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let chapter_rows: Vec<ChapterRow> = sqlx::query_as(&format!(
            "SELECT {} FROM chapters ORDER BY project_id, number",
            CHAPTER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut chapters_by_project: HashMap<String, Vec<Chapter>> = HashMap::new();
        for row in chapter_rows {
            let project_id = row.project_id.clone();
            chapters_by_project
                .entry(project_id)
                .or_default()
                .push(Chapter::try_from(row)?);
        }

        rows.into_iter()
            .map(|row| {
                let chapters = chapters_by_project.remove(&row.id).unwrap_or_default();
                row.into_project(chapters)
            })
            .collect()
    }

    async fn delete(&self, id: &ProjectId) -> Result<bool, RepositoryError> {
        let id = id.to_string();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM chapters WHERE project_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn save_chapter(
        &self,
        project_id: &ProjectId,
        chapter: &Chapter,
        project_updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let id = project_id.to_string();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        upsert_chapter(&mut tx, &id, chapter)
            .await
            .map_err(map_sqlx_error)?;
        touch_project(&mut tx, &id, project_updated_at)
            .await
            .map_err(map_sqlx_error)?;
        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn replace_chapters(
        &self,
        project_id: &ProjectId,
        chapters: &[Chapter],
        project_updated_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let id = project_id.to_string();

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query("DELETE FROM chapters WHERE project_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        for chapter in chapters {
            upsert_chapter(&mut tx, &id, chapter)
                .await
                .map_err(map_sqlx_error)?;
        }

        touch_project(&mut tx, &id, project_updated_at)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(())
    }
}
