//! Journal entries in SQLite.
//!
//! List-valued fields and analysis payloads are stored as canonical JSON
//! text and decoded on the way out; a column that no longer decodes is
//! reported as corruption rather than handed back raw.

use crate::repositories::timestamps::{from_millis, to_millis, truncate_to_millis};
use crate::{DbError, Result as DbErrorResult};

use clarity_core::{
    AnalysisPayload, EntryFields, EntryId, EntryWindow, JournalEntry, JournalEntryDraft,
    JournalRepository, RepositoryError, StructuredFields, UserId,
};

use async_trait::async_trait;
use log::debug;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ENTRY_COLUMNS: &str = r#"
    id, user_id, photo_ref, mood, notes, emotions, primary_emotion, secondary_emotion,
    intensity, insights, tips, confidence,
    facial_analysis, mood_factors, wellness_indicators, recommendations, quick_insight,
    detailed_insights, mood_trends, chart_data, analysis_summary, additional_data,
    created_at
"#;

#[derive(FromRow)]
struct EntryRow {
    id: i64,
    user_id: i64,
    photo_ref: Option<String>,
    mood: Option<String>,
    notes: Option<String>,
    emotions: Option<String>,
    primary_emotion: Option<String>,
    secondary_emotion: Option<String>,
    intensity: Option<i64>,
    insights: Option<String>,
    tips: Option<String>,
    confidence: Option<i64>,
    facial_analysis: Option<String>,
    mood_factors: Option<String>,
    wellness_indicators: Option<String>,
    recommendations: Option<String>,
    quick_insight: Option<String>,
    detailed_insights: Option<String>,
    mood_trends: Option<String>,
    chart_data: Option<String>,
    analysis_summary: Option<String>,
    additional_data: Option<String>,
    created_at: i64,
}

impl TryFrom<EntryRow> for JournalEntry {
    type Error = DbError;

    fn try_from(row: EntryRow) -> DbErrorResult<Self> {
        let stored = [
            ("facial_analysis", row.facial_analysis),
            ("mood_factors", row.mood_factors),
            ("wellness_indicators", row.wellness_indicators),
            ("recommendations", row.recommendations),
            ("quick_insight", row.quick_insight),
            ("detailed_insights", row.detailed_insights),
            ("mood_trends", row.mood_trends),
            ("chart_data", row.chart_data),
            ("analysis_summary", row.analysis_summary),
            ("additional_data", row.additional_data),
        ];

        let mut analysis = StructuredFields::default();
        for (column, text) in stored {
            let Some(text) = text else { continue };
            let payload = AnalysisPayload::from_stored_text(&text)
                .map_err(|e| DbError::decode(column, e.to_string()))?;
            if let Some(slot) = analysis.slot_mut(column) {
                *slot = Some(payload);
            }
        }

        Ok(JournalEntry {
            id: EntryId(row.id),
            user_id: UserId(row.user_id),
            photo_ref: row.photo_ref,
            fields: EntryFields {
                mood: row.mood,
                notes: row.notes,
                emotions: decode_list("emotions", row.emotions)?,
                primary_emotion: row.primary_emotion,
                secondary_emotion: row.secondary_emotion,
                intensity: decode_int("intensity", row.intensity)?,
                insights: decode_list("insights", row.insights)?,
                tips: decode_list("tips", row.tips)?,
                confidence: decode_int("confidence", row.confidence)?,
                analysis,
            },
            created_at: from_millis("journal_entries.created_at", row.created_at)?,
        })
    }
}

fn encode_list(list: Option<&Vec<String>>) -> Option<String> {
    list.map(|items| serde_json::Value::from(items.clone()).to_string())
}

fn decode_list(column: &str, text: Option<String>) -> DbErrorResult<Option<Vec<String>>> {
    text.map(|t| serde_json::from_str(&t).map_err(|e| DbError::decode(column, e.to_string())))
        .transpose()
}

fn decode_int(column: &str, value: Option<i64>) -> DbErrorResult<Option<i32>> {
    value
        .map(|v| i32::try_from(v).map_err(|e| DbError::decode(column, e.to_string())))
        .transpose()
}

#[derive(Clone)]
pub struct SqliteJournalRepository {
    pool: SqlitePool,
}

impl SqliteJournalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_entry(&self, draft: JournalEntryDraft) -> DbErrorResult<JournalEntry> {
        let created_at = truncate_to_millis("journal_entries.created_at", draft.created_at)?;
        let fields = &draft.fields;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
                INSERT INTO journal_entries (
                    user_id, photo_ref, mood, notes, emotions, primary_emotion,
                    secondary_emotion, intensity, insights, tips, confidence,
                    facial_analysis, mood_factors, wellness_indicators, recommendations,
                    quick_insight, detailed_insights, mood_trends, chart_data,
                    analysis_summary, additional_data, created_at
                ) VALUES (
            "#,
        );

        let mut values = builder.separated(", ");
        values
            .push_bind(draft.user_id.0)
            .push_bind(draft.photo_ref.clone())
            .push_bind(fields.mood.clone())
            .push_bind(fields.notes.clone())
            .push_bind(encode_list(fields.emotions.as_ref()))
            .push_bind(fields.primary_emotion.clone())
            .push_bind(fields.secondary_emotion.clone())
            .push_bind(fields.intensity)
            .push_bind(encode_list(fields.insights.as_ref()))
            .push_bind(encode_list(fields.tips.as_ref()))
            .push_bind(fields.confidence);
        for (_, payload) in fields.analysis.iter() {
            values.push_bind(payload.map(AnalysisPayload::to_stored_text));
        }
        values.push_bind(to_millis(created_at));
        values.push_unseparated(")");

        let result = builder.build().execute(&self.pool).await?;
        let id = EntryId(result.last_insert_rowid());

        debug!("Inserted journal entry {} for user {}", id, draft.user_id);

        Ok(JournalEntryDraft {
            created_at,
            ..draft
        }
        .into_entry(id))
    }

    async fn select_for_user(
        &self,
        user_id: UserId,
        window: EntryWindow,
    ) -> DbErrorResult<Vec<JournalEntry>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ENTRY_COLUMNS} FROM journal_entries WHERE user_id = "));
        builder.push_bind(user_id.0);

        if let Some(from) = window.from {
            builder.push(" AND created_at >= ").push_bind(to_millis(from));
        }
        if let Some(until) = window.until {
            builder.push(" AND created_at < ").push_bind(to_millis(until));
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows: Vec<EntryRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(JournalEntry::try_from).collect()
    }

    async fn select_one(&self, id: EntryId, user_id: UserId) -> DbErrorResult<Option<JournalEntry>> {
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM journal_entries WHERE id = ? AND user_id = ?");

        sqlx::query_as::<_, EntryRow>(&sql)
            .bind(id.0)
            .bind(user_id.0)
            .fetch_optional(&self.pool)
            .await?
            .map(JournalEntry::try_from)
            .transpose()
    }

    async fn delete_one(&self, id: EntryId, user_id: UserId) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = ? AND user_id = ?")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl JournalRepository for SqliteJournalRepository {
    async fn insert(&self, draft: JournalEntryDraft) -> Result<JournalEntry, RepositoryError> {
        Ok(self.insert_entry(draft).await?)
    }

    async fn find_for_user(
        &self,
        user_id: UserId,
        window: EntryWindow,
    ) -> Result<Vec<JournalEntry>, RepositoryError> {
        Ok(self.select_for_user(user_id, window).await?)
    }

    async fn find_by_id_for_user(
        &self,
        id: EntryId,
        user_id: UserId,
    ) -> Result<Option<JournalEntry>, RepositoryError> {
        Ok(self.select_one(id, user_id).await?)
    }

    async fn delete_for_user(&self, id: EntryId, user_id: UserId) -> Result<u64, RepositoryError> {
        Ok(self.delete_one(id, user_id).await?)
    }
}
