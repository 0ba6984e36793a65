//! Idea repository: owner-scoped CRUD, dashboard queries, stale reminders and
//! board reordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use spark_core::entities::Idea;
use spark_core::enums::{IdeaColor, IdeaSort, IdeaStatus};
use spark_core::errors::normalize_title;
use spark_core::ids::PREFIX_IDEA;

use crate::error::DatabaseError;
use crate::helpers::{fmt_ts, get_opt_string, get_opt_u32, parse_datetime, parse_enum};
use crate::service::SparkService;
use crate::updates::idea::IdeaUpdate;

const ENTITY: &str = "idea";

const SELECT_COLS: &str = "id, user_id, title, content, color, status, priority, reminder_days, \
     position, created_at, updated_at, last_activity_at";

fn row_to_idea(row: &libsql::Row) -> Result<Idea, DatabaseError> {
    Ok(Idea {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        content: get_opt_string(row, 3)?,
        color: parse_enum(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        priority: get_opt_string(row, 6)?
            .map(|p| parse_enum(&p))
            .transpose()?,
        reminder_days: get_opt_u32(row, 7)?,
        position: row.get(8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
        last_activity_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

async fn collect_ideas(mut rows: libsql::Rows) -> Result<Vec<Idea>, DatabaseError> {
    let mut ideas = Vec::new();
    while let Some(row) = rows.next().await? {
        ideas.push(row_to_idea(&row)?);
    }
    Ok(ideas)
}

/// Blank content is stored as NULL.
fn normalize_content(content: Option<&str>) -> Option<&str> {
    content.filter(|c| !c.trim().is_empty())
}

/// Dashboard filter for [`SparkService::query_ideas`].
///
/// Doubles as the query string of `GET /v1/ideas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaFilter {
    #[serde(default)]
    pub status: Option<IdeaStatus>,
    /// Case-insensitive substring over title and content.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: IdeaSort,
    #[serde(default)]
    pub limit: Option<u32>,
}

const fn order_clause(sort: IdeaSort) -> &'static str {
    match sort {
        IdeaSort::Position => "position ASC, created_at ASC, rowid ASC",
        IdeaSort::Recent => "updated_at DESC, rowid DESC",
        IdeaSort::Oldest => "created_at ASC, rowid ASC",
        IdeaSort::Alphabetical => "lower(title) ASC, rowid ASC",
        IdeaSort::Priority => {
            "CASE priority WHEN 'high' THEN 0 WHEN 'low' THEN 2 ELSE 1 END ASC, \
             position ASC, rowid ASC"
        }
    }
}

impl SparkService {
    /// All of the caller's ideas in board order.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Unauthenticated` without an identity.
    pub async fn list_ideas(&self) -> Result<Vec<Idea>, DatabaseError> {
        self.query_ideas(&IdeaFilter::default()).await
    }

    /// Filtered, searched and sorted view of the caller's ideas.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Unauthenticated` without an identity.
    pub async fn query_ideas(&self, filter: &IdeaFilter) -> Result<Vec<Idea>, DatabaseError> {
        let owner = self.owner_id()?;

        let mut clauses = vec!["user_id = ?1".to_string()];
        let mut params: Vec<libsql::Value> = vec![owner.into()];
        let mut idx = 2usize;

        if let Some(status) = filter.status {
            clauses.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            clauses.push(format!(
                "(instr(lower(title), lower(?{idx})) > 0 \
                 OR instr(lower(coalesce(content, '')), lower(?{idx})) > 0)"
            ));
            params.push(search.into());
            idx += 1;
        }

        let mut sql = format!(
            "SELECT {SELECT_COLS} FROM ideas WHERE {} ORDER BY {}",
            clauses.join(" AND "),
            order_clause(filter.sort)
        );
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{idx}"));
            params.push(i64::from(limit).into());
        }

        let rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_ideas(rows).await
    }

    /// Fetch one of the caller's ideas.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the idea does not exist or belongs to
    /// someone else.
    pub async fn get_idea(&self, id: &str) -> Result<Idea, DatabaseError> {
        let owner = self.owner_id()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM ideas WHERE id = ?1 AND user_id = ?2"),
                [id, owner],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(ENTITY, id))?;
        row_to_idea(&row)
    }

    /// Capture a new idea at the end of the caller's board.
    ///
    /// `position` is the count of the caller's ideas, computed in the INSERT.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for a blank title,
    /// `DatabaseError::Unauthenticated` without an identity.
    pub async fn create_idea(
        &self,
        title: &str,
        content: Option<&str>,
        color: Option<IdeaColor>,
    ) -> Result<Idea, DatabaseError> {
        let owner = self.owner_id()?;
        let title = normalize_title(title)?;
        let id = self.db().generate_id(PREFIX_IDEA).await?;
        let now = fmt_ts(Utc::now());

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "INSERT INTO ideas ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL,
                             (SELECT COUNT(*) FROM ideas WHERE user_id = ?2), ?7, ?7, ?7)
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    id.as_str(),
                    owner,
                    title,
                    normalize_content(content),
                    color.unwrap_or_default().as_str(),
                    IdeaStatus::Active.as_str(),
                    now.as_str()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let idea = row_to_idea(&row)?;
        tracing::debug!(idea_id = %idea.id, position = idea.position, "idea created");
        Ok(idea)
    }

    /// Apply a partial update.
    ///
    /// `updated_at` is always refreshed and `last_activity_at` moves forward,
    /// even for an empty update.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for a blank title or a zero
    /// `reminder_days`; `DatabaseError::NotFound` if the idea is not the
    /// caller's.
    pub async fn update_idea(&self, id: &str, update: IdeaUpdate) -> Result<Idea, DatabaseError> {
        let owner = self.owner_id()?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(normalize_title(title)?.into());
            idx += 1;
        }
        if let Some(ref content) = update.content {
            sets.push(format!("content = ?{idx}"));
            params.push(
                normalize_content(content.as_deref()).map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(color) = update.color {
            sets.push(format!("color = ?{idx}"));
            params.push(color.as_str().into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.map_or(libsql::Value::Null, |p| p.as_str().into()));
            idx += 1;
        }
        if let Some(reminder_days) = update.reminder_days {
            if reminder_days == Some(0) {
                return Err(DatabaseError::Validation(
                    "reminder_days must be positive".into(),
                ));
            }
            sets.push(format!("reminder_days = ?{idx}"));
            params.push(reminder_days.map_or(libsql::Value::Null, |d| i64::from(d).into()));
            idx += 1;
        }
        if let Some(position) = update.position {
            sets.push(format!("position = ?{idx}"));
            params.push(position.into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        sets.push(format!("last_activity_at = MAX(last_activity_at, ?{idx})"));
        params.push(fmt_ts(Utc::now()).into());
        idx += 1;

        params.push(id.into());
        params.push(owner.into());
        let sql = format!(
            "UPDATE ideas SET {} WHERE id = ?{idx} AND user_id = ?{} RETURNING {SELECT_COLS}",
            sets.join(", "),
            idx + 1
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(ENTITY, id))?;
        row_to_idea(&row)
    }

    /// Delete one of the caller's ideas. Its suggestions go with it.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the idea is not the caller's.
    pub async fn delete_idea(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.owner_id()?;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM ideas WHERE id = ?1 AND user_id = ?2", [id, owner])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(ENTITY, id));
        }
        tracing::debug!(idea_id = id, "idea deleted");
        Ok(())
    }

    /// Active ideas whose reminder window has passed at `now`.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Unauthenticated` without an identity.
    pub async fn list_stale_ideas(&self, now: DateTime<Utc>) -> Result<Vec<Idea>, DatabaseError> {
        let owner = self.owner_id()?;
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM ideas
                     WHERE user_id = ?1 AND status = 'active' AND reminder_days IS NOT NULL
                     ORDER BY last_activity_at ASC, rowid ASC"
                ),
                [owner],
            )
            .await?;
        let ideas = collect_ideas(rows).await?;
        Ok(ideas.into_iter().filter(|idea| idea.is_stale(now)).collect())
    }

    /// Set `position = index` for each listed idea, in one statement.
    ///
    /// Ideas not listed keep their position. Only `updated_at` is touched,
    /// since moving a card is not activity on the idea.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for duplicate IDs; `DatabaseError::NotFound`
    /// for the first ID that is not the caller's (nothing is changed then).
    pub async fn reorder_ideas(&self, ids: &[String]) -> Result<(), DatabaseError> {
        let owner = self.owner_id()?;
        if ids.is_empty() {
            return Ok(());
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(DatabaseError::Validation(format!(
                "duplicate idea id in order: {dup}"
            )));
        }

        let id_values = || ids.iter().map(|id| libsql::Value::from(id.clone()));

        // Ownership check first: ?1 = owner, ?2.. = ids.
        let check_list: Vec<String> = (0..ids.len()).map(|i| format!("?{}", i + 2)).collect();
        let mut params: Vec<libsql::Value> = vec![owner.into()];
        params.extend(id_values());
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT id FROM ideas WHERE user_id = ?1 AND id IN ({})",
                    check_list.join(", ")
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        let mut owned = std::collections::HashSet::new();
        while let Some(row) = rows.next().await? {
            owned.insert(row.get::<String>(0)?);
        }
        if let Some(missing) = ids.iter().find(|id| !owned.contains(id.as_str())) {
            return Err(DatabaseError::not_found(ENTITY, missing));
        }

        // ?1 = owner, ?2 = now, ?3.. = ids.
        let update_list: Vec<String> = (0..ids.len()).map(|i| format!("?{}", i + 3)).collect();
        let cases: String = update_list
            .iter()
            .enumerate()
            .map(|(index, placeholder)| format!(" WHEN {placeholder} THEN {index}"))
            .collect();
        let mut params: Vec<libsql::Value> = vec![owner.into(), fmt_ts(Utc::now()).into()];
        params.extend(id_values());
        self.db()
            .conn()
            .execute(
                &format!(
                    "UPDATE ideas SET position = CASE id{cases} END, updated_at = ?2
                     WHERE user_id = ?1 AND id IN ({})",
                    update_list.join(", ")
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        tracing::debug!(count = ids.len(), "ideas reordered");
        Ok(())
    }
}
