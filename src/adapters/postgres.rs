use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::collections::HashMap;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{
    Ask, AskKind, AskStatus, Bump, Comment, Offer, Tag, TagCount, Transaction, TransactionKind,
    TransactionStatus, User,
};
use crate::error::{AskpoolError, Result};
use crate::ledger::store::{LedgerStore, OfferPool};

/// Filter for ask listings; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct AskFilter {
    pub status: Option<AskStatus>,
    pub ask_kind: Option<AskKind>,
    pub user_id: Option<Uuid>,
    pub tag: Option<String>,
    pub limit: Option<i64>,
}

/// Fields for a new ask
#[derive(Debug, Clone)]
pub struct NewAsk {
    pub user_id: Uuid,
    pub ask_kind: AskKind,
    pub slug: String,
    pub title: String,
    pub deadline_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// PostgreSQL storage adapter
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create a PostgreSQL store from an existing connection pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ==================== Users ====================

    #[instrument(skip(self))]
    pub async fn create_user(&self, user_name: &str) -> Result<User> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (id, user_name)
            VALUES ($1, $2)
            RETURNING id, user_name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_name)
        .fetch_one(&self.pool)
        .await?;

        map_user(&row)
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(r#"SELECT id, user_name, created_at FROM users WHERE id = $1"#)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    // ==================== Asks ====================

    /// Insert a new ask in pending-acceptance state, upserting its tags
    #[instrument(skip(self, ask), fields(slug = %ask.slug))]
    pub async fn create_ask(&self, ask: &NewAsk) -> Result<Ask> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO asks (id, user_id, ask_kind, status, slug, title, deadline_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, ask_kind, status, slug, title,
                      deadline_at, accepted_deadline_at, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ask.user_id)
        .bind(ask.ask_kind.as_str())
        .bind(AskStatus::PendingAcceptance.as_str())
        .bind(&ask.slug)
        .bind(&ask.title)
        .bind(ask.deadline_at)
        .fetch_one(&mut *tx)
        .await?;

        let created = map_ask(&row)?;

        for tag_name in &ask.tags {
            let tag_row = sqlx::query(
                r#"
                INSERT INTO tags (id, name)
                VALUES ($1, $2)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(tag_name)
            .fetch_one(&mut *tx)
            .await?;
            let tag_id: Uuid = tag_row.get("id");

            sqlx::query(
                r#"
                INSERT INTO ask_tags (ask_id, tag_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(created.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!("Created ask {} with {} tags", created.id, ask.tags.len());
        Ok(created)
    }

    pub async fn get_ask(&self, ask_id: Uuid) -> Result<Option<Ask>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, ask_kind, status, slug, title,
                   deadline_at, accepted_deadline_at, created_at
            FROM asks WHERE id = $1
            "#,
        )
        .bind(ask_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_ask).transpose()
    }

    pub async fn get_ask_by_slug(&self, slug: &str) -> Result<Option<Ask>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, ask_kind, status, slug, title,
                   deadline_at, accepted_deadline_at, created_at
            FROM asks WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_ask).transpose()
    }

    /// List asks matching the given filter criteria, newest first
    pub async fn list_asks(&self, filter: &AskFilter) -> Result<Vec<Ask>> {
        let limit = filter.limit.unwrap_or(100);

        // Build dynamic WHERE clauses
        let mut conditions = Vec::new();
        let mut idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("status = ${idx}"));
            idx += 1;
        }
        if filter.ask_kind.is_some() {
            conditions.push(format!("ask_kind = ${idx}"));
            idx += 1;
        }
        if filter.user_id.is_some() {
            conditions.push(format!("user_id = ${idx}"));
            idx += 1;
        }
        if filter.tag.is_some() {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM ask_tags at JOIN tags t ON t.id = at.tag_id \
                 WHERE at.ask_id = asks.id AND t.name = ${idx})"
            ));
            idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT id, user_id, ask_kind, status, slug, title,
                   deadline_at, accepted_deadline_at, created_at
            FROM asks
            {where_clause}
            ORDER BY created_at DESC
            LIMIT ${idx}
            "#,
        );

        let mut query = sqlx::query(&sql);

        if let Some(status) = filter.status {
            query = query.bind(status.as_str());
        }
        if let Some(kind) = filter.ask_kind {
            query = query.bind(kind.as_str());
        }
        if let Some(user_id) = filter.user_id {
            query = query.bind(user_id);
        }
        if let Some(ref tag) = filter.tag {
            query = query.bind(tag);
        }
        query = query.bind(limit);

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(map_ask).collect()
    }

    /// Transition an ask to a new status (validates the lifecycle)
    #[instrument(skip(self))]
    pub async fn update_ask_status(&self, ask_id: Uuid, new_status: AskStatus) -> Result<()> {
        let current = self.current_status(ask_id).await?;

        if !current.can_transition_to(new_status) {
            return Err(AskpoolError::InvalidStatusTransition {
                from: current.to_string(),
                to: new_status.to_string(),
            });
        }

        sqlx::query("UPDATE asks SET status = $1 WHERE id = $2")
            .bind(new_status.as_str())
            .bind(ask_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Move a pending-acceptance ask to active, stamping the delivery
    /// deadline
    #[instrument(skip(self))]
    pub async fn activate_ask(
        &self,
        ask_id: Uuid,
        accepted_deadline_at: DateTime<Utc>,
    ) -> Result<()> {
        let current = self.current_status(ask_id).await?;

        if !current.can_transition_to(AskStatus::Active) {
            return Err(AskpoolError::InvalidStatusTransition {
                from: current.to_string(),
                to: AskStatus::Active.to_string(),
            });
        }

        sqlx::query(
            r#"
            UPDATE asks SET status = $1, accepted_deadline_at = $2 WHERE id = $3
            "#,
        )
        .bind(AskStatus::Active.as_str())
        .bind(accepted_deadline_at)
        .bind(ask_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Expire open asks whose deadline has passed: the bidding deadline
    /// while pending acceptance, the delivery deadline once active.
    /// Returns the number of asks expired.
    #[instrument(skip(self))]
    pub async fn expire_overdue_asks(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE asks SET status = 'expired'
            WHERE (status = 'pending_acceptance' AND deadline_at < $1)
               OR (status = 'active'
                   AND accepted_deadline_at IS NOT NULL
                   AND accepted_deadline_at < $1)
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn current_status(&self, ask_id: Uuid) -> Result<AskStatus> {
        let row = sqlx::query("SELECT status FROM asks WHERE id = $1")
            .bind(ask_id)
            .fetch_optional(&self.pool)
            .await?;

        let row = row.ok_or_else(|| AskpoolError::NotFound {
            entity: "ask",
            id: ask_id.to_string(),
        })?;

        parse_ask_status(&row.get::<String, _>("status"))
    }

    // ==================== Bumps ====================

    #[instrument(skip(self))]
    pub async fn create_bump(&self, ask_id: Uuid, bidder_id: Uuid, amount: i64) -> Result<Bump> {
        let row = sqlx::query(
            r#"
            INSERT INTO bumps (id, ask_id, bidder_id, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, ask_id, bidder_id, amount, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ask_id)
        .bind(bidder_id)
        .bind(amount)
        .fetch_one(&self.pool)
        .await?;

        map_bump(&row)
    }

    pub async fn bumps_for_ask(&self, ask_id: Uuid) -> Result<Vec<Bump>> {
        let rows = sqlx::query(
            r#"
            SELECT id, ask_id, bidder_id, amount, created_at
            FROM bumps
            WHERE ask_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(ask_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_bump).collect()
    }

    /// Current pool total for an ask, in sats
    pub async fn bump_pool_total(&self, ask_id: Uuid) -> Result<i64> {
        let row = sqlx::query(
            r#"SELECT COALESCE(SUM(amount), 0)::BIGINT AS total FROM bumps WHERE ask_id = $1"#,
        )
        .bind(ask_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("total"))
    }

    // ==================== Offers ====================

    #[instrument(skip(self, content))]
    pub async fn create_offer(
        &self,
        ask_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<Offer> {
        let row = sqlx::query(
            r#"
            INSERT INTO offers (id, ask_id, author_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, ask_id, author_id, content, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ask_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        map_offer(&row)
    }

    pub async fn offers_for_ask(&self, ask_id: Uuid) -> Result<Vec<Offer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, ask_id, author_id, content, created_at
            FROM offers
            WHERE ask_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(ask_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_offer).collect()
    }

    // ==================== Transactions ====================

    /// Insert a pending wallet transaction. Settlement status and amount
    /// are stamped later by the external settlement collaborator.
    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> Result<Transaction> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (id, user_id, transaction_kind, transaction_status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, transaction_kind, transaction_status,
                      msats_settled, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(kind.as_str())
        .bind(TransactionStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;

        map_transaction(&row)
    }

    // ==================== Comments ====================

    pub async fn create_comment(
        &self,
        ask_id: Uuid,
        user_id: Uuid,
        parent_id: Option<Uuid>,
        content: &str,
    ) -> Result<Comment> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, ask_id, user_id, parent_id, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, ask_id, user_id, parent_id, content, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(ask_id)
        .bind(user_id)
        .bind(parent_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        map_comment(&row)
    }

    /// Flat comment rows for an ask, oldest first (tree assembly happens
    /// in the domain layer)
    pub async fn comments_for_ask(&self, ask_id: Uuid) -> Result<Vec<Comment>> {
        let rows = sqlx::query(
            r#"
            SELECT id, ask_id, user_id, parent_id, content, created_at
            FROM comments
            WHERE ask_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(ask_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_comment).collect()
    }

    // ==================== Taxonomy ====================

    /// Tags ranked by the number of asks carrying them
    pub async fn top_tags(&self, limit: i64) -> Result<Vec<TagCount>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id, t.name, t.created_at, COUNT(at.ask_id) AS ask_count
            FROM tags t
            JOIN ask_tags at ON at.tag_id = t.id
            GROUP BY t.id, t.name, t.created_at
            ORDER BY ask_count DESC, t.name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(TagCount {
                    tag: map_tag(row)?,
                    ask_count: row.get("ask_count"),
                })
            })
            .collect()
    }

    /// Prefix search over tag names, for autocomplete
    pub async fn search_tags(&self, term: &str, limit: i64) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at
            FROM tags
            WHERE name ILIKE $1 || '%'
            ORDER BY name ASC
            LIMIT $2
            "#,
        )
        .bind(term)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_tag).collect()
    }

    pub async fn excluded_tags_for_user(&self, user_id: Uuid) -> Result<Vec<Tag>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id, t.name, t.created_at
            FROM tags t
            JOIN user_excluded_tags ut ON ut.tag_id = t.id
            WHERE ut.user_id = $1
            ORDER BY t.name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_tag).collect()
    }

    #[instrument(skip(self))]
    pub async fn add_excluded_tag(&self, user_id: Uuid, tag_name: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let tag_row = sqlx::query(
            r#"
            INSERT INTO tags (id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tag_name)
        .fetch_one(&mut *tx)
        .await?;
        let tag_id: Uuid = tag_row.get("id");

        sqlx::query(
            r#"
            INSERT INTO user_excluded_tags (user_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(tag_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_excluded_tag(&self, user_id: Uuid, tag_name: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM user_excluded_tags
            WHERE user_id = $1
              AND tag_id = (SELECT id FROM tags WHERE name = $2)
            "#,
        )
        .bind(user_id)
        .bind(tag_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl LedgerStore for PostgresStore {
    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>> {
        self.get_user(user_id).await
    }

    async fn settled_transactions(&self, user_id: Uuid) -> Result<Vec<Transaction>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, transaction_kind, transaction_status,
                   msats_settled, created_at, updated_at
            FROM transactions
            WHERE user_id = $1 AND transaction_status = 'SETTLED'
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_transaction).collect()
    }

    async fn settled_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.ask_id, b.bidder_id, b.amount, b.created_at
            FROM bumps b
            JOIN asks a ON a.id = b.ask_id
            WHERE b.bidder_id = $1 AND a.status = 'settled'
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_bump).collect()
    }

    async fn settled_offer_pools_for_author(&self, user_id: Uuid) -> Result<Vec<OfferPool>> {
        let offer_rows = sqlx::query(
            r#"
            SELECT o.id, o.ask_id, o.author_id, o.content, o.created_at
            FROM offers o
            JOIN asks a ON a.id = o.ask_id
            WHERE o.author_id = $1 AND a.status = 'settled'
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let offers: Vec<Offer> = offer_rows
            .iter()
            .map(map_offer)
            .collect::<Result<Vec<_>>>()?;

        if offers.is_empty() {
            return Ok(Vec::new());
        }

        let ask_ids: Vec<Uuid> = offers.iter().map(|o| o.ask_id).collect();
        let bump_rows = sqlx::query(
            r#"
            SELECT id, ask_id, bidder_id, amount, created_at
            FROM bumps
            WHERE ask_id = ANY($1)
            "#,
        )
        .bind(&ask_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut bumps_by_ask: HashMap<Uuid, Vec<Bump>> = HashMap::new();
        for row in &bump_rows {
            let bump = map_bump(row)?;
            bumps_by_ask.entry(bump.ask_id).or_default().push(bump);
        }

        Ok(offers
            .into_iter()
            .map(|offer| {
                let bumps = bumps_by_ask.remove(&offer.ask_id).unwrap_or_default();
                OfferPool { offer, bumps }
            })
            .collect())
    }

    async fn locked_bumps_for_bidder(&self, user_id: Uuid) -> Result<Vec<Bump>> {
        let rows = sqlx::query(
            r#"
            SELECT b.id, b.ask_id, b.bidder_id, b.amount, b.created_at
            FROM bumps b
            JOIN asks a ON a.id = b.ask_id
            WHERE b.bidder_id = $1 AND a.status IN ('pending_acceptance', 'active')
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_bump).collect()
    }

    async fn count_open_invoices_since(
        &self,
        user_id: Uuid,
        created_after: DateTime<Utc>,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM transactions
            WHERE user_id = $1
              AND transaction_kind = 'INVOICE'
              AND transaction_status <> 'SETTLED'
              AND created_at > $2
            "#,
        )
        .bind(user_id)
        .bind(created_after)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("count"))
    }

    async fn latest_settled_transaction(
        &self,
        user_id: Uuid,
        kind: TransactionKind,
    ) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, transaction_kind, transaction_status,
                   msats_settled, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
              AND transaction_kind = $2
              AND transaction_status = 'SETTLED'
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_transaction).transpose()
    }
}

// ==================== Row mapping ====================

fn parse_ask_status(s: &str) -> Result<AskStatus> {
    AskStatus::try_from(s).map_err(AskpoolError::Validation)
}

fn parse_ask_kind(s: &str) -> Result<AskKind> {
    AskKind::try_from(s).map_err(AskpoolError::Validation)
}

fn map_user(row: &PgRow) -> Result<User> {
    Ok(User {
        id: row.get("id"),
        user_name: row.get("user_name"),
        created_at: row.get("created_at"),
    })
}

fn map_ask(row: &PgRow) -> Result<Ask> {
    Ok(Ask {
        id: row.get("id"),
        user_id: row.get("user_id"),
        ask_kind: parse_ask_kind(&row.get::<String, _>("ask_kind"))?,
        status: parse_ask_status(&row.get::<String, _>("status"))?,
        slug: row.get("slug"),
        title: row.get("title"),
        deadline_at: row.get("deadline_at"),
        accepted_deadline_at: row.get("accepted_deadline_at"),
        created_at: row.get("created_at"),
    })
}

fn map_bump(row: &PgRow) -> Result<Bump> {
    Ok(Bump {
        id: row.get("id"),
        ask_id: row.get("ask_id"),
        bidder_id: row.get("bidder_id"),
        amount: row.get("amount"),
        created_at: row.get("created_at"),
    })
}

fn map_offer(row: &PgRow) -> Result<Offer> {
    Ok(Offer {
        id: row.get("id"),
        ask_id: row.get("ask_id"),
        author_id: row.get("author_id"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    })
}

fn map_transaction(row: &PgRow) -> Result<Transaction> {
    Ok(Transaction {
        id: row.get("id"),
        user_id: row.get("user_id"),
        transaction_kind: TransactionKind::try_from(
            row.get::<String, _>("transaction_kind").as_str(),
        )
        .map_err(AskpoolError::Validation)?,
        transaction_status: TransactionStatus::try_from(
            row.get::<String, _>("transaction_status").as_str(),
        )
        .map_err(AskpoolError::Validation)?,
        msats_settled: row.get("msats_settled"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn map_comment(row: &PgRow) -> Result<Comment> {
    Ok(Comment {
        id: row.get("id"),
        ask_id: row.get("ask_id"),
        user_id: row.get("user_id"),
        parent_id: row.get("parent_id"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    })
}

fn map_tag(row: &PgRow) -> Result<Tag> {
    Ok(Tag {
        id: row.get("id"),
        name: row.get("name"),
        created_at: row.get("created_at"),
    })
}
