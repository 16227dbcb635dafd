//! Contact repository
//!
//! Every query is scoped by `user_id`.

use async_trait::async_trait;
use cm_core::traits::Id;
use cm_core::{Page, PageRequest};
use cm_models::Contact;
use sqlx::PgPool;

use crate::repository::{contains_pattern, RepositoryResult};
use crate::store::ContactStore;

/// DTO for creating or replacing a contact
#[derive(Debug, Clone)]
pub struct ContactDto {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Optional substring filters, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSearch {
    /// Matches first name OR last name
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactSearch {
    /// Blank filters are dropped
    pub fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: clean(name),
            email: clean(email),
            phone: clean(phone),
        }
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        self.name.as_deref().map_or(true, |n| contact.name_matches(n))
            && self.email.as_deref().map_or(true, |e| contact.email_matches(e))
            && self.phone.as_deref().map_or(true, |p| contact.phone_matches(p))
    }
}

/// Contact repository implementation
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn create(&self, user_id: Id, dto: ContactDto) -> RepositoryResult<Contact> {
        let row = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (first_name, last_name, email, phone, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, first_name, last_name, email, phone, user_id, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find(&self, user_id: Id, id: Id) -> RepositoryResult<Option<Contact>> {
        let row = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, phone, user_id, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn replace(&self, user_id: Id, id: Id, dto: ContactDto) -> RepositoryResult<Option<Contact>> {
        let row = sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts SET
                first_name = $1,
                last_name = $2,
                email = $3,
                phone = $4,
                updated_at = NOW()
            WHERE id = $5 AND user_id = $6
            RETURNING id, first_name, last_name, email, phone, user_id, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, user_id: Id, id: Id) -> RepositoryResult<bool> {
        // addresses go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        user_id: Id,
        search: &ContactSearch,
        page: PageRequest,
    ) -> RepositoryResult<Page<Contact>> {
        let name = search.name.as_deref().map(contains_pattern);
        let email = search.email.as_deref().map(contains_pattern);
        let phone = search.phone.as_deref().map(contains_pattern);

        let items = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, first_name, last_name, email, phone, user_id, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
              AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
              AND ($3::text IS NULL OR email ILIKE $3)
              AND ($4::text IS NULL OR phone ILIKE $4)
            ORDER BY id ASC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(user_id)
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contacts
            WHERE user_id = $1
              AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
              AND ($3::text IS NULL OR email ILIKE $3)
              AND ($4::text IS NULL OR phone ILIKE $4)
            "#,
        )
        .bind(user_id)
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(Page::new(items, total, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contact(first: &str, last: Option<&str>, email: Option<&str>) -> Contact {
        let now = Utc::now();
        Contact {
            id: 1,
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            email: email.map(str::to_string),
            phone: None,
            user_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let search = ContactSearch::new(Some("  ".into()), Some("".into()), None);
        assert_eq!(search, ContactSearch::default());
        assert!(search.matches(&contact("anyone", None, None)));
    }

    #[test]
    fn test_filters_are_anded() {
        let search = ContactSearch::new(Some("dau".into()), Some("gmail".into()), None);
        assert!(search.matches(&contact("Daud", None, Some("d@gmail.com"))));
        assert!(!search.matches(&contact("Daud", None, Some("d@yahoo.com"))));
        assert!(!search.matches(&contact("Budi", None, Some("b@gmail.com"))));
    }

    #[test]
    fn test_name_matches_last_name() {
        let search = ContactSearch::new(Some("rama".into()), None, None);
        assert!(search.matches(&contact("Daud", Some("Ramadhan"), None)));
    }
}
