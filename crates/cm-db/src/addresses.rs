//! Address repository
//!
//! Every query is scoped by `contact_id`; the caller has already checked
//! that the contact belongs to the acting user.

use async_trait::async_trait;
use cm_core::traits::Id;
use cm_models::Address;
use sqlx::PgPool;

use crate::repository::RepositoryResult;
use crate::store::AddressStore;

/// DTO for creating or replacing an address
#[derive(Debug, Clone)]
pub struct AddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

/// Address repository implementation
pub struct AddressRepository {
    pool: PgPool,
}

impl AddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressStore for AddressRepository {
    async fn create(&self, contact_id: Id, dto: AddressDto) -> RepositoryResult<Address> {
        let row = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (street, city, state, country, postal_code, contact_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING id, street, city, state, country, postal_code, contact_id, created_at, updated_at
            "#,
        )
        .bind(&dto.street)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(&dto.country)
        .bind(&dto.postal_code)
        .bind(contact_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find(&self, contact_id: Id, id: Id) -> RepositoryResult<Option<Address>> {
        let row = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, street, city, state, country, postal_code, contact_id, created_at, updated_at
            FROM addresses
            WHERE id = $1 AND contact_id = $2
            "#,
        )
        .bind(id)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self, contact_id: Id) -> RepositoryResult<Vec<Address>> {
        let rows = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, street, city, state, country, postal_code, contact_id, created_at, updated_at
            FROM addresses
            WHERE contact_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn replace(&self, contact_id: Id, id: Id, dto: AddressDto) -> RepositoryResult<Option<Address>> {
        let row = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses SET
                street = $1,
                city = $2,
                state = $3,
                country = $4,
                postal_code = $5,
                updated_at = NOW()
            WHERE id = $6 AND contact_id = $7
            RETURNING id, street, city, state, country, postal_code, contact_id, created_at, updated_at
            "#,
        )
        .bind(&dto.street)
        .bind(&dto.city)
        .bind(&dto.state)
        .bind(&dto.country)
        .bind(&dto.postal_code)
        .bind(id)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, contact_id: Id, id: Id) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1 AND contact_id = $2")
            .bind(id)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
