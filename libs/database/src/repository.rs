//! Generic store functions shared by sea-orm backed repositories.
//!
//! Domain repositories wrap a [`BaseRepository`] for their entity and add the
//! queries that are specific to them. Entities are keyed by a UUID primary key
//! and expose it through [`UuidEntity`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryOrder, QuerySelect,
};
use std::marker::PhantomData;
use uuid::Uuid;

/// Minimal contract for a persisted record: a stable UUID identity.
pub trait UuidEntity {
    fn id(&self) -> Uuid;
}

/// One page of rows plus the number of rows across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<M> {
    pub items: Vec<M>,
    pub total: u64,
}

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: UuidEntity + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Every row, sorted ascending by `order_by`
    pub async fn find_all_ordered(&self, order_by: E::Column) -> Result<Vec<E::Model>, DbErr>
    where
        E::Column: ColumnTrait,
    {
        E::find().order_by_asc(order_by).all(&self.db).await
    }

    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let inserted = model.insert(&self.db).await?;
        tracing::debug!(id = %inserted.id(), "Inserted row");
        Ok(inserted)
    }

    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let updated = model.update(&self.db).await?;
        tracing::debug!(id = %updated.id(), "Updated row");
        Ok(updated)
    }

    /// Returns the number of rows removed (0 when the id is unknown)
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = E::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    /// Offset page of all rows sorted ascending by `order_by`.
    ///
    /// `page_number` is 1-based. Pages past the end come back empty, with the
    /// real total.
    pub async fn find_page_ordered(
        &self,
        order_by: E::Column,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<E::Model>, DbErr>
    where
        E::Column: ColumnTrait,
    {
        let total = E::find().count(&self.db).await?;

        let offset = match page_offset(page_number, page_size) {
            Some(offset) if offset < total => offset,
            _ => {
                return Ok(Page {
                    items: Vec::new(),
                    total,
                });
            }
        };

        let items = E::find()
            .order_by_asc(order_by)
            .offset(offset)
            .limit(page_size)
            .all(&self.db)
            .await?;

        Ok(Page { items, total })
    }
}

/// Rows to skip for a 1-based page. `None` when the offset cannot be bound
/// as a PostgreSQL `BIGINT`.
fn page_offset(page_number: u64, page_size: u64) -> Option<u64> {
    let offset = page_number.saturating_sub(1).checked_mul(page_size)?;
    i64::try_from(offset).ok().map(|_| offset)
}
