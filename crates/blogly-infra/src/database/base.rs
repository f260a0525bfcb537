use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    DbConn, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use blogly_core::RepoError;
use blogly_core::domain::Record;
use blogly_core::ports::BaseRepository;

use super::errors::map_db_err;

/// Generic SQL repository over a SeaORM entity.
pub struct SqlRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqlRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T> for SqlRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    T: Record + From<E::Model> + Send + 'static,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
