use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::ProductResult,
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository backed by Sea-ORM
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_title(&self, title: &str) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Title.eq(title))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Category.eq(category))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_all_categories(&self) -> ProductResult<Vec<String>> {
        let categories = entity::Entity::find()
            .select_only()
            .column(entity::Column::Category)
            .distinct()
            .order_by_asc(entity::Column::Category)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(categories)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let persisted = product.is_persisted();
        let active_model: entity::ActiveModel = product.into();

        let model = if persisted {
            entity::Entity::insert(active_model)
                .on_conflict(
                    OnConflict::column(entity::Column::Id)
                        .update_columns([
                            entity::Column::Title,
                            entity::Column::Price,
                            entity::Column::Category,
                            entity::Column::Description,
                            entity::Column::ImageUrl,
                        ])
                        .to_owned(),
                )
                .exec_with_returning(&self.db)
                .await?
        } else {
            active_model.insert(&self.db).await?
        };

        tracing::info!(product_id = model.id, "Saved product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(())
    }
}
