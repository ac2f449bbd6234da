//! Product persistence: one statement per operation, committed immediately.

use crate::error::AppError;
use crate::models::{NewProduct, Product};
use sqlx::SqlitePool;

const COLUMNS: &str = r#"id, name, "desc", price, qty"#;

pub struct ProductService;

impl ProductService {
    /// All products in insertion (id) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "product" ORDER BY id"#, COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one product by primary key. Absent is `Ok(None)`.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!(r#"SELECT {} FROM "product" WHERE id = ?"#, COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert and return the stored row with its assigned id. Duplicate name is `Conflict`.
    pub async fn create(pool: &SqlitePool, new: &NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            r#"INSERT INTO "product" (name, "desc", price, qty) VALUES (?, ?, ?, ?) RETURNING {}"#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, name = %new.name, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&new.name)
            .bind(&new.desc)
            .bind(new.price)
            .bind(new.qty)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::from_write(e, &format!("product '{}'", new.name)))?;
        tracing::info!(id = row.id, name = %row.name, "product created");
        Ok(row)
    }

    /// Overwrite every field of product `id`. Absent id is `NotFound`.
    pub async fn update(pool: &SqlitePool, id: i64, new: &NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            r#"UPDATE "product" SET name = ?, "desc" = ?, price = ?, qty = ? WHERE id = ? RETURNING {}"#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&new.name)
            .bind(&new.desc)
            .bind(new.price)
            .bind(new.qty)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| AppError::from_write(e, &format!("product '{}'", new.name)))?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        tracing::info!(id, "product updated");
        Ok(row)
    }

    /// Delete product `id` and return the removed row. Absent id is `NotFound`.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Product, AppError> {
        let sql = format!(r#"DELETE FROM "product" WHERE id = ? RETURNING {}"#, COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        tracing::info!(id, "product deleted");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    fn widget(name: &str) -> NewProduct {
        NewProduct {
            name: name.into(),
            desc: format!("A {}", name),
            price: 9.99,
            qty: 10,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let pool = setup_test_db().await;
        let created = ProductService::create(&pool, &widget("Widget")).await.unwrap();
        assert_eq!(created.id, 1);
        let fetched = ProductService::get(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, widget("Widget").with_id(1));
    }

    #[tokio::test]
    async fn get_absent_is_none() {
        let pool = setup_test_db().await;
        assert!(ProductService::get(&pool, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_every_insert_in_order() {
        let pool = setup_test_db().await;
        let names = ["Anvil", "Bolt", "Cog", "Dynamo"];
        for name in names {
            ProductService::create(&pool, &widget(name)).await.unwrap();
        }
        let listed = ProductService::list(&pool).await.unwrap();
        assert_eq!(listed.len(), names.len());
        let listed_names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(listed_names, names);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let pool = setup_test_db().await;
        ProductService::create(&pool, &widget("Widget")).await.unwrap();
        let err = ProductService::create(&pool, &widget("Widget")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(ProductService::list(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_overwrites_every_field() {
        let pool = setup_test_db().await;
        let created = ProductService::create(&pool, &widget("Widget")).await.unwrap();
        let replacement = NewProduct {
            name: "Gadget".into(),
            desc: "A gadget".into(),
            price: 1.5,
            qty: 3,
        };
        let updated = ProductService::update(&pool, created.id, &replacement).await.unwrap();
        assert_eq!(updated, replacement.clone().with_id(created.id));
        let fetched = ProductService::get(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, replacement.with_id(created.id));
    }

    #[tokio::test]
    async fn update_into_taken_name_is_conflict() {
        let pool = setup_test_db().await;
        ProductService::create(&pool, &widget("Widget")).await.unwrap();
        let gadget = ProductService::create(&pool, &widget("Gadget")).await.unwrap();
        let err = ProductService::update(&pool, gadget.id, &widget("Widget")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_and_delete_absent_are_not_found() {
        let pool = setup_test_db().await;
        let err = ProductService::update(&pool, 5, &widget("Widget")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = ProductService::delete(&pool, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_returns_row_and_removes_it() {
        let pool = setup_test_db().await;
        let created = ProductService::create(&pool, &widget("Widget")).await.unwrap();
        let deleted = ProductService::delete(&pool, created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(ProductService::get(&pool, created.id).await.unwrap().is_none());
        assert!(ProductService::list(&pool).await.unwrap().is_empty());
    }
}
