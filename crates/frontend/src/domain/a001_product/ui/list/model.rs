use crate::shared::config::RemoteConfig;
use crate::shared::remote::{fetch_table, RemoteError};
use contracts::domain::a001_product::aggregate::Product;

/// Все строки таблицы товаров из удалённого сервиса
pub async fn fetch_products(remote: &RemoteConfig) -> Result<Vec<Product>, RemoteError> {
    fetch_table::<Product>(remote, &remote.products_table).await
}
