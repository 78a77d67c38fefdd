use crate::domain::common::{assign_trimmed, Record, RecordForm, RecordId};
use crate::error::{non_negative, require, ValidationError};
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

/// Порог "мало на складе" для бейджа и дашборда
pub const LOW_STOCK_THRESHOLD: u32 = 10;

crate::choice_enum! {
    /// Статус товара в каталоге
    pub enum ProductStatus {
        Active => ("active", "Đang bán"),
        Inactive => ("inactive", "Ngừng bán"),
        OutOfStock => ("out_of_stock", "Hết hàng"),
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога.
///
/// Та же форма строки приходит из удалённой таблицы `products`, поэтому
/// необязательные поля имеют `serde(default)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub sales: u32,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Выручка по товару за всё время (цена × продажи)
    pub fn revenue(&self) -> f64 {
        self.price * f64::from(self.sales)
    }
}

impl Record for Product {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Sản phẩm"
    }

    fn list_name() -> &'static str {
        "Sản phẩm"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма создания/редактирования товара. Рейтинг и продажи не редактируются.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub status: ProductStatus,
}

impl ProductForm {
    fn stock_value(&self) -> u32 {
        u32::try_from(self.stock.max(0)).unwrap_or(u32::MAX)
    }
}

impl RecordForm for ProductForm {
    type Record = Product;

    fn from_record(record: &Product) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            price: record.price,
            stock: i64::from(record.stock),
            status: record.status,
        }
    }

    fn create(&self, id: RecordId) -> Product {
        Product {
            id,
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            price: self.price,
            stock: self.stock_value(),
            status: self.status,
            rating: 0.0,
            sales: 0,
        }
    }

    fn apply(&self, record: &mut Product) {
        assign_trimmed(&mut record.name, &self.name);
        record.category = self.category.clone();
        record.price = self.price;
        record.stock = self.stock_value();
        record.status = self.status;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        non_negative("price", self.price)?;
        non_negative("stock", self.stock)?;
        Ok(())
    }
}

// ============================================================================
// Filter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub query: String,
    pub category: Facet<String>,
    pub status: Facet<ProductStatus>,
}

impl ListFilter<Product> for ProductFilter {
    fn matches(&self, record: &Product) -> bool {
        matches_query(&self.query, &[&record.name])
            && self.category.matches_str(&record.category)
            && self.status.matches(&record.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::samples::sample_products;
    use crate::domain::common::RecordStore;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_filter_by_query_and_category() {
        let products = sample_products();
        let filter = ProductFilter {
            query: "PRO".to_string(),
            category: Facet::from_text_key("Điện thoại"),
            status: Facet::All,
        };
        let visible = apply_filter(&products, &filter);
        assert!(!visible.is_empty());
        for product in &visible {
            assert!(product.name.to_lowercase().contains("pro"));
            assert_eq!(product.category, "Điện thoại");
        }
        let expected = products
            .iter()
            .filter(|p| p.name.to_lowercase().contains("pro") && p.category == "Điện thoại")
            .count();
        assert_eq!(visible.len(), expected);
    }

    #[test]
    fn test_form_roundtrip_keeps_rating_and_sales() {
        let mut store = RecordStore::from_items(sample_products());
        let original = store.get(1).cloned().unwrap();
        let mut form = ProductForm::from_record(&original);
        form.price = 1.0;
        store.update(1, &form).unwrap();
        let updated = store.get(1).unwrap();
        assert_eq!(updated.price, 1.0);
        assert_eq!(updated.rating, original.rating);
        assert_eq!(updated.sales, original.sales);
        assert_eq!(updated.name, original.name);
    }

    #[test]
    fn test_negative_stock_rejected() {
        let form = ProductForm {
            name: "Cáp sạc".to_string(),
            category: "Phụ kiện".to_string(),
            price: 99_000.0,
            stock: -3,
            status: ProductStatus::Active,
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Negative { field: "stock" })
        );
    }

    #[test]
    fn test_remote_row_with_missing_fields() {
        let row = r#"{"id": 12, "name": "Loa Bluetooth", "price": 590000}"#;
        let product: Product = serde_json::from_str(row).unwrap();
        assert_eq!(product.id, 12);
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.stock, 0);
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_unchanged_edit_keeps_padded_remote_name() {
        let row = r#"{"id": 3, "name": " Tai nghe ", "category": "Phụ kiện", "price": 450000}"#;
        let product: Product = serde_json::from_str(row).unwrap();
        let mut store = RecordStore::from_items(vec![product.clone()]);

        let form = ProductForm::from_record(&product);
        store.update(3, &form).unwrap();
        assert_eq!(store.get(3), Some(&product));

        let mut renamed = form;
        renamed.name = " Tai nghe AirPods ".to_string();
        store.update(3, &renamed).unwrap();
        assert_eq!(store.get(3).map(|p| p.name.as_str()), Some("Tai nghe AirPods"));
    }

    #[test]
    fn test_create_trims_name() {
        let form = ProductForm {
            name: "  Sạc dự phòng  ".to_string(),
            category: "Phụ kiện".to_string(),
            ..Default::default()
        };
        assert_eq!(form.create(9).name, "Sạc dự phòng");
    }
}
