use super::aggregate::{FieldDefinition, FieldDefinitionForm, FieldKind};

crate::choice_enum! {
    /// Способ отображения значения поля
    pub enum FormatKind {
        Text => ("text", "Văn bản"),
        Number => ("number", "Số"),
        Currency => ("currency", "Tiền tệ"),
        Date => ("date", "Ngày tháng"),
        Boolean => ("boolean", "Đúng/Sai"),
        Image => ("image", "Hình ảnh"),
    }
}

impl FieldKind for FormatKind {
    const INDEX: &'static str = "a010";
    const COLLECTION: &'static str = "field_format";
    const ELEMENT: &'static str = "Định dạng";
    const LIST: &'static str = "Định dạng trường";

    fn icon(&self) -> &'static str {
        match self {
            FormatKind::Text => "type",
            FormatKind::Number => "hash",
            FormatKind::Currency => "dollar-sign",
            FormatKind::Date => "calendar",
            FormatKind::Boolean => "toggle",
            FormatKind::Image => "image",
        }
    }
}

pub type FieldFormat = FieldDefinition<FormatKind>;
pub type FieldFormatForm = FieldDefinitionForm<FormatKind>;
