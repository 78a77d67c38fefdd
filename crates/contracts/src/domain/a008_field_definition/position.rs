use super::aggregate::{FieldDefinition, FieldDefinitionForm, FieldKind};

crate::choice_enum! {
    /// Область страницы, где выводится поле
    pub enum PositionKind {
        Header => ("header", "Đầu trang"),
        Sidebar => ("sidebar", "Thanh bên"),
        Content => ("content", "Nội dung"),
        Footer => ("footer", "Chân trang"),
        Popup => ("popup", "Cửa sổ nổi"),
    }
}

impl FieldKind for PositionKind {
    const INDEX: &'static str = "a008";
    const COLLECTION: &'static str = "field_position";
    const ELEMENT: &'static str = "Vị trí";
    const LIST: &'static str = "Vị trí trường";

    fn icon(&self) -> &'static str {
        match self {
            PositionKind::Header => "layout-top",
            PositionKind::Sidebar => "layout-sidebar",
            PositionKind::Content => "file-text",
            PositionKind::Footer => "layout-bottom",
            PositionKind::Popup => "maximize",
        }
    }
}

pub type FieldPosition = FieldDefinition<PositionKind>;
pub type FieldPositionForm = FieldDefinitionForm<PositionKind>;
