use super::aggregate::{FieldDefinition, FieldKind};
use super::format::{FieldFormat, FormatKind};
use super::position::{FieldPosition, PositionKind};
use crate::domain::common::ActiveStatus;

#[allow(clippy::too_many_arguments)]
fn definition<K: FieldKind>(
    id: i64,
    name: &str,
    code: &str,
    description: &str,
    kind: K,
    status: ActiveStatus,
    usage_count: u32,
) -> FieldDefinition<K> {
    FieldDefinition {
        id,
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        kind,
        status,
        usage_count,
    }
}

pub fn sample_positions() -> Vec<FieldPosition> {
    use ActiveStatus::*;
    use PositionKind::*;
    vec![
        definition(1, "Vị trí đầu trang", "vi_tri_dau_trang", "Hiển thị trên thanh đầu trang", Header, Active, 8),
        definition(2, "Cột bên phải", "cot_ben_phai", "Khối thông tin ở thanh bên", Sidebar, Active, 5),
        definition(3, "Thân bài viết", "than_bai_viet", "Trong nội dung chính", Content, Active, 14),
        definition(4, "Chân trang", "chan_trang", "Thông tin liên hệ cuối trang", Footer, Active, 3),
        definition(5, "Cửa sổ khuyến mãi", "cua_so_khuyen_mai", "Popup khi vào trang", Popup, Inactive, 0),
    ]
}

pub fn sample_formats() -> Vec<FieldFormat> {
    use ActiveStatus::*;
    use FormatKind::*;
    vec![
        definition(1, "Văn bản ngắn", "van_ban_ngan", "Một dòng văn bản", Text, Active, 21),
        definition(2, "Số nguyên", "so_nguyen", "Số không có phần thập phân", Number, Active, 9),
        definition(3, "Giá tiền", "gia_tien", "Định dạng VND có dấu phân cách", Currency, Active, 6),
        definition(4, "Ngày", "ngay", "Ngày/tháng/năm", Date, Active, 4),
        definition(5, "Có/Không", "co_khong", "Công tắc bật tắt", Boolean, Inactive, 2),
        definition(6, "Ảnh đại diện", "anh_dai_dien", "Ảnh từ thư viện media", Image, Active, 7),
    ]
}
