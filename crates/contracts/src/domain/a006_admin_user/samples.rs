use super::aggregate::{AdminRole, AdminUser, UserStatus};

fn user(
    id: i64,
    name: &str,
    email: &str,
    role: AdminRole,
    status: UserStatus,
    created_at: &str,
    last_login: Option<&str>,
) -> AdminUser {
    AdminUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at: created_at.to_string(),
        last_login: last_login.map(str::to_string),
    }
}

pub fn sample_admin_users() -> Vec<AdminUser> {
    use AdminRole::*;
    vec![
        user(1, "Nguyễn Quản Trị", "admin@shop.vn", Admin, UserStatus::Active, "2023-01-10", Some("2024-03-15T08:12:00Z")),
        user(2, "Trần Thị Mai", "mai.tran@shop.vn", Editor, UserStatus::Active, "2023-04-22", Some("2024-03-14T17:40:00Z")),
        user(3, "Lê Văn Hùng", "hung.le@shop.vn", Manager, UserStatus::Active, "2023-07-05", Some("2024-03-10T09:05:00Z")),
        user(4, "Phạm Thu Hà", "ha.pham@shop.vn", Editor, UserStatus::Inactive, "2023-09-18", None),
        user(5, "Đỗ Minh Khoa", "khoa.do@shop.vn", Viewer, UserStatus::Suspended, "2024-01-02", Some("2024-02-01T13:30:00Z")),
    ]
}
