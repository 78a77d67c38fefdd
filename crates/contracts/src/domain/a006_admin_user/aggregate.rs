use crate::domain::common::{assign_trimmed, Record, RecordForm, RecordId, UniqueKey};
use crate::error::{require, ValidationError};
use crate::shared::list_filter::{matches_query, Facet, ListFilter};
use serde::{Deserialize, Serialize};

crate::choice_enum! {
    pub enum AdminRole {
        Admin => ("admin", "Quản trị viên"),
        Manager => ("manager", "Quản lý"),
        Editor => ("editor", "Biên tập viên"),
        Viewer => ("viewer", "Người xem"),
    }
}

crate::choice_enum! {
    pub enum UserStatus {
        Active => ("active", "Hoạt động"),
        Inactive => ("inactive", "Không hoạt động"),
        Suspended => ("suspended", "Đã khóa"),
    }
}

impl UserStatus {
    /// Быстрое переключение из списка: активный ↔ неактивный.
    /// Заблокированный пользователь разблокируется в активного.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive | UserStatus::Suspended => UserStatus::Active,
        }
    }
}

/// Учётная запись администратора панели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub status: UserStatus,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<String>,
}

impl AdminUser {
    /// Инициалы для аватара: первые буквы первого и последнего слова имени
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Record for AdminUser {
    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn unique_key(&self) -> Option<UniqueKey<'_>> {
        Some(("email", &self.email))
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "admin_user"
    }

    fn element_name() -> &'static str {
        "Người dùng"
    }

    fn list_name() -> &'static str {
        "Người dùng quản trị"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserForm {
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    pub status: UserStatus,
    /// Дата создания для новых записей
    pub created_at: String,
}

impl RecordForm for AdminUserForm {
    type Record = AdminUser;

    fn from_record(record: &AdminUser) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            status: record.status,
            created_at: record.created_at.clone(),
        }
    }

    fn create(&self, id: RecordId) -> AdminUser {
        let mut user = AdminUser {
            id,
            name: String::new(),
            email: String::new(),
            role: AdminRole::default(),
            status: UserStatus::default(),
            created_at: self.created_at.clone(),
            last_login: None,
        };
        self.apply(&mut user);
        user
    }

    fn apply(&self, record: &mut AdminUser) {
        assign_trimmed(&mut record.name, &self.name);
        if record.email != self.email {
            record.email = self.email.trim().to_lowercase();
        }
        record.role = self.role;
        record.status = self.status;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(ValidationError::Malformed { field: "email" }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminUserFilter {
    pub query: String,
    pub role: Facet<AdminRole>,
    pub status: Facet<UserStatus>,
}

impl ListFilter<AdminUser> for AdminUserFilter {
    fn matches(&self, record: &AdminUser) -> bool {
        matches_query(&self.query, &[&record.name, &record.email])
            && self.role.matches(&record.role)
            && self.status.matches(&record.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_admin_user::samples::sample_admin_users;
    use crate::domain::common::RecordStore;
    use crate::error::StoreError;
    use crate::shared::list_filter::apply_filter;

    #[test]
    fn test_toggle_status() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Suspended.toggled(), UserStatus::Active);

        let mut store = RecordStore::from_items(sample_admin_users());
        store
            .modify(1, |user| {
                user.status = user.status.toggled();
                Ok(())
            })
            .unwrap();
        assert_eq!(store.get(1).map(|u| u.status), Some(UserStatus::Inactive));
    }

    #[test]
    fn test_email_unique_case_insensitive_input() {
        let mut store = RecordStore::from_items(sample_admin_users());
        let form = AdminUserForm {
            name: "Người mới".to_string(),
            email: " ADMIN@shop.vn ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            store.create(&form),
            Err(StoreError::Validation(ValidationError::Duplicate { field: "email", .. }))
        ));
    }

    #[test]
    fn test_email_format() {
        let mut form = AdminUserForm {
            name: "A".to_string(),
            email: "khong-hop-le".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Malformed { field: "email" })
        );
        form.email = "a@b.vn".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_initials() {
        let user = &sample_admin_users()[1];
        assert_eq!(user.name, "Trần Thị Mai");
        assert_eq!(user.initials(), "TM");
    }

    #[test]
    fn test_filter_by_role() {
        let users = sample_admin_users();
        let editors = AdminUserFilter {
            role: Facet::Only(AdminRole::Editor),
            ..Default::default()
        };
        let found = apply_filter(&users, &editors);
        assert!(!found.is_empty());
        assert!(found.iter().all(|u| u.role == AdminRole::Editor));
    }
}
