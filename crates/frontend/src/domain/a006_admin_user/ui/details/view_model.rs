use crate::shared::crud::form::parse_choice;
use crate::shared::crud::CrudPage;
use contracts::domain::a006_admin_user::aggregate::{
    AdminRole, AdminUser, AdminUserForm, UserStatus,
};
use contracts::error::ValidationError;
use contracts::shared::choice::Choice;
use contracts::shared::time::today;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AdminUserDetailsViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub role: RwSignal<String>,
    pub status: RwSignal<String>,
    created_at: StoredValue<String>,
    pub error: RwSignal<Option<String>>,
}

impl AdminUserDetailsViewModel {
    pub fn new(form: &AdminUserForm) -> Self {
        let created_at = if form.created_at.is_empty() {
            today()
        } else {
            form.created_at.clone()
        };
        Self {
            name: RwSignal::new(form.name.clone()),
            email: RwSignal::new(form.email.clone()),
            role: RwSignal::new(form.role.key().to_string()),
            status: RwSignal::new(form.status.key().to_string()),
            created_at: StoredValue::new(created_at),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> Result<AdminUserForm, ValidationError> {
        Ok(AdminUserForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            role: parse_choice::<AdminRole>("role", &self.role.get_untracked())?,
            status: parse_choice::<UserStatus>("status", &self.status.get_untracked())?,
            created_at: self.created_at.get_value(),
        })
    }

    pub fn save_command(&self, page: CrudPage<AdminUser>) {
        let result = self
            .to_form()
            .map_err(|e| e.to_string())
            .and_then(|form| page.submit(&form).map_err(|e| e.to_string()));
        self.error.set(result.err());
    }
}
