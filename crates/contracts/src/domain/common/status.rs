crate::choice_enum! {
    /// Статус включения для справочников (позиции и форматы полей)
    pub enum ActiveStatus {
        Active => ("active", "Hoạt động"),
        Inactive => ("inactive", "Tạm tắt"),
    }
}

impl ActiveStatus {
    pub fn toggled(self) -> Self {
        match self {
            ActiveStatus::Active => ActiveStatus::Inactive,
            ActiveStatus::Inactive => ActiveStatus::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == ActiveStatus::Active
    }
}
