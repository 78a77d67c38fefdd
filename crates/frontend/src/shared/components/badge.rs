use contracts::domain::a001_product::aggregate::ProductStatus;
use contracts::domain::a002_post::aggregate::PostStatus;
use contracts::domain::a004_order::aggregate::{OrderStatus, PaymentStatus};
use contracts::domain::a006_admin_user::aggregate::UserStatus;
use contracts::domain::common::ActiveStatus;
use contracts::shared::choice::Choice;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Цвет бейджа для значения статуса
pub trait BadgeTone: Choice {
    fn badge_color(&self) -> BadgeColor;
}

impl BadgeTone for ProductStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            ProductStatus::Active => BadgeColor::Success,
            ProductStatus::Inactive => BadgeColor::Subtle,
            ProductStatus::OutOfStock => BadgeColor::Danger,
        }
    }
}

impl BadgeTone for PostStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            PostStatus::Draft => BadgeColor::Subtle,
            PostStatus::Published => BadgeColor::Success,
            PostStatus::Scheduled => BadgeColor::Informative,
        }
    }
}

impl BadgeTone for OrderStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            OrderStatus::Pending => BadgeColor::Warning,
            OrderStatus::Processing => BadgeColor::Informative,
            OrderStatus::Shipped => BadgeColor::Brand,
            OrderStatus::Delivered => BadgeColor::Success,
            OrderStatus::Cancelled => BadgeColor::Danger,
        }
    }
}

impl BadgeTone for PaymentStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            PaymentStatus::Pending => BadgeColor::Warning,
            PaymentStatus::Paid => BadgeColor::Success,
            PaymentStatus::Refunded => BadgeColor::Informative,
            PaymentStatus::Failed => BadgeColor::Danger,
        }
    }
}

impl BadgeTone for UserStatus {
    fn badge_color(&self) -> BadgeColor {
        match self {
            UserStatus::Active => BadgeColor::Success,
            UserStatus::Inactive => BadgeColor::Subtle,
            UserStatus::Suspended => BadgeColor::Danger,
        }
    }
}

impl BadgeTone for ActiveStatus {
    fn badge_color(&self) -> BadgeColor {
        if self.is_active() {
            BadgeColor::Success
        } else {
            BadgeColor::Subtle
        }
    }
}

/// Бейдж статуса с подписью из перечисления
pub fn status_badge<T: BadgeTone>(status: T) -> AnyView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=status.badge_color()>
            {status.label()}
        </Badge>
    }
    .into_any()
}

/// Нейтральный бейдж для вида записи (тип пункта меню, тип поля)
pub fn kind_badge<T: Choice>(kind: T) -> AnyView {
    view! {
        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
            {kind.label()}
        </Badge>
    }
    .into_any()
}
