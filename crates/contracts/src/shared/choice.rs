//! Перечисления с фиксированным набором значений для select-полей и фасетов.
//!
//! Каждое значение имеет стабильный ключ (он же serde-представление) и
//! подпись для UI.

/// Значение из закрытого списка вариантов.
pub trait Choice: Copy + PartialEq + Send + Sync + 'static {
    /// Все варианты в порядке отображения
    const ALL: &'static [Self];

    /// Стабильный ключ (используется в `<option value=...>` и в JSON)
    fn key(&self) -> &'static str;

    /// Подпись для пользователя
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// Объявляет enum вместе с реализацией [`Choice`], serde и `Default`
/// (по умолчанию берётся первый вариант).
///
/// ```rust,ignore
/// choice_enum! {
///     pub enum PostStatus {
///         Draft => ("draft", "Bản nháp"),
///         Published => ("published", "Đã xuất bản"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $crate::shared::choice::Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::shared::choice::Choice>::ALL[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::shared::choice::Choice::label(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Choice;

    crate::choice_enum! {
        enum Sample {
            First => ("first", "Một"),
            SecondValue => ("second_value", "Hai"),
        }
    }

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(Sample::SecondValue.key(), "second_value");
        assert_eq!(Sample::First.label(), "Một");
        assert_eq!(Sample::default(), Sample::First);
        assert_eq!(Sample::from_key("second_value"), Some(Sample::SecondValue));
        assert_eq!(Sample::from_key("third"), None);
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Sample::SecondValue).unwrap();
        assert_eq!(json, "\"second_value\"");
        let back: Sample = serde_json::from_str("\"first\"").unwrap();
        assert_eq!(back, Sample::First);
    }
}
