//! Генерация slug/code из отображаемого имени.
//!
//! Одна функция на все формы: категории используют дефис (`dien-thoai`),
//! поля конфигурации используют подчёркивание (`vi_tri_dau_trang`).

use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Разделитель для URL-slug
pub const SLUG_SEPARATOR: char = '-';

/// Разделитель для кодов-идентификаторов
pub const CODE_SEPARATOR: char = '_';

/// `"Điện thoại"` → `"dien-thoai"`
pub fn slugify(name: &str) -> String {
    normalize_token(name, SLUG_SEPARATOR)
}

/// `"Vị trí đầu trang"` → `"vi_tri_dau_trang"`
pub fn codify(name: &str) -> String {
    normalize_token(name, CODE_SEPARATOR)
}

/// Нормализует имя в токен из `[a-z0-9]`, склеенный одиночными `separator`.
///
/// Порядок: lowercase → NFD без диакритики → `đ` в `d` → выбрасывание
/// прочих символов, в том числе `-` и `_` из самого имени. Пробелы в любом
/// количестве дают ровно один разделитель; по краям разделителей нет.
pub fn normalize_token(name: &str, separator: char) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.to_lowercase().nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        let ch = match ch {
            'đ' | 'Đ' => 'd',
            other => other,
        };

        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            pending_separator = true;
        }
    }

    out
}

/// Готовый токен: только `[a-z0-9]` и одиночные `separator` между ними
pub fn is_valid_token(token: &str, separator: char) -> bool {
    !token.is_empty()
        && token
            .split(separator)
            .all(|part| !part.is_empty() && part.chars().all(is_token_char))
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Возвращает `base`, если он свободен, иначе первый свободный из
/// `base-2`, `base-3`, ... (с тем же разделителем).
pub fn unique_token<'a, I>(base: &str, separator: char, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    if base.is_empty() {
        return String::new();
    }
    let taken: HashSet<&str> = existing.into_iter().collect();
    if !taken.contains(base) {
        return base.to_string();
    }
    (2_u32..)
        .map(|n| format!("{base}{separator}{n}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean(token: &str, separator: char) -> bool {
        token.is_empty() || is_valid_token(token, separator)
    }

    #[test]
    fn test_vietnamese_names() {
        assert_eq!(slugify("Điện thoại"), "dien-thoai");
        assert_eq!(slugify("Ưu đãi"), "uu-dai");
        assert_eq!(slugify("Máy tính bảng"), "may-tinh-bang");
        assert_eq!(slugify("ĐỒNG HỒ THÔNG MINH"), "dong-ho-thong-minh");
    }

    #[test]
    fn test_code_variant() {
        assert_eq!(codify("Vị trí đầu trang"), "vi_tri_dau_trang");
        assert_eq!(codify("Ngày giao hàng"), "ngay_giao_hang");
    }

    #[test]
    fn test_whitespace_and_separators_collapse() {
        assert_eq!(slugify("  Tin   tức -- mới  "), "tin-tuc-moi");
        assert_eq!(slugify("a_b - c"), "ab-c");
        assert_eq!(codify("a - b"), "a_b");
        assert_eq!(slugify("\tPhụ\nkiện"), "phu-kien");
    }

    #[test]
    fn test_disallowed_characters_are_removed() {
        assert_eq!(slugify("iPhone 15 (Pro/Max)!"), "iphone-15-promax");
        assert_eq!(slugify("Giảm 50%"), "giam-50");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_hyphen_and_underscore_in_name_are_dropped() {
        assert_eq!(slugify("Wi-Fi"), "wifi");
        assert_eq!(codify("mã_số"), "maso");
        assert_eq!(slugify("Tai nghe Bluetooth-5.0"), "tai-nghe-bluetooth50");
        assert_eq!(codify("Ngày_giao hàng"), "ngaygiao_hang");
    }

    #[test]
    fn test_is_valid_token() {
        assert!(is_valid_token("dien-thoai", '-'));
        assert!(is_valid_token("vi_tri_dau_trang", '_'));
        assert!(is_valid_token("laptop2", '-'));
        assert!(!is_valid_token("", '-'));
        assert!(!is_valid_token("-dien", '-'));
        assert!(!is_valid_token("dien--thoai", '-'));
        assert!(!is_valid_token("Dien-thoai", '-'));
        assert!(!is_valid_token("vi-tri", '_'));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!! ??? ---"), "");
        assert_eq!(slugify("Привет"), "");
    }

    #[test]
    fn test_output_is_always_clean() {
        let inputs = [
            "Điện thoại & Phụ kiện",
            "--Sách--",
            "Ưu đãi  __ tháng 12",
            "  Café crème brûlée  ",
            "___",
            "Xe đạp 2024 / mẫu mới",
        ];
        for input in inputs {
            assert!(is_clean(&slugify(input), '-'), "slug for {input:?}");
            assert!(is_clean(&codify(input), '_'), "code for {input:?}");
        }
    }

    #[test]
    fn test_unique_token() {
        let existing = ["dien-thoai", "dien-thoai-2", "laptop"];
        assert_eq!(
            unique_token("dien-thoai", SLUG_SEPARATOR, existing.iter().copied()),
            "dien-thoai-3"
        );
        assert_eq!(
            unique_token("phu-kien", SLUG_SEPARATOR, existing.iter().copied()),
            "phu-kien"
        );
        assert_eq!(
            unique_token("vi_tri", CODE_SEPARATOR, ["vi_tri"]),
            "vi_tri_2"
        );
        assert_eq!(unique_token("", SLUG_SEPARATOR, ["x"]), "");
    }
}
