/// Группировка разрядов точкой: 29990000 -> "29.990.000"
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Сумма в донгах, округлённая до целого
pub fn format_vnd(amount: f64) -> String {
    format!("{} ₫", format_thousands(amount.round() as i64))
}

/// Краткая запись больших сумм для карточек: "1,2 tỷ", "350,5 tr"
pub fn format_vnd_short(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1} tỷ", amount / 1_000_000_000.0).replace('.', ",")
    } else if abs >= 1_000_000.0 {
        format!("{:.1} tr", amount / 1_000_000.0).replace('.', ",")
    } else {
        format_vnd(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(29_990_000), "29.990.000");
        assert_eq!(format_thousands(-1_500), "-1.500");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(890_000.0), "890.000 ₫");
        assert_eq!(format_vnd_short(1_250_000_000.0), "1,2 tỷ");
        assert_eq!(format_vnd_short(350_500_000.0), "350,5 tr");
        assert_eq!(format_vnd_short(5_000.0), "5.000 ₫");
    }
}
