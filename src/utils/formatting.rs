//! Utilidades de formato para display
//!
//! Este módulo contiene los helpers que preparan la valuación para el
//! renderer: moneda USD sin decimales con separador de miles, y porcentajes
//! con signo explícito cuando son positivos.

/// Formatear un monto entero como moneda USD: 31625 -> "$31,625"
pub fn format_currency_usd(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formatear un factor porcentual con signo explícito: 15.0 -> "+15%", -8.3 -> "-8.3%"
///
/// Los factores llegan redondeados a un decimal; los valores enteros se
/// muestran sin parte decimal, igual que el renderer original.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    if value.fract() == 0.0 {
        format!("{}{}%", sign, value as i64)
    } else {
        format!("{}{:.1}%", sign, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_usd() {
        assert_eq!(format_currency_usd(0), "$0");
        assert_eq!(format_currency_usd(625), "$625");
        assert_eq!(format_currency_usd(31625), "$31,625");
        assert_eq!(format_currency_usd(1_234_567), "$1,234,567");
        assert_eq!(format_currency_usd(-1_234), "-$1,234");
    }

    #[test]
    fn test_format_signed_percent_positive_gets_sign() {
        assert_eq!(format_signed_percent(15.0), "+15%");
        assert_eq!(format_signed_percent(3.1), "+3.1%");
    }

    #[test]
    fn test_format_signed_percent_zero_and_negative() {
        assert_eq!(format_signed_percent(0.0), "0%");
        assert_eq!(format_signed_percent(-8.3), "-8.3%");
        assert_eq!(format_signed_percent(-60.0), "-60%");
    }
}
