use crate::core::settings::Locale;

/// Formats a price as currency for display, e.g. `R$ 1.234,56` or `$1,234.56`.
pub fn format_price(value: f64, locale: Locale) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let fraction = cents % 100;

    let (symbol, group_sep, decimal_sep) = match locale {
        Locale::PtBr => ("R$ ", '.', ','),
        Locale::EnUs => ("$", ',', '.'),
    };

    format!(
        "{}{}{}{}{:02}",
        sign,
        symbol,
        group_thousands(whole, group_sep),
        decimal_sep,
        fraction
    )
}

fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
