/// Format an amount in minor units as a decimal currency string
///
/// `usd` amounts get a dollar sign; other currencies are suffixed with their
/// upper-cased code.
pub fn format_minor_units(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let (major, minor) = (abs / 100, abs % 100);
    if currency.eq_ignore_ascii_case("usd") {
        format!("{}${}.{:02}", sign, major, minor)
    } else {
        format!("{}{}.{:02} {}", sign, major, minor, currency.to_uppercase())
    }
}
