/// Format an amount the way the statement pages did: rounded to whole
/// francs, apostrophe thousands separators, "CHF" suffix: 1'234 CHF
pub fn chf(val: f64) -> String {
    let rounded = val.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.abs().to_string();

    let mut with_seps = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_seps.push('\'');
        }
        with_seps.push(c);
    }
    let with_seps: String = with_seps.chars().rev().collect();

    if negative {
        format!("-{with_seps} CHF")
    } else {
        format!("{with_seps} CHF")
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chf_formatting() {
        assert_eq!(chf(0.0), "0 CHF");
        assert_eq!(chf(500.0), "500 CHF");
        assert_eq!(chf(1234.0), "1'234 CHF");
        assert_eq!(chf(1_000_000.0), "1'000'000 CHF");
        assert_eq!(chf(-2500.0), "-2'500 CHF");
    }

    #[test]
    fn test_chf_rounds_to_whole_francs() {
        assert_eq!(chf(999.5), "1'000 CHF");
        assert_eq!(chf(12.4), "12 CHF");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
