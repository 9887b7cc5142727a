/// Render a count in short form: `999`, `1.50K`, `1.00M`, `1.25B`
///
/// # Examples
///
/// ```
/// use whatsapp_chat_analyzer::utils::format::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1500), "1.50K");
/// ```
pub fn format_count(value: u64) -> String {
    scaled(value as f64).unwrap_or_else(|| value.to_string())
}

/// Render an average in short form after rounding it to 2 decimals
///
/// Values below one thousand print like a float: `12.5`, `2.33`, and `3.0` for whole numbers.
pub fn format_average(value: f64) -> String {
    let rounded = round2(value);
    scaled(rounded).unwrap_or_else(|| {
        if rounded.fract() == 0.0 { format!("{:.1}", rounded) } else { rounded.to_string() }
    })
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn scaled(value: f64) -> Option<String> {
    if value >= 1_000_000_000.0 {
        Some(format!("{:.2}B", value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        Some(format!("{:.2}M", value / 1_000_000.0))
    } else if value >= 1_000.0 {
        Some(format!("{:.2}K", value / 1_000.0))
    } else {
        None
    }
}
