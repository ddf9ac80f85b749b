/// Coerce an untrusted `page` parameter into a page number.
///
/// Integers pass through unchanged (range clamping happens later, once the
/// total is known). Fractional input is floored, anything else is page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 1;
    };

    if let Ok(page) = raw.parse::<i64>() {
        return page;
    }

    match raw.parse::<f64>() {
        // `as` saturates, so huge values land on i64::MAX/MIN
        Ok(page) if page.is_finite() => page.floor() as i64,
        _ => 1,
    }
}
