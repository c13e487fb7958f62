use jiff::SpanRelativeTo;

/// Accepts ISO 8601 (`PT5M`), friendly (`5m`, `1m 30s`) or a bare number of
/// minutes (`5`, `2.5`).
pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    match input.trim().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes >= 0.0 => {
            Ok(jiff::SignedDuration::from_secs_f64(minutes * 60.0))
        }
        _ => Err(format!("Invalid duration '{input}'")),
    }
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(parse_duration("PT5M"), Ok(SignedDuration::from_mins(5)));
        assert_eq!(parse_duration("10m"), Ok(SignedDuration::from_mins(10)));
        assert_eq!(parse_duration("4"), Ok(SignedDuration::from_mins(4)));
        assert_eq!(parse_duration("2.5"), Ok(SignedDuration::from_secs(150)));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-3").is_err());
    }
}
