use fl_core::geo::GeoPoint;

/// Parse a `LAT,LNG` pair and check it lies on the globe.
pub fn parse_point(raw: &str) -> anyhow::Result<GeoPoint> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("invalid point '{raw}': expected LAT,LNG"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|error| anyhow::anyhow!("invalid latitude in '{raw}': {error}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|error| anyhow::anyhow!("invalid longitude in '{raw}': {error}"))?;

    let point = GeoPoint::new(lat, lng);
    if !point.is_valid() {
        anyhow::bail!("point '{raw}' is outside valid coordinate ranges");
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::parse_point;

    #[test]
    fn parses_signed_pair_with_spaces() {
        let point = parse_point("-33.8568, 151.2153").expect("point should parse");
        assert!((point.lat + 33.8568).abs() < f64::EPSILON);
        assert!((point.lng - 151.2153).abs() < f64::EPSILON);
    }

    #[test]
    fn errors_without_separator() {
        let err = parse_point("6.75").expect_err("should fail");
        assert!(err.to_string().contains("expected LAT,LNG"));
    }

    #[test]
    fn errors_on_out_of_range_latitude() {
        let err = parse_point("91,0").expect_err("should fail");
        assert!(err.to_string().contains("outside valid coordinate ranges"));
    }

    #[test]
    fn errors_on_non_numeric_longitude() {
        let err = parse_point("6.75,east").expect_err("should fail");
        assert!(err.to_string().contains("invalid longitude"));
    }
}
