const EARTH_RADIUS_KM: f64 = 6371.;

/// Great-circle distance between two points, standard haversine over the
/// mean Earth radius. Any missing coordinate yields 0.0.
pub fn haversine_distance(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> f64 {
    let (lat1, lon1, lat2, lon2) = match (lat1, lon1, lat2, lon2) {
        (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) => (lat1, lon1, lat2, lon2),
        _ => return 0.,
    };

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
