use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::date::normalize_route_date;
use crate::loader::Document;
use crate::lookup::first_of;

/// One flattened per-route output row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub route_id: String,
    pub city: String,
    pub route_date: Option<NaiveDate>,
    pub station_code: Option<String>,
    pub route_score: Option<String>,
    pub origin_latitude: Option<f64>,
    pub origin_longitude: Option<f64>,
    pub vehicle_capacity_cm3: Option<f64>,
    pub num_deliveries: usize,
    pub total_volume_cm3: f64,
    pub duration_hours: f64,
    pub distance_km: f64,
}

/// The same document kind loaded from several source locations, in
/// precedence order (build, apply, eval).
pub struct DocumentGroup {
    docs: Vec<Document>,
}

impl DocumentGroup {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }

    /// Per-route first-found-wins: the first source holding a non-empty
    /// object for this id supplies the record.
    pub fn resolve(&self, route_id: &str) -> Option<&Map<String, Value>> {
        self.docs.iter().find_map(|doc| {
            doc.entries()?
                .get(route_id)
                .and_then(Value::as_object)
                .filter(|map| !map.is_empty())
        })
    }

    pub fn route_ids(&self) -> BTreeSet<String> {
        self.docs
            .iter()
            .filter_map(Document::entries)
            .flat_map(|map| map.keys().cloned())
            .collect()
    }
}

pub struct Aggregator {
    routes: DocumentGroup,
    packages: DocumentGroup,
    sequences: DocumentGroup,
}

impl Aggregator {
    pub fn new(routes: DocumentGroup, packages: DocumentGroup, sequences: DocumentGroup) -> Self {
        Self {
            routes,
            packages,
            sequences,
        }
    }

    /// Every route id any route-data source knows about, ordered.
    pub fn route_ids(&self) -> BTreeSet<String> {
        self.routes.route_ids()
    }

    /// `None` when the route or package record is absent for this id.
    /// Sequence data is resolved for completeness but never required.
    pub fn summarize(&self, route_id: &str) -> Option<RouteSummary> {
        let route_details = self.routes.resolve(route_id)?;
        let package_details = self.packages.resolve(route_id)?;
        let _sequence = self.sequences.resolve(route_id);

        Some(summarize_route(route_id, route_details, package_details))
    }

    /// Summaries for every eligible route, sorted by route id.
    pub fn aggregate(&self) -> Vec<RouteSummary> {
        self.route_ids()
            .iter()
            .filter_map(|id| self.summarize(id))
            .collect()
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn summarize_route(
    route_id: &str,
    route_details: &Map<String, Value>,
    package_details: &Map<String, Value>,
) -> RouteSummary {
    let route_date = first_of(route_details, &["date_YYYY_MM_DD", "date"])
        .and_then(Value::as_str)
        .and_then(normalize_route_date);
    let city = route_details
        .get("city")
        .and_then(Value::as_str)
        .unwrap_or("Unknown")
        .to_string();
    let station_code = route_details.get("station_code").and_then(as_text);
    let route_score = route_details.get("route_score").and_then(as_text);
    let vehicle_capacity_cm3 = first_of(route_details, &["executor_capacity_cm3", "vehicleCapacity"])
        .and_then(Value::as_f64);

    let (origin_latitude, origin_longitude) =
        match route_details.get("origin").and_then(Value::as_object) {
            Some(origin) => (
                origin.get("latitude").and_then(Value::as_f64),
                origin.get("longitude").and_then(Value::as_f64),
            ),
            None => (None, None),
        };

    let mut total_secs = 0.;
    if let Some(stops) = route_details.get("stops").and_then(Value::as_object) {
        for stop in stops.values().filter_map(Value::as_object) {
            total_secs += stop
                .get("travel_time_to_next_stop_in_seconds")
                .and_then(Value::as_f64)
                .unwrap_or(0.);
            total_secs += stop
                .get("planned_service_time_seconds")
                .and_then(Value::as_f64)
                .unwrap_or(0.);
        }
    }
    // travel times can go negative in the raw data
    let duration_hours = (total_secs / 3600.).max(0.);

    let packages = ["AD", "packages"].iter().find_map(|key| {
        package_details
            .get(*key)
            .and_then(Value::as_object)
            .filter(|map| !map.is_empty())
    });
    let num_deliveries = packages.map_or(0, Map::len);
    let mut total_volume_cm3 = 0.;
    if let Some(packages) = packages {
        for package in packages.values().filter_map(Value::as_object) {
            if let Some(dims) = package.get("dimensions").and_then(Value::as_object) {
                let depth = dims.get("depth_cm").and_then(Value::as_f64).unwrap_or(0.);
                let height = dims.get("height_cm").and_then(Value::as_f64).unwrap_or(0.);
                let width = dims.get("width_cm").and_then(Value::as_f64).unwrap_or(0.);
                total_volume_cm3 += depth * height * width;
            }
        }
    }

    RouteSummary {
        route_id: route_id.to_string(),
        city,
        route_date,
        station_code,
        route_score,
        origin_latitude,
        origin_longitude,
        vehicle_capacity_cm3,
        num_deliveries,
        total_volume_cm3,
        duration_hours,
        // no source supplies two coordinates per route, so this stays a
        // structural placeholder
        distance_km: 0.,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Document {
        Document::Loaded(value.as_object().unwrap().clone())
    }

    fn aggregator(route: Value, package: Value) -> Aggregator {
        Aggregator::new(
            DocumentGroup::new(vec![doc(route), Document::Missing, Document::Missing]),
            DocumentGroup::new(vec![doc(package), Document::Missing, Document::Missing]),
            DocumentGroup::new(vec![Document::Missing, Document::Missing, Document::Missing]),
        )
    }

    #[test]
    fn test_route_without_packages_is_excluded() {
        let agg = aggregator(
            json!({"R1": {"city": "Austin"}}),
            json!({"R2": {"AD": {"p1": {}}}}),
        );

        assert!(agg.summarize("R1").is_none());
        assert!(agg.aggregate().is_empty());
    }

    #[test]
    fn test_duration_from_stops() {
        let agg = aggregator(
            json!({"R1": {"stops": {"s1": {
                "travel_time_to_next_stop_in_seconds": 3600,
                "planned_service_time_seconds": 1800
            }}}}),
            json!({"R1": {"AD": {"p1": {}}}}),
        );

        let summary = agg.summarize("R1").unwrap();
        assert_eq!(summary.duration_hours, 1.5);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let agg = aggregator(
            json!({"R1": {"stops": {"s1": {
                "travel_time_to_next_stop_in_seconds": -7200
            }}}}),
            json!({"R1": {"AD": {"p1": {}}}}),
        );

        assert_eq!(agg.summarize("R1").unwrap().duration_hours, 0.);
    }

    #[test]
    fn test_non_object_stops_are_skipped() {
        let agg = aggregator(
            json!({"R1": {"stops": {
                "s1": {"travel_time_to_next_stop_in_seconds": 3600},
                "s2": "broken"
            }}}),
            json!({"R1": {"AD": {"p1": {}}}}),
        );

        assert_eq!(agg.summarize("R1").unwrap().duration_hours, 1.);
    }

    #[test]
    fn test_package_volume_and_count() {
        let agg = aggregator(
            json!({"R1": {}}),
            json!({"R1": {"AD": {
                "p1": {"dimensions": {"depth_cm": 2, "height_cm": 3, "width_cm": 4}},
                "p2": {"dimensions": {"depth_cm": 1, "height_cm": 1, "width_cm": 1}}
            }}}),
        );

        let summary = agg.summarize("R1").unwrap();
        assert_eq!(summary.num_deliveries, 2);
        assert_eq!(summary.total_volume_cm3, 25.);
    }

    #[test]
    fn test_packages_key_alternative() {
        let agg = aggregator(
            json!({"R1": {}}),
            json!({"R1": {"packages": {
                "p1": {"dimensions": {"depth_cm": 2, "height_cm": 2, "width_cm": 2}}
            }}}),
        );

        let summary = agg.summarize("R1").unwrap();
        assert_eq!(summary.num_deliveries, 1);
        assert_eq!(summary.total_volume_cm3, 8.);
    }

    #[test]
    fn test_package_without_dimensions_counts_but_adds_no_volume() {
        let agg = aggregator(
            json!({"R1": {}}),
            json!({"R1": {"AD": {
                "p1": {"dimensions": {"depth_cm": 2, "height_cm": 3, "width_cm": 4}},
                "p2": {}
            }}}),
        );

        let summary = agg.summarize("R1").unwrap();
        assert_eq!(summary.num_deliveries, 2);
        assert_eq!(summary.total_volume_cm3, 24.);
    }

    #[test]
    fn test_route_metrics() {
        let agg = aggregator(
            json!({"R1": {
                "date_YYYY_MM_DD": "2018-08-11",
                "city": "Austin",
                "station_code": "DAU1",
                "route_score": "High",
                "executor_capacity_cm3": 4247527.0,
                "origin": {"latitude": 30.2, "longitude": -97.7}
            }}),
            json!({"R1": {"AD": {"p1": {}}}}),
        );

        let summary = agg.summarize("R1").unwrap();
        assert_eq!(summary.city, "Austin");
        assert_eq!(
            summary.route_date,
            Some(NaiveDate::from_ymd_opt(2018, 8, 11).unwrap())
        );
        assert_eq!(summary.station_code.as_deref(), Some("DAU1"));
        assert_eq!(summary.route_score.as_deref(), Some("High"));
        assert_eq!(summary.vehicle_capacity_cm3, Some(4247527.0));
        assert_eq!(summary.origin_latitude, Some(30.2));
        assert_eq!(summary.origin_longitude, Some(-97.7));
        assert_eq!(summary.distance_km, 0.);
    }

    #[test]
    fn test_city_defaults_to_unknown() {
        let agg = aggregator(json!({"R1": {}}), json!({"R1": {"AD": {"p1": {}}}}));

        assert_eq!(agg.summarize("R1").unwrap().city, "Unknown");
    }

    #[test]
    fn test_capacity_key_alternative() {
        let agg = aggregator(
            json!({"R1": {"vehicleCapacity": 100.0}}),
            json!({"R1": {"AD": {"p1": {}}}}),
        );

        assert_eq!(agg.summarize("R1").unwrap().vehicle_capacity_cm3, Some(100.0));
    }

    #[test]
    fn test_first_found_wins_across_sources() {
        let routes = DocumentGroup::new(vec![
            doc(json!({"R1": {"city": "Austin"}})),
            doc(json!({"R1": {"city": "Boston"}, "R2": {"city": "Chicago"}})),
        ]);
        let packages = DocumentGroup::new(vec![doc(
            json!({"R1": {"AD": {"p1": {}}}, "R2": {"AD": {"p1": {}}}}),
        )]);
        let agg = Aggregator::new(routes, packages, DocumentGroup::new(vec![]));

        let summaries = agg.aggregate();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].route_id, "R1");
        assert_eq!(summaries[0].city, "Austin");
        assert_eq!(summaries[1].route_id, "R2");
        assert_eq!(summaries[1].city, "Chicago");
    }

    #[test]
    fn test_empty_record_falls_through_to_next_source() {
        let routes = DocumentGroup::new(vec![
            doc(json!({"R1": {}})),
            doc(json!({"R1": {"city": "Boston"}})),
        ]);

        assert_eq!(
            routes.resolve("R1").unwrap().get("city"),
            Some(&json!("Boston"))
        );
    }

    #[test]
    fn test_output_sorted_by_route_id() {
        let agg = aggregator(
            json!({"R3": {}, "R1": {}, "R2": {}}),
            json!({"R3": {"AD": {"p": {}}}, "R1": {"AD": {"p": {}}}, "R2": {"AD": {"p": {}}}}),
        );

        let ids = agg
            .aggregate()
            .into_iter()
            .map(|s| s.route_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["R1", "R2", "R3"]);
    }
}
