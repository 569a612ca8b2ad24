//! Built-in seed catalog.

use crate::domain::{Station, StationId};

/// The default station list, used when no upstream catalog is configured.
pub fn seed_stations() -> Vec<Station> {
    [
        (1, "Union Station", "1", 43.645575, -79.380729),
        (2, "Bloor-Yonge", "1/2", 43.670240, -79.386864),
        (3, "St. George", "1/2", 43.668264, -79.399778),
        (4, "Spadina", "1/2", 43.667362, -79.403698),
        (5, "Kipling", "2", 43.637536, -79.535554),
        (6, "Kennedy", "2", 43.732496, -79.263492),
        (7, "Finch", "1", 43.780706, -79.414937),
        (8, "Vaughan Metro Centre", "1", 43.794163, -79.527509),
    ]
    .into_iter()
    .map(|(id, name, line, latitude, longitude)| {
        Station::new(StationId(id), name, line, latitude, longitude)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_eight_stations() {
        assert_eq!(seed_stations().len(), 8);
    }

    #[test]
    fn seed_ids_are_unique() {
        let stations = seed_stations();
        let ids: HashSet<_> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), stations.len());
    }

    #[test]
    fn seed_coordinates_are_plausible() {
        // Everything in the seed list sits inside the Toronto area.
        for station in seed_stations() {
            assert!((43.0..44.0).contains(&station.latitude), "{:?}", station);
            assert!((-80.0..-79.0).contains(&station.longitude), "{:?}", station);
        }
    }
}
