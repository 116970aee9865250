use std::collections::HashMap;

use places_common::Place;

/// Collapse places sharing a `name`.
///
/// The last place seen for a name replaces earlier ones wholesale (no field
/// merging). Output order is the order in which each name first appeared.
pub fn dedupe_by_name(places: Vec<Place>) -> Vec<Place> {
    let total = places.len();
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(total);
    let mut unique: Vec<Place> = Vec::with_capacity(total);

    for place in places {
        match slots.get(&place.name) {
            Some(&idx) => unique[idx] = place,
            None => {
                slots.insert(place.name.clone(), unique.len());
                unique.push(place);
            }
        }
    }

    let dropped = total - unique.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = unique.len(), "Dropped duplicate places by name");
    }

    unique
}
