/// Standard competition ranking over an already-sorted key sequence.
///
/// Equal neighbours share a place; the next distinct key takes a place equal
/// to its position, so two athletes tied at 1 push the next one to 3.
pub fn assign_places<K: PartialEq>(sorted_keys: &[K]) -> Vec<u32> {
    let mut places = Vec::with_capacity(sorted_keys.len());
    let mut place = 0u32;
    for (idx, key) in sorted_keys.iter().enumerate() {
        if idx == 0 || *key != sorted_keys[idx - 1] {
            place = idx as u32 + 1;
        }
        places.push(place);
    }
    places
}
