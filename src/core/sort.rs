use crate::domain::model::{CustomerRecord, Direction, FieldName, SortCriteria};
use crate::utils::error::SortError;
use std::cmp::Ordering;

type Comparator = fn(&CustomerRecord, &CustomerRecord) -> Ordering;

/// Picks the comparison for a field up front: numeric fields compare by value,
/// `name` compares as text. Never decided per pair.
fn comparator(field: FieldName) -> Comparator {
    match field {
        FieldName::Id => |a, b| a.id().cmp(&b.id()),
        FieldName::Name => |a, b| a.name().cmp(b.name()),
        FieldName::Latitude => |a, b| a.latitude().total_cmp(&b.latitude()),
        FieldName::Longitude => |a, b| a.longitude().total_cmp(&b.longitude()),
        FieldName::Distance => |a, b| a.distance().total_cmp(&b.distance()),
    }
}

/// Returns a new sequence ordered by `criteria`; the input is left untouched.
///
/// Ascending is a stable sort. Descending is the exact reverse of ascending,
/// so `sort(x, desc) == reverse(sort(x, asc))` holds even with ties.
pub fn sort(records: &[CustomerRecord], criteria: SortCriteria) -> Vec<CustomerRecord> {
    let compare = comparator(criteria.field);

    let mut sorted = records.to_vec();
    sorted.sort_by(compare);

    if criteria.direction == Direction::Descending {
        sorted.reverse();
    }

    sorted
}

/// Sorts by raw field and direction names, rejecting unknown ones before any
/// ordering takes place.
pub fn sort_by_name(
    records: &[CustomerRecord],
    field: &str,
    direction: &str,
) -> Result<Vec<CustomerRecord>, SortError> {
    let criteria = SortCriteria::new(field.parse()?, direction.parse()?);
    Ok(sort(records, criteria))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ReferencePoint;

    fn record(id: i64, name: &str, latitude: f64, longitude: f64) -> CustomerRecord {
        CustomerRecord::new(id, name, latitude, longitude, None, &ReferencePoint::default())
    }

    fn christina() -> CustomerRecord {
        record(12, "Christina McArdle", 52.986375, -6.043701)
    }

    fn alice() -> CustomerRecord {
        record(1, "Alice Cahill", 51.92893, -10.27699)
    }

    fn ids(records: &[CustomerRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_sort_each_field_both_directions() {
        let input = vec![christina(), alice()];

        // Alice is the smaller of the two on every field
        for field in [
            FieldName::Id,
            FieldName::Name,
            FieldName::Latitude,
            FieldName::Longitude,
        ] {
            let asc = sort(&input, SortCriteria::new(field, Direction::Ascending));
            assert_eq!(ids(&asc), vec![1, 12], "{} asc", field);

            let desc = sort(&input, SortCriteria::new(field, Direction::Descending));
            assert_eq!(ids(&desc), vec![12, 1], "{} desc", field);
        }

        let by_distance = sort(
            &input,
            SortCriteria::new(FieldName::Distance, Direction::Ascending),
        );
        assert_eq!(ids(&by_distance), vec![12, 1]);
    }

    #[test]
    fn test_numeric_fields_do_not_sort_as_text() {
        let input = vec![
            record(10, "a", 0.0, 0.0),
            record(9, "b", 0.0, 0.0),
            record(100, "c", 0.0, 0.0),
        ];

        let sorted = sort(&input, SortCriteria::new(FieldName::Id, Direction::Ascending));
        assert_eq!(ids(&sorted), vec![9, 10, 100]);
    }

    #[test]
    fn test_name_sorts_lexicographically() {
        let input = vec![
            record(1, "bob", 0.0, 0.0),
            record(2, "Bob", 0.0, 0.0),
            record(3, "alice", 0.0, 0.0),
        ];

        let sorted = sort(&input, SortCriteria::new(FieldName::Name, Direction::Ascending));
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_ascending_is_stable_for_ties() {
        let input = vec![
            record(1, "Same", 0.0, 0.0),
            record(2, "Other", 0.0, 0.0),
            record(3, "Same", 0.0, 0.0),
            record(4, "Same", 0.0, 0.0),
        ];

        let sorted = sort(&input, SortCriteria::new(FieldName::Name, Direction::Ascending));
        assert_eq!(ids(&sorted), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending_with_ties() {
        let input = vec![
            record(5, "Dup", 1.0, 1.0),
            record(3, "Dup", 2.0, 2.0),
            record(8, "Zed", 3.0, 3.0),
            record(1, "Dup", 4.0, 4.0),
            record(2, "Abe", 5.0, 5.0),
        ];

        for field in FieldName::ALL {
            let mut asc = sort(&input, SortCriteria::new(field, Direction::Ascending));
            let desc = sort(&input, SortCriteria::new(field, Direction::Descending));
            asc.reverse();
            assert_eq!(asc, desc, "{}", field);
        }
    }

    #[test]
    fn test_resorting_descending_reverses_distinct_keys() {
        let input = vec![christina(), record(7, "Ian Kehoe", 53.2451022, -6.238335), alice()];

        let asc = sort(&input, SortCriteria::new(FieldName::Name, Direction::Ascending));
        let desc = sort(&asc, SortCriteria::new(FieldName::Name, Direction::Descending));

        let mut expected = asc.clone();
        expected.reverse();
        assert_eq!(desc, expected);
    }

    #[test]
    fn test_input_is_untouched() {
        let input = vec![christina(), alice()];
        let _ = sort(&input, SortCriteria::new(FieldName::Id, Direction::Ascending));

        assert_eq!(ids(&input), vec![12, 1]);
    }

    #[test]
    fn test_sort_by_name_rejects_unknown_field() {
        let input = vec![christina(), alice()];

        assert_eq!(
            sort_by_name(&input, "unknown_field", "asc"),
            Err(SortError::UnknownField {
                field: "unknown_field".to_string()
            })
        );
        assert!(matches!(
            sort_by_name(&input, "id", "upwards"),
            Err(SortError::UnknownDirection { .. })
        ));

        let sorted = sort_by_name(&input, "id", "asc").unwrap();
        assert_eq!(ids(&sorted), vec![1, 12]);
    }

    #[test]
    fn test_sort_empty() {
        let sorted = sort(&[], SortCriteria::new(FieldName::Distance, Direction::Descending));
        assert!(sorted.is_empty());
    }
}
