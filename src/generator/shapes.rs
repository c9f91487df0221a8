//! Canonical field values for every catalog shape
//!
//! Every value is a fixed literal except date/times, which are offsets
//! from the factory's reference time. List fields repeat one canonical
//! child instead of generating distinct children. Builders that shift the
//! reference time fail with `DomainError::Overflow` near the calendar end.

use indexmap::{IndexMap, IndexSet};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::values;
use crate::domain::*;

const IMAGE_URL: &str =
    "https://www.dotnetfoundation.org/theme/img/carousel/foundation-diagram-content.png";

const EVENT_DESCRIPTION: &str = "The .NET Foundation works with Microsoft and the broader \
    industry to increase the exposure of open source projects in the .NET community and the \
    .NET Foundation. The .NET Foundation provides access to these resources to projects and \
    looks to promote the activities of our communities.";

const UTC_DISPLAY_NAME: &str = "(UTC) Coordinated Universal Time";

const INDEX_EVENT_COUNT: usize = 20;
const CURRENT_EVENT_COUNT: usize = 3;
const FUTURE_EVENT_COUNT: usize = 9;
const PAST_EVENT_COUNT: usize = 60;
const TASKS_PER_EVENT: usize = 4;

const COMPLEX_GUID: u128 = 0x6f9619ff_8b86_d011_b42d_00c04fc964ff;
const COMPLEX_URI: &str = "https://github.com/dotnet/performance";

pub fn login_view_model() -> LoginViewModel {
    LoginViewModel {
        email: "name.familyname@not.com".to_string(),
        password: "abcdefgh123456!@".to_string(),
        remember_me: true,
    }
}

pub fn location() -> Location {
    Location {
        id: 1234,
        address1: "The Street Name".to_string(),
        address2: "20/11".to_string(),
        city: "The City".to_string(),
        state: "The State".to_string(),
        postal_code: "abc-12".to_string(),
        name: "Nonexisting".to_string(),
        phone_number: "+0 11 222 333 44".to_string(),
        country: "The Greatest".to_string(),
    }
}

pub fn campaign_summary() -> CampaignSummaryViewModel {
    CampaignSummaryViewModel {
        id: 234235,
        title: "Promoting Open Source".to_string(),
        description: "Very nice campaing".to_string(),
        image_url: IMAGE_URL.to_string(),
        organization_name: "The Company XYZ".to_string(),
        headline: "The Headline".to_string(),
    }
}

pub fn active_or_upcoming_event(
    now: OffsetDateTime,
) -> Result<ActiveOrUpcomingEvent, DomainError> {
    let start = DateTimeOffset::new(now);
    Ok(ActiveOrUpcomingEvent {
        id: 10,
        image_url: IMAGE_URL.to_string(),
        name: "Just a name".to_string(),
        campaign_name: "The very new campaing".to_string(),
        campaign_managed_organizer_name: "Name FamiltyName".to_string(),
        description: EVENT_DESCRIPTION.to_string(),
        start_date: start,
        end_date: start.add_years(1)?,
    })
}

pub fn index_view_model(now: OffsetDateTime) -> Result<IndexViewModel, DomainError> {
    Ok(IndexViewModel {
        active_or_upcoming_events: vec![active_or_upcoming_event(now)?; INDEX_EVENT_COUNT],
        featured_campaign: Some(campaign_summary()),
        is_new_account: false,
    })
}

pub fn my_events_lister_task(now: OffsetDateTime) -> Result<MyEventsListerItemTask, DomainError> {
    let start = DateTimeOffset::new(now);
    Ok(MyEventsListerItemTask {
        name: "A very nice task to have".to_string(),
        start_date: Some(start),
        end_date: Some(start.checked_add(Duration::days(1))?),
    })
}

pub fn my_events_lister_item(now: OffsetDateTime) -> Result<MyEventsListerItem, DomainError> {
    let today = DateTimeOffset::new(now);
    Ok(MyEventsListerItem {
        event_id: 321,
        event_name: "wonderful name".to_string(),
        start_date: today.checked_sub(Duration::days(7))?,
        end_date: today.checked_add(Duration::days(7))?,
        time_zone: UTC_DISPLAY_NAME.to_string(),
        campaign: "A very nice campaing".to_string(),
        organization: "Local Animal Shelter".to_string(),
        volunteer_count: 15,
        tasks: vec![my_events_lister_task(now)?; TASKS_PER_EVENT],
    })
}

pub fn my_events_lister_view_model(
    now: OffsetDateTime,
) -> Result<MyEventsListerViewModel, DomainError> {
    let item = my_events_lister_item(now)?;
    Ok(MyEventsListerViewModel {
        current_events: vec![item.clone(); CURRENT_EVENT_COUNT],
        future_events: vec![item.clone(); FUTURE_EVENT_COUNT],
        // usually there is a lot of historical data
        past_events: vec![item; PAST_EVENT_COUNT],
    })
}

pub fn binary_data(size: usize) -> BinaryData {
    BinaryData {
        byte_array: values::byte_sequence(size),
    }
}

pub fn collections_of_primitives(
    now: OffsetDateTime,
    count: usize,
) -> Result<CollectionsOfPrimitives, DomainError> {
    Ok(CollectionsOfPrimitives {
        byte_array: values::byte_sequence(count),
        date_time_array: values::date_time_sequence(now, count)?,
        dictionary: values::int_string_map(count),
        list_of_int: values::int_sequence(count),
    })
}

pub fn xml_element() -> XmlElement {
    XmlElement::new("Element", "Element innertext")
}

pub fn simple_struct() -> SimpleStructWithProperties {
    SimpleStructWithProperties {
        num: 1,
        text: "Foo".to_string(),
    }
}

pub fn simple_list_of_int() -> SimpleListOfInt {
    vec![10, 20, 30].into()
}

pub fn xml_serializable_record() -> XmlSerializableRecord {
    XmlSerializableRecord::new("Hello world")
}

/// Map every value to itself
pub fn identity_map<M>(values: Vec<String>) -> M
where
    M: FromIterator<(String, String)>,
{
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

pub fn point() -> Point {
    Point {
        x: 234235,
        y: 912874,
    }
}

pub fn class_with_primitives(now: OffsetDateTime) -> Result<ClassWithPrimitives, DomainError> {
    let first = DateTime::from_offset(now, DateTimeKind::Local);
    let second = first.checked_add(Duration::hours(1))?.add_years(1)?;

    Ok(ClassWithPrimitives {
        first_int: 348943,
        second_int: 348943,
        first_string: "934sdkjfskdfssf".to_string(),
        second_string: "sdad9434243242".to_string(),
        first_date_time: first,
        second_date_time: second,
        x: 234235,
        y: 912874,
        z: 434934,
        third_int: 348943,
        fourth_int: 348943,
        third_string: "934sdkjfskdfssf".to_string(),
        fourth_string: "sdad9434243242".to_string(),
        third_date_time: first,
        fourth_date_time: second,
    })
}

pub fn complex_class(now: OffsetDateTime) -> Result<ComplexClass, DomainError> {
    let jagged_array: Vec<Vec<Vec<i32>>> = (0..3)
        .map(|i| {
            (0..3)
                .map(|j| (0..3).map(|k| i * 9 + j * 3 + k).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
        .collect();
    let nested_list: Vec<Vec<Vec<String>>> = (0..3)
        .map(|i| {
            (0..3)
                .map(|j| (0..3).map(|k| format!("item-{i}-{j}-{k}")).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
        .collect();

    let words = ["alpha", "beta", "gamma"];
    let numbers = [(1, "one"), (2, "two"), (3, "three")];

    Ok(ComplexClass {
        byte: 200,
        sbyte: -100,
        character: 'c',
        decimal: FixedPoint::from_decimal_str("1234567.8900")?,
        boolean: true,
        single: 1.5e-3,
        double: 12345.6789,
        date_time: DateTime::from_offset(now, DateTimeKind::Utc),
        date_time_offset: DateTimeOffset::new(now),
        guid: Uuid::from_u128(COMPLEX_GUID),
        uri: Uri::parse(COMPLEX_URI)?,
        jagged_array,
        nested_list,
        ordered_list: words.iter().map(|w| w.to_string()).collect(),
        unordered_set: ["red", "green", "blue"]
            .iter()
            .map(|c| c.to_string())
            .collect::<IndexSet<_>>(),
        pair: KeyValuePair::new("answer".to_string(), 42),
        int_keyed: numbers
            .iter()
            .map(|(n, name)| (*n, name.to_string()))
            .collect::<IndexMap<_, _>>(),
        string_keyed: numbers
            .iter()
            .map(|(n, name)| (name.to_string(), *n))
            .collect::<IndexMap<_, _>>(),
        list_with_null: vec![Some("first".to_string()), None, Some("third".to_string())],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-10-16 12:00 UTC);

    #[test]
    fn index_view_model_repeats_one_event() {
        let model = index_view_model(NOW).unwrap();
        assert_eq!(model.active_or_upcoming_events.len(), 20);
        assert!(model.has_featured_campaign());

        let first = &model.active_or_upcoming_events[0];
        assert!(model.active_or_upcoming_events.iter().all(|e| e == first));
        assert_eq!(first.end_date.value(), datetime!(2027-10-16 12:00 UTC));
    }

    #[test]
    fn events_lister_list_sizes() {
        let model = my_events_lister_view_model(NOW).unwrap();
        assert_eq!(model.current_events.len(), 3);
        assert_eq!(model.future_events.len(), 9);
        assert_eq!(model.past_events.len(), 60);
        assert_eq!(model.past_events[0].tasks.len(), 4);
    }

    #[test]
    fn events_lister_item_spans_two_weeks() {
        let item = my_events_lister_item(NOW).unwrap();
        assert_eq!(item.start_date.value(), datetime!(2026-10-09 12:00 UTC));
        assert_eq!(item.end_date.value(), datetime!(2026-10-23 12:00 UTC));
        assert_eq!(
            item.tasks[0].formatted_date().as_deref(),
            Some("From 10/16/2026 12:00 PM to 10/17/2026 12:00 PM")
        );
    }

    #[test]
    fn class_with_primitives_dates() {
        let value = class_with_primitives(NOW).unwrap();
        assert_eq!(value.first_date_time.kind(), DateTimeKind::Local);
        assert_eq!(value.first_date_time.value(), datetime!(2026-10-16 12:00));
        assert_eq!(value.second_date_time.value(), datetime!(2027-10-16 13:00));
        assert_eq!(value.third_date_time, value.first_date_time);
        assert_eq!(value.fourth_date_time, value.second_date_time);
    }

    #[test]
    fn collections_of_primitives_have_equal_lengths() {
        let value = collections_of_primitives(NOW, 1024).unwrap();
        assert_eq!(value.byte_array.len(), 1024);
        assert_eq!(value.date_time_array.len(), 1024);
        assert_eq!(value.dictionary.len(), 1024);
        assert_eq!(value.list_of_int.len(), 1024);
    }

    #[test]
    fn complex_class_nesting() {
        let value = complex_class(NOW).unwrap();
        assert_eq!(value.jagged_array.len(), 3);
        assert_eq!(value.jagged_array[2][2][2], 26);
        assert_eq!(value.nested_list[1][0][2], "item-1-0-2");
        assert_eq!(value.decimal.to_string(), "1234567.8900");
        assert_eq!(value.guid.to_string(), "6f9619ff-8b86-d011-b42d-00c04fc964ff");
        assert_eq!(value.int_keyed[&2], "two");
        assert_eq!(value.string_keyed["three"], 3);
    }

    #[test]
    fn complex_class_list_with_null_has_one_none() {
        let value = complex_class(NOW).unwrap();
        assert!(!value.list_with_null.is_empty());
        assert_eq!(value.list_with_null.iter().filter(|v| v.is_none()).count(), 1);
    }

    #[test]
    fn time_relative_shapes_overflow_at_calendar_end() {
        let last = datetime!(9999-12-31 23:59:59 UTC);

        assert_eq!(index_view_model(last), Err(DomainError::Overflow));
        assert_eq!(my_events_lister_view_model(last), Err(DomainError::Overflow));
        assert_eq!(class_with_primitives(last), Err(DomainError::Overflow));
        assert_eq!(collections_of_primitives(last, 4), Err(DomainError::Overflow));
        assert!(complex_class(last).is_ok());
    }

    #[test]
    fn complex_class_keeps_insertion_order() {
        let value = complex_class(NOW).unwrap();
        let colors: Vec<&str> = value.unordered_set.iter().map(String::as_str).collect();
        assert_eq!(colors, vec!["red", "green", "blue"]);
        assert!(value.int_keyed.keys().copied().eq([1, 2, 3]));
    }

    #[test]
    fn identity_map_keys_equal_values() {
        let map: BTreeMap<String, String> =
            identity_map(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(map.iter().all(|(k, v)| k == v));
    }
}
