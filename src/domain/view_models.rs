//! View models taken from a real-world volunteer management app
use serde::{Deserialize, Serialize};

use super::arity::arity_family;
use super::temporal::DateTimeOffset;

arity_family! {
    /// Sign-in form payload
    pub struct LoginViewModel {
        pub email: String,
        pub password: String,
        pub remember_me: bool,
    }

    pub struct ParameterizedLoginViewModel1Arg {
        new(email: String);
        set(password: String, remember_me: bool);
    }

    pub struct ParameterizedLoginViewModel3Args {
        new(email: String, password: String, remember_me: bool);
        set();
    }
}

arity_family! {
    /// Postal address with contact number
    pub struct Location {
        pub id: i32,
        pub address1: String,
        pub address2: String,
        pub city: String,
        pub state: String,
        pub postal_code: String,
        pub name: String,
        pub phone_number: String,
        pub country: String,
    }

    pub struct ParameterizedLocation1Arg {
        new(id: i32);
        set(
            address1: String,
            address2: String,
            city: String,
            state: String,
            postal_code: String,
            name: String,
            phone_number: String,
            country: String,
        );
    }

    pub struct ParameterizedLocation9Args {
        new(
            id: i32,
            address1: String,
            address2: String,
            city: String,
            state: String,
            postal_code: String,
            name: String,
            phone_number: String,
            country: String,
        );
        set();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveOrUpcomingCampaign {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    pub description: String,
    pub start_date: DateTimeOffset,
    pub end_date: DateTimeOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveOrUpcomingEvent {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    pub campaign_name: String,
    pub campaign_managed_organizer_name: String,
    pub description: String,
    pub start_date: DateTimeOffset,
    pub end_date: DateTimeOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignSummaryViewModel {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub organization_name: String,
    pub headline: String,
}

arity_family! {
    /// Landing page: one featured campaign and a list of events
    pub struct IndexViewModel {
        pub active_or_upcoming_events: Vec<ActiveOrUpcomingEvent>,
        pub featured_campaign: Option<CampaignSummaryViewModel>,
        pub is_new_account: bool,
    }

    pub struct ParameterizedIndexViewModel1Arg {
        new(is_new_account: bool);
        set(
            active_or_upcoming_events: Vec<ActiveOrUpcomingEvent>,
            featured_campaign: Option<CampaignSummaryViewModel>,
        );
    }

    pub struct ParameterizedIndexViewModel2Args {
        new(featured_campaign: Option<CampaignSummaryViewModel>, is_new_account: bool);
        set(active_or_upcoming_events: Vec<ActiveOrUpcomingEvent>);
    }
}

impl IndexViewModel {
    pub fn has_featured_campaign(&self) -> bool {
        self.featured_campaign.is_some()
    }
}

arity_family! {
    /// A volunteer's events, split by time
    pub struct MyEventsListerViewModel {
        pub current_events: Vec<MyEventsListerItem>,
        pub future_events: Vec<MyEventsListerItem>,
        pub past_events: Vec<MyEventsListerItem>,
    }

    pub struct ParameterizedMyEventsListerViewModel1Arg {
        new(current_events: Vec<MyEventsListerItem>);
        set(future_events: Vec<MyEventsListerItem>, past_events: Vec<MyEventsListerItem>);
    }

    pub struct ParameterizedMyEventsListerViewModel3Args {
        new(
            current_events: Vec<MyEventsListerItem>,
            future_events: Vec<MyEventsListerItem>,
            past_events: Vec<MyEventsListerItem>,
        );
        set();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MyEventsListerItem {
    pub event_id: i32,
    pub event_name: String,
    pub start_date: DateTimeOffset,
    pub end_date: DateTimeOffset,
    pub time_zone: String,
    pub campaign: String,
    pub organization: String,
    pub volunteer_count: i32,
    pub tasks: Vec<MyEventsListerItemTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MyEventsListerItemTask {
    pub name: String,
    pub start_date: Option<DateTimeOffset>,
    pub end_date: Option<DateTimeOffset>,
}

impl MyEventsListerItemTask {
    /// `From <start> to <end>`, or `None` unless both dates are set
    pub fn formatted_date(&self) -> Option<String> {
        let (start, end) = (self.start_date?, self.end_date?);
        Some(format!(
            "From {} to {}",
            start.to_short_string(),
            end.to_short_string()
        ))
    }
}
