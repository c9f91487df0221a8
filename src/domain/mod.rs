pub mod amount;
pub mod arity;
pub mod complex;
pub mod error;
pub mod points;
pub mod primitives;
pub mod temporal;
pub mod uri;
pub mod view_models;

// Re-export commonly used types
pub use amount::FixedPoint;
pub use arity::Construct;
pub use complex::{
    ComplexClass, KeyValuePair, ParameterizedComplexClass2Args, ParameterizedComplexClass8Args,
};
pub use error::DomainError;
pub use points::{
    ClassWithPrimitives, ParameterizedClassWithPrimitives3Args,
    ParameterizedClassWithPrimitives8Args, ParameterizedPoint1Arg, ParameterizedPoint2Args, Point,
};
pub use primitives::{
    BinaryData, CollectionsOfPrimitives, SimpleListOfInt, SimpleStructWithProperties, XmlElement,
    XmlSerializableRecord,
};
pub use temporal::{DateTime, DateTimeKind, DateTimeOffset};
pub use uri::Uri;
pub use view_models::{
    ActiveOrUpcomingCampaign, ActiveOrUpcomingEvent, CampaignSummaryViewModel, IndexViewModel,
    Location, LoginViewModel, MyEventsListerItem, MyEventsListerItemTask, MyEventsListerViewModel,
    ParameterizedIndexViewModel1Arg, ParameterizedIndexViewModel2Args, ParameterizedLocation1Arg,
    ParameterizedLocation9Args, ParameterizedLoginViewModel1Arg, ParameterizedLoginViewModel3Args,
    ParameterizedMyEventsListerViewModel1Arg, ParameterizedMyEventsListerViewModel3Args,
};
