use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::error::GeneratorError;
use super::factory::FixtureFactory;
use super::shapes;
use crate::domain::*;

/// Broad grouping of catalog shapes, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    ViewModel,
    ConstructionArity,
    PrimitiveCollection,
    StringContainer,
    Simple,
    Exotic,
}

impl ShapeFamily {
    pub fn name(self) -> &'static str {
        match self {
            Self::ViewModel => "view-model",
            Self::ConstructionArity => "construction-arity",
            Self::PrimitiveCollection => "primitive-collection",
            Self::StringContainer => "string-container",
            Self::Simple => "simple",
            Self::Exotic => "exotic",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust type that has exactly one entry in the catalog
pub trait CatalogShape: Sized {
    const ID: ShapeId;

    /// Unwrap the matching fixture variant, handing back any other
    fn from_fixture(fixture: Fixture) -> Result<Self, Fixture>;
}

macro_rules! shape_catalog {
    ( $( $id:ident => $ty:ty, $family:ident; )* ) => {
        /// Identifier of every shape the factory can build
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ShapeId {
            $( $id, )*
        }

        impl ShapeId {
            /// Every shape, in catalog order
            pub const ALL: &'static [ShapeId] = &[ $( ShapeId::$id, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( ShapeId::$id => stringify!($id), )*
                }
            }

            pub fn family(self) -> ShapeFamily {
                match self {
                    $( ShapeId::$id => ShapeFamily::$family, )*
                }
            }
        }

        /// A generated instance of one catalog shape
        ///
        /// Serializes as the bare payload, without a tag.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Fixture {
            $( $id($ty), )*
        }

        impl Fixture {
            pub fn shape(&self) -> ShapeId {
                match self {
                    $( Fixture::$id(_) => ShapeId::$id, )*
                }
            }
        }

        $(
            impl CatalogShape for $ty {
                const ID: ShapeId = ShapeId::$id;

                fn from_fixture(fixture: Fixture) -> Result<Self, Fixture> {
                    match fixture {
                        Fixture::$id(value) => Ok(value),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

shape_catalog! {
    LoginViewModel => LoginViewModel, ViewModel;
    Location => Location, ViewModel;
    IndexViewModel => IndexViewModel, ViewModel;
    MyEventsListerViewModel => MyEventsListerViewModel, ViewModel;
    BinaryData => BinaryData, PrimitiveCollection;
    CollectionsOfPrimitives => CollectionsOfPrimitives, PrimitiveCollection;
    XmlElement => XmlElement, Simple;
    SimpleStructWithProperties => SimpleStructWithProperties, Simple;
    SimpleListOfInt => SimpleListOfInt, Simple;
    XmlSerializableRecord => XmlSerializableRecord, Simple;
    StringDictionary => IndexMap<String, String>, StringContainer;
    SortedStringDictionary => BTreeMap<String, String>, StringContainer;
    StringSet => IndexSet<String>, StringContainer;
    StringList => Vec<String>, StringContainer;
    Point => Point, ConstructionArity;
    ParameterizedPoint1Arg => ParameterizedPoint1Arg, ConstructionArity;
    ParameterizedPoint2Args => ParameterizedPoint2Args, ConstructionArity;
    ClassWithPrimitives => ClassWithPrimitives, ConstructionArity;
    ParameterizedClassWithPrimitives3Args => ParameterizedClassWithPrimitives3Args, ConstructionArity;
    ParameterizedClassWithPrimitives8Args => ParameterizedClassWithPrimitives8Args, ConstructionArity;
    ParameterizedLoginViewModel1Arg => ParameterizedLoginViewModel1Arg, ConstructionArity;
    ParameterizedLoginViewModel3Args => ParameterizedLoginViewModel3Args, ConstructionArity;
    ParameterizedLocation1Arg => ParameterizedLocation1Arg, ConstructionArity;
    ParameterizedLocation9Args => ParameterizedLocation9Args, ConstructionArity;
    ParameterizedIndexViewModel1Arg => ParameterizedIndexViewModel1Arg, ConstructionArity;
    ParameterizedIndexViewModel2Args => ParameterizedIndexViewModel2Args, ConstructionArity;
    ParameterizedMyEventsListerViewModel1Arg => ParameterizedMyEventsListerViewModel1Arg, ConstructionArity;
    ParameterizedMyEventsListerViewModel3Args => ParameterizedMyEventsListerViewModel3Args, ConstructionArity;
    ComplexClass => ComplexClass, Exotic;
    ParameterizedComplexClass2Args => ParameterizedComplexClass2Args, ConstructionArity;
    ParameterizedComplexClass8Args => ParameterizedComplexClass8Args, ConstructionArity;
}

/// Sibling groups: parameterless base, fewer-args variant, more-args variant
pub const ARITY_GROUPS: &[[ShapeId; 3]] = &[
    [
        ShapeId::LoginViewModel,
        ShapeId::ParameterizedLoginViewModel1Arg,
        ShapeId::ParameterizedLoginViewModel3Args,
    ],
    [
        ShapeId::Location,
        ShapeId::ParameterizedLocation1Arg,
        ShapeId::ParameterizedLocation9Args,
    ],
    [
        ShapeId::IndexViewModel,
        ShapeId::ParameterizedIndexViewModel1Arg,
        ShapeId::ParameterizedIndexViewModel2Args,
    ],
    [
        ShapeId::MyEventsListerViewModel,
        ShapeId::ParameterizedMyEventsListerViewModel1Arg,
        ShapeId::ParameterizedMyEventsListerViewModel3Args,
    ],
    [
        ShapeId::Point,
        ShapeId::ParameterizedPoint1Arg,
        ShapeId::ParameterizedPoint2Args,
    ],
    [
        ShapeId::ClassWithPrimitives,
        ShapeId::ParameterizedClassWithPrimitives3Args,
        ShapeId::ParameterizedClassWithPrimitives8Args,
    ],
    [
        ShapeId::ComplexClass,
        ShapeId::ParameterizedComplexClass2Args,
        ShapeId::ParameterizedComplexClass8Args,
    ],
];

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = GeneratorError;

    /// Case-insensitive lookup by shape name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeneratorError::UnsupportedShape(s.to_string()))
    }
}

type Build = fn(&FixtureFactory) -> Result<Fixture, GeneratorError>;

/// One row of the dispatch table
pub struct CatalogEntry {
    pub id: ShapeId,
    pub build: Build,
}

/// Build a sibling through its own constructor from the family's
/// canonical base instance
fn sibling<B, V: Construct<B>>(seed: B) -> V {
    V::construct(&seed)
}

/// Dispatch table from shape id to constructor
pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: ShapeId::LoginViewModel,
        build: |_| Ok(Fixture::LoginViewModel(shapes::login_view_model())),
    },
    CatalogEntry {
        id: ShapeId::Location,
        build: |_| Ok(Fixture::Location(shapes::location())),
    },
    CatalogEntry {
        id: ShapeId::IndexViewModel,
        build: |f| Ok(Fixture::IndexViewModel(shapes::index_view_model(f.now())?)),
    },
    CatalogEntry {
        id: ShapeId::MyEventsListerViewModel,
        build: |f| {
            Ok(Fixture::MyEventsListerViewModel(
                shapes::my_events_lister_view_model(f.now())?,
            ))
        },
    },
    CatalogEntry {
        id: ShapeId::BinaryData,
        build: |f| {
            Ok(Fixture::BinaryData(shapes::binary_data(
                f.config().primitive_collection_size,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::CollectionsOfPrimitives,
        build: |f| {
            Ok(Fixture::CollectionsOfPrimitives(
                shapes::collections_of_primitives(f.now(), f.config().primitive_collection_size)?,
            ))
        },
    },
    CatalogEntry {
        id: ShapeId::XmlElement,
        build: |_| Ok(Fixture::XmlElement(shapes::xml_element())),
    },
    CatalogEntry {
        id: ShapeId::SimpleStructWithProperties,
        build: |_| Ok(Fixture::SimpleStructWithProperties(shapes::simple_struct())),
    },
    CatalogEntry {
        id: ShapeId::SimpleListOfInt,
        build: |_| Ok(Fixture::SimpleListOfInt(shapes::simple_list_of_int())),
    },
    CatalogEntry {
        id: ShapeId::XmlSerializableRecord,
        build: |_| Ok(Fixture::XmlSerializableRecord(shapes::xml_serializable_record())),
    },
    CatalogEntry {
        id: ShapeId::StringDictionary,
        build: |f| Ok(Fixture::StringDictionary(shapes::identity_map(f.unique_strings()))),
    },
    CatalogEntry {
        id: ShapeId::SortedStringDictionary,
        build: |f| {
            Ok(Fixture::SortedStringDictionary(shapes::identity_map(
                f.unique_strings(),
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::StringSet,
        build: |f| Ok(Fixture::StringSet(f.unique_strings().into_iter().collect())),
    },
    CatalogEntry {
        id: ShapeId::StringList,
        build: |f| Ok(Fixture::StringList(f.unique_strings())),
    },
    CatalogEntry {
        id: ShapeId::Point,
        build: |_| Ok(Fixture::Point(sibling(shapes::point()))),
    },
    CatalogEntry {
        id: ShapeId::ParameterizedPoint1Arg,
        build: |_| Ok(Fixture::ParameterizedPoint1Arg(sibling(shapes::point()))),
    },
    CatalogEntry {
        id: ShapeId::ParameterizedPoint2Args,
        build: |_| Ok(Fixture::ParameterizedPoint2Args(sibling(shapes::point()))),
    },
    CatalogEntry {
        id: ShapeId::ClassWithPrimitives,
        build: |f| {
            Ok(Fixture::ClassWithPrimitives(sibling(
                shapes::class_with_primitives(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedClassWithPrimitives3Args,
        build: |f| {
            Ok(Fixture::ParameterizedClassWithPrimitives3Args(sibling(
                shapes::class_with_primitives(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedClassWithPrimitives8Args,
        build: |f| {
            Ok(Fixture::ParameterizedClassWithPrimitives8Args(sibling(
                shapes::class_with_primitives(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedLoginViewModel1Arg,
        build: |_| {
            Ok(Fixture::ParameterizedLoginViewModel1Arg(sibling(
                shapes::login_view_model(),
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedLoginViewModel3Args,
        build: |_| {
            Ok(Fixture::ParameterizedLoginViewModel3Args(sibling(
                shapes::login_view_model(),
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedLocation1Arg,
        build: |_| Ok(Fixture::ParameterizedLocation1Arg(sibling(shapes::location()))),
    },
    CatalogEntry {
        id: ShapeId::ParameterizedLocation9Args,
        build: |_| Ok(Fixture::ParameterizedLocation9Args(sibling(shapes::location()))),
    },
    CatalogEntry {
        id: ShapeId::ParameterizedIndexViewModel1Arg,
        build: |f| {
            Ok(Fixture::ParameterizedIndexViewModel1Arg(sibling(
                shapes::index_view_model(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedIndexViewModel2Args,
        build: |f| {
            Ok(Fixture::ParameterizedIndexViewModel2Args(sibling(
                shapes::index_view_model(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedMyEventsListerViewModel1Arg,
        build: |f| {
            Ok(Fixture::ParameterizedMyEventsListerViewModel1Arg(sibling(
                shapes::my_events_lister_view_model(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedMyEventsListerViewModel3Args,
        build: |f| {
            Ok(Fixture::ParameterizedMyEventsListerViewModel3Args(sibling(
                shapes::my_events_lister_view_model(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ComplexClass,
        build: |f| Ok(Fixture::ComplexClass(sibling(shapes::complex_class(f.now())?))),
    },
    CatalogEntry {
        id: ShapeId::ParameterizedComplexClass2Args,
        build: |f| {
            Ok(Fixture::ParameterizedComplexClass2Args(sibling(
                shapes::complex_class(f.now())?,
            )))
        },
    },
    CatalogEntry {
        id: ShapeId::ParameterizedComplexClass8Args,
        build: |f| {
            Ok(Fixture::ParameterizedComplexClass8Args(sibling(
                shapes::complex_class(f.now())?,
            )))
        },
    },
];

/// Table row for `id`, if one is registered
pub fn lookup(id: ShapeId) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}
