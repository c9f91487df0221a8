use super::arity::arity_family;
use super::temporal::DateTime;

arity_family! {
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    pub struct ParameterizedPoint1Arg {
        new(x: i32);
        set(y: i32);
    }

    pub struct ParameterizedPoint2Args {
        new(x: i32, y: i32);
        set();
    }
}

arity_family! {
    /// Fifteen scalar fields: ints, strings and local date/times
    pub struct ClassWithPrimitives {
        pub first_int: i32,
        pub second_int: i32,
        pub first_string: String,
        pub second_string: String,
        pub first_date_time: DateTime,
        pub second_date_time: DateTime,
        pub x: i32,
        pub y: i32,
        pub z: i32,
        pub third_int: i32,
        pub fourth_int: i32,
        pub third_string: String,
        pub fourth_string: String,
        pub third_date_time: DateTime,
        pub fourth_date_time: DateTime,
    }

    pub struct ParameterizedClassWithPrimitives3Args {
        new(x: i32, y: i32, z: i32);
        set(
            first_int: i32,
            second_int: i32,
            first_string: String,
            second_string: String,
            first_date_time: DateTime,
            second_date_time: DateTime,
            third_int: i32,
            fourth_int: i32,
            third_string: String,
            fourth_string: String,
            third_date_time: DateTime,
            fourth_date_time: DateTime,
        );
    }

    pub struct ParameterizedClassWithPrimitives8Args {
        new(
            first_date_time: DateTime,
            second_date_time: DateTime,
            x: i32,
            y: i32,
            z: i32,
            third_int: i32,
            fourth_int: i32,
            third_string: String,
        );
        set(
            first_int: i32,
            second_int: i32,
            first_string: String,
            second_string: String,
            fourth_string: String,
            third_date_time: DateTime,
            fourth_date_time: DateTime,
        );
    }
}
