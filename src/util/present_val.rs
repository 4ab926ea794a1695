use decorum::{R32, R64};

/// The weight an edge carries when the caller does not pick one.
pub trait PresentVal {
    fn present() -> Self;
}

macro_rules! present_int {
    ($($t:ty),*) => {
        $(
            impl PresentVal for $t {
                fn present() -> Self {
                    1
                }
            }
        )*
    };
}

macro_rules! present_float {
    ($($t:ty),*) => {
        $(
            impl PresentVal for $t {
                fn present() -> Self {
                    1.0
                }
            }
        )*
    };
}

macro_rules! present_decorum {
    ($t:ty, $other_t:ty) => {
        impl PresentVal for $t {
            fn present() -> Self {
                Self::from_inner(1.0 as $other_t)
            }
        }
    };
}

present_int! {u8, u16, u32, u64, usize, i8, i16, i32, i64, isize}
present_float! {f32, f64}
present_decorum! {R32, f32}
present_decorum! {R64, f64}

impl PresentVal for bool {
    fn present() -> Self {
        true
    }
}
