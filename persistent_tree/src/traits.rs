pub trait Zero {
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Zero for $t {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
