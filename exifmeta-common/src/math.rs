#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} - {1:?} failed")]
    SubFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} / {1:?} failed")]
    DivFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
    #[error("Division Not Finite")]
    DivisionNotFinite,
}

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }
    };
}

macro_rules! impl_binary_operators {
    ($t:ty) => {
        impl_operator!(Add, add, $t);
        impl_operator!(Sub, sub, $t);
        impl_operator!(Mul, mul, $t);
        impl_operator!(Div, div, $t);
    };
}

impl_binary_operators!(u16);
impl_binary_operators!(u32);
impl_binary_operators!(u64);
impl_binary_operators!(i32);
impl_binary_operators!(i64);
impl_binary_operators!(usize);

/// Same as `checked_add` functions but returns an error
///
/// ```
/// # use exifmeta_common::math::*;
/// assert_eq!(2_u32.safe_add(3).unwrap(), 5);
/// assert!(u32::MAX.safe_add(1).is_err());
/// ```
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

pub trait SafeDiv: Sized {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError>;
}

impl SafeDiv for f64 {
    fn safe_div(self, rhs: Self) -> Result<Self, MathError> {
        let value = self / rhs;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(MathError::DivisionNotFinite)
        }
    }
}

pub trait ToU8: Sized + TryInto<u8> + TryInto<i128> + Copy {
    fn u8(self) -> Result<u8, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU8 for u16 {}
impl ToU8 for u32 {}

pub trait ToU16: Sized + TryInto<u16> + TryInto<i128> + Copy {
    fn u16(self) -> Result<u16, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU16 for u32 {}
impl ToU16 for usize {}

pub trait ToU32: Sized + TryInto<u32> + TryInto<i128> + Copy {
    fn u32(self) -> Result<u32, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU32 for u16 {}
impl ToU32 for u64 {}
impl ToU32 for usize {}

pub trait ToUsize: Sized + TryInto<usize> + TryInto<i128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u16 {}
impl ToUsize for u32 {}
impl ToUsize for u64 {}
