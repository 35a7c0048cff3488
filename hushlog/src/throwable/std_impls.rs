//! `Throwable` implementations for standard library error types.
//!
//! The message is the error's `Display` output.

use std::borrow::Cow;

use super::{Throwable, ThrowableClass, ThrowableType};

macro_rules! impl_std_throwable {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Throwable for $ty {
                fn throwable_type(&self) -> ThrowableType {
                    ThrowableType::of::<Self>()
                }

                fn message(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }

            impl ThrowableClass for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

impl_std_throwable! {
    std::io::Error => "std::io::Error",
    std::fmt::Error => "std::fmt::Error",
    std::num::ParseIntError => "std::num::ParseIntError",
    std::num::ParseFloatError => "std::num::ParseFloatError",
    std::str::Utf8Error => "std::str::Utf8Error",
    std::string::FromUtf8Error => "std::string::FromUtf8Error",
}
