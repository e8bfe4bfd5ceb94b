use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::any::Any;

use crate::error::{ArgumentCount, HostError};
use crate::info::{Type, TypePath};
use crate::Reflect;

/// An ordered, owned list of reflected arguments.
///
/// Built by callers of reflective methods and constructors, consumed by the
/// host bodies registered in [`MethodInfo`] and [`ConstructorInfo`] through
/// [`Args::next`].
///
/// ```
/// use bean_reflect::{args, Args};
///
/// let mut args: Args = args!["rex", 3_u32];
/// assert_eq!(args.len(), 2);
///
/// let name: &'static str = args.next().unwrap();
/// let age: u32 = args.next().unwrap();
/// assert_eq!((name, age), ("rex", 3));
/// assert!(args.is_empty());
/// ```
///
/// [`MethodInfo`]: crate::info::MethodInfo
/// [`ConstructorInfo`]: crate::info::ConstructorInfo
#[derive(Default, Debug)]
pub struct Args {
    values: VecDeque<Box<dyn Reflect>>,
    taken: usize,
}

impl Args {
    /// Creates an empty argument list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: VecDeque::new(),
            taken: 0,
        }
    }

    /// Appends an argument.
    #[inline]
    pub fn push(&mut self, value: impl Reflect) {
        self.values.push_back(Box::new(value));
    }

    /// Appends an already boxed argument.
    #[inline]
    pub fn push_boxed(&mut self, value: Box<dyn Reflect>) {
        self.values.push_back(value);
    }

    /// Appends an argument, builder style.
    #[inline]
    pub fn with(mut self, value: impl Reflect) -> Self {
        self.push(value);
        self
    }

    /// Number of remaining arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no argument remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The runtime types of the remaining arguments, in order.
    pub fn types(&self) -> Vec<Type> {
        self.values.iter().map(|value| value.reflect_type()).collect()
    }

    /// Iterates over the remaining arguments.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &dyn Reflect> {
        self.values.iter().map(|value| &**value)
    }

    /// Takes the next argument as a `T`.
    ///
    /// Fails with [`ArgumentCount`] when the list is exhausted and with
    /// [`TypeMismatch`](crate::error::TypeMismatch) when the argument is not a `T`.
    pub fn next<T: Any + TypePath>(&mut self) -> Result<T, HostError> {
        let Some(value) = self.values.pop_front() else {
            return Err(Box::new(ArgumentCount {
                expected: self.taken + 1,
                actual: self.taken,
            }));
        };
        self.taken += 1;
        Ok(value.take::<T>()?)
    }

    /// Takes the next argument without looking at its type.
    #[inline]
    pub fn next_boxed(&mut self) -> Option<Box<dyn Reflect>> {
        let value = self.values.pop_front()?;
        self.taken += 1;
        Some(value)
    }
}

impl From<Vec<Box<dyn Reflect>>> for Args {
    fn from(values: Vec<Box<dyn Reflect>>) -> Self {
        Self {
            values: values.into(),
            taken: 0,
        }
    }
}

impl FromIterator<Box<dyn Reflect>> for Args {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            taken: 0,
        }
    }
}

/// Builds an [`Args`](crate::Args) list from values.
///
/// ```
/// use bean_reflect::args;
///
/// let args = args![String::from("ball"), 2_u32];
/// assert_eq!(args.len(), 2);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new()$(.with($value))+
    };
}

// -----------------------------------------------------------------------------
// Tests
