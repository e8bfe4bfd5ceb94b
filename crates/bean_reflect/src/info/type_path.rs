use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Names a type for reflective access.
///
/// - [`type_path`](TypePath::type_path) is the full path with generics and
///   must be unique among the classes a program registers.
/// - [`type_name`](TypePath::type_name) drops the module path. This is the
///   simple name used in error messages and registry lookups, and it may
///   collide between types.
///
/// Neither name starts with `::`.
///
/// Local non-generic types usually implement it with
/// [`impl_type_path!`](crate::impl_type_path):
///
/// ```
/// use bean_reflect::{impl_type_path, info::TypePath};
///
/// struct Keeper;
/// struct Slot;
///
/// impl_type_path!(Keeper in "zoo::staff");
/// // A type declared inside another keeps the outer name.
/// impl_type_path!(Slot as "Kennel::Slot" in "zoo");
///
/// assert_eq!(Keeper::type_path(), "zoo::staff::Keeper");
/// assert_eq!(Slot::type_name(), "Kennel::Slot");
/// ```
///
/// Generic types build their names once per instantiation, see
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
pub trait TypePath: 'static {
    /// The full path, e.g. `core::option::Option<alloc::string::String>`.
    fn type_path() -> &'static str;

    /// The name without module path, e.g. `Option<String>`.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// The names of a value's type, for use through `dyn` references.
///
/// Implemented for every [`TypePath`] type.
///
/// ```
/// use bean_reflect::{Reflect, info::DynamicTypePath};
///
/// let value: &dyn Reflect = &7_u8;
/// assert_eq!(value.reflect_type_path(), "u8");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] that remembers the names of its type.
///
/// Equality and hashing use the `TypeId` alone. Member signatures are
/// matched with this equality, so a value matches a parameter only when
/// its type is exactly the declared one.
///
/// ```
/// use bean_reflect::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.name(), "String");
/// assert_ne!(ty, Type::of::<&'static str>());
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    /// The `Type` of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_path

/// Implements [`TypePath`] for a local non-generic type.
///
/// - `impl_type_path!(Foo)` names a type with no module path.
/// - `impl_type_path!(Foo in "zoo::staff")` prefixes the module path.
/// - `impl_type_path!(Foo as "Outer::Foo" in "zoo")` also overrides the
///   simple name, for types nested in another one.
///
/// [`TypePath`]: crate::info::TypePath
#[macro_export]
macro_rules! impl_type_path {
    ($ty:ident as $name:literal in $module:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!($module, "::", $name)
            }
            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }
    };
    ($ty:ident in $module:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::concat!($module, "::", ::core::stringify!($ty))
            }
            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }
        }
    };
    ($ty:ident) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                ::core::stringify!($ty)
            }
            #[inline]
            fn type_name() -> &'static str {
                ::core::stringify!($ty)
            }
        }
    };
}

// Type accessors shared by the descriptor structs.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// The described [`Type`](crate::info::Type).
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.$field.is::<T>()
        }

        /// See [`TypePath::type_path`](crate::info::TypePath::type_path).
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        /// See [`TypePath::type_name`](crate::info::TypePath::type_name).
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.$field.name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests
