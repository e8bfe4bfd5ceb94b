//! Items used by exported macros. Not public API.

#[cfg(feature = "auto_register")]
#[doc(hidden)]
pub mod auto_register {
    pub use inventory;

    use crate::impls::NonGenericClassInfoCell;
    use crate::info::{Class, ClassInfo};
    use crate::registry::ClassRegistry;

    pub struct __AutoRegisterFunc(pub fn(&mut ClassRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub fn __register<T: Class>(registry: &mut ClassRegistry) {
        registry.register::<T>();
    }

    pub fn __register_classes(registry: &mut ClassRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }

    // Registered when collection works on the current platform.
    pub struct __AvailFlag;

    crate::impl_type_path!(__AvailFlag in "bean_reflect::__macro_exports::auto_register");

    impl Class for __AvailFlag {
        fn class_info() -> &'static ClassInfo {
            static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
            CELL.get_or_init(ClassInfo::new::<Self>)
        }
    }

    inventory::submit! {
        __AutoRegisterFunc(__register::<__AvailFlag>)
    }
}

/// Submits classes to [`ClassRegistry::auto_register`].
///
/// The types must be concrete. Without the `auto_register` feature this
/// expands to nothing.
///
/// ```
/// use bean_reflect::{
///     impl_type_path, impls::NonGenericClassInfoCell,
///     info::{Class, ClassInfo},
///     register_class,
///     registry::ClassRegistry,
/// };
///
/// struct Parcel;
///
/// impl_type_path!(Parcel in "post");
///
/// impl Class for Parcel {
///     fn class_info() -> &'static ClassInfo {
///         static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
///         CELL.get_or_init(ClassInfo::new::<Self>)
///     }
/// }
///
/// register_class!(Parcel);
///
/// let mut registry = ClassRegistry::empty();
/// if registry.auto_register() {
///     assert!(registry.get_with_type_path("post::Parcel").is_some());
/// }
/// ```
///
/// [`ClassRegistry::auto_register`]: crate::registry::ClassRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! register_class {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__macro_exports::auto_register::inventory::submit! {
                $crate::__macro_exports::auto_register::__AutoRegisterFunc(
                    $crate::__macro_exports::auto_register::__register::<$ty>
                )
            }
        )+
    };
}

/// Submits classes to `ClassRegistry::auto_register`.
///
/// The `auto_register` feature is disabled, so this expands to nothing.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! register_class {
    ($($ty:ty),+ $(,)?) => {};
}
