use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::impls::{GenericClassInfoCell, GenericTypePathCell, concat};
use crate::info::{Class, ClassInfo, MethodInfo, TypePath};

macro_rules! impl_generic_type_path {
    ($ty:ident, $module:literal) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }
        }
    };
}

impl_generic_type_path!(Vec, "alloc::vec");
impl_generic_type_path!(Option, "core::option");
impl_generic_type_path!(Arc, "alloc::sync");

impl<T: Class + Send + Sync> Class for Vec<T> {
    fn class_info() -> &'static ClassInfo {
        static CELL: GenericClassInfoCell = GenericClassInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            ClassInfo::opaque::<Self>().with_methods([
                MethodInfo::new::<Self, usize>("len", &[], |v, _| Ok(v.len())),
                MethodInfo::new::<Self, bool>("is_empty", &[], |v, _| Ok(v.is_empty())),
            ])
        })
    }
}

impl<T: Class + Send + Sync> Class for Option<T> {
    fn class_info() -> &'static ClassInfo {
        static CELL: GenericClassInfoCell = GenericClassInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            ClassInfo::opaque::<Self>().with_methods([
                MethodInfo::new::<Self, bool>("is_some", &[], |v, _| Ok(v.is_some())),
                MethodInfo::new::<Self, bool>("is_none", &[], |v, _| Ok(v.is_none())),
            ])
        })
    }
}

impl<T: Class + Send + Sync> Class for Arc<T> {
    fn class_info() -> &'static ClassInfo {
        static CELL: GenericClassInfoCell = GenericClassInfoCell::new();
        CELL.get_or_insert::<Self>(ClassInfo::opaque::<Self>)
    }
}
