use alloc::string::String;

use crate::impls::NonGenericClassInfoCell;
use crate::info::{Class, ClassInfo, MethodInfo, TypePath};

macro_rules! impl_opaque_class {
    ($($ty:ident)*) => {$(
        crate::impl_type_path!($ty);

        impl Class for $ty {
            fn class_info() -> &'static ClassInfo {
                static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
                CELL.get_or_init(ClassInfo::opaque::<Self>)
            }
        }
    )*};
}

impl_opaque_class!(
    bool char
    u8 u16 u32 u64 u128 usize
    i8 i16 i32 i64 i128 isize
    f32 f64
);

impl TypePath for () {
    fn type_path() -> &'static str {
        "()"
    }
    fn type_name() -> &'static str {
        "()"
    }
}

impl Class for () {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(ClassInfo::opaque::<Self>)
    }
}

impl TypePath for &'static str {
    fn type_path() -> &'static str {
        "&str"
    }
    fn type_name() -> &'static str {
        "&str"
    }
}

impl Class for &'static str {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(ClassInfo::opaque::<Self>)
    }
}

impl TypePath for String {
    fn type_path() -> &'static str {
        "alloc::string::String"
    }
    fn type_name() -> &'static str {
        "String"
    }
}

impl Class for String {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::opaque::<Self>().with_methods([
                MethodInfo::new::<Self, usize>("len", &[], |s, _| Ok(s.len())),
                MethodInfo::new::<Self, bool>("is_empty", &[], |s, _| Ok(s.is_empty())),
            ])
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{Class, ClassKind, Type, TypePath};

    #[test]
    fn primitive_names() {
        assert_eq!(u32::type_path(), "u32");
        assert_eq!(<&'static str>::type_name(), "&str");
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(u32::class_info().kind(), ClassKind::Opaque);
    }

    #[test]
    fn string_methods_are_reflected() {
        let class = String::class_info();
        assert!(class.declared_method("len", &[]).is_some());
        assert_eq!(
            class.declared_method("is_empty", &[]).map(|m| m.return_type()),
            Some(Type::of::<bool>())
        );
    }
}
