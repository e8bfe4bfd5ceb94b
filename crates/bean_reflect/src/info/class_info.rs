use alloc::vec::Vec;

use crate::info::{
    Class, ConstructorInfo, FieldInfo, MethodInfo, Superclass, Type, TypePath,
};

// -----------------------------------------------------------------------------
// ClassKind

/// What sort of type a [`ClassInfo`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// A concrete type with members of its own.
    Class,
    /// A marker type that classes declare to implement.
    Interface,
    /// A value type without reflected members, e.g. `u32` or `String`.
    Opaque,
}

// -----------------------------------------------------------------------------
// ClassInfo

/// The member tables of a class.
///
/// Lists what the class itself declares, in declaration order. Inherited
/// members are found by walking [`superclass`](ClassInfo::superclass).
///
/// A `ClassInfo` is built once, stored in a static cell and never changed.
pub struct ClassInfo {
    ty: Type,
    kind: ClassKind,
    superclass: Option<Superclass>,
    interfaces: Vec<fn() -> &'static ClassInfo>,
    fields: Vec<FieldInfo>,
    methods: Vec<MethodInfo>,
    constructors: Vec<ConstructorInfo>,
}

impl ClassInfo {
    #[inline]
    fn with_kind<T: TypePath + ?Sized>(kind: ClassKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Creates an empty class description for `T`.
    #[inline]
    pub fn new<T: TypePath + ?Sized>() -> Self {
        Self::with_kind::<T>(ClassKind::Class)
    }

    /// Creates an interface description for `T`.
    #[inline]
    pub fn interface<T: TypePath + ?Sized>() -> Self {
        Self::with_kind::<T>(ClassKind::Interface)
    }

    /// Creates an opaque description for `T`.
    #[inline]
    pub fn opaque<T: TypePath + ?Sized>() -> Self {
        Self::with_kind::<T>(ClassKind::Opaque)
    }

    /// Sets the immediate superclass.
    ///
    /// A chain that loops back to an earlier class is cut at the first
    /// repeat when walked.
    pub fn with_superclass(mut self, superclass: Superclass) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Adds a directly implemented interface.
    ///
    /// Interfaces may refer to each other in a cycle. Lookups visit each
    /// interface once.
    pub fn with_interface<I: Class>(mut self) -> Self {
        self.interfaces.push(I::class_info);
        self
    }

    /// Adds declared fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldInfo>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Adds declared methods.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Adds declared constructors.
    pub fn with_constructors(
        mut self,
        constructors: impl IntoIterator<Item = ConstructorInfo>,
    ) -> Self {
        self.constructors.extend(constructors);
        self
    }

    crate::info::impl_type_fn!(ty);

    #[inline]
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    /// The immediate superclass, if any.
    #[inline]
    pub fn superclass(&self) -> Option<&Superclass> {
        self.superclass.as_ref()
    }

    /// The immediate superclass's `ClassInfo`, if any.
    #[inline]
    pub fn superclass_info(&self) -> Option<&'static ClassInfo> {
        self.superclass.as_ref().map(Superclass::class)
    }

    /// The directly implemented interfaces, in declaration order.
    pub fn interfaces(&self) -> impl ExactSizeIterator<Item = &'static ClassInfo> {
        self.interfaces.iter().map(|interface| interface())
    }

    #[inline]
    pub fn declared_fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// The field this class itself declares under `name`.
    pub fn declared_field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }

    #[inline]
    pub fn declared_methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// The method this class itself declares with exactly this signature.
    pub fn declared_method(&self, name: &str, params: &[Type]) -> Option<&MethodInfo> {
        self.methods.iter().find(|method| method.matches(name, params))
    }

    #[inline]
    pub fn declared_constructors(&self) -> &[ConstructorInfo] {
        &self.constructors
    }

    /// The constructor taking exactly these parameter types.
    pub fn declared_constructor(&self, params: &[Type]) -> Option<&ConstructorInfo> {
        self.constructors
            .iter()
            .find(|constructor| constructor.matches(params))
    }
}

impl core::fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassInfo")
            .field("ty", &self.ty)
            .field("kind", &self.kind)
            .field("superclass", &self.superclass_info().map(ClassInfo::type_path))
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests
