use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::error::{HostError, TypeMismatch};
use crate::info::{Modifiers, Type, TypePath};

type InstanceGetter = dyn Fn(&dyn Reflect) -> Result<Box<dyn Reflect>, HostError> + Send + Sync;
type InstanceSetter =
    dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), HostError> + Send + Sync;
type StaticGetter = dyn Fn() -> Result<Box<dyn Reflect>, HostError> + Send + Sync;
type StaticSetter = dyn Fn(Box<dyn Reflect>) -> Result<(), HostError> + Send + Sync;

/// How a field's value is read and written.
#[derive(Clone)]
pub(crate) enum FieldAccessor {
    /// Applied to the declaring class's part of a target object.
    Instance {
        get: Arc<InstanceGetter>,
        set: Arc<InstanceSetter>,
    },
    /// Class-level storage, no target.
    Static {
        get: Arc<StaticGetter>,
        set: Arc<StaticSetter>,
    },
}

/// A field declared by a class.
///
/// Getters return a clone of the stored value; setters replace it.
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    modifiers: Modifiers,
    accessor: FieldAccessor,
}

impl FieldInfo {
    /// An instance field of `O` holding an `F`.
    ///
    /// `get` and `get_mut` project an `O` to the field.
    pub fn new<O, F>(name: &'static str, get: fn(&O) -> &F, get_mut: fn(&mut O) -> &mut F) -> Self
    where
        O: Reflect + TypePath,
        F: Reflect + TypePath + Clone,
    {
        let getter = move |target: &dyn Reflect| -> Result<Box<dyn Reflect>, HostError> {
            let owner = target
                .downcast_ref::<O>()
                .ok_or_else(|| TypeMismatch::new(O::type_path(), target.reflect_type_path()))?;
            Ok(Box::new(get(owner).clone()))
        };
        let setter = move |target: &mut dyn Reflect, value: Box<dyn Reflect>| -> Result<(), HostError> {
            let value = value.take::<F>()?;
            let actual = target.reflect_type_path();
            let owner = target
                .downcast_mut::<O>()
                .ok_or_else(|| TypeMismatch::new(O::type_path(), actual))?;
            *get_mut(owner) = value;
            Ok(())
        };

        Self {
            name,
            ty: Type::of::<F>(),
            modifiers: Modifiers::PRIVATE,
            accessor: FieldAccessor::Instance {
                get: Arc::new(getter),
                set: Arc::new(setter),
            },
        }
    }

    /// A static field holding an `F`, stored outside any instance.
    pub fn new_static<F>(name: &'static str, get: fn() -> F, set: fn(F)) -> Self
    where
        F: Reflect + TypePath,
    {
        let getter = move || -> Result<Box<dyn Reflect>, HostError> { Ok(Box::new(get())) };
        let setter = move |value: Box<dyn Reflect>| -> Result<(), HostError> {
            set(value.take::<F>()?);
            Ok(())
        };

        Self {
            name,
            ty: Type::of::<F>(),
            modifiers: Modifiers::PRIVATE | Modifiers::STATIC,
            accessor: FieldAccessor::Static {
                get: Arc::new(getter),
                set: Arc::new(setter),
            },
        }
    }

    /// Replaces the declared modifiers.
    ///
    /// The `STATIC` flag always follows the accessor kind.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        let is_static = matches!(self.accessor, FieldAccessor::Static { .. });
        self.modifiers = modifiers.difference(Modifiers::STATIC);
        self.modifiers.set(Modifiers::STATIC, is_static);
        self
    }

    /// The field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared modifiers.
    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns `true` for class-level fields.
    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    pub(crate) fn accessor(&self) -> &FieldAccessor {
        &self.accessor
    }

    crate::info::impl_type_fn!(ty);
}

impl core::fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}
