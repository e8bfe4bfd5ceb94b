use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::error::{HostError, TypeMismatch};
use crate::info::{Modifiers, Type, TypePath};
use crate::{Args, Reflect};

type InstanceCall =
    dyn Fn(&mut dyn Reflect, Args) -> Result<Box<dyn Reflect>, HostError> + Send + Sync;
type StaticCall = dyn Fn(Args) -> Result<Box<dyn Reflect>, HostError> + Send + Sync;

#[derive(Clone)]
pub(crate) enum MethodCall {
    Instance(Arc<InstanceCall>),
    Static(Arc<StaticCall>),
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A method declared by a class.
///
/// Two methods of one class may share a name as long as their parameter
/// types differ.
///
/// ```
/// use bean_reflect::info::{MethodInfo, Type};
///
/// let len = MethodInfo::new::<String, usize>("len", &[], |s, _| Ok(s.len()));
/// let push = MethodInfo::new::<String, ()>("push", &[Type::of::<char>()], |s, mut args| {
///     s.push(args.next()?);
///     Ok(())
/// });
///
/// assert_eq!(len.return_type(), Type::of::<usize>());
/// assert_eq!(push.params(), [Type::of::<char>()]);
/// assert!(!push.is_static());
/// ```
#[derive(Clone)]
pub struct MethodInfo {
    name: &'static str,
    params: Box<[Type]>,
    ret: Type,
    modifiers: Modifiers,
    call: MethodCall,
}

impl MethodInfo {
    /// An instance method of `O` returning an `R`.
    pub fn new<O, R>(
        name: &'static str,
        params: &[Type],
        body: fn(&mut O, Args) -> Result<R, HostError>,
    ) -> Self
    where
        O: Reflect + TypePath,
        R: Reflect + TypePath,
    {
        let call = move |target: &mut dyn Reflect, args: Args| -> Result<Box<dyn Reflect>, HostError> {
            let actual = target.reflect_type_path();
            let owner = target
                .downcast_mut::<O>()
                .ok_or_else(|| TypeMismatch::new(O::type_path(), actual))?;
            Ok(Box::new(body(owner, args)?))
        };

        Self {
            name,
            params: params.into(),
            ret: Type::of::<R>(),
            modifiers: Modifiers::PUBLIC,
            call: MethodCall::Instance(Arc::new(call)),
        }
    }

    /// A static method returning an `R`.
    pub fn new_static<R>(
        name: &'static str,
        params: &[Type],
        body: fn(Args) -> Result<R, HostError>,
    ) -> Self
    where
        R: Reflect + TypePath,
    {
        let call = move |args: Args| -> Result<Box<dyn Reflect>, HostError> {
            Ok(Box::new(body(args)?))
        };

        Self {
            name,
            params: params.into(),
            ret: Type::of::<R>(),
            modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
            call: MethodCall::Static(Arc::new(call)),
        }
    }

    /// Replaces the declared modifiers.
    ///
    /// The `STATIC` flag always follows the call kind.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        let is_static = matches!(self.call, MethodCall::Static(_));
        self.modifiers = modifiers.difference(Modifiers::STATIC);
        self.modifiers.set(Modifiers::STATIC, is_static);
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared parameter types, in order.
    #[inline]
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    #[inline]
    pub fn return_type(&self) -> Type {
        self.ret
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }

    /// Returns `true` if the method has this name and exactly these
    /// parameter types.
    #[inline]
    pub fn matches(&self, name: &str, params: &[Type]) -> bool {
        self.name == name && *self.params == *params
    }

    /// Renders `name(Param, Types)` with simple type names.
    pub fn signature(&self) -> String {
        render_signature(self.name, &self.params)
    }

    pub(crate) fn call(&self) -> &MethodCall {
        &self.call
    }
}

impl core::fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MethodInfo")
            .field("signature", &self.signature())
            .field("ret", &self.ret)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

type ConstructorCall = dyn Fn(Args) -> Result<Box<dyn Reflect>, HostError> + Send + Sync;

/// A constructor declared by a class.
///
/// Constructors are never inherited.
#[derive(Clone)]
pub struct ConstructorInfo {
    params: Box<[Type]>,
    modifiers: Modifiers,
    call: Arc<ConstructorCall>,
}

impl ConstructorInfo {
    /// A constructor of `O`.
    pub fn new<O>(params: &[Type], body: fn(Args) -> Result<O, HostError>) -> Self
    where
        O: Reflect,
    {
        let call = move |args: Args| -> Result<Box<dyn Reflect>, HostError> {
            Ok(Box::new(body(args)?))
        };

        Self {
            params: params.into(),
            modifiers: Modifiers::PUBLIC,
            call: Arc::new(call),
        }
    }

    /// The no-argument constructor of a [`Default`] type.
    pub fn from_default<O>() -> Self
    where
        O: Reflect + Default,
    {
        Self::new::<O>(&[], |_| Ok(O::default()))
    }

    /// Replaces the declared modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers.difference(Modifiers::STATIC);
        self
    }

    /// The declared parameter types, in order.
    #[inline]
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Returns `true` if the constructor takes exactly these parameter types.
    #[inline]
    pub fn matches(&self, params: &[Type]) -> bool {
        *self.params == *params
    }

    pub(crate) fn call(&self) -> &ConstructorCall {
        &*self.call
    }
}

impl core::fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("params", &self.params)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Signature

/// Renders `name(Param, Types)` with simple type names.
///
/// ```
/// use bean_reflect::info::{render_signature, Type};
///
/// let params = [Type::of::<String>(), Type::of::<u32>()];
/// assert_eq!(render_signature("rename", &params), "rename(String, u32)");
/// assert_eq!(render_signature("bark", &[]), "bark()");
/// ```
pub fn render_signature(name: &str, params: &[Type]) -> String {
    let mut signature = String::from(name);
    signature.push('(');
    for (index, param) in params.iter().enumerate() {
        if index > 0 {
            signature.push_str(", ");
        }
        signature.push_str(param.name());
    }
    signature.push(')');
    signature
}
