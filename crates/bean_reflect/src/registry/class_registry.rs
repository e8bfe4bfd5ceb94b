use alloc::string::String;
use core::any::TypeId;

use bean_utils::TypeIdMap;
use bean_utils::hash::{FixedHashState, HashMap, HashSet};
use log::debug;

use crate::error::{BeanError, ClassNotFound};
use crate::info::{Class, ClassInfo};

// -----------------------------------------------------------------------------
// ClassRegistry

/// A table of known classes, searchable by type path and simple name.
///
/// Registering a class also registers its superclass chain and the
/// interfaces it implements.
///
/// # Example
///
/// ```
/// use bean_reflect::registry::ClassRegistry;
///
/// let registry = ClassRegistry::new();
///
/// let class = registry.type_of("u32").unwrap();
/// assert!(class.type_is::<u32>());
///
/// let class = registry.type_of("alloc::string::String").unwrap();
/// assert_eq!(class.type_name(), "String");
///
/// assert!(registry.type_of("Unknown").unwrap_err().is_abnormal());
/// ```
pub struct ClassRegistry {
    classes: TypeIdMap<&'static ClassInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for ClassRegistry {
    /// See [`ClassRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            classes: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry holding the primitive classes.
    ///
    /// - `()` `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `&str` `String`
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<&'static str>();
        registry.register::<String>();
        registry
    }

    /// Registers `T` together with its superclasses and interfaces.
    #[inline]
    pub fn register<T: Class>(&mut self) {
        self.register_class(T::class_info());
    }

    /// Registers a class together with its superclasses and interfaces.
    ///
    /// Returns `false` if the class was already registered, in which case
    /// nothing is changed.
    pub fn register_class(&mut self, class: &'static ClassInfo) -> bool {
        let ty = class.ty();
        let inserted = self.classes.try_insert(ty.id(), || {
            Self::add_indices(
                class,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            class
        });

        if inserted {
            if let Some(superclass) = class.superclass_info() {
                self.register_class(superclass);
            }
            for interface in class.interfaces() {
                self.register_class(interface);
            }
        }
        inserted
    }

    // The class must not be registered yet.
    fn add_indices(
        class: &ClassInfo,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = class.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.remove(type_name).is_some() {
                debug!("class name `{type_name}` is ambiguous, use its type path instead");
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Registers every class submitted with [`register_class!`].
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Repeated calls do not insert duplicates.
    ///
    /// Without the `auto_register` feature this does nothing and returns
    /// `false`.
    ///
    /// [`register_class!`]: crate::register_class
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;

            let flag = TypeId::of::<auto_register::__AvailFlag>();
            if !self.contains(flag) {
                auto_register::__register_classes(self);
            }
            return self.contains(flag);
        }

        #[cfg(not(feature = "auto_register"))]
        false
    }

    /// Whether the class with the given [`TypeId`] is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.classes.contains(&type_id)
    }

    /// The class with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static ClassInfo> {
        self.classes.get(&type_id).copied()
    }

    /// The class with the given type path, e.g. `alloc::string::String`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static ClassInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// The class with the given simple name, e.g. `String`.
    ///
    /// Returns `None` if the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&'static ClassInfo> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if more than one registered class has this simple name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Looks a class up by type path, then by unambiguous simple name.
    ///
    /// An unknown name is an abnormal [`ClassNotFound`].
    pub fn type_of(&self, name: &str) -> Result<&'static ClassInfo, BeanError> {
        self.get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
            .ok_or_else(|| {
                BeanError::abnormal(ClassNotFound {
                    name: String::from(name),
                })
            })
    }

    /// All registered classes, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static ClassInfo> + '_ {
        self.classes.values().copied()
    }

    /// The number of registered classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Tests
