//! A small class family shared by the unit tests.
//!
//! ```text
//! Pet (interface)
//! Animal { name, age, static kingdom }
//!   └─ Dog: Pet { name, breed, collar, tricks, static registered }
//! Repository { size }
//!   ├─ DogRepository       extends Repository<Dog, String>
//!   └─ OpenRepository<T>   extends Repository<T>
//! Collar { tag }
//! Kennel::Slot
//! ```

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::impls::NonGenericClassInfoCell;
use crate::info::{
    Class, ClassInfo, ConstructorInfo, Extends, FieldInfo, MethodInfo, Modifiers, Superclass,
    Type, TypeArgument,
};

// -----------------------------------------------------------------------------
// Pet

pub struct Pet;

crate::impl_type_path!(Pet in "zoo");

impl Class for Pet {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(ClassInfo::interface::<Self>)
    }
}

// -----------------------------------------------------------------------------
// Collar

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collar {
    pub tag: String,
}

crate::impl_type_path!(Collar in "zoo");

impl Class for Collar {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>()
                .with_fields([FieldInfo::new::<Self, String>(
                    "tag",
                    |c| &c.tag,
                    |c| &mut c.tag,
                )])
                .with_constructors([ConstructorInfo::from_default::<Self>()])
        })
    }
}

// -----------------------------------------------------------------------------
// Animal

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub age: u32,
}

static KINGDOM: RwLock<&'static str> = RwLock::new("Animalia");

pub fn kingdom() -> &'static str {
    *KINGDOM.read().unwrap_or_else(PoisonError::into_inner)
}

fn set_kingdom(value: &'static str) {
    *KINGDOM.write().unwrap_or_else(PoisonError::into_inner) = value;
}

crate::impl_type_path!(Animal in "zoo");

impl Class for Animal {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>()
                .with_fields([
                    FieldInfo::new::<Self, String>("name", |a| &a.name, |a| &mut a.name),
                    FieldInfo::new::<Self, u32>("age", |a| &a.age, |a| &mut a.age)
                        .with_modifiers(Modifiers::PUBLIC),
                    FieldInfo::new_static::<&'static str>("kingdom", kingdom, set_kingdom),
                ])
                .with_methods([
                    MethodInfo::new::<Self, String>("bark", &[], |a, _| {
                        Ok(format!("{} makes a sound", a.name))
                    }),
                    MethodInfo::new::<Self, String>("describe", &[], |a, _| {
                        Ok(format!("animal {}", a.name))
                    }),
                    MethodInfo::new::<Self, ()>("rename", &[Type::of::<String>()], |a, mut args| {
                        a.name = args.next()?;
                        Ok(())
                    }),
                    MethodInfo::new::<Self, u32>("grow", &[Type::of::<u32>()], |a, mut args| {
                        a.age += args.next::<u32>()?;
                        Ok(a.age)
                    }),
                    MethodInfo::new::<Self, ()>("fail", &[], |_, _| Err("animal refused".into())),
                    MethodInfo::new_static::<Animal>("named", &[Type::of::<String>()], |mut args| {
                        Ok(Animal {
                            name: args.next()?,
                            age: 0,
                        })
                    }),
                ])
                .with_constructors([
                    ConstructorInfo::from_default::<Self>(),
                    ConstructorInfo::new::<Self>(
                        &[Type::of::<String>(), Type::of::<u32>()],
                        |mut args| {
                            Ok(Animal {
                                name: args.next()?,
                                age: args.next()?,
                            })
                        },
                    ),
                ])
        })
    }
}

// -----------------------------------------------------------------------------
// Dog

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dog {
    pub animal: Animal,
    pub name: String,
    pub breed: String,
    pub collar: Arc<Collar>,
    pub tricks: Vec<String>,
}

static REGISTERED: AtomicU32 = AtomicU32::new(0);

impl Dog {
    pub fn new(name: &str, breed: &str) -> Self {
        Self {
            animal: Animal {
                name: String::from("animal"),
                age: 3,
            },
            name: String::from(name),
            breed: String::from(breed),
            collar: Arc::new(Collar {
                tag: String::from("red"),
            }),
            tricks: Vec::new(),
        }
    }
}

crate::impl_type_path!(Dog in "zoo");

impl Extends<Animal> for Dog {
    fn base(&self) -> &Animal {
        &self.animal
    }

    fn base_mut(&mut self) -> &mut Animal {
        &mut self.animal
    }
}

impl Class for Dog {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>()
                .with_superclass(Superclass::of::<Self, Animal>())
                .with_interface::<Pet>()
                .with_fields([
                    FieldInfo::new::<Self, String>("name", |d| &d.name, |d| &mut d.name),
                    FieldInfo::new::<Self, String>("breed", |d| &d.breed, |d| &mut d.breed),
                    FieldInfo::new::<Self, Arc<Collar>>(
                        "collar",
                        |d| &d.collar,
                        |d| &mut d.collar,
                    ),
                    FieldInfo::new::<Self, Vec<String>>(
                        "tricks",
                        |d| &d.tricks,
                        |d| &mut d.tricks,
                    ),
                    FieldInfo::new_static::<u32>(
                        "registered",
                        || REGISTERED.load(Ordering::Relaxed),
                        |value| REGISTERED.store(value, Ordering::Relaxed),
                    ),
                ])
                .with_methods([
                    MethodInfo::new::<Self, String>("fetch", &[Type::of::<String>()], |d, mut args| {
                        Ok(format!("{} fetched the {}", d.name, args.next::<String>()?))
                    }),
                    MethodInfo::new::<Self, String>("describe", &[], |d, _| {
                        Ok(format!("dog {}", d.name))
                    }),
                    MethodInfo::new::<Self, ()>(
                        "rename",
                        &[Type::of::<&'static str>()],
                        |d, mut args| {
                            d.name = String::from(args.next::<&'static str>()?);
                            Ok(())
                        },
                    ),
                ])
                .with_constructors([ConstructorInfo::new::<Self>(
                    &[Type::of::<String>(), Type::of::<String>()],
                    |mut args| {
                        let name: String = args.next()?;
                        let breed: String = args.next()?;
                        Ok(Dog::new(&name, &breed))
                    },
                )])
        })
    }
}

// -----------------------------------------------------------------------------
// Repositories

#[derive(Clone, Debug, Default)]
pub struct Repository {
    pub size: usize,
}

crate::impl_type_path!(Repository in "zoo::store");

impl Class for Repository {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>().with_fields([FieldInfo::new::<Self, usize>(
                "size",
                |r| &r.size,
                |r| &mut r.size,
            )])
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct DogRepository {
    pub repository: Repository,
}

crate::impl_type_path!(DogRepository in "zoo::store");

impl Extends<Repository> for DogRepository {
    fn base(&self) -> &Repository {
        &self.repository
    }

    fn base_mut(&mut self) -> &mut Repository {
        &mut self.repository
    }
}

impl Class for DogRepository {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>().with_superclass(
                Superclass::of::<Self, Repository>()
                    .with_type_arguments([TypeArgument::of::<Dog>(), TypeArgument::of::<String>()]),
            )
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct OpenRepository {
    pub repository: Repository,
}

crate::impl_type_path!(OpenRepository in "zoo::store");

impl Extends<Repository> for OpenRepository {
    fn base(&self) -> &Repository {
        &self.repository
    }

    fn base_mut(&mut self) -> &mut Repository {
        &mut self.repository
    }
}

impl Class for OpenRepository {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(|| {
            ClassInfo::new::<Self>().with_superclass(
                Superclass::of::<Self, Repository>()
                    .with_type_arguments([TypeArgument::parameter("T")]),
            )
        })
    }
}

// -----------------------------------------------------------------------------
// Kennel::Slot

pub struct KennelSlot;

crate::impl_type_path!(KennelSlot as "Kennel::Slot" in "zoo");

impl Class for KennelSlot {
    fn class_info() -> &'static ClassInfo {
        static CELL: NonGenericClassInfoCell = NonGenericClassInfoCell::new();
        CELL.get_or_init(ClassInfo::new::<Self>)
    }
}

#[cfg(feature = "auto_register")]
crate::register_class!(Dog);
