use std::marker::PhantomData;
use thiserror::Error;

/// A strongly-typed, `String`-named reference to a `TResource` stored in some
/// `TSource`, without holding a Rust reference to the `TSource`.
///
/// [`ExecutableSchema`](crate::executable::ExecutableSchema) stores its root
/// operation types, implemented interfaces and union members this way so the
/// type map never needs to reference itself. Dereference with
/// [`NamedRef::deref()`] by handing over the source explicitly.
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<fn() -> (TSource, TResource)>,
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl AsRef<str>) -> NamedRef<TSource, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self::new(&self.name)
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> core::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NamedRef").field(&self.name).finish()
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Implement this trait for any type that can be looked up by name. This
/// enables usage of `NamedRef<_, T>` for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str) -> NamedRef<Self::Source, Self> {
        NamedRef::<Self::Source, Self>::new(name)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` exists")]
    DanglingReference(String),
}
