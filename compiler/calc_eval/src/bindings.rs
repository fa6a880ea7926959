//! Variable lookup for `LOAD`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use calc_ir::Value;

/// Read-only name to value lookup supplied by the caller.
///
/// The evaluator only ever borrows bindings and clones what it finds, so
/// one set of bindings can serve any number of evaluations.
pub trait Bindings {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl<S: BuildHasher> Bindings for HashMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Bindings for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// No bindings at all.
impl Bindings for () {
    fn lookup(&self, _name: &str) -> Option<&Value> {
        None
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}
