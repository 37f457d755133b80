// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::value::{Kind, Value, ValueError};

/// Identity of a single logical option, shared by all of its names.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub(crate) struct OptionId(pub(crate) usize);

static NEXT_SET_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of a `FlagSet`, unique within the process.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct SetId(usize);

impl SetId {
    pub(crate) fn next() -> Self {
        SetId(NEXT_SET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Typed handle to the storage of a defined option.
///
/// Returned by the `FlagSet::define_*()` methods and used with
/// `FlagSet::get()` to read the option's current value. A slot is only
/// valid for the set that created it (and clones of that set).
pub struct Slot<T> {
    pub(crate) set: SetId,
    pub(crate) id: OptionId,
    marker: PhantomData<fn() -> T>,
}

impl<T> Slot<T> {
    pub(crate) fn new(set: SetId, id: OptionId) -> Self {
        Slot {
            set,
            id,
            marker: PhantomData,
        }
    }
}

// Not derived: derives would require `T: Clone` etc.
impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set && self.id == other.id
    }
}

impl<T> Eq for Slot<T> {}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Slot({}:{})", self.set.0, self.id.0)
    }
}

/// Storage for one option.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Entry {
    pub(crate) value: Value,
    pub(crate) default: Value,
    pub(crate) usage: String,
    /// Number of times the option was set.
    pub(crate) count: usize,
}

impl Entry {
    pub(crate) fn kind(&self) -> Kind {
        self.default.kind()
    }
}

/// Typed storage for every registered option, indexed by [OptionId].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ValueStore {
    entries: Vec<Entry>,
}

impl ValueStore {
    pub(crate) fn new() -> Self {
        ValueStore::default()
    }

    /// The identity the next call to `add()` will return.
    pub(crate) fn next_id(&self) -> OptionId {
        OptionId(self.entries.len())
    }

    pub(crate) fn add(&mut self, default: Value, usage: &str) -> OptionId {
        let id = self.next_id();

        self.entries.push(Entry {
            value: default.clone(),
            default,
            usage: usage.into(),
            count: 0,
        });

        id
    }

    pub(crate) fn get(&self, id: OptionId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = OptionId> {
        (0..self.entries.len()).map(OptionId)
    }

    /// Options that require a value. Booleans are the only ones that don't.
    ///
    /// Note: `id` must have been returned by `add()` on this store.
    pub(crate) fn takes_value(&self, id: OptionId) -> bool {
        !self.entries[id.0].default.is_bool()
    }

    /// Convert `raw` to the option's type and store it.
    ///
    /// The old value is left untouched if the conversion fails.
    pub(crate) fn set(&mut self, id: OptionId, raw: &str) -> Result<(), ValueError> {
        let entry = &mut self.entries[id.0];

        entry.value = Value::parse(entry.kind(), raw)?;
        entry.count += 1;

        Ok(())
    }

    /// Enable a boolean option.
    pub(crate) fn set_flag(&mut self, id: OptionId) {
        let entry = &mut self.entries[id.0];

        entry.value = Value::Bool(true);
        entry.count += 1;
    }
}
