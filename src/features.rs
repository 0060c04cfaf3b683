use crate::error::{Result, StackError};
use crate::types::FeatureId;
use rustc_hash::{FxHashMap, FxHasher};
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Recombination state a stateful feature function attaches to a hypothesis.
///
/// The stack only ever asks for a hash and an exact equality test. The hash is
/// a pre-filter; `state_eq` is authoritative. A state whose equality ignores
/// something future scoring depends on will recombine hypotheses it should
/// not, and nothing here can detect that.
///
/// Every `Hash + Eq` type implements this, so a scorer's state is usually a
/// plain derived struct.
pub trait FfState: Debug + Send + Sync + 'static {
    fn state_hash(&self) -> u64;

    fn state_eq(&self, other: &dyn FfState) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn state_type_name(&self) -> &'static str;
}

impl<T> FfState for T
where
    T: Hash + Eq + Debug + Send + Sync + 'static,
{
    fn state_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    fn state_eq(&self, other: &dyn FfState) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn state_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct FeatureSlot {
    pub(crate) name: String,
    pub(crate) state_type: TypeId,
    pub(crate) state_type_name: &'static str,
}

/// The stateful feature functions active for one search run.
///
/// Registration order fixes the slot each feature's state occupies on every
/// hypothesis built against this set.
#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    name_to_id: FxHashMap<String, FeatureId>,
    slots: Vec<FeatureSlot>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: FfState>(&mut self, name: &str) -> Result<FeatureId> {
        if let Some(id) = self.name_to_id.get(name) {
            let slot = &self.slots[id.index()];
            if slot.state_type != TypeId::of::<S>() {
                return Err(StackError::StateTypeMismatch {
                    feature: name.to_string(),
                    expected: slot.state_type_name,
                    actual: std::any::type_name::<S>(),
                });
            }
            return Ok(*id);
        }

        let id = u16::try_from(self.slots.len())
            .map(FeatureId)
            .map_err(|_| StackError::CapacityExceeded {
                what: "stateful feature set",
            })?;
        self.slots.push(FeatureSlot {
            name: name.to_string(),
            state_type: TypeId::of::<S>(),
            state_type_name: std::any::type_name::<S>(),
        });
        self.name_to_id.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn id_for(&self, name: &str) -> Option<FeatureId> {
        self.name_to_id.get(name).copied()
    }

    pub fn name(&self, id: FeatureId) -> Option<&str> {
        self.slots.get(id.index()).map(|slot| slot.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }
}
