//! Registration of component descriptors by type.
//!
//! Descriptor graphs are walked recursively by the comparator, so a cycle
//! would never terminate. The registry is the place to reject one: each
//! descriptor is validated once, when its component type registers, instead
//! of on every update.

use std::any::TypeId;
use std::collections::HashMap;

use tracing::debug;

use crate::error::RegistryError;

use super::descriptor::{ComponentDescriptor, ThemeRelevance};

/// Maps component types to their validated descriptors.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    by_type: HashMap<TypeId, &'static ComponentDescriptor>,
    by_name: HashMap<&'static str, TypeId>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `C`'s descriptor after checking its child graph is acyclic.
    ///
    /// Registering the same type twice is a no-op. A different type reusing
    /// an already registered name is rejected.
    pub fn register<C: ThemeRelevance + 'static>(&mut self) -> Result<(), RegistryError> {
        let type_id = TypeId::of::<C>();
        let descriptor = C::descriptor();

        if let Some(existing) = self.by_name.get(descriptor.name()) {
            if *existing == type_id {
                return Ok(());
            }
            return Err(RegistryError::Duplicate {
                name: descriptor.name().to_string(),
            });
        }

        validate_descriptor(descriptor)?;
        debug!(
            component = descriptor.name(),
            children = descriptor.children().len(),
            "registered component descriptor"
        );
        self.by_type.insert(type_id, descriptor);
        self.by_name.insert(descriptor.name(), type_id);
        Ok(())
    }

    /// The descriptor registered for `C`, if any.
    pub fn get<C: 'static>(&self) -> Option<&'static ComponentDescriptor> {
        self.get_by_type(TypeId::of::<C>())
    }

    pub fn get_by_type(&self, type_id: TypeId) -> Option<&'static ComponentDescriptor> {
        self.by_type.get(&type_id).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&'static ComponentDescriptor> {
        self.by_name
            .get(name)
            .and_then(|type_id| self.get_by_type(*type_id))
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

/// Checks that no descriptor reaches itself through declared children.
pub fn validate_descriptor(descriptor: &'static ComponentDescriptor) -> Result<(), RegistryError> {
    let mut path = Vec::new();
    let mut done = Vec::new();
    visit(descriptor, &mut path, &mut done)
}

fn visit(
    descriptor: &'static ComponentDescriptor,
    path: &mut Vec<&'static ComponentDescriptor>,
    done: &mut Vec<*const ComponentDescriptor>,
) -> Result<(), RegistryError> {
    let ptr: *const ComponentDescriptor = descriptor;
    if done.contains(&ptr) {
        return Ok(());
    }
    if let Some(start) = path.iter().position(|d| std::ptr::eq(*d, descriptor)) {
        let mut cycle: Vec<String> = path[start..]
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        cycle.push(descriptor.name().to_string());
        return Err(RegistryError::CycleDetected { path: cycle });
    }

    path.push(descriptor);
    for child in descriptor.children() {
        visit(child, path, done)?;
    }
    path.pop();
    done.push(ptr);
    Ok(())
}
