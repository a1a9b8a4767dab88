//! In-memory mapping tree.
//!
//! A [`MappingFile`] relates names in one namespace (`original`) to names in
//! another (`mapped`). Every container is an `IndexMap` so iteration follows
//! the order the source document declared things in.
//!
//! ```text
//! MappingFile
//! ├── packages: IndexMap<original, Package>
//! └── classes:  IndexMap<original, Class>
//!     ├── fields:  IndexMap<original, Field>
//!     └── methods: IndexMap<original + descriptor, Method>
//!         └── parameters: Vec<Parameter>  (sorted by index)
//! ```

use indexmap::IndexMap;

use crate::base::constants::STATIC_METADATA;

/// Free-form key/value metadata attached to a node (e.g. `is_static`).
pub type Metadata = IndexMap<String, String>;

// ============================================================================
// FILE
// ============================================================================

/// A complete mapping document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingFile {
    pub packages: IndexMap<String, Package>,
    pub classes: IndexMap<String, Class>,
}

impl MappingFile {
    /// Create an empty mapping file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, keeping the first declaration on duplicates.
    pub fn add_package(
        &mut self,
        original: impl Into<String>,
        mapped: impl Into<String>,
    ) -> &mut Package {
        let original = original.into();
        self.packages
            .entry(original.clone())
            .or_insert_with(|| Package {
                original,
                mapped: mapped.into(),
                metadata: Metadata::new(),
            })
    }

    /// Add a class, keeping the first declaration on duplicates.
    pub fn add_class(
        &mut self,
        original: impl Into<String>,
        mapped: impl Into<String>,
    ) -> &mut Class {
        let original = original.into();
        self.classes
            .entry(original.clone())
            .or_insert_with(|| Class::new(original, mapped.into()))
    }

    pub fn package(&self, original: &str) -> Option<&Package> {
        self.packages.get(original)
    }

    pub fn class(&self, original: &str) -> Option<&Class> {
        self.classes.get(original)
    }

    pub fn class_mut(&mut self, original: &str) -> Option<&mut Class> {
        self.classes.get_mut(original)
    }

    /// Packages in declaration order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    /// Total number of methods across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.values().map(|c| c.methods.len()).sum()
    }
}

// ============================================================================
// NODES
// ============================================================================

/// A package mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub original: String,
    pub mapped: String,
    pub metadata: Metadata,
}

/// A class mapping and its members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    pub original: String,
    pub mapped: String,
    pub fields: IndexMap<String, Field>,
    pub methods: IndexMap<String, Method>,
    pub metadata: Metadata,
}

impl Class {
    pub fn new(original: impl Into<String>, mapped: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            mapped: mapped.into(),
            fields: IndexMap::new(),
            methods: IndexMap::new(),
            metadata: Metadata::new(),
        }
    }

    /// Add a field, keeping the first declaration on duplicates.
    pub fn add_field(
        &mut self,
        original: impl Into<String>,
        mapped: impl Into<String>,
        descriptor: Option<String>,
    ) -> &mut Field {
        let original = original.into();
        self.fields
            .entry(original.clone())
            .or_insert_with(|| Field {
                original,
                mapped: mapped.into(),
                descriptor,
                metadata: Metadata::new(),
            })
    }

    /// Add a method, keeping the first declaration on duplicates.
    ///
    /// `descriptor` is expressed in this file's original namespace.
    pub fn add_method(
        &mut self,
        original: impl Into<String>,
        descriptor: impl Into<String>,
        mapped: impl Into<String>,
    ) -> &mut Method {
        let original = original.into();
        let descriptor = descriptor.into();
        self.methods
            .entry(method_key(&original, &descriptor))
            .or_insert_with(|| Method {
                original,
                mapped: mapped.into(),
                descriptor,
                parameters: Vec::new(),
                metadata: Metadata::new(),
            })
    }

    pub fn field(&self, original: &str) -> Option<&Field> {
        self.fields.get(original)
    }

    pub fn method(&self, original: &str, descriptor: &str) -> Option<&Method> {
        self.methods.get(&method_key(original, descriptor))
    }

    pub fn method_mut(&mut self, original: &str, descriptor: &str) -> Option<&mut Method> {
        self.methods.get_mut(&method_key(original, descriptor))
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values()
    }
}

/// A field mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub original: String,
    pub mapped: String,
    /// Field type in the original namespace, when the format carries one.
    pub descriptor: Option<String>,
    pub metadata: Metadata,
}

/// A method mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub original: String,
    pub mapped: String,
    /// Method descriptor in the original namespace.
    pub descriptor: String,
    pub parameters: Vec<Parameter>,
    pub metadata: Metadata,
}

impl Method {
    /// Add a parameter, keeping the list sorted by index.
    ///
    /// A second declaration for an index that already exists is ignored.
    pub fn add_parameter(
        &mut self,
        index: u32,
        original: impl Into<String>,
        mapped: impl Into<String>,
    ) -> &mut Parameter {
        let pos = self.parameters.partition_point(|p| p.index < index);
        let exists = self
            .parameters
            .get(pos)
            .is_some_and(|p| p.index == index);
        if !exists {
            self.parameters.insert(
                pos,
                Parameter {
                    index,
                    original: original.into(),
                    mapped: mapped.into(),
                    metadata: Metadata::new(),
                },
            );
        }
        &mut self.parameters[pos]
    }

    /// Parameter declared with the given index.
    pub fn parameter(&self, index: u32) -> Option<&Parameter> {
        self.parameters
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|pos| &self.parameters[pos])
    }

    pub fn is_static(&self) -> bool {
        self.metadata.contains_key(STATIC_METADATA)
    }

    pub fn set_static(&mut self) {
        self.metadata
            .insert(STATIC_METADATA.to_string(), "true".to_string());
    }
}

/// A method parameter mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// JVM local-variable index.
    pub index: u32,
    pub original: String,
    pub mapped: String,
    pub metadata: Metadata,
}

/// Lookup key for a method: name immediately followed by descriptor.
pub fn method_key(name: &str, descriptor: &str) -> String {
    let mut key = String::with_capacity(name.len() + descriptor.len());
    key.push_str(name);
    key.push_str(descriptor);
    key
}
