//! Curated records and the indexed database over them.
//!
//! Records are keyed by readable-layer names. Methods are keyed by name and
//! descriptor, parameters by JVM index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::javadoc::{Javadoc, doc_text};
use crate::error::{MergeError, Result};
use crate::mapping::method_key;

// ============================================================================
// RECORDS
// ============================================================================

/// Curated data for a package.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<Javadoc>,
}

/// Curated data for a class and its members.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<Javadoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodData>,

    #[serde(skip)]
    field_index: FxHashMap<String, usize>,
    #[serde(skip)]
    method_index: FxHashMap<String, usize>,
}

impl ClassData {
    /// Create class data with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn with_field(mut self, field: FieldData) -> Self {
        self.fields.push(field);
        self.reindex();
        self
    }

    pub fn with_method(mut self, method: MethodData) -> Self {
        self.methods.push(method);
        self.reindex();
        self
    }

    /// Field by readable name.
    pub fn field(&self, name: &str) -> Option<&FieldData> {
        self.field_index.get(name).map(|&i| &self.fields[i])
    }

    /// Method by readable name and descriptor.
    pub fn method(&self, name: &str, descriptor: &str) -> Option<&MethodData> {
        self.method_index
            .get(&method_key(name, descriptor))
            .map(|&i| &self.methods[i])
    }

    /// Rebuild lookup indices; the first record wins on duplicate keys.
    fn reindex(&mut self) {
        self.field_index.clear();
        for (i, field) in self.fields.iter().enumerate() {
            self.field_index.entry(field.name.clone()).or_insert(i);
        }
        self.method_index.clear();
        for (i, method) in self.methods.iter().enumerate() {
            self.method_index
                .entry(method_key(&method.name, &method.descriptor))
                .or_insert(i);
        }
    }
}

/// Curated data for a field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<Javadoc>,
}

impl FieldData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }
}

/// Curated data for a method or constructor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodData {
    pub name: String,
    pub descriptor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<Javadoc>,
    /// Parameters in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterData>,
}

impl MethodData {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
            ..Self::default()
        }
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterData) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Normalized documentation text, empty when absent.
    pub fn doc(&self) -> String {
        doc_text(self.javadoc.as_ref())
    }
}

/// Curated data for a parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterData {
    /// JVM local-variable index.
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javadoc: Option<Javadoc>,
}

impl ParameterData {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    /// Normalized documentation text, empty when absent.
    pub fn doc(&self) -> String {
        doc_text(self.javadoc.as_ref())
    }
}

// ============================================================================
// DATABASE
// ============================================================================

#[derive(Deserialize)]
struct VersionProbe {
    version: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct Document {
    version: String,
    #[serde(default)]
    packages: Vec<PackageData>,
    #[serde(default)]
    classes: Vec<ClassData>,
}

/// The curated database with lookup indices over its records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CuratedDatabase {
    version: String,
    packages: Vec<PackageData>,
    classes: Vec<ClassData>,
    package_index: FxHashMap<String, usize>,
    class_index: FxHashMap<String, usize>,
}

impl CuratedDatabase {
    /// Build a database from records.
    pub fn new(
        version: impl Into<String>,
        packages: Vec<PackageData>,
        classes: Vec<ClassData>,
    ) -> Self {
        let mut db = Self {
            version: version.into(),
            packages,
            classes,
            ..Self::default()
        };
        db.reindex();
        db
    }

    /// Parse a JSON document.
    ///
    /// Fails when the document's `version` is missing or does not start with
    /// `1.`; nothing else about the document is validated.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let probe: VersionProbe = serde_json::from_slice(bytes)?;
        let version = match probe.version {
            Some(serde_json::Value::String(v)) => v,
            Some(other) => return Err(MergeError::IncompatibleVersion(other.to_string())),
            None => return Err(MergeError::missing_field("version")),
        };
        if !version.starts_with("1.") {
            return Err(MergeError::IncompatibleVersion(version));
        }

        let document: Document = serde_json::from_slice(bytes)?;
        let db = Self::new(document.version, document.packages, document.classes);
        tracing::debug!(
            version = %db.version,
            packages = db.packages.len(),
            classes = db.classes.len(),
            "loaded curated database"
        );
        Ok(db)
    }

    /// Serialize back to a JSON document.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let value = serde_json::json!({
            "version": self.version,
            "packages": self.packages,
            "classes": self.classes,
        });
        Ok(serde_json::to_vec_pretty(&value)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn packages(&self) -> &[PackageData] {
        &self.packages
    }

    pub fn classes(&self) -> &[ClassData] {
        &self.classes
    }

    /// Package by readable name (`/`-separated).
    pub fn package(&self, name: &str) -> Option<&PackageData> {
        self.package_index.get(name).map(|&i| &self.packages[i])
    }

    /// Class by readable internal name (`/`-separated).
    pub fn class(&self, name: &str) -> Option<&ClassData> {
        self.class_index.get(name).map(|&i| &self.classes[i])
    }

    fn reindex(&mut self) {
        self.package_index.clear();
        for (i, package) in self.packages.iter().enumerate() {
            self.package_index.entry(package.name.clone()).or_insert(i);
        }
        self.class_index.clear();
        for (i, class) in self.classes.iter_mut().enumerate() {
            class.reindex();
            self.class_index.entry(class.name.clone()).or_insert(i);
        }
    }
}
