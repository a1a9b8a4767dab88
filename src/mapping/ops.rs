//! Algebra over mapping files: remapping, inversion and composition.

use tracing::trace;

use super::model::{Class, MappingFile};

impl MappingFile {
    /// Map a package name, falling back to the input when unknown.
    pub fn remap_package(&self, name: &str) -> String {
        self.packages
            .get(name)
            .map(|p| p.mapped.clone())
            .unwrap_or_else(|| name.to_string())
    }

    /// Map a class name, falling back to the input when unknown.
    ///
    /// Unknown inner classes (`Outer$Inner`) keep their suffix and have the
    /// outer part remapped.
    pub fn remap_class(&self, name: &str) -> String {
        if let Some(class) = self.classes.get(name) {
            return class.mapped.clone();
        }
        match name.rfind('$') {
            Some(idx) if idx > 0 => {
                format!("{}{}", self.remap_class(&name[..idx]), &name[idx..])
            }
            _ => name.to_string(),
        }
    }

    /// Remap every class reference inside a field or method descriptor.
    pub fn remap_descriptor(&self, descriptor: &str) -> String {
        let mut out = String::with_capacity(descriptor.len());
        let mut rest = descriptor;

        while let Some(start) = rest.find('L') {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 1..];
            let Some(end) = tail.find(';') else {
                out.push_str(&rest[start..]);
                return out;
            };
            out.push('L');
            out.push_str(&self.remap_class(&tail[..end]));
            out.push(';');
            rest = &tail[end + 1..];
        }

        out.push_str(rest);
        out
    }

    /// Swap original and mapped names on every node.
    ///
    /// Descriptors are rewritten into the former mapped namespace so that
    /// they stay keyed by the new original side.
    pub fn reverse(&self) -> MappingFile {
        let mut out = MappingFile::new();

        for package in self.packages.values() {
            out.add_package(&package.mapped, &package.original).metadata =
                package.metadata.clone();
        }

        for class in self.classes.values() {
            let reversed = out.add_class(&class.mapped, &class.original);
            reversed.metadata = class.metadata.clone();

            for field in class.fields.values() {
                let descriptor = field.descriptor.as_deref().map(|d| self.remap_descriptor(d));
                reversed
                    .add_field(&field.mapped, &field.original, descriptor)
                    .metadata = field.metadata.clone();
            }

            for method in class.methods.values() {
                let descriptor = self.remap_descriptor(&method.descriptor);
                let target = reversed.add_method(&method.mapped, descriptor, &method.original);
                target.metadata = method.metadata.clone();
                for parameter in &method.parameters {
                    target
                        .add_parameter(parameter.index, &parameter.mapped, &parameter.original)
                        .metadata = parameter.metadata.clone();
                }
            }
        }

        out
    }

    /// Compose `self` (A→B) with `link` (B→C) into A→C.
    ///
    /// Classes, fields and methods whose mapped name `link` does not know are
    /// dropped. Packages and parameters keep their current mapped name when
    /// `link` has nothing for them. Metadata comes from `self`.
    pub fn chain(&self, link: &MappingFile) -> MappingFile {
        let mut out = MappingFile::new();

        for package in self.packages.values() {
            out.add_package(&package.original, link.remap_package(&package.mapped))
                .metadata = package.metadata.clone();
        }

        for class in self.classes.values() {
            let Some(link_class) = link.class(&class.mapped) else {
                trace!(class = %class.original, "dropping class absent from chained mapping");
                continue;
            };
            let chained = out.add_class(&class.original, &link_class.mapped);
            chain_members(self, class, link_class, chained);
        }

        out
    }

    /// Replace class mapped names for which `rename` returns a new name.
    pub fn rename_classes(&mut self, mut rename: impl FnMut(&Class) -> Option<String>) {
        for class in self.classes.values_mut() {
            if let Some(name) = rename(class) {
                class.mapped = name;
            }
        }
    }
}

fn chain_members(file: &MappingFile, class: &Class, link_class: &Class, chained: &mut Class) {
    chained.metadata = class.metadata.clone();

    for field in class.fields.values() {
        let Some(link_field) = link_class.field(&field.mapped) else {
            trace!(class = %class.original, field = %field.original, "dropping unmatched field");
            continue;
        };
        chained
            .add_field(&field.original, &link_field.mapped, field.descriptor.clone())
            .metadata = field.metadata.clone();
    }

    for method in class.methods.values() {
        let mapped_descriptor = file.remap_descriptor(&method.descriptor);
        let Some(link_method) = link_class.method(&method.mapped, &mapped_descriptor) else {
            trace!(
                class = %class.original,
                method = %method.original,
                descriptor = %method.descriptor,
                "dropping unmatched method"
            );
            continue;
        };

        let target = chained.add_method(&method.original, &method.descriptor, &link_method.mapped);
        target.metadata = method.metadata.clone();
        for parameter in &method.parameters {
            let mapped = link_method
                .parameter(parameter.index)
                .map(|p| p.mapped.as_str())
                .unwrap_or(&parameter.mapped);
            target
                .add_parameter(parameter.index, &parameter.original, mapped)
                .metadata = parameter.metadata.clone();
        }
    }
}
