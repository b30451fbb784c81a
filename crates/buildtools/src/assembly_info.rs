#[cfg(test)]
#[path = "assembly_info_test.rs"]
mod assembly_info_test;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::emitter::{
    AttributeArgument,
    AttributeDeclaration,
    CodeEmitter,
    CompileUnit,
    EmitterLanguage,
};
use crate::version::Version;

const DEFAULT_IMPORTS: [&str; 2] = ["System", "System.Reflection"];

/// The assembly level attributes an assembly info file may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyAttribute {
    ClsCompliant,
    AssemblyVersion,
    AssemblyFileVersion,
    AssemblyInformationalVersion,
}

impl AssemblyAttribute {
    pub fn type_name(self) -> &'static str {
        match self {
            AssemblyAttribute::ClsCompliant => "System.CLSCompliantAttribute",
            AssemblyAttribute::AssemblyVersion => "System.Reflection.AssemblyVersionAttribute",
            AssemblyAttribute::AssemblyFileVersion => {
                "System.Reflection.AssemblyFileVersionAttribute"
            }
            AssemblyAttribute::AssemblyInformationalVersion => {
                "System.Reflection.AssemblyInformationalVersionAttribute"
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AssemblyInfoError {
    #[error("The {} declaration has already been added.", .0.type_name())]
    DuplicateAttribute(AssemblyAttribute),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Accumulates assembly level attributes and renders them with a [`CodeEmitter`].
///
/// Each attribute can be added at most once. Attributes are rendered in the order they were
/// added.
#[derive(Debug)]
pub struct AssemblyInfoBuilder {
    emitter: Box<dyn CodeEmitter>,
    unit: CompileUnit,
    added: Vec<AssemblyAttribute>,
}

impl AssemblyInfoBuilder {
    pub fn new(emitter: Box<dyn CodeEmitter>) -> Self {
        Self {
            emitter,
            unit: CompileUnit { imports: DEFAULT_IMPORTS.to_vec(), assembly_attributes: vec![] },
            added: vec![],
        }
    }

    pub fn for_language(language: EmitterLanguage) -> Self {
        Self::new(language.emitter())
    }

    /// Adds `System.CLSCompliantAttribute`.
    pub fn with_cls_compliant(
        &mut self,
        is_compliant: bool,
    ) -> Result<&mut Self, AssemblyInfoError> {
        self.add(AssemblyAttribute::ClsCompliant, AttributeArgument::Bool(is_compliant))
    }

    /// Adds `System.Reflection.AssemblyVersionAttribute`.
    pub fn with_assembly_version(
        &mut self,
        version: &Version,
    ) -> Result<&mut Self, AssemblyInfoError> {
        self.add(AssemblyAttribute::AssemblyVersion, AttributeArgument::String(version.to_string()))
    }

    /// Adds `System.Reflection.AssemblyFileVersionAttribute`.
    pub fn with_assembly_file_version(
        &mut self,
        version: &Version,
    ) -> Result<&mut Self, AssemblyInfoError> {
        self.add(
            AssemblyAttribute::AssemblyFileVersion,
            AttributeArgument::String(version.to_string()),
        )
    }

    /// Adds `System.Reflection.AssemblyInformationalVersionAttribute`, which holds free text.
    pub fn with_assembly_informational_version(
        &mut self,
        version: &str,
    ) -> Result<&mut Self, AssemblyInfoError> {
        self.add(
            AssemblyAttribute::AssemblyInformationalVersion,
            AttributeArgument::String(version.to_owned()),
        )
    }

    /// Renders the source text.
    pub fn build(&self) -> String {
        self.emitter.emit(&self.unit)
    }

    /// Renders the source text and overwrites `path` with it.
    pub fn save(&self, path: &Path) -> Result<(), AssemblyInfoError> {
        fs::write(path, self.build())?;
        Ok(())
    }

    fn add(
        &mut self,
        attribute: AssemblyAttribute,
        argument: AttributeArgument,
    ) -> Result<&mut Self, AssemblyInfoError> {
        if self.added.contains(&attribute) {
            return Err(AssemblyInfoError::DuplicateAttribute(attribute));
        }
        debug!("Adding {} with {argument:?}.", attribute.type_name());
        self.added.push(attribute);
        self.unit
            .assembly_attributes
            .push(AttributeDeclaration { type_name: attribute.type_name(), argument });
        Ok(self)
    }
}
