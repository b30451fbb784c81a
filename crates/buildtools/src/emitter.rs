//! Renders assembly level attribute declarations as source code.

#[cfg(test)]
#[path = "emitter_test.rs"]
mod emitter_test;

use std::str::FromStr;

use itertools::Itertools;
use strum_macros::Display;

const AUTO_GENERATED_BANNER: [&str; 8] = [
    "------------------------------------------------------------------------------",
    " <auto-generated>",
    "     This code was generated by a tool.",
    "",
    "     Changes to this file may cause incorrect behavior and will be lost if",
    "     the code is regenerated.",
    " </auto-generated>",
    "------------------------------------------------------------------------------",
];

/// The single constructor argument of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeArgument {
    Bool(bool),
    String(String),
}

/// An assembly level attribute with one constructor argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDeclaration {
    /// The fully qualified name of the attribute type.
    pub type_name: &'static str,
    pub argument: AttributeArgument,
}

/// The description of a source file holding namespace imports and assembly attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileUnit {
    pub imports: Vec<&'static str>,
    pub assembly_attributes: Vec<AttributeDeclaration>,
}

/// A code-emission provider for one programming language.
pub trait CodeEmitter: std::fmt::Debug {
    /// Renders the compile unit as source text.
    fn emit(&self, unit: &CompileUnit) -> String;
}

/// Emits C# source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpEmitter;

impl CSharpEmitter {
    fn literal(argument: &AttributeArgument) -> String {
        match argument {
            AttributeArgument::Bool(value) => value.to_string(),
            AttributeArgument::String(value) => {
                let mut literal = String::with_capacity(value.len() + 2);
                literal.push('"');
                for c in value.chars() {
                    match c {
                        '"' => literal.push_str("\\\""),
                        '\'' => literal.push_str("\\'"),
                        '\\' => literal.push_str("\\\\"),
                        '\0' => literal.push_str("\\0"),
                        '\n' => literal.push_str("\\n"),
                        '\r' => literal.push_str("\\r"),
                        '\t' => literal.push_str("\\t"),
                        c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                            literal.push_str(&format!("\\u{:04X}", u32::from(c)));
                        }
                        c => literal.push(c),
                    }
                }
                literal.push('"');
                literal
            }
        }
    }
}

impl CodeEmitter for CSharpEmitter {
    fn emit(&self, unit: &CompileUnit) -> String {
        let mut source = AUTO_GENERATED_BANNER.iter().map(|line| format!("//{line}")).join("\n");
        source.push_str("\n\n");
        for import in &unit.imports {
            source.push_str(&format!("using {import};\n"));
        }
        source.push('\n');
        for attribute in &unit.assembly_attributes {
            source.push_str(&format!(
                "[assembly: {}({})]\n",
                attribute.type_name,
                Self::literal(&attribute.argument)
            ));
        }
        source
    }
}

/// Emits Visual Basic source.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicEmitter;

impl VisualBasicEmitter {
    fn literal(argument: &AttributeArgument) -> String {
        match argument {
            AttributeArgument::Bool(value) => value.to_string(),
            AttributeArgument::String(value) => {
                let mut literal = String::with_capacity(value.len() + 2);
                literal.push('"');
                for c in value.chars() {
                    match c {
                        '"' => literal.push_str("\"\""),
                        // VB string literals can't hold control characters.
                        c if c.is_control() => {
                            literal.push_str(&format!(
                                "\"&Global.Microsoft.VisualBasic.ChrW({})&\"",
                                u32::from(c)
                            ));
                        }
                        c => literal.push(c),
                    }
                }
                literal.push('"');
                literal
            }
        }
    }
}

impl CodeEmitter for VisualBasicEmitter {
    fn emit(&self, unit: &CompileUnit) -> String {
        let mut source = AUTO_GENERATED_BANNER.iter().map(|line| format!("'{line}")).join("\n");
        source.push_str("\n\n");
        source.push_str("Option Strict Off\nOption Explicit On\n\n");
        for import in &unit.imports {
            source.push_str(&format!("Imports {import}\n"));
        }
        source.push('\n');
        for attribute in &unit.assembly_attributes {
            source.push_str(&format!(
                "<Assembly: {}({})>\n",
                attribute.type_name,
                Self::literal(&attribute.argument)
            ));
        }
        source
    }
}

/// The languages assembly info can be emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EmitterLanguage {
    CSharp,
    VisualBasic,
}

impl EmitterLanguage {
    pub fn emitter(self) -> Box<dyn CodeEmitter> {
        match self {
            EmitterLanguage::CSharp => Box::new(CSharpEmitter),
            EmitterLanguage::VisualBasic => Box::new(VisualBasicEmitter),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("There is no code emitter for the language '{language}'.")]
pub struct UnsupportedLanguageError {
    pub language: String,
}

impl FromStr for EmitterLanguage {
    type Err = UnsupportedLanguageError;

    fn from_str(language: &str) -> Result<Self, Self::Err> {
        match language.trim().to_ascii_lowercase().as_str() {
            "c#" | "cs" | "csharp" => Ok(EmitterLanguage::CSharp),
            "vb" | "vbs" | "visualbasic" | "vbscript" => Ok(EmitterLanguage::VisualBasic),
            _ => Err(UnsupportedLanguageError { language: language.to_owned() }),
        }
    }
}
