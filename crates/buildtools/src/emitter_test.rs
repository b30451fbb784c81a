use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{
    AttributeArgument,
    AttributeDeclaration,
    CSharpEmitter,
    CodeEmitter,
    CompileUnit,
    EmitterLanguage,
    UnsupportedLanguageError,
    VisualBasicEmitter,
};

const CSHARP_BANNER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a tool.
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

const VISUAL_BASIC_BANNER: &str = "\
'------------------------------------------------------------------------------
' <auto-generated>
'     This code was generated by a tool.
'
'     Changes to this file may cause incorrect behavior and will be lost if
'     the code is regenerated.
' </auto-generated>
'------------------------------------------------------------------------------
";

fn unit_with(argument: AttributeArgument) -> CompileUnit {
    CompileUnit {
        imports: vec!["System", "System.Reflection"],
        assembly_attributes: vec![
            AttributeDeclaration {
                type_name: "System.CLSCompliantAttribute",
                argument: AttributeArgument::Bool(true),
            },
            AttributeDeclaration {
                type_name: "System.Reflection.AssemblyInformationalVersionAttribute",
                argument,
            },
        ],
    }
}

#[test]
fn csharp_compile_unit() {
    let unit = unit_with(AttributeArgument::String("4.3.2.1 code-named \"Maverick\"".to_owned()));
    let expected = format!(
        "{CSHARP_BANNER}\nusing System;\nusing System.Reflection;\n\n[assembly: \
         System.CLSCompliantAttribute(true)]\n[assembly: \
         System.Reflection.AssemblyInformationalVersionAttribute(\"4.3.2.1 code-named \
         \\\"Maverick\\\"\")]\n"
    );
    assert_eq!(CSharpEmitter.emit(&unit), expected);
}

#[test]
fn visual_basic_compile_unit() {
    let unit = unit_with(AttributeArgument::String("4.3.2.1 code-named \"Maverick\"".to_owned()));
    let expected = format!(
        "{VISUAL_BASIC_BANNER}\nOption Strict Off\nOption Explicit On\n\nImports System\nImports \
         System.Reflection\n\n<Assembly: System.CLSCompliantAttribute(true)>\n<Assembly: \
         System.Reflection.AssemblyInformationalVersionAttribute(\"4.3.2.1 code-named \
         \"\"Maverick\"\"\")>\n"
    );
    assert_eq!(VisualBasicEmitter.emit(&unit), expected);
}

#[test]
fn empty_compile_unit_has_banner_only() {
    let unit = CompileUnit::default();
    assert_eq!(CSharpEmitter.emit(&unit), format!("{CSHARP_BANNER}\n\n"));
}

#[test_case("plain", "\"plain\""; "plain text")]
#[test_case("a\\b", "\"a\\\\b\""; "backslash")]
#[test_case("say \"hi\"", "\"say \\\"hi\\\"\""; "double quotes")]
#[test_case("", "\"\""; "empty")]
fn csharp_string_escapes(text: &str, expected: &str) {
    assert_eq!(CSharpEmitter::literal(&AttributeArgument::String(text.to_owned())), expected);
}

#[test]
fn csharp_control_character_escapes() {
    let argument = AttributeArgument::String("tab\there\nnul\0bell\u{7}sep\u{2028}'".to_owned());
    assert_eq!(
        CSharpEmitter::literal(&argument),
        "\"tab\\there\\nnul\\0bell\\u0007sep\\u2028\\'\""
    );
}

#[test]
fn visual_basic_control_character_escapes() {
    let argument = AttributeArgument::String("line\nbreak".to_owned());
    assert_eq!(
        VisualBasicEmitter::literal(&argument),
        "\"line\"&Global.Microsoft.VisualBasic.ChrW(10)&\"break\""
    );
}

#[test]
fn boolean_literals_are_lowercase() {
    assert_eq!(CSharpEmitter::literal(&AttributeArgument::Bool(false)), "false");
    assert_eq!(VisualBasicEmitter::literal(&AttributeArgument::Bool(true)), "true");
}

#[test_case("C#", EmitterLanguage::CSharp; "c sharp symbol")]
#[test_case("cs", EmitterLanguage::CSharp; "cs extension")]
#[test_case("CSharp", EmitterLanguage::CSharp; "c sharp name")]
#[test_case("vb", EmitterLanguage::VisualBasic; "vb extension")]
#[test_case("VBS", EmitterLanguage::VisualBasic; "vbs extension")]
#[test_case("VisualBasic", EmitterLanguage::VisualBasic; "visual basic name")]
#[test_case("vbscript", EmitterLanguage::VisualBasic; "vbscript name")]
fn parse_language(name: &str, expected: EmitterLanguage) {
    assert_eq!(name.parse::<EmitterLanguage>().unwrap(), expected);
}

#[test]
fn unsupported_language() {
    let error = "fortran".parse::<EmitterLanguage>().unwrap_err();
    assert_matches!(&error, UnsupportedLanguageError { language } if language == "fortran");
    assert_eq!(error.to_string(), "There is no code emitter for the language 'fortran'.");
}

#[test]
fn language_selects_emitter() {
    let unit = CompileUnit::default();
    assert_eq!(EmitterLanguage::CSharp.emitter().emit(&unit), CSharpEmitter.emit(&unit));
    assert_eq!(
        EmitterLanguage::VisualBasic.emitter().emit(&unit),
        VisualBasicEmitter.emit(&unit)
    );
}
