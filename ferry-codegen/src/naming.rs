//! TypeScript identifier rules.

/// Words that cannot be used as a binding name in TypeScript modules.
pub const TS_RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Strict-mode and TypeScript reserved words
    "any",
    "as",
    "await",
    "boolean",
    "declare",
    "implements",
    "interface",
    "never",
    "number",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "string",
    "symbol",
    "type",
    "undefined",
    "unknown",
];

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Whether `name` is a plain ASCII TypeScript identifier that is not reserved.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !is_reserved(name)
}
