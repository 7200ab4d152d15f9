// crates/solbuild-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings for future localization support.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The solbuild CLI stores user-facing strings in a small translation
//! catalog to enforce consistent messaging and to prepare for future
//! locales. All runtime output should be routed through the
//! [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Catalan.
    Ca,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ca => "ca",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "ca" => Some(Self::Ca),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
///
/// # Invariants
/// - Ordering is stable for deterministic presentation.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Ca];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries loaded into the localized message bundle.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "solbuild {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    (
        "input.read_too_large",
        "Refusing to read {kind} at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("config.show.render_failed", "Failed to render config as {format}: {error}"),
    ("config.init.exists", "Refusing to overwrite {path}; pass --force to replace it."),
    ("config.init.write_failed", "Failed to write config to {path}: {error}"),
    ("config.init.ok", "Example config written to {path}"),
    ("config.schema.render_failed", "Failed to render config schema: {error}"),
    ("config.docs.render_failed", "Failed to render config docs: {error}"),
    ("artifact.kind.artifact", "contract artifact"),
    ("artifact.kind.bytecode", "bytecode input"),
    ("artifact.read_failed", "Failed to read {kind} at {path}: {error}"),
    ("artifact.parse_failed", "Failed to parse contract artifact at {path}: {error}"),
    ("artifact.decode_failed", "Failed to decode bytecode at {path}: {error}"),
    ("artifact.utf8_invalid", "Input at {path} must be utf-8."),
    ("artifact.inspect.header", "Artifact report for {path}:"),
    ("artifact.inspect.name", "Contract: {name}"),
    ("artifact.inspect.name.unknown", "unknown"),
    (
        "artifact.inspect.creation",
        "Creation code: {bytes} bytes (trailer: {trailer}, stripped: {stripped} bytes)",
    ),
    (
        "artifact.inspect.runtime",
        "Runtime code: {bytes} bytes (trailer: {trailer}, stripped: {stripped} bytes)",
    ),
    (
        "artifact.inspect.bytecode",
        "Bytecode: {bytes} bytes (trailer: {trailer}, stripped: {stripped} bytes)",
    ),
    ("artifact.inspect.validation.ok", "Validation: ok"),
    ("artifact.inspect.validation.failed", "Validation: {error}"),
    ("artifact.trailer.swarm", "swarm"),
    ("artifact.trailer.legacy", "legacy"),
    ("artifact.trailer.none", "none"),
    ("artifact.strip.write_failed", "Failed to write stripped output to {path}: {error}"),
    ("artifact.strip.ok", "Stripped output written to {path} ({removed} bytes removed)"),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Note: non-English output is machine-translated and may be inaccurate.",
    ),
];

/// Static Catalan catalog entries loaded into the localized message bundle.
const CATALOG_CA: &[(&str, &str)] = &[
    ("main.version", "solbuild {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "sortida"),
    ("output.write_failed", "No s'ha pogut escriure a {stream}: {error}"),
    (
        "input.read_too_large",
        "Es rebutja llegir {kind} a {path} perquè fa {size} bytes (límit {limit}).",
    ),
    ("config.load_failed", "No s'ha pogut carregar la configuració: {error}"),
    ("config.validate.ok", "Configuració vàlida."),
    (
        "config.show.render_failed",
        "No s'ha pogut renderitzar la configuració com a {format}: {error}",
    ),
    (
        "config.init.exists",
        "Es rebutja sobreescriure {path}; utilitzeu --force per substituir-lo.",
    ),
    ("config.init.write_failed", "No s'ha pogut escriure la configuració a {path}: {error}"),
    ("config.init.ok", "Configuració d'exemple escrita a {path}"),
    (
        "config.schema.render_failed",
        "No s'ha pogut renderitzar l'esquema de configuració: {error}",
    ),
    (
        "config.docs.render_failed",
        "No s'ha pogut renderitzar la documentació de configuració: {error}",
    ),
    ("artifact.kind.artifact", "artefacte de contracte"),
    ("artifact.kind.bytecode", "entrada de bytecode"),
    ("artifact.read_failed", "No s'ha pogut llegir {kind} a {path}: {error}"),
    (
        "artifact.parse_failed",
        "No s'ha pogut analitzar l'artefacte de contracte a {path}: {error}",
    ),
    ("artifact.decode_failed", "No s'ha pogut descodificar el bytecode a {path}: {error}"),
    ("artifact.utf8_invalid", "L'entrada a {path} ha de ser utf-8."),
    ("artifact.inspect.header", "Informe de l'artefacte per a {path}:"),
    ("artifact.inspect.name", "Contracte: {name}"),
    ("artifact.inspect.name.unknown", "desconegut"),
    (
        "artifact.inspect.creation",
        "Codi de creació: {bytes} bytes (trailer: {trailer}, retallat: {stripped} bytes)",
    ),
    (
        "artifact.inspect.runtime",
        "Codi d'execució: {bytes} bytes (trailer: {trailer}, retallat: {stripped} bytes)",
    ),
    (
        "artifact.inspect.bytecode",
        "Bytecode: {bytes} bytes (trailer: {trailer}, retallat: {stripped} bytes)",
    ),
    ("artifact.inspect.validation.ok", "Validació: correcta"),
    ("artifact.inspect.validation.failed", "Validació: {error}"),
    ("artifact.trailer.swarm", "swarm"),
    ("artifact.trailer.legacy", "llegat"),
    ("artifact.trailer.none", "cap"),
    (
        "artifact.strip.write_failed",
        "No s'ha pogut escriure la sortida retallada a {path}: {error}",
    ),
    ("artifact.strip.ok", "Sortida retallada escrita a {path} ({removed} bytes eliminats)"),
    ("i18n.lang.invalid_env", "Valor no vàlid per a {env}: {value}. S'esperava 'en' o 'ca'."),
    (
        "i18n.disclaimer.machine_translated",
        "Nota: la sortida que no és en anglès està traduïda automàticament i pot ser inexacta.",
    ),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_CA_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Ca => CATALOG_CA_MAP.get_or_init(|| CATALOG_CA.iter().copied().collect()),
    }
}

/// Returns the raw catalog entries for the requested locale.
#[must_use]
pub const fn catalog_entries(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Ca => CATALOG_CA,
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let locale = current_locale();
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
