//! Message-template catalog for the built-in rules.
//!
//! The catalog is read-only, process-wide data: a fixed mapping from message
//! id to template string. Templates use `{{placeholder}}` markers filled from
//! a diagnostic's data mapping at report time.

/// Message id for a non-exported named helper function.
pub const HELPER_FUNCTION: &str = "helperFunction";
/// Message id for an if/else statement.
pub const IF_STATEMENT: &str = "ifStatement";
/// Message id for any loop form.
pub const LOOP: &str = "loop";
/// Message id for a conditional (ternary) expression.
pub const TERNARY: &str = "ternary";
/// Message id for a switch statement.
pub const SWITCH: &str = "switch";
/// Message id for an array-transformation method call.
pub const ARRAY_METHOD: &str = "arrayMethod";
/// Message id for a local static import.
pub const NO_LOCAL_IMPORT: &str = "noLocalImport";
/// Message id for a local `require(..)` call.
pub const NO_LOCAL_REQUIRE: &str = "noLocalRequire";
/// Message id for a local dynamic `import(..)` expression.
pub const NO_LOCAL_DYNAMIC_IMPORT: &str = "noLocalDynamicImport";

const CATALOG: &[(&str, &str)] = &[
    (
        HELPER_FUNCTION,
        "FFI file defines helper function '{{name}}'; keep FFI files as thin stubs and move logic into the host language",
    ),
    (
        IF_STATEMENT,
        "FFI file contains an if/else statement; move branching logic into the host language",
    ),
    (
        LOOP,
        "FFI file contains a loop; move iteration logic into the host language",
    ),
    (
        TERNARY,
        "FFI file contains a ternary expression; move branching logic into the host language",
    ),
    (
        SWITCH,
        "FFI file contains a switch statement; move branching logic into the host language",
    ),
    (
        ARRAY_METHOD,
        "FFI file calls array method '{{method}}'; move data transformation into the host language",
    ),
    (
        NO_LOCAL_IMPORT,
        "FFI file imports local module '{{source}}'; FFI files may only import external packages",
    ),
    (
        NO_LOCAL_REQUIRE,
        "FFI file requires local module '{{source}}'; FFI files may only require external packages",
    ),
    (
        NO_LOCAL_DYNAMIC_IMPORT,
        "FFI file dynamically imports local module '{{source}}'; FFI files may only import external packages",
    ),
];

/// Looks up the template for a message id.
#[must_use]
pub fn template(message_id: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(id, _)| *id == message_id)
        .map(|(_, tpl)| *tpl)
}

/// Renders the template for `message_id`, filling `{{placeholder}}` markers
/// from `data`.
///
/// Unknown message ids fall back to the id itself so reporting stays total.
#[must_use]
pub fn render(message_id: &str, data: &[(&str, &str)]) -> String {
    let Some(tpl) = template(message_id) else {
        tracing::warn!("unknown message id: {message_id}");
        return message_id.to_owned();
    };

    let mut message = tpl.to_owned();
    for (key, value) in data {
        message = message.replace(&format!("{{{{{key}}}}}"), value);
    }
    message
}
