/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding the
/// variable store and the output buffer, and the evaluation entry point.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements checked integer arithmetic, including floor division.
pub mod binary;

/// Variable store.
///
/// Defines the ordered name-to-value mapping the evaluator writes to and
/// returns as the final bindings.
pub mod bindings;
