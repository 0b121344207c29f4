/// Dispatch core.
///
/// Holds the module registry, the arity model and the lookup that turns
/// `module.function(args)` call sites into native implementations.
pub mod core;

/// The MATH module: constants and numeric functions.
pub mod math;
/// The RANDOM module: seedable random numbers, choices and shuffles.
pub mod random;
/// The STDIO module: console input and basic file operations.
pub mod stdio;
/// The OS module: working directory, listings and path manipulation.
pub mod os;
/// The INFO module: host platform and interpreter information.
pub mod info;
/// The DATE module: wall-clock time rendering.
pub mod date;
/// The REGEX module: searching, splitting and substitution.
pub mod regex;
