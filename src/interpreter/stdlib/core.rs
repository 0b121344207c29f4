use crate::{
    ast::Loc,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        stdlib::{date, info, math, os, random, regex, stdio},
        value::core::Value,
    },
};

/// Type alias for native library function handlers.
///
/// A handler receives the execution context (for the RNG and the I/O
/// endpoints), the already-evaluated argument values and the call-site
/// location. It validates its own argument types and raises its own domain
/// errors.
pub(crate) type LibraryFn = fn(&mut Context, &[Value], Loc) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a library function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
pub(crate) enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// One entry of a module's function table.
pub(crate) struct LibraryDef {
    pub(crate) name:  &'static str,
    pub(crate) arity: Arity,
    pub(crate) func:  LibraryFn,
}

/// Defines a module's function table.
///
/// Each entry provides a string name, an arity specification and the
/// function implementing it. The macro produces the module's `FUNCTIONS`
/// table used by the dispatcher.
macro_rules! library_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) static FUNCTIONS: &[$crate::interpreter::stdlib::core::LibraryDef] = &[
            $(
                $crate::interpreter::stdlib::core::LibraryDef { name:  $name,
                                                                arity: $arity,
                                                                func:  $func, },
            )*
        ];
    };
}
pub(crate) use library_functions;

/// The fixed, closed set of standard-library modules, keyed by their
/// ALL-CAPS import names.
static MODULES: &[(&str, &[LibraryDef])] = &[("MATH", math::FUNCTIONS),
                                             ("RANDOM", random::FUNCTIONS),
                                             ("STDIO", stdio::FUNCTIONS),
                                             ("OS", os::FUNCTIONS),
                                             ("INFO", info::FUNCTIONS),
                                             ("DATE", date::FUNCTIONS),
                                             ("REGEX", regex::FUNCTIONS)];

/// Resolves and executes a `module.function(args)` call.
///
/// Module names are matched case-insensitively against their ALL-CAPS
/// import names, so `math.pi` works after `#include <MATH>;`. The module
/// must have been included; `#include` itself has no other effect than
/// turning the unknown-module failure below into an unknown-function one.
/// Arity is checked from the table entry; argument types are the
/// implementation's own business.
pub(crate) fn dispatch(context: &mut Context,
                       module: &str,
                       function: &str,
                       args: &[Value],
                       loc: Loc)
                       -> EvalResult<Value> {
    let module_key = module.to_ascii_uppercase();

    if !context.includes.contains(&module_key) {
        return Err(RuntimeError::UnknownLibraryCall { details: format!("module '{module_key}' was not included"),
                                                      loc });
    }

    let Some((_, table)) = MODULES.iter().find(|(name, _)| *name == module_key) else {
        return Err(RuntimeError::UnknownLibraryCall { details: format!("no library named '{module_key}' exists"),
                                                      loc });
    };
    let Some(def) = table.iter().find(|def| def.name == function) else {
        return Err(RuntimeError::UnknownLibraryCall { details: format!("'{module_key}' has no function '{function}'"),
                                                      loc });
    };

    if !def.arity.check(args.len()) {
        return Err(RuntimeError::CallError { details: format!("'{module_key}.{function}' does not accept {} arguments",
                                                              args.len()),
                                             loc });
    }

    (def.func)(context, args, loc)
}
