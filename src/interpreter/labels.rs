use std::collections::HashMap;

use crate::{ast::Stmt, error::RuntimeError};

/// An index of label positions within one statement sequence.
///
/// Each executable sequence (the top-level program, every function body and
/// every block) gets its own table, built once before the sequence runs.
/// Only labels written directly in the sequence are indexed; labels inside
/// nested blocks belong to the nested sequence's own table. This is what
/// scopes `goto` resolution to the nearest enclosing sequence that contains
/// the target.
#[derive(Debug, Default)]
pub struct LabelTable {
    positions: HashMap<String, usize>,
}

impl LabelTable {
    /// Builds the table for a statement sequence.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DuplicateLabel`] if the same label name is
    /// defined twice within the sequence.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{labels::LabelTable, lexer::tokenize, parser::core::parse_program};
    ///
    /// let tokens = tokenize("int x 0;\nretry:\nx += 1;").unwrap();
    /// let program = parse_program(&tokens).unwrap();
    /// let table = LabelTable::build(&program).unwrap();
    ///
    /// assert_eq!(table.position("retry"), Some(1));
    /// assert_eq!(table.position("missing"), None);
    /// ```
    pub fn build(statements: &[Stmt]) -> Result<Self, RuntimeError> {
        let mut positions = HashMap::new();

        for (index, statement) in statements.iter().enumerate() {
            if let Stmt::Label { name, loc } = statement
               && positions.insert(name.clone(), index).is_some()
            {
                return Err(RuntimeError::DuplicateLabel { label: name.clone(),
                                                          loc:   *loc, });
            }
        }

        Ok(Self { positions })
    }

    /// Looks up the statement index a label marks.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }
}
