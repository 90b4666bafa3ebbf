//! Immutable function registry built once per program.

use meaning_ir::{FunctionDefinition, Program};
use std::collections::HashMap;
use std::rc::Rc;

/// Name-to-definition mapping shared by every call during a run.
///
/// Built once from `Program::functions` at evaluator construction.
/// Definitions are reference-counted so calls reference them rather than
/// copying bodies. Duplicate names keep the last definition.
#[derive(Debug, Clone)]
pub struct FunctionTable {
    functions: HashMap<String, Rc<FunctionDefinition>>,
}

impl FunctionTable {
    /// Build the table from a program's ordered function list
    pub fn from_program(program: Program) -> Self {
        let mut functions = HashMap::with_capacity(program.functions.len());
        for function in program.functions {
            functions.insert(function.name.clone(), Rc::new(function));
        }
        Self { functions }
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<Rc<FunctionDefinition>> {
        self.functions.get(name).cloned()
    }

    /// Check whether a function is registered
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meaning_ir::{Node, ENTRY_POINT};

    fn function(name: &str, return_type: &str) -> FunctionDefinition {
        FunctionDefinition::new(name, vec![], return_type, Node::block(vec![]))
    }

    #[test]
    fn test_lookup() {
        let program = Program::new(vec![function(ENTRY_POINT, "unit"), function("helper", "int")]);
        let table = FunctionTable::from_program(program);

        assert_eq!(table.len(), 2);
        assert!(table.contains(ENTRY_POINT));
        assert_eq!(table.get("helper").unwrap().name, "helper");
        assert!(table.get("ghost").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_last() {
        let program = Program::new(vec![function("twice", "int"), function("twice", "bool")]);
        let table = FunctionTable::from_program(program);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("twice").unwrap().return_type, "bool");
    }
}
