use std::collections::HashMap;

use crate::program::ast::DeclarationKind;
use crate::runner::ds::error::ResolveError;
use crate::runner::ds::misc::ProgramPoint;
use crate::runner::ds::value::JsValue;

/// One name bound in one scope.
#[derive(Debug, Clone)]
pub struct Binding {
    pub kind: DeclarationKind,
    /// `None` until a value is stored.
    pub value: Option<JsValue>,
    /// Point at which a block-scoped declaration executed.
    pub declared_at: Option<ProgramPoint>,
}
impl Binding {
    fn new(kind: DeclarationKind) -> Self {
        Binding {
            kind,
            value: None,
            declared_at: None,
        }
    }

    /// Whether a read at `point` falls in the block-scoped dead zone.
    pub fn is_unreachable_at(&self, point: ProgramPoint) -> bool {
        if !self.kind.is_block_scoped() {
            return false;
        }
        match self.declared_at {
            None => true,
            Some(declared_at) => point < declared_at,
        }
    }
}

pub trait EnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool;
    fn get_binding(&self, name: &str) -> Option<&Binding>;
    /// Creates an uninitialized binding. Returns `false` when a `var` binding
    /// of that name already exists and was reused.
    fn create_mutable_binding(
        &mut self,
        name: String,
        kind: DeclarationKind,
    ) -> Result<bool, ResolveError>;
    fn create_immutable_binding(&mut self, name: String) -> Result<(), ResolveError>;
    fn initialize_binding(
        &mut self,
        name: &str,
        value: JsValue,
        point: ProgramPoint,
    ) -> Result<(), ResolveError>;
    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), ResolveError>;
    fn get_binding_value(&self, name: &str, point: ProgramPoint) -> Result<JsValue, ResolveError>;
    fn binding_names(&self) -> Vec<String>;
}

pub enum EnvironmentRecordType {
    Declarative(DeclarativeEnvironmentRecord),
    Function(FunctionEnvironmentRecord),
    Global(GlobalEnvironmentRecord),
}
impl EnvironmentRecordType {
    pub fn as_env_record(&self) -> &dyn EnvironmentRecord {
        match self {
            EnvironmentRecordType::Declarative(d) => d,
            EnvironmentRecordType::Function(d) => d,
            EnvironmentRecordType::Global(d) => d,
        }
    }

    pub fn as_env_record_mut(&mut self) -> &mut dyn EnvironmentRecord {
        match self {
            EnvironmentRecordType::Declarative(d) => d,
            EnvironmentRecordType::Function(d) => d,
            EnvironmentRecordType::Global(d) => d,
        }
    }
}

pub struct DeclarativeEnvironmentRecord {
    bindings: HashMap<String, Binding>,
}
impl DeclarativeEnvironmentRecord {
    pub fn new() -> Self {
        DeclarativeEnvironmentRecord {
            bindings: HashMap::new(),
        }
    }
}
impl Default for DeclarativeEnvironmentRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl EnvironmentRecord for DeclarativeEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    fn create_mutable_binding(
        &mut self,
        name: String,
        kind: DeclarationKind,
    ) -> Result<bool, ResolveError> {
        match self.bindings.get(&name) {
            Some(existing) => {
                if kind.is_block_scoped() || existing.kind.is_block_scoped() {
                    Err(ResolveError::DuplicateDeclaration(name))
                } else {
                    Ok(false)
                }
            }
            None => {
                self.bindings.insert(name, Binding::new(kind));
                Ok(true)
            }
        }
    }

    fn create_immutable_binding(&mut self, name: String) -> Result<(), ResolveError> {
        self.create_mutable_binding(name, DeclarationKind::Const)?;
        Ok(())
    }

    fn initialize_binding(
        &mut self,
        name: &str,
        value: JsValue,
        point: ProgramPoint,
    ) -> Result<(), ResolveError> {
        match self.bindings.get_mut(name) {
            Some(binding) => {
                binding.value = Some(value);
                if binding.kind.is_block_scoped() {
                    binding.declared_at = Some(point);
                }
                Ok(())
            }
            None => Err(ResolveError::UnboundIdentifier(name.to_string())),
        }
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), ResolveError> {
        match self.bindings.get_mut(name) {
            Some(binding) => {
                if binding.kind == DeclarationKind::Const {
                    Err(ResolveError::ImmutableAssignment(name.to_string()))
                } else {
                    binding.value = Some(value);
                    Ok(())
                }
            }
            None => Err(ResolveError::UnboundIdentifier(name.to_string())),
        }
    }

    fn get_binding_value(&self, name: &str, point: ProgramPoint) -> Result<JsValue, ResolveError> {
        match self.bindings.get(name) {
            None => Err(ResolveError::UnboundIdentifier(name.to_string())),
            Some(binding) => {
                if binding.is_unreachable_at(point) {
                    Err(ResolveError::UninitializedAccess(name.to_string()))
                } else {
                    Ok(binding.value.clone().unwrap_or(JsValue::Undefined))
                }
            }
        }
    }

    fn binding_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Scope of one function call. Hoisted `var` bindings land here.
pub struct FunctionEnvironmentRecord {
    base_env: DeclarativeEnvironmentRecord,
}
impl FunctionEnvironmentRecord {
    pub fn new() -> Self {
        FunctionEnvironmentRecord {
            base_env: DeclarativeEnvironmentRecord::new(),
        }
    }
}
impl Default for FunctionEnvironmentRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl EnvironmentRecord for FunctionEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        self.base_env.has_binding(name)
    }

    fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.base_env.get_binding(name)
    }

    fn create_mutable_binding(
        &mut self,
        name: String,
        kind: DeclarationKind,
    ) -> Result<bool, ResolveError> {
        self.base_env.create_mutable_binding(name, kind)
    }

    fn create_immutable_binding(&mut self, name: String) -> Result<(), ResolveError> {
        self.base_env.create_immutable_binding(name)
    }

    fn initialize_binding(
        &mut self,
        name: &str,
        value: JsValue,
        point: ProgramPoint,
    ) -> Result<(), ResolveError> {
        self.base_env.initialize_binding(name, value, point)
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), ResolveError> {
        self.base_env.set_mutable_binding(name, value)
    }

    fn get_binding_value(&self, name: &str, point: ProgramPoint) -> Result<JsValue, ResolveError> {
        self.base_env.get_binding_value(name, point)
    }

    fn binding_names(&self) -> Vec<String> {
        self.base_env.binding_names()
    }
}

/// Outermost scope. Outlives a single program when an `Interpreter` runs
/// several, so later programs are checked against what earlier ones bound.
pub struct GlobalEnvironmentRecord {
    declarative_record: DeclarativeEnvironmentRecord,
}
impl GlobalEnvironmentRecord {
    pub fn new() -> Self {
        GlobalEnvironmentRecord {
            declarative_record: DeclarativeEnvironmentRecord::new(),
        }
    }

    pub fn has_var_declaration(&self, name: &str) -> bool {
        self.declarative_record
            .get_binding(name)
            .map_or(false, |b| !b.kind.is_block_scoped())
    }

    pub fn has_lexical_declaration(&self, name: &str) -> bool {
        self.declarative_record
            .get_binding(name)
            .map_or(false, |b| b.kind.is_block_scoped())
    }
}
impl Default for GlobalEnvironmentRecord {
    fn default() -> Self {
        Self::new()
    }
}
impl EnvironmentRecord for GlobalEnvironmentRecord {
    fn has_binding(&self, name: &str) -> bool {
        self.declarative_record.has_binding(name)
    }

    fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.declarative_record.get_binding(name)
    }

    fn create_mutable_binding(
        &mut self,
        name: String,
        kind: DeclarationKind,
    ) -> Result<bool, ResolveError> {
        self.declarative_record.create_mutable_binding(name, kind)
    }

    fn create_immutable_binding(&mut self, name: String) -> Result<(), ResolveError> {
        self.declarative_record.create_immutable_binding(name)
    }

    fn initialize_binding(
        &mut self,
        name: &str,
        value: JsValue,
        point: ProgramPoint,
    ) -> Result<(), ResolveError> {
        self.declarative_record.initialize_binding(name, value, point)
    }

    fn set_mutable_binding(&mut self, name: &str, value: JsValue) -> Result<(), ResolveError> {
        self.declarative_record.set_mutable_binding(name, value)
    }

    fn get_binding_value(&self, name: &str, point: ProgramPoint) -> Result<JsValue, ResolveError> {
        self.declarative_record.get_binding_value(name, point)
    }

    fn binding_names(&self) -> Vec<String> {
        self.declarative_record.binding_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_redeclaration_reuses_binding() {
        let mut record = DeclarativeEnvironmentRecord::new();
        assert!(record
            .create_mutable_binding("x".to_string(), DeclarationKind::Var)
            .unwrap());
        assert!(!record
            .create_mutable_binding("x".to_string(), DeclarationKind::Var)
            .unwrap());
    }

    #[test]
    fn let_redeclaration_is_rejected() {
        let mut record = DeclarativeEnvironmentRecord::new();
        record
            .create_mutable_binding("y".to_string(), DeclarationKind::Let)
            .unwrap();
        assert_eq!(
            record.create_mutable_binding("y".to_string(), DeclarationKind::Let),
            Err(ResolveError::DuplicateDeclaration("y".to_string()))
        );
        assert_eq!(
            record.create_mutable_binding("y".to_string(), DeclarationKind::Var),
            Err(ResolveError::DuplicateDeclaration("y".to_string()))
        );
    }

    #[test]
    fn uninitialized_var_reads_as_undefined() {
        let mut record = DeclarativeEnvironmentRecord::new();
        record
            .create_mutable_binding("x".to_string(), DeclarationKind::Var)
            .unwrap();
        assert_eq!(
            record.get_binding_value("x", ProgramPoint(0)),
            Ok(JsValue::Undefined)
        );
    }

    #[test]
    fn let_is_unreachable_before_declaration_point() {
        let mut record = DeclarativeEnvironmentRecord::new();
        record
            .create_mutable_binding("x".to_string(), DeclarationKind::Let)
            .unwrap();
        assert_eq!(
            record.get_binding_value("x", ProgramPoint(1)),
            Err(ResolveError::UninitializedAccess("x".to_string()))
        );
        record
            .initialize_binding("x", JsValue::Boolean(true), ProgramPoint(3))
            .unwrap();
        assert_eq!(
            record.get_binding_value("x", ProgramPoint(2)),
            Err(ResolveError::UninitializedAccess("x".to_string()))
        );
        assert_eq!(
            record.get_binding_value("x", ProgramPoint(3)),
            Ok(JsValue::Boolean(true))
        );
    }

    #[test]
    fn const_rejects_assignment() {
        let mut record = DeclarativeEnvironmentRecord::new();
        record.create_immutable_binding("c".to_string()).unwrap();
        record
            .initialize_binding("c", JsValue::Null, ProgramPoint(0))
            .unwrap();
        assert_eq!(
            record.set_mutable_binding("c", JsValue::Boolean(false)),
            Err(ResolveError::ImmutableAssignment("c".to_string()))
        );
    }

    #[test]
    fn global_record_tells_var_from_lexical() {
        let mut record = GlobalEnvironmentRecord::new();
        record
            .create_mutable_binding("x".to_string(), DeclarationKind::Var)
            .unwrap();
        record
            .create_mutable_binding("x".to_string(), DeclarationKind::Var)
            .unwrap();
        record
            .create_mutable_binding("y".to_string(), DeclarationKind::Let)
            .unwrap();
        assert_eq!(record.binding_names(), vec!["x".to_string(), "y".to_string()]);
        assert!(record.has_var_declaration("x"));
        assert!(!record.has_var_declaration("y"));
        assert!(record.has_lexical_declaration("y"));
        assert!(!record.has_lexical_declaration("x"));
        assert!(!record.has_var_declaration("z"));
    }
}
