use crate::il::MethodBody;
use crate::metadata::{Token, Visibility};

/// Name constructors carry in metadata.
pub const CTOR_NAME: &str = ".ctor";

/// A symbolic reference to a method, as carried by call and construction
/// operands.
///
/// A reference names its target (method name plus the full name of the
/// declaring type) and optionally carries the method-table token of a
/// definition within the assembly under analysis. References into other
/// assemblies stay unresolved; the scanner treats them like bodiless
/// methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef {
    name: String,
    declaring_type: String,
    target: Option<Token>,
}

impl MethodRef {
    /// Creates an unresolved reference (external target).
    #[must_use]
    pub fn new(name: impl Into<String>, declaring_type: impl Into<String>) -> Self {
        MethodRef {
            name: name.into(),
            declaring_type: declaring_type.into(),
            target: None,
        }
    }

    /// Creates a reference resolved to a method-table token.
    #[must_use]
    pub fn resolved(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        target: Token,
    ) -> Self {
        MethodRef {
            name: name.into(),
            declaring_type: declaring_type.into(),
            target: Some(target),
        }
    }

    /// The referenced method's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full name of the type declaring the referenced method.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The method-table token of the referenced definition, if the target
    /// lives in the assembly under analysis.
    #[must_use]
    pub fn target(&self) -> Option<Token> {
        self.target
    }

    /// Whether the reference names a constructor.
    #[must_use]
    pub fn is_ctor(&self) -> bool {
        self.name == CTOR_NAME
    }
}

/// A method definition: a row of the assembly's method table.
///
/// Constructors and ordinary methods share this representation; accessor
/// methods additionally carry the `is_accessor` marker so that member
/// enumeration can leave their analysis to the owning property or event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    token: Token,
    name: String,
    namespace: String,
    declaring_type: String,
    visibility: Visibility,
    is_accessor: bool,
    params: Vec<String>,
    body: Option<MethodBody>,
}

impl MethodDef {
    /// Creates a method definition.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        token: Token,
        name: impl Into<String>,
        namespace: impl Into<String>,
        declaring_type: impl Into<String>,
        visibility: Visibility,
        is_accessor: bool,
        params: Vec<String>,
        body: Option<MethodBody>,
    ) -> Self {
        MethodDef {
            token,
            name: name.into(),
            namespace: namespace.into(),
            declaring_type: declaring_type.into(),
            visibility,
            is_accessor,
            params,
            body,
        }
    }

    /// The method's token in the method table.
    #[must_use]
    pub fn token(&self) -> Token {
        self.token
    }

    /// The method's name (`.ctor` for constructors).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the declaring type (empty for the global namespace).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Simple name of the declaring type.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }

    /// The method's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether this method is a compiler-generated property or event
    /// accessor.
    #[must_use]
    pub fn is_accessor(&self) -> bool {
        self.is_accessor
    }

    /// Whether this method is a constructor.
    #[must_use]
    pub fn is_ctor(&self) -> bool {
        self.name == CTOR_NAME
    }

    /// Full names of the parameter types, in declaration order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The method's instruction stream, or `None` when the method is
    /// abstract, external or otherwise bodiless.
    #[must_use]
    pub fn body(&self) -> Option<&MethodBody> {
        self.body.as_ref()
    }
}
