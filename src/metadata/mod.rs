//! Minimal binary-metadata facade: the in-memory assembly object model the
//! scanner walks.
//!
//! Loading and parsing compiled binaries is an external collaborator's job;
//! this module only defines what the reachability analysis consumes: an
//! [`Assembly`] enumerating [`TypeDef`]s, each carrying a [`Member`] list,
//! with method bodies held in a token-indexed method table that call
//! operands resolve through.
//!
//! # Key Types
//! - [`Assembly`] - Root of the model, owns types and the method table
//! - [`TypeDef`] - A named type with its member list
//! - [`Member`] - Closed sum over field/nested-type/method/property/event
//! - [`MethodDef`] / [`MethodRef`] - Definitions and symbolic references
//! - [`MemberDesc`] - The identity strings reporters key on
//! - [`AssemblyBuilder`] - Fluent fixture construction for tests and benches

mod builder;
mod docid;
mod member;
mod method;
mod token;

pub use builder::{
    AssemblyBuilder, EventBuilder, IlAssembler, MethodBuilder, PropertyBuilder, TypeBuilder,
};
pub use docid::{method_doc_id, MemberDesc};
pub use member::{EventDef, FieldDef, Member, NestedTypeDef, PropertyDef, Visibility};
pub use method::{MethodDef, MethodRef, CTOR_NAME};
pub use token::{Token, TABLE_METHOD_DEF};

use std::collections::BTreeMap;

/// A named type definition with its member list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    namespace: String,
    name: String,
    visibility: Visibility,
    members: Vec<Member>,
}

impl TypeDef {
    /// Creates a type definition.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        visibility: Visibility,
        members: Vec<Member>,
    ) -> Self {
        TypeDef {
            namespace: namespace.into(),
            name: name.into(),
            visibility,
            members,
        }
    }

    /// The type's namespace (empty for the global namespace).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The type's simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The type's members, in declaration order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The type's full name (`Namespace.Name`, or `Name` in the global
    /// namespace).
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// A loaded assembly: the unit the scanner analyzes.
///
/// The model is immutable once constructed; scans read it but never mutate
/// it and keep no cross-call state, so independent scans of disjoint
/// assemblies need no coordination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    name: String,
    types: Vec<TypeDef>,
    methods: BTreeMap<Token, MethodDef>,
}

impl Assembly {
    /// Assembles the model from its parts. Most callers go through
    /// [`AssemblyBuilder`] instead.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        types: Vec<TypeDef>,
        methods: BTreeMap<Token, MethodDef>,
    ) -> Self {
        Assembly {
            name: name.into(),
            types,
            methods,
        }
    }

    /// The assembly's simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All type definitions, nested types included.
    #[must_use]
    pub fn types(&self) -> &[TypeDef] {
        &self.types
    }

    /// Looks up a method definition by token.
    #[must_use]
    pub fn method(&self, token: Token) -> Option<&MethodDef> {
        self.methods.get(&token)
    }

    /// Resolves a method reference to its definition, if the target lives in
    /// this assembly.
    #[must_use]
    pub fn resolve(&self, reference: &MethodRef) -> Option<&MethodDef> {
        reference.target().and_then(|token| self.method(token))
    }

    /// All method definitions, in token order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDef> {
        self.methods.values()
    }
}
