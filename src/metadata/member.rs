use crate::metadata::Token;

/// Accessibility of a type or member, reduced to the distinctions the
/// scanner acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Accessible only within the declaring type
    Private,
    /// Accessible only within the declaring assembly (`internal`)
    Assembly,
    /// Accessible to derived types (`protected`)
    Family,
    /// Accessible everywhere
    Public,
}

impl Visibility {
    /// Whether the element is part of the assembly's public surface.
    ///
    /// Public and family members are reachable from outside the defining
    /// unit; private and assembly-internal members are not.
    #[must_use]
    pub fn is_visible_outside_assembly(&self) -> bool {
        matches!(self, Visibility::Family | Visibility::Public)
    }
}

/// A field definition. Fields cannot throw on use in this model; the scanner
/// classifies them but never analyzes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    visibility: Visibility,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        FieldDef {
            name: name.into(),
            visibility,
        }
    }

    /// The field's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A nested type marker on its enclosing type's member list.
///
/// Nested types are enumerated alongside other members (the scanner skips
/// them the same way it skips fields); their own members are carried by a
/// separate [`crate::metadata::TypeDef`] in the assembly's type list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedTypeDef {
    name: String,
    visibility: Visibility,
}

impl NestedTypeDef {
    /// Creates a nested type marker.
    #[must_use]
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        NestedTypeDef {
            name: name.into(),
            visibility,
        }
    }

    /// The nested type's simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nested type's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// A property definition with its accessor methods.
///
/// Accessors are method-table tokens; the scanner analyzes a property by
/// combining the results of its accessors, and only through this list --
/// the accessor methods themselves are skipped when reached through plain
/// member enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDef {
    name: String,
    visibility: Visibility,
    getter: Option<Token>,
    setter: Option<Token>,
}

impl PropertyDef {
    /// Creates a property definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        visibility: Visibility,
        getter: Option<Token>,
        setter: Option<Token>,
    ) -> Self {
        PropertyDef {
            name: name.into(),
            visibility,
            getter,
            setter,
        }
    }

    /// The property's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The declared accessors, getter first.
    pub fn accessors(&self) -> impl Iterator<Item = Token> + '_ {
        self.getter.into_iter().chain(self.setter)
    }
}

/// An event definition with its adder and remover methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDef {
    name: String,
    visibility: Visibility,
    adder: Option<Token>,
    remover: Option<Token>,
}

impl EventDef {
    /// Creates an event definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        visibility: Visibility,
        adder: Option<Token>,
        remover: Option<Token>,
    ) -> Self {
        EventDef {
            name: name.into(),
            visibility,
            adder,
            remover,
        }
    }

    /// The event's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The event's accessibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The declared accessors, adder first.
    pub fn accessors(&self) -> impl Iterator<Item = Token> + '_ {
        self.adder.into_iter().chain(self.remover)
    }
}

/// A member of a type definition.
///
/// This is deliberately a closed sum: member classification in the scanner
/// matches it exhaustively, so there is no "unexpected member kind" failure
/// mode -- the compiler rules it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// A field
    Field(FieldDef),
    /// A nested type
    NestedType(NestedTypeDef),
    /// A constructor or ordinary method, carried in the method table
    Method(Token),
    /// A property with its accessors
    Property(PropertyDef),
    /// An event with its accessors
    Event(EventDef),
}
