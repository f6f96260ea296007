//! Fluent construction of in-memory assemblies.
//!
//! The builders exist for the half of the toolchain that does not sit on a
//! real binary loader: unit tests, integration tests and benches assemble
//! fixture assemblies instruction by instruction, the same way a loader
//! would populate the model from metadata tables. Token assignment and
//! intra-assembly reference resolution happen in [`AssemblyBuilder::build`],
//! so IL can reference methods by name before they exist.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::il::{Instruction, MethodBody, OpCode, Operand};
use crate::metadata::{
    Assembly, EventDef, FieldDef, Member, MethodDef, MethodRef, NestedTypeDef, PropertyDef, Token,
    TypeDef, Visibility, CTOR_NAME,
};
use crate::Result;

/// Builds a method body instruction by instruction.
///
/// All emit methods return `&mut Self` for chaining inside the
/// [`MethodBuilder::il`] closure.
#[derive(Debug, Default)]
pub struct IlAssembler {
    instructions: Vec<Instruction>,
}

impl IlAssembler {
    fn emit(&mut self, opcode: OpCode, operand: Operand) -> &mut Self {
        self.instructions.push(Instruction::new(opcode, operand));
        self
    }

    /// Emits `nop`.
    pub fn nop(&mut self) -> &mut Self {
        self.emit(OpCode::Nop, Operand::None)
    }

    /// Emits `dup`.
    pub fn dup(&mut self) -> &mut Self {
        self.emit(OpCode::Dup, Operand::None)
    }

    /// Emits `pop`.
    pub fn pop(&mut self) -> &mut Self {
        self.emit(OpCode::Pop, Operand::None)
    }

    /// Emits `ldarg` for the given argument index.
    pub fn ldarg(&mut self, index: i32) -> &mut Self {
        self.emit(OpCode::Ldarg, Operand::Int32(index))
    }

    /// Emits `ldstr` with an inline string literal.
    pub fn ldstr(&mut self, value: &str) -> &mut Self {
        self.emit(OpCode::Ldstr, Operand::String(value.to_string()))
    }

    /// Emits `ldc.i4` with an inline constant.
    pub fn ldc_i4(&mut self, value: i32) -> &mut Self {
        self.emit(OpCode::LdcI4, Operand::Int32(value))
    }

    /// Emits `call` targeting the referenced method.
    pub fn call(&mut self, target: MethodRef) -> &mut Self {
        self.emit(OpCode::Call, Operand::Method(target))
    }

    /// Emits `callvirt` targeting the referenced method.
    pub fn callvirt(&mut self, target: MethodRef) -> &mut Self {
        self.emit(OpCode::Callvirt, Operand::Method(target))
    }

    /// Emits `newobj` targeting the referenced constructor.
    pub fn newobj(&mut self, ctor: MethodRef) -> &mut Self {
        self.emit(OpCode::Newobj, Operand::Method(ctor))
    }

    /// Emits `throw`.
    pub fn throw(&mut self) -> &mut Self {
        self.emit(OpCode::Throw, Operand::None)
    }

    /// Emits `ret`.
    pub fn ret(&mut self) -> &mut Self {
        self.emit(OpCode::Ret, Operand::None)
    }
}

/// Builds one method of a type.
#[derive(Debug)]
pub struct MethodBuilder {
    name: String,
    visibility: Visibility,
    params: Vec<String>,
    body: Option<Vec<Instruction>>,
}

impl MethodBuilder {
    /// Starts a method with the given name, private by default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        MethodBuilder {
            name: name.into(),
            visibility: Visibility::Private,
            params: Vec::new(),
            body: None,
        }
    }

    /// Starts a constructor (`.ctor`), private by default.
    #[must_use]
    pub fn ctor() -> Self {
        Self::new(CTOR_NAME)
    }

    /// Sets the method's accessibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the method public.
    #[must_use]
    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    /// Appends a parameter with the given type full name.
    #[must_use]
    pub fn param(mut self, type_name: impl Into<String>) -> Self {
        self.params.push(type_name.into());
        self
    }

    /// Assembles the method's body. A method built without a body is
    /// abstract/external as far as the scanner is concerned.
    #[must_use]
    pub fn il(mut self, assemble: impl FnOnce(&mut IlAssembler)) -> Self {
        let mut il = IlAssembler::default();
        assemble(&mut il);
        self.body = Some(il.instructions);
        self
    }
}

/// Builds a property, wiring accessors up by method name within the
/// declaring type.
#[derive(Debug)]
pub struct PropertyBuilder {
    name: String,
    visibility: Visibility,
    getter: Option<String>,
    setter: Option<String>,
}

impl PropertyBuilder {
    /// Starts a property with the given name, private by default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        PropertyBuilder {
            name: name.into(),
            visibility: Visibility::Private,
            getter: None,
            setter: None,
        }
    }

    /// Sets the property's accessibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the property public.
    #[must_use]
    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    /// Names the getter method.
    #[must_use]
    pub fn getter(mut self, method_name: impl Into<String>) -> Self {
        self.getter = Some(method_name.into());
        self
    }

    /// Names the setter method.
    #[must_use]
    pub fn setter(mut self, method_name: impl Into<String>) -> Self {
        self.setter = Some(method_name.into());
        self
    }
}

/// Builds an event, wiring accessors up by method name within the declaring
/// type.
#[derive(Debug)]
pub struct EventBuilder {
    name: String,
    visibility: Visibility,
    adder: Option<String>,
    remover: Option<String>,
}

impl EventBuilder {
    /// Starts an event with the given name, private by default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        EventBuilder {
            name: name.into(),
            visibility: Visibility::Private,
            adder: None,
            remover: None,
        }
    }

    /// Sets the event's accessibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the event public.
    #[must_use]
    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    /// Names the adder method.
    #[must_use]
    pub fn adder(mut self, method_name: impl Into<String>) -> Self {
        self.adder = Some(method_name.into());
        self
    }

    /// Names the remover method.
    #[must_use]
    pub fn remover(mut self, method_name: impl Into<String>) -> Self {
        self.remover = Some(method_name.into());
        self
    }
}

/// Builds one type of an assembly.
#[derive(Debug)]
pub struct TypeBuilder {
    namespace: String,
    name: String,
    visibility: Visibility,
    methods: Vec<MethodBuilder>,
    properties: Vec<PropertyBuilder>,
    events: Vec<EventBuilder>,
    fields: Vec<(String, Visibility)>,
    nested: Vec<(String, Visibility)>,
}

impl TypeBuilder {
    /// Starts a type, assembly-internal by default.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeBuilder {
            namespace: namespace.into(),
            name: name.into(),
            visibility: Visibility::Assembly,
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            fields: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the type's accessibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the type public.
    #[must_use]
    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    /// Adds a method.
    #[must_use]
    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds a property.
    #[must_use]
    pub fn property(mut self, property: PropertyBuilder) -> Self {
        self.properties.push(property);
        self
    }

    /// Adds an event.
    #[must_use]
    pub fn event(mut self, event: EventBuilder) -> Self {
        self.events.push(event);
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.fields.push((name.into(), visibility));
        self
    }

    /// Adds a nested type marker.
    #[must_use]
    pub fn nested_type(mut self, name: impl Into<String>, visibility: Visibility) -> Self {
        self.nested.push((name.into(), visibility));
        self
    }

    fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// Builds an [`Assembly`].
///
/// `build` assigns method-table tokens in declaration order, marks accessor
/// methods referenced by properties/events, and resolves intra-assembly call
/// and construction operands by (declaring type, method name). References to
/// types outside the assembly remain unresolved, which the scanner treats
/// like bodiless methods.
#[derive(Debug)]
pub struct AssemblyBuilder {
    name: String,
    types: Vec<TypeBuilder>,
}

impl AssemblyBuilder {
    /// Starts an assembly with the given simple name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        AssemblyBuilder {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Adds a type.
    #[must_use]
    pub fn ty(mut self, ty: TypeBuilder) -> Self {
        self.types.push(ty);
        self
    }

    /// Assembles the final model.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] when a property or event names an
    /// accessor method that does not exist on its declaring type.
    pub fn build(self) -> Result<Assembly> {
        // Pass 1: assign tokens so IL can be resolved regardless of
        // declaration order.
        let mut token_by_name: HashMap<(String, String), Token> = HashMap::new();
        let mut next_row = 1u32;
        for ty in &self.types {
            for method in &ty.methods {
                let token = Token::method(next_row);
                next_row += 1;
                token_by_name.insert((ty.full_name(), method.name.clone()), token);
            }
        }

        // Pass 2: accessors referenced by properties/events.
        let mut accessor_tokens: HashSet<Token> = HashSet::new();
        for ty in &self.types {
            let full_name = ty.full_name();
            let lookup = |name: &Option<String>| -> Result<Option<Token>> {
                match name {
                    None => Ok(None),
                    Some(name) => token_by_name
                        .get(&(full_name.clone(), name.clone()))
                        .copied()
                        .map(Some)
                        .ok_or_else(|| {
                            malformed_error!(
                                "accessor '{}' is not defined on type '{}'",
                                name,
                                full_name
                            )
                        }),
                }
            };
            for property in &ty.properties {
                accessor_tokens.extend(lookup(&property.getter)?);
                accessor_tokens.extend(lookup(&property.setter)?);
            }
            for event in &ty.events {
                accessor_tokens.extend(lookup(&event.adder)?);
                accessor_tokens.extend(lookup(&event.remover)?);
            }
        }

        // Pass 3: materialize definitions, resolving IL operands.
        let mut methods: BTreeMap<Token, MethodDef> = BTreeMap::new();
        let mut types: Vec<TypeDef> = Vec::new();
        let mut row = 1u32;
        for ty in self.types {
            let full_name = ty.full_name();
            let mut members: Vec<Member> = Vec::new();

            for method in ty.methods {
                let token = Token::method(row);
                row += 1;
                let body = method.body.map(|instructions| {
                    MethodBody::new(resolve_operands(instructions, &token_by_name))
                });
                methods.insert(
                    token,
                    MethodDef::new(
                        token,
                        method.name,
                        ty.namespace.clone(),
                        ty.name.clone(),
                        method.visibility,
                        accessor_tokens.contains(&token),
                        method.params,
                        body,
                    ),
                );
                members.push(Member::Method(token));
            }

            let token_of = |name: &Option<String>| -> Option<Token> {
                name.as_ref()
                    .and_then(|n| token_by_name.get(&(full_name.clone(), n.clone())))
                    .copied()
            };
            for property in &ty.properties {
                members.push(Member::Property(PropertyDef::new(
                    property.name.clone(),
                    property.visibility,
                    token_of(&property.getter),
                    token_of(&property.setter),
                )));
            }
            for event in &ty.events {
                members.push(Member::Event(EventDef::new(
                    event.name.clone(),
                    event.visibility,
                    token_of(&event.adder),
                    token_of(&event.remover),
                )));
            }
            for (name, visibility) in &ty.fields {
                members.push(Member::Field(FieldDef::new(name.clone(), *visibility)));
            }
            for (name, visibility) in &ty.nested {
                members.push(Member::NestedType(NestedTypeDef::new(
                    name.clone(),
                    *visibility,
                )));
            }

            types.push(TypeDef::new(ty.namespace, ty.name, ty.visibility, members));
        }

        Ok(Assembly::new(self.name, types, methods))
    }
}

fn resolve_operands(
    instructions: Vec<Instruction>,
    token_by_name: &HashMap<(String, String), Token>,
) -> Vec<Instruction> {
    instructions
        .into_iter()
        .map(|instruction| {
            if let Operand::Method(reference) = instruction.operand() {
                if reference.target().is_none() {
                    let key = (
                        reference.declaring_type().to_string(),
                        reference.name().to_string(),
                    );
                    if let Some(&token) = token_by_name.get(&key) {
                        let resolved = MethodRef::resolved(
                            reference.name(),
                            reference.declaring_type(),
                            token,
                        );
                        return Instruction::new(instruction.opcode(), Operand::Method(resolved));
                    }
                }
            }
            instruction
        })
        .collect()
}
