use crate::metadata::{Assembly, Member, MethodDef, TypeDef};

fn qualified_type_name(namespace: &str, type_name: &str) -> String {
    if namespace.is_empty() {
        type_name.to_string()
    } else {
        format!("{namespace}.{type_name}")
    }
}

/// Computes the DocId-style stable identifier of a method definition.
///
/// Constructors are rendered with the `#ctor` marker; parameter type lists
/// are appended in parentheses only when parameters exist
/// (`M:System.Console.Beep(System.Int32,System.Int32)` vs. `M:C.M1`).
#[must_use]
pub fn method_doc_id(method: &MethodDef) -> String {
    let qualified = qualified_type_name(method.namespace(), method.declaring_type());
    let name = if method.is_ctor() {
        "#ctor"
    } else {
        method.name()
    };
    if method.params().is_empty() {
        format!("M:{qualified}.{name}")
    } else {
        format!("M:{qualified}.{name}({})", method.params().join(","))
    }
}

fn method_signature(method: &MethodDef) -> String {
    format!("{}({})", method.name(), method.params().join(", "))
}

/// The identity of an analyzed member, as handed to reporters.
///
/// Carries the four strings every downstream sink keys on: the DocId join
/// key plus the namespace/type/member display columns of the CSV formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDesc {
    doc_id: String,
    namespace_name: String,
    type_name: String,
    signature: String,
}

impl MemberDesc {
    /// Describes a member of the given type.
    ///
    /// Returns `None` when a method member's token does not resolve in the
    /// assembly's method table (inconsistent metadata).
    #[must_use]
    pub fn new(assembly: &Assembly, ty: &TypeDef, member: &Member) -> Option<Self> {
        let qualified = qualified_type_name(ty.namespace(), ty.name());
        let (doc_id, signature) = match member {
            Member::Field(field) => (
                format!("F:{qualified}.{}", field.name()),
                field.name().to_string(),
            ),
            Member::NestedType(nested) => (
                format!("T:{qualified}.{}", nested.name()),
                nested.name().to_string(),
            ),
            Member::Method(token) => {
                let method = assembly.method(*token)?;
                (method_doc_id(method), method_signature(method))
            }
            Member::Property(property) => (
                format!("P:{qualified}.{}", property.name()),
                property.name().to_string(),
            ),
            Member::Event(event) => (
                format!("E:{qualified}.{}", event.name()),
                event.name().to_string(),
            ),
        };

        Some(MemberDesc {
            doc_id,
            namespace_name: ty.namespace().to_string(),
            type_name: ty.name().to_string(),
            signature,
        })
    }

    /// Builds a description from raw column values (the import path of
    /// catalog tooling).
    #[must_use]
    pub fn from_columns(
        doc_id: impl Into<String>,
        namespace_name: impl Into<String>,
        type_name: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        MemberDesc {
            doc_id: doc_id.into(),
            namespace_name: namespace_name.into(),
            type_name: type_name.into(),
            signature: signature.into(),
        }
    }

    /// The member's stable identifier (`M:`, `P:`, `E:`, `F:` or `T:`
    /// prefixed).
    #[must_use]
    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    /// Namespace of the declaring type (empty for the global namespace).
    #[must_use]
    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    /// Simple name of the declaring type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The member's display signature (`M1()`, `.ctor(System.Int32)`, or the
    /// bare name for non-methods).
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{Token, Visibility};

    fn method(name: &str, namespace: &str, params: &[&str]) -> MethodDef {
        MethodDef::new(
            Token::method(1),
            name,
            namespace,
            "C",
            Visibility::Public,
            false,
            params.iter().map(ToString::to_string).collect(),
            None,
        )
    }

    #[test]
    fn test_method_doc_id_parameterless() {
        assert_eq!(method_doc_id(&method("M1", "", &[])), "M:C.M1");
    }

    #[test]
    fn test_method_doc_id_ctor() {
        assert_eq!(method_doc_id(&method(".ctor", "", &[])), "M:C.#ctor");
    }

    #[test]
    fn test_method_doc_id_with_namespace_and_params() {
        assert_eq!(
            method_doc_id(&method("M", "System.Net", &["System.Int32", "System.String"])),
            "M:System.Net.C.M(System.Int32,System.String)"
        );
    }

    #[test]
    fn test_method_signature_spacing() {
        assert_eq!(
            method_signature(&method("M", "", &["System.Int32", "System.String"])),
            "M(System.Int32, System.String)"
        );
    }
}
