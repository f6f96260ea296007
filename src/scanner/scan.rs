use crate::il::{Instruction, OpCode};
use crate::metadata::{method_doc_id, Assembly, Member, MemberDesc, MethodRef, Token, TypeDef};
use crate::scanner::{ExceptionInfo, ExceptionReporter};
use crate::Result;

/// Full name of the exception type the analysis looks for.
pub const PLATFORM_NOT_SUPPORTED: &str = "System.PlatformNotSupportedException";

/// Depth ceiling for following calls out of a member's body.
///
/// Depth 0 is the member's own body; a throw more than three calls away is
/// deliberately not attributed to the member. The ceiling also bounds the
/// recursion, so cycles in the call graph need no visited set.
pub const MAX_NESTING_LEVEL: i32 = 3;

/// Scans assemblies for externally visible members that unconditionally
/// throw [`PLATFORM_NOT_SUPPORTED`].
///
/// The analysis is purely syntactic: a member is flagged when a
/// `System.PlatformNotSupportedException` is constructed (directly or via a
/// factory method) and thrown on the straight-line path through its body,
/// or through the body of a callee within [`MAX_NESTING_LEVEL`] calls.
/// Results for every classified member, negative ones included, go to the
/// wrapped [`ExceptionReporter`].
pub struct ExceptionScanner<R>
where
    R: ExceptionReporter,
{
    reporter: R,
}

impl<R> ExceptionScanner<R>
where
    R: ExceptionReporter,
{
    /// Creates a scanner reporting into the given sink.
    pub fn new(reporter: R) -> Self {
        ExceptionScanner { reporter }
    }

    /// Consumes the scanner and hands the sink back.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Scans every externally visible member of the assembly, reporting one
    /// result per member.
    ///
    /// Types and members that are not visible outside the assembly are
    /// skipped entirely. Accessor methods are not classified on their own;
    /// their results surface through the owning property or event.
    ///
    /// # Errors
    /// Propagates the first error returned by the reporter. The analysis
    /// itself cannot fail.
    pub fn scan_assembly(&mut self, assembly: &Assembly) -> Result<()> {
        for ty in assembly.types() {
            if !ty.visibility().is_visible_outside_assembly() {
                continue;
            }
            for member in ty.members() {
                self.scan_member(assembly, ty, member)?;
            }
        }
        Ok(())
    }

    fn scan_member(&mut self, assembly: &Assembly, ty: &TypeDef, member: &Member) -> Result<()> {
        let visibility = match member {
            Member::Field(field) => field.visibility(),
            Member::NestedType(nested) => nested.visibility(),
            Member::Method(token) => match assembly.method(*token) {
                Some(method) => method.visibility(),
                // Dangling method token: inconsistent metadata, nothing to
                // classify.
                None => return Ok(()),
            },
            Member::Property(property) => property.visibility(),
            Member::Event(event) => event.visibility(),
        };
        if !visibility.is_visible_outside_assembly() {
            return Ok(());
        }

        let info = match member {
            // Fields and nested-type markers cannot throw on use.
            Member::Field(_) | Member::NestedType(_) => ExceptionInfo::does_not_throw(),
            Member::Method(token) => match assembly.method(*token) {
                Some(method) if !method.is_accessor() => self.scan_method(assembly, method, 0),
                _ => ExceptionInfo::does_not_throw(),
            },
            Member::Property(property) => self.combine_accessors(assembly, property.accessors()),
            Member::Event(event) => self.combine_accessors(assembly, event.accessors()),
        };

        match MemberDesc::new(assembly, ty, member) {
            Some(desc) => self.reporter.report(&info, &desc),
            None => Ok(()),
        }
    }

    fn combine_accessors(
        &self,
        assembly: &Assembly,
        accessors: impl Iterator<Item = Token>,
    ) -> ExceptionInfo {
        accessors
            .filter_map(|token| assembly.method(token))
            .fold(ExceptionInfo::does_not_throw(), |acc, method| {
                acc.combine(self.scan_method(assembly, method, 0))
            })
    }

    fn scan_method(
        &self,
        assembly: &Assembly,
        method: &crate::metadata::MethodDef,
        nesting_level: i32,
    ) -> ExceptionInfo {
        let Some(body) = method.body() else {
            return ExceptionInfo::does_not_throw();
        };

        // Direct pattern: an exception construction immediately (ignoring
        // nops) followed by a throw. First hit wins.
        let mut previous: Option<&Instruction> = None;
        for instruction in body.instructions() {
            if instruction.opcode() == OpCode::Nop {
                continue;
            }
            if instruction.opcode() == OpCode::Throw {
                if let Some(prev) = previous {
                    if let Some(reference) = prev.operand().as_method() {
                        let direct = prev.opcode() == OpCode::Newobj
                            && reference.is_ctor()
                            && reference.declaring_type() == PLATFORM_NOT_SUPPORTED;
                        if direct || self.is_factory(assembly, reference) {
                            return ExceptionInfo::throws_at(nesting_level, method_doc_id(method));
                        }
                    }
                }
            }
            previous = Some(instruction);
        }

        // Indirect pattern: follow calls into the assembly, up to the depth
        // ceiling.
        let mut result = ExceptionInfo::does_not_throw();
        if nesting_level < MAX_NESTING_LEVEL {
            for instruction in body.instructions() {
                if !instruction.opcode().is_call() {
                    continue;
                }
                let Some(reference) = instruction.operand().as_method() else {
                    continue;
                };
                if let Some(callee) = assembly.resolve(reference) {
                    result = result.combine(self.scan_method(assembly, callee, nesting_level + 1));
                }
            }
        }
        result
    }

    /// Whether the referenced method is an exception factory: a method whose
    /// body can return a freshly constructed
    /// `System.PlatformNotSupportedException`.
    ///
    /// Recognition is a linear scan tracking the most recent construction;
    /// a `ret` while that construction is the pending one makes the method a
    /// factory. Calling a factory does not count as a call-graph hop.
    fn is_factory(&self, assembly: &Assembly, reference: &MethodRef) -> bool {
        let Some(method) = assembly.resolve(reference) else {
            return false;
        };
        let Some(body) = method.body() else {
            return false;
        };

        let mut pending_pns_ctor = false;
        for instruction in body.instructions() {
            match instruction.opcode() {
                OpCode::Newobj => {
                    pending_pns_ctor = instruction
                        .operand()
                        .as_method()
                        .is_some_and(|r| r.is_ctor() && r.declaring_type() == PLATFORM_NOT_SUPPORTED);
                }
                OpCode::Ret if pending_pns_ctor => return true,
                _ => {}
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AssemblyBuilder, MethodBuilder, TypeBuilder};
    use crate::scanner::DelegatedReporter;

    fn pns_ctor() -> MethodRef {
        MethodRef::new(crate::metadata::CTOR_NAME, PLATFORM_NOT_SUPPORTED)
    }

    fn scan_collecting(assembly: &Assembly) -> Vec<(String, i32)> {
        let mut results = Vec::new();
        let mut scanner = ExceptionScanner::new(DelegatedReporter::new(|info, member| {
            results.push((member.doc_id().to_string(), info.level()));
            Ok(())
        }));
        scanner.scan_assembly(assembly).unwrap();
        drop(scanner);
        results
    }

    #[test]
    fn test_direct_throw_is_level_zero() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C").public().method(
                MethodBuilder::new("M").public().il(|il| {
                    il.newobj(pns_ctor()).throw();
                }),
            ))
            .build()
            .unwrap();

        assert_eq!(scan_collecting(&assembly), [("M:C.M".to_string(), 0)]);
    }

    #[test]
    fn test_nops_between_construction_and_throw_are_ignored() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C").public().method(
                MethodBuilder::new("M").public().il(|il| {
                    il.newobj(pns_ctor()).nop().nop().throw();
                }),
            ))
            .build()
            .unwrap();

        assert_eq!(scan_collecting(&assembly), [("M:C.M".to_string(), 0)]);
    }

    #[test]
    fn test_construction_without_throw_is_negative() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C").public().method(
                MethodBuilder::new("M").public().il(|il| {
                    il.newobj(pns_ctor()).pop().ret();
                }),
            ))
            .build()
            .unwrap();

        assert_eq!(scan_collecting(&assembly), [("M:C.M".to_string(), -1)]);
    }

    #[test]
    fn test_factory_recognition() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C")
                .public()
                .method(MethodBuilder::new("Create").public().il(|il| {
                    il.newobj(pns_ctor()).ret();
                }))
                .method(MethodBuilder::new("M").public().il(|il| {
                    il.call(MethodRef::new("Create", "C")).throw();
                })))
            .build()
            .unwrap();

        let results = scan_collecting(&assembly);
        // The factory call is not a hop: M throws at level 0. Create itself
        // never throws.
        assert!(results.contains(&("M:C.M".to_string(), 0)));
        assert!(results.contains(&("M:C.Create".to_string(), -1)));
    }

    #[test]
    fn test_bodiless_reference_is_not_a_factory() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C")
                .public()
                .method(MethodBuilder::new("Create").public())
                .method(MethodBuilder::new("M").public().il(|il| {
                    il.call(MethodRef::new("Create", "C")).throw();
                })))
            .build()
            .unwrap();

        let results = scan_collecting(&assembly);
        assert!(results.contains(&("M:C.M".to_string(), -1)));
    }

    #[test]
    fn test_depth_ceiling() {
        // M0 -> M1 -> M2 -> M3 throws: detected at level 3.
        // N0 -> M0 would put the throw four calls away: not detected.
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C")
                .public()
                .method(MethodBuilder::new("M3").public().il(|il| {
                    il.newobj(pns_ctor()).throw();
                }))
                .method(MethodBuilder::new("M2").public().il(|il| {
                    il.call(MethodRef::new("M3", "C")).ret();
                }))
                .method(MethodBuilder::new("M1").public().il(|il| {
                    il.call(MethodRef::new("M2", "C")).ret();
                }))
                .method(MethodBuilder::new("M0").public().il(|il| {
                    il.call(MethodRef::new("M1", "C")).ret();
                }))
                .method(MethodBuilder::new("N0").public().il(|il| {
                    il.call(MethodRef::new("M0", "C")).ret();
                })))
            .build()
            .unwrap();

        let results = scan_collecting(&assembly);
        assert!(results.contains(&("M:C.M0".to_string(), 3)));
        assert!(results.contains(&("M:C.N0".to_string(), -1)));
    }

    #[test]
    fn test_recursive_calls_terminate() {
        let assembly = AssemblyBuilder::new("a")
            .ty(TypeBuilder::new("", "C").public().method(
                MethodBuilder::new("M").public().il(|il| {
                    il.call(MethodRef::new("M", "C")).ret();
                }),
            ))
            .build()
            .unwrap();

        assert_eq!(scan_collecting(&assembly), [("M:C.M".to_string(), -1)]);
    }
}
