//! Integration tests for the throw-pattern scanner.
//!
//! Each test builds a small fixture assembly and checks what gets reported:
//! which members show up, at which nesting level, and with which witness.

use pnscan::prelude::*;

/// One reported member: DocId, nesting level, witness.
type Report = (String, i32, Option<String>);

fn scan(assembly: &Assembly) -> Vec<Report> {
    let mut reports = Vec::new();
    let mut scanner = ExceptionScanner::new(DelegatedReporter::new(|info, member| {
        reports.push((
            member.doc_id().to_string(),
            info.level(),
            info.site().map(str::to_string),
        ));
        Ok(())
    }));
    scanner.scan_assembly(assembly).unwrap();
    drop(scanner);
    reports
}

fn level_of(reports: &[Report], doc_id: &str) -> Option<i32> {
    reports
        .iter()
        .find(|(id, _, _)| id == doc_id)
        .map(|(_, level, _)| *level)
}

fn pns_ctor() -> MethodRef {
    MethodRef::new(CTOR_NAME, PLATFORM_NOT_SUPPORTED)
}

fn throwing_method(name: &str) -> MethodBuilder {
    MethodBuilder::new(name).public().il(|il| {
        il.newobj(pns_ctor()).throw();
    })
}

#[test]
fn direct_throw_in_method() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(throwing_method("M1")))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "M:C.M1"), Some(0));
}

#[test]
fn direct_throw_in_ctor() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(
            MethodBuilder::ctor().public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }),
        ))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "M:C.#ctor"), Some(0));
}

#[test]
fn throw_in_property_getter() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("get_P").public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .property(PropertyBuilder::new("P").public().getter("get_P")))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "P:C.P"), Some(0));
    // The accessor surfaces only through its property: as a standalone
    // method it is classified as non-throwing.
    assert_eq!(level_of(&reports, "M:C.get_P"), Some(-1));
}

#[test]
fn property_witness_comes_from_shallower_accessor() {
    // Getter throws directly, setter one call deep: the property reports
    // level 0 with the getter's witness.
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("get_P").public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .method(MethodBuilder::new("Helper").public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .method(MethodBuilder::new("set_P").public().il(|il| {
                il.call(MethodRef::new("Helper", "C")).ret();
            }))
            .property(
                PropertyBuilder::new("P")
                    .public()
                    .getter("get_P")
                    .setter("set_P"),
            ))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    let (_, level, site) = reports.iter().find(|(id, _, _)| id == "P:C.P").unwrap();
    assert_eq!(*level, 0);
    assert_eq!(site.as_deref(), Some("M:C.get_P"));
}

#[test]
fn property_combines_accessors() {
    // Getter does not throw, setter does: the property throws.
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("get_P").public().il(|il| {
                il.ldc_i4(0).ret();
            }))
            .method(MethodBuilder::new("set_P").public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .property(
                PropertyBuilder::new("P")
                    .public()
                    .getter("get_P")
                    .setter("set_P"),
            ))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "P:C.P"), Some(0));
}

#[test]
fn throw_in_event_adder() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("add_E").public().il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .method(MethodBuilder::new("remove_E").public().il(|il| {
                il.ret();
            }))
            .event(
                EventBuilder::new("E")
                    .public()
                    .adder("add_E")
                    .remover("remove_E"),
            ))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "E:C.E"), Some(0));
    assert_eq!(level_of(&reports, "M:C.add_E"), Some(-1));
    assert_eq!(level_of(&reports, "M:C.remove_E"), Some(-1));
}

#[test]
fn private_members_are_not_reported() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("Hidden").il(|il| {
                il.newobj(pns_ctor()).throw();
            }))
            .method(throwing_method("Shown")))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "M:C.Hidden"), None);
    assert_eq!(level_of(&reports, "M:C.Shown"), Some(0));
}

#[test]
fn internal_types_are_not_reported() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "Internal").method(throwing_method("M")))
        .ty(TypeBuilder::new("", "Hidden")
            .visibility(Visibility::Private)
            .method(throwing_method("M")))
        .build()
        .unwrap();

    assert!(scan(&assembly).is_empty());
}

#[test]
fn protected_members_are_reported() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(
            MethodBuilder::new("M")
                .visibility(Visibility::Family)
                .il(|il| {
                    il.newobj(pns_ctor()).throw();
                }),
        ))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M"), Some(0));
}

#[test]
fn construction_without_throw_is_not_detected() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(
            MethodBuilder::new("M1").public().il(|il| {
                il.newobj(pns_ctor()).dup().pop().pop().ret();
            }),
        ))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M1"), Some(-1));
}

#[test]
fn other_exception_types_are_not_detected() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(
            MethodBuilder::new("M1").public().il(|il| {
                il.newobj(MethodRef::new(CTOR_NAME, "System.NotSupportedException"))
                    .throw();
            }),
        ))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M1"), Some(-1));
}

#[test]
fn factory_throw_is_level_zero() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("CreateException").public().il(|il| {
                il.ldstr("not supported here").newobj(pns_ctor()).ret();
            }))
            .method(MethodBuilder::new("M1").public().il(|il| {
                il.call(MethodRef::new("CreateException", "C")).throw();
            })))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "M:C.M1"), Some(0));
    assert_eq!(level_of(&reports, "M:C.CreateException"), Some(-1));
}

#[test]
fn indirect_throws_up_to_three_calls() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(throwing_method("M0"))
            .method(MethodBuilder::new("M1").public().il(|il| {
                il.call(MethodRef::new("M0", "C")).ret();
            }))
            .method(MethodBuilder::new("M2").public().il(|il| {
                il.call(MethodRef::new("M1", "C")).ret();
            }))
            .method(MethodBuilder::new("M3").public().il(|il| {
                il.call(MethodRef::new("M2", "C")).ret();
            }))
            .method(MethodBuilder::new("M4").public().il(|il| {
                il.call(MethodRef::new("M3", "C")).ret();
            })))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "M:C.M0"), Some(0));
    assert_eq!(level_of(&reports, "M:C.M1"), Some(1));
    assert_eq!(level_of(&reports, "M:C.M2"), Some(2));
    assert_eq!(level_of(&reports, "M:C.M3"), Some(3));
    assert_eq!(level_of(&reports, "M:C.M4"), Some(-1));
}

#[test]
fn private_call_chain_is_attributed_to_the_visible_caller() {
    // Only M1 is visible; the throw sits two private calls away. Exactly
    // one member is reported, at level 2, with the private thrower as
    // witness.
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(MethodBuilder::new("M1").public().il(|il| {
                il.call(MethodRef::new("M2", "C")).ret();
            }))
            .method(MethodBuilder::new("M2").il(|il| {
                il.call(MethodRef::new("M3", "C")).ret();
            }))
            .method(MethodBuilder::new("M3").il(|il| {
                il.newobj(pns_ctor()).throw();
            })))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(
        reports,
        [("M:C.M1".to_string(), 2, Some("M:C.M3".to_string()))]
    );
}

#[test]
fn callvirt_is_followed_like_call() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(throwing_method("M0"))
            .method(MethodBuilder::new("M1").public().il(|il| {
                il.ldarg(0).callvirt(MethodRef::new("M0", "C")).ret();
            })))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M1"), Some(1));
}

#[test]
fn witness_names_the_throwing_method() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("Lib", "C")
            .public()
            .method(throwing_method("Inner"))
            .method(MethodBuilder::new("Outer").public().il(|il| {
                il.call(MethodRef::new("Inner", "Lib.C")).ret();
            })))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    let (_, level, site) = reports
        .iter()
        .find(|(id, _, _)| id == "M:Lib.C.Outer")
        .unwrap();
    assert_eq!(*level, 1);
    assert_eq!(site.as_deref(), Some("M:Lib.C.Inner"));
}

#[test]
fn shallower_path_wins() {
    // Outer reaches the throw both directly (via Near) and two calls deep
    // (via Far): the reported level is the shallower one.
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .method(throwing_method("Near"))
            .method(MethodBuilder::new("Mid").public().il(|il| {
                il.call(MethodRef::new("Near", "C")).ret();
            }))
            .method(MethodBuilder::new("Outer").public().il(|il| {
                il.call(MethodRef::new("Mid", "C"))
                    .call(MethodRef::new("Near", "C"))
                    .ret();
            })))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.Outer"), Some(1));
}

#[test]
fn fields_and_nested_types_are_reported_negative() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C")
            .public()
            .field("Count", Visibility::Public)
            .nested_type("Inner", Visibility::Public))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(level_of(&reports, "F:C.Count"), Some(-1));
    assert_eq!(level_of(&reports, "T:C.Inner"), Some(-1));
}

#[test]
fn abstract_methods_do_not_throw() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(MethodBuilder::new("M").public()))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M"), Some(-1));
}

#[test]
fn external_calls_are_ignored() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("", "C").public().method(
            MethodBuilder::new("M").public().il(|il| {
                il.call(MethodRef::new("WriteLine", "System.Console")).ret();
            }),
        ))
        .build()
        .unwrap();

    assert_eq!(level_of(&scan(&assembly), "M:C.M"), Some(-1));
}

#[test]
fn parameters_appear_in_doc_ids() {
    let assembly = AssemblyBuilder::new("a")
        .ty(TypeBuilder::new("System", "Console").public().method(
            MethodBuilder::new("Beep")
                .public()
                .param("System.Int32")
                .param("System.Int32")
                .il(|il| {
                    il.newobj(pns_ctor()).throw();
                }),
        ))
        .build()
        .unwrap();

    let reports = scan(&assembly);
    assert_eq!(
        level_of(&reports, "M:System.Console.Beep(System.Int32,System.Int32)"),
        Some(0)
    );
}
