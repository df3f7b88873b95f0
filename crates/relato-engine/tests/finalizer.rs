use relato_core::models::context::Profession;
use relato_core::policy::EthicalPolicy;
use relato_engine::finalizer::Finalizer;
use relato_engine::terminology::Terminology;

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn strips_every_markup_character() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize(
        "**TÍTULO**\n## Seção\n_ênfase_ e ~rasura~",
        Profession::Psicologo,
    );
    for c in ['*', '#', '_', '~'] {
        assert!(!out.contains(c), "found {c:?} in {out:?}");
    }
    assert!(out.contains("TÍTULO"));
}

#[test]
fn appends_closing_when_missing() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize("Texto sem encerramento.", Profession::Psicologo);
    assert_eq!(count_occurrences(&out, &policy.mandatory_closing), 1);
    assert!(out.contains(&policy.closing_header));
    assert!(out.ends_with(&policy.mandatory_closing));
}

#[test]
fn does_not_duplicate_existing_closing() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let text = format!("Corpo do texto.\n\n{}", policy.mandatory_closing);
    let out = finalizer.finalize(&text, Profession::Psicologo);
    assert_eq!(count_occurrences(&out, &policy.mandatory_closing), 1);
}

#[test]
fn trims_surrounding_whitespace() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize("   Texto.   \n\n", Profession::Psicologo);
    assert!(out.starts_with("Texto."));
}

#[test]
fn finalize_is_idempotent() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    for (text, profession) in [
        ("Texto simples.", Profession::Psicologo),
        ("**Com markup** e sem encerramento", Profession::Pedagogo),
        ("Solicito que o LAUDO seja emitido.", Profession::Fonoaudiologo),
        ("", Profession::Outro),
    ] {
        let once = finalizer.finalize(text, profession);
        let twice = finalizer.finalize(&once, profession);
        assert_eq!(once, twice, "not idempotent for {text:?}");
    }
}

#[test]
fn empty_input_still_gains_the_closing() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize("", Profession::Psicologo);
    assert_eq!(count_occurrences(&out, &policy.mandatory_closing), 1);
}

#[test]
fn restricted_term_replaced_for_non_permitted_roles() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize(
        "Apresento o LAUDO e anexo o laudo complementar.",
        Profession::Pedagogo,
    );
    assert!(!out.to_lowercase().contains("laudo"), "got {out:?}");
    assert_eq!(count_occurrences(&out, "RELATÓRIO"), 2);
}

#[test]
fn restricted_term_kept_for_permitted_roles() {
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    for profession in [Profession::Psicologo, Profession::Neuropsicologo] {
        let out = finalizer.finalize("Segue o LAUDO solicitado.", profession);
        assert!(out.contains("LAUDO"), "{profession:?} may use the term");
    }
}

#[test]
fn document_term_follows_the_permitted_set() {
    let policy = EthicalPolicy::canonical();
    let terminology = Terminology::new(&policy).unwrap();

    assert_eq!(terminology.document_term(Profession::Psicologo), "LAUDO");
    assert_eq!(terminology.document_term(Profession::Neuropsicologo), "LAUDO");
    for profession in [
        Profession::Psicopedagogo,
        Profession::Fonoaudiologo,
        Profession::TerapeutaOcupacional,
        Profession::Pedagogo,
        Profession::Outro,
    ] {
        assert_eq!(terminology.document_term(profession), "RELATÓRIO");
    }
}

#[test]
fn enforcement_covers_markup_hidden_terms() {
    // Markup stripping runs before substitution, so "**LAUDO**" still
    // ends up replaced rather than slipping through as "**LAUDO**".
    let policy = EthicalPolicy::canonical();
    let finalizer = Finalizer::new(&policy).unwrap();

    let out = finalizer.finalize("Emito o **LAUDO** final.", Profession::Pedagogo);
    assert!(out.contains("RELATÓRIO"));
    assert!(!out.to_lowercase().contains("laudo"));
}
