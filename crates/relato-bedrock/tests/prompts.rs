use relato_bedrock::prompts::{
    EXTRACTION_SYSTEM_PROMPT, narrative_system_prompt, narrative_user_message,
};
use relato_core::models::context::{Profession, ReportContext, ReportObjective};
use relato_core::models::extraction::{Category, ExtractedResult, ExtractedScore, ScoreValue};
use relato_core::policy::EthicalPolicy;

fn sample_extraction() -> Vec<ExtractedResult> {
    vec![ExtractedResult {
        instrument: "WISC-IV".to_string(),
        category: Category::Cognitivo,
        scores: vec![ExtractedScore {
            label: "QI Total".to_string(),
            value: ScoreValue::Text("105".to_string()),
        }],
        classification: Some("Médio".to_string()),
        notes: None,
    }]
}

#[test]
fn system_prompt_embeds_the_mandatory_closing() {
    let policy = EthicalPolicy::canonical();
    let prompt = narrative_system_prompt(&policy, false);
    assert!(prompt.contains(&policy.mandatory_closing));
}

#[test]
fn system_prompt_switches_on_visual_source() {
    let policy = EthicalPolicy::canonical();

    let with_visual = narrative_system_prompt(&policy, true);
    assert!(with_visual.contains("perfil gráfico"));

    let without_visual = narrative_system_prompt(&policy, false);
    assert!(without_visual.contains("Não faça qualquer menção a gráficos"));
    assert!(!without_visual.contains("perfil gráfico"));
}

#[test]
fn system_prompt_requires_the_three_json_fields() {
    let policy = EthicalPolicy::canonical();
    let prompt = narrative_system_prompt(&policy, false);
    for field in ["\"simple\"", "\"professional\"", "\"technical\""] {
        assert!(prompt.contains(field), "missing {field}");
    }
}

#[test]
fn user_message_carries_data_and_context() {
    let context = ReportContext {
        profession: Profession::Fonoaudiologo,
        objective: ReportObjective::Escola,
    };
    let message = narrative_user_message(&context, &sample_extraction()).unwrap();

    assert!(message.contains("WISC-IV"));
    assert!(message.contains("QI Total"));
    assert!(message.contains("Fonoaudiólogo"));
    assert!(message.contains("Escola"));
}

#[test]
fn extraction_prompt_pins_the_category_enum() {
    for category in ["Cognitivo", "TDAH", "TEA", "Aprendizagem", "Linguagem", "Emocional", "Outro"]
    {
        assert!(
            EXTRACTION_SYSTEM_PROMPT.contains(category),
            "missing {category}"
        );
    }
}
