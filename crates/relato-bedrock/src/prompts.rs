//! Prompt assembly for the generative collaborators.
//!
//! The editorial directives are strict because downstream finalization
//! depends on them as a first line of defense: no markup symbols, a
//! fixed section structure, and the mandatory closing verbatim. The
//! pipeline still sanitizes unconditionally — these instructions are
//! not trusted.

use relato_core::models::context::ReportContext;
use relato_core::models::extraction::ExtractedResult;
use relato_core::policy::EthicalPolicy;

/// System prompt for three-register narrative generation.
///
/// `has_visual_source` switches whether the narrative may weave in a
/// mention of the graphical score profile.
pub fn narrative_system_prompt(policy: &EthicalPolicy, has_visual_source: bool) -> String {
    let visual_clause = if has_visual_source {
        "Mencione levemente o perfil gráfico de forma integrada ao texto."
    } else {
        "Não faça qualquer menção a gráficos ou elementos visuais."
    };

    let allowed = policy.allowed_terms.join("; ");

    format!(
        "VOCÊ É UM REDATOR CLÍNICO E EDITORIAL SÊNIOR.\n\
         Seu objetivo é gerar um documento de alta elegância, pronto para \
         impressão, sem usar símbolos de programação ou markdown.\n\
         \n\
         DIRETRIZES DE FORMATAÇÃO (ESTRITAS)\n\
         1. PROIBIDO o uso de asteriscos (*), hashtags (#), underscores (_) \
         ou qualquer símbolo de marcação.\n\
         2. TÍTULOS DE SEÇÃO: apenas em MAIÚSCULAS em uma linha isolada.\n\
         3. LISTAS: não use marcadores; use frases conectivas fluidas ou \
         parágrafos distintos.\n\
         4. ESPAÇAMENTO: cada seção com parágrafos bem definidos.\n\
         \n\
         DIRETRIZES ÉTICAS\n\
         Nunca afirme conclusões diagnósticas. Prefira formulações como: {allowed}.\n\
         \n\
         LÓGICA DE IMAGEM\n\
         {visual_clause}\n\
         \n\
         ESTRUTURA DO RELATÓRIO\n\
         1. IDENTIFICAÇÃO\n\
         2. CONTEXTUALIZAÇÃO DA AVALIAÇÃO\n\
         3. RESUMO EXECUTIVO\n\
         4. ANÁLISE DOS DOMÍNIOS AVALIADOS\n\
         5. PONTOS FORTES E POTENCIALIDADES\n\
         6. ÁREAS DE ATENÇÃO E IMPLICAÇÕES\n\
         7. RECOMENDAÇÕES E DIRETRIZES\n\
         8. CONSIDERAÇÕES FINAIS\n\
         \n\
         ENCERRAMENTO ÉTICO (obrigatório, literal): \"{closing}\"\n\
         \n\
         FORMATO DA RESPOSTA\n\
         Responda SOMENTE com um objeto JSON com exatamente os campos \
         \"simple\", \"professional\" e \"technical\", cada um contendo uma \
         versão completa do texto. Nenhum texto fora do JSON.",
        closing = policy.mandatory_closing,
    )
}

/// User message for narrative generation: the validated extraction data
/// plus the authoring context.
pub fn narrative_user_message(
    context: &ReportContext,
    extracted: &[ExtractedResult],
) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string_pretty(extracted)?;
    Ok(format!(
        "DADOS TÉCNICOS: {data}\n\
         PROFISSÃO: {profession}\n\
         OBJETIVO: {objective}\n\
         \n\
         GERE AS TRÊS VERSÕES DO RELATÓRIO SEM QUALQUER MARCAÇÃO DE \
         ASTERISCOS OU HASHTAGS.",
        profession = context.profession.display_name(),
        objective = context.objective.display_name(),
    ))
}

/// System prompt for structured score extraction from clinical sources.
pub const EXTRACTION_SYSTEM_PROMPT: &str = "\
AGIR COMO ESPECIALISTA EM PSICOMETRIA E OCR CLÍNICO.\n\
OBJETIVO: extrair dados estruturados de tabelas de avaliação.\n\
INSTRUÇÕES:\n\
1. Identifique o nome do teste/instrumento.\n\
2. Capture todos os subtestes/índices e seus respectivos scores (bruto, padrão, percentil etc).\n\
3. Identifique a classificação (ex: Médio, Superior, Deficitário).\n\
4. Se houver múltiplos instrumentos na mesma fonte, extraia todos como itens separados.\n\
5. IGNORE textos informativos laterais; foque nos dados numéricos e tabulares.\n\
\n\
Responda SOMENTE com um array JSON. Cada item: {\"instrument\": string, \
\"category\": \"Cognitivo\" | \"TDAH\" | \"TEA\" | \"Aprendizagem\" | \"Linguagem\" | \
\"Emocional\" | \"Outro\", \"scores\": [{\"label\": string, \"value\": string}], \
\"classification\": string opcional}. Seja fidedigno aos nomes de escalas e pontuações.";
