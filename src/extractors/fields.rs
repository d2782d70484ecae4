// src/extractors/fields.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// One pattern-based extraction rule: a compiled regex with a single capture
/// group, plus the sentinel returned when the pattern does not match.
///
/// Rules are stateless and independent; every rule runs over the same
/// normalized text and never consults another rule's result. Bounded rules
/// encode their upper bound as a non-capturing `(?:BOUND|$)` tail, so the
/// capture stops at the first bound occurrence or at end-of-text.
pub struct FieldRule {
    regex: Regex,
    sentinel: &'static str,
}

impl FieldRule {
    fn new(pattern: &str, sentinel: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("Failed to compile field pattern"),
            sentinel,
        }
    }

    /// Returns the first capture group trimmed of whitespace, or the rule's
    /// sentinel when nothing matches. Never fails, never returns an empty
    /// match as success.
    pub fn apply(&self, text: &str) -> String {
        match self.regex.captures(text).and_then(|caps| caps.get(1)) {
            Some(capture) => capture.as_str().trim().to_string(),
            None => self.sentinel.to_string(),
        }
    }

    #[allow(dead_code)] // exercised by tests
    pub fn sentinel(&self) -> &'static str {
        self.sentinel
    }
}

// --- Extraction Rules (Lazy Static) ---
// Process number: the token right after "Processo" and its separator.
pub static NUM_PROCESSO: Lazy<FieldRule> = Lazy::new(|| {
    FieldRule::new(
        r"(?i)Processo\s*:\s*(\S+)",
        "Número de processo não encontrado",
    )
});

// Interested party and CPF: everything after "Interessado/CPF" up to the
// "Relator" heading, or to end-of-text when the heading is missing.
pub static INTERESSADO: Lazy<FieldRule> = Lazy::new(|| {
    FieldRule::new(
        r"(?i)Interessado/CPF\s*:\s*(.+?)(?:Relator|$)",
        "Interessado/CPF não encontrado",
    )
});

// Position held by the interested party, delimited by the next semicolon.
pub static CARGO: Lazy<FieldRule> =
    Lazy::new(|| FieldRule::new(r"(?i)no cargo\s+(.+?);", "Cargo não encontrado"));

// Organ/entity, bounded by the "Natureza" heading or end-of-text.
pub static ORGAO_ENTIDADE: Lazy<FieldRule> = Lazy::new(|| {
    FieldRule::new(
        r"(?i)Órgão/Entidade\s*:\s*(.+?)(?:Natureza|$)",
        "Órgão/Entidade não encontrado",
    )
});

// Full vote body: everything after the first "VOTO". Unbounded; spans the
// rest of the text. Intermediate value only, never persisted as a column.
pub static VOTO: Lazy<FieldRule> =
    Lazy::new(|| FieldRule::new(r"(?is)VOTO\s*(.+)", "Voto não encontrado"));

// Vote conclusion: starts at "Conclusos os autos", bounded by the
// "Tribunal de Contas" closing formula or end-of-text.
pub static CONCLUSAO_VOTO: Lazy<FieldRule> = Lazy::new(|| {
    FieldRule::new(
        r"(?is)(Conclusos os autos\s*.+?)(?:Tribunal de Contas|$)",
        "Conclusão do voto não encontrada",
    )
});

// --- Data Structures ---
/// The extracted metadata for one document. Every field is always populated:
/// a rule that fails to match contributes its sentinel instead. Field names
/// double as CSV column headers of the complete-results table.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRecord {
    pub num_processo: String,
    pub interessado: String,
    pub cargo_do_interessado: String,
    pub orgao_entidade: String,
    pub conclusao_voto: String,
}

impl FieldRecord {
    /// Runs the persisted extraction rules over one normalized text.
    pub fn extract(text: &str) -> Self {
        Self {
            num_processo: NUM_PROCESSO.apply(text),
            interessado: INTERESSADO.apply(text),
            cargo_do_interessado: CARGO.apply(text),
            orgao_entidade: ORGAO_ENTIDADE.apply(text),
            conclusao_voto: CONCLUSAO_VOTO.apply(text),
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Processo: 123/2020 Interessado/CPF: Jane Doe; CPF 000 \
        Relator: X no cargo Analista; Órgão/Entidade: ABC Natureza: Y \
        RELATÓRIO E VOTO Conclusos os autos em 01/01/2020. Tribunal de Contas decide...";

    #[test]
    fn test_num_processo_token_after_label() {
        assert_eq!(NUM_PROCESSO.apply(SAMPLE), "123/2020");
    }

    #[test]
    fn test_interessado_bounded_by_relator() {
        assert_eq!(INTERESSADO.apply(SAMPLE), "Jane Doe; CPF 000");
    }

    #[test]
    fn test_interessado_runs_to_end_without_bound() {
        let text = "Interessado/CPF: Maria Souza, CPF 111.222.333-44";
        assert_eq!(INTERESSADO.apply(text), "Maria Souza, CPF 111.222.333-44");
    }

    #[test]
    fn test_cargo_stops_at_semicolon() {
        assert_eq!(CARGO.apply(SAMPLE), "Analista");
    }

    #[test]
    fn test_orgao_bounded_by_natureza() {
        assert_eq!(ORGAO_ENTIDADE.apply(SAMPLE), "ABC");
    }

    #[test]
    fn test_voto_spans_to_end() {
        let voto = VOTO.apply(SAMPLE);
        assert!(voto.starts_with("Conclusos os autos em 01/01/2020."));
        assert!(voto.ends_with("decide..."));
    }

    #[test]
    fn test_conclusao_bounded_by_tribunal() {
        assert_eq!(
            CONCLUSAO_VOTO.apply(SAMPLE),
            "Conclusos os autos em 01/01/2020."
        );
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let text = "processo: 9/99 órgão/entidade: Prefeitura Natureza: Z";
        assert_eq!(NUM_PROCESSO.apply(text), "9/99");
        assert_eq!(ORGAO_ENTIDADE.apply(text), "Prefeitura");
    }

    #[test]
    fn test_every_rule_falls_back_to_its_sentinel() {
        let text = "documento sem nenhum campo reconhecível";

        assert_eq!(NUM_PROCESSO.apply(text), NUM_PROCESSO.sentinel());
        assert_eq!(INTERESSADO.apply(text), INTERESSADO.sentinel());
        assert_eq!(CARGO.apply(text), CARGO.sentinel());
        assert_eq!(ORGAO_ENTIDADE.apply(text), ORGAO_ENTIDADE.sentinel());
        assert_eq!(VOTO.apply(text), VOTO.sentinel());
        assert_eq!(CONCLUSAO_VOTO.apply(text), CONCLUSAO_VOTO.sentinel());
    }

    #[test]
    fn test_record_from_sample_text() {
        let record = FieldRecord::extract(SAMPLE);

        assert_eq!(record.num_processo, "123/2020");
        assert_eq!(record.interessado, "Jane Doe; CPF 000");
        assert_eq!(record.cargo_do_interessado, "Analista");
        assert_eq!(record.orgao_entidade, "ABC");
        assert_eq!(record.conclusao_voto, "Conclusos os autos em 01/01/2020.");
    }

    #[test]
    fn test_record_on_unrecognizable_text_is_all_sentinels() {
        let record = FieldRecord::extract("lorem ipsum dolor sit amet");

        assert_eq!(record.num_processo, NUM_PROCESSO.sentinel());
        assert_eq!(record.interessado, INTERESSADO.sentinel());
        assert_eq!(record.cargo_do_interessado, CARGO.sentinel());
        assert_eq!(record.orgao_entidade, ORGAO_ENTIDADE.sentinel());
        assert_eq!(record.conclusao_voto, CONCLUSAO_VOTO.sentinel());
    }
}
