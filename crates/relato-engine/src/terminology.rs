//! Document terminology policy.
//!
//! Only certain professions are legally permitted to call the document
//! by the restricted noun; everyone else gets the generic noun. The
//! substitution runs downstream of generation, unconditionally — the
//! generator is instructed not to use the restricted term, but the
//! rule is never assumed satisfied by a prompt.

use relato_core::error::CoreError;
use relato_core::matcher::WordMatcher;
use relato_core::models::context::Profession;
use relato_core::policy::EthicalPolicy;

/// The compiled terminology rule for one policy set.
#[derive(Debug, Clone)]
pub struct Terminology {
    restricted: WordMatcher,
    restricted_term: String,
    generic_term: String,
    permitted: Vec<Profession>,
}

impl Terminology {
    pub fn new(policy: &EthicalPolicy) -> Result<Self, CoreError> {
        Ok(Self {
            restricted: WordMatcher::new(&policy.restricted_term)?,
            restricted_term: policy.restricted_term.clone(),
            generic_term: policy.generic_term.clone(),
            permitted: policy.restricted_term_roles.clone(),
        })
    }

    pub fn is_permitted(&self, profession: Profession) -> bool {
        self.permitted.contains(&profession)
    }

    /// The single document noun `profession` may use.
    pub fn document_term(&self, profession: Profession) -> &str {
        if self.is_permitted(profession) {
            &self.restricted_term
        } else {
            &self.generic_term
        }
    }

    /// Replace every case-insensitive whole-word occurrence of the
    /// restricted term when `profession` is not permitted to use it.
    /// Identity transform for permitted roles.
    pub fn enforce(&self, text: &str, profession: Profession) -> String {
        if self.is_permitted(profession) {
            text.to_string()
        } else {
            self.restricted.replace_all(text, &self.generic_term)
        }
    }
}
