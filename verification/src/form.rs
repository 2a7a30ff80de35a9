//! Form step — composes the field validators and the score-band check.

use crate::error::VerificationError;
use crate::score::ScoreEngine;
use crate::validators;
use antifraude_types::{FieldKind, FieldValidationResult, FormFields, ScoreResult};

const CPF_VALID_MESSAGE: &str = "CPF válido!";
const NAME_VALID_MESSAGE: &str = "Nome válido!";
const ADDRESS_VALID_MESSAGE: &str = "Endereço válido!";
const PHONE_VALID_MESSAGE: &str = "Chip Válido!";

/// Atomically recomputed outcome of one form Verify action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    /// One result per field, in screen order. Every failing field surfaces
    /// its own message; no short-circuiting.
    pub results: Vec<FieldValidationResult>,
    /// The score computed for the CPF. `None` when the CPF format did not
    /// match, in which case no score is drawn.
    pub score: Option<ScoreResult>,
    /// Logical AND of all field checks plus the score band.
    pub passed: bool,
}

impl FormOutcome {
    /// The result for one field.
    pub fn result(&self, field: FieldKind) -> &FieldValidationResult {
        self.results
            .iter()
            .find(|r| r.field == field)
            .expect("outcome carries all four fields")
    }
}

pub struct FormVerifier;

impl FormVerifier {
    /// Validate all four fields and the score band together.
    pub fn verify(&self, fields: &FormFields, scores: &mut ScoreEngine) -> FormOutcome {
        let mut score = None;
        let mut cpf_error = VerificationError::CpfFormatInvalid;
        let cpf_valid = if validators::is_valid_cpf(&fields.cpf) {
            let result = scores.score_cpf(&fields.cpf);
            score = Some(result);
            if !result.passes() {
                cpf_error = VerificationError::ScoreBandFail(result.band);
            }
            result.passes()
        } else {
            false
        };

        let name_valid = validators::required_text(&fields.name);
        let address_valid = validators::required_text(&fields.address);
        let phone_valid = validators::phone_parity_ok(&fields.phone);

        let results = vec![
            field_result(FieldKind::Cpf, cpf_valid, CPF_VALID_MESSAGE, cpf_error),
            field_result(
                FieldKind::Name,
                name_valid,
                NAME_VALID_MESSAGE,
                VerificationError::RequiredMissing(FieldKind::Name),
            ),
            field_result(
                FieldKind::Address,
                address_valid,
                ADDRESS_VALID_MESSAGE,
                VerificationError::RequiredMissing(FieldKind::Address),
            ),
            field_result(
                FieldKind::Phone,
                phone_valid,
                PHONE_VALID_MESSAGE,
                VerificationError::PhoneParityInvalid,
            ),
        ];

        FormOutcome {
            passed: results.iter().all(|r| r.valid),
            results,
            score,
        }
    }
}

fn field_result(
    field: FieldKind,
    valid: bool,
    success_message: &str,
    error: VerificationError,
) -> FieldValidationResult {
    FieldValidationResult {
        field,
        valid,
        message: if valid {
            success_message.to_string()
        } else {
            error.to_string()
        },
    }
}
