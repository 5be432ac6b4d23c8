use super::error::BoardError;

/// Closed set of string labels backing a status or category enum.
pub trait Vocabulary: Copy + Sized + 'static {
    const ALL: &'static [Self];
    /// Name used in messages, e.g. `"status"`.
    const FIELD: &'static str;

    fn label(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.label() == raw.trim())
    }

    fn parse_field(raw: &str) -> Result<Self, BoardError> {
        Self::parse_named(Self::FIELD, raw)
    }

    /// Like [`Vocabulary::parse_field`], reporting errors under `field`.
    fn parse_named(field: &str, raw: &str) -> Result<Self, BoardError> {
        Self::parse(raw).ok_or_else(|| {
            let allowed: Vec<&str> = Self::ALL.iter().map(|value| value.label()).collect();
            BoardError::Validation(format!(
                "{} '{}' is not one of: {}",
                field,
                raw,
                allowed.join(", ")
            ))
        })
    }
}

/// Query parameter value, or `None` when it is absent or blank.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Collects missing required fields so a payload is rejected with one message.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|value| !value.trim().is_empty()) {
            Some(value) => value,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), BoardError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(BoardError::Validation(format!(
                "missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}

/// Rejects a patch value that would blank out a required field.
pub(crate) fn non_blank(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, BoardError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(BoardError::Validation(format!(
            "{field} must not be blank"
        ))),
        other => Ok(other),
    }
}
