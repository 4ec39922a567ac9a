/// A single rejected input field, reported back so the client can re-render
/// the form next to the offending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: String,
}

/// Every violation found while validating one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, code: impl ToString) -> Self {
        let mut errors = Self::new();
        errors.add(field, code);
        errors
    }

    pub fn add(&mut self, field: &'static str, code: impl ToString) {
        self.0.push(FieldViolation {
            field,
            code: code.to_string(),
        });
    }

    /// Records the error of a failed field check and yields the value otherwise.
    pub fn check<T, E: ToString>(&mut self, field: &'static str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has(&self, field: &str, code: &str) -> bool {
        self.0.iter().any(|v| v.field == field && v.code == code)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.code))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_collect_violations_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "movie.title_empty");
        errors.add("price", "price.negative");

        assert_eq!(errors.violations().len(), 2);
        assert_eq!(errors.violations()[0].field, "title");
        assert!(errors.has("price", "price.negative"));
        assert_eq!(
            errors.to_string(),
            "title: movie.title_empty, price: price.negative"
        );
    }

    #[test]
    fn should_pass_through_valid_results() {
        let mut errors = ValidationErrors::new();
        let value = errors.check::<_, String>("rating", Ok(4));

        assert_eq!(value, Some(4));
        assert!(errors.is_empty());
    }

    #[test]
    fn should_record_failed_results() {
        let mut errors = ValidationErrors::new();
        let value: Option<u8> = errors.check("rating", Err("review.rating_out_of_range"));

        assert!(value.is_none());
        assert!(errors.has("rating", "review.rating_out_of_range"));
    }
}
