/// Focus on the connections page: the three form fields, then the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Domain,
    Account,
    Token,
    /// Saved connection list
    List,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Domain => FormField::Account,
            FormField::Account => FormField::Token,
            FormField::Token => FormField::List,
            FormField::List => FormField::Domain,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Domain => FormField::List,
            FormField::Account => FormField::Domain,
            FormField::Token => FormField::Account,
            FormField::List => FormField::Token,
        }
    }

    /// Whether typed characters go into this field.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut focus = FormField::default();
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                FormField::Domain,
                FormField::Account,
                FormField::Token,
                FormField::List
            ]
        );
        assert_eq!(focus.next(), FormField::Domain);
        assert_eq!(FormField::Domain.previous(), FormField::List);
    }
}
