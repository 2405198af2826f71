/// Fields of the join form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinField {
    #[default]
    Name,
    Email,
    Organization,
    Interest,
}

impl JoinField {
    pub const ALL: [JoinField; 4] = [
        JoinField::Name,
        JoinField::Email,
        JoinField::Organization,
        JoinField::Interest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JoinField::Name => "Name *",
            JoinField::Email => "Email *",
            JoinField::Organization => "Organization",
            JoinField::Interest => "What draws you to regenerative innovation?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            JoinField::Name => "Your full name",
            JoinField::Email => "your@email.com",
            JoinField::Organization => "Company, university, or independent",
            JoinField::Interest => "Share your passion, expertise, or vision...",
        }
    }

    fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

/// Contact form of the join section; nothing typed here is stored anywhere
#[derive(Debug, Clone, Default)]
pub struct JoinForm {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub interest: String,
    pub field: JoinField,
}

impl JoinForm {
    /// Submit stays disabled until name and email are filled
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    pub fn value(&self, field: JoinField) -> &str {
        match field {
            JoinField::Name => &self.name,
            JoinField::Email => &self.email,
            JoinField::Organization => &self.organization,
            JoinField::Interest => &self.interest,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.field {
            JoinField::Name => &mut self.name,
            JoinField::Email => &mut self.email,
            JoinField::Organization => &mut self.organization,
            JoinField::Interest => &mut self.interest,
        }
    }

    pub fn push(&mut self, c: char) {
        self.value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.value_mut().pop();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.offset(1);
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.offset(-1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut JoinForm, s: &str) {
        s.chars().for_each(|c| form.push(c));
    }

    #[test]
    fn test_submit_needs_name_and_email() {
        let mut form = JoinForm::default();
        assert!(!form.can_submit());

        type_str(&mut form, "Nova");
        assert!(!form.can_submit());

        form.next_field();
        type_str(&mut form, "nova@aeonregenera.earth");
        assert!(form.can_submit());

        form.backspace();
        assert_eq!(form.email, "nova@aeonregenera.eart");
        assert!(form.can_submit());

        for _ in 0.."nova@aeonregenera.eart".len() {
            form.backspace();
        }
        assert!(form.email.is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_optional_fields_do_not_enable_submit() {
        let mut form = JoinForm {
            field: JoinField::Organization,
            ..Default::default()
        };
        type_str(&mut form, "MycoGrid");
        form.next_field();
        type_str(&mut form, "soil");
        assert!(!form.can_submit());
        assert_eq!(form.value(JoinField::Interest), "soil");
    }

    #[test]
    fn test_field_cycle_wraps() {
        let mut form = JoinForm::default();
        form.prev_field();
        assert_eq!(form.field, JoinField::Interest);
        form.next_field();
        assert_eq!(form.field, JoinField::Name);
    }
}
