use std::fmt;

/// Independently overridable named templates the default sets are composed of.
///
/// `Header` and `Function` are the entry points; the rest are partials the
/// bundled `function` templates include with `{{> name}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Header,
    Function,
    Call,
    Inputs,
    Results,
    Message,
    Type,
    Value,
}

impl Slot {
    pub const ALL: [Slot; 8] = [
        Slot::Header,
        Slot::Function,
        Slot::Call,
        Slot::Inputs,
        Slot::Results,
        Slot::Message,
        Slot::Type,
        Slot::Value,
    ];

    /// Registered template name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Function => "function",
            Self::Call => "call",
            Self::Inputs => "inputs",
            Self::Results => "results",
            Self::Message => "message",
            Self::Type => "type",
            Self::Value => "value",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrips() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(Slot::from_name("footer"), None);
    }
}
